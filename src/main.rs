//! HLS track selection harness
//!
//! Runs track selection over a master playlist given as JSON and prints the
//! emitted tracks as JSON lines on stdout. Logs go to stderr.

use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hls_track_select::config_file::{generate_default_config, ConfigFile};
use hls_track_select::{MasterPlaylist, Result, SelectorConfig, TrackEvent, TrackSelector};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
const APP_NAME: &str = "hls-track-select";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Network {
    Fast,
    Slow,
    Unknown,
}

impl Network {
    fn probe(self) -> Option<bool> {
        match self {
            Network::Fast => Some(true),
            Network::Slow => Some(false),
            Network::Unknown => None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Master playlist as JSON ({"variants": [{"uri", "bitrate", "width", "height", "codecs"}]})
    #[arg(short, long, required_unless_present = "generate_config")]
    variants: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Current network state
    #[arg(short, long, value_enum, default_value_t = Network::Unknown)]
    network: Network,

    /// Write a default configuration file to this path and exit
    #[arg(long)]
    generate_config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.generate_config {
        generate_default_config(path)?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    let (config, log_format, warning) = load_config(&args.config);
    init_logging(&config.log_level, &log_format);

    if let Some(warning) = warning {
        tracing::warn!("{}", warning);
    }

    tracing::info!("{} v{} starting", APP_NAME, VERSION);
    tracing::debug!("Configuration loaded: {:?}", config);

    let Some(variants_path) = &args.variants else {
        return Ok(());
    };
    let playlist = MasterPlaylist::from_file(variants_path)?;
    tracing::info!(
        "Loaded {} variants from {}",
        playlist.len(),
        variants_path.display()
    );

    let selector = TrackSelector::from_config(&config, args.network.probe());
    let mut events: Vec<TrackEvent> = Vec::new();
    let selection = selector.select_tracks(&playlist, &mut events)?;

    tracing::info!(
        "Selected {} of {} variants ({:?}), default index {:?}",
        selection.enabled.len(),
        playlist.len(),
        selection.policy,
        selection.default_index
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for event in &events {
        serde_json::to_writer(&mut out, event)?;
        out.write_all(b"\n")?;
    }

    Ok(())
}

/// Load the configuration file, falling back to defaults
///
/// Returns the warning to log once logging is up when the defaults are used.
fn load_config(path: &Path) -> (SelectorConfig, String, Option<String>) {
    let defaults = || (SelectorConfig::default(), "pretty".to_string());

    if !path.exists() {
        let (config, format) = defaults();
        let warning = format!("Config file {} not found. Using defaults.", path.display());
        return (config, format, Some(warning));
    }

    match ConfigFile::from_file(path).and_then(|cf| {
        let format = cf.log_format().to_string();
        Ok((cf.into_selector_config()?, format))
    }) {
        Ok((config, format)) => (config, format, None),
        Err(e) => {
            let (config, format) = defaults();
            let warning = format!(
                "Failed to load config file {}: {}. Using defaults.",
                path.display(),
                e
            );
            (config, format, Some(warning))
        }
    }
}

/// Initialize logging with tracing
fn init_logging(level: &str, format: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("hls_track_select={}", level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
