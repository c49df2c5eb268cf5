//! HLS codec attribute handling
//!
//! Parses the `CODECS` attribute of an `#EXT-X-STREAM-INF` entry into
//! individual codec identifiers and answers prefix queries on them.

/// Prefix shared by all H.264 codec identifiers (`avc1.64001f`, `avc3...`)
pub const VIDEO_CODEC_PREFIX: &str = "avc";

/// Prefix shared by all MPEG-4 audio codec identifiers (`mp4a.40.2`, ...)
pub const AUDIO_CODEC_PREFIX: &str = "mp4a";

macro_rules! regex {
    ($re:literal $(,)?) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($re).unwrap())
    }};
}

/// Split a `CODECS` attribute value into its codec identifiers.
///
/// Identifiers are separated by commas with optional surrounding whitespace.
/// A missing, empty or whitespace-only attribute yields an empty list, and
/// empty entries (`"avc1,,mp4a"`) are skipped. Never fails.
pub fn parse_codecs(attribute: Option<&str>) -> Vec<String> {
    let Some(attribute) = attribute else {
        return Vec::new();
    };

    regex!(r"\s*,\s*")
        .split(attribute.trim())
        .filter(|codec| !codec.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join codec identifiers back into a `CODECS` attribute value
pub fn format_codecs(codecs: &[String]) -> Option<String> {
    if codecs.is_empty() {
        None
    } else {
        Some(codecs.join(","))
    }
}

/// Check whether any codec identifier starts with `prefix` (case-sensitive)
pub fn has_codec_with_prefix(codecs: &[String], prefix: &str) -> bool {
    codecs.iter().any(|codec| codec.starts_with(prefix))
}
