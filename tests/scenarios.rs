//! End-to-end track selection scenarios through the public API.

use hls_track_select::{
    AllVariants, GroupingPolicy, MasterPlaylist, SelectorConfig, SelectorError, TrackEvent,
    TrackSelector, Variant, VariantClassifier,
};

fn select(playlist: &MasterPlaylist, fast_network: Option<bool>) -> (Vec<TrackEvent>, GroupingPolicy) {
    let selector = TrackSelector::new(&SelectorConfig::default(), AllVariants, fast_network);
    let mut events: Vec<TrackEvent> = Vec::new();
    let selection = selector.select_tracks(playlist, &mut events).unwrap();
    (events, selection.policy)
}

fn three_rung_ladder() -> MasterPlaylist {
    MasterPlaylist::new(
        None,
        vec![
            Variant::new(0, "360p.m3u8", 400_000, None).with_resolution(640, 360),
            Variant::new(1, "720p.m3u8", 1_500_000, None).with_resolution(1280, 720),
            Variant::new(2, "1080p.m3u8", 3_000_000, None).with_resolution(1920, 1080),
        ],
    )
}

#[test]
fn audio_only_variant_dropped_when_video_present() {
    let playlist = MasterPlaylist::new(
        None,
        vec![
            Variant::new(0, "audio.m3u8", 200_000, Some("mp4a.40.2")),
            Variant::new(1, "480p.m3u8", 800_000, Some("avc1,mp4a")).with_resolution(854, 480),
        ],
    );

    let candidates: Vec<&Variant> = playlist.variants.iter().collect();
    let classification = VariantClassifier::default().classify(&candidates);
    assert_eq!(classification.video_bearing, vec![&playlist.variants[1]]);
    assert_eq!(classification.audio_only, vec![&playlist.variants[0]]);

    let (events, policy) = select(&playlist, Some(false));
    assert_eq!(policy, GroupingPolicy::VideoOnly);
    assert_eq!(
        events,
        vec![TrackEvent::Fixed {
            variant: playlist.variants[1].clone()
        }]
    );
}

#[test]
fn slow_network_starts_on_first_variant() {
    let playlist = three_rung_ladder();
    let (events, policy) = select(&playlist, Some(false));

    assert_eq!(policy, GroupingPolicy::VideoOnly);
    assert_eq!(events.len(), 4);
    assert_eq!(
        events[0],
        TrackEvent::Adaptive {
            variants: playlist.variants.clone(),
            default_index: 0,
        }
    );
    for (event, variant) in events[1..].iter().zip(&playlist.variants) {
        assert_eq!(event.fixed_track(), Some(variant));
    }
}

#[test]
fn fast_network_starts_above_one_megabit() {
    let playlist = three_rung_ladder();
    let (events, _) = select(&playlist, Some(true));

    let (variants, default_index) = events[0].adaptive_track().unwrap();
    assert_eq!(variants.len(), 3);
    assert_eq!(default_index, 1);
    assert_eq!(variants[default_index].bitrate, 1_500_000);
    assert_eq!(events.iter().filter(|e| !e.is_adaptive()).count(), 3);
}

#[test]
fn unavailable_network_probe_reads_as_slow() {
    let playlist = three_rung_ladder();
    let (events, _) = select(&playlist, None);
    assert_eq!(events[0].adaptive_track().map(|(_, i)| i), Some(0));
}

#[test]
fn undeclared_variants_kept_unchanged() {
    let playlist = MasterPlaylist::new(
        None,
        vec![
            Variant::new(0, "a.m3u8", 300_000, None),
            Variant::new(1, "b.m3u8", 600_000, None),
            Variant::new(2, "c.m3u8", 900_000, Some("")),
        ],
    );

    let candidates: Vec<&Variant> = playlist.variants.iter().collect();
    let classification = VariantClassifier::default().classify(&candidates);
    assert!(classification.video_bearing.is_empty());
    assert!(classification.audio_only.is_empty());

    let (events, policy) = select(&playlist, Some(false));
    assert_eq!(policy, GroupingPolicy::KeepAll);
    let (variants, _) = events[0].adaptive_track().unwrap();
    assert_eq!(variants, playlist.variants.as_slice());
    assert_eq!(events.len(), 4);
}

#[test]
fn empty_playlist_emits_nothing() {
    let playlist = MasterPlaylist::new(None, Vec::new());
    let (events, policy) = select(&playlist, Some(true));
    assert!(events.is_empty());
    assert_eq!(policy, GroupingPolicy::KeepAll);
}

#[test]
fn all_audio_only_exposed_as_audio_ladder() {
    let playlist = MasterPlaylist::new(
        None,
        vec![
            Variant::new(0, "aac-lo.m3u8", 64_000, Some("mp4a.40.5")),
            Variant::new(1, "aac-hi.m3u8", 192_000, Some("mp4a.40.2")),
        ],
    );

    let (events, policy) = select(&playlist, Some(true));
    assert_eq!(policy, GroupingPolicy::KeepAll);
    // Nothing exceeds the fast-network floor, so the first variant is the default
    assert_eq!(events[0].adaptive_track().map(|(_, i)| i), Some(0));
    assert_eq!(events.len(), 3);
}

#[test]
fn mixed_ambiguous_and_audio_only() {
    let playlist = MasterPlaylist::new(
        None,
        vec![
            Variant::new(0, "main-lo.m3u8", 900_000, None),
            Variant::new(1, "audio.m3u8", 128_000, Some("mp4a.40.2")),
            Variant::new(2, "main-hi.m3u8", 2_400_000, Some("ac-3")),
        ],
    );

    let (events, policy) = select(&playlist, Some(true));
    assert_eq!(policy, GroupingPolicy::DropAudioOnly);

    let (variants, default_index) = events[0].adaptive_track().unwrap();
    let indices: Vec<usize> = variants.iter().map(|v| v.index).collect();
    assert_eq!(indices, vec![0, 2]);
    assert_eq!(default_index, 1);
}

#[test]
fn playlist_from_json_runs_through_selector() {
    let json = r#"{
        "base_uri": "https://cdn.example.com/show/master.m3u8",
        "variants": [
            { "uri": "audio/prog_index.m3u8", "bitrate": 96000, "codecs": "mp4a.40.2" },
            { "uri": "v1/prog_index.m3u8", "bitrate": 1200000, "width": 960, "height": 540,
              "codecs": "avc1.4d401f,mp4a.40.2" },
            { "uri": "v2/prog_index.m3u8", "bitrate": 600000, "width": 640, "height": 360,
              "codecs": "avc1.42c01e,mp4a.40.2" }
        ]
    }"#;

    let playlist = MasterPlaylist::from_json(json).unwrap();
    let (events, policy) = select(&playlist, Some(true));

    assert_eq!(policy, GroupingPolicy::VideoOnly);
    let (variants, default_index) = events[0].adaptive_track().unwrap();
    assert_eq!(variants[0].uri, "v1/prog_index.m3u8");
    assert_eq!(default_index, 0);
}

#[test]
fn picker_rejects_empty_set() {
    let picker = hls_track_select::DefaultVariantPicker::default();
    let result = picker.pick(&[], hls_track_select::NetworkCondition::fast());
    assert!(matches!(result, Err(SelectorError::EmptyVariantSet)));
}
