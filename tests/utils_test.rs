use chrono::{TimeZone, Utc};
use espotifai::types::{MusicInfo, PlaylistRef};
use espotifai::utils::*;
use espotifai::{ApiError, ErrorKind};
use reqwest::header::{HeaderMap, HeaderValue, RETRY_AFTER};

// Helper function to create a test track
fn create_test_music(name: &str, artist: &str, duration_ms: u64) -> MusicInfo {
    MusicInfo::new(name, artist)
        .with_id(format!("{}_id", name.to_lowercase().replace(' ', "_")))
        .with_album("Test Album")
        .with_duration_ms(duration_ms)
}

#[test]
fn test_require_non_empty() {
    assert!(require_non_empty("playlist name", "Road Trip").is_ok());

    let err = require_non_empty("playlist name", "").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(
        err.to_string(),
        "Invalid argument: playlist name must not be empty"
    );

    // Whitespace only counts as empty
    assert!(require_non_empty("token", " \t\n").is_err());
}

#[test]
fn test_validate_music() {
    assert!(validate_music(&MusicInfo::new("Song A", "X")).is_ok());
    // An artist is not required, a name is
    assert!(validate_music(&MusicInfo::new("Song A", "")).is_ok());
    assert!(matches!(
        validate_music(&MusicInfo::new("", "X")),
        Err(ApiError::InvalidArgument(_))
    ));
}

#[test]
fn test_parse_retry_after() {
    let mut headers = HeaderMap::new();
    assert_eq!(parse_retry_after(&headers), None);

    headers.insert(RETRY_AFTER, HeaderValue::from_static("30"));
    assert_eq!(parse_retry_after(&headers), Some(30));

    headers.insert(RETRY_AFTER, HeaderValue::from_static(" 7 "));
    assert_eq!(parse_retry_after(&headers), Some(7));

    // HTTP dates are not supported
    headers.insert(
        RETRY_AFTER,
        HeaderValue::from_static("Wed, 21 Oct 2015 07:28:00 GMT"),
    );
    assert_eq!(parse_retry_after(&headers), None);
}

#[test]
fn test_panic_message() {
    let static_payload: Box<dyn std::any::Any + Send> = Box::new("boom");
    assert_eq!(panic_message(static_payload.as_ref()), "boom");

    let owned_payload: Box<dyn std::any::Any + Send> = Box::new(String::from("bang"));
    assert_eq!(panic_message(owned_payload.as_ref()), "bang");

    let other_payload: Box<dyn std::any::Any + Send> = Box::new(42u8);
    assert_eq!(panic_message(other_payload.as_ref()), "unknown panic");
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0), "-");
    assert_eq!(format_duration(999), "0:00");
    assert_eq!(format_duration(183_968), "3:03");
    assert_eq!(format_duration(3_600_000), "60:00");
}

#[test]
fn test_music_table_rows() {
    let musics = vec![
        create_test_music("Song A", "X", 61_000),
        create_test_music("Song B", "Y", 0),
    ];
    let rows = music_table_rows(&musics);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Song A");
    assert_eq!(rows[0].artist, "X");
    assert_eq!(rows[0].album, "Test Album");
    assert_eq!(rows[0].length, "1:01");
    assert_eq!(rows[0].id, "song_a_id");
    assert_eq!(rows[1].length, "-");
}

#[test]
fn test_playlist_table_rows() {
    let playlists = vec![PlaylistRef {
        name: "Road Trip".to_string(),
        owner: "alice".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap(),
    }];
    let rows = playlist_table_rows(&playlists);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Road Trip");
    assert_eq!(rows[0].owner, "alice");
    assert_eq!(rows[0].created, "2024-03-09 14:05");
}

#[test]
fn test_music_info_equality_is_field_equality() {
    let a = create_test_music("Song A", "X", 1000);
    let b = create_test_music("Song A", "X", 1000);
    let c = create_test_music("Song A", "X", 2000);

    assert_eq!(a, b);
    assert_ne!(a, c);
}
