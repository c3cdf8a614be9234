use std::time::Duration;

use super::track;

#[test]
fn media_url_requires_a_non_empty_file_url() {
    let mut record = track("a", "Alpha", None);
    assert_eq!(record.media_url(), Some("https://media.example/a.mp3"));

    record.file_url = Some(String::new());
    assert_eq!(record.media_url(), None);

    record.file_url = None;
    assert_eq!(record.media_url(), None);
}

#[test]
fn companion_video_url_is_not_a_playable_source() {
    let mut record = track("a", "Alpha", None);
    record.file_url = None;
    record.youtube_url = Some("https://youtube.example/watch?v=a".to_string());

    assert_eq!(record.media_url(), None);
}

#[test]
fn length_rejects_unusable_durations() {
    assert_eq!(
        track("a", "Alpha", Some(90.5)).length(),
        Some(Duration::from_secs_f64(90.5))
    );
    assert_eq!(track("a", "Alpha", Some(-3.0)).length(), None);
    assert_eq!(track("a", "Alpha", Some(f64::NAN)).length(), None);
    assert_eq!(track("a", "Alpha", None).length(), None);
}
