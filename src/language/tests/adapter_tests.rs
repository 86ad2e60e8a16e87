//! Unit tests for the offline and scripted detection adapters.

use crate::language::{
    adapters::{ConfiguredDetector, ScriptedLanguageDetector, VocabularyDetector},
    ports::{DetectionError, LanguageDetector},
};
use rstest::rstest;

#[rstest]
#[case("saya mau pergi", "id")]
#[case("Good morning", "en")]
#[case("Selamat pagi", "en")]
#[case("mereka pergi", "id")]
#[case("Kita makan", "id")]
#[case("nama budi", "en")]
#[tokio::test(flavor = "multi_thread")]
async fn vocabulary_detector_reports_by_marker_presence(#[case] text: &str, #[case] code: &str) {
    let detected = VocabularyDetector::new()
        .detect(text)
        .await
        .expect("vocabulary detector never fails");

    assert_eq!(detected.code(), code);
    assert_eq!(detected.confidence(), None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn scripted_detector_uses_script_then_default() {
    let detector = ScriptedLanguageDetector::new("en");
    detector
        .script("Selamat pagi", "id")
        .expect("scripting should succeed");

    let scripted = detector.detect("Selamat pagi").await.expect("detect");
    let unscripted = detector.detect("Good night").await.expect("detect");

    assert_eq!(scripted.code(), "id");
    assert_eq!(unscripted.code(), "en");
    assert_eq!(
        detector.calls().expect("calls should be readable"),
        vec!["Selamat pagi".to_owned(), "Good night".to_owned()]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn scripted_detector_can_fail_and_recover() {
    let detector = ScriptedLanguageDetector::default();
    detector.set_failing(true).expect("toggle should succeed");

    let failed = detector.detect("hello").await;
    assert!(matches!(failed, Err(DetectionError::Unavailable(_))));

    detector.set_failing(false).expect("toggle should succeed");
    let recovered = detector.detect("hello").await.expect("detect");
    assert_eq!(recovered.code(), "en");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn configured_detector_delegates_to_vocabulary() {
    let detector = ConfiguredDetector::Vocabulary(VocabularyDetector::new());

    let detected = detector.detect("ini buku saya").await.expect("detect");

    assert_eq!(detected.code(), "id");
}
