use labcheck_registry::{keywords_for, parameters_for, supported_categories, Category};
use labcheck_report::{assess_text, ErrorCode};
use labcheck_validate::validate_lab_type;
use proptest::prelude::*;
use tests::sample_text;

fn category() -> impl Strategy<Value = Category> {
    prop::sample::select(supported_categories().to_vec())
}

// Every keyword and parameter name of every category, plus filler.
fn dictionary_words() -> Vec<&'static str> {
    let mut words = vec!["the", "and", "of", "in", "with", "cake", "our", "blog"];
    for &c in supported_categories() {
        words.extend(keywords_for(c));
        words.extend(parameters_for(c).iter().flat_map(|p| p.names()));
    }
    words
}

proptest! {
    // Naming parameters is not reporting them: without numbers or result
    // words, prose built from the dictionaries themselves never passes.
    #[test]
    fn dictionary_prose_without_values_is_never_accepted(
        words in prop::collection::vec(prop::sample::select(dictionary_words()), 1..40),
        declared in category(),
    ) {
        let text = words.join(" ");
        let result = validate_lab_type(&text, declared);
        prop_assert!(!result.is_valid, "{text:?} accepted as {declared}: {result:?}");
    }

    // Prose built only from words outside every dictionary never passes.
    #[test]
    fn unrelated_words_are_never_accepted(
        words in prop::collection::vec(
            prop::sample::select(vec!["milk", "eggs", "bread", "apples", "coffee", "garden", "train"]),
            0..40,
        ),
        declared in category(),
    ) {
        let text = words.join(" ");
        prop_assert!(!validate_lab_type(&text, declared).is_valid);
        let err = assess_text(&text, declared).unwrap_err();
        prop_assert_eq!(err.code, ErrorCode::InvalidLabImage);
    }

    // Surrounding a real report with noise keeps it accepted.
    #[test]
    fn padding_does_not_reject_a_report(
        actual in category(),
        prefix in "[a-z ]{0,40}",
        suffix in "[0-9 .,:]{0,40}",
    ) {
        let text = format!("{prefix}\n{}\n{suffix}", sample_text(actual));
        prop_assert!(validate_lab_type(&text, actual).is_valid);
    }

    #[test]
    fn reported_percent_tracks_confidence(actual in category(), declared in category()) {
        let result = validate_lab_type(sample_text(actual), declared);
        match assess_text(sample_text(actual), declared) {
            Ok(ok) => prop_assert_eq!(ok, result),
            Err(err) => {
                prop_assert_eq!(
                    err.details.confidence,
                    (result.confidence * 100.0).round() as u8
                );
            }
        }
    }
}
