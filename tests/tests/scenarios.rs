// End-to-end checks across the registry, validators and report layer.

use labcheck_registry::{supported_categories, Category};
use labcheck_report::{assess_parsed_values, assess_text, ConfidenceTier, ErrorCode};
use labcheck_validate::{
    best_alternative, default_config, rank_text, validate_lab_type, validate_parsed_values,
};
use pretty_assertions::assert_eq;
use tests::{sample_text, sample_values, SHOPPING_LIST};

fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

#[test]
fn every_sample_is_accepted_by_both_validators() {
    init_test_logger();
    for &category in supported_categories() {
        let text = validate_lab_type(sample_text(category), category);
        assert!(text.is_valid, "{category} text rejected: {text:?}");
        assert!(text.confidence > 0.5);

        let values = validate_parsed_values(&sample_values(category), category);
        assert!(values.is_valid, "{category} values rejected: {values:?}");
        assert!(values.confidence > 0.5);
    }
}

#[test]
fn value_fixtures_parse_to_full_panels() {
    for &category in supported_categories() {
        let values = sample_values(category);
        let coverage = default_config().coverage.get(category);
        assert!(
            values.len() >= coverage.min_parameters,
            "{category} fixture has {} values",
            values.len()
        );
    }
}

#[test]
fn each_sample_ranks_its_own_category_first() {
    for &category in supported_categories() {
        let ranking = rank_text(sample_text(category), default_config());
        assert_eq!(ranking[0].0, category);
        assert_eq!(best_alternative(&ranking, category), None);
    }
}

#[test]
fn every_wrong_declaration_is_a_mismatch_naming_the_right_type() {
    init_test_logger();
    for &actual in supported_categories() {
        for &declared in supported_categories().iter().filter(|&&c| c != actual) {
            let err = assess_text(sample_text(actual), declared).unwrap_err();
            assert_eq!(err.code, ErrorCode::MismatchedLabType, "{actual} as {declared}");
            assert_eq!(err.details.selected_lab_type, declared.display_name());
            let hint = format!("This looks like a {} report", actual.display_name());
            assert!(err.details.suggestions.contains(&hint), "{:?}", err.details);

            let err = assess_parsed_values(&sample_values(actual), declared).unwrap_err();
            assert_eq!(err.code, ErrorCode::MismatchedLabType);
        }
    }
}

#[test]
fn shopping_list_is_not_a_lab_report_of_any_kind() {
    for &category in supported_categories() {
        let result = validate_lab_type(SHOPPING_LIST, category);
        assert!(!result.is_valid);
        assert!(result.confidence < 1.0);

        let err = assess_text(SHOPPING_LIST, category).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidLabImage);
        assert_eq!(err.details.confidence_tier, ConfidenceTier::Low);
    }
}

#[test]
fn cbc_sample_matches_expected_terms() {
    let result = validate_lab_type(sample_text(Category::Cbc), Category::Cbc);
    assert_eq!(result.confidence, 1.0);
    assert_eq!(
        result.matched_keywords,
        vec!["complete blood count", "cbc", "blood count"]
    );
    assert_eq!(
        result.matched_parameters,
        vec!["hemoglobin", "wbc", "rbc", "platelet", "hematocrit", "mcv"]
    );
}

#[test]
fn urinalysis_without_second_keyword_still_passes() {
    let result = validate_lab_type(sample_text(Category::Urinalysis), Category::Urinalysis);
    assert_eq!(result.matched_keywords, vec!["urinalysis"]);
    assert!((result.confidence - 0.825).abs() < 1e-9);
}

#[test]
fn rejection_payload_is_camel_case_json() {
    let err = assess_text(sample_text(Category::Lipid), Category::Cbc).unwrap_err();
    let json = serde_json::to_value(&err).unwrap();
    let details = json["details"].as_object().unwrap();
    let mut keys: Vec<&str> = details.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(
        keys,
        vec!["confidence", "confidenceTier", "reasons", "selectedLabType", "suggestions"]
    );
}
