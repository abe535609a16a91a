use labcheck_registry::Category;
use labcheck_report::{
    assess_parsed_values, assess_text, Assessor, ConfidenceTier, ErrorCode, LabValidationError,
};
use labcheck_validate::{load_config_from_str, ParsedValues};
use pretty_assertions::assert_eq;

const CBC_TEXT: &str = "COMPLETE BLOOD COUNT (CBC)\n\
    Hemoglobin: 14.5 g/dL\nWBC: 7.5 x10^9/L\nRBC: 5.0 x10^12/L\n\
    Platelet Count: 250 x10^9/L\nHematocrit: 42 %";

const LIPID_TEXT: &str = "LIPID PROFILE\nTotal Cholesterol: 190 mg/dL\nHDL Cholesterol: 50 mg/dL\n\
    LDL Cholesterol: 110 mg/dL\nTriglycerides: 140 mg/dL";

fn values(json: &str) -> ParsedValues {
    serde_json::from_str(json).unwrap()
}

#[test]
fn valid_report_passes_through() {
    let result = assess_text(CBC_TEXT, Category::Cbc).unwrap();
    assert!(result.is_valid);
    assert_eq!(result.confidence, 1.0);
}

#[test]
fn lipid_report_declared_as_cbc_is_a_mismatch() {
    let err = assess_text(LIPID_TEXT, Category::Cbc).unwrap_err();
    assert_eq!(err.code, ErrorCode::MismatchedLabType);
    assert_eq!(err.details.selected_lab_type, "CBC");
    assert_eq!(err.details.confidence_tier, ConfidenceTier::Low);
    assert_eq!(
        err.details.reasons,
        vec![
            "Missing required keywords for CBC",
            "No CBC parameters were recognized",
            "Parameters match Lipid Profile rather than CBC",
        ]
    );
    assert_eq!(
        err.details.suggestions,
        vec![
            "Verify you selected the correct lab type",
            "This looks like a Lipid Profile report",
        ]
    );
}

#[test]
fn non_report_is_an_invalid_image() {
    let err = assess_text("Shopping list: milk, eggs, bread, apples, coffee", Category::Urinalysis)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidLabImage);
    assert_eq!(err.details.confidence, 0);
    assert_eq!(err.details.confidence_tier, ConfidenceTier::Low);
    assert_eq!(
        err.details.suggestions,
        vec!["Upload a clearer image", "Make sure the whole report is visible"]
    );
}

#[test]
fn prose_that_names_parameters_is_rejected_with_value_reason() {
    let prose = "The color and appearance of a cake depend on the sugar and protein in the \
                 flour; a chemical reaction during baking also kills any bacteria, and blood \
                 oranges add tang.";
    let err = assess_text(prose, Category::Urinalysis).unwrap_err();
    assert!(err
        .details
        .reasons
        .contains(&"Urinalysis parameters are mentioned but too few have result values".to_string()));
    assert!(!err.details.suggestions.iter().any(|s| s.starts_with("This looks like")));
}

#[test]
fn single_parsed_value_is_a_mismatch_without_alternative() {
    let err = assess_parsed_values(&values(r#"{"hemoglobin": 14.5}"#), Category::Cbc).unwrap_err();
    assert_eq!(err.code, ErrorCode::MismatchedLabType);
    assert_eq!(err.details.confidence, 20);
    assert_eq!(
        err.details.reasons,
        vec!["Only 1 of the 3 required CBC parameters were recognized"]
    );
}

#[test]
fn parsed_lipid_values_declared_as_urinalysis_name_lipid() {
    let lipid = values(r#"{"total_cholesterol": 190, "hdl": 50, "ldl": 110, "triglycerides": 140}"#);
    assert!(assess_parsed_values(&lipid, Category::Lipid).is_ok());
    let err = assess_parsed_values(&lipid, Category::Urinalysis).unwrap_err();
    assert_eq!(err.code, ErrorCode::MismatchedLabType);
    assert_eq!(err.details.suggestions[1], "This looks like a Lipid Profile report");
}

#[test]
fn custom_config_changes_the_outcome() {
    let config = load_config_from_str(r#"{"coverage": {"cbc": {"min_parameters": 1}}}"#).unwrap();
    let hemoglobin = values(r#"{"hemoglobin": 14.5}"#);
    assert!(Assessor::new(&config)
        .assess_parsed_values(&hemoglobin, Category::Cbc)
        .is_ok());
}

#[test]
fn error_round_trips_through_json() {
    let err = assess_text(LIPID_TEXT, Category::Cbc).unwrap_err();
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["code"], "MISMATCHED_LAB_TYPE");
    assert_eq!(json["details"]["selectedLabType"], "CBC");
    assert_eq!(json["details"]["confidenceTier"], "low");
    let back: LabValidationError = serde_json::from_value(json).unwrap();
    assert_eq!(back, err);
}
