// Validators share only immutable tables, so concurrent callers must see
// exactly what a single caller sees.

use std::sync::Arc;
use std::thread;

use labcheck_registry::supported_categories;
use labcheck_validate::{validate_lab_type, validate_parsed_values, ValidationResult};
use tests::{sample_text, sample_values};

fn sequential() -> Vec<(ValidationResult, ValidationResult)> {
    let mut out = Vec::new();
    for &actual in supported_categories() {
        for &declared in supported_categories() {
            out.push((
                validate_lab_type(sample_text(actual), declared),
                validate_parsed_values(&sample_values(actual), declared),
            ));
        }
    }
    out
}

#[test]
fn threads_agree_with_a_single_caller() {
    let expected = Arc::new(sequential());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let expected = Arc::clone(&expected);
            thread::spawn(move || {
                for _ in 0..25 {
                    assert_eq!(sequential(), *expected);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
}
