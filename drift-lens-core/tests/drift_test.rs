use std::collections::HashMap;

use drift_lens_core::{
    calculate_drift_values, ColumnProfileView, DatasetProfile, DatasetProfileView, DriftTest,
    Metric,
};
use drift_lens_core::metrics::{
    CardinalityMetric, ColumnCountsMetric, FrequentItem, FrequentItemsMetric,
};

fn numeric_profile(column: &str, values: &[f64]) -> DatasetProfileView {
    let mut profile = DatasetProfile::default();
    for &v in values {
        profile.column(column).track_number(v);
    }
    profile.build()
}

fn text_profile(column: &str, values: &[&str]) -> DatasetProfileView {
    let mut profile = DatasetProfile::default();
    for &v in values {
        profile.column(column).track_text(v);
    }
    profile.build()
}

#[test]
fn identical_numeric_profiles_show_no_drift() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    let target = numeric_profile("x", &values);
    let reference = numeric_profile("x", &values);

    let drift = calculate_drift_values(&target, &reference);
    let result = drift.get("x").unwrap().unwrap();
    assert_eq!(result.test, DriftTest::Ks);
    assert!(result.p_value > 0.9, "p = {}", result.p_value);
}

#[test]
fn disjoint_numeric_profiles_show_drift() {
    let target = numeric_profile("x", &(0..200).map(f64::from).collect::<Vec<_>>());
    let reference = numeric_profile("x", &(5000..5200).map(f64::from).collect::<Vec<_>>());

    let drift = calculate_drift_values(&target, &reference);
    let result = drift.get("x").unwrap().unwrap();
    assert_eq!(result.p_value, 0.0);
}

#[test]
fn ks_p_value_is_symmetric_in_the_views() {
    let a = numeric_profile("x", &(0..150).map(f64::from).collect::<Vec<_>>());
    let b = numeric_profile("x", &(50..200).map(f64::from).collect::<Vec<_>>());

    let ab = calculate_drift_values(&a, &b).get("x").unwrap().unwrap();
    let ba = calculate_drift_values(&b, &a).get("x").unwrap().unwrap();
    assert!((ab.p_value - ba.p_value).abs() < 1e-12);
}

#[test]
fn identical_text_profiles_show_no_drift() {
    let values = ["a", "a", "a", "a", "b", "b", "c", "c"];
    let target = text_profile("cat", &values);
    let reference = text_profile("cat", &values);

    let drift = calculate_drift_values(&target, &reference);
    let result = drift.get("cat").unwrap().unwrap();
    assert_eq!(result.test, DriftTest::ChiSquared);
    assert!(result.p_value > 0.9, "p = {}", result.p_value);
}

#[test]
fn target_only_category_is_maximal_drift() {
    let target = text_profile("pet", &["cat", "cat", "cat", "cat", "cat"]);
    let reference = text_profile("pet", &["dog", "dog", "dog", "dog", "dog"]);

    let drift = calculate_drift_values(&target, &reference);
    let result = drift.get("pet").unwrap().unwrap();
    assert_eq!(result.test, DriftTest::ChiSquared);
    assert_eq!(result.p_value, 0.0);
}

#[test]
fn column_missing_from_reference_is_omitted() {
    let target = numeric_profile("only_in_target", &[1.0, 2.0, 3.0]);
    let reference = numeric_profile("something_else", &[1.0, 2.0, 3.0]);

    let drift = calculate_drift_values(&target, &reference);
    assert!(!drift.contains_key("only_in_target"));
    assert!(drift.is_empty());
}

#[test]
fn mismatched_metric_kinds_are_omitted() {
    let target = numeric_profile("x", &[1.0, 2.0, 3.0]);
    let reference = text_profile("x", &["1", "2", "3"]);

    let drift = calculate_drift_values(&target, &reference);
    assert!(!drift.contains_key("x"));
}

#[test]
fn zero_total_count_on_discrete_path_yields_none() {
    // hand-built views: frequent items present but the counts metric reports
    // zero rows, so the chi-squared estimator must decline
    fn discrete_view(n: u64) -> DatasetProfileView {
        let mut metrics = HashMap::new();
        metrics.insert(
            "fi".to_string(),
            Metric::FrequentItems(FrequentItemsMetric {
                items: vec![FrequentItem {
                    value: "a".into(),
                    estimate: 1.0,
                }],
            }),
        );
        metrics.insert(
            "cnt".to_string(),
            Metric::Counts(ColumnCountsMetric { n, null_count: 0 }),
        );
        metrics.insert(
            "card".to_string(),
            Metric::Cardinality(CardinalityMetric { estimate: 1.0 }),
        );
        let mut columns = HashMap::new();
        columns.insert("x".to_string(), ColumnProfileView::new(metrics));
        DatasetProfileView::new(columns)
    }

    let target = discrete_view(0);
    let reference = discrete_view(10);
    let drift = calculate_drift_values(&target, &reference);
    assert_eq!(drift.get("x"), Some(&None));
}

#[test]
fn mixed_dataset_dispatches_per_column() {
    let mut target = DatasetProfile::default();
    let mut reference = DatasetProfile::default();
    for i in 0..100 {
        target.column("amount").track_number(f64::from(i));
        reference.column("amount").track_number(f64::from(i));
        target.column("label").track_text(if i % 2 == 0 { "x" } else { "y" });
        reference.column("label").track_text(if i % 2 == 0 { "x" } else { "y" });
    }
    let drift = calculate_drift_values(&target.build(), &reference.build());

    assert_eq!(drift.len(), 2);
    assert_eq!(drift.get("amount").unwrap().unwrap().test, DriftTest::Ks);
    assert_eq!(
        drift.get("label").unwrap().unwrap().test,
        DriftTest::ChiSquared
    );
}

#[test]
fn drift_values_serialize_with_test_names() {
    let target = numeric_profile("x", &[1.0, 2.0, 3.0]);
    let reference = numeric_profile("x", &[1.0, 2.0, 3.0]);
    let drift = calculate_drift_values(&target, &reference);
    let json = serde_json::to_string(&drift).unwrap();
    assert!(json.contains("\"test\":\"ks\""));

    let t = text_profile("c", &["a"]);
    let r = text_profile("c", &["a"]);
    let drift = calculate_drift_values(&t, &r);
    let json = serde_json::to_string(&drift).unwrap();
    assert!(json.contains("\"test\":\"chi-squared\""));
}
