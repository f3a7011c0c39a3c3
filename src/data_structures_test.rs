/// Tests for record access and cell serialization
///
/// These cover the shapes the nightly producer actually writes, including
/// its placeholders for skipped derivability runs and unknown line counts.

#[cfg(test)]
mod tests {
    use crate::error::RowError;
    use crate::types::*;
    use serde_json::json;

    fn baseline_record() -> ExperimentRecord {
        ExperimentRecord::new(json!({
            "spec_name": "rational_best",
            "baseline_name": "oopsla rational",
            "loc": 42,
            "rules": ["(+ a b) ==> (+ b a)"],
            "time": 12.5,
            "derivability": {
                "enumo_derives_baseline": {
                    "lhs": { "derive_type": "Lhs", "can": ["r1"], "cannot": [], "time": 0.25 },
                    "lhs_rhs": { "can": [], "cannot": ["r1"], "time": 0.5 }
                },
                "baseline_derives_enumo": {}
            }
        }))
    }

    #[test]
    fn test_field_walks_dotted_paths() {
        let record = baseline_record();
        assert_eq!(record.str_at("spec_name").unwrap(), "rational_best");
        assert_eq!(record.number_at("time").unwrap(), 12.5);
        assert_eq!(record.len_at("rules").unwrap(), 1);
        assert_eq!(record.number_at("derivability.enumo_derives_baseline.lhs.time").unwrap(), 0.25);
    }

    #[test]
    fn test_missing_field_reports_full_path() {
        let record = baseline_record();
        let err = record.field("derivability.baseline_derives_enumo.lhs").unwrap_err();
        assert_eq!(err, RowError::missing("derivability.baseline_derives_enumo.lhs"));
    }

    #[test]
    fn test_null_counts_as_missing() {
        let record = ExperimentRecord::new(json!({ "domain": null }));
        assert!(matches!(record.str_at("domain"), Err(RowError::MissingField { .. })));
    }

    #[test]
    fn test_wrong_type_is_reported() {
        let record = baseline_record();
        assert_eq!(record.len_at("time").unwrap_err(), RowError::wrong_type("time", "an array"));
        assert_eq!(record.number_at("spec_name").unwrap_err(), RowError::wrong_type("spec_name", "a number"));
    }

    #[test]
    fn test_cell_at_keeps_integers_and_placeholders() {
        let record = baseline_record();
        assert_eq!(record.cell_at("loc").unwrap(), Cell::Integer(42));
        assert_eq!(record.cell_at("time").unwrap(), Cell::Number(12.5));

        let unknown_loc = ExperimentRecord::new(json!({ "loc": "-" }));
        assert_eq!(unknown_loc.cell_at("loc").unwrap(), Cell::Text("-".to_string()));
    }

    #[test]
    fn test_derivability_ignores_extra_fields() {
        let record = baseline_record();
        let result = record.derivability("derivability.enumo_derives_baseline.lhs").unwrap();
        assert_eq!(result.can, vec!["r1".to_string()]);
        assert!(result.cannot.is_empty());
        assert_eq!(result.total(), 1);
    }

    #[test]
    fn test_derivability_missing_member() {
        let record = ExperimentRecord::new(json!({
            "derivability": { "lhs": { "can": [], "time": 1.0 } }
        }));
        assert_eq!(
            record.derivability("derivability.lhs").unwrap_err(),
            RowError::missing("derivability.lhs.cannot")
        );
    }

    #[test]
    fn test_baseline_name_optional() {
        assert_eq!(baseline_record().baseline_name(), Some("oopsla rational"));
        assert_eq!(ExperimentRecord::new(json!({ "domain": "bv8" })).baseline_name(), None);
    }

    #[test]
    fn test_variant_run_truthiness() {
        let cases = vec![
            (json!({ "from_bv4": { "rules": [], "time": 0.0 } }), true),
            (json!({ "from_bv4": [] }), true),
            (json!({ "from_bv4": null }), false),
            (json!({ "from_bv4": false }), false),
            (json!({ "from_bv4": 0 }), false),
            (json!({ "from_bv4": "" }), false),
            (json!({}), false),
        ];

        for (value, expected) in cases {
            let record = ExperimentRecord::new(value.clone());
            assert_eq!(record.has_variant_run(), expected, "from_bv4 in {}", value);
        }
    }

    #[test]
    fn test_cell_serialization() {
        assert_eq!(serde_json::to_string(&Cell::Integer(4)).unwrap(), "4");
        assert_eq!(serde_json::to_string(&Cell::Text("4.13".to_string())).unwrap(), "\"4.13\"");

        let cells = vec![Cell::Integer(7), Cell::Text("66.7%".to_string())];
        for cell in cells {
            let json = serde_json::to_string(&cell).unwrap();
            let deserialized: Cell = serde_json::from_str(&json).unwrap();
            assert_eq!(cell, deserialized);
        }
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::Integer(10).to_string(), "10");
        assert_eq!(Cell::Number(4.0).to_string(), "4");
        assert_eq!(Cell::from("n/a").to_string(), "n/a");
    }

    #[test]
    fn test_record_round_trips_unchanged() {
        let record = baseline_record();
        let json = serde_json::to_string(&record).unwrap();
        let back: ExperimentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
