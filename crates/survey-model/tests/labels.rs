#![allow(missing_docs)]

use survey_model::{CatalogError, LabelCatalog, ValueLabels};

fn agreement_labels() -> ValueLabels {
    ValueLabels::with_labels(
        "D02",
        [
            (1.0, "Strongly agree"),
            (2.0, "Agree"),
            (3.0, "Neutral"),
            (4.0, "Disagree"),
            (5.0, "Strongly disagree"),
        ],
    )
    .expect("build labels")
}

#[test]
fn test_value_labels_lookup_by_representation() {
    let labels = agreement_labels();

    // Float keys
    assert_eq!(labels.get(1.0), Some("Strongly agree"));
    assert_eq!(labels.get(5.0), Some("Strongly disagree"));
    assert_eq!(labels.get(5.5), None);

    // Integers compare numerically
    assert_eq!(labels.get_integer(3), Some("Neutral"));
    assert_eq!(labels.get_integer(0), None);

    // Text forms, trimmed
    assert_eq!(labels.get_text("2"), Some("Agree"));
    assert_eq!(labels.get_text(" 2 "), Some("Agree"));
    assert_eq!(labels.get_text("4.0"), Some("Disagree"));
    assert_eq!(labels.get_text("4.00"), None);
    assert_eq!(labels.get_text(""), None);
    assert_eq!(labels.get_text("Agree"), None);
}

#[test]
fn test_value_labels_preserve_declaration_order() {
    let labels = agreement_labels();
    let codes: Vec<f64> = labels.codes().collect();
    assert_eq!(codes, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(labels.labels().next(), Some("Strongly agree"));
    assert_eq!(labels.len(), 5);
}

#[test]
fn test_value_labels_label_recognition() {
    let labels = agreement_labels();
    assert!(labels.has_label("Neutral"));
    assert_eq!(labels.find_label("Neutral"), Some("Neutral"));
    assert!(!labels.has_label("neutral"));
    assert!(!labels.has_label(" Neutral"));
}

#[test]
fn test_value_labels_reject_duplicate_code() {
    let result = ValueLabels::with_labels("D01", [(1.0, "Yes"), (1.0, "No")]);
    assert_eq!(
        result.unwrap_err(),
        CatalogError::DuplicateCode {
            variable: "D01".to_string(),
            code: 1.0,
        }
    );
}

#[test]
fn test_value_labels_reject_infinite_code() {
    let mut labels = ValueLabels::new("D01");
    let err = labels.insert(f64::INFINITY, "Never").unwrap_err();
    assert!(matches!(err, CatalogError::InvalidCode { .. }));
}

#[test]
fn test_catalog_validate_symmetry() {
    let mut catalog = LabelCatalog::new();
    catalog
        .add_variable("D01", "Climate change is real")
        .expect("add variable");
    assert_eq!(
        catalog.validate().unwrap_err(),
        CatalogError::MissingValueLabels {
            variable: "D01".to_string()
        }
    );

    catalog
        .add_value_labels(
            ValueLabels::with_labels("D01", [(1.0, "Yes"), (2.0, "No")]).expect("labels"),
        )
        .expect("add labels");
    assert!(catalog.validate().is_ok());

    catalog
        .add_value_labels(ValueLabels::with_labels("GEN", [(1.0, "Male")]).expect("labels"))
        .expect("add labels");
    assert_eq!(
        catalog.validate().unwrap_err(),
        CatalogError::MissingQuestion {
            variable: "GEN".to_string()
        }
    );
}

#[test]
fn test_catalog_rejects_empty_mapping_and_duplicates() {
    let mut catalog = LabelCatalog::new();
    catalog.add_variable("GEN", "Sex").expect("add variable");
    catalog
        .add_value_labels(ValueLabels::new("GEN"))
        .expect("add labels");
    assert_eq!(
        catalog.validate().unwrap_err(),
        CatalogError::EmptyValueLabels {
            variable: "GEN".to_string()
        }
    );

    assert!(matches!(
        catalog.add_variable("GEN", "Gender"),
        Err(CatalogError::DuplicateVariable { .. })
    ));
    assert!(matches!(
        catalog.add_value_labels(ValueLabels::new("GEN")),
        Err(CatalogError::DuplicateVariable { .. })
    ));
}

#[test]
fn test_catalog_lookups() {
    let mut catalog = LabelCatalog::new();
    catalog.add_variable("GEN", "Sex").expect("add variable");
    catalog
        .add_value_labels(
            ValueLabels::with_labels("GEN", [(1.0, "Male"), (2.0, "Female")]).expect("labels"),
        )
        .expect("add labels");

    assert_eq!(catalog.question("GEN"), Some("Sex"));
    assert_eq!(catalog.question("notes"), None);
    assert!(catalog.is_coded("GEN"));
    assert!(!catalog.is_coded("gen"));
    assert_eq!(
        catalog.value_labels("GEN").and_then(|labels| labels.get(2.0)),
        Some("Female")
    );
    assert_eq!(catalog.len(), 1);
}

#[test]
fn test_catalog_serializes_entries() {
    let mut catalog = LabelCatalog::new();
    catalog.add_variable("D01", "Climate change is real").expect("add");
    catalog
        .add_value_labels(ValueLabels::with_labels("D01", [(1.0, "Yes")]).expect("labels"))
        .expect("add");

    let json = serde_json::to_value(&catalog).expect("serialize catalog");
    assert_eq!(json["variable_labels"]["D01"], "Climate change is real");
    assert_eq!(json["translated_labels"]["D01"]["variable"], "D01");
    assert_eq!(json["translated_labels"]["D01"]["entries"][0]["code"], 1.0);
    assert_eq!(json["translated_labels"]["D01"]["entries"][0]["label"], "Yes");
    assert!(json["translated_labels"]["D01"].get("text_index").is_none());
}
