//! Integration tests for column and table translation.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use survey_model::CodedValue;
use survey_standards::default_catalog;
use survey_transform::{
    map_codes, map_values, rename_to_questions, translate, translate_with_report,
};

fn frame(columns: Vec<Series>) -> DataFrame {
    let cols: Vec<Column> = columns.into_iter().map(IntoColumn::into_column).collect();
    DataFrame::new(cols).unwrap()
}

fn strings(series: &Series) -> Vec<Option<String>> {
    series
        .str()
        .expect("translated column is a string column")
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect()
}

fn render(values: &[CodedValue]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_d01_mixed_representations() {
    let values = vec![
        CodedValue::Float(1.0),
        CodedValue::Float(2.0),
        CodedValue::Missing,
        CodedValue::Integer(1),
    ];
    let translated = map_values(&values, "D01");
    assert_eq!(
        translated,
        vec![
            CodedValue::from("Yes"),
            CodedValue::from("No"),
            CodedValue::Missing,
            CodedValue::from("Yes"),
        ]
    );
}

#[test]
fn test_gen_text_codes_with_unmapped_value() {
    let values: Vec<CodedValue> = ["1", "2", "3", "9"].into_iter().map(CodedValue::from).collect();
    let translated = map_values(&values, "GEN");
    insta::assert_snapshot!(render(&translated), @r"
Male
Female
Prefer not to answer
<missing>
");
}

#[test]
fn test_d01_float_column() {
    let series = Series::new("D01".into(), vec![Some(1.0), Some(2.0), None, Some(1.0)]);
    let translated = map_codes(&series, "D01");
    assert_eq!(
        strings(&translated),
        vec![
            Some("Yes".to_string()),
            Some("No".to_string()),
            None,
            Some("Yes".to_string())
        ]
    );
}

#[test]
fn test_gen_string_column() {
    let series = Series::new("GEN".into(), vec!["1", "2", "3", "9"]);
    let translated = map_codes(&series, "GEN");
    assert_eq!(
        strings(&translated),
        vec![
            Some("Male".to_string()),
            Some("Female".to_string()),
            Some("Prefer not to answer".to_string()),
            None
        ]
    );
}

#[test]
fn test_integer_column_and_nan() {
    let ints = Series::new("RETA".into(), vec![Some(1_i64), Some(8), None]);
    assert_eq!(
        strings(&map_codes(&ints, "RETA")),
        vec![Some("18–24".to_string()), Some("Screenout".to_string()), None]
    );

    let floats = Series::new("D22".into(), vec![4.0, f64::NAN]);
    assert_eq!(
        strings(&map_codes(&floats, "D22")),
        vec![Some("Bachelor’s degree".to_string()), None]
    );
}

#[test]
fn test_unknown_variable_is_identity() {
    let series = Series::new("respondent_id".into(), vec![Some(101_i64), None, Some(103)]);
    let out = map_codes(&series, "respondent_id");
    assert!(out.equals_missing(&series));
    assert_eq!(out.dtype(), series.dtype());

    let values = vec![CodedValue::Integer(5), CodedValue::from("x"), CodedValue::Missing];
    assert_eq!(map_values(&values, "notes"), values);
}

#[test]
fn test_translate_leaves_free_text_alone() {
    let df = frame(vec![
        Series::new("D01".into(), vec![Some(1.0), Some(2.0), None]),
        Series::new("notes".into(), vec!["first", "second", "1"]),
    ]);
    let translated = translate(&df).expect("translate");

    assert_eq!(
        strings(translated.column("D01").unwrap().as_materialized_series()),
        vec![Some("Yes".to_string()), Some("No".to_string()), None]
    );
    let notes = translated.column("notes").unwrap().as_materialized_series();
    assert!(notes.equals_missing(df.column("notes").unwrap().as_materialized_series()));
}

#[test]
fn test_translate_does_not_mutate_input() {
    let df = frame(vec![
        Series::new("GEN".into(), vec![Some(1_i64), Some(2), None]),
        Series::new("regione".into(), vec![Some(3.0), Some(20.0), Some(21.0)]),
    ]);
    let before = df.clone();
    let _ = translate(&df).expect("translate");
    assert!(df.equals_missing(&before));
    assert_eq!(df.column("GEN").unwrap().dtype(), before.column("GEN").unwrap().dtype());
}

#[test]
fn test_translate_preserves_shape_and_order() {
    let df = frame(vec![
        Series::new("respondent_id".into(), vec![1_i64, 2, 3]),
        Series::new("regione".into(), vec![1.0, 12.0, 20.0]),
        Series::new("D01".into(), vec![1.0, 1.0, 2.0]),
        Series::new("comment".into(), vec!["a", "b", "c"]),
    ]);
    let translated = translate(&df).expect("translate");

    let names: Vec<&str> = translated
        .get_column_names()
        .into_iter()
        .map(|name| name.as_str())
        .collect();
    assert_eq!(names, vec!["respondent_id", "regione", "D01", "comment"]);
    assert_eq!(translated.height(), 3);
    assert_eq!(translated.width(), 4);
    assert_eq!(
        strings(translated.column("regione").unwrap().as_materialized_series()),
        vec![
            Some("Piemonte".to_string()),
            Some("Lazio".to_string()),
            Some("Sardegna".to_string())
        ]
    );
}

#[test]
fn test_translate_twice_is_stable() {
    let df = frame(vec![
        Series::new("D01".into(), vec![Some(1.0), Some(2.0), None, Some(5.0)]),
        Series::new("D06_1".into(), vec![Some(1_i64), Some(2), Some(5), None]),
        Series::new("GEN".into(), vec!["1", "2", "3", "9"]),
        Series::new("notes".into(), vec!["a", "b", "c", "d"]),
    ]);
    let first = translate(&df).expect("first pass");
    let second = translate(&first).expect("second pass");
    assert!(second.equals_missing(&first));
}

#[test]
fn test_translate_report_counts() {
    let df = frame(vec![
        Series::new("D01".into(), vec![Some(1.0), Some(2.0), None, Some(9.0)]),
        Series::new("notes".into(), vec!["a", "b", "c", "d"]),
    ]);
    let (translated, report) =
        translate_with_report(default_catalog(), &df).expect("translate with report");

    assert_eq!(translated.height(), 4);
    assert_eq!(report.rows, 4);
    let d01 = report.column("D01").expect("D01 report");
    assert!(d01.coded);
    assert_eq!(d01.translated, 2);
    assert_eq!(d01.missing, 1);
    assert_eq!(d01.unmatched, 1);
    assert_eq!(d01.total(), report.rows);

    let notes = report.column("notes").expect("notes report");
    assert!(!notes.coded);
    assert_eq!(report.total_unmatched(), 1);
    assert_eq!(report.coded_columns().count(), 1);
}

#[test]
fn test_rename_to_questions() {
    let df = frame(vec![
        Series::new("GEN".into(), vec![1_i64]),
        Series::new("respondent_id".into(), vec![7_i64]),
    ]);
    let renamed = rename_to_questions(default_catalog(), &df).expect("rename");
    let names: Vec<&str> = renamed
        .get_column_names()
        .into_iter()
        .map(|name| name.as_str())
        .collect();
    assert_eq!(names, vec!["Sex", "respondent_id"]);
    assert_eq!(df.get_column_names()[0].as_str(), "GEN");
}

#[test]
fn test_empty_frame() {
    let df = frame(vec![Series::new("D01".into(), Vec::<f64>::new())]);
    let translated = translate(&df).expect("translate");
    assert_eq!(translated.height(), 0);
    assert_eq!(translated.width(), 1);
}

#[test]
fn test_concurrent_callers_share_the_catalog() {
    let df = frame(vec![
        Series::new("D19".into(), vec![Some(1.0), Some(3.0), None, Some(7.0)]),
        Series::new("RETA".into(), vec!["8", "1", "2.0", "x"]),
        Series::new("respondent_id".into(), vec![1_i64, 2, 3, 4]),
    ]);
    let values: Vec<CodedValue> = ["1", "2", "3", "4"].into_iter().map(CodedValue::from).collect();
    let expected_frame = translate(&df).expect("translate");
    let expected_values = map_values(&values, "D20");

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| (translate(&df).expect("translate"), map_values(&values, "D20"))))
            .collect();
        for handle in handles {
            let (translated, mapped) = handle.join().expect("worker thread");
            assert!(translated.equals_missing(&expected_frame));
            assert_eq!(mapped, expected_values);
        }
    });
    assert!(std::ptr::eq(default_catalog(), default_catalog()));
}
