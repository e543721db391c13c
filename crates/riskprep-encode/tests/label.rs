//! Tests for the ordinal label codec.

use polars::prelude::*;
use riskprep_encode::{EncodeError, LabelCodec};

fn grade_frame() -> DataFrame {
    DataFrame::new(vec![
        Series::new("등급".into(), vec!["양호", "불량", "주의", "불량"]).into(),
    ])
    .unwrap()
}

fn i64_values(df: &DataFrame, name: &str) -> Vec<Option<i64>> {
    df.column(name)
        .unwrap()
        .i64()
        .unwrap()
        .into_iter()
        .collect()
}

#[test]
fn codes_follow_sorted_class_order() {
    let mut codec = LabelCodec::new();
    let encoded = codec
        .fit_transform(&grade_frame(), &["등급".to_string()])
        .unwrap();

    // Sorted distinct classes: 불량 < 양호 < 주의 (code points).
    assert_eq!(
        codec.classes("등급").unwrap(),
        ["불량".to_string(), "양호".to_string(), "주의".to_string()]
    );
    assert_eq!(
        i64_values(&encoded, "등급"),
        vec![Some(1), Some(0), Some(2), Some(0)]
    );
}

#[test]
fn transform_rejects_unseen_labels() {
    let mut codec = LabelCodec::new();
    codec
        .fit_transform(&grade_frame(), &["등급".to_string()])
        .unwrap();

    let fresh = DataFrame::new(vec![
        Series::new("등급".into(), vec!["양호", "보통"]).into(),
    ])
    .unwrap();
    let err = codec.transform(&fresh).unwrap_err();
    assert!(matches!(
        err,
        EncodeError::UnseenLabel { column, value } if column == "등급" && value == "보통"
    ));
}

#[test]
fn round_trip_restores_labels() {
    let mut codec = LabelCodec::new();
    let encoded = codec
        .fit_transform(&grade_frame(), &["등급".to_string()])
        .unwrap();
    let decoded = codec.inverse_transform(&encoded).unwrap();
    let values: Vec<Option<&str>> = decoded
        .column("등급")
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(
        values,
        vec![Some("양호"), Some("불량"), Some("주의"), Some("불량")]
    );
}

#[test]
fn out_of_range_codes_decode_to_null() {
    let mut codec = LabelCodec::new();
    codec
        .fit_transform(&grade_frame(), &["등급".to_string()])
        .unwrap();

    let codes = Series::new("등급".into(), vec![0i64, 5, -1]);
    let decoded = codec.inverse_transform_column(&codes, "등급").unwrap();
    let values: Vec<Option<&str>> = decoded.str().unwrap().into_iter().collect();
    assert_eq!(values, vec![Some("불량"), None, None]);
}

#[test]
fn single_column_inverse_requires_fitted_classes() {
    let codec = LabelCodec::new();
    let codes = Series::new("x".into(), vec![0i64]);
    let err = codec.inverse_transform_column(&codes, "x").unwrap_err();
    assert!(matches!(err, EncodeError::UnfittedColumn(name) if name == "x"));
}

#[test]
fn whole_table_inverse_skips_unrecognized_columns() {
    let mut codec = LabelCodec::new();
    let encoded = codec
        .fit_transform(&grade_frame(), &["등급".to_string()])
        .unwrap();
    let with_extra = encoded
        .hstack(&[Series::new("점수".into(), vec![1i64, 2, 3, 4]).into()])
        .unwrap();
    let decoded = codec.inverse_transform(&with_extra).unwrap();
    let extra: Vec<Option<i64>> = decoded
        .column("점수")
        .unwrap()
        .i64()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(extra, vec![Some(1), Some(2), Some(3), Some(4)]);
}
