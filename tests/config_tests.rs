//! Tests for option defaults, the builder and JSON option documents

use kodegen_tools_table_json::{TableExtractor, TableOptions};
use scraper::Html;

mod common;

#[test]
fn test_partial_json_options_use_defaults() {
    let options: TableOptions = serde_json::from_str(
        r#"{ "ignoreColumns": [2], "includeRowId": true, "rowIdHeader": "key" }"#,
    )
    .unwrap();

    assert!(options.ignore_columns().contains(&2));
    assert!(options.only_columns().is_empty());
    assert!(options.include_row_id());
    assert_eq!(options.row_id_header(), "key");
    assert!(options.ignore_hidden_rows());
    assert!(!options.ignore_empty_rows());
    assert_eq!(options.text_data_override(), "data-override");
}

#[test]
fn test_options_serialise_camel_case() {
    let options = TableOptions::builder()
        .only_columns([0, 1])
        .headings(["A", "B"])
        .allow_html(true)
        .build()
        .unwrap();
    let value = serde_json::to_value(&options).unwrap();

    assert_eq!(value["onlyColumns"], serde_json::json!([0, 1]));
    assert_eq!(value["headings"], serde_json::json!(["A", "B"]));
    assert_eq!(value["allowHtml"], serde_json::json!(true));
    assert_eq!(value["textDataOverride"], serde_json::json!("data-override"));

    let back: TableOptions = serde_json::from_value(value).unwrap();
    assert_eq!(back, options);
}

#[test]
fn test_json_options_drive_extraction() {
    let options: TableOptions =
        serde_json::from_str(r#"{ "onlyColumns": [0], "ignoreEmptyRows": true }"#).unwrap();
    let doc = Html::parse_document(&common::people_table());
    let records = TableExtractor::new(options)
        .extract_table(common::first_table(&doc))
        .unwrap();

    let names: Vec<_> = records.iter().filter_map(|r| r.get("Name")).collect();
    assert_eq!(names, ["Alice", "Bob", "Carol"]);
    assert!(records.iter().all(|r| r.len() == 1));
}

#[test]
fn test_builder_from_existing_options() {
    let base = TableOptions::builder().ignore_columns([1]).build().unwrap();
    let derived = kodegen_tools_table_json::TableOptionsBuilder::from(base.clone())
        .ignore_empty_rows(true)
        .build()
        .unwrap();

    assert_eq!(derived.ignore_columns(), base.ignore_columns());
    assert!(derived.ignore_empty_rows());
}
