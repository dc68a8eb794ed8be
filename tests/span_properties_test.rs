//! Property tests for span flattening and repeatable extraction

use kodegen_tools_table_json::{TableOptions, extract_table};
use proptest::prelude::*;
use scraper::Html;

mod common;

fn cell_text() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

proptest! {
    #[test]
    fn colspan_repeats_value_across_columns(
        span in 1usize..6,
        before in 0usize..3,
        value in cell_text(),
    ) {
        let width = before + span;
        let header: String = (0..width).map(|i| format!("<th>h{i}</th>")).collect();
        let lead: String = (0..before).map(|i| format!("<td>v{i}</td>")).collect();
        let html = common::create_test_html(&format!(
            r#"<table><tr>{header}</tr><tr>{lead}<td colspan="{span}">{value}</td></tr></table>"#
        ));

        let doc = Html::parse_document(&html);
        let records = extract_table(common::first_table(&doc), &TableOptions::default()).unwrap();

        prop_assert_eq!(records.len(), 1);
        prop_assert_eq!(records[0].len(), width);
        for i in before..width {
            let key = format!("h{i}");
            prop_assert_eq!(records[0].get(&key), Some(value.as_str()));
        }
    }

    #[test]
    fn extraction_is_repeatable(
        rows in prop::collection::vec(prop::collection::vec(cell_text(), 1..5), 1..6),
        rowspan in 1usize..4,
        ignore_empty in any::<bool>(),
        include_row_id in any::<bool>(),
        header_id in any::<bool>(),
    ) {
        let body: String = rows
            .iter()
            .enumerate()
            .map(|(r, cells)| {
                let tds: String = cells
                    .iter()
                    .enumerate()
                    .map(|(c, text)| {
                        if r == 0 && c == 0 {
                            format!(r#"<td rowspan="{rowspan}">{text}</td>"#)
                        } else {
                            format!("<td>{text}</td>")
                        }
                    })
                    .collect();
                if r == 0 && !header_id {
                    format!("<tr>{tds}</tr>")
                } else {
                    format!(r#"<tr id="r{r}">{tds}</tr>"#)
                }
            })
            .collect();
        let html = common::create_test_html(&format!("<table>{body}</table>"));
        let options = TableOptions::builder()
            .ignore_empty_rows(ignore_empty)
            .include_row_id(include_row_id)
            .build()
            .unwrap();

        let doc = Html::parse_document(&html);
        let table = common::first_table(&doc);
        let first = extract_table(table, &options).unwrap();
        let second = extract_table(table, &options).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), rows.len() - 1);

        // Keys always come from the header row; row ids only ever sit under
        // the row id header, never shifted into a cell column
        let row_id_header = include_row_id && !header_id;
        for (i, record) in first.iter().enumerate() {
            for (key, value) in record.iter() {
                if key == "rowId" {
                    prop_assert!(row_id_header);
                    let expected_row_id = format!("r{}", i + 1);
                    prop_assert_eq!(value, expected_row_id.as_str());
                } else {
                    prop_assert!(rows[0].iter().any(|h| h == key));
                    prop_assert!(!value.chars().any(|c| c.is_ascii_digit()));
                }
            }
            if row_id_header {
                let expected = format!("r{}", i + 1);
                prop_assert_eq!(record.get("rowId"), Some(expected.as_str()));
            }
        }
    }
}
