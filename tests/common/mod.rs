//! Test utilities and HTML fixtures for the table extraction test suite

use scraper::{ElementRef, Html, Selector};

/// Install a tracing subscriber honouring `RUST_LOG`; safe to call repeatedly
#[allow(dead_code)]
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

/// Parse `html` and return every `table` element, in document order
#[allow(dead_code)]
pub fn tables(doc: &Html) -> Vec<ElementRef<'_>> {
    let selector = Selector::parse("table").unwrap();
    doc.select(&selector).collect()
}

/// The first `table` element of `doc`
#[allow(dead_code)]
pub fn first_table(doc: &Html) -> ElementRef<'_> {
    tables(doc).into_iter().next().expect("fixture has a table")
}

/// Wrap table markup in a minimal HTML document
#[allow(dead_code)]
pub fn create_test_html(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="UTF-8"><title>Tables</title></head>
<body>
    {body}
</body>
</html>"#
    )
}

/// A three-column people table with a thead/tbody split
#[allow(dead_code)]
pub fn people_table() -> String {
    create_test_html(
        r#"<table id="people">
            <thead>
                <tr><th>Name</th><th>Age</th><th>City</th></tr>
            </thead>
            <tbody>
                <tr id="p1"><td>Alice</td><td>30</td><td>Paris</td></tr>
                <tr id="p2"><td>Bob</td><td>25</td><td>Berlin</td></tr>
                <tr id="p3"><td>Carol</td><td>41</td><td>Madrid</td></tr>
            </tbody>
        </table>"#,
    )
}

/// A schedule table mixing rowspan and colspan cells
#[allow(dead_code)]
pub fn schedule_table() -> String {
    create_test_html(
        r#"<table>
            <tr><th>Day</th><th>Morning</th><th>Afternoon</th></tr>
            <tr><td rowspan="2">Monday</td><td colspan="2">Workshop</td></tr>
            <tr><td>Review</td><td>Planning</td></tr>
            <tr><td>Tuesday</td><td>Standup</td><td>Demo</td></tr>
        </table>"#,
    )
}
