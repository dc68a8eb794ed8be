//! DOM helpers over `scraper` element references
//!
//! Row/cell enumeration that respects table nesting, plus the attribute
//! predicates used by row filtering. Nothing here mutates the tree.

use regex::Regex;
use scraper::ElementRef;
use std::sync::LazyLock;

static DISPLAY_NONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|;)\s*display\s*:\s*none\b")
        .expect("BUG: hardcoded display:none regex is statically valid")
});

/// Row groups whose `<tr>` children belong to the enclosing table
const ROW_GROUPS: [&str; 3] = ["thead", "tbody", "tfoot"];

/// Collect the rows owned by `table`, in document order.
///
/// Only `<tr>` elements that are direct children of the table, or of a
/// `thead`/`tbody`/`tfoot` directly under it, are returned. Rows of nested
/// tables are never included.
pub fn table_rows<'a>(table: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    let mut rows = Vec::new();

    for child in table.children().filter_map(ElementRef::wrap) {
        let name = child.value().name();
        if name == "tr" {
            rows.push(child);
        } else if ROW_GROUPS.contains(&name) {
            rows.extend(
                child
                    .children()
                    .filter_map(ElementRef::wrap)
                    .filter(|el| el.value().name() == "tr"),
            );
        }
    }

    rows
}

/// Direct `<td>`/`<th>` children of a row, in document order
pub fn direct_cells<'a>(row: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|el| matches!(el.value().name(), "td" | "th"))
        .collect()
}

/// Whether the element, or any element above it, is hidden.
///
/// Without a layout engine "hidden" means a `hidden` attribute or an
/// inline `display: none` on the element or one of its ancestors.
pub fn is_hidden(element: ElementRef<'_>) -> bool {
    std::iter::once(element)
        .chain(element.ancestors().filter_map(ElementRef::wrap))
        .any(|el| {
            let value = el.value();
            value.attr("hidden").is_some()
                || value.attr("style").is_some_and(|style| DISPLAY_NONE.is_match(style))
        })
}

/// Truthiness of a data attribute value: `true` or a non-zero number
pub fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") {
        return true;
    }
    value.parse::<f64>().is_ok_and(|n| n != 0.0 && !n.is_nan())
}
