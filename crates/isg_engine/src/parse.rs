//! `scraper`-backed construction of the [`Page`] model.
use std::sync::LazyLock;

use isg_core::{Cell, Icon, Page, Row, Table, LANGUAGE_MARKER_CLASS};
use scraper::{ElementRef, Html, Selector};

struct Selectors {
    title: Selector,
    language_marker: Selector,
    table: Selector,
    row: Selector,
    cell: Selector,
    image: Selector,
}

static SELECTORS: LazyLock<Selectors> = LazyLock::new(|| Selectors {
    title: css("title"),
    language_marker: css(&format!("div.{LANGUAGE_MARKER_CLASS}")),
    table: css("table"),
    row: css("tr"),
    cell: css("td, th"),
    image: css("img"),
});

fn css(selector: &str) -> Selector {
    Selector::parse(selector).expect("static selector is valid")
}

/// Parses console HTML into a [`Page`].
///
/// Rows and cells are collected from all descendants, so nested tables
/// contribute their rows to the enclosing table as well.
pub fn parse_page(html: &str) -> Page {
    let document = Html::parse_document(html);
    let selectors = &*SELECTORS;

    let title = document
        .select(&selectors.title)
        .next()
        .map(|title| title.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty());

    let language_markers = document
        .select(&selectors.language_marker)
        .map(stripped_text)
        .collect();

    let tables = document
        .select(&selectors.table)
        .map(|table| Table::new(table.select(&selectors.row).map(parse_row).collect()))
        .collect();

    let rows = document.select(&selectors.row).map(parse_row).collect();

    Page {
        title,
        language_markers,
        tables,
        rows,
        text: visible_text(&document),
    }
}

/// Elements whose text is never rendered.
const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "template", "noscript"];

fn visible_text(document: &Html) -> String {
    document
        .root_element()
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|element| HIDDEN_ELEMENTS.contains(&element.name()))
            });
            (!hidden).then_some(&**text)
        })
        .collect()
}

fn parse_row(row: ElementRef<'_>) -> Row {
    Row::new(row.select(&SELECTORS.cell).map(parse_cell).collect())
}

fn parse_cell(cell: ElementRef<'_>) -> Cell {
    let icon = cell.select(&SELECTORS.image).next().map(|image| Icon {
        src: image.value().attr("src").map(str::to_string),
    });
    Cell {
        text: stripped_text(cell),
        header: cell.value().name() == "th",
        icon,
    }
}

/// Each text node trimmed, then concatenated.
fn stripped_text(element: ElementRef<'_>) -> String {
    element.text().map(str::trim).collect()
}

#[cfg(test)]
mod tests {
    use super::parse_page;

    #[test]
    fn cell_text_is_stripped_per_text_node() {
        let page = parse_page(
            "<table><tr><td>\n  ACTUAL <b> TEMPERATURE 1 </b>\n</td><td> 23,3°C </td></tr></table>",
        );
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.rows[0].label(), Some("ACTUALTEMPERATURE 1"));
        assert_eq!(page.rows[0].value(), Some("23,3°C"));
    }

    #[test]
    fn page_text_skips_scripts_and_styles() {
        let page = parse_page(
            "<head><style>.a { color: red }</style><script>var t = 'x';</script></head>\
             <body><p>MAC:</p><p>AA</p></body>",
        );
        assert_eq!(page.text, "MAC:AA");
    }

    #[test]
    fn nested_rows_belong_to_outer_table_too() {
        let page = parse_page(
            "<table><tr><td><table><tr><td>A</td><td>1</td></tr></table></td></tr></table>",
        );
        assert_eq!(page.tables.len(), 2);
        assert_eq!(page.tables[0].rows.len(), 2);
        assert_eq!(page.tables[1].rows.len(), 1);
        assert_eq!(page.rows.len(), 2);
    }
}
