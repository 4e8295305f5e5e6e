/// Library-agnostic model of one console page.
///
/// Text is whitespace-stripped per text node and concatenated, the way the
/// console's labels are compared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    /// Text of the first `<title>` element.
    pub title: Option<String>,
    /// Texts of every language marker element, in document order.
    pub language_markers: Vec<String>,
    /// Every `<table>` in document order.
    pub tables: Vec<Table>,
    /// Every `<tr>` of the document, regardless of its table.
    pub rows: Vec<Row>,
    /// All text nodes of the document, unmodified and concatenated.
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    /// `<th>` rather than `<td>`.
    pub header: bool,
    /// First `<img>` inside the cell.
    pub icon: Option<Icon>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Icon {
    pub src: Option<String>,
}

impl Table {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Text of the first header cell of the first row.
    pub fn header(&self) -> Option<&str> {
        self.rows
            .first()?
            .cells
            .iter()
            .find(|cell| cell.header)
            .map(|cell| cell.text.as_str())
    }

    /// Rows with a label cell and at least one value cell.
    pub fn labelled_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|row| row.cells.len() >= 2)
    }
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Plain `<td>` row built from texts.
    pub fn of_texts(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|text| Cell::data(*text)).collect())
    }

    pub fn label(&self) -> Option<&str> {
        self.cells.first().map(|cell| cell.text.as_str())
    }

    /// Text of the cell right after the label.
    pub fn value(&self) -> Option<&str> {
        self.cells.get(1).map(|cell| cell.text.as_str())
    }
}

impl Cell {
    pub fn data(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            header: false,
            icon: None,
        }
    }

    pub fn header(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            header: true,
            icon: None,
        }
    }

    pub fn with_icon(mut self, src: Option<&str>) -> Self {
        self.icon = Some(Icon {
            src: src.map(str::to_string),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Row, Table};

    #[test]
    fn header_is_first_th_of_first_row() {
        let table = Table::new(vec![
            Row::new(vec![Cell::data("x"), Cell::header("STARTS")]),
            Row::of_texts(&["COMPRESSOR", "12"]),
        ]);
        assert_eq!(table.header(), Some("STARTS"));
    }

    #[test]
    fn header_missing_on_empty_or_data_only_table() {
        assert_eq!(Table::default().header(), None);
        let table = Table::new(vec![Row::of_texts(&["a", "b"])]);
        assert_eq!(table.header(), None);
    }
}
