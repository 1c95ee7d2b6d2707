use html_escape::encode_text;
use itertools::Itertools;
use scraper::{ElementRef, Html, Selector};

use crate::error::ScrapeError;

pub const FACTS_COLUMNS: [&str; 3] = ["Description", "Mars", "Earth"];
pub const FACTS_TABLE_CLASSES: &str = "table table-striped";

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub header: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn parse_first(html: &str) -> Result<Table, ScrapeError> {
        let table_selector = Selector::parse("table").unwrap();
        let row_selector = Selector::parse("tr").unwrap();

        let document = Html::parse_document(html);
        let table = document
            .select(&table_selector)
            .next()
            .ok_or_else(|| ScrapeError::missing("table"))?;

        let mut header = None;
        let mut rows = vec![];

        for tr in table.select(&row_selector) {
            let cells: Vec<ElementRef> = tr
                .children()
                .filter_map(ElementRef::wrap)
                .filter(|cell| matches!(cell.value().name(), "th" | "td"))
                .collect();
            if cells.is_empty() {
                continue;
            }

            let in_thead = tr
                .parent()
                .and_then(ElementRef::wrap)
                .is_some_and(|parent| parent.value().name() == "thead");
            let all_th = cells.iter().all(|cell| cell.value().name() == "th");
            let texts = cells.iter().map(|cell| cell_text(*cell)).collect();

            match header {
                None if in_thead || (rows.is_empty() && all_th) => header = Some(texts),
                // Extra header rows carry nothing we keep.
                Some(_) if in_thead => {}
                _ => rows.push(texts),
            }
        }

        if header.is_none() && rows.is_empty() {
            return Err(ScrapeError::missing("table rows"));
        }

        Ok(Table { header, rows })
    }

    pub fn column_count(&self) -> usize {
        self.header
            .iter()
            .chain(self.rows.iter())
            .map(|row| row.len())
            .max()
            .unwrap_or(0)
    }
}

fn cell_text(cell: ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}

#[derive(Debug, Clone, PartialEq)]
pub struct FactsRow {
    pub key: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FactsTable {
    pub index_name: String,
    pub columns: Vec<String>,
    pub rows: Vec<FactsRow>,
}

impl FactsTable {
    pub fn relabel(table: Table, columns: &[&str]) -> Result<Self, ScrapeError> {
        let found = table.column_count();
        let Some((index_name, value_columns)) = columns.split_first() else {
            return Err(ScrapeError::ColumnMismatch { expected: 0, found });
        };
        if found != columns.len() {
            return Err(ScrapeError::ColumnMismatch {
                expected: columns.len(),
                found,
            });
        }

        let rows = table
            .rows
            .into_iter()
            .map(|row| {
                let mut cells = row
                    .into_iter()
                    .pad_using(columns.len(), |_| String::new());
                FactsRow {
                    key: cells.next().unwrap_or_default(),
                    values: cells.collect(),
                }
            })
            .collect();

        Ok(FactsTable {
            index_name: index_name.to_string(),
            columns: value_columns.iter().map(|c| c.to_string()).collect(),
            rows,
        })
    }

    pub fn to_html(&self, classes: &str) -> String {
        let mut lines = vec![
            format!(r#"<table border="1" class="dataframe {}">"#, classes),
            "  <thead>".to_string(),
            r#"    <tr style="text-align: right;">"#.to_string(),
            "      <th></th>".to_string(),
        ];
        lines.extend(
            self.columns
                .iter()
                .map(|c| format!("      <th>{}</th>", encode_text(c))),
        );
        lines.push("    </tr>".to_string());
        lines.push("    <tr>".to_string());
        lines.push(format!("      <th>{}</th>", encode_text(&self.index_name)));
        lines.extend(self.columns.iter().map(|_| "      <th></th>".to_string()));
        lines.push("    </tr>".to_string());
        lines.push("  </thead>".to_string());
        lines.push("  <tbody>".to_string());

        for row in &self.rows {
            lines.push("    <tr>".to_string());
            lines.push(format!("      <th>{}</th>", encode_text(&row.key)));
            lines.extend(
                row.values
                    .iter()
                    .map(|v| format!("      <td>{}</td>", encode_text(v))),
            );
            lines.push("    </tr>".to_string());
        }

        lines.push("  </tbody>".to_string());
        lines.push("</table>".to_string());

        lines.into_iter().join("\n")
    }
}
