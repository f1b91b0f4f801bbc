use holiday_core::{parse_holiday_date, ExtractionError, HolidayRecord, TableLayout};
use holiday_logging::holiday_debug;
use scraper::{ElementRef, Html, Selector};

/// Lowercased phrase in the `<title>` of the gazette's "not found" page.
/// The site answers HTTP 200 for missing years, so this is the only signal.
pub const NOT_FOUND_MARKER: &str = "page not found";

/// Reads the holiday tables of one year's gazette page.
///
/// Each table's first row is a header and is skipped. Every other row must
/// carry at least two cells: the holiday name and its date text. Table `i`
/// is classified by `layout`. Errors carry the zero-based table index and
/// the row's position within that table (the header is row 0).
pub fn extract_holidays(
    html: &str,
    year: i32,
    keep_names: bool,
    layout: &TableLayout,
) -> Result<Vec<HolidayRecord>, ExtractionError> {
    let doc = Html::parse_document(html);

    if let Some(title) = title_of(&doc) {
        if title.to_lowercase().contains(NOT_FOUND_MARKER) {
            holiday_debug!("Gazette has no holiday page for {}: {:?}", year, title);
            return Ok(Vec::new());
        }
    }

    let Some(table_sel) = Selector::parse("table").ok() else {
        return Ok(Vec::new());
    };

    let mut holidays = Vec::new();
    for (table_index, table) in doc.select(&table_sel).enumerate() {
        let holiday_type = layout.holiday_type_for(table_index);
        for (row_index, row) in table_rows(table).into_iter().enumerate().skip(1) {
            let cells = row_cells(row);
            let [name, date_text, ..] = cells.as_slice() else {
                return Err(ExtractionError::MissingColumns {
                    table: table_index,
                    row: row_index,
                    found: cells.len(),
                });
            };
            let date = parse_holiday_date(date_text, year).map_err(|source| {
                ExtractionError::InvalidDate {
                    table: table_index,
                    row: row_index,
                    source,
                }
            })?;
            let event_name = (keep_names && !name.is_empty()).then(|| name.clone());
            holidays.push(HolidayRecord::new(date, event_name, holiday_type));
        }
    }
    Ok(holidays)
}

/// Text of the document's `<title>`, trimmed, if present and non-empty.
pub fn page_title(html: &str) -> Option<String> {
    title_of(&Html::parse_document(html))
}

fn title_of(doc: &Html) -> Option<String> {
    let title_sel = Selector::parse("title").ok()?;
    doc.select(&title_sel)
        .next()
        .map(|t| t.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Rows that belong to `table` itself, not to tables nested in its cells.
fn table_rows(table: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    let mut rows = Vec::new();
    for child in table.children().filter_map(ElementRef::wrap) {
        match child.value().name() {
            "tr" => rows.push(child),
            "thead" | "tbody" | "tfoot" => rows.extend(
                child
                    .children()
                    .filter_map(ElementRef::wrap)
                    .filter(|el| el.value().name() == "tr"),
            ),
            _ => {}
        }
    }
    rows
}

fn row_cells(row: ElementRef<'_>) -> Vec<String> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "td")
        .map(cell_text)
        .collect()
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
