/// Экспорт текущей страницы списка в CSV
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::shared::components::column::ColumnDef;

/// CSV с разделителем `;` и UTF-8 BOM (Excel открывает его без мастера импорта)
pub fn build_csv<T>(columns: &[ColumnDef<T>], rows: &[T]) -> String {
    let mut csv_content = String::new();
    csv_content.push('\u{FEFF}');

    let headers: Vec<String> = columns.iter().map(|c| escape_csv_cell(c.label)).collect();
    csv_content.push_str(&headers.join(";"));
    csv_content.push('\n');

    for row in rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|c| escape_csv_cell(&c.cell(row).display_text()))
            .collect();
        csv_content.push_str(&cells.join(";"));
        csv_content.push('\n');
    }
    csv_content
}

/// Экспортирует строки в CSV файл и инициирует скачивание
pub fn export_to_csv<T>(columns: &[ColumnDef<T>], rows: &[T], filename: &str) -> Result<(), String> {
    if rows.is_empty() {
        return Err("Nothing to export".to_string());
    }
    let blob = create_csv_blob(&build_csv(columns, rows))?;
    download_blob(&blob, filename)
}

/// Экранирует CSV ячейку если необходимо
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

/// Создает Blob объект с CSV данными
fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Инициирует скачивание Blob через временную ссылку
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::components::column::Cell;

    struct Row {
        name: &'static str,
        seats: Option<u32>,
    }

    fn columns() -> Vec<ColumnDef<Row>> {
        vec![
            ColumnDef::new("name", "Name", |r: &Row| Cell::text(r.name)),
            ColumnDef::new("seats", "Seats; left", |r: &Row| {
                Cell::Number(r.seats.map(f64::from))
            }),
        ]
    }

    #[test]
    fn test_build_csv() {
        let rows = vec![
            Row {
                name: "Rust \"basics\"",
                seats: Some(12),
            },
            Row {
                name: "Evening",
                seats: None,
            },
        ];
        let csv = build_csv(&columns(), &rows);
        assert!(csv.starts_with('\u{FEFF}'));
        let lines: Vec<&str> = csv.trim_start_matches('\u{FEFF}').lines().collect();
        assert_eq!(lines[0], "Name;\"Seats; left\"");
        assert_eq!(lines[1], "\"Rust \"\"basics\"\"\";12");
        assert_eq!(lines[2], "Evening;-");
    }
}
