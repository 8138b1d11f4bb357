use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::{GridError, GridResult};
use crate::model::Task;

/// Columns the importer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Name,
    Start,
    End,
}

/// Try parsing a date string with several common formats.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    for fmt in &["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    None
}

/// Detect delimiter by checking the first line for common separators.
fn detect_delimiter(first_line: &str) -> u8 {
    let semicolons = first_line.matches(';').count();
    let commas = first_line.matches(',').count();
    let tabs = first_line.matches('\t').count();

    if semicolons >= commas && semicolons >= tabs {
        b';'
    } else if tabs >= commas {
        b'\t'
    } else {
        b','
    }
}

fn header_to_column(header: &str) -> Option<Column> {
    let normalized = header.trim().to_lowercase().replace([' ', '-', '_'], "");
    match normalized.as_str() {
        "name" | "task" | "tasklabel" | "taskname" | "label" | "title" | "activity" => {
            Some(Column::Name)
        }
        "start" | "startdate" | "from" | "begin" | "begindate" => Some(Column::Start),
        "end" | "enddate" | "to" | "finish" | "finishdate" | "due" | "duedate" => Some(Column::End),
        _ => None,
    }
}

/// Import tasks from a CSV file.
///
/// Auto-detects the delimiter (comma, semicolon, tab) and matches headers
/// loosely ("Task Label", "Start Date", ...). Rows without a name or with an
/// unreadable date are skipped. Returns `(tasks, skipped_count)`.
pub fn import_csv(path: &Path) -> GridResult<(Vec<Task>, usize)> {
    let content = std::fs::read_to_string(path).map_err(|source| GridError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    import_csv_str(&content)
}

/// Same as [`import_csv`], reading from an in-memory string.
pub fn import_csv_str(content: &str) -> GridResult<(Vec<Task>, usize)> {
    let first_line = content.lines().next().unwrap_or("");
    let delimiter = detect_delimiter(first_line);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| GridError::Csv(format!("failed to read headers: {}", e)))?
        .clone();
    let columns: Vec<Option<Column>> = headers.iter().map(header_to_column).collect();

    let required = [Column::Name, Column::Start, Column::End];
    if !required.iter().all(|c| columns.contains(&Some(*c))) {
        let found: Vec<&str> = headers.iter().collect();
        return Err(GridError::Csv(format!(
            "missing required columns. Found headers: {:?}. \
             Need columns for: task name, start date, end date.",
            found
        )));
    }

    let mut tasks = Vec::new();
    let mut skipped = 0usize;

    for (i, result) in reader.records().enumerate() {
        let line = i + 2;
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                warn!(line, error = %e, "skipping unreadable CSV row");
                skipped += 1;
                continue;
            }
        };

        let mut name = None;
        let mut start = None;
        let mut end = None;
        for (field, column) in record.iter().zip(&columns) {
            match column {
                Some(Column::Name) => name = Some(field),
                Some(Column::Start) => start = Some(field),
                Some(Column::End) => end = Some(field),
                None => {}
            }
        }

        let Some(name) = name.filter(|n| !n.is_empty()) else {
            skipped += 1;
            continue;
        };
        let Some(start_date) = start.and_then(parse_date) else {
            warn!(line, value = start.unwrap_or(""), "skipping row with invalid start date");
            skipped += 1;
            continue;
        };
        let Some(end_date) = end.and_then(parse_date) else {
            warn!(line, value = end.unwrap_or(""), "skipping row with invalid end date");
            skipped += 1;
            continue;
        };

        tasks.push(Task::new(name, start_date, end_date));
    }

    if tasks.is_empty() {
        return Err(GridError::Csv(if skipped > 0 {
            format!("no valid tasks found ({} rows skipped)", skipped)
        } else {
            "file is empty or has no data rows".to_string()
        }));
    }

    debug!(tasks = tasks.len(), skipped, "imported CSV rows");
    Ok((tasks, skipped))
}
