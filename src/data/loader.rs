use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

use super::model::Gradebook;

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load a gradebook from a comma-separated file.
///
/// Layout: the first record holds the student names (the roster); every
/// following record is one student's grade vector, in roster order:
///
/// ```text
/// Alice,Bob,Carol
/// 90,85.5,77
/// 80,70,95
/// 60,88,91
/// ```
///
/// Cells that do not parse as numbers are dropped from their row, which can
/// leave that row shorter than the assignment count. Rows are not padded or
/// validated against each other.
pub fn load_csv(path: &Path) -> Result<Gradebook> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut students: Vec<String> = Vec::new();
    let mut grades: Vec<Vec<f64>> = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("reading CSV row {row_no}"))?;
        if students.is_empty() {
            students = record.iter().map(|s| s.to_string()).collect();
        } else {
            let row: Vec<f64> = record
                .iter()
                .filter_map(|cell| cell.parse::<f64>().ok())
                .collect();
            grades.push(row);
        }
    }

    Ok(Gradebook { students, grades })
}

/// Load a gradebook, degrading to an empty one when the file is missing or
/// unreadable. The error is logged and returned as an operator-visible
/// message; the program keeps running either way.
pub fn load_or_empty(path: &Path) -> (Gradebook, Option<String>) {
    match load_csv(path) {
        Ok(book) => {
            log::info!(
                "Loaded {} students and {} grade rows from {}",
                book.len(),
                book.grades.len(),
                path.display()
            );
            (book, None)
        }
        Err(e) => {
            log::error!("Failed to load {}: {e:#}", path.display());
            (
                Gradebook::default(),
                Some(format!("Error loading {}: {e:#}", path.display())),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(name)
    }

    #[test]
    fn test_first_record_becomes_roster() {
        let path = temp_path("gradebook_test_roster.csv");
        fs::write(&path, "Alice,Bob\n90,80\n70,60\n").unwrap();

        let book = load_csv(&path).unwrap();
        assert_eq!(book.students, vec!["Alice", "Bob"]);
        assert_eq!(book.grades, vec![vec![90.0, 80.0], vec![70.0, 60.0]]);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_non_numeric_cells_are_dropped() {
        let path = temp_path("gradebook_test_dropped.csv");
        fs::write(&path, "Alice,Bob\n90,oops,80\n70,60\n").unwrap();

        let book = load_csv(&path).unwrap();
        // The bad cell vanishes, shortening the row; nothing is substituted.
        assert_eq!(book.grades[0], vec![90.0, 80.0]);
        assert_eq!(book.grades[1], vec![70.0, 60.0]);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_ragged_rows_are_accepted() {
        let path = temp_path("gradebook_test_ragged.csv");
        fs::write(&path, "Alice,Bob\n90\n70,60,50\n").unwrap();

        let book = load_csv(&path).unwrap();
        assert_eq!(book.grades[0], vec![90.0]);
        assert_eq!(book.grades[1], vec![70.0, 60.0, 50.0]);
        assert_eq!(book.assignment_count(), 3);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_cells_are_trimmed() {
        let path = temp_path("gradebook_test_trim.csv");
        fs::write(&path, "Alice, Bob\n 90 , 80\n").unwrap();

        let book = load_csv(&path).unwrap();
        assert_eq!(book.students, vec!["Alice", "Bob"]);
        assert_eq!(book.grades[0], vec![90.0, 80.0]);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_degrades_to_empty() {
        let path = temp_path("gradebook_test_no_such_file.csv");
        let _ = fs::remove_file(&path);

        let (book, message) = load_or_empty(&path);
        assert!(book.is_empty());
        assert!(message.is_some());
    }
}
