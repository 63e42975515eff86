// ---------------------------------------------------------------------------
// Gradebook – the loaded grade sheet
// ---------------------------------------------------------------------------

/// The parsed grade sheet: a roster of student names plus one grade row per
/// student.
///
/// Orientation: the first record of the source file is the roster; every
/// record after that is one student's full grade vector, in roster order.
/// The roster is never mutated after load; grade rows change only through a
/// single-cell edit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gradebook {
    /// Student names, in file order.
    pub students: Vec<String>,
    /// One grade row per student. A row can be shorter than the assignment
    /// count when unparsable cells were dropped at load time.
    pub grades: Vec<Vec<f64>>,
}

impl Gradebook {
    /// Number of students on the roster.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether anything at all was loaded.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty() && self.grades.is_empty()
    }

    /// Number of assignments, derived from the widest grade row. This is the
    /// upper bound for 1-based assignment indices everywhere; there is no
    /// fixed maximum.
    pub fn assignment_count(&self) -> usize {
        self.grades.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Case-insensitive roster lookup. Returns the roster index of the first
    /// matching student.
    pub fn find_student(&self, name: &str) -> Option<usize> {
        let wanted = name.trim().to_lowercase();
        self.students
            .iter()
            .position(|s| s.to_lowercase() == wanted)
    }

    /// A student's grade row. A roster entry with no grade row reads as an
    /// empty row rather than a fault.
    pub fn row(&self, idx: usize) -> &[f64] {
        self.grades.get(idx).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate `(roster index, name, grade row)` for every student that has
    /// a grade row. Rows beyond the roster (or names beyond the rows) are
    /// skipped rather than guessed at.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &str, &[f64])> {
        self.students
            .iter()
            .zip(&self.grades)
            .enumerate()
            .map(|(i, (name, row))| (i, name.as_str(), row.as_slice()))
    }

    /// Every recorded grade, flattened in row order. Input to the class-wide
    /// aggregations.
    pub fn all_grades(&self) -> Vec<f64> {
        self.grades.iter().flatten().copied().collect()
    }

    /// One assignment's column across all students, 0-based. Rows too short
    /// to have the column contribute nothing.
    pub fn assignment_column(&self, idx: usize) -> Vec<f64> {
        self.grades
            .iter()
            .filter_map(|row| row.get(idx))
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Gradebook {
        Gradebook {
            students: vec!["Alice".to_string(), "Bob".to_string()],
            grades: vec![vec![90.0, 80.0], vec![70.0, 60.0]],
        }
    }

    #[test]
    fn test_find_student_ignores_case() {
        let book = sample_book();
        assert_eq!(book.find_student("aLICE"), Some(0));
        assert_eq!(book.find_student("bob"), Some(1));
        assert_eq!(book.find_student("Alice"), book.find_student("ALICE"));
    }

    #[test]
    fn test_find_student_unknown() {
        assert_eq!(sample_book().find_student("Mallory"), None);
    }

    #[test]
    fn test_assignment_count_uses_widest_row() {
        let book = Gradebook {
            students: vec!["A".to_string(), "B".to_string()],
            grades: vec![vec![1.0], vec![1.0, 2.0, 3.0]],
        };
        assert_eq!(book.assignment_count(), 3);
    }

    #[test]
    fn test_assignment_count_empty() {
        assert_eq!(Gradebook::default().assignment_count(), 0);
    }

    #[test]
    fn test_row_without_grades_is_empty() {
        let book = Gradebook {
            students: vec!["A".to_string()],
            grades: vec![],
        };
        assert!(book.row(0).is_empty());
    }

    #[test]
    fn test_all_grades_flattens_in_row_order() {
        assert_eq!(sample_book().all_grades(), vec![90.0, 80.0, 70.0, 60.0]);
    }

    #[test]
    fn test_assignment_column_skips_short_rows() {
        let book = Gradebook {
            students: vec!["A".to_string(), "B".to_string()],
            grades: vec![vec![1.0], vec![2.0, 5.0]],
        };
        assert_eq!(book.assignment_column(1), vec![5.0]);
    }
}
