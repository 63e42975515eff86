use thiserror::Error;

use crate::data::filter::students_in_band;
use crate::data::model::Gradebook;
use crate::data::stats::{self, mean};

// ---------------------------------------------------------------------------
// Query / report functions
// ---------------------------------------------------------------------------
//
// Each menu operation maps to one function here. All of them take the
// gradebook plus the operator-supplied parameters and produce the text to
// display; only `edit_grade` mutates anything. Averages are printed with two
// decimals, individual grades as stored.

/// Failures a query can hit. All of them are recoverable: the menu prints
/// the message and shows the next prompt.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("Student does not exist. Please enter a valid name.")]
    UnknownStudent,
    #[error("Invalid input. Please enter a valid assignment number.")]
    AssignmentOutOfRange,
    #[error("No grades are loaded.")]
    EmptyGradebook,
}

/// Menu option 1: a single student's grade average.
pub fn student_average(book: &Gradebook, name: &str) -> Result<String, ReportError> {
    let idx = book.find_student(name).ok_or(ReportError::UnknownStudent)?;
    let avg = mean(book.row(idx));
    Ok(format!(
        "{}'s grade in the class is {avg:.2}",
        book.students[idx]
    ))
}

/// Menu option 2: every grade a single student has recorded, in original
/// order.
pub fn student_grades(book: &Gradebook, name: &str) -> Result<String, ReportError> {
    let idx = book.find_student(name).ok_or(ReportError::UnknownStudent)?;
    Ok(format!(
        "{}'s grades for this class are:\n{}",
        book.students[idx],
        join_grades(book.row(idx))
    ))
}

/// Menu option 3: the whole book, one line per student in roster order.
pub fn all_grades(book: &Gradebook) -> Result<String, ReportError> {
    let lines: Vec<String> = book
        .rows()
        .map(|(_, name, row)| format!("{name} grades are: {}", join_grades(row)))
        .collect();
    if lines.is_empty() {
        return Err(ReportError::EmptyGradebook);
    }
    Ok(lines.join("\n"))
}

/// Menu option 4: class-wide average over every recorded grade. An empty
/// book averages 0 by the shared empty-input convention.
pub fn class_average(book: &Gradebook) -> Result<String, ReportError> {
    let avg = mean(&book.all_grades());
    Ok(format!("The class average is: {avg:.2}"))
}

/// Menu option 5: one assignment's average across all students. The 1-based
/// index is validated against the derived assignment count; rows too short
/// to have the column contribute nothing to the mean.
pub fn assignment_average(book: &Gradebook, number: usize) -> Result<String, ReportError> {
    if number < 1 || number > book.assignment_count() {
        return Err(ReportError::AssignmentOutOfRange);
    }
    let avg = mean(&book.assignment_column(number - 1));
    Ok(format!("The average for assignment #{number} is {avg:.2}"))
}

/// Menu option 6: the class extremes, each attributed to the first student
/// (roster order) whose row holds that exact value. Further students tied at
/// the extreme are not listed.
pub fn class_extremes(book: &Gradebook) -> Result<String, ReportError> {
    let all = book.all_grades();
    if all.is_empty() {
        return Err(ReportError::EmptyGradebook);
    }
    let lowest = stats::min(&all);
    let highest = stats::max(&all);
    let low_holder = holder_of(book, lowest).ok_or(ReportError::EmptyGradebook)?;
    let high_holder = holder_of(book, highest).ok_or(ReportError::EmptyGradebook)?;
    Ok(format!(
        "{low_holder} is the student with the lowest grade: {lowest}\n\
         {high_holder} is the student with the highest grade: {highest}"
    ))
}

/// Menu option 7: students whose average falls within the inclusive
/// `[low, high]` band, listed as `position. name: average` with the 1-based
/// roster position. An inverted band simply matches nobody.
pub fn filter_by_band(book: &Gradebook, low: f64, high: f64) -> Result<String, ReportError> {
    let matches = students_in_band(book, low, high);
    if matches.is_empty() {
        return Ok("No students fall within that range.".to_string());
    }
    let lines: Vec<String> = matches
        .into_iter()
        .map(|idx| {
            let avg = mean(book.row(idx));
            format!("{}. {}: {avg:.2}", idx + 1, book.students[idx])
        })
        .collect();
    Ok(lines.join("\n"))
}

/// Menu option 8: overwrite a single cell. The assignment index must fall
/// within the derived bound and within the target student's actual row
/// (which can be shorter when cells were dropped at load).
pub fn edit_grade(
    book: &mut Gradebook,
    name: &str,
    number: usize,
    value: f64,
) -> Result<String, ReportError> {
    let idx = book.find_student(name).ok_or(ReportError::UnknownStudent)?;
    if number < 1 || number > book.assignment_count() {
        return Err(ReportError::AssignmentOutOfRange);
    }
    let cell = book
        .grades
        .get_mut(idx)
        .and_then(|row| row.get_mut(number - 1))
        .ok_or(ReportError::AssignmentOutOfRange)?;
    *cell = value;
    Ok("Grade updated successfully.".to_string())
}

/// First student whose row contains `value` exactly. The value came out of
/// the same matrix, so exact f64 comparison is the point, not a hazard.
fn holder_of(book: &Gradebook, value: f64) -> Option<&str> {
    book.rows()
        .find(|(_, _, row)| row.contains(&value))
        .map(|(_, name, _)| name)
}

fn join_grades(row: &[f64]) -> String {
    row.iter()
        .map(|g| g.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
