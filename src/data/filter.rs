use super::model::Gradebook;
use super::stats::mean;

// ---------------------------------------------------------------------------
// Grade-range filter
// ---------------------------------------------------------------------------

/// Return roster indices of students whose grade average lies within the
/// inclusive `[low, high]` band.
///
/// * An inverted band (`low > high`) matches nothing; callers get an empty
///   result, not an error.
/// * A student with no recorded grades averages 0.0 and is matched on that
///   basis like any other.
pub fn students_in_band(book: &Gradebook, low: f64, high: f64) -> Vec<usize> {
    book.rows()
        .filter(|(_, _, row)| {
            let avg = mean(row);
            avg >= low && avg <= high
        })
        .map(|(i, _, _)| i)
        .collect()
}
