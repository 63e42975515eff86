use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::command::Command;
use crate::report::{self, ReportError};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Interactive menu loop
// ---------------------------------------------------------------------------

const MENU: &str = "\nWelcome to the Grade Manager!
1. Display the grade average of a single student
2. Display all grades for a student
3. Display all grades of ALL students
4. Find the average grade of the class
5. Find the average grade of an assignment
6. Find the lowest and highest grades in the class
7. Filter students by grade range
8. Change a student's grade
9. Quit";

/// Run the menu loop until the operator quits or the input stream ends.
///
/// Generic over the streams so tests can drive a whole session from an
/// in-memory script and inspect the captured output.
pub fn run<R: BufRead, W: Write>(
    state: &mut AppState,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    if let Some(msg) = state.take_status() {
        writeln!(output, "{msg}")?;
    }

    loop {
        writeln!(output, "{MENU}")?;
        write!(output, "\nWhat would you like to do? (Enter the number): ")?;
        output.flush()?;

        // EOF behaves like quitting; a closed stdin must not spin forever.
        let Some(selection) = read_line(input)? else {
            break;
        };
        match Command::parse(&selection) {
            Some(Command::Quit) => {
                writeln!(output, "\nHave a great rest of your day!")?;
                break;
            }
            Some(cmd) => dispatch(cmd, state, input, output)?,
            None => writeln!(output, "\nInvalid option. Please enter a valid number.")?,
        }
    }
    Ok(())
}

/// Prompt for a command's parameters, run it, print the result or the
/// error. Every failure path returns to the menu with no partial effect.
fn dispatch<R: BufRead, W: Write>(
    cmd: Command,
    state: &mut AppState,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    match cmd {
        Command::StudentAverage => {
            let Some(name) = prompt(input, output, "\nWhich student would you like to choose?")?
            else {
                return Ok(());
            };
            print_outcome(output, report::student_average(&state.book, &name))
        }
        Command::StudentGrades => {
            let Some(name) = prompt(input, output, "\nWhich student would you like to choose?")?
            else {
                return Ok(());
            };
            print_outcome(output, report::student_grades(&state.book, &name))
        }
        Command::AllGrades => print_outcome(output, report::all_grades(&state.book)),
        Command::ClassAverage => print_outcome(output, report::class_average(&state.book)),
        Command::AssignmentAverage => {
            let bound = state.book.assignment_count();
            let Some(number) = prompt_number::<usize, _, _>(
                input,
                output,
                &format!("\nWhich assignment would you like to get the average of (1-{bound})?"),
                INVALID_ASSIGNMENT,
            )?
            else {
                return Ok(());
            };
            print_outcome(output, report::assignment_average(&state.book, number))
        }
        Command::ClassExtremes => print_outcome(output, report::class_extremes(&state.book)),
        Command::FilterByRange => {
            let Some(low) = prompt_number::<f64, _, _>(
                input,
                output,
                "\nEnter the low range you would like to use:",
                "\nInvalid input. Please enter a valid low range.",
            )?
            else {
                return Ok(());
            };
            let Some(high) = prompt_number::<f64, _, _>(
                input,
                output,
                "\nEnter the high range you would like to use:",
                "\nInvalid input. Please enter a valid high range.",
            )?
            else {
                return Ok(());
            };
            print_outcome(output, report::filter_by_band(&state.book, low, high))
        }
        Command::EditGrade => edit_grade(state, input, output),
        Command::Quit => Ok(()), // handled by the caller
    }
}

/// The edit flow validates each answer as it is entered, so a typo on the
/// first prompt does not drag the operator through the remaining ones.
fn edit_grade<R: BufRead, W: Write>(
    state: &mut AppState,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let Some(name) = prompt(
        input,
        output,
        "\nWhich student's grade would you like to change?",
    )?
    else {
        return Ok(());
    };
    let Some(idx) = state.book.find_student(&name) else {
        return print_outcome(output, Err(ReportError::UnknownStudent));
    };
    let display_name = state.book.students[idx].clone();

    let bound = state.book.assignment_count();
    let Some(number) = prompt_number::<usize, _, _>(
        input,
        output,
        &format!("\nWhich assignment's grade would you like to change (1-{bound})?"),
        INVALID_ASSIGNMENT,
    )?
    else {
        return Ok(());
    };

    let Some(value) = prompt_number::<f64, _, _>(
        input,
        output,
        &format!("\nEnter the new grade for {display_name}'s assignment #{number}:"),
        "\nInvalid input. Please enter a valid grade.",
    )?
    else {
        return Ok(());
    };

    print_outcome(
        output,
        report::edit_grade(&mut state.book, &name, number, value),
    )
}

const INVALID_ASSIGNMENT: &str = "\nInvalid input. Please enter a valid assignment number.";

fn print_outcome<W: Write>(output: &mut W, outcome: Result<String, ReportError>) -> io::Result<()> {
    match outcome {
        Ok(text) => writeln!(output, "\n{text}"),
        Err(e) => writeln!(output, "\n{e}"),
    }
}

/// Read one trimmed line; `None` once the input stream is exhausted.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    writeln!(output, "{text}")?;
    output.flush()?;
    read_line(input)
}

/// Prompt for a number. A token that does not parse prints `invalid` and
/// yields `None`, aborting the enclosing operation with no partial effect.
fn prompt_number<T: FromStr, R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
    invalid: &str,
) -> io::Result<Option<T>> {
    match prompt(input, output, text)? {
        Some(token) => match token.parse() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                writeln!(output, "{invalid}")?;
                Ok(None)
            }
        },
        None => Ok(None),
    }
}
