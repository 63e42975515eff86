// ---------------------------------------------------------------------------
// Menu commands
// ---------------------------------------------------------------------------

/// One entry of the interactive menu. The selection token is parsed into
/// this enum once and dispatch happens over it, not over raw strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    StudentAverage,
    StudentGrades,
    AllGrades,
    ClassAverage,
    AssignmentAverage,
    ClassExtremes,
    FilterByRange,
    EditGrade,
    Quit,
}

impl Command {
    /// Parse a menu selection. Surrounding whitespace is ignored; anything
    /// but "1"–"9" is rejected.
    pub fn parse(token: &str) -> Option<Command> {
        match token.trim() {
            "1" => Some(Command::StudentAverage),
            "2" => Some(Command::StudentGrades),
            "3" => Some(Command::AllGrades),
            "4" => Some(Command::ClassAverage),
            "5" => Some(Command::AssignmentAverage),
            "6" => Some(Command::ClassExtremes),
            "7" => Some(Command::FilterByRange),
            "8" => Some(Command::EditGrade),
            "9" => Some(Command::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_selection() {
        assert_eq!(Command::parse("1"), Some(Command::StudentAverage));
        assert_eq!(Command::parse("2"), Some(Command::StudentGrades));
        assert_eq!(Command::parse("3"), Some(Command::AllGrades));
        assert_eq!(Command::parse("4"), Some(Command::ClassAverage));
        assert_eq!(Command::parse("5"), Some(Command::AssignmentAverage));
        assert_eq!(Command::parse("6"), Some(Command::ClassExtremes));
        assert_eq!(Command::parse("7"), Some(Command::FilterByRange));
        assert_eq!(Command::parse("8"), Some(Command::EditGrade));
        assert_eq!(Command::parse("9"), Some(Command::Quit));
    }

    #[test]
    fn test_parse_ignores_surrounding_whitespace() {
        assert_eq!(Command::parse(" 4 \n"), Some(Command::ClassAverage));
    }

    #[test]
    fn test_parse_rejects_everything_else() {
        for token in ["0", "10", "99", "", "quit", "4.0", "four"] {
            assert_eq!(Command::parse(token), None, "token {token:?}");
        }
    }
}
