use std::io;
use std::path::PathBuf;

use gradebook::app;
use gradebook::data::loader;
use gradebook::state::AppState;

/// Default grade sheet location, relative to the working directory. A single
/// optional positional argument overrides it.
const DEFAULT_GRADES_PATH: &str = "grades.csv";

fn main() -> io::Result<()> {
    env_logger::init();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_GRADES_PATH));

    let (book, status) = loader::load_or_empty(&path);
    let mut state = AppState::new(book, status);

    let stdin = io::stdin();
    let stdout = io::stdout();
    app::run(&mut state, &mut stdin.lock(), &mut stdout.lock())
}
