use crate::data::model::Gradebook;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Everything the menu loop works on. Built once by the loader at startup
/// and passed by reference into the dispatcher; there are no process-wide
/// globals.
pub struct AppState {
    /// The loaded grade sheet. Empty (not absent) when loading failed, so
    /// every query still answers instead of the program dying.
    pub book: Gradebook,

    /// One-shot message shown before the first menu render (load errors).
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(book: Gradebook, status_message: Option<String>) -> Self {
        Self {
            book,
            status_message,
        }
    }

    /// Take the pending status message, leaving none behind.
    pub fn take_status(&mut self) -> Option<String> {
        self.status_message.take()
    }
}
