//! Progress reporting and display
//!
//! Operator-facing status lines are emitted through [`ProgressReporter`] so the
//! migration logic stays decoupled from where (and whether) they are shown.

use std::path::Path;

/// Progress reporter trait - implement this for different display backends.
pub trait ProgressReporter {
    /// A target file is about to be read.
    fn processing(&self, path: &Path);

    /// `count` records of `file_name` were changed and the file was rewritten.
    fn migrated(&self, file_name: &str, count: usize);

    /// `file_name` needed no changes and was left as is.
    fn unchanged(&self, file_name: &str);

    /// A configured target does not exist and was skipped.
    fn missing(&self, path: &Path);

    /// Record `index` of `file_name` has no `question_text` to insert after.
    fn anchor_missing(&self, file_name: &str, index: usize);

    /// All targets were handled.
    fn finished(&self, total: usize);
}

/// A no-op reporter for when progress display is disabled.
pub struct NullReporter;

impl ProgressReporter for NullReporter {
    fn processing(&self, _path: &Path) {}
    fn migrated(&self, _file_name: &str, _count: usize) {}
    fn unchanged(&self, _file_name: &str) {}
    fn missing(&self, _path: &Path) {}
    fn anchor_missing(&self, _file_name: &str, _index: usize) {}
    fn finished(&self, _total: usize) {}
}

/// Plain line-oriented reporter.
pub struct SimpleReporter {
    term: console::Term,
}

impl SimpleReporter {
    pub fn new() -> Self {
        Self::with_term(console::Term::stdout())
    }

    pub fn with_term(term: console::Term) -> Self {
        Self { term }
    }

    fn line(&self, line: &str) {
        // Status lines are best effort.
        if let Err(e) = self.term.write_line(line) {
            tracing::debug!(%e, "failed to write status line");
        }
    }
}

impl Default for SimpleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for SimpleReporter {
    fn processing(&self, path: &Path) {
        self.line(&lines::processing(path));
    }

    fn migrated(&self, file_name: &str, count: usize) {
        self.line(&lines::migrated(file_name, count));
    }

    fn unchanged(&self, file_name: &str) {
        self.line(&lines::unchanged(file_name));
    }

    fn missing(&self, path: &Path) {
        self.line(&lines::missing(path));
    }

    fn anchor_missing(&self, _file_name: &str, _index: usize) {}

    fn finished(&self, total: usize) {
        for line in lines::finished(total) {
            self.line(&line);
        }
    }
}

/// Status line texts printed by [`SimpleReporter`].
pub mod lines {
    use std::path::Path;

    pub fn processing(path: &Path) -> String {
        format!("Processing file: {}", path.display())
    }

    pub fn migrated(file_name: &str, count: usize) -> String {
        format!("Added question_image field to {count} questions in {file_name}")
    }

    pub fn unchanged(file_name: &str) -> String {
        format!("No changes needed for {file_name}")
    }

    pub fn missing(path: &Path) -> String {
        format!("File not found: {}", path.display())
    }

    /// The summary is preceded by an empty line.
    pub fn finished(total: usize) -> [String; 2] {
        [String::new(), format!("Total changes made: {total}")]
    }
}

/// Reporter that keeps every event, for assertions in tests.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingReporter {
    pub events: std::cell::RefCell<Vec<Event>>,
}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    Processing(std::path::PathBuf),
    Migrated(String, usize),
    Unchanged(String),
    Missing(std::path::PathBuf),
    AnchorMissing(String, usize),
    Finished(usize),
}

#[cfg(test)]
impl RecordingReporter {
    pub fn take(&self) -> Vec<Event> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    fn push(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}

#[cfg(test)]
impl ProgressReporter for RecordingReporter {
    fn processing(&self, path: &Path) {
        self.push(Event::Processing(path.to_owned()));
    }

    fn migrated(&self, file_name: &str, count: usize) {
        self.push(Event::Migrated(file_name.to_owned(), count));
    }

    fn unchanged(&self, file_name: &str) {
        self.push(Event::Unchanged(file_name.to_owned()));
    }

    fn missing(&self, path: &Path) {
        self.push(Event::Missing(path.to_owned()));
    }

    fn anchor_missing(&self, file_name: &str, index: usize) {
        self.push(Event::AnchorMissing(file_name.to_owned(), index));
    }

    fn finished(&self, total: usize) {
        self.push(Event::Finished(total));
    }
}
