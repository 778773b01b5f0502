use std::path::PathBuf;

use tracing::info;

use crate::{
    Error,
    config::Config,
    migrate::{self, FileOutcome},
    progress::ProgressReporter,
};

/// Per-target results of one run, in configuration order.
#[derive(Debug, Default)]
pub struct Summary {
    pub files: Vec<(PathBuf, Option<FileOutcome>)>,
}

impl Summary {
    pub fn total_changes(&self) -> usize {
        self.files
            .iter()
            .filter_map(|(_, outcome)| outcome.as_ref())
            .map(FileOutcome::changed)
            .sum()
    }

    pub fn missing(&self) -> impl Iterator<Item = &PathBuf> {
        self.files
            .iter()
            .filter(|(_, outcome)| outcome.is_none())
            .map(|(path, _)| path)
    }
}

/// Migrate every configured target in order.
///
/// Targets that do not exist are reported and skipped. The first failing
/// file aborts the run; files migrated before it keep their new content.
pub fn run<R>(config: &Config, reporter: &R) -> Result<Summary, Error>
where
    R: ProgressReporter + ?Sized,
{
    let mut summary = Summary::default();
    for path in &config.targets {
        if !path.exists() {
            reporter.missing(path);
            summary.files.push((path.clone(), None));
            continue;
        }
        let outcome = migrate::migrate_file(path, reporter)?;
        summary.files.push((path.clone(), Some(outcome)));
    }
    let total = summary.total_changes();
    info!(targets = config.targets.len(), total, "migration finished");
    reporter.finished(total);
    Ok(summary)
}
