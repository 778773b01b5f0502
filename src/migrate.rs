use std::path::Path;

use tracing::{debug, warn};

use crate::{
    Error, ErrorContext, ErrorDetail,
    progress::ProgressReporter,
    record::{self, MigrationStats, RecordChange},
};

/// Result of migrating one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileOutcome {
    pub stats: MigrationStats,
    pub written: bool,
}

impl FileOutcome {
    pub fn changed(&self) -> usize {
        self.stats.changed()
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Add the missing `question_image` fields to the dataset stored at `path`.
///
/// The file is overwritten only when at least one record was counted as
/// changed; otherwise it is left byte-for-byte as it was.
pub fn migrate_file<R>(path: &Path, reporter: &R) -> Result<FileOutcome, Error>
where
    R: ProgressReporter + ?Sized,
{
    let context = ErrorContext::new(path.to_owned());
    let name = display_name(path);
    reporter.processing(path);

    let content = std::fs::read_to_string(path)
        .map_err(|e| context.error(ErrorDetail::ReadDocument(e)))?;
    let mut dataset = record::parse_dataset(&content).map_err(|e| context.error(e))?;
    debug!(path = %path.display(), records = dataset.len(), "loaded dataset");

    let stats = record::migrate_dataset_with(&mut dataset, |index, change| {
        if change == RecordChange::MissingAnchor {
            warn!(
                path = %path.display(),
                index,
                "record has no question_text; rebuilt without question_image"
            );
            reporter.anchor_missing(&name, index);
        }
    });

    if stats.changed() == 0 {
        reporter.unchanged(&name);
        return Ok(FileOutcome {
            stats,
            written: false,
        });
    }

    let rendered = record::render_dataset(&dataset).map_err(|e| context.error(e))?;
    std::fs::write(path, rendered).map_err(|e| context.error(ErrorDetail::WriteDocument(e)))?;
    debug!(
        path = %path.display(),
        inserted = stats.inserted,
        missing_anchor = stats.missing_anchor,
        "dataset written"
    );
    reporter.migrated(&name, stats.changed());
    Ok(FileOutcome {
        stats,
        written: true,
    })
}
