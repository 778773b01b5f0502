//! Quiz question records and the field insertion applied to them.
//!
//! A record is kept as an insertion-ordered JSON object so that rendering it
//! back reproduces the original key layout.

use serde_json::Value;

use crate::{ANCHOR_FIELD, ErrorDetail, TARGET_FIELD};

/// One quiz question. Key order follows the source document.
pub type Record = serde_json::Map<String, Value>;

/// All records of one file, in document order.
pub type Dataset = Vec<Record>;

/// What happened to a single record during migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordChange {
    /// The record already carried the target field.
    Untouched,
    /// The target field was inserted right after the anchor.
    Inserted,
    /// The record was rebuilt but has no anchor, so nothing was inserted.
    /// Still counted as a change.
    MissingAnchor,
}

impl RecordChange {
    pub fn is_change(self) -> bool {
        !matches!(self, RecordChange::Untouched)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MigrationStats {
    pub inserted: usize,
    pub missing_anchor: usize,
    pub untouched: usize,
}

impl MigrationStats {
    /// Number of records counted as changed, including those without an anchor.
    pub fn changed(&self) -> usize {
        self.inserted + self.missing_anchor
    }

    fn record(&mut self, change: RecordChange) {
        match change {
            RecordChange::Untouched => self.untouched += 1,
            RecordChange::Inserted => self.inserted += 1,
            RecordChange::MissingAnchor => self.missing_anchor += 1,
        }
    }
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parse a document whose top level is an array of objects.
pub fn parse_dataset(content: &str) -> Result<Dataset, ErrorDetail> {
    let value: Value = serde_json::from_str(content).map_err(ErrorDetail::ParseJson)?;
    let Value::Array(items) = value else {
        return Err(ErrorDetail::TypeMismatch {
            expected: "array",
            got: kind_of(&value),
        });
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(record) => Ok(record),
            other => Err(ErrorDetail::RecordNotObject {
                index,
                got: kind_of(&other),
            }),
        })
        .collect()
}

/// Render with two-space indentation. Non-ASCII text is written as-is.
pub fn render_dataset(dataset: &Dataset) -> Result<String, ErrorDetail> {
    serde_json::to_string_pretty(dataset).map_err(ErrorDetail::Render)
}

/// Ensure `question_image` follows `question_text` in `record`.
///
/// Records that already have the target field are left alone. Any other
/// record is rebuilt entry by entry, with an empty target field placed
/// directly after the anchor.
pub fn insert_question_image(record: &mut Record) -> RecordChange {
    if record.contains_key(TARGET_FIELD) {
        return RecordChange::Untouched;
    }
    let mut rebuilt = Record::with_capacity(record.len() + 1);
    let mut anchored = false;
    for (key, value) in std::mem::take(record) {
        let is_anchor = key == ANCHOR_FIELD;
        rebuilt.insert(key, value);
        if is_anchor {
            rebuilt.insert(TARGET_FIELD.to_owned(), Value::String(String::new()));
            anchored = true;
        }
    }
    *record = rebuilt;
    if anchored {
        RecordChange::Inserted
    } else {
        RecordChange::MissingAnchor
    }
}

/// Apply [`insert_question_image`] to every record, calling `on_change` with
/// the index of each record that was counted as changed.
pub fn migrate_dataset_with<F>(dataset: &mut Dataset, mut on_change: F) -> MigrationStats
where
    F: FnMut(usize, RecordChange),
{
    let mut stats = MigrationStats::default();
    for (index, record) in dataset.iter_mut().enumerate() {
        let change = insert_question_image(record);
        if change.is_change() {
            on_change(index, change);
        }
        stats.record(change);
    }
    stats
}

pub fn migrate_dataset(dataset: &mut Dataset) -> MigrationStats {
    migrate_dataset_with(dataset, |_, _| {})
}
