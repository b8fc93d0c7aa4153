//! Running statistics for a listing pass.

use chrono::{DateTime, Utc};

use crate::list::ObjectEntry;

/// Statistics folded over a stream of listed objects.
///
/// The fold keeps the object count, the byte total, the newest object
/// seen so far, and the largest. The largest slot is only re-examined
/// when an entry also takes the newest slot: an entry that is larger
/// than the current largest but not newer than the current newest
/// leaves the largest slot untouched.
#[derive(Debug, Clone, Default)]
pub struct ListingSummary {
    /// Number of objects seen
    pub count: u64,

    /// Total size of all objects seen, in bytes
    pub total_bytes: u64,

    /// Key and timestamp of the newest object seen
    pub newest: Option<(String, Option<DateTime<Utc>>)>,

    /// Key and size of the largest object seen among newest-slot updates
    pub largest: Option<(String, u64)>,
}

impl ListingSummary {
    /// Create an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one listed entry into the summary.
    pub fn observe(&mut self, entry: &ObjectEntry) {
        self.count += 1;
        self.total_bytes += entry.size;

        let take_newest = match &self.newest {
            None => true,
            Some((_, current)) => is_later(entry.last_modified, *current),
        };

        if take_newest {
            self.newest = Some((entry.key.clone(), entry.last_modified));

            if entry.size > self.largest.as_ref().map_or(0, |(_, size)| *size) {
                self.largest = Some((entry.key.clone(), entry.size));
            }
        }
    }

    /// Whether no objects were seen.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Render the summary block.
    ///
    /// Count and total are always present; the newest and largest lines
    /// appear only when an object filled the corresponding slot.
    pub fn report_lines(&self) -> Vec<String> {
        let mut lines = vec![
            "Summary".to_string(),
            "-------".to_string(),
            format!("Object count : {}", self.count),
            format!("Total size   : {} bytes", self.total_bytes),
        ];

        if let Some((key, ts)) = &self.newest {
            let ts = ts.map_or_else(|| "unknown".to_string(), |t| t.to_string());
            lines.push(format!("Newest object: {key} @ {ts}"));
        }

        if let Some((key, size)) = &self.largest {
            lines.push(format!("Largest obj  : {key} ({size} bytes)"));
        }

        lines
    }
}

/// Whether `candidate` is strictly later than `current`.
///
/// A timestamp beats a missing one; a missing timestamp beats nothing.
fn is_later(candidate: Option<DateTime<Utc>>, current: Option<DateTime<Utc>>) -> bool {
    match (candidate, current) {
        (Some(candidate), Some(current)) => candidate > current,
        (Some(_), None) => true,
        (None, _) => false,
    }
}
