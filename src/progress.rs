// src/progress.rs
use crate::error::NpcError;

/// What a running scrape reports, in order: one `Begin`, then exactly one
/// `Item` per NPC link on the index page.
#[derive(Debug)]
pub enum ProgressEvent {
    /// Number of NPC pages the scrape will go through.
    Begin { total: usize },
    Item(ItemReport),
}

/// Outcome for one NPC link.
#[derive(Debug)]
pub struct ItemReport {
    /// 0-based position on the index page.
    pub index: usize,
    pub name: String,
    pub status: ItemStatus,
}

#[derive(Debug)]
pub enum ItemStatus {
    /// Table found and parsed; a record was produced.
    Parsed,
    /// NPC has no living preferences; a record without a table was produced.
    NoPreferences,
    /// No record for this NPC. The scrape carried on.
    Failed(NpcError),
}

impl ProgressEvent {
    /// Replay this event on a frontend sink.
    pub fn forward(&self, progress: &mut dyn Progress) {
        match self {
            ProgressEvent::Begin { total } => progress.begin(*total),
            ProgressEvent::Item(report) => match &report.status {
                // the scraper already logs the skip for NPCs without preferences
                ItemStatus::Parsed | ItemStatus::NoPreferences => progress.item_done(&report.name),
                ItemStatus::Failed(err) => progress.item_failed(&report.name, err),
            },
        }
    }
}

/// Lightweight progress reporting used by long-running scrapes.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of NPC pages.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One NPC finished with a record.
    fn item_done(&mut self, _name: &str) {}

    /// One NPC was dropped.
    fn item_failed(&mut self, _name: &str, _err: &NpcError) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Tally {
        total: usize,
        done: Vec<String>,
        failed: Vec<String>,
        logs: usize,
    }

    impl Progress for Tally {
        fn begin(&mut self, total: usize) { self.total = total; }
        fn log(&mut self, _msg: &str) { self.logs += 1; }
        fn item_done(&mut self, name: &str) { self.done.push(name.to_string()); }
        fn item_failed(&mut self, name: &str, _err: &NpcError) { self.failed.push(name.to_string()); }
    }

    fn item(index: usize, name: &str, status: ItemStatus) -> ProgressEvent {
        ProgressEvent::Item(ItemReport { index, name: name.to_string(), status })
    }

    #[test]
    fn forward_maps_events_onto_sink() {
        let events = vec![
            ProgressEvent::Begin { total: 3 },
            item(0, "Guide", ItemStatus::Parsed),
            item(1, "Town Cat", ItemStatus::NoPreferences),
            item(2, "Nurse", ItemStatus::Failed(NpcError::MissingTable)),
        ];
        let mut tally = Tally::default();
        for ev in &events {
            ev.forward(&mut tally);
        }
        assert_eq!(tally.total, 3);
        assert_eq!(tally.done, vec!["Guide", "Town Cat"]);
        assert_eq!(tally.failed, vec!["Nurse"]);
        assert_eq!(tally.logs, 0);
    }

    #[test]
    fn skipped_npc_is_counted_once_without_extra_lines() {
        let mut tally = Tally::default();
        item(0, "Town Dog", ItemStatus::NoPreferences).forward(&mut tally);
        assert_eq!(tally.done, vec!["Town Dog"]);
        assert!(tally.failed.is_empty());
        assert_eq!(tally.logs, 0);
    }
}
