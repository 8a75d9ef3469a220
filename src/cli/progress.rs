// src/cli/progress.rs
use crate::{error::NpcError, progress::Progress};

/// Progress lines on stderr, e.g. `[3/41] Nurse`.
#[derive(Default)]
pub struct ConsoleProgress {
    done: usize,
    failed: usize,
    total: usize,
}

impl ConsoleProgress {
    fn step(&mut self) -> String {
        self.done += 1;
        format!("[{}/{}]", self.done, self.total)
    }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Fetching {total} NPC pages...");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, name: &str) {
        let step = self.step();
        eprintln!("{step} {name}");
    }
    fn item_failed(&mut self, name: &str, err: &NpcError) {
        self.failed += 1;
        let step = self.step();
        eprintln!("{step} {name} skipped: {err}");
    }
    fn finish(&mut self) {
        if self.total == 0 {
            eprintln!("Fetch complete"); // no counts if we never began
        } else {
            eprintln!("Fetch complete ({}/{}, {} failed)", self.done, self.total, self.failed);
        }
    }
}
