// src/runner.rs
//
// Runs a scrape on its own thread and hands progress and the final result
// back over a channel. The records only ever reach the caller inside the
// `Finished` message; nothing is shared while the thread is running.

use std::cell::Cell;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
    mpsc::{self, Receiver, TryRecvError},
};
use std::thread::{self, JoinHandle};

use tracing::{debug, info};

use crate::{
    core::Fetch,
    error::ScrapeError,
    npc::NpcRecord,
    progress::{Progress, ProgressEvent},
    scrape::WikiScraper,
};

/// Messages from the scraper thread, in order: progress events, then exactly
/// one `Finished`.
#[derive(Debug)]
pub enum JobMessage {
    Progress(ProgressEvent),
    Finished(Result<Vec<NpcRecord>, ScrapeError>),
}

/// Owns a `WikiScraper` and runs at most one scrape with it at a time.
pub struct BackgroundScraper<F> {
    scraper: Arc<WikiScraper<F>>,
    active: Arc<AtomicBool>,
}

// Clears the active flag however the thread ends.
struct ActiveGuard(Arc<AtomicBool>);

impl Drop for ActiveGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<F> BackgroundScraper<F>
where
    F: Fetch + Send + Sync + 'static,
{
    pub fn new(scraper: WikiScraper<F>) -> Self {
        Self { scraper: Arc::new(scraper), active: Arc::new(AtomicBool::new(false)) }
    }

    pub fn is_running(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Start a scrape on a background thread.
    ///
    /// Fails with `AlreadyRunning` if a previous job has not finished; that
    /// job is left alone.
    pub fn start(&self) -> Result<ScrapeJob, ScrapeError> {
        if self
            .active
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(ScrapeError::AlreadyRunning);
        }
        let guard = ActiveGuard(Arc::clone(&self.active));

        let scraper = Arc::clone(&self.scraper);
        let (tx, rx) = mpsc::channel::<JobMessage>();

        let handle = thread::Builder::new()
            .name("scraper".into())
            .spawn(move || {
                info!("Scrape: Begin {}", scraper.index_url());
                let mut scrape = scraper.scrape();
                for event in scrape.by_ref() {
                    // receiver gone: keep going, the scrape has no cancellation
                    let _ = tx.send(JobMessage::Progress(event));
                }
                let result = scrape.finish();

                // release before reporting, so a caller that saw Finished can start again
                drop(guard);
                let _ = tx.send(JobMessage::Finished(result));
            })
            .map_err(ScrapeError::Spawn)?;

        Ok(ScrapeJob { rx, handle: Some(handle), finished: Cell::new(false) })
    }
}

/// Handle to a running scrape.
pub struct ScrapeJob {
    rx: Receiver<JobMessage>,
    handle: Option<JoinHandle<()>>,
    // set once `Finished` has been handed out
    finished: Cell<bool>,
}

impl ScrapeJob {
    /// Next message if one is waiting. Never blocks. `Err(Disconnected)`
    /// means the thread died without finishing; once `Finished` has been
    /// received, further polls return `Ok(None)`.
    pub fn try_recv(&self) -> Result<Option<JobMessage>, ScrapeError> {
        match self.rx.try_recv() {
            Ok(msg) => {
                if matches!(msg, JobMessage::Finished(_)) {
                    self.finished.set(true);
                }
                Ok(Some(msg))
            }
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) if self.finished.get() => Ok(None),
            Err(TryRecvError::Disconnected) => Err(ScrapeError::Disconnected),
        }
    }

    /// True once the `Finished` message has been received through `try_recv`.
    pub fn is_finished(&self) -> bool {
        self.finished.get()
    }

    /// Block until the scrape ends, forwarding progress to `progress`.
    pub fn wait(mut self, progress: &mut dyn Progress) -> Result<Vec<NpcRecord>, ScrapeError> {
        let result = loop {
            match self.rx.recv() {
                Ok(JobMessage::Progress(event)) => event.forward(progress),
                Ok(JobMessage::Finished(result)) => break result,
                Err(_) => break Err(ScrapeError::Disconnected),
            }
        };
        progress.finish();

        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                debug!("scraper thread panicked");
            }
        }
        result
    }
}
