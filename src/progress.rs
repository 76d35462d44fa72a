use std::fmt;
use tokio::sync::mpsc;

/// Which phase of a run an event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Fetching and extracting pages
    Scrape,
    /// Downloading images into the archive
    Download,
}

/// Emitted after each page or image has been handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressEvent {
    pub stage: Stage,
    /// Items finished so far, starting at 1
    pub completed: usize,
    pub total: usize,
    /// The page or image URL just handled
    pub url: String,
}

impl ProgressEvent {
    /// Completion ratio in `0.0..=1.0`
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }
}

impl fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.stage {
            Stage::Scrape => "Scraped",
            Stage::Download => "Downloaded image",
        };
        write!(f, "[{}/{}] {} {}", self.completed, self.total, verb, self.url)
    }
}

/// Receives progress updates from the scrape loop and the packager
pub trait Progress {
    fn report(&mut self, event: ProgressEvent);
}

/// Discards every event
impl Progress for () {
    fn report(&mut self, _event: ProgressEvent) {}
}

/// Records events in order
impl Progress for Vec<ProgressEvent> {
    fn report(&mut self, event: ProgressEvent) {
        self.push(event);
    }
}

/// Writes each event as an info-level log line
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl Progress for LogProgress {
    fn report(&mut self, event: ProgressEvent) {
        ::log::info!("{}", event);
    }
}

/// Forwards events to another task
impl Progress for mpsc::UnboundedSender<ProgressEvent> {
    fn report(&mut self, event: ProgressEvent) {
        if self.send(event).is_err() {
            ::log::trace!("Progress receiver dropped, discarding event");
        }
    }
}
