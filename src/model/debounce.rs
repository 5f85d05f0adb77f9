use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Per-key trailing-edge debounce
///
/// Each [`Debouncer::schedule`] call (re)starts the quiet window for its
/// key. The job runs once the window passes without another call for the
/// same key; earlier pending jobs for that key are aborted.
#[derive(Debug)]
pub struct Debouncer<K> {
    window: Duration,
    jobs: HashMap<K, JoinHandle<()>>,
}

impl<K: Eq + Hash> Debouncer<K> {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            jobs: HashMap::new(),
        }
    }

    pub fn schedule<F>(&mut self, key: K, job: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let window = self.window;
        let handle = tokio::spawn(async move {
            sleep(window).await;
            job.await;
        });

        if let Some(old) = self.jobs.insert(key, handle) {
            old.abort();
        }

        self.jobs.retain(|_, job| !job.is_finished());
    }

    /// Abort the pending job for `key`, if any. Returns true if a job was
    /// still waiting.
    pub fn cancel(&mut self, key: &K) -> bool {
        self.jobs.remove(key).is_some_and(|job| {
            let pending = !job.is_finished();
            job.abort();
            pending
        })
    }

    #[must_use]
    pub fn is_pending(&self, key: &K) -> bool {
        self.jobs.get(key).is_some_and(|job| !job.is_finished())
    }
}
