//! Background enumeration pass
//!
//! The pass runs on its own thread and hands its result back exactly once
//! through a channel. The guess path never waits on it until the round ends.

use super::{CancelToken, PossibleWordSet, collect_possible_words};
use crate::core::RootWord;
use crate::dictionary::WordValidator;
use crossbeam_channel::{Receiver, TryRecvError};
use log::{debug, warn};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Handle to a running enumeration pass for one root word
///
/// Dropping the handle cancels the pass and discards its result.
#[derive(Debug)]
pub struct EnumerationTask {
    root: RootWord,
    token: CancelToken,
    receiver: Receiver<PossibleWordSet>,
    worker: Option<JoinHandle<()>>,
    result: Option<PossibleWordSet>,
}

impl EnumerationTask {
    /// Start enumerating `root` on a new thread
    pub fn spawn<V>(root: RootWord, validator: Arc<V>, locale: impl Into<String>) -> Self
    where
        V: WordValidator + ?Sized + 'static,
    {
        let (sender, receiver) = crossbeam_channel::bounded(1);
        let token = CancelToken::new();
        let locale = locale.into();

        debug!("Spawning enumeration pass for {root}");
        let worker = thread::spawn({
            let root = root.clone();
            let token = token.clone();
            move || {
                let words = collect_possible_words(&root, &*validator, &locale, &token);
                // The receiver is gone once the round was abandoned
                if sender.send(words).is_err() {
                    debug!("Discarding enumeration result for {root}");
                }
            }
        });

        Self {
            root,
            token,
            receiver,
            worker: Some(worker),
            result: None,
        }
    }

    /// Root word this pass enumerates
    #[must_use]
    pub const fn root(&self) -> &RootWord {
        &self.root
    }

    /// Completed result, if the pass has already finished on its own
    ///
    /// Never blocks.
    pub fn try_result(&mut self) -> Option<&PossibleWordSet> {
        if self.result.is_none() {
            match self.receiver.try_recv() {
                Ok(words) => self.result = Some(words),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => {}
            }
        }
        self.result.as_ref()
    }

    /// Stop the pass now and take whatever it has found
    ///
    /// Returns the full set if the pass already completed, otherwise the
    /// partial set gathered up to this point.
    #[must_use]
    pub fn finish(mut self) -> PossibleWordSet {
        if let Some(words) = self.result.take() {
            return words;
        }

        self.token.cancel();
        let words = match self.receiver.recv() {
            Ok(words) => Some(words),
            Err(_) => {
                warn!("Enumeration pass for {} ended without a result", self.root);
                None
            }
        };

        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("Enumeration worker for {} panicked", self.root);
            }
        }

        words.unwrap_or_else(|| PossibleWordSet::empty(self.root.clone()))
    }

    /// Abandon the pass; its result is never observed
    pub fn cancel(self) {
        debug!("Cancelling enumeration pass for {}", self.root);
        drop(self);
    }
}

impl Drop for EnumerationTask {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
