use crate::core::record::Record;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, TryRecvError, channel};
use std::thread;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct SubmitError(pub String);

impl SubmitError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

pub type SubmitHandler = Arc<dyn Fn(&Record) -> Result<(), SubmitError> + Send + Sync>;

/// Runs the terminal submit handler off the UI thread. At most one
/// submission is in flight; completion is picked up by polling from the
/// event loop.
pub struct SubmitRunner {
    handler: SubmitHandler,
    pending: Option<Receiver<Result<(), SubmitError>>>,
}

impl SubmitRunner {
    pub fn new(handler: SubmitHandler) -> Self {
        Self {
            handler,
            pending: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    pub fn start(&mut self, record: Record) {
        if self.pending.is_some() {
            return;
        }

        let (tx, rx) = channel();
        let handler = Arc::clone(&self.handler);
        thread::spawn(move || {
            let _ = tx.send(handler(&record));
        });
        self.pending = Some(rx);
    }

    pub fn poll(&mut self) -> Option<Result<(), SubmitError>> {
        let result = match &self.pending {
            Some(rx) => match rx.try_recv() {
                Ok(result) => Some(result),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    Some(Err(SubmitError::new("submit worker vanished")))
                }
            },
            None => None,
        };

        if result.is_some() {
            self.pending = None;
        }
        result
    }
}
