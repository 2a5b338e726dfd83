//! Fire-and-forget persistence on a background thread.
//!
//! The timer never waits on the database. Finished records are queued to a
//! single worker thread that owns the connection, so writes are serialized
//! without any locking on the caller's side. Each record is written at most
//! once: failures are logged and the record is dropped, never retried.

use std::{
    io,
    sync::mpsc::{self, Receiver, Sender},
    thread::{self, JoinHandle},
};

use crate::model::PomodoroRecord;

use super::Storage;

/// Somewhere finished records can be handed off to.
pub trait RecordSink {
    /// Queues a record for storage. Must not block on the write and has
    /// no way to report its outcome.
    fn submit(&self, record: PomodoroRecord);
}

/// Background writer owning a [`Storage`].
pub struct Recorder {
    sender: Option<Sender<PomodoroRecord>>,
    worker: Option<JoinHandle<()>>,
}

impl Recorder {
    /// Moves `storage` onto a new worker thread.
    pub fn spawn(storage: Storage) -> io::Result<Self> {
        let (sender, receiver) = mpsc::channel();
        let worker = thread::Builder::new()
            .name("recorder".into())
            .spawn(move || drain(&storage, &receiver))?;
        Ok(Self {
            sender: Some(sender),
            worker: Some(worker),
        })
    }

    /// Stops accepting records and waits for queued ones to be written.
    pub fn shutdown(mut self) {
        self.close();
    }

    fn close(&mut self) {
        drop(self.sender.take());
        if let Some(worker) = self.worker.take()
            && worker.join().is_err()
        {
            tracing::error!("recorder thread panicked");
        }
    }
}

impl RecordSink for Recorder {
    fn submit(&self, record: PomodoroRecord) {
        let Some(sender) = &self.sender else {
            return;
        };
        if let Err(mpsc::SendError(record)) = sender.send(record) {
            tracing::error!(phase = record.kind.label(), "recorder stopped, record dropped");
        }
    }
}

impl Drop for Recorder {
    fn drop(&mut self) {
        self.close();
    }
}

fn drain(storage: &Storage, receiver: &Receiver<PomodoroRecord>) {
    for record in receiver {
        match storage.insert(&record) {
            Ok(id) => tracing::info!(%id, phase = record.kind.label(), "saved"),
            Err(e) => tracing::error!(error = %e, phase = record.kind.label(), "save failed"),
        }
    }
}
