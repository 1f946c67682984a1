use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::models::Submission;

/// Durable ordered list of submissions not yet confirmed accepted: one JSON
/// array in one file, read at startup and rewritten after every mutation.
/// Entries are only appended and removed, never reordered.
pub struct PendingQueue {
    path: PathBuf,
    entries: Vec<Submission>,
}

#[derive(Debug)]
pub enum QueueError {
    Io(io::Error),
    Serde(serde_json::Error),
}

impl std::fmt::Display for QueueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueueError::Io(err) => write!(f, "I/O error: {err}"),
            QueueError::Serde(err) => write!(f, "Serialization error: {err}"),
        }
    }
}

impl From<io::Error> for QueueError {
    fn from(err: io::Error) -> Self {
        QueueError::Io(err)
    }
}

impl From<serde_json::Error> for QueueError {
    fn from(err: serde_json::Error) -> Self {
        QueueError::Serde(err)
    }
}

impl PendingQueue {
    /// Load the queue from disk. A missing file is an empty queue.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, QueueError> {
        let path = path.into();
        let entries = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(QueueError::Io(e)),
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[Submission] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append one entry and persist immediately.
    pub fn push(&mut self, submission: Submission) -> Result<(), QueueError> {
        self.entries.push(submission);
        self.persist()
    }

    /// Replace the queue contents (the survivors of a drain pass, in their
    /// original relative order) and persist.
    pub fn replace(&mut self, entries: Vec<Submission>) -> Result<(), QueueError> {
        self.entries = entries;
        self.persist()
    }

    fn persist(&self) -> Result<(), QueueError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_vec(&self.entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
