use std::path::Path;

use thiserror::Error;

use crate::{JobPosting, JobStatus};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("posting id must not be empty")]
    MissingId,
    #[error("posting id already exists: {0}")]
    DuplicateId(String),
    #[error("posting not found: {0}")]
    NotFound(String),
    #[error("posting {0} takes applications on its original listing")]
    ExternalPosting(String),
    #[error("posting {0} is no longer open")]
    NotOpen(String),
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid posting in seed file: {0}")]
    Invalid(#[from] BoardError),
}

/// In-memory job catalog backing the API. Insertion order is preserved;
/// identity is validated here so the match pipeline can assume unique,
/// non-empty ids.
#[derive(Debug, Clone, Default)]
pub struct JobBoard {
    postings: Vec<JobPosting>,
}

impl JobBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a JSON array of postings, applying the same ingestion checks as
    /// `insert`.
    pub fn load_seed_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let raw = std::fs::read_to_string(path)?;
        let postings: Vec<JobPosting> = serde_json::from_str(&raw)?;

        let mut board = Self::new();
        for posting in postings {
            board.insert(posting)?;
        }

        Ok(board)
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn insert(&mut self, posting: JobPosting) -> Result<(), BoardError> {
        if posting.id.trim().is_empty() {
            return Err(BoardError::MissingId);
        }
        if self.postings.iter().any(|existing| existing.id == posting.id) {
            return Err(BoardError::DuplicateId(posting.id));
        }

        self.postings.push(posting);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&JobPosting> {
        self.postings.iter().find(|posting| posting.id == id)
    }

    /// Snapshot of the open postings, newest first. This is the collection
    /// handed to the match engine; closed and filled postings never reach it.
    pub fn open_postings(&self) -> Vec<JobPosting> {
        let mut open: Vec<JobPosting> = self
            .postings
            .iter()
            .filter(|posting| posting.status == JobStatus::Open)
            .cloned()
            .collect();

        open.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        open
    }

    pub fn close(&mut self, id: &str) -> Result<(), BoardError> {
        let posting = self.get_mut(id)?;
        posting.status = JobStatus::Closed;
        Ok(())
    }

    /// Count one in-app application and return the new total. External
    /// listings with a known original URL never accept in-app applications.
    pub fn record_application(&mut self, id: &str) -> Result<u32, BoardError> {
        let posting = self.get_mut(id)?;

        if posting.external && posting.original_url.is_some() {
            return Err(BoardError::ExternalPosting(posting.id.clone()));
        }
        if posting.status != JobStatus::Open {
            return Err(BoardError::NotOpen(posting.id.clone()));
        }

        posting.application_count += 1;
        Ok(posting.application_count)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut JobPosting, BoardError> {
        self.postings
            .iter_mut()
            .find(|posting| posting.id == id)
            .ok_or_else(|| BoardError::NotFound(id.to_string()))
    }
}
