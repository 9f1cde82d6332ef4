// src/store/memory.rs
use crate::domain::{Complaint, ComplaintStatus};
use crate::errors::ServerError;
use crate::store::ComplaintStore;
use std::sync::Mutex;

/// Process-lifetime store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    complaints: Mutex<Vec<Complaint>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing records, already ordered newest first.
    pub fn with_records(records: Vec<Complaint>) -> Self {
        Self {
            complaints: Mutex::new(records),
        }
    }

    /// Runs `f` with exclusive access to the backing vector.
    fn with_complaints<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut Vec<Complaint>) -> Result<T, ServerError>,
    {
        let mut guard = self.complaints.lock().map_err(|_| {
            tracing::error!("complaint store mutex poisoned");
            ServerError::InternalError
        })?;
        f(&mut guard)
    }
}

impl ComplaintStore for InMemoryStore {
    fn insert(&self, complaint: Complaint) -> Result<Complaint, ServerError> {
        self.with_complaints(|complaints| {
            if complaints.iter().any(|c| c.id == complaint.id) {
                return Err(ServerError::DuplicateId(complaint.id));
            }
            complaints.insert(0, complaint.clone());
            Ok(complaint)
        })
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Complaint>, ServerError> {
        self.with_complaints(|complaints| Ok(complaints.iter().find(|c| c.id == id).cloned()))
    }

    fn list(&self) -> Result<Vec<Complaint>, ServerError> {
        self.with_complaints(|complaints| Ok(complaints.clone()))
    }

    fn update_status(
        &self,
        id: &str,
        status: ComplaintStatus,
    ) -> Result<Complaint, ServerError> {
        self.with_complaints(|complaints| {
            let complaint = complaints
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or_else(|| ServerError::NotFound("Complaint".into()))?;
            complaint.status = status;
            Ok(complaint.clone())
        })
    }
}
