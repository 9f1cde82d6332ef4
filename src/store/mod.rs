pub mod memory;
pub mod seed;

use crate::domain::{Complaint, ComplaintStatus};
use crate::errors::ServerError;

pub use memory::InMemoryStore;

/// Authoritative collection of complaints, kept newest first.
///
/// Handlers only ever hold clones; every mutation goes through here.
pub trait ComplaintStore: Send + Sync {
    /// Adds a record at the head of the sequence. Fails on a duplicate id.
    fn insert(&self, complaint: Complaint) -> Result<Complaint, ServerError>;

    fn find_by_id(&self, id: &str) -> Result<Option<Complaint>, ServerError>;

    /// Full snapshot in store order.
    fn list(&self) -> Result<Vec<Complaint>, ServerError>;

    /// Overwrites `status` in place and returns the updated record.
    fn update_status(
        &self,
        id: &str,
        status: ComplaintStatus,
    ) -> Result<Complaint, ServerError>;
}
