pub mod complaint;
pub mod ids;
pub mod stats;

pub use complaint::{
    AiAnalysis, Complaint, ComplaintStatus, Location, NewComplaint, Priority, StatusUpdate,
};
pub use stats::ComplaintStats;
