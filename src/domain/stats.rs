// src/domain/stats.rs

use crate::domain::complaint::{Complaint, ComplaintStatus};
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate counts shown on the admin dashboard.
#[derive(Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub rejected: usize,
    pub by_category: BTreeMap<String, usize>,
}

impl ComplaintStats {
    pub fn from_complaints(complaints: &[Complaint]) -> Self {
        let mut stats = Self {
            total: complaints.len(),
            ..Self::default()
        };

        for c in complaints {
            match c.status {
                ComplaintStatus::Pending => stats.pending += 1,
                ComplaintStatus::InProgress => stats.in_progress += 1,
                ComplaintStatus::Resolved => stats.resolved += 1,
                ComplaintStatus::Rejected => stats.rejected += 1,
            }

            let category = c.ai_analysis.category.trim();
            let key = if category.is_empty() {
                "Uncategorized"
            } else {
                category
            };
            *stats.by_category.entry(key.to_string()).or_insert(0) += 1;
        }

        stats
    }
}
