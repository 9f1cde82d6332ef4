// src/store/seed.rs
use crate::domain::{AiAnalysis, Complaint, ComplaintStatus, Location, Priority};

const DAY_MS: i64 = 86_400_000;

/// The two demo records the admin view starts with, newest first.
pub fn demo_complaints(now_ms: i64) -> Vec<Complaint> {
    vec![
        Complaint {
            id: "c-101".into(),
            user_id: "u-1".into(),
            title: "Overflowing Garbage Bin".into(),
            description: "The garbage bin near the central park entrance has been overflowing for 3 days. Bad smell.".into(),
            image_base64: None,
            location: Some(Location {
                latitude: 28.6139,
                longitude: 77.2090,
                address: Some("Central Park Gate 2".into()),
            }),
            status: ComplaintStatus::Pending,
            created_at: now_ms - DAY_MS * 2,
            ai_analysis: AiAnalysis {
                category: "Garbage Collection".into(),
                priority: Priority::High,
                summary: "Reports of overflowing garbage causing hygiene issues.".into(),
                suggested_action: "Dispatch sanitation truck immediately.".into(),
            },
        },
        Complaint {
            id: "c-102".into(),
            user_id: "u-2".into(),
            title: "Broken Streetlight".into(),
            description: "Streetlight pole #45 is flickering and mostly off at night.".into(),
            image_base64: None,
            location: Some(Location {
                latitude: 28.6239,
                longitude: 77.2190,
                address: Some("Market Road, Sector 4".into()),
            }),
            status: ComplaintStatus::InProgress,
            created_at: now_ms - DAY_MS * 5,
            ai_analysis: AiAnalysis {
                category: "Electricity/Streetlights".into(),
                priority: Priority::Medium,
                summary: "Faulty street lighting reported affecting visibility.".into(),
                suggested_action: "Assign electrical maintenance crew.".into(),
            },
        },
    ]
}
