//! Moderation DTOs

use serde::Deserialize;

/// Report request
#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub poem_id: i32,
    pub reported_by: i32,
    pub reason: String,
}
