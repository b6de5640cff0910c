use serde::{Deserialize, Serialize};

/// One row of the contact messages table.
///
/// Optional fields serialize as `null`, never as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub message: String,
    /// ISO-8601 UTC timestamp, e.g. `2026-10-19T09:30:00.000Z`.
    pub created_at: String,
}
