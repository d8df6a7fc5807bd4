use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// One entry in a pulse's flat comment list.
///
/// Threads are stored parent-referencing: a comment with `parent_id: None`
/// is top-level, anything else is a reply. A set `parent_id` always refers
/// to a comment in the same pulse (cascade delete keeps this true).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub author_id: Uuid,
    pub text: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub edited: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
}
