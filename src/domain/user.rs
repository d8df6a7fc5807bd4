use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reference data for feed rendering. Users are never mutated by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub avatar_url: String,
    pub title: String,
}
