use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub description: String,
    pub cover_url: Option<String>,
    pub owner_id: Uuid,
    pub is_subscribed: bool,
    pub is_active: bool,
}
