use anyhow::{anyhow, Result};
use tracing::info;
use uuid::Uuid;

use crate::domain::post::Post;
use crate::infra::store::StoreHandle;

/// Pulse lifecycle: publish, deactivate/reactivate (moderation), delete.
#[derive(Clone)]
pub struct PulseService {
    store: StoreHandle,
}

impl PulseService {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    /// Prepends a freshly composed pulse so it shows at the top of the
    /// feed. The target channel must exist and be active.
    pub fn publish(&self, post: Post) -> Result<Post> {
        self.store.with_mut(|store| {
            let channel = store
                .channel(post.channel_id)
                .ok_or_else(|| anyhow!("channel not found"))?;
            if !channel.is_active {
                return Err(anyhow!("channel is not active"));
            }
            info!(post_id = %post.id, channel = %channel.name, "publishing pulse");
            store.posts.insert(0, post.clone());
            Ok(post)
        })?
    }

    /// Hides a pulse from every view without deleting it.
    pub fn deactivate(&self, post_id: Uuid) -> Result<bool> {
        self.set_active(post_id, false)
    }

    pub fn reactivate(&self, post_id: Uuid) -> Result<bool> {
        self.set_active(post_id, true)
    }

    fn set_active(&self, post_id: Uuid, active: bool) -> Result<bool> {
        self.store.with_mut(|store| match store.post_mut(post_id) {
            Some(post) => {
                post.is_active = active;
                true
            }
            None => false,
        })
    }

    /// Removes the pulse from the collection entirely.
    pub fn delete(&self, post_id: Uuid) -> Result<bool> {
        self.store.with_mut(|store| {
            let before = store.posts.len();
            store.posts.retain(|post| post.id != post_id);
            store.posts.len() < before
        })
    }
}
