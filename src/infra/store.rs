use std::sync::{Arc, RwLock};

use anyhow::{anyhow, Result};
use uuid::Uuid;

use crate::domain::channel::Channel;
use crate::domain::course::Course;
use crate::domain::post::Post;
use crate::domain::user::User;

/// The whole in-memory dataset. Everything lives here for the lifetime of
/// the process; nothing is persisted.
#[derive(Debug, Default)]
pub struct Store {
    pub users: Vec<User>,
    pub channels: Vec<Channel>,
    pub posts: Vec<Post>,
    pub courses: Vec<Course>,
    /// The single simulated viewer all engagement flags belong to.
    pub viewer_id: Uuid,
    /// Transient on-screen messages, drained by the presentation layer.
    pub toasts: Vec<String>,
}

impl Store {
    pub fn user(&self, id: Uuid) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn channel(&self, id: Uuid) -> Option<&Channel> {
        self.channels.iter().find(|channel| channel.id == id)
    }

    pub fn channel_mut(&mut self, id: Uuid) -> Option<&mut Channel> {
        self.channels.iter_mut().find(|channel| channel.id == id)
    }

    pub fn post(&self, id: Uuid) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    pub fn post_mut(&mut self, id: Uuid) -> Option<&mut Post> {
        self.posts.iter_mut().find(|post| post.id == id)
    }

    /// Ids of channels that still exist and are active. Posts are only
    /// visible when their channel is in this set.
    pub fn active_channel_ids(&self) -> Vec<Uuid> {
        self.channels
            .iter()
            .filter(|channel| channel.is_active)
            .map(|channel| channel.id)
            .collect()
    }

    pub fn push_toast(&mut self, message: impl Into<String>) {
        self.toasts.push(message.into());
    }

    pub fn drain_toasts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.toasts)
    }
}

/// Cloneable handle shared by every service, in the role the database
/// handle plays for a backed store.
#[derive(Clone)]
pub struct StoreHandle {
    inner: Arc<RwLock<Store>>,
}

impl StoreHandle {
    pub fn new(store: Store) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&Store) -> R) -> Result<R> {
        let guard = self
            .inner
            .read()
            .map_err(|_| anyhow!("store lock poisoned"))?;
        Ok(f(&guard))
    }

    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Store) -> R) -> Result<R> {
        let mut guard = self
            .inner
            .write()
            .map_err(|_| anyhow!("store lock poisoned"))?;
        Ok(f(&mut guard))
    }
}
