use anyhow::{anyhow, Result};
use tracing::info;
use uuid::Uuid;

use crate::domain::channel::Channel;
use crate::infra::session::{self, SessionParams, OPEN_CHANNEL_KEY};
use crate::infra::store::StoreHandle;

#[derive(Debug, Clone, Default)]
pub struct ChannelEdit {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

/// Channel lifecycle and the viewer's subscription state.
#[derive(Clone)]
pub struct ChannelService {
    store: StoreHandle,
}

impl ChannelService {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Result<Vec<Channel>> {
        self.store.with(|store| store.channels.clone())
    }

    /// Returns the new subscription state.
    pub fn toggle_subscription(&self, channel_id: Uuid) -> Result<bool> {
        self.store.with_mut(|store| {
            let channel = store
                .channel_mut(channel_id)
                .ok_or_else(|| anyhow!("channel not found"))?;
            channel.is_subscribed = !channel.is_subscribed;
            Ok(channel.is_subscribed)
        })?
    }

    pub fn edit(&self, channel_id: Uuid, edit: ChannelEdit) -> Result<bool> {
        self.store.with_mut(|store| {
            let Some(channel) = store.channel_mut(channel_id) else {
                return false;
            };
            if let Some(name) = edit.name {
                channel.name = name;
            }
            if let Some(description) = edit.description {
                channel.description = description;
            }
            if let Some(category) = edit.category {
                channel.category = category;
            }
            true
        })
    }

    /// Deactivating a channel hides its pulses from every view without
    /// removing them.
    pub fn deactivate(&self, channel_id: Uuid) -> Result<bool> {
        self.set_active(channel_id, false)
    }

    pub fn reactivate(&self, channel_id: Uuid) -> Result<bool> {
        self.set_active(channel_id, true)
    }

    fn set_active(&self, channel_id: Uuid, active: bool) -> Result<bool> {
        self.store
            .with_mut(|store| match store.channel_mut(channel_id) {
                Some(channel) => {
                    channel.is_active = active;
                    true
                }
                None => false,
            })
    }

    /// Deletes the channel and every pulse it owns. Returns the number of
    /// pulses removed along with it.
    pub fn delete(&self, channel_id: Uuid) -> Result<usize> {
        self.store.with_mut(|store| {
            let before = store.channels.len();
            store.channels.retain(|channel| channel.id != channel_id);
            if store.channels.len() == before {
                return 0;
            }
            let posts_before = store.posts.len();
            store.posts.retain(|post| post.channel_id != channel_id);
            let removed = posts_before - store.posts.len();
            info!(channel_id = %channel_id, removed_posts = removed, "channel deleted");
            removed
        })
    }

    /// Persists the open channel in the session params so it survives a
    /// reload, as `canal/<channel-id>`.
    pub fn open(&self, session: &mut dyn SessionParams, channel_id: Uuid) -> Result<()> {
        let exists = self
            .store
            .with(|store| store.channel(channel_id).is_some())?;
        if !exists {
            return Err(anyhow!("channel not found"));
        }
        session.set(OPEN_CHANNEL_KEY, &session::encode_channel_param(channel_id));
        Ok(())
    }

    pub fn close(&self, session: &mut dyn SessionParams) {
        session.remove(OPEN_CHANNEL_KEY);
    }

    /// Restores the persisted open channel, if it still exists and is
    /// active. A stale value is dropped from the session.
    pub fn restore(&self, session: &mut dyn SessionParams) -> Result<Option<Uuid>> {
        let Some(value) = session.get(OPEN_CHANNEL_KEY) else {
            return Ok(None);
        };
        let channel_id = session::decode_channel_param(&value);
        let valid = match channel_id {
            Some(id) => self
                .store
                .with(|store| store.channel(id).is_some_and(|c| c.is_active))?,
            None => false,
        };
        if !valid {
            session.remove(OPEN_CHANNEL_KEY);
            return Ok(None);
        }
        Ok(channel_id)
    }
}
