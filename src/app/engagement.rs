use anyhow::{anyhow, Result};
use tracing::error;
use uuid::Uuid;

use crate::infra::browser::Clipboard;
use crate::infra::store::StoreHandle;

/// Like/bookmark toggles and the share-link action for the current viewer.
#[derive(Clone)]
pub struct EngagementService {
    store: StoreHandle,
    share_origin: String,
}

impl EngagementService {
    pub fn new(store: StoreHandle, share_origin: String) -> Self {
        Self {
            store,
            share_origin,
        }
    }

    /// Flips the viewer's like and adjusts the counter. Returns the new
    /// liked state.
    pub fn toggle_like(&self, post_id: Uuid) -> Result<bool> {
        self.store.with_mut(|store| {
            let post = store
                .post_mut(post_id)
                .ok_or_else(|| anyhow!("post not found"))?;
            if post.is_liked {
                post.likes -= 1;
            } else {
                post.likes += 1;
            }
            post.is_liked = !post.is_liked;
            Ok(post.is_liked)
        })?
    }

    /// Returns the new bookmarked state.
    pub fn toggle_bookmark(&self, post_id: Uuid) -> Result<bool> {
        self.store.with_mut(|store| {
            let post = store
                .post_mut(post_id)
                .ok_or_else(|| anyhow!("post not found"))?;
            post.is_bookmarked = !post.is_bookmarked;
            Ok(post.is_bookmarked)
        })?
    }

    pub fn share_url(&self, post_id: Uuid) -> String {
        format!("{}/post/{}", self.share_origin, post_id)
    }

    /// Copies the pulse link to the clipboard. Fire-and-forget: a
    /// rejected write is logged and surfaced as a toast, never an error.
    pub fn share(&self, clipboard: &mut dyn Clipboard, post_id: Uuid) -> Result<()> {
        self.store.with(|store| {
            if store.post(post_id).is_none() {
                return Err(anyhow!("post not found"));
            }
            Ok(())
        })??;

        let url = self.share_url(post_id);
        match clipboard.write_text(&url) {
            Ok(()) => {
                self.store
                    .with_mut(|store| store.push_toast("Post link copied"))?;
            }
            Err(err) => {
                error!(error = %err, post_id = %post_id, "failed to copy post link");
                self.store
                    .with_mut(|store| store.push_toast("Could not copy the post link"))?;
            }
        }
        Ok(())
    }
}
