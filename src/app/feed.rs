use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::domain::post::Post;
use crate::infra::store::StoreHandle;

/// Feed-wide view selector, cycled by the quick-filter control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickFilter {
    All,
    Featured,
    Favorites,
}

impl QuickFilter {
    /// all -> featured -> favorites -> all.
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Featured,
            Self::Featured => Self::Favorites,
            Self::Favorites => Self::All,
        }
    }
}

/// Everything that selects which pulses the feed shows. Changing any of
/// these resets pagination.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedQuery {
    pub channel: Option<Uuid>,
    pub category: Option<String>,
    pub quick: Option<QuickFilter>,
}

impl FeedQuery {
    pub fn quick(&self) -> QuickFilter {
        self.quick.unwrap_or(QuickFilter::All)
    }
}

/// Derives the ordered, filtered pulse list for the feed.
#[derive(Clone)]
pub struct FeedService {
    store: StoreHandle,
}

impl FeedService {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    /// The full filtered set, before pagination. Pulses of deleted or
    /// deactivated channels never appear, whatever the filter.
    pub fn filtered(&self, query: &FeedQuery) -> Result<Vec<Post>> {
        self.store.with(|store| {
            let active_channels = store.active_channel_ids();

            let mut posts: Vec<Post> = store
                .posts
                .iter()
                .filter(|post| post.is_active && active_channels.contains(&post.channel_id))
                .filter(|post| match query.channel {
                    Some(channel_id) => post.channel_id == channel_id,
                    None => true,
                })
                .filter(|post| match &query.category {
                    Some(category) => store
                        .channel(post.channel_id)
                        .map(|channel| &channel.category == category)
                        .unwrap_or(false),
                    None => true,
                })
                .cloned()
                .collect();

            match query.quick() {
                QuickFilter::All => {}
                QuickFilter::Featured => {
                    posts.sort_by(|a, b| {
                        b.rating
                            .total_cmp(&a.rating)
                            .then(b.rating_votes.cmp(&a.rating_votes))
                    });
                }
                QuickFilter::Favorites => {
                    posts.retain(|post| post.is_bookmarked);
                }
            }

            posts
        })
    }

    /// The incrementally revealed window over `filtered`.
    pub fn visible(&self, query: &FeedQuery, pager: &Pager) -> Result<Vec<Post>> {
        let mut posts = self.filtered(query)?;
        posts.truncate(pager.visible_count(posts.len()));
        Ok(posts)
    }
}

/// Infinite-scroll batching: reveal `initial` entries up front, then
/// `step` more per load, after a settling delay that simulates network
/// latency. A pending load blocks re-triggering until it resolves.
#[derive(Debug, Clone)]
pub struct Pager {
    initial: usize,
    step: usize,
    settle: Duration,
    loaded: usize,
    pending: bool,
}

impl Pager {
    pub fn new(initial: usize, step: usize, settle: Duration) -> Self {
        Self {
            initial,
            step,
            settle,
            loaded: initial,
            pending: false,
        }
    }

    /// The feed's batching (8 up front, then 6 per scroll).
    pub fn feed(config: &AppConfig) -> Self {
        Self::new(
            config.feed_initial_batch,
            config.feed_batch_step,
            Duration::from_millis(config.feed_settle_ms),
        )
    }

    /// Channel listings load 10 up front, then 8 per scroll.
    pub fn channels(config: &AppConfig) -> Self {
        Self::new(
            config.channel_initial_batch,
            config.channel_batch_step,
            Duration::from_millis(config.feed_settle_ms),
        )
    }

    pub fn loaded(&self) -> usize {
        self.loaded
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn visible_count(&self, total: usize) -> usize {
        self.loaded.min(total)
    }

    pub fn has_more(&self, total: usize) -> bool {
        self.loaded < total
    }

    /// Called whenever the filter, channel, category, or display mode
    /// changes, and on teardown: back to the initial batch, no pending
    /// load.
    pub fn reset(&mut self) {
        self.loaded = self.initial;
        self.pending = false;
    }

    /// Marks a load as pending. Returns false when everything is already
    /// revealed or a load is in flight (the sentinel re-fired before the
    /// previous batch settled).
    pub fn begin_load(&mut self, total: usize) -> bool {
        if self.pending || !self.has_more(total) {
            return false;
        }
        self.pending = true;
        true
    }

    /// Completes a pending load, revealing one more batch capped at the
    /// filtered total.
    pub fn complete_load(&mut self, total: usize) {
        if !self.pending {
            return;
        }
        self.loaded = (self.loaded + self.step).min(total);
        self.pending = false;
    }

    /// The sentinel-intersection path: begin, wait out the settling
    /// delay, then reveal the next batch. Returns whether anything new
    /// was revealed.
    pub async fn load_more(&mut self, total: usize) -> bool {
        if !self.begin_load(total) {
            return false;
        }
        tokio::time::sleep(self.settle).await;
        self.complete_load(total);
        true
    }
}
