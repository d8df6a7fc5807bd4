use anyhow::{anyhow, Result};
use uuid::Uuid;

use crate::infra::store::StoreHandle;

/// Running mean rating per pulse. Each viewer gets one counted vote:
/// rating again replaces the previous value instead of adding a vote.
///
/// Only the single simulated viewer is tracked (one `viewer_rating` slot
/// per pulse); there is no per-(pulse, user) ledger, so the math is only
/// correct for that one viewer.
#[derive(Clone)]
pub struct RatingService {
    store: StoreHandle,
}

impl RatingService {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    /// Applies a 1-5 star rating from the current viewer and returns the
    /// new aggregate.
    pub fn rate(&self, post_id: Uuid, value: u8) -> Result<f64> {
        if !(1..=5).contains(&value) {
            return Err(anyhow!("rating must be between 1 and 5"));
        }

        self.store.with_mut(|store| {
            let post = store
                .post_mut(post_id)
                .ok_or_else(|| anyhow!("post not found"))?;

            let prev_value = post.viewer_rating.unwrap_or(0);
            let prev_total = post.rating * post.rating_votes as f64;

            let (next_votes, next_total) = if prev_value > 0 {
                (
                    post.rating_votes,
                    prev_total - prev_value as f64 + value as f64,
                )
            } else {
                (post.rating_votes + 1, prev_total + value as f64)
            };

            post.rating = if next_votes > 0 {
                round_one_decimal(next_total / next_votes as f64)
            } else {
                0.0
            };
            post.rating_votes = next_votes;
            post.viewer_rating = Some(value);
            Ok(post.rating)
        })?
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
