//! Feed Filter & Pagination Tests
//!
//! Covers quick-filter derivation, the active-channel visibility join,
//! and infinite-scroll batching.

mod common;

use common::{channel_by_name, publish_text_pulse, state, test_config};
use pulso::app::channels::ChannelService;
use pulso::app::feed::{FeedQuery, FeedService, Pager, QuickFilter};
use pulso::app::pulses::PulseService;

// ===========================================================================
// Quick filters
// ===========================================================================

#[test]
fn quick_filter_cycles_all_featured_favorites() {
    assert_eq!(QuickFilter::All.next(), QuickFilter::Featured);
    assert_eq!(QuickFilter::Featured.next(), QuickFilter::Favorites);
    assert_eq!(QuickFilter::Favorites.next(), QuickFilter::All);
}

#[test]
fn featured_is_sorted_by_rating_then_votes() {
    let state = state();
    let feed = FeedService::new(state.store.clone());

    let query = FeedQuery {
        quick: Some(QuickFilter::Featured),
        ..Default::default()
    };
    let posts = feed.filtered(&query).unwrap();
    assert!(!posts.is_empty());

    for pair in posts.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.rating > b.rating || (a.rating == b.rating && a.rating_votes >= b.rating_votes),
            "feed not sorted: ({}, {}) before ({}, {})",
            a.rating,
            a.rating_votes,
            b.rating,
            b.rating_votes
        );
    }
}

#[test]
fn favorites_is_the_bookmarked_subsequence_in_order() {
    let state = state();
    let feed = FeedService::new(state.store.clone());

    let all = feed.filtered(&FeedQuery::default()).unwrap();
    let favorites = feed
        .filtered(&FeedQuery {
            quick: Some(QuickFilter::Favorites),
            ..Default::default()
        })
        .unwrap();

    assert!(favorites.iter().all(|post| post.is_bookmarked));
    let expected: Vec<_> = all
        .iter()
        .filter(|post| post.is_bookmarked)
        .map(|post| post.id)
        .collect();
    let actual: Vec<_> = favorites.iter().map(|post| post.id).collect();
    assert_eq!(actual, expected);
}

// ===========================================================================
// Channel/category selection and visibility
// ===========================================================================

#[test]
fn channel_selection_narrows_the_feed() {
    let state = state();
    let feed = FeedService::new(state.store.clone());
    let channel = channel_by_name(&state, "Product Management");

    let query = FeedQuery {
        channel: Some(channel.id),
        ..Default::default()
    };
    let posts = feed.filtered(&query).unwrap();
    assert!(!posts.is_empty());
    assert!(posts.iter().all(|post| post.channel_id == channel.id));
}

#[test]
fn category_selection_joins_through_channels() {
    let state = state();
    let feed = FeedService::new(state.store.clone());
    let design = channel_by_name(&state, "UI/UX Design");

    let query = FeedQuery {
        category: Some("Design".to_string()),
        ..Default::default()
    };
    let posts = feed.filtered(&query).unwrap();
    assert!(!posts.is_empty());
    assert!(posts.iter().all(|post| post.channel_id == design.id));
}

#[test]
fn posts_of_inactive_channels_are_hidden_everywhere() {
    let state = state();
    let feed = FeedService::new(state.store.clone());
    let travel = channel_by_name(&state, "Travel Tips");
    assert!(!travel.is_active);

    for quick in [QuickFilter::All, QuickFilter::Featured, QuickFilter::Favorites] {
        let query = FeedQuery {
            quick: Some(quick),
            ..Default::default()
        };
        let posts = feed.filtered(&query).unwrap();
        assert!(posts.iter().all(|post| post.channel_id != travel.id));
    }
}

#[test]
fn deactivated_posts_disappear_from_the_feed() {
    let state = state();
    let feed = FeedService::new(state.store.clone());
    let pulses = PulseService::new(state.store.clone());
    let channel = channel_by_name(&state, "Frontend Development");
    let post = publish_text_pulse(&state, channel.id, "soon hidden");

    assert!(pulses.deactivate(post.id).unwrap());
    let posts = feed.filtered(&FeedQuery::default()).unwrap();
    assert!(posts.iter().all(|p| p.id != post.id));

    assert!(pulses.reactivate(post.id).unwrap());
    let posts = feed.filtered(&FeedQuery::default()).unwrap();
    assert!(posts.iter().any(|p| p.id == post.id));
}

#[test]
fn deleting_a_channel_removes_its_posts_from_every_view() {
    let state = state();
    let feed = FeedService::new(state.store.clone());
    let channels = ChannelService::new(state.store.clone());
    let channel = channel_by_name(&state, "Product Management");
    publish_text_pulse(&state, channel.id, "third product post");

    let before = feed.filtered(&FeedQuery::default()).unwrap();
    let owned = before
        .iter()
        .filter(|post| post.channel_id == channel.id)
        .count();
    assert_eq!(owned, 3);

    let removed = channels.delete(channel.id).unwrap();
    assert_eq!(removed, 3);

    for quick in [QuickFilter::All, QuickFilter::Featured, QuickFilter::Favorites] {
        let query = FeedQuery {
            quick: Some(quick),
            ..Default::default()
        };
        let posts = feed.filtered(&query).unwrap();
        assert!(posts.iter().all(|post| post.channel_id != channel.id));
    }
}

// ===========================================================================
// Pagination
// ===========================================================================

#[tokio::test]
async fn pager_reveals_batches_capped_at_the_total() {
    let state = state();
    let feed = FeedService::new(state.store.clone());
    let channel = channel_by_name(&state, "Frontend Development");
    for i in 0..6 {
        publish_text_pulse(&state, channel.id, &format!("filler {i}"));
    }

    let query = FeedQuery::default();
    let total = feed.filtered(&query).unwrap().len();
    assert!(total > 8, "need more than one batch, got {total}");

    let mut pager = Pager::feed(&state.config);
    assert_eq!(feed.visible(&query, &pager).unwrap().len(), 8);

    assert!(pager.load_more(total).await);
    let visible = feed.visible(&query, &pager).unwrap();
    assert_eq!(visible.len(), (8 + 6).min(total));
    assert!(pager.loaded() <= total);

    // Drain the rest; loaded never exceeds the filtered total.
    while pager.load_more(total).await {}
    assert_eq!(pager.loaded(), total.max(8));
    assert!(!pager.load_more(total).await);
}

#[test]
fn pending_load_blocks_retriggering() {
    let mut pager = Pager::new(8, 6, std::time::Duration::from_millis(10));
    assert!(pager.begin_load(20));
    assert!(pager.is_pending());

    // The sentinel fires again while the first load settles.
    assert!(!pager.begin_load(20));

    pager.complete_load(20);
    assert!(!pager.is_pending());
    assert_eq!(pager.loaded(), 14);
}

#[test]
fn reset_restores_the_initial_batch_and_cancels_pending_loads() {
    let mut pager = Pager::new(8, 6, std::time::Duration::from_millis(10));
    assert!(pager.begin_load(30));
    pager.complete_load(30);
    assert!(pager.begin_load(30));

    // Filter changed mid-load.
    pager.reset();
    assert_eq!(pager.loaded(), 8);
    assert!(!pager.is_pending());

    // A completed load after reset is ignored.
    pager.complete_load(30);
    assert_eq!(pager.loaded(), 8);
}

#[test]
fn channel_pager_uses_its_own_batch_sizes() {
    let config = test_config();
    let mut pager = Pager::channels(&config);
    assert_eq!(pager.loaded(), 10);
    assert!(pager.begin_load(30));
    pager.complete_load(30);
    assert_eq!(pager.loaded(), 18);
}

#[tokio::test]
async fn load_more_is_a_noop_when_everything_is_visible() {
    let state = state();
    let feed = FeedService::new(state.store.clone());
    let query = FeedQuery::default();
    let total = feed.filtered(&query).unwrap().len();
    assert!(total <= 8);

    let mut pager = Pager::feed(&state.config);
    assert!(!pager.load_more(total).await);
    assert_eq!(pager.loaded(), 8);
}
