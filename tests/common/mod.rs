#![allow(dead_code)]

use uuid::Uuid;

use pulso::app::pulses::PulseService;
use pulso::config::AppConfig;
use pulso::domain::channel::Channel;
use pulso::domain::post::{ContentType, Post};
use pulso::AppState;

/// Config with a short settle delay so pagination tests stay fast.
pub fn test_config() -> AppConfig {
    AppConfig {
        app_mode: "feed".into(),
        feed_initial_batch: 8,
        feed_batch_step: 6,
        channel_initial_batch: 10,
        channel_batch_step: 8,
        feed_settle_ms: 10,
        max_pulse_name_chars: 200,
        max_quiz_name_chars: 100,
        share_origin: "https://pulso.test".into(),
    }
}

/// Fresh state over the seed dataset. Every test gets its own copy.
pub fn state() -> AppState {
    AppState::with_fixture(test_config())
}

pub fn viewer_id(state: &AppState) -> Uuid {
    state.store.with(|store| store.viewer_id).unwrap()
}

pub fn channel_by_name(state: &AppState, name: &str) -> Channel {
    state
        .store
        .with(|store| {
            store
                .channels
                .iter()
                .find(|channel| channel.name == name)
                .cloned()
        })
        .unwrap()
        .unwrap_or_else(|| panic!("no channel named {name}"))
}

pub fn post_by_text(state: &AppState, needle: &str) -> Post {
    state
        .store
        .with(|store| {
            store
                .posts
                .iter()
                .find(|post| post.text.contains(needle))
                .cloned()
        })
        .unwrap()
        .unwrap_or_else(|| panic!("no post containing {needle:?}"))
}

pub fn get_post(state: &AppState, id: Uuid) -> Post {
    state
        .store
        .with(|store| store.post(id).cloned())
        .unwrap()
        .expect("post exists")
}

/// Publishes a bare text pulse into the given channel, for tests that
/// need more posts than the fixture ships with.
pub fn publish_text_pulse(state: &AppState, channel_id: Uuid, text: &str) -> Post {
    let author = viewer_id(state);
    let post = Post::new(author, channel_id, ContentType::Text, text.to_string());
    PulseService::new(state.store.clone())
        .publish(post)
        .expect("publish")
}
