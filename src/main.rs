use anyhow::anyhow;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pulso::app::catalog::{CatalogQuery, CatalogService};
use pulso::app::channels::ChannelService;
use pulso::app::composer::{Composer, LinkKind, MainType, Subtype};
use pulso::app::feed::{FeedQuery, FeedService, Pager, QuickFilter};
use pulso::app::pulses::PulseService;
use pulso::config::AppConfig;
use pulso::infra::session::MemorySession;
use pulso::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let state = AppState::with_fixture(config.clone());

    match config.app_mode.as_str() {
        "feed" => feed_demo(state).await,
        "catalog" => catalog_demo(state),
        other => Err(anyhow!("unknown APP_MODE: {}", other)),
    }
}

/// Walks through a short feed session: restore the open channel, scroll
/// through a couple of batches, then compose and publish a pulse.
async fn feed_demo(state: AppState) -> anyhow::Result<()> {
    let feed = FeedService::new(state.store.clone());
    let channels = ChannelService::new(state.store.clone());
    let pulses = PulseService::new(state.store.clone());

    let mut session = MemorySession::new();
    let mut query = FeedQuery::default();
    let mut pager = Pager::feed(&state.config);

    query.channel = channels.restore(&mut session)?;

    let visible = feed.visible(&query, &pager)?;
    info!(count = visible.len(), "initial feed batch");

    while pager.load_more(feed.filtered(&query)?.len()).await {
        let visible = feed.visible(&query, &pager)?;
        info!(count = visible.len(), "revealed another batch");
    }

    query.quick = Some(QuickFilter::All.next());
    pager.reset();
    for post in feed.visible(&query, &pager)? {
        info!(rating = post.rating, votes = post.rating_votes, "featured pulse");
    }

    let viewer_id = state.store.with(|store| store.viewer_id)?;
    let channel_id = state.store.with(|store| store.channels[0].id)?;

    let mut composer = Composer::new(&state.config);
    composer.choose_main(MainType::Link);
    composer.choose_subtype(Subtype::Link(LinkKind::Youtube));
    composer.set_name("Team demo recording");
    composer.set_channel(channel_id);
    composer.set_external_url("https://youtu.be/dQw4w9WgXcQ");
    let post = composer.submit(viewer_id)?;
    let post = pulses.publish(post)?;
    info!(post_id = %post.id, content_type = post.content_type.as_str(), "pulse published");
    info!(payload = %serde_json::to_string(&post)?, "pulse payload");

    Ok(())
}

/// Prints the first page of every management table.
fn catalog_demo(state: AppState) -> anyhow::Result<()> {
    let catalog = CatalogService::new(state.store.clone());

    let page = catalog.courses_page(&CatalogQuery::default(), 1, 10)?;
    info!(
        total = page.total,
        pages = page.total_pages(),
        "course catalog"
    );
    for course in &page.items {
        info!(name = %course.name, status = course.status.as_str(), "course");
    }

    for row in catalog.channel_rows(None)? {
        info!(name = %row.name, pulses = row.pulse_count, "channel");
    }

    let channel_id = state.store.with(|store| store.channels[0].id)?;
    for row in catalog.pulse_rows(channel_id, None)? {
        info!(title = %row.title, author = %row.author_name, "pulse log row");
    }

    Ok(())
}
