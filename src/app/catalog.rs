use anyhow::Result;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::course::{Course, CourseStatus};
use crate::domain::post::ContentType;
use crate::infra::store::StoreHandle;

const PULSE_TITLE_MAX_CHARS: usize = 72;

#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub status: Option<CourseStatus>,
}

/// A numbered slice of a filtered listing (the management tables paginate
/// by page number, unlike the feed's infinite scroll).
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> usize {
        if self.per_page == 0 {
            return 0;
        }
        self.total.div_ceil(self.per_page)
    }
}

/// One row of the pulse log table in the management view.
#[derive(Debug, Clone)]
pub struct PulseRow {
    pub id: Uuid,
    pub channel_id: Uuid,
    pub content_type: ContentType,
    pub title: String,
    pub author_name: String,
    pub rating: f64,
    pub comment_count: usize,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct ChannelRow {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub owner_name: String,
    pub pulse_count: usize,
    pub is_subscribed: bool,
    pub is_active: bool,
}

/// Read models for the management views: the course catalog plus the
/// pulse and channel tables. Everything here is display-only.
#[derive(Clone)]
pub struct CatalogService {
    store: StoreHandle,
}

impl CatalogService {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    pub fn courses(&self, query: &CatalogQuery) -> Result<Vec<Course>> {
        let needle = normalized_search(&query.search);
        self.store.with(|store| {
            store
                .courses
                .iter()
                .filter(|course| match &query.category {
                    Some(category) => &course.category == category,
                    None => true,
                })
                .filter(|course| match query.status {
                    Some(status) => course.status == status,
                    None => true,
                })
                .filter(|course| match &needle {
                    Some(needle) => {
                        course.name.to_lowercase().contains(needle)
                            || course.owner.to_lowercase().contains(needle)
                            || course.category.to_lowercase().contains(needle)
                    }
                    None => true,
                })
                .cloned()
                .collect()
        })
    }

    /// 1-based page over the filtered catalog.
    pub fn courses_page(
        &self,
        query: &CatalogQuery,
        page: usize,
        per_page: usize,
    ) -> Result<Page<Course>> {
        let all = self.courses(query)?;
        let total = all.len();
        let page = page.max(1);
        let items = all
            .into_iter()
            .skip((page - 1) * per_page)
            .take(per_page)
            .collect();
        Ok(Page {
            items,
            page,
            per_page,
            total,
        })
    }

    /// Log rows for one channel's active pulses, newest first in fixture
    /// order, optionally narrowed by a search term over title, author and
    /// type label.
    pub fn pulse_rows(&self, channel_id: Uuid, search: Option<&str>) -> Result<Vec<PulseRow>> {
        let needle = normalized_search(&search.map(str::to_string));
        self.store.with(|store| {
            store
                .posts
                .iter()
                .filter(|post| post.channel_id == channel_id && post.is_active)
                .map(|post| PulseRow {
                    id: post.id,
                    channel_id: post.channel_id,
                    content_type: post.content_type,
                    title: pulse_title(&post.text),
                    author_name: store
                        .user(post.author_id)
                        .map(|user| user.name.clone())
                        .unwrap_or_else(|| "Unknown".to_string()),
                    rating: post.rating,
                    comment_count: post.comment_count,
                    created_at: post.created_at,
                })
                .filter(|row| match &needle {
                    Some(needle) => {
                        row.title.to_lowercase().contains(needle)
                            || row.author_name.to_lowercase().contains(needle)
                            || row.content_type.label().to_lowercase().contains(needle)
                    }
                    None => true,
                })
                .collect()
        })
    }

    /// Channel table rows with owner names and live pulse counts.
    pub fn channel_rows(&self, search: Option<&str>) -> Result<Vec<ChannelRow>> {
        let needle = normalized_search(&search.map(str::to_string));
        self.store.with(|store| {
            store
                .channels
                .iter()
                .map(|channel| ChannelRow {
                    id: channel.id,
                    name: channel.name.clone(),
                    category: channel.category.clone(),
                    owner_name: store
                        .user(channel.owner_id)
                        .map(|user| user.name.clone())
                        .unwrap_or_else(|| "Unknown".to_string()),
                    pulse_count: store
                        .posts
                        .iter()
                        .filter(|post| post.channel_id == channel.id && post.is_active)
                        .count(),
                    is_subscribed: channel.is_subscribed,
                    is_active: channel.is_active,
                })
                .filter(|row| match &needle {
                    Some(needle) => {
                        row.name.to_lowercase().contains(needle)
                            || row.category.to_lowercase().contains(needle)
                            || row.owner_name.to_lowercase().contains(needle)
                    }
                    None => true,
                })
                .collect()
        })
    }
}

/// Derives a table title from a pulse's free-form text: whitespace
/// collapsed, truncated at 72 characters with an ellipsis.
pub fn pulse_title(text: &str) -> String {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return "Untitled pulse".to_string();
    }
    if normalized.chars().count() > PULSE_TITLE_MAX_CHARS {
        let truncated: String = normalized.chars().take(PULSE_TITLE_MAX_CHARS).collect();
        return format!("{}...", truncated);
    }
    normalized
}

fn normalized_search(search: &Option<String>) -> Option<String> {
    search
        .as_ref()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
}
