//! Management View Tests
//!
//! Covers the course catalog filters, numbered pagination, and the pulse
//! and channel table rows.

mod common;

use common::{channel_by_name, publish_text_pulse, state};
use pulso::app::catalog::{pulse_title, CatalogQuery, CatalogService};
use pulso::app::pulses::PulseService;
use pulso::domain::course::CourseStatus;

// ===========================================================================
// Course catalog
// ===========================================================================

#[test]
fn catalog_lists_every_seeded_course_by_default() {
    let state = state();
    let service = CatalogService::new(state.store.clone());
    let courses = service.courses(&CatalogQuery::default()).unwrap();
    assert_eq!(courses.len(), 24);
}

#[test]
fn search_matches_name_owner_and_category_case_insensitively() {
    let state = state();
    let service = CatalogService::new(state.store.clone());

    let by_name = service
        .courses(&CatalogQuery {
            search: Some("FIGMA".into()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(by_name.len(), 5);
    assert!(by_name.iter().all(|c| c.name.starts_with("Figma")));

    let by_owner = service
        .courses(&CatalogQuery {
            search: Some("charlie".into()),
            ..Default::default()
        })
        .unwrap();
    assert!(!by_owner.is_empty());
    assert!(by_owner.iter().all(|c| c.owner == "Charlie Brown"));

    let blank = service
        .courses(&CatalogQuery {
            search: Some("   ".into()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(blank.len(), 24);
}

#[test]
fn category_and_status_filters_compose() {
    let state = state();
    let service = CatalogService::new(state.store.clone());

    let management = service
        .courses(&CatalogQuery {
            category: Some("Management".into()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(management.len(), 5);

    let in_creation = service
        .courses(&CatalogQuery {
            status: Some(CourseStatus::InCreation),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(in_creation.len(), 6);

    let both = service
        .courses(&CatalogQuery {
            category: Some("Design".into()),
            status: Some(CourseStatus::InCreation),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].name, "Figma for Developers 3");
}

#[test]
fn courses_page_slices_one_based_pages() {
    let state = state();
    let service = CatalogService::new(state.store.clone());
    let query = CatalogQuery::default();

    let first = service.courses_page(&query, 1, 10).unwrap();
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.total, 24);
    assert_eq!(first.total_pages(), 3);

    let last = service.courses_page(&query, 3, 10).unwrap();
    assert_eq!(last.items.len(), 4);

    let beyond = service.courses_page(&query, 4, 10).unwrap();
    assert!(beyond.items.is_empty());

    // Page zero clamps to the first page.
    let clamped = service.courses_page(&query, 0, 10).unwrap();
    assert_eq!(clamped.page, 1);
    assert_eq!(clamped.items.len(), 10);
}

// ===========================================================================
// Pulse table
// ===========================================================================

#[test]
fn pulse_rows_cover_a_channel_and_resolve_author_names() {
    let state = state();
    let service = CatalogService::new(state.store.clone());
    let channel = channel_by_name(&state, "Product Management");

    let rows = service.pulse_rows(channel.id, None).unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row.channel_id == channel.id));
    assert!(rows.iter().all(|row| row.author_name == "Charlie Brown"));
}

#[test]
fn pulse_rows_exclude_deactivated_pulses() {
    let state = state();
    let service = CatalogService::new(state.store.clone());
    let pulses = PulseService::new(state.store.clone());
    let channel = channel_by_name(&state, "Product Management");

    let rows = service.pulse_rows(channel.id, None).unwrap();
    pulses.deactivate(rows[0].id).unwrap();

    let after = service.pulse_rows(channel.id, None).unwrap();
    assert_eq!(after.len(), rows.len() - 1);
    assert!(after.iter().all(|row| row.id != rows[0].id));
}

#[test]
fn pulse_rows_search_spans_title_author_and_type_label() {
    let state = state();
    let service = CatalogService::new(state.store.clone());
    let channel = channel_by_name(&state, "Product Management");

    let by_title = service.pulse_rows(channel.id, Some("roadmap")).unwrap();
    assert_eq!(by_title.len(), 1);

    let by_label = service.pulse_rows(channel.id, Some("quiz")).unwrap();
    assert_eq!(by_label.len(), 1);

    let none = service.pulse_rows(channel.id, Some("nope")).unwrap();
    assert!(none.is_empty());
}

#[test]
fn pulse_titles_collapse_whitespace_and_truncate() {
    assert_eq!(pulse_title("  hello   world  "), "hello world");
    assert_eq!(pulse_title("   \n\t "), "Untitled pulse");

    let long = "word ".repeat(40);
    let title = pulse_title(&long);
    assert!(title.ends_with("..."));
    assert_eq!(title.chars().count(), 72 + 3);
}

// ===========================================================================
// Channel table
// ===========================================================================

#[test]
fn channel_rows_report_owners_and_live_pulse_counts() {
    let state = state();
    let service = CatalogService::new(state.store.clone());
    let frontend = channel_by_name(&state, "Frontend Development");
    publish_text_pulse(&state, frontend.id, "one more pulse");

    let rows = service.channel_rows(None).unwrap();
    assert_eq!(rows.len(), 6);

    let row = rows.iter().find(|row| row.id == frontend.id).unwrap();
    assert_eq!(row.owner_name, "Maria Fernanda");
    assert_eq!(row.pulse_count, 3);
    assert!(row.is_subscribed);
}

#[test]
fn channel_rows_search_narrows_by_name_category_or_owner() {
    let state = state();
    let service = CatalogService::new(state.store.clone());

    let by_category = service.channel_rows(Some("lifestyle")).unwrap();
    assert_eq!(by_category.len(), 2);

    let by_owner = service.channel_rows(Some("bob")).unwrap();
    assert_eq!(by_owner.len(), 1);
    assert_eq!(by_owner[0].name, "UI/UX Design");
}
