use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::domain::channel::Channel;
use crate::domain::comment::Comment;
use crate::domain::course::{Course, CourseStatus};
use crate::domain::post::{ContentType, EmbedProvider, Post, PostEmbed};
use crate::domain::user::User;
use crate::infra::store::Store;

/// Builds the seed dataset the engine starts from. Deterministic in shape
/// (ids are generated, everything else is fixed) so tests can look
/// entities up by name.
pub fn seed() -> Store {
    let now = OffsetDateTime::now_utc();

    let users = vec![
        user("Alice Johnson", "Frontend Developer"),
        user("Bob Williams", "Product Designer"),
        user("Charlie Brown", "Product Manager"),
        user("Maria Fernanda", "Sales Lead"),
    ];
    // The last seeded user acts as the current viewer.
    let viewer_id = users[3].id;

    let channels = vec![
        channel(
            "Frontend Development",
            "Technology",
            "Frameworks, components and everything frontend.",
            users[3].id,
            true,
            true,
        ),
        channel(
            "UI/UX Design",
            "Design",
            "Share your work and discuss interface best practices.",
            users[1].id,
            false,
            true,
        ),
        channel(
            "Product Management",
            "Management",
            "Roadmaps, prioritization and metrics.",
            users[2].id,
            true,
            true,
        ),
        channel(
            "Amateur Photography",
            "Creativity",
            "Photos, gear tips and editing techniques.",
            users[3].id,
            false,
            true,
        ),
        channel(
            "Quick Recipes",
            "Lifestyle",
            "Easy recipes for busy days.",
            users[0].id,
            true,
            true,
        ),
        channel(
            "Travel Tips",
            "Lifestyle",
            "Itineraries and stories from the road.",
            users[3].id,
            false,
            false,
        ),
    ];

    let mut posts = Vec::new();

    let mut first = post(
        users[0].id,
        channels[0].id,
        ContentType::Image,
        "A walkthrough of reusable component structure, design tokens and \
         loading states for web and mobile.",
        now - Duration::hours(2),
    );
    first.image_url = Some("https://images.example.com/frontend-cover.jpg".into());
    first.rating = 4.6;
    first.rating_votes = 48;
    first.likes = 42;
    first.is_bookmarked = true;
    let c1 = comment(
        users[1].id,
        "Excellent content! Already applying some of these tips.",
        now - Duration::hours(1),
        None,
    );
    let c2 = comment(
        users[0].id,
        "Glad it helped, Bob!",
        now - Duration::minutes(45),
        Some(c1.id),
    );
    first.comments = vec![c1, c2];
    first.comment_count = first.comments.len();
    posts.push(first);

    let mut second = post(
        users[2].id,
        channels[2].id,
        ContentType::Video,
        "Recording of last week's roadmap review session.",
        now - Duration::hours(5),
    );
    second.embed = Some(PostEmbed {
        provider: EmbedProvider::Youtube,
        embed_url: "https://www.youtube.com/embed/roadmap123".into(),
    });
    second.rating = 4.8;
    second.rating_votes = 12;
    second.likes = 18;
    posts.push(second);

    let mut third = post(
        users[1].id,
        channels[1].id,
        ContentType::Pdf,
        "Accessibility checklist for handoff, exported as PDF.",
        now - Duration::hours(8),
    );
    third.media_url = Some("https://files.example.com/a11y-checklist.pdf".into());
    third.rating = 4.1;
    third.rating_votes = 7;
    third.is_bookmarked = true;
    posts.push(third);

    let fourth = post(
        users[3].id,
        channels[0].id,
        ContentType::Text,
        "Which state management approach are you using this quarter?",
        now - Duration::hours(11),
    );
    posts.push(fourth);

    let mut fifth = post(
        users[0].id,
        channels[4].id,
        ContentType::Podcast,
        "Ten-minute episode on meal prepping without the stress.",
        now - Duration::days(1),
    );
    fifth.media_url = Some("https://files.example.com/meal-prep.mp3".into());
    fifth.rating = 3.9;
    fifth.rating_votes = 21;
    posts.push(fifth);

    let mut sixth = post(
        users[2].id,
        channels[2].id,
        ContentType::Quiz,
        "Quarterly product knowledge check.",
        now - Duration::days(2),
    );
    sixth.rating = 4.6;
    sixth.rating_votes = 30;
    posts.push(sixth);

    let mut seventh = post(
        users[3].id,
        channels[3].id,
        ContentType::Image,
        "Golden hour on the waterfront, straight out of camera.",
        now - Duration::days(3),
    );
    seventh.image_url = Some("https://images.example.com/golden-hour.jpg".into());
    seventh.likes = 55;
    seventh.is_liked = true;
    seventh.is_bookmarked = true;
    posts.push(seventh);

    let eighth = post(
        users[1].id,
        channels[5].id,
        ContentType::Text,
        "Three underrated towns worth a weekend trip.",
        now - Duration::days(4),
    );
    posts.push(eighth);

    let courses = seed_courses(now);

    Store {
        users,
        channels,
        posts,
        courses,
        viewer_id,
        toasts: Vec::new(),
    }
}

fn seed_courses(now: OffsetDateTime) -> Vec<Course> {
    let templates = [
        ("Onboarding Essentials", "Maria Fernanda", "People", "2h 30m"),
        ("Figma for Developers", "Bob Williams", "Design", "1h 45m"),
        ("Data-Informed Roadmaps", "Charlie Brown", "Management", "3h 10m"),
        ("Accessible Interfaces", "Alice Johnson", "Technology", "2h 05m"),
        ("Negotiation Basics", "Maria Fernanda", "Sales", "1h 20m"),
    ];

    (0..24)
        .map(|i| {
            let (name, owner, category, duration) = templates[i % templates.len()];
            let batch = i / templates.len() + 1;
            Course {
                id: Uuid::new_v4(),
                name: format!("{} {}", name, batch),
                owner: owner.to_string(),
                category: category.to_string(),
                created_at: now - Duration::days(30 + i as i64),
                duration: duration.to_string(),
                enrolled: 40 + (i as u32 * 7) % 90,
                finished: 10 + (i as u32 * 3) % 35,
                status: if i % 4 == 3 {
                    CourseStatus::InCreation
                } else {
                    CourseStatus::Published
                },
            }
        })
        .collect()
}

fn user(name: &str, title: &str) -> User {
    let id = Uuid::new_v4();
    User {
        id,
        name: name.to_string(),
        avatar_url: format!("https://avatars.example.com/{}", id),
        title: title.to_string(),
    }
}

fn channel(
    name: &str,
    category: &str,
    description: &str,
    owner_id: Uuid,
    is_subscribed: bool,
    is_active: bool,
) -> Channel {
    Channel {
        id: Uuid::new_v4(),
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        cover_url: Some(format!(
            "https://images.example.com/channels/{}.jpg",
            name.to_lowercase().replace(' ', "-")
        )),
        owner_id,
        is_subscribed,
        is_active,
    }
}

fn post(
    author_id: Uuid,
    channel_id: Uuid,
    content_type: ContentType,
    text: &str,
    created_at: OffsetDateTime,
) -> Post {
    let mut post = Post::new(author_id, channel_id, content_type, text.to_string());
    post.created_at = created_at;
    post
}

fn comment(
    author_id: Uuid,
    text: &str,
    created_at: OffsetDateTime,
    parent_id: Option<Uuid>,
) -> Comment {
    Comment {
        id: Uuid::new_v4(),
        author_id,
        text: text.to_string(),
        created_at,
        edited: false,
        parent_id,
    }
}
