use anyhow::{anyhow, Result};
use url::Url;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::domain::post::{ContentType, EmbedProvider, Post, PostEmbed};

/// First wizard choice: where the new pulse's content comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainType {
    File,
    Link,
    Quiz,
    Html,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Video,
    Image,
    Podcast,
    Pdf,
    Word,
    Powerpoint,
    Excel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Youtube,
    Vimeo,
    Soundcloud,
    GoogleDrive,
    ExternalLink,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HtmlKind {
    Genially,
    H5p,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizKind {
    Evaluative,
    Survey,
}

/// Subtype choice for the main types that require one (everything except
/// QUIZ, which goes straight to the details step).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subtype {
    File(FileKind),
    Link(LinkKind),
    Html(HtmlKind),
}

/// A fully selected content kind, carried by the details step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    File(FileKind),
    Link(LinkKind),
    Html(HtmlKind),
    Quiz,
}

impl Selection {
    pub fn main(&self) -> MainType {
        match self {
            Self::File(_) => MainType::File,
            Self::Link(_) => MainType::Link,
            Self::Html(_) => MainType::Html,
            Self::Quiz => MainType::Quiz,
        }
    }
}

/// Wizard position. Step-specific data rides on the variant, so there is
/// no way to be "in details" without a complete selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    SelectMain,
    SelectSubtype { main: MainType },
    Details { selection: Selection },
}

/// An uploaded file, referenced by its object URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub object_url: String,
}

impl Attachment {
    /// Genially accepts an exported archive in place of a URL.
    pub fn is_archive(&self) -> bool {
        let name = self.file_name.to_ascii_lowercase();
        name.ends_with(".zip") || name.ends_with(".tar.gz")
    }
}

/// Why the submit action is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Issue {
    NotOnDetailsStep,
    NameMissing,
    NameTooLong { max: usize },
    ChannelMissing,
    AttachmentMissing,
    UrlMissing,
    UrlInvalid,
}

/// Multi-step creation wizard. Drives main type -> subtype -> details,
/// validates the details, and produces the stored pulse on submit.
#[derive(Debug, Clone)]
pub struct Composer {
    step: Step,
    name: String,
    channel_id: Option<Uuid>,
    external_url: String,
    attachment: Option<Attachment>,
    quiz_kind: QuizKind,
    max_name_chars: usize,
    max_quiz_name_chars: usize,
}

impl Composer {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            step: Step::SelectMain,
            name: String::new(),
            channel_id: None,
            external_url: String::new(),
            attachment: None,
            quiz_kind: QuizKind::Evaluative,
            max_name_chars: config.max_pulse_name_chars,
            max_quiz_name_chars: config.max_quiz_name_chars,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// Picks the main type. QUIZ has no subtype and jumps straight to
    /// details; everything else goes through subtype selection.
    pub fn choose_main(&mut self, main: MainType) -> bool {
        if self.step != Step::SelectMain {
            return false;
        }
        self.step = match main {
            MainType::Quiz => Step::Details {
                selection: Selection::Quiz,
            },
            other => Step::SelectSubtype { main: other },
        };
        true
    }

    /// Picks a subtype; it must belong to the main type chosen before.
    pub fn choose_subtype(&mut self, subtype: Subtype) -> bool {
        let Step::SelectSubtype { main } = self.step else {
            return false;
        };
        let selection = match (main, subtype) {
            (MainType::File, Subtype::File(kind)) => Selection::File(kind),
            (MainType::Link, Subtype::Link(kind)) => Selection::Link(kind),
            (MainType::Html, Subtype::Html(kind)) => Selection::Html(kind),
            _ => return false,
        };
        self.step = Step::Details { selection };
        true
    }

    /// Returns to the previous step, clearing whatever was entered in the
    /// step being left.
    pub fn back(&mut self) {
        match self.step {
            Step::SelectMain => {}
            Step::SelectSubtype { .. } => {
                self.step = Step::SelectMain;
            }
            Step::Details { selection } => {
                self.clear_details();
                self.step = match selection {
                    Selection::Quiz => Step::SelectMain,
                    other => Step::SelectSubtype { main: other.main() },
                };
            }
        }
    }

    /// Closing the wizard resets everything.
    pub fn close(&mut self) {
        self.step = Step::SelectMain;
        self.clear_details();
    }

    fn clear_details(&mut self) {
        self.name.clear();
        self.channel_id = None;
        self.external_url.clear();
        self.attachment = None;
        self.quiz_kind = QuizKind::Evaluative;
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn set_channel(&mut self, channel_id: Uuid) {
        self.channel_id = Some(channel_id);
    }

    pub fn set_external_url(&mut self, url: &str) {
        self.external_url = url.trim().to_string();
    }

    pub fn attach(&mut self, attachment: Attachment) {
        self.attachment = Some(attachment);
    }

    pub fn clear_attachment(&mut self) {
        self.attachment = None;
    }

    pub fn set_quiz_kind(&mut self, kind: QuizKind) {
        self.quiz_kind = kind;
    }

    /// Everything currently blocking submission. Empty means the submit
    /// action is enabled.
    pub fn issues(&self) -> Vec<Issue> {
        let Step::Details { selection } = self.step else {
            return vec![Issue::NotOnDetailsStep];
        };

        let mut issues = Vec::new();

        let max = match selection {
            Selection::Quiz => self.max_quiz_name_chars,
            _ => self.max_name_chars,
        };
        let name_len = self.name.trim().chars().count();
        if name_len == 0 {
            issues.push(Issue::NameMissing);
        } else if name_len > max {
            issues.push(Issue::NameTooLong { max });
        }

        if self.channel_id.is_none() {
            issues.push(Issue::ChannelMissing);
        }

        match selection {
            Selection::File(_) => {
                if self.attachment.is_none() {
                    issues.push(Issue::AttachmentMissing);
                }
            }
            Selection::Link(kind) => {
                issues.extend(self.url_issue(link_url_is_valid(kind, &self.external_url)));
            }
            Selection::Html(HtmlKind::Genially) => {
                // Genially takes either a valid URL or an exported archive.
                let has_archive = self.attachment.as_ref().is_some_and(Attachment::is_archive);
                if !has_archive {
                    issues.extend(
                        self.url_issue(host_matches(&self.external_url, &["genially", "genial"])),
                    );
                }
            }
            Selection::Html(HtmlKind::H5p) => {
                issues.extend(self.url_issue(host_matches(&self.external_url, &["h5p"])));
            }
            Selection::Quiz => {}
        }

        issues
    }

    fn url_issue(&self, valid: bool) -> Option<Issue> {
        if self.external_url.is_empty() {
            Some(Issue::UrlMissing)
        } else if !valid {
            Some(Issue::UrlInvalid)
        } else {
            None
        }
    }

    pub fn can_submit(&self) -> bool {
        self.issues().is_empty()
    }

    /// Builds the pulse this wizard describes. Fails when validation
    /// still has issues; the caller publishes the result and the wizard
    /// resets.
    pub fn submit(&mut self, author_id: Uuid) -> Result<Post> {
        let Step::Details { selection } = self.step else {
            return Err(anyhow!("wizard is not on the details step"));
        };
        if !self.can_submit() {
            return Err(anyhow!("wizard has unresolved validation issues"));
        }
        let channel_id = self
            .channel_id
            .ok_or_else(|| anyhow!("no channel selected"))?;

        let name = self.name.trim().to_string();
        let mut post = Post::new(author_id, channel_id, ContentType::Text, name);

        match selection {
            Selection::File(kind) => {
                let attachment = self
                    .attachment
                    .as_ref()
                    .ok_or_else(|| anyhow!("no file attached"))?;
                post.content_type = file_content_type(kind);
                if kind == FileKind::Image {
                    post.image_url = Some(attachment.object_url.clone());
                } else {
                    post.media_url = Some(attachment.object_url.clone());
                }
            }
            Selection::Link(_) | Selection::Html(HtmlKind::H5p) => {
                let (content_type, embed) = classify_link(&self.external_url)
                    .ok_or_else(|| anyhow!("unrecognized external url"))?;
                post.content_type = content_type;
                post.embed = Some(embed);
            }
            Selection::Html(HtmlKind::Genially) => {
                post.content_type = ContentType::Genially;
                match self.attachment.as_ref().filter(|a| a.is_archive()) {
                    Some(archive) => post.media_url = Some(archive.object_url.clone()),
                    None => {
                        post.embed = Some(PostEmbed {
                            provider: EmbedProvider::Genially,
                            embed_url: self.external_url.clone(),
                        });
                    }
                }
            }
            Selection::Quiz => {
                post.content_type = ContentType::Quiz;
            }
        }

        self.close();
        Ok(post)
    }
}

fn file_content_type(kind: FileKind) -> ContentType {
    match kind {
        FileKind::Video => ContentType::Video,
        FileKind::Image => ContentType::Image,
        FileKind::Podcast => ContentType::Podcast,
        FileKind::Pdf => ContentType::Pdf,
        FileKind::Word => ContentType::Text,
        FileKind::Powerpoint => ContentType::Presentation,
        FileKind::Excel => ContentType::Spreadsheet,
    }
}

fn link_url_is_valid(kind: LinkKind, raw: &str) -> bool {
    match kind {
        LinkKind::Youtube => youtube_video_id(raw).is_some(),
        LinkKind::Vimeo => vimeo_video_id(raw).is_some(),
        LinkKind::Soundcloud => host_matches(raw, &["soundcloud"]),
        LinkKind::GoogleDrive => host_matches(raw, &["drive.google", "docs.google"]),
        LinkKind::ExternalLink => parse_http_url(raw).is_some(),
    }
}

fn parse_http_url(raw: &str) -> Option<Url> {
    let url = Url::parse(raw).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(url)
}

fn host_matches(raw: &str, needles: &[&str]) -> bool {
    let Some(url) = parse_http_url(raw) else {
        return false;
    };
    let Some(host) = url.host_str() else {
        return false;
    };
    needles.iter().any(|needle| host.contains(needle))
}

/// Extracts a provider-specific embeddable URL from an external link.
/// Returns the inferred pulse content type alongside the embed.
pub fn classify_link(raw: &str) -> Option<(ContentType, PostEmbed)> {
    let url = parse_http_url(raw)?;
    let host = url.host_str()?.to_ascii_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);

    if host == "youtu.be" || host.ends_with("youtube.com") {
        let id = youtube_video_id(raw)?;
        return Some((
            ContentType::Video,
            PostEmbed {
                provider: EmbedProvider::Youtube,
                embed_url: format!("https://www.youtube.com/embed/{}", id),
            },
        ));
    }

    if host.ends_with("vimeo.com") {
        let id = vimeo_video_id(raw)?;
        return Some((
            ContentType::Video,
            PostEmbed {
                provider: EmbedProvider::Vimeo,
                embed_url: format!("https://player.vimeo.com/video/{}", id),
            },
        ));
    }

    if host.ends_with("soundcloud.com") {
        let encoded: String = url::form_urlencoded::byte_serialize(raw.as_bytes()).collect();
        return Some((
            ContentType::Podcast,
            PostEmbed {
                provider: EmbedProvider::Soundcloud,
                embed_url: format!("https://w.soundcloud.com/player/?url={}", encoded),
            },
        ));
    }

    if host == "docs.google.com" {
        let mut segments = url.path_segments()?;
        return match segments.next() {
            Some("spreadsheets") => Some((
                ContentType::Spreadsheet,
                PostEmbed {
                    provider: EmbedProvider::GoogleSheets,
                    embed_url: raw.to_string(),
                },
            )),
            Some("presentation") => Some((
                ContentType::Presentation,
                PostEmbed {
                    provider: EmbedProvider::GoogleSlides,
                    embed_url: raw.to_string(),
                },
            )),
            Some("document") => Some((
                ContentType::Text,
                PostEmbed {
                    provider: EmbedProvider::GoogleDocs,
                    embed_url: raw.to_string(),
                },
            )),
            _ => Some((
                ContentType::Pdf,
                PostEmbed {
                    provider: EmbedProvider::GoogleDrive,
                    embed_url: raw.to_string(),
                },
            )),
        };
    }

    if host == "drive.google.com" {
        // /file/d/<id>/view -> /file/d/<id>/preview
        let segments: Vec<&str> = url.path_segments()?.collect();
        if let ["file", "d", id, ..] = segments.as_slice() {
            return Some((
                ContentType::Pdf,
                PostEmbed {
                    provider: EmbedProvider::GoogleDrive,
                    embed_url: format!("https://drive.google.com/file/d/{}/preview", id),
                },
            ));
        }
        return Some((
            ContentType::Pdf,
            PostEmbed {
                provider: EmbedProvider::GoogleDrive,
                embed_url: raw.to_string(),
            },
        ));
    }

    if host.contains("genial") {
        return Some((
            ContentType::Genially,
            PostEmbed {
                provider: EmbedProvider::Genially,
                embed_url: raw.to_string(),
            },
        ));
    }

    if host.contains("h5p") {
        return Some((
            ContentType::H5p,
            PostEmbed {
                provider: EmbedProvider::H5p,
                embed_url: raw.to_string(),
            },
        ));
    }

    Some((
        ContentType::Text,
        PostEmbed {
            provider: EmbedProvider::Link,
            embed_url: raw.to_string(),
        },
    ))
}

/// Pulls the 11-character video id out of the YouTube URL shapes users
/// actually paste: youtu.be/<id>, /watch?v=<id>, /embed/<id>,
/// /shorts/<id>.
pub fn youtube_video_id(raw: &str) -> Option<String> {
    let url = parse_http_url(raw)?;
    let host = url.host_str()?.to_ascii_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);

    let candidate = if host == "youtu.be" {
        url.path_segments()?.next().map(str::to_string)
    } else if host.ends_with("youtube.com") {
        let segments: Vec<&str> = url.path_segments()?.collect();
        match segments.as_slice() {
            ["watch", ..] | [] => url
                .query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned()),
            ["embed", id, ..] | ["shorts", id, ..] => Some((*id).to_string()),
            _ => None,
        }
    } else {
        None
    }?;

    let valid = candidate.len() == 11
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    valid.then_some(candidate)
}

/// Vimeo ids are the first all-digit path segment.
pub fn vimeo_video_id(raw: &str) -> Option<u64> {
    let url = parse_http_url(raw)?;
    let host = url.host_str()?.to_ascii_lowercase();
    if !host.ends_with("vimeo.com") {
        return None;
    }
    url.path_segments()?
        .find_map(|segment| segment.parse::<u64>().ok())
}
