use std::collections::HashSet;

use anyhow::{anyhow, Result};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::comment::Comment;
use crate::infra::store::StoreHandle;

/// Threaded discussion under a pulse: a flat, parent-referencing comment
/// list plus cascade deletion that never leaves orphaned replies.
#[derive(Clone)]
pub struct CommentService {
    store: StoreHandle,
}

impl CommentService {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    /// Appends a comment and bumps the pulse's comment count. Empty text
    /// (after trimming) is silently ignored, matching the input form.
    pub fn add_comment(
        &self,
        post_id: Uuid,
        author_id: Uuid,
        text: &str,
        parent_id: Option<Uuid>,
    ) -> Result<Option<Comment>> {
        let text = text.trim().to_string();
        if text.is_empty() {
            return Ok(None);
        }

        self.store.with_mut(|store| {
            let post = store
                .post_mut(post_id)
                .ok_or_else(|| anyhow!("post not found"))?;

            if let Some(parent_id) = parent_id {
                if !post.comments.iter().any(|c| c.id == parent_id) {
                    return Err(anyhow!("parent comment not found"));
                }
            }

            let comment = Comment {
                id: Uuid::new_v4(),
                author_id,
                text,
                created_at: OffsetDateTime::now_utc(),
                edited: false,
                parent_id,
            };
            post.comments.push(comment.clone());
            post.comment_count += 1;
            Ok(Some(comment))
        })?
    }

    /// Rewrites a comment's text and timestamp, marking it edited. Empty
    /// text is ignored; returns whether anything changed.
    pub fn edit_comment(&self, post_id: Uuid, comment_id: Uuid, new_text: &str) -> Result<bool> {
        let new_text = new_text.trim().to_string();
        if new_text.is_empty() {
            return Ok(false);
        }

        self.store.with_mut(|store| {
            let Some(post) = store.post_mut(post_id) else {
                return false;
            };
            let Some(comment) = post.comments.iter_mut().find(|c| c.id == comment_id) else {
                return false;
            };
            comment.text = new_text;
            comment.created_at = OffsetDateTime::now_utc();
            comment.edited = true;
            true
        })
    }

    /// Removes a comment and every reply whose parent chain reaches it,
    /// returning the number of comments removed (0 when absent).
    ///
    /// The removal set is the fixed point of "parent is already doomed":
    /// keep scanning until a pass adds nothing new.
    pub fn delete_comment(&self, post_id: Uuid, comment_id: Uuid) -> Result<usize> {
        self.store.with_mut(|store| {
            let Some(post) = store.post_mut(post_id) else {
                return 0;
            };
            if !post.comments.iter().any(|c| c.id == comment_id) {
                return 0;
            }

            let mut doomed: HashSet<Uuid> = HashSet::new();
            doomed.insert(comment_id);
            loop {
                let before = doomed.len();
                for comment in &post.comments {
                    if let Some(parent_id) = comment.parent_id {
                        if doomed.contains(&parent_id) {
                            doomed.insert(comment.id);
                        }
                    }
                }
                if doomed.len() == before {
                    break;
                }
            }

            post.comments.retain(|c| !doomed.contains(&c.id));
            post.comment_count -= doomed.len();
            doomed.len()
        })
    }
}

/// Top-level comments in insertion order; the roots of the reply tree.
pub fn top_level(comments: &[Comment]) -> Vec<&Comment> {
    comments.iter().filter(|c| c.parent_id.is_none()).collect()
}

/// Direct replies to `parent_id` in insertion order. The presentation
/// layer recurses through this to render threads of unbounded depth.
pub fn replies(comments: &[Comment], parent_id: Uuid) -> Vec<&Comment> {
    comments
        .iter()
        .filter(|c| c.parent_id == Some(parent_id))
        .collect()
}
