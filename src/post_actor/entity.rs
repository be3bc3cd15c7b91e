use chrono::{DateTime, Utc};

use crate::actor_framework::{uuid_id, Entity};
use crate::domain::{normalize_tags, Comment, Post, PostStatus};
use crate::error::{StoreError, StoreResult};
use crate::validation::{non_blank, required};

use super::actions::{PostAction, PostActionResult};
use super::dtos::{NewPost, PostPatch};

impl Entity for Post {
    type CreatePayload = NewPost;
    type Patch = PostPatch;
    type Action = PostAction;
    type ActionResult = PostActionResult;

    const KIND: &'static str = "Post";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, created_at: DateTime<Utc>, payload: NewPost) -> StoreResult<Self> {
        let NewPost { post, author_name } = payload;
        Ok(Self {
            id,
            title: required("title", post.title)?,
            content: required("content", post.content)?,
            author_id: required("author_id", post.author_id)?,
            author_name,
            tags: normalize_tags(post.tags.unwrap_or_default()),
            status: PostStatus::Published,
            views: 0,
            likes: 0,
            comments: Vec::new(),
            created_at,
            updated_at: created_at,
        })
    }

    /// `updated_at` moves only when some field actually changed.
    fn on_update(&mut self, patch: PostPatch) -> StoreResult<()> {
        let mut changed = false;
        if let Some(title) = non_blank(patch.title) {
            changed |= title != self.title;
            self.title = title;
        }
        if let Some(content) = non_blank(patch.content) {
            changed |= content != self.content;
            self.content = content;
        }
        let tags = normalize_tags(patch.tags.unwrap_or_default());
        if !tags.is_empty() {
            changed |= tags != self.tags;
            self.tags = tags;
        }
        if changed {
            self.updated_at = Utc::now();
        }
        Ok(())
    }

    fn handle_action(&mut self, action: PostAction) -> StoreResult<PostActionResult> {
        match action {
            PostAction::RecordView => {
                self.views = self.views.saturating_add(1);
                Ok(PostActionResult::RecordView(self.clone()))
            }
            PostAction::Like => {
                self.likes = self.likes.saturating_add(1);
                Ok(PostActionResult::Like(self.clone()))
            }
            PostAction::AddComment {
                content,
                author_id,
                author_name,
            } => {
                let content = content.trim();
                if content.is_empty() {
                    return Err(StoreError::validation("comment cannot be empty"));
                }
                let comment = Comment {
                    id: uuid_id(),
                    content: content.to_string(),
                    author_id,
                    author_name,
                    created_at: Utc::now(),
                };
                self.comments.push(comment.clone());
                Ok(PostActionResult::AddComment(comment))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post_actor::PostCreate;

    fn draft() -> NewPost {
        NewPost {
            post: PostCreate {
                title: Some("Getting Started".into()),
                content: Some("Body".into()),
                author_id: Some("u1".into()),
                tags: Some(vec!["rust".into(), " rust".into(), "web".into()]),
            },
            author_name: "admin".into(),
        }
    }

    #[test]
    fn create_starts_counters_at_zero_and_normalizes_tags() {
        let post = Post::from_create("p1".into(), Utc::now(), draft()).unwrap();
        assert_eq!((post.views, post.likes), (0, 0));
        assert_eq!(post.tags, vec!["rust", "web"]);
        assert_eq!(post.updated_at, post.created_at);
        assert!(post.comments.is_empty());
    }

    #[test]
    fn create_requires_title_and_content() {
        let mut payload = draft();
        payload.post.content = Some("".into());
        let err = Post::from_create("p1".into(), Utc::now(), payload).unwrap_err();
        assert_eq!(err, StoreError::Validation("content is required".into()));
    }

    #[test]
    fn empty_patch_keeps_updated_at() {
        let mut post = Post::from_create("p1".into(), Utc::now(), draft()).unwrap();
        let before = post.clone();
        post.on_update(PostPatch {
            tags: Some(vec!["  ".into()]),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(post, before);
    }

    #[test]
    fn counters_only_increase() {
        let mut post = Post::from_create("p1".into(), Utc::now(), draft()).unwrap();
        post.handle_action(PostAction::RecordView).unwrap();
        post.handle_action(PostAction::RecordView).unwrap();
        post.handle_action(PostAction::Like).unwrap();
        assert_eq!((post.views, post.likes), (2, 1));
    }

    #[test]
    fn comments_append_in_order_and_reject_blank() {
        let mut post = Post::from_create("p1".into(), Utc::now(), draft()).unwrap();
        for text in ["first", "second"] {
            post.handle_action(PostAction::AddComment {
                content: text.into(),
                author_id: "u2".into(),
                author_name: "john_doe".into(),
            })
            .unwrap();
        }
        let texts: Vec<&str> = post.comments.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);

        let err = post
            .handle_action(PostAction::AddComment {
                content: "   ".into(),
                author_id: "u2".into(),
                author_name: "john_doe".into(),
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(post.comments.len(), 2);
    }
}
