use tracing::{debug, error, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Comment, Post, User};
use crate::error::{StoreError, StoreResult};
use crate::post_actor::{CommentCreate, NewPost, PostAction, PostActionResult, PostCreate, PostPatch};
use crate::query::matches_query;
use crate::validation::required;

use super::{reference_error, UserClient};

/// Client for interacting with the Post actor.
///
/// Posts and comments must name an existing author; the author is looked up
/// through the User actor and their display name copied onto the record.
#[derive(Clone)]
pub struct PostClient {
    inner: ResourceClient<Post>,
    user_client: UserClient,
}

impl_client_methods!(PostClient, Post {
    get: get_post,
    list: list_posts,
    update: update_post,
    delete: delete_post,
});

impl PostClient {
    pub fn new(inner: ResourceClient<Post>, user_client: UserClient) -> Self {
        Self { inner, user_client }
    }

    async fn resolve_author(&self, author_id: Option<String>) -> StoreResult<User> {
        let author_id = required("author_id", author_id)?;
        self.user_client
            .get_user(author_id.clone())
            .await
            .map_err(|e| reference_error("author_id", &author_id, e))
    }

    #[instrument(skip(self))]
    pub async fn create_post(&self, post: PostCreate) -> StoreResult<Post> {
        info!("Processing create_post request (Client Side)");

        let author = match self.resolve_author(post.author_id.clone()).await {
            Ok(author) => author,
            Err(e) => {
                error!(error = %e, "Author validation failed");
                return Err(e);
            }
        };
        info!(author_id = %author.id, "Author validation successful");

        let payload = NewPost {
            post: PostCreate {
                author_id: Some(author.id.clone()),
                ..post
            },
            author_name: author.display_name().to_string(),
        };
        self.inner.create(payload).await
    }

    /// Posts matching `q` (title, content or tags) and, when given, carrying `tag`.
    #[instrument(skip(self))]
    pub async fn search_posts(&self, q: Option<String>, tag: Option<String>) -> StoreResult<Vec<Post>> {
        debug!("Sending request");
        self.inner
            .query(move |post: &Post| {
                matches_query(post, q.as_deref()) && tag.as_deref().map_or(true, |t| post.has_tag(t.trim()))
            })
            .await
    }

    #[instrument(skip(self))]
    pub async fn record_view(&self, id: String) -> StoreResult<Post> {
        debug!("Sending request");
        match self.inner.perform_action(id, PostAction::RecordView).await? {
            PostActionResult::RecordView(post) => Ok(post),
            _ => Err(StoreError::ActorCommunication("Unexpected result".to_string())),
        }
    }

    #[instrument(skip(self))]
    pub async fn like_post(&self, id: String) -> StoreResult<Post> {
        debug!("Sending request");
        match self.inner.perform_action(id, PostAction::Like).await? {
            PostActionResult::Like(post) => Ok(post),
            _ => Err(StoreError::ActorCommunication("Unexpected result".to_string())),
        }
    }

    /// Appends a comment. The post must exist and the commenter must be a known user.
    #[instrument(skip(self))]
    pub async fn add_comment(&self, id: String, comment: CommentCreate) -> StoreResult<Comment> {
        debug!("Sending request");
        let author = self.resolve_author(comment.author_id).await?;
        let action = PostAction::AddComment {
            content: comment.content.unwrap_or_default(),
            author_id: author.id.clone(),
            author_name: author.display_name().to_string(),
        };
        match self.inner.perform_action(id, action).await? {
            PostActionResult::AddComment(comment) => Ok(comment),
            _ => Err(StoreError::ActorCommunication("Unexpected result".to_string())),
        }
    }
}
