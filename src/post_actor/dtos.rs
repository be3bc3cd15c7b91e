use serde::Deserialize;

/// Request body for a new post.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostCreate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author_id: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Store payload: the request plus the author's name, resolved by the client.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub post: PostCreate,
    pub author_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Request body for a comment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentCreate {
    pub content: Option<String>,
    pub author_id: Option<String>,
}
