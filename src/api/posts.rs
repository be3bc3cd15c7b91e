use axum::extract::State;
use axum::routing::{get, post};
use axum::Router;

use super::{ApiJson, ApiPath, ApiResult, AppState, Envelope, Reply, SearchParams};
use crate::domain::{Comment, Post};
use crate::post_actor::{CommentCreate, PostCreate, PostPatch};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/posts", get(list_posts).post(create_post))
        .route("/api/posts/{id}", get(get_post).put(update_post).delete(delete_post))
        .route("/api/posts/{id}/view", post(view_post))
        .route("/api/posts/{id}/like", post(like_post))
        .route("/api/posts/{id}/comments", post(add_comment))
}

pub async fn list_posts(State(state): State<AppState>, params: SearchParams) -> ApiResult<Vec<Post>> {
    let tag = params.tag.clone().filter(|t| !t.trim().is_empty());
    let posts = state.posts.search_posts(params.term(), tag).await?;
    let total = posts.len();
    Ok(Reply::ok(
        Envelope::data("posts", posts)
            .with_total(total)
            .with_query(params.echo()),
    ))
}

pub async fn get_post(State(state): State<AppState>, ApiPath(id): ApiPath<String>) -> ApiResult<Post> {
    let post = state.posts.get_post(id).await?;
    Ok(Reply::ok(Envelope::data("post", post)))
}

pub async fn create_post(State(state): State<AppState>, ApiJson(body): ApiJson<PostCreate>) -> ApiResult<Post> {
    let post = state.posts.create_post(body).await?;
    Ok(Reply::created(
        Envelope::data("post", post).with_message("Post created successfully"),
    ))
}

pub async fn update_post(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(patch): ApiJson<PostPatch>,
) -> ApiResult<Post> {
    let post = state.posts.update_post(id, patch).await?;
    Ok(Reply::ok(
        Envelope::data("post", post).with_message("Post updated successfully"),
    ))
}

pub async fn delete_post(State(state): State<AppState>, ApiPath(id): ApiPath<String>) -> ApiResult<()> {
    state.posts.delete_post(id).await?;
    Ok(Reply::ok(Envelope::message("Post deleted successfully")))
}

pub async fn view_post(State(state): State<AppState>, ApiPath(id): ApiPath<String>) -> ApiResult<Post> {
    let post = state.posts.record_view(id).await?;
    Ok(Reply::ok(Envelope::data("post", post)))
}

pub async fn like_post(State(state): State<AppState>, ApiPath(id): ApiPath<String>) -> ApiResult<Post> {
    let post = state.posts.like_post(id).await?;
    Ok(Reply::ok(Envelope::data("post", post).with_message("Post liked")))
}

pub async fn add_comment(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(body): ApiJson<CommentCreate>,
) -> ApiResult<Comment> {
    let comment = state.posts.add_comment(id, body).await?;
    Ok(Reply::created(
        Envelope::data("comment", comment).with_message("Comment added successfully"),
    ))
}
