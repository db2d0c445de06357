use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use service::pagination::Pagination;
use service::post::domain::{PostInput, PostList, PostView};
use tracing::info;

use crate::{errors::ApiError, state::ServerState};

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// 1-based page number
    pub page: Option<u32>,
    /// Page size, clamped to 1..=100
    pub per_page: Option<u32>,
}

/// Ids that are not integers cannot name a post.
fn post_id(id: Result<Path<i32>, PathRejection>) -> Result<i32, ApiError> {
    match id {
        Ok(Path(id)) => Ok(id),
        Err(_) => Err(ApiError::NotFound("post not found".into())),
    }
}

#[utoipa::path(
    get, path = "/api/posts", tag = "posts",
    params(ListQuery),
    responses(
        (status = 200, description = "List OK", body = crate::openapi::PostListDoc),
        (status = 400, description = "Malformed query")
    )
)]
pub async fn index(
    State(state): State<ServerState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<PostList>, ApiError> {
    let Query(q) = query.map_err(|r| ApiError::Rejected(r.status(), r.body_text()))?;
    let list = state.posts.list(Pagination::from_query(q.page, q.per_page)).await?;
    info!(count = list.data.len(), paginated = list.meta.is_some(), "list posts");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/api/posts", tag = "posts",
    request_body = crate::openapi::PostInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::PostViewDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ValidationErrorDoc)
    )
)]
pub async fn store(
    State(state): State<ServerState>,
    payload: Result<Json<PostInput>, JsonRejection>,
) -> Result<(StatusCode, Json<PostView>), ApiError> {
    let Json(input) = payload?;
    let created = state.posts.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/api/posts/{id}", tag = "posts",
    params(("id" = i32, Path, description = "Post ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::PostViewDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn show(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<PostView>, ApiError> {
    let id = post_id(id)?;
    Ok(Json(state.posts.get(id).await?))
}

#[utoipa::path(
    put, path = "/api/posts/{id}", tag = "posts",
    params(("id" = i32, Path, description = "Post ID")),
    request_body = crate::openapi::PostInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::PostViewDoc),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation Error", body = crate::openapi::ValidationErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<PostInput>, JsonRejection>,
) -> Result<Json<PostView>, ApiError> {
    let id = post_id(id)?;
    let Json(input) = payload?;
    Ok(Json(state.posts.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/api/posts/{id}", tag = "posts",
    params(("id" = i32, Path, description = "Post ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn destroy(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = post_id(id)?;
    state.posts.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
