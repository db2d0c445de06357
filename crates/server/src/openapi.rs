use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct PostInputDoc {
    /// Required, non-empty after trimming, at most 255 characters
    pub title: String,
}

#[derive(ToSchema)]
pub struct PostViewDoc {
    pub id: i32,
    pub title: String,
    /// RFC 3339
    pub created_at: String,
    /// RFC 3339
    pub updated_at: String,
}

#[derive(ToSchema)]
pub struct PageMetaDoc {
    pub current_page: u64,
    pub per_page: u64,
    pub total: u64,
    pub last_page: u64,
}

#[derive(ToSchema)]
pub struct PostListDoc {
    pub data: Vec<PostViewDoc>,
    /// Present only when `page` or `per_page` was given
    pub meta: Option<PageMetaDoc>,
}

#[derive(ToSchema)]
pub struct ValidationErrorDoc {
    pub message: String,
    /// Field name to messages, e.g. `{"title": ["The title field is required."]}`
    #[schema(value_type = Object)]
    pub errors: std::collections::BTreeMap<String, Vec<String>>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::posts::index,
        crate::routes::posts::store,
        crate::routes::posts::show,
        crate::routes::posts::update,
        crate::routes::posts::destroy,
    ),
    components(
        schemas(
            HealthResponse,
            PostInputDoc,
            PostViewDoc,
            PageMetaDoc,
            PostListDoc,
            ValidationErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "posts")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_post_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        assert!(paths.contains(&"/api/posts"));
        assert!(paths.contains(&"/api/posts/{id}"));
        assert!(paths.contains(&"/health"));
    }
}
