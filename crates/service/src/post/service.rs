use std::sync::Arc;

use models::post::validate_title;
use tracing::{info, instrument};

use super::domain::{PostInput, PostList, PostView};
use super::repository::PostRepository;
use crate::errors::ServiceError;
use crate::pagination::Pagination;

const ENTITY: &str = "post";

/// Post business service independent of web framework.
///
/// Input is validated here, before the repository sees it, so an invalid
/// request never mutates the store.
pub struct PostService<R: PostRepository> {
    repo: Arc<R>,
}

impl<R: PostRepository> PostService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// All posts, or one page of them when `page` is given.
    pub async fn list(&self, page: Option<Pagination>) -> Result<PostList, ServiceError> {
        match page {
            None => {
                let data = self.repo.list().await?;
                Ok(PostList { data, meta: None })
            }
            Some(p) => {
                let (idx, per_page) = p.normalize();
                let (data, total) = self.repo.list_page(idx, per_page).await?;
                Ok(PostList { data, meta: Some(p.meta(total)) })
            }
        }
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: PostInput) -> Result<PostView, ServiceError> {
        let title = validate_title(input.title_str()?)?;
        let created = self.repo.create(&title).await?;
        info!(post_id = created.id, "post_created");
        Ok(created)
    }

    pub async fn get(&self, id: i32) -> Result<PostView, ServiceError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))
    }

    /// Missing ids win over invalid input: the post is resolved first.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: PostInput) -> Result<PostView, ServiceError> {
        self.get(id).await?;
        let title = validate_title(input.title_str()?)?;
        let updated = self
            .repo
            .update_title(id, &title)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
        info!(post_id = id, "post_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found(ENTITY, id));
        }
        info!(post_id = id, "post_deleted");
        Ok(())
    }
}
