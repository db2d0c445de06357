use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder};

use models::post;

use crate::errors::ServiceError;
use crate::post::domain::PostView;
use crate::post::repository::PostRepository;

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmPostRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmPostRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl PostRepository for SeaOrmPostRepository {
    async fn list(&self) -> Result<Vec<PostView>, ServiceError> {
        let rows = post::Entity::find()
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(PostView::from).collect())
    }

    async fn list_page(&self, page_index: u64, per_page: u64) -> Result<(Vec<PostView>, u64), ServiceError> {
        let paginator = post::Entity::find()
            .order_by_asc(post::Column::Id)
            .paginate(&self.db, per_page);
        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page_index).await?;
        Ok((rows.into_iter().map(PostView::from).collect(), total))
    }

    async fn get(&self, id: i32) -> Result<Option<PostView>, ServiceError> {
        let found = post::Entity::find_by_id(id).one(&self.db).await?;
        Ok(found.map(PostView::from))
    }

    async fn create(&self, title: &str) -> Result<PostView, ServiceError> {
        let created = post::create(&self.db, title).await?;
        Ok(created.into())
    }

    async fn update_title(&self, id: i32, title: &str) -> Result<Option<PostView>, ServiceError> {
        let updated = post::set_title(&self.db, id, title).await?;
        Ok(updated.map(PostView::from))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = post::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
