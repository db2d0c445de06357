use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::post::{repo::seaorm::SeaOrmPostRepository, PostService};

pub type DbPostService = PostService<SeaOrmPostRepository>;

/// Shared handler state. The connection pool is the only shared resource;
/// nothing is cached between requests.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub posts: Arc<DbPostService>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmPostRepository::new(db.clone()));
        Self { db, posts: Arc::new(PostService::new(repo)) }
    }
}
