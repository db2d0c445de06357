use async_trait::async_trait;

use super::domain::PostView;
use crate::errors::ServiceError;

/// Repository abstraction for post persistence. Titles reaching it are
/// already validated.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Every post, ordered by id.
    async fn list(&self) -> Result<Vec<PostView>, ServiceError>;
    /// One page ordered by id, plus the total number of posts.
    async fn list_page(&self, page_index: u64, per_page: u64) -> Result<(Vec<PostView>, u64), ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<PostView>, ServiceError>;
    async fn create(&self, title: &str) -> Result<PostView, ServiceError>;
    /// `Ok(None)` when no post has this id.
    async fn update_title(&self, id: i32, title: &str) -> Result<Option<PostView>, ServiceError>;
    /// `Ok(false)` when no post has this id.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// In-memory repository for service unit tests
#[cfg(test)]
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockPostRepository {
        posts: Mutex<BTreeMap<i32, PostView>>,
        last_id: Mutex<i32>,
    }

    #[async_trait]
    impl PostRepository for MockPostRepository {
        async fn list(&self) -> Result<Vec<PostView>, ServiceError> {
            let posts = self.posts.lock().unwrap();
            Ok(posts.values().cloned().collect())
        }

        async fn list_page(&self, page_index: u64, per_page: u64) -> Result<(Vec<PostView>, u64), ServiceError> {
            let posts = self.posts.lock().unwrap();
            let page = posts
                .values()
                .skip((page_index * per_page) as usize)
                .take(per_page as usize)
                .cloned()
                .collect();
            Ok((page, posts.len() as u64))
        }

        async fn get(&self, id: i32) -> Result<Option<PostView>, ServiceError> {
            let posts = self.posts.lock().unwrap();
            Ok(posts.get(&id).cloned())
        }

        async fn create(&self, title: &str) -> Result<PostView, ServiceError> {
            let mut last_id = self.last_id.lock().unwrap();
            *last_id += 1;
            let now = Utc::now().into();
            let post = PostView { id: *last_id, title: title.to_string(), created_at: now, updated_at: now };
            self.posts.lock().unwrap().insert(post.id, post.clone());
            Ok(post)
        }

        async fn update_title(&self, id: i32, title: &str) -> Result<Option<PostView>, ServiceError> {
            let mut posts = self.posts.lock().unwrap();
            Ok(posts.get_mut(&id).map(|p| {
                p.title = title.to_string();
                p.updated_at = Utc::now().into();
                p.clone()
            }))
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            let mut posts = self.posts.lock().unwrap();
            Ok(posts.remove(&id).is_some())
        }
    }
}
