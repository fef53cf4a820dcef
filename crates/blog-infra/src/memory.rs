//! In-memory post repository - used by tests and builds without `postgres`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use blog_core::domain::{NewPost, Post, PostId};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

struct Store {
    next_id: PostId,
    posts: BTreeMap<PostId, Post>,
}

/// In-memory post repository using a `BTreeMap` behind an async RwLock.
///
/// Ids come from a counter and are never reused, matching `SERIAL`.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                next_id: 1,
                posts: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn initialize_schema(&self) -> Result<(), RepoError> {
        Ok(())
    }

    async fn list_posts(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        let mut posts: Vec<Post> = store.posts.values().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(posts)
    }

    async fn get_post(&self, id: PostId) -> Result<Post, RepoError> {
        let store = self.store.read().await;
        store.posts.get(&id).cloned().ok_or(RepoError::NotFound)
    }

    async fn create_post(&self, new: NewPost) -> Result<PostId, RepoError> {
        let mut store = self.store.write().await;
        let id = store.next_id;
        store.next_id += 1;

        let (title, content, author) = new.into_parts();
        store.posts.insert(
            id,
            Post {
                id,
                title,
                content,
                author,
                created_at: Utc::now().naive_utc(),
            },
        );

        Ok(id)
    }

    async fn update_post(&self, id: PostId, new: NewPost) -> Result<bool, RepoError> {
        let mut store = self.store.write().await;
        let Some(post) = store.posts.get_mut(&id) else {
            return Ok(false);
        };

        let (title, content, author) = new.into_parts();
        post.title = title;
        post.content = content;
        post.author = author;
        Ok(true)
    }

    async fn delete_post(&self, id: PostId) -> Result<bool, RepoError> {
        let mut store = self.store.write().await;
        Ok(store.posts.remove(&id).is_some())
    }
}
