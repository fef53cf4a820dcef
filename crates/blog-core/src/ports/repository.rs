use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostId};
use crate::error::RepoError;

/// Post repository - every operation runs exactly one statement.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Create the posts table if it does not exist. Safe to call on every start.
    async fn initialize_schema(&self) -> Result<(), RepoError>;

    /// All posts, newest first. Empty when the store holds none.
    async fn list_posts(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by id, or `RepoError::NotFound`.
    async fn get_post(&self, id: PostId) -> Result<Post, RepoError>;

    /// Insert a post and return the id the store assigned to it.
    async fn create_post(&self, post: NewPost) -> Result<PostId, RepoError>;

    /// Overwrite title, content and author.
    ///
    /// Returns `false` when no row matched; that is still a success.
    async fn update_post(&self, id: PostId, post: NewPost) -> Result<bool, RepoError>;

    /// Remove a post. Returns `false` when no row matched; still a success.
    async fn delete_post(&self, id: PostId) -> Result<bool, RepoError>;
}
