//! PostgreSQL repository implementation.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbConn, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use blog_core::domain::{NewPost, Post, PostId};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// DDL for the posts table. `IF NOT EXISTS` keeps it idempotent.
const CREATE_POSTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS posts (
    id SERIAL PRIMARY KEY,
    title VARCHAR(200) NOT NULL CHECK (title <> ''),
    content TEXT NOT NULL CHECK (content <> ''),
    author VARCHAR(100) NOT NULL CHECK (author <> ''),
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    pub(crate) db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn store_err(err: DbErr) -> RepoError {
    match err {
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => RepoError::Connection(err.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn initialize_schema(&self) -> Result<(), RepoError> {
        self.db
            .execute_unprepared(CREATE_POSTS_TABLE)
            .await
            .map_err(store_err)?;

        tracing::info!("Posts table ready");
        Ok(())
    }

    async fn list_posts(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(store_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn get_post(&self, id: PostId) -> Result<Post, RepoError> {
        PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(store_err)?
            .map(Into::into)
            .ok_or(RepoError::NotFound)
    }

    async fn create_post(&self, new: NewPost) -> Result<PostId, RepoError> {
        let (title, content, author) = new.into_parts();
        let model = post::ActiveModel {
            title: Set(title),
            content: Set(content),
            author: Set(author),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(store_err)?;

        tracing::debug!(post_id = model.id, "Inserted post");
        Ok(model.id)
    }

    async fn update_post(&self, id: PostId, new: NewPost) -> Result<bool, RepoError> {
        let (title, content, author) = new.into_parts();
        let result = PostEntity::update_many()
            .col_expr(post::Column::Title, Expr::value(title))
            .col_expr(post::Column::Content, Expr::value(content))
            .col_expr(post::Column::Author, Expr::value(author))
            .filter(post::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(store_err)?;

        Ok(result.rows_affected > 0)
    }

    async fn delete_post(&self, id: PostId) -> Result<bool, RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(store_err)?;

        Ok(result.rows_affected > 0)
    }
}
