//! Post CRUD handlers.

use actix_web::{HttpResponse, web};

use blog_core::DomainError;
use blog_core::domain::{NewPost, PostId};
use blog_shared::dto::{CreatedResponse, MessageResponse, PostRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Missing fields are validated exactly like empty ones.
fn validate(req: PostRequest) -> Result<NewPost, DomainError> {
    NewPost::new(
        req.title.unwrap_or_default(),
        req.content.unwrap_or_default(),
        req.author.unwrap_or_default(),
    )
}

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_posts().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get_post(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let new = validate(body.into_inner())?;
    let id = state.posts.create_post(new).await?;

    tracing::info!(post_id = id, "Post created");

    Ok(HttpResponse::Created().json(CreatedResponse {
        id,
        message: "Post created".to_string(),
    }))
}

/// PUT /api/posts/{id}
///
/// An unknown id is not an error: the update matches no row and still
/// answers 200.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let new = validate(body.into_inner())?;

    if state.posts.update_post(id, new).await? {
        tracing::info!(post_id = id, "Post updated");
    } else {
        tracing::debug!(post_id = id, "Update matched no post");
    }

    Ok(HttpResponse::Ok().json(MessageResponse::new("Post updated")))
}

/// DELETE /api/posts/{id}
///
/// Idempotent: deleting an unknown id answers 200.
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    if state.posts.delete_post(id).await? {
        tracing::info!(post_id = id, "Post deleted");
    } else {
        tracing::debug!(post_id = id, "Delete matched no post");
    }

    Ok(HttpResponse::Ok().json(MessageResponse::new("Post deleted")))
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};
    use serde_json::{Value, json};

    use crate::handlers::configure_routes;
    use crate::handlers::test_support::empty_state;

    macro_rules! init_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(empty_state())
                    .configure(configure_routes),
            )
            .await
        };
    }

    fn post_body(title: &str) -> Value {
        json!({ "title": title, "content": "Some content", "author": "Ada" })
    }

    #[actix_web::test]
    async fn test_create_then_get_round_trips() {
        let app = init_app!();

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({ "title": "Hello", "content": "First post", "author": "Ada" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        assert_eq!(created["message"], "Post created");
        let id = created["id"].as_i64().unwrap();

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let post: Value = test::read_body_json(resp).await;
        assert_eq!(post["id"], id);
        assert_eq!(post["title"], "Hello");
        assert_eq!(post["content"], "First post");
        assert_eq!(post["author"], "Ada");
        assert!(post["created_at"].is_string());
    }

    #[actix_web::test]
    async fn test_list_is_newest_first() {
        let app = init_app!();

        for title in ["P1", "P2"] {
            let req = test::TestRequest::post()
                .uri("/api/posts")
                .set_json(post_body(title))
                .to_request();
            assert_eq!(
                test::call_service(&app, req).await.status(),
                StatusCode::CREATED
            );
        }

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let posts: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        let titles: Vec<&str> = posts.iter().filter_map(|p| p["title"].as_str()).collect();
        assert_eq!(titles, vec!["P2", "P1"]);
    }

    #[actix_web::test]
    async fn test_list_empty_store_is_empty_array() {
        let app = init_app!();

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let posts: Vec<Value> = test::read_body_json(resp).await;
        assert!(posts.is_empty());
    }

    #[actix_web::test]
    async fn test_get_unknown_id_is_404() {
        let app = init_app!();

        let req = test::TestRequest::get().uri("/api/posts/999999").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Post not found");
    }

    #[actix_web::test]
    async fn test_non_integer_id_is_unmatched() {
        let app = init_app!();

        let req = test::TestRequest::get().uri("/api/posts/abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_create_missing_title_is_400_and_stores_nothing() {
        let app = init_app!();

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({ "content": "x", "author": "y" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Missing required fields");

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let posts: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert!(posts.is_empty());
    }

    #[actix_web::test]
    async fn test_create_empty_field_is_400() {
        let app = init_app!();

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({ "title": "t", "content": "", "author": "y" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_create_malformed_json_is_400() {
        let app = init_app!();

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_update_keeps_id_and_created_at() {
        let app = init_app!();

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(post_body("Before"))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let uri = format!("/api/posts/{}", created["id"]);

        let req = test::TestRequest::get().uri(&uri).to_request();
        let before: Value = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::put()
            .uri(&uri)
            .set_json(json!({ "title": "After", "content": "Edited", "author": "Grace" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Post updated");

        let req = test::TestRequest::get().uri(&uri).to_request();
        let after: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(after["id"], before["id"]);
        assert_eq!(after["created_at"], before["created_at"]);
        assert_eq!(after["title"], "After");
        assert_eq!(after["content"], "Edited");
        assert_eq!(after["author"], "Grace");
    }

    #[actix_web::test]
    async fn test_update_missing_fields_is_400() {
        let app = init_app!();

        let req = test::TestRequest::put()
            .uri("/api/posts/1")
            .set_json(json!({ "title": "only a title" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_update_unknown_id_still_succeeds() {
        let app = init_app!();

        let req = test::TestRequest::put()
            .uri("/api/posts/42")
            .set_json(post_body("ghost"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_delete_then_get_is_404_and_delete_is_idempotent() {
        let app = init_app!();

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(post_body("Doomed"))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let uri = format!("/api/posts/{}", created["id"]);

        for _ in 0..2 {
            let req = test::TestRequest::delete().uri(&uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["message"], "Post deleted");
        }

        let req = test::TestRequest::get().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
