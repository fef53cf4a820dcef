//! Page handlers. Backend failures never reach the browser as errors:
//! they degrade the page or are logged and followed by the usual redirect.

use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, web};
use maud::Markup;

use blog_core::domain::PostId;
use blog_shared::dto::PostRequest;

use crate::client::ClientError;
use crate::state::GatewayState;
use crate::views;

fn page(status: StatusCode, markup: Markup) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(header::ContentType::html())
        .body(markup.into_string())
}

fn redirect_home() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

/// GET /
pub async fn index(state: web::Data<GatewayState>) -> HttpResponse {
    let posts = state.api.list_posts().await.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Could not load posts, rendering empty list");
        Vec::new()
    });

    page(StatusCode::OK, views::index(&posts))
}

/// GET /create
pub async fn create_form() -> HttpResponse {
    page(StatusCode::OK, views::create_form())
}

/// POST /create
///
/// Redirects home whatever the API answers.
pub async fn create_submit(
    state: web::Data<GatewayState>,
    form: web::Form<PostRequest>,
) -> HttpResponse {
    match state.api.create_post(&form).await {
        Ok(created) => tracing::info!(post_id = created.id, "Post created via form"),
        Err(e) => tracing::warn!(error = %e, "Create request failed"),
    }

    redirect_home()
}

/// GET /edit/{id}
pub async fn edit_form(state: web::Data<GatewayState>, path: web::Path<PostId>) -> HttpResponse {
    let id = path.into_inner();
    match state.api.get_post(id).await {
        Ok(post) => page(StatusCode::OK, views::edit_form(&post)),
        Err(ClientError::NotFound) => page(StatusCode::NOT_FOUND, views::not_found(id)),
        Err(e) => {
            tracing::warn!(post_id = id, error = %e, "Could not load post for editing");
            page(StatusCode::BAD_GATEWAY, views::backend_unavailable())
        }
    }
}

/// POST /edit/{id}
///
/// Redirects home whatever the API answers.
pub async fn edit_submit(
    state: web::Data<GatewayState>,
    path: web::Path<PostId>,
    form: web::Form<PostRequest>,
) -> HttpResponse {
    let id = path.into_inner();
    if let Err(e) = state.api.update_post(id, &form).await {
        tracing::warn!(post_id = id, error = %e, "Update request failed");
    }

    redirect_home()
}

/// GET /delete/{id} - confirmation only, nothing is deleted.
pub async fn delete_confirm(path: web::Path<PostId>) -> HttpResponse {
    page(StatusCode::OK, views::confirm_delete(path.into_inner()))
}

/// POST /delete/{id}
pub async fn delete_submit(state: web::Data<GatewayState>, path: web::Path<PostId>) -> HttpResponse {
    let id = path.into_inner();
    match state.api.delete_post(id).await {
        Ok(()) => tracing::info!(post_id = id, "Post deleted via form"),
        Err(e) => tracing::warn!(post_id = id, error = %e, "Delete request failed"),
    }

    redirect_home()
}
