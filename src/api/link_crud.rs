//! Link CRUD endpoints

use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Responder, Result as ActixResult, web};
use tracing::{info, trace, warn};

use crate::config::get_config;
use crate::services::{CreateLinkRequest, LinkService, UpdateLinkRequest};

use super::helpers::{error_from_redlink, success_response};
use super::types::{ApiResponse, DeleteQuery, LinkResponse, LookupQuery, PatchLink, PostNewLink};

fn link_view(link: &crate::storage::Link) -> LinkResponse {
    LinkResponse::from_link(link, &get_config().app.base_url)
}

/// POST /api/links
pub async fn post_link(
    body: web::Json<PostNewLink>,
    service: web::Data<Arc<LinkService>>,
) -> ActixResult<impl Responder> {
    let body = body.into_inner();
    trace!("API: create link request - name: {}", body.name);

    if let Err(e) = body.validate() {
        warn!("API: create link rejected - {}", e);
        return Ok(error_from_redlink(&e));
    }

    let result = service
        .create_link(CreateLinkRequest {
            name: body.name,
            target_url: body.target_url,
            password: body.password,
        })
        .await;

    match result {
        Ok(link) => {
            info!("API: created link '{}'", link.id);
            Ok(HttpResponse::Created()
                .append_header(("Location", format!("/api/links/{}", link.id)))
                .append_header(("Content-Type", "application/json; charset=utf-8"))
                .json(ApiResponse {
                    code: 0,
                    message: "Created".to_string(),
                    data: Some(link_view(&link)),
                }))
        }
        Err(e) => Ok(error_from_redlink(&e)),
    }
}

/// GET /api/links/{id}
pub async fn get_link(
    path: web::Path<String>,
    service: web::Data<Arc<LinkService>>,
) -> ActixResult<impl Responder> {
    let id = path.into_inner();

    match service.get_link(&id).await {
        Ok(link) => Ok(success_response(link_view(&link))),
        Err(e) => Ok(error_from_redlink(&e)),
    }
}

/// GET /api/links?name=...
pub async fn lookup_link(
    query: web::Query<LookupQuery>,
    service: web::Data<Arc<LinkService>>,
) -> ActixResult<impl Responder> {
    match service.get_link_by_name(&query.name).await {
        Ok(link) => Ok(success_response(link_view(&link))),
        Err(e) => Ok(error_from_redlink(&e)),
    }
}

/// PATCH /api/links/{id}
pub async fn patch_link(
    path: web::Path<String>,
    body: web::Json<PatchLink>,
    service: web::Data<Arc<LinkService>>,
) -> ActixResult<impl Responder> {
    let id = path.into_inner();
    let body = body.into_inner();

    if let Err(e) = body.validate() {
        return Ok(error_from_redlink(&e));
    }

    let result = service
        .update_link(
            &id,
            UpdateLinkRequest {
                name: body.name,
                target_url: body.target_url,
                password: body.password,
            },
        )
        .await;

    match result {
        Ok(_) => Ok(HttpResponse::NoContent().finish()),
        Err(e) => Ok(error_from_redlink(&e)),
    }
}

/// DELETE /api/links/{id}
///
/// The credential can come from a `pass` header or a `password` query
/// parameter; the header wins when both are present.
pub async fn delete_link(
    req: HttpRequest,
    path: web::Path<String>,
    query: web::Query<DeleteQuery>,
    service: web::Data<Arc<LinkService>>,
) -> ActixResult<impl Responder> {
    let id = path.into_inner();

    let header_password = req
        .headers()
        .get("pass")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let password = header_password.or_else(|| query.password.clone());

    match service.delete_link(&id, password.as_deref()).await {
        Ok(()) => Ok(HttpResponse::NoContent().finish()),
        Err(e) => Ok(error_from_redlink(&e)),
    }
}

/// Register link CRUD routes
pub fn link_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/links")
            .route("", web::post().to(post_link))
            .route("", web::get().to(lookup_link))
            .route("/{id}", web::get().to(get_link))
            .route("/{id}", web::patch().to(patch_link))
            .route("/{id}", web::delete().to(delete_link)),
    );
}
