//! Redirect endpoint
//!
//! `GET /red/{id}` dereferences a short identifier: the visit counter is
//! incremented and the client is sent a 302 to the target URL.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use tracing::{debug, instrument};

use crate::errors::RedlinkError;
use crate::services::LinkService;

use super::helpers::error_from_redlink;

pub struct RedirectService {}

impl RedirectService {
    #[instrument(skip(service), fields(id = %path))]
    pub async fn handle_redirect(
        path: web::Path<String>,
        service: web::Data<Arc<LinkService>>,
    ) -> impl Responder {
        let id = path.into_inner();

        match service.redirect_and_increment(&id).await {
            Ok(target) => HttpResponse::Found()
                .insert_header(("Location", target))
                .finish(),
            Err(RedlinkError::NotFound(_)) => {
                debug!("Redirect link not found: {}", id);
                HttpResponse::build(StatusCode::NOT_FOUND)
                    .insert_header(("Content-Type", "text/html; charset=utf-8"))
                    .body("Not Found")
            }
            Err(e) => error_from_redlink(&e),
        }
    }
}

/// Register the redirect route
pub fn redirect_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/red/{id}",
        web::get().to(RedirectService::handle_redirect),
    )
    .route(
        "/red/{id}",
        web::head().to(RedirectService::handle_redirect),
    );
}
