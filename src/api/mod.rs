//! HTTP services
//!
//! JSON link CRUD under `/api/links` and the redirect endpoint under
//! `/red/{id}`.

pub mod error_code;
pub mod helpers;
pub mod link_crud;
pub mod redirect;
pub mod types;

pub use link_crud::link_routes;
pub use redirect::{RedirectService, redirect_routes};
