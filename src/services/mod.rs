//! Service layer for business logic
//!
//! Identifier allocation and the link registry, shared by every interface
//! that fronts the store.

mod id_generator;
mod link_service;

pub use id_generator::{ID_ALPHABET, ID_LENGTH, IdGenerator, MAX_GENERATE_ATTEMPTS};
pub use link_service::{CreateLinkRequest, LinkService, UpdateLinkRequest};
