use crate::storage::Link;
use migration::entities::link;

/// Convert a Sea-ORM model into a Link
pub fn model_to_link(model: link::Model) -> Link {
    Link {
        id: model.id,
        name: model.name,
        target_url: model.target_url,
        password: model.password,
        visits: model.visits.max(0) as u64,
    }
}

/// Convert a Link into an ActiveModel for insert or update
///
/// On update, `password` and `visits` stay NotSet: the stored password is
/// immutable after creation and the visit counter only moves through the
/// atomic increment path.
pub fn link_to_active_model(link: &Link, is_new: bool) -> link::ActiveModel {
    use sea_orm::ActiveValue::*;

    link::ActiveModel {
        id: if is_new {
            Set(link.id.clone())
        } else {
            Unchanged(link.id.clone())
        },
        name: Set(link.name.clone()),
        target_url: Set(link.target_url.clone()),
        password: if is_new {
            Set(link.password.clone())
        } else {
            NotSet
        },
        visits: if is_new {
            Set(link.visits as i64)
        } else {
            NotSet
        },
    }
}
