//! Wish service.
//!
//! Children add wishes for themselves; a parent green-lights them. Approval
//! does not look at the child's level. `purchased` has no operation here and
//! is only carried through storage.

use log::{debug, info};

use crate::domain::authorization::{authorize, Action};
use crate::domain::commands::wish::{AddWishCommand, ApproveWishCommand};
use crate::domain::error::DomainError;
use crate::domain::models::Wish;
use crate::domain::session::Session;
use crate::storage::EntityStore;

#[derive(Debug, Clone, Default)]
pub struct WishService;

impl WishService {
    pub fn new() -> Self {
        Self
    }

    /// Add a PENDING wish owned by the logged-in child
    pub fn add_wish(
        &self,
        session: &Session,
        store: &mut EntityStore,
        command: AddWishCommand,
    ) -> Result<Wish, DomainError> {
        let user = authorize(session, Action::AddWish)?;
        let wish = Wish::new(
            Wish::generate_id(),
            command.description,
            command.required_level,
            user.username(),
        )?;

        store.add_wish(wish.clone())?;
        info!(
            "{} wished for '{}' (level {})",
            user.username(),
            wish.description(),
            wish.required_level()
        );
        Ok(wish)
    }

    pub fn approve_wish(
        &self,
        session: &Session,
        store: &mut EntityStore,
        command: ApproveWishCommand,
    ) -> Result<Wish, DomainError> {
        let user = authorize(session, Action::ApproveWish)?;
        let wish = store
            .find_wish_by_id(&command.wish_id)
            .ok_or_else(|| DomainError::NotFound(command.wish_id.clone()))?;

        let updated = wish.approve()?;
        if updated == *wish {
            debug!("Wish {} already approved", updated.id());
            return Ok(updated);
        }

        store.replace_wish(updated.clone())?;
        info!("{} approved wish {} for {}", user.username(), updated.id(), updated.child_username());
        Ok(updated)
    }
}
