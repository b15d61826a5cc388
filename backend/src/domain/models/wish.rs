use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::check_text;

pub const MIN_REQUIRED_LEVEL: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishState {
    Pending,
    Approved,
    Purchased,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wish {
    id: String,
    description: String,
    required_level: u32,
    approved: bool,
    purchased: bool,
    child_username: String,
}

impl Wish {
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Build a new wish in the PENDING state
    pub fn new(
        id: String,
        description: String,
        required_level: i64,
        child_username: &str,
    ) -> Result<Self, DomainError> {
        Self::restore(id, description, required_level, false, false, child_username)
    }

    /// Rebuild a wish from stored fields, enforcing every entity invariant
    pub fn restore(
        id: String,
        description: String,
        required_level: i64,
        approved: bool,
        purchased: bool,
        child_username: &str,
    ) -> Result<Self, DomainError> {
        if id.trim().is_empty() {
            return Err(DomainError::invalid("id", "cannot be empty"));
        }
        let child_username = child_username.trim();
        if child_username.is_empty() {
            return Err(DomainError::invalid("child_username", "cannot be empty"));
        }
        check_text("id", &id)?;
        check_text("description", &description)?;
        check_text("child_username", child_username)?;
        if required_level < MIN_REQUIRED_LEVEL as i64 {
            return Err(DomainError::invalid("required_level", "must be at least 1"));
        }
        let required_level = u32::try_from(required_level)
            .map_err(|_| DomainError::invalid("required_level", "is too large"))?;
        if purchased && !approved {
            return Err(DomainError::invalid("purchased", "a purchased wish must be approved"));
        }

        Ok(Self {
            id,
            description,
            required_level,
            approved,
            purchased,
            child_username: child_username.to_string(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn required_level(&self) -> u32 {
        self.required_level
    }

    pub fn is_approved(&self) -> bool {
        self.approved
    }

    pub fn is_purchased(&self) -> bool {
        self.purchased
    }

    pub fn child_username(&self) -> &str {
        &self.child_username
    }

    pub fn state(&self) -> WishState {
        match (self.approved, self.purchased) {
            (_, true) => WishState::Purchased,
            (true, false) => WishState::Approved,
            (false, false) => WishState::Pending,
        }
    }

    /// PENDING → APPROVED. Approving an APPROVED wish changes nothing.
    pub fn approve(&self) -> Result<Wish, DomainError> {
        match self.state() {
            WishState::Pending => Ok(Wish {
                approved: true,
                ..self.clone()
            }),
            WishState::Approved => Ok(self.clone()),
            WishState::Purchased => Err(DomainError::AlreadyPurchased(self.id.clone())),
        }
    }
}
