use uuid::Uuid;

use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::PortalError;

// ── GetProfile ───────────────────────────────────────────────────────────────

pub struct GetProfileUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> GetProfileUseCase<U> {
    pub async fn execute(&self, user_id: Uuid) -> Result<User, PortalError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(PortalError::UserNotFound)
    }
}

// ── UpdateProfile ────────────────────────────────────────────────────────────

pub struct UpdateProfileInput {
    pub full_name: Option<String>,
    pub department: Option<String>,
}

pub struct UpdateProfileUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> UpdateProfileUseCase<U> {
    /// Update mutable profile fields. Email, role, and the password hash are
    /// not reachable from this path.
    pub async fn execute(&self, user_id: Uuid, input: UpdateProfileInput) -> Result<User, PortalError> {
        if input.full_name.is_none() && input.department.is_none() {
            return Err(PortalError::MissingFields);
        }
        if let Some(ref full_name) = input.full_name {
            if full_name.trim().is_empty() {
                return Err(PortalError::MissingFields);
            }
        }

        self.users
            .update_profile(user_id, input.full_name.as_deref(), input.department.as_deref())
            .await?
            .ok_or(PortalError::UserNotFound)
    }
}
