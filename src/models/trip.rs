use chrono::{DateTime, Utc};
use lettre::Address;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::AppError;

/// Minimum length for a trip destination, matching the creation schema.
pub const MIN_DESTINATION_LEN: usize = 4;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Trip {
    pub id: Uuid,
    pub destination: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// A validated trip-creation request on its way into the store.
#[derive(Debug, Clone)]
pub struct TripDraft {
    pub destination: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub owner_name: String,
    pub owner_email: String,
    pub emails_to_invite: Vec<String>,
}

impl TripDraft {
    /// Fail-fast validation: request shape first, then the start date,
    /// then the end date. The first violation wins.
    pub fn validate(&self, now: DateTime<Utc>) -> Result<(), AppError> {
        if self.destination.trim().len() < MIN_DESTINATION_LEN {
            return Err(AppError::Validation(format!(
                "destination must be at least {MIN_DESTINATION_LEN} characters"
            )));
        }
        if self.owner_name.trim().is_empty() {
            return Err(AppError::Validation("owner_name must not be empty".into()));
        }
        require_email(&self.owner_email)?;
        for email in &self.emails_to_invite {
            require_email(email)?;
        }

        if self.starts_at < now {
            return Err(AppError::InvalidStartDate);
        }
        if self.ends_at < self.starts_at {
            return Err(AppError::InvalidEndDate);
        }

        Ok(())
    }
}

fn require_email(value: &str) -> Result<(), AppError> {
    value
        .parse::<Address>()
        .map(|_| ())
        .map_err(|_| AppError::Validation(format!("invalid email address: {value}")))
}
