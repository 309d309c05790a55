use askama::Template;
use chrono::{DateTime, Utc};

use crate::{error::AppError, models::trip::Trip};

/// HTML confirmation email for a freshly created trip. Pure function of the
/// trip data; rendering has no side effects.
#[derive(Template)]
#[template(path = "email/trip_confirmation.html")]
pub struct TripConfirmationEmail {
    pub owner_name: String,
    pub destination: String,
    pub starts_at: String,
    pub ends_at: String,
    pub confirmation_url: String,
}

impl TripConfirmationEmail {
    pub fn new(trip: &Trip, owner_name: &str, base_api_url: &str) -> Self {
        Self {
            owner_name: owner_name.to_string(),
            destination: trip.destination.clone(),
            starts_at: long_date(trip.starts_at),
            ends_at: long_date(trip.ends_at),
            confirmation_url: format!("{base_api_url}/trips/{}/confirm", trip.id),
        }
    }

    pub fn subject(&self) -> String {
        format!(
            "Confirm your trip to {} on {}",
            self.destination, self.starts_at
        )
    }

    pub fn render_html(&self) -> Result<String, AppError> {
        self.render().map_err(|err| AppError::Other(err.into()))
    }
}

/// Long-form date, e.g. "Saturday, September 5, 2026".
pub fn long_date(ts: DateTime<Utc>) -> String {
    ts.format("%A, %B %-d, %Y").to_string()
}
