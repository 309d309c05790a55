use axum::{extract::State, routing::post, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    error::AppError, models::trip::TripDraft, notify::TripConfirmationEmail, state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/trips", post(create_trip))
}

#[derive(Deserialize)]
struct CreateTripRequest {
    destination: String,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
    owner_name: String,
    owner_email: String,
    emails_to_invite: Vec<String>,
}

#[derive(Serialize)]
struct CreateTripResponse {
    #[serde(rename = "tripId")]
    trip_id: Uuid,
}

async fn create_trip(
    State(state): State<AppState>,
    Json(body): Json<CreateTripRequest>,
) -> Result<Json<CreateTripResponse>, AppError> {
    let draft = TripDraft {
        destination: body.destination,
        starts_at: body.starts_at,
        ends_at: body.ends_at,
        owner_name: body.owner_name,
        owner_email: body.owner_email,
        emails_to_invite: body.emails_to_invite,
    };
    draft.validate(Utc::now())?;

    let trip = state.store.create_trip(&draft).await?;
    info!(trip_id = %trip.id, destination = %trip.destination, "trip created");

    // The trip is committed at this point; a failed send must not undo it.
    let email = TripConfirmationEmail::new(&trip, &draft.owner_name, &state.config.base_api_url);
    match email.render_html() {
        Ok(html) => {
            if let Err(err) = state
                .mailer
                .send_html(&draft.owner_name, &draft.owner_email, &email.subject(), html)
                .await
            {
                warn!(trip_id = %trip.id, "confirmation email not delivered: {err}");
            }
        }
        Err(err) => warn!(trip_id = %trip.id, "confirmation email not rendered: {err}"),
    }

    Ok(Json(CreateTripResponse { trip_id: trip.id }))
}
