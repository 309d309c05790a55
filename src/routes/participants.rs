use axum::{
    extract::{Path, Query, State},
    response::Redirect,
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use crate::{error::AppError, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/participants/:participant_id/confirm", get(confirm_participant))
}

#[derive(Deserialize)]
struct ConfirmQuery {
    #[serde(rename = "tripId")]
    trip_id: Option<Uuid>,
}

async fn confirm_participant(
    State(state): State<AppState>,
    Path(participant_id): Path<Uuid>,
    Query(query): Query<ConfirmQuery>,
) -> Result<Redirect, AppError> {
    let (participant, trip) = state
        .store
        .find_participant_with_trip(participant_id)
        .await?
        .ok_or(AppError::NotFound)?;

    // Re-confirming is a no-op, never an error.
    if !participant.is_confirmed {
        state.store.confirm_participant(participant.id).await?;
        debug!(participant_id = %participant.id, trip_id = %trip.id, "participant confirmed");
    }

    Ok(Redirect::to(&confirmation_redirect(
        &state.config.base_web_url,
        query.trip_id,
    )))
}

/// Redirect target after confirmation. Depends only on whether the caller
/// supplied a trip id; the id is not cross-checked against the
/// participant's trip, matching the web app's link contract.
pub fn confirmation_redirect(base_web_url: &str, trip_id: Option<Uuid>) -> String {
    match trip_id {
        Some(id) => format!("{base_web_url}/trips/{id}"),
        None => format!("{base_web_url}/trips"),
    }
}
