use chrono::Utc;
use uuid::Uuid;

use crate::{
    db::DbPool,
    error::AppError,
    models::{
        participant::Participant,
        trip::{Trip, TripDraft},
    },
};

/// Persistence layer for trips and their participant rosters.
#[derive(Clone)]
pub struct TripStore {
    db: DbPool,
}

impl TripStore {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// Creates the trip together with its initial roster (owner plus one
    /// unconfirmed participant per invited email) in a single transaction,
    /// so a trip is never observable without its participants.
    pub async fn create_trip(&self, draft: &TripDraft) -> Result<Trip, AppError> {
        let trip = Trip {
            id: Uuid::new_v4(),
            destination: draft.destination.trim().to_string(),
            starts_at: draft.starts_at,
            ends_at: draft.ends_at,
            created_at: Utc::now(),
        };

        let mut tx = self.db.begin().await?;

        sqlx::query(
            "INSERT INTO trips (id, destination, starts_at, ends_at, created_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(trip.id)
        .bind(&trip.destination)
        .bind(trip.starts_at)
        .bind(trip.ends_at)
        .bind(trip.created_at)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO participants (id, trip_id, name, email, is_owner, is_confirmed)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(Uuid::new_v4())
        .bind(trip.id)
        .bind(draft.owner_name.trim())
        .bind(draft.owner_email.trim())
        .bind(true)
        .bind(true)
        .execute(&mut *tx)
        .await?;

        for email in &draft.emails_to_invite {
            sqlx::query(
                "INSERT INTO participants (id, trip_id, name, email, is_owner, is_confirmed)
                 VALUES (?, ?, NULL, ?, ?, ?)",
            )
            .bind(Uuid::new_v4())
            .bind(trip.id)
            .bind(email.trim())
            .bind(false)
            .bind(false)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(trip)
    }

    /// Looks up a participant together with its owning trip.
    pub async fn find_participant_with_trip(
        &self,
        participant_id: Uuid,
    ) -> Result<Option<(Participant, Trip)>, AppError> {
        let participant = sqlx::query_as::<_, Participant>(
            "SELECT id, trip_id, name, email, is_owner, is_confirmed
             FROM participants WHERE id = ?",
        )
        .bind(participant_id)
        .fetch_optional(&self.db)
        .await?;

        let Some(participant) = participant else {
            return Ok(None);
        };

        let trip = sqlx::query_as::<_, Trip>(
            "SELECT id, destination, starts_at, ends_at, created_at
             FROM trips WHERE id = ?",
        )
        .bind(participant.trip_id)
        .fetch_one(&self.db)
        .await?;

        Ok(Some((participant, trip)))
    }

    /// Flips `is_confirmed` to true. The predicate keeps the write
    /// single-shot under concurrent duplicate confirmations.
    pub async fn confirm_participant(&self, participant_id: Uuid) -> Result<(), AppError> {
        sqlx::query("UPDATE participants SET is_confirmed = TRUE WHERE id = ? AND is_confirmed = FALSE")
            .bind(participant_id)
            .execute(&self.db)
            .await?;
        Ok(())
    }

    /// Full roster of a trip, owner first. Test-support surface; no route
    /// exposes rosters.
    pub async fn trip_participants(&self, trip_id: Uuid) -> Result<Vec<Participant>, AppError> {
        let participants = sqlx::query_as::<_, Participant>(
            "SELECT id, trip_id, name, email, is_owner, is_confirmed
             FROM participants WHERE trip_id = ? ORDER BY is_owner DESC, email",
        )
        .bind(trip_id)
        .fetch_all(&self.db)
        .await?;
        Ok(participants)
    }

    /// Number of stored trips. Test-support surface for asserting that a
    /// rejected creation persisted nothing.
    pub async fn count_trips(&self) -> Result<i64, AppError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM trips")
            .fetch_one(&self.db)
            .await?;
        Ok(count.0)
    }
}
