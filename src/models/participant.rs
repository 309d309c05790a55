use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Participant {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub name: Option<String>,
    pub email: String,
    pub is_owner: bool,
    pub is_confirmed: bool,
}
