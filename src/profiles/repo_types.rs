use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::nutrition::Profile;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BudgetLevel {
    Minimal,
    #[default]
    Normal,
    Premium,
}

/// Stored nutrition profile owned by a single user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionProfile {
    pub id: Uuid,                   // profile ID
    pub user_id: Uuid,              // owner
    #[serde(flatten)]
    pub profile: Profile,           // calculator input
    pub budget_level: BudgetLevel,
    pub timeline_weeks: u32,        // 1..=104
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}
