use time::OffsetDateTime;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::ProfileError;
use crate::nutrition::{compute_nutrition_plan, NutritionPlan};
use crate::profiles::dto::{NewProfileRequest, ProfilePatch};
use crate::profiles::repo::PatchOutcome;
use crate::profiles::repo_types::NutritionProfile;
use crate::state::AppState;

#[instrument(skip(st, req))]
pub async fn create_profile(
    st: &AppState,
    user_id: Uuid,
    req: NewProfileRequest,
) -> Result<NutritionProfile, ProfileError> {
    if let Err(e) = req.validate() {
        warn!(error = %e, "invalid profile");
        return Err(e.into());
    }

    let now = OffsetDateTime::now_utc();
    let record = NutritionProfile {
        id: Uuid::new_v4(),
        user_id,
        profile: req.profile,
        budget_level: req.budget_level,
        timeline_weeks: req.timeline_weeks,
        created_at: now,
        updated_at: now,
    };
    st.profiles.insert(record.clone()).await?;

    info!(profile_id = %record.id, "nutrition profile created");
    Ok(record)
}

#[instrument(skip(st))]
pub async fn get_profile(
    st: &AppState,
    user_id: Uuid,
    id: Uuid,
) -> Result<NutritionProfile, ProfileError> {
    match st.profiles.find(user_id, id).await? {
        Some(record) => Ok(record),
        None => {
            warn!("profile not found");
            Err(ProfileError::NotFound(id))
        }
    }
}

/// Replaces every profile field, keeping id and creation time.
#[instrument(skip(st, req))]
pub async fn update_profile(
    st: &AppState,
    user_id: Uuid,
    id: Uuid,
    req: NewProfileRequest,
) -> Result<NutritionProfile, ProfileError> {
    if let Err(e) = req.validate() {
        warn!(error = %e, "invalid profile");
        return Err(e.into());
    }

    let existing = get_profile(st, user_id, id).await?;
    let record = NutritionProfile {
        profile: req.profile,
        budget_level: req.budget_level,
        timeline_weeks: req.timeline_weeks,
        updated_at: OffsetDateTime::now_utc(),
        ..existing
    };
    store_update(st, record).await
}

/// Applies only the fields present in `patch`, then validates the merged
/// profile. The merge happens inside the repository as a single step.
#[instrument(skip(st, patch))]
pub async fn patch_profile(
    st: &AppState,
    user_id: Uuid,
    id: Uuid,
    patch: ProfilePatch,
) -> Result<NutritionProfile, ProfileError> {
    let now = OffsetDateTime::now_utc();
    match st.profiles.patch(user_id, id, patch, now).await? {
        PatchOutcome::Patched(record) => {
            info!(profile_id = %id, "nutrition profile updated");
            Ok(record)
        }
        PatchOutcome::NotFound => {
            warn!("profile not found");
            Err(ProfileError::NotFound(id))
        }
        PatchOutcome::Invalid(e) => {
            warn!(error = %e, "patched profile is invalid");
            Err(e.into())
        }
    }
}

#[instrument(skip(st))]
pub async fn delete_profile(st: &AppState, user_id: Uuid, id: Uuid) -> Result<(), ProfileError> {
    if !st.profiles.delete(user_id, id).await? {
        warn!("profile not found");
        return Err(ProfileError::NotFound(id));
    }
    info!("nutrition profile deleted");
    Ok(())
}

/// Daily requirements and meal plan for a stored profile, using the
/// configured meal splits.
#[instrument(skip(st))]
pub async fn plan_for_profile(
    st: &AppState,
    user_id: Uuid,
    id: Uuid,
) -> Result<NutritionPlan, ProfileError> {
    let record = get_profile(st, user_id, id).await?;
    let plan = compute_nutrition_plan(&record.profile, &st.config.meal_splits);
    info!(
        daily_calories = plan.daily.daily_calories,
        meals = plan.meals.len(),
        "nutrition plan computed"
    );
    Ok(plan)
}

async fn store_update(
    st: &AppState,
    record: NutritionProfile,
) -> Result<NutritionProfile, ProfileError> {
    let id = record.id;
    if !st.profiles.update(record.clone()).await? {
        warn!(profile_id = %id, "profile vanished before update");
        return Err(ProfileError::NotFound(id));
    }
    info!(profile_id = %id, "nutrition profile updated");
    Ok(record)
}
