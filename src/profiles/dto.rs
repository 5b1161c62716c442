use serde::Deserialize;

use crate::errors::ValidationError;
use crate::nutrition::{ActivityLevel, DietType, Height, Profile, Sex, Weight, WeightGoal};
use crate::profiles::repo_types::{BudgetLevel, NutritionProfile};

pub const MIN_TIMELINE_WEEKS: u32 = 1;
pub const MAX_TIMELINE_WEEKS: u32 = 104;

/// Request body for creating or fully replacing a profile.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProfileRequest {
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(default)]
    pub budget_level: BudgetLevel,
    pub timeline_weeks: u32,
}

impl NewProfileRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.profile.validate()?;
        validate_timeline_weeks(self.timeline_weeks)
    }
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    pub age: Option<u32>,
    pub sex: Option<Sex>,
    pub weight: Option<Weight>,
    pub height: Option<Height>,
    #[serde(alias = "activityFactor")]
    pub activity_level: Option<ActivityLevel>,
    pub diet_type: Option<DietType>,
    pub weight_goal: Option<WeightGoal>,
    pub budget_level: Option<BudgetLevel>,
    pub timeline_weeks: Option<u32>,
}

impl ProfilePatch {
    pub fn apply(self, record: &mut NutritionProfile) {
        let p = &mut record.profile;
        if let Some(age) = self.age {
            p.age = age;
        }
        if let Some(sex) = self.sex {
            p.sex = sex;
        }
        if let Some(weight) = self.weight {
            p.weight = weight;
        }
        if let Some(height) = self.height {
            p.height = height;
        }
        if let Some(level) = self.activity_level {
            p.activity_level = level;
        }
        if let Some(diet) = self.diet_type {
            p.diet_type = diet;
        }
        if let Some(goal) = self.weight_goal {
            p.weight_goal = goal;
        }
        if let Some(budget) = self.budget_level {
            record.budget_level = budget;
        }
        if let Some(weeks) = self.timeline_weeks {
            record.timeline_weeks = weeks;
        }
    }

    /// A copy of `record` with the patch applied, provided the merged result
    /// is still a valid profile.
    pub fn merged(self, record: &NutritionProfile) -> Result<NutritionProfile, ValidationError> {
        let mut next = record.clone();
        self.apply(&mut next);
        next.profile.validate()?;
        validate_timeline_weeks(next.timeline_weeks)?;
        Ok(next)
    }
}

pub fn validate_timeline_weeks(weeks: u32) -> Result<(), ValidationError> {
    if (MIN_TIMELINE_WEEKS..=MAX_TIMELINE_WEEKS).contains(&weeks) {
        Ok(())
    } else {
        Err(ValidationError::TimelineOutOfRange {
            value: weeks,
            min: MIN_TIMELINE_WEEKS,
            max: MAX_TIMELINE_WEEKS,
        })
    }
}

#[cfg(test)]
mod dto_tests {
    use super::*;
    use crate::nutrition::{HeightUnit, WeightUnit};

    #[test]
    fn new_profile_request_parses_flattened_profile() {
        let req: NewProfileRequest = serde_json::from_str(
            r#"{
                "age": 34,
                "sex": "female",
                "weight": {"value": 140},
                "height": {"value": 170, "unit": "cm"},
                "activityFactor": "light",
                "dietType": "vegan",
                "weightGoal": "lose",
                "budgetLevel": "premium",
                "timelineWeeks": 12
            }"#,
        )
        .expect("request should parse");

        assert_eq!(req.profile.sex, Sex::Female);
        assert_eq!(req.profile.weight.unit, WeightUnit::Lb);
        assert_eq!(req.profile.height.unit, HeightUnit::Cm);
        assert_eq!(req.profile.activity_level, ActivityLevel::Light);
        assert_eq!(req.profile.diet_type, DietType::Vegan);
        assert_eq!(req.budget_level, BudgetLevel::Premium);
        assert_eq!(req.timeline_weeks, 12);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn timeline_weeks_bounds() {
        assert!(validate_timeline_weeks(1).is_ok());
        assert!(validate_timeline_weeks(104).is_ok());
        assert_eq!(
            validate_timeline_weeks(0),
            Err(ValidationError::TimelineOutOfRange { value: 0, min: 1, max: 104 })
        );
        assert!(validate_timeline_weeks(105).is_err());
    }

    #[test]
    fn merged_leaves_source_untouched_and_checks_result() {
        use time::OffsetDateTime;
        use uuid::Uuid;

        let now = OffsetDateTime::now_utc();
        let record = NutritionProfile {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            profile: Profile::new(30, Weight::kg(70.0), Height::cm(175.0)),
            budget_level: BudgetLevel::Normal,
            timeline_weeks: 8,
            created_at: now,
            updated_at: now,
        };

        let next = ProfilePatch {
            weight_goal: Some(WeightGoal::Lose),
            ..ProfilePatch::default()
        }
        .merged(&record)
        .unwrap();
        assert_eq!(next.profile.weight_goal, WeightGoal::Lose);
        assert_eq!(record.profile.weight_goal, WeightGoal::Maintain);

        let err = ProfilePatch {
            timeline_weeks: Some(200),
            ..ProfilePatch::default()
        }
        .merged(&record)
        .unwrap_err();
        assert!(matches!(err, ValidationError::TimelineOutOfRange { value: 200, .. }));
    }

    #[test]
    fn empty_patch_parses_to_no_changes() {
        let patch: ProfilePatch = serde_json::from_str("{}").unwrap();
        assert!(patch.age.is_none());
        assert!(patch.activity_level.is_none());
        assert!(patch.timeline_weeks.is_none());
    }
}
