use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ValidationError;

pub const MIN_AGE: u32 = 10;
pub const MAX_AGE: u32 = 120;

pub const KG_PER_LB: f64 = 0.453592;
pub const CM_PER_IN: f64 = 2.54;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    /// Uses the mean of the male and female BMR formulas.
    #[default]
    Other,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kg,
    #[default]
    Lb,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    Cm,
    #[default]
    In,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Weight {
    pub value: f64,
    #[serde(default)]
    pub unit: WeightUnit,
}

impl Weight {
    pub fn kg(value: f64) -> Self {
        Self { value, unit: WeightUnit::Kg }
    }

    pub fn lb(value: f64) -> Self {
        Self { value, unit: WeightUnit::Lb }
    }

    pub fn in_kg(&self) -> f64 {
        match self.unit {
            WeightUnit::Kg => self.value,
            WeightUnit::Lb => self.value * KG_PER_LB,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Height {
    pub value: f64,
    #[serde(default)]
    pub unit: HeightUnit,
}

impl Height {
    pub fn cm(value: f64) -> Self {
        Self { value, unit: HeightUnit::Cm }
    }

    pub fn inches(value: f64) -> Self {
        Self { value, unit: HeightUnit::In }
    }

    pub fn in_cm(&self) -> f64 {
        match self.unit {
            HeightUnit::Cm => self.value,
            HeightUnit::In => self.value * CM_PER_IN,
        }
    }
}

/// Activity level used to scale BMR. Unrecognized tags fall back to
/// `Sedentary` instead of failing deserialization.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    Light,
    Moderate,
    Active,
    ExtraActive,
}

impl ActivityLevel {
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "sedentary" => Self::Sedentary,
            "light" | "lightly active" | "lightly-active" => Self::Light,
            "moderate" | "moderately active" | "moderately-active" => Self::Moderate,
            "active" | "very active" | "very-active" => Self::Active,
            "extra-active" | "extra active" | "extra_active" => Self::ExtraActive,
            other => {
                debug!(tag = other, "unrecognized activity level, using sedentary");
                Self::Sedentary
            }
        }
    }
}

impl From<String> for ActivityLevel {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

/// Diet type selecting the macro split. Unrecognized tags fall back to `Normal`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum DietType {
    #[default]
    Normal,
    Keto,
    HighProtein,
    Vegetarian,
    Vegan,
}

impl DietType {
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "normal" => Self::Normal,
            "keto" => Self::Keto,
            "high-protein" => Self::HighProtein,
            "vegetarian" => Self::Vegetarian,
            "vegan" => Self::Vegan,
            other => {
                debug!(tag = other, "unrecognized diet type, using normal");
                Self::Normal
            }
        }
    }
}

impl From<String> for DietType {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

/// Weight goal driving the flat calorie adjustment. Unrecognized tags fall
/// back to `Maintain`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum WeightGoal {
    Lose,
    #[default]
    Maintain,
    Gain,
}

impl WeightGoal {
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "lose" => Self::Lose,
            "maintain" => Self::Maintain,
            "gain" => Self::Gain,
            other => {
                debug!(tag = other, "unrecognized weight goal, using maintain");
                Self::Maintain
            }
        }
    }
}

impl From<String> for WeightGoal {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

/// Nutritional profile consumed by the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub age: u32,
    #[serde(default)]
    pub sex: Sex,
    pub weight: Weight,
    pub height: Height,
    #[serde(default, alias = "activityFactor")]
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub diet_type: DietType,
    #[serde(default)]
    pub weight_goal: WeightGoal,
}

impl Profile {
    /// Profile with defaults for everything but the body measurements.
    pub fn new(age: u32, weight: Weight, height: Height) -> Self {
        Self {
            age,
            sex: Sex::default(),
            weight,
            height,
            activity_level: ActivityLevel::default(),
            diet_type: DietType::default(),
            weight_goal: WeightGoal::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(ValidationError::AgeOutOfRange {
                value: self.age,
                min: MIN_AGE,
                max: MAX_AGE,
            });
        }
        ensure_positive("weight", self.weight.value)?;
        ensure_positive("height", self.height.value)?;
        Ok(())
    }
}

fn ensure_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NotPositive { field, value })
    }
}
