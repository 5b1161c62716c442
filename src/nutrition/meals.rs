use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

use super::dto::{DailyRequirements, MealPlan, MealTargets, NutritionPlan};
use super::macros::{compute_daily_requirements, residual_carbs};
use super::profile::Profile;
use super::round_half_up;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MealSplitsError {
    #[error("malformed meal split `{0}`, expected name=ratio")]
    Malformed(String),
    #[error("invalid meal name `{0}`")]
    InvalidName(String),
    #[error("duplicate meal name `{0}`")]
    DuplicateName(String),
    #[error("ratio for `{name}` must be a finite non-negative number, got `{value}`")]
    InvalidRatio { name: String, value: String },
}

fn is_valid_meal_name(name: &str) -> bool {
    lazy_static! {
        static ref MEAL_NAME_RE: Regex = Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").unwrap();
    }
    MEAL_NAME_RE.is_match(name)
}

#[derive(Debug, Clone, PartialEq)]
pub struct MealSplit {
    pub name: String,
    pub ratio: f64,
}

/// Ordered meal-split table. Ratios are expected to sum to 1.0; the last meal
/// absorbs any difference when they don't.
#[derive(Debug, Clone, PartialEq)]
pub struct MealSplits(Vec<MealSplit>);

impl Default for MealSplits {
    fn default() -> Self {
        Self(vec![
            MealSplit { name: "breakfast".into(), ratio: 0.30 },
            MealSplit { name: "lunch".into(), ratio: 0.35 },
            MealSplit { name: "dinner".into(), ratio: 0.35 },
        ])
    }
}

impl MealSplits {
    pub fn new<I, S>(pairs: I) -> Result<Self, MealSplitsError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut splits: Vec<MealSplit> = Vec::new();
        for (name, ratio) in pairs {
            let name = name.into();
            if !is_valid_meal_name(&name) {
                return Err(MealSplitsError::InvalidName(name));
            }
            if !ratio.is_finite() || ratio < 0.0 {
                return Err(MealSplitsError::InvalidRatio {
                    name,
                    value: ratio.to_string(),
                });
            }
            if splits.iter().any(|s| s.name == name) {
                return Err(MealSplitsError::DuplicateName(name));
            }
            splits.push(MealSplit { name, ratio });
        }
        Ok(Self(splits))
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn iter(&self) -> impl Iterator<Item = &MealSplit> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total_ratio(&self) -> f64 {
        self.0.iter().map(|s| s.ratio).sum()
    }
}

/// Parses `breakfast=0.3,lunch=0.35,dinner=0.35`. Blank input yields an
/// empty table.
impl FromStr for MealSplits {
    type Err = MealSplitsError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut pairs = Vec::new();
        for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (name, ratio) = entry
                .split_once('=')
                .ok_or_else(|| MealSplitsError::Malformed(entry.to_string()))?;
            let name = name.trim();
            let ratio = ratio.trim();
            let value = ratio.parse::<f64>().map_err(|_| MealSplitsError::InvalidRatio {
                name: name.to_string(),
                value: ratio.to_string(),
            })?;
            pairs.push((name.to_string(), value));
        }
        Self::new(pairs)
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Allocated {
    calories: i64,
    protein: i64,
    fat: i64,
}

/// Splits daily targets across meals in table order.
///
/// Every meal but the last gets its rounded ratio share. The last one gets
/// `daily - allocated` for calories, protein and fat, so the per-meal sums
/// always equal the daily totals exactly.
pub fn allocate_meals(daily: &DailyRequirements, splits: &MealSplits) -> MealPlan {
    let last = splits.len().checked_sub(1);
    let day_calories = daily.daily_calories;
    let day_protein = daily.macronutrients.protein;
    let day_fat = daily.macronutrients.fat;

    let (meals, _) = splits.iter().enumerate().fold(
        (Vec::with_capacity(splits.len()), Allocated::default()),
        |(mut meals, used), (index, split)| {
            let (calories, protein, fat) = if Some(index) == last {
                (
                    day_calories - used.calories,
                    day_protein - used.protein,
                    day_fat - used.fat,
                )
            } else {
                (
                    round_half_up(day_calories as f64 * split.ratio),
                    round_half_up(day_protein as f64 * split.ratio),
                    round_half_up(day_fat as f64 * split.ratio),
                )
            };
            let targets = MealTargets {
                calories,
                protein,
                fat,
                carbs: residual_carbs(calories, protein, fat),
            };
            debug!(meal = %split.name, ratio = split.ratio, ?targets, "meal allocated");
            meals.push((split.name.clone(), targets));
            let used = Allocated {
                calories: used.calories + calories,
                protein: used.protein + protein,
                fat: used.fat + fat,
            };
            (meals, used)
        },
    );

    MealPlan::from_entries(meals)
}

pub fn compute_meal_plan(profile: &Profile, splits: &MealSplits) -> MealPlan {
    allocate_meals(&compute_daily_requirements(profile), splits)
}

/// Daily requirements and meal plan from a single calorie computation.
pub fn compute_nutrition_plan(profile: &Profile, splits: &MealSplits) -> NutritionPlan {
    let daily = compute_daily_requirements(profile);
    let meals = allocate_meals(&daily, splits);
    NutritionPlan { daily, meals }
}
