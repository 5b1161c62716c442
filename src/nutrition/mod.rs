//! Nutrition calculation pipeline: profile → daily calories → macronutrients
//! → per-meal targets. Everything here is pure and synchronous.

pub mod calories;
pub mod dto;
pub mod macros;
pub mod meals;
pub mod profile;

pub use calories::{compute_daily_calories, mifflin_st_jeor};
pub use dto::{DailyRequirements, Macronutrients, MealPlan, MealTargets, NutritionPlan};
pub use macros::{compute_daily_requirements, compute_macros};
pub use meals::{compute_meal_plan, compute_nutrition_plan, MealSplit, MealSplits};
pub use profile::{
    ActivityLevel, DietType, Height, HeightUnit, Profile, Sex, Weight, WeightGoal, WeightUnit,
};

/// Rounds half-way cases towards positive infinity, so `-2.5` becomes `-2`.
/// Residual carbs can go negative on low-calorie targets and must round the
/// same way as positive values.
pub(crate) fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
