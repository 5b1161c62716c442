use tracing::debug;

use super::calories::compute_daily_calories;
use super::dto::{DailyRequirements, Macronutrients};
use super::profile::{DietType, Profile};
use super::round_half_up;

pub const KCAL_PER_G_PROTEIN: i64 = 4;
pub const KCAL_PER_G_FAT: i64 = 9;
pub const KCAL_PER_G_CARBS: i64 = 4;

/// Fraction of daily calories assigned to each macronutrient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroSplit {
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl DietType {
    /// Only keto and high-protein have their own split; every other diet
    /// uses the standard one.
    pub const fn split(self) -> MacroSplit {
        match self {
            Self::Keto => MacroSplit { protein: 0.25, fat: 0.70, carbs: 0.05 },
            Self::HighProtein => MacroSplit { protein: 0.40, fat: 0.30, carbs: 0.30 },
            Self::Normal | Self::Vegetarian | Self::Vegan => {
                MacroSplit { protein: 0.20, fat: 0.30, carbs: 0.50 }
            }
        }
    }
}

/// Macronutrient grams for the profile's daily calorie target.
pub fn compute_macros(profile: &Profile) -> Macronutrients {
    macros_for_calories(compute_daily_calories(profile), profile.diet_type)
}

pub fn compute_daily_requirements(profile: &Profile) -> DailyRequirements {
    let daily_calories = compute_daily_calories(profile);
    DailyRequirements {
        daily_calories,
        macronutrients: macros_for_calories(daily_calories, profile.diet_type),
    }
}

/// Protein and fat come straight from the split; carbs absorb whatever
/// calories remain after their rounding.
pub(crate) fn macros_for_calories(calories: i64, diet: DietType) -> Macronutrients {
    let split = diet.split();
    let protein = round_half_up(calories as f64 * split.protein / KCAL_PER_G_PROTEIN as f64);
    let fat = round_half_up(calories as f64 * split.fat / KCAL_PER_G_FAT as f64);
    let carbs = residual_carbs(calories, protein, fat);
    debug!(calories, ?diet, protein, fat, carbs, "macros computed");
    Macronutrients { protein, fat, carbs }
}

/// Carb grams covering `calories` after protein and fat are accounted for.
pub(crate) fn residual_carbs(calories: i64, protein: i64, fat: i64) -> i64 {
    let remaining = calories - protein * KCAL_PER_G_PROTEIN - fat * KCAL_PER_G_FAT;
    round_half_up(remaining as f64 / KCAL_PER_G_CARBS as f64)
}
