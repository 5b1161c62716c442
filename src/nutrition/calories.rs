use tracing::debug;

use super::profile::{ActivityLevel, Profile, Sex, WeightGoal};
use super::round_half_up;

impl ActivityLevel {
    /// Multiplier applied to BMR to estimate total daily energy expenditure.
    pub const fn factor(self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Light => 1.375,
            Self::Moderate => 1.55,
            Self::Active => 1.725,
            // no dedicated multiplier; shares the sedentary bucket
            Self::ExtraActive => 1.2,
        }
    }
}

impl WeightGoal {
    /// Flat kcal adjustment applied after the activity factor.
    pub const fn adjustment(self) -> f64 {
        match self {
            Self::Lose => -500.0,
            Self::Maintain => 0.0,
            Self::Gain => 500.0,
        }
    }
}

/// Basal metabolic rate (kcal/day) via Mifflin-St Jeor.
///
/// `Sex::Other` is the arithmetic mean of the male and female equations.
pub fn mifflin_st_jeor(weight_kg: f64, height_cm: f64, age: u32, sex: Sex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    let male = base + 5.0;
    let female = base - 161.0;
    match sex {
        Sex::Male => male,
        Sex::Female => female,
        Sex::Other => (male + female) / 2.0,
    }
}

/// Daily calorie target in kcal, rounded once at the very end.
///
/// Assumes a validated profile; out-of-range input still produces a number.
pub fn compute_daily_calories(profile: &Profile) -> i64 {
    let bmr = mifflin_st_jeor(
        profile.weight.in_kg(),
        profile.height.in_cm(),
        profile.age,
        profile.sex,
    );
    let tdee = bmr * profile.activity_level.factor();
    let calories = round_half_up(tdee + profile.weight_goal.adjustment());
    debug!(
        bmr,
        activity = ?profile.activity_level,
        goal = ?profile.weight_goal,
        calories,
        "daily calories computed"
    );
    calories
}

#[cfg(test)]
mod calories_tests {
    use super::*;
    use crate::nutrition::profile::{Height, Weight};

    fn profile(age: u32, sex: Sex, kg: f64, cm: f64) -> Profile {
        Profile {
            sex,
            ..Profile::new(age, Weight::kg(kg), Height::cm(cm))
        }
    }

    #[test]
    fn mifflin_st_jeor_matches_reference_values() {
        assert_eq!(mifflin_st_jeor(70.0, 175.0, 30, Sex::Male), 1648.75);
        assert_eq!(mifflin_st_jeor(70.0, 175.0, 30, Sex::Female), 1482.75);
    }

    #[test]
    fn other_is_exact_mean_of_male_and_female() {
        for &(kg, cm, age) in &[(70.0, 175.0, 30), (53.3, 158.2, 67), (112.0, 190.5, 19)] {
            let male = mifflin_st_jeor(kg, cm, age, Sex::Male);
            let female = mifflin_st_jeor(kg, cm, age, Sex::Female);
            assert_eq!(mifflin_st_jeor(kg, cm, age, Sex::Other), (male + female) / 2.0);
        }
    }

    #[test]
    fn male_maintenance_moderate() {
        let mut p = profile(30, Sex::Male, 70.0, 175.0);
        p.activity_level = ActivityLevel::Moderate;
        let calories = compute_daily_calories(&p);
        assert_eq!(calories, 2556);
        assert!(calories > 2400 && calories < 2900);
    }

    #[test]
    fn female_lose_light() {
        let mut p = profile(25, Sex::Female, 60.0, 165.0);
        p.activity_level = ActivityLevel::Light;
        p.weight_goal = WeightGoal::Lose;
        let calories = compute_daily_calories(&p);
        assert_eq!(calories, 1350);
        assert!(calories > 1300 && calories < 2000);
    }

    #[test]
    fn other_gain_active() {
        let mut p = profile(40, Sex::Other, 80.0, 180.0);
        p.activity_level = ActivityLevel::Active;
        p.weight_goal = WeightGoal::Gain;
        let calories = compute_daily_calories(&p);
        assert_eq!(calories, 3341);
        assert!(calories > 3000 && calories < 3800);
    }

    #[test]
    fn extra_active_uses_sedentary_factor() {
        let mut sedentary = profile(35, Sex::Male, 82.0, 181.0);
        sedentary.activity_level = ActivityLevel::Sedentary;
        let mut extra = sedentary.clone();
        extra.activity_level = ActivityLevel::ExtraActive;
        assert_eq!(compute_daily_calories(&sedentary), compute_daily_calories(&extra));
    }

    #[test]
    fn goal_adjustment_is_flat_500() {
        let mut p = profile(30, Sex::Female, 65.0, 170.0);
        p.activity_level = ActivityLevel::Moderate;
        let maintain = compute_daily_calories(&p);
        p.weight_goal = WeightGoal::Lose;
        let lose = compute_daily_calories(&p);
        p.weight_goal = WeightGoal::Gain;
        let gain = compute_daily_calories(&p);
        assert_eq!(maintain - lose, 500);
        assert_eq!(gain - maintain, 500);
    }

    #[test]
    fn pounds_match_kilograms_within_rounding() {
        let kg = 70.0;
        let mut metric = profile(30, Sex::Male, kg, 175.0);
        metric.activity_level = ActivityLevel::Moderate;
        let mut imperial = metric.clone();
        imperial.weight = Weight::lb(kg / 0.453592);

        let diff = compute_daily_calories(&metric) - compute_daily_calories(&imperial);
        assert!(diff.abs() <= 1, "diff was {diff}");
    }

    #[test]
    fn inches_match_centimeters_within_rounding() {
        let metric = profile(45, Sex::Female, 62.0, 177.8);
        let mut imperial = metric.clone();
        imperial.height = Height::inches(70.0);

        let diff = compute_daily_calories(&metric) - compute_daily_calories(&imperial);
        assert!(diff.abs() <= 1, "diff was {diff}");
    }

    #[test]
    fn deterministic() {
        let p = profile(52, Sex::Other, 91.4, 168.0);
        assert_eq!(compute_daily_calories(&p), compute_daily_calories(&p));
    }
}
