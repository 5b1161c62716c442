use anyhow::Context;
use tracing::warn;

use crate::nutrition::MealSplits;

const RATIO_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub meal_splits: MealSplits,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, so tests don't have to
    /// touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let meal_splits = match lookup("MEAL_SPLITS") {
            Some(raw) => raw
                .parse::<MealSplits>()
                .with_context(|| format!("parse MEAL_SPLITS `{}`", raw))?,
            None => MealSplits::default(),
        };

        let total = meal_splits.total_ratio();
        if !meal_splits.is_empty() && (total - 1.0).abs() > RATIO_TOLERANCE {
            warn!(
                total_ratio = total,
                "meal split ratios do not sum to 1.0, last meal absorbs the difference"
            );
        }
        Ok(Self { meal_splits })
    }
}
