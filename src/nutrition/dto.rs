use serde::{ser::SerializeMap, Serialize, Serializer};

/// Daily macronutrient targets in grams.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct Macronutrients {
    pub protein: i64,
    pub fat: i64,
    pub carbs: i64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailyRequirements {
    pub daily_calories: i64, // kcal
    pub macronutrients: Macronutrients,
}

/// Nutrient budget for a single meal.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct MealTargets {
    pub calories: i64,
    pub protein: i64,
    pub fat: i64,
    pub carbs: i64,
}

/// Meal name → targets, in the order of the split table that produced it.
///
/// Serializes as a JSON object whose keys keep that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealPlan {
    meals: Vec<(String, MealTargets)>,
}

impl MealPlan {
    pub(crate) fn from_entries(meals: Vec<(String, MealTargets)>) -> Self {
        Self { meals }
    }

    pub fn get(&self, name: &str) -> Option<&MealTargets> {
        self.meals
            .iter()
            .find(|(meal, _)| meal == name)
            .map(|(_, targets)| targets)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.meals.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    /// Sum of every meal's targets.
    pub fn totals(&self) -> MealTargets {
        self.meals
            .iter()
            .fold(MealTargets::default(), |acc, (_, m)| MealTargets {
                calories: acc.calories + m.calories,
                protein: acc.protein + m.protein,
                fat: acc.fat + m.fat,
                carbs: acc.carbs + m.carbs,
            })
    }
}

impl Serialize for MealPlan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.meals.len()))?;
        for (name, targets) in &self.meals {
            map.serialize_entry(name, targets)?;
        }
        map.end()
    }
}

/// Daily requirements together with their per-meal allocation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NutritionPlan {
    pub daily: DailyRequirements,
    pub meals: MealPlan,
}

#[cfg(test)]
mod dto_tests {
    use super::*;

    #[test]
    fn meal_plan_serializes_in_insertion_order() {
        let plan = MealPlan::from_entries(vec![
            ("lunch".into(), MealTargets { calories: 600, protein: 30, fat: 20, carbs: 75 }),
            ("breakfast".into(), MealTargets { calories: 400, protein: 20, fat: 10, carbs: 58 }),
        ]);

        let json = serde_json::to_string(&plan).unwrap();
        let lunch = json.find("lunch").unwrap();
        let breakfast = json.find("breakfast").unwrap();
        assert!(lunch < breakfast);
        assert!(json.contains(r#""calories":600"#));
    }

    #[test]
    fn meal_plan_totals_and_lookup() {
        let plan = MealPlan::from_entries(vec![
            ("a".into(), MealTargets { calories: 100, protein: 5, fat: 3, carbs: 13 }),
            ("b".into(), MealTargets { calories: 200, protein: 10, fat: 6, carbs: 26 }),
        ]);

        assert_eq!(plan.len(), 2);
        assert_eq!(plan.get("b").map(|m| m.calories), Some(200));
        assert!(plan.get("c").is_none());
        assert_eq!(
            plan.totals(),
            MealTargets { calories: 300, protein: 15, fat: 9, carbs: 39 }
        );
        assert_eq!(plan.names().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn daily_requirements_use_camel_case() {
        let daily = DailyRequirements {
            daily_calories: 2000,
            macronutrients: Macronutrients { protein: 100, fat: 67, carbs: 249 },
        };
        let json = serde_json::to_value(daily).unwrap();
        assert_eq!(json["dailyCalories"], 2000);
        assert_eq!(json["macronutrients"]["fat"], 67);
    }
}
