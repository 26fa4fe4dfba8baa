use serde::{Deserialize, Deserializer, Serialize};

use crate::lookup::LookupMiss;
use crate::models::FoodEntry;
use crate::planner::calculations::round1;

/// Request body for the natural-language nutrients endpoint.
#[derive(Debug, Serialize)]
pub struct NutrientsRequest<'a> {
    pub query: &'a str,
}

/// Response body; only the fields we aggregate are modelled.
#[derive(Debug, Default, Deserialize)]
pub struct NutrientsResponse {
    #[serde(default)]
    pub foods: Vec<NutritionixFood>,
}

/// One recognized food item. Missing numbers count as zero; macros may also
/// be null, but an explicit null calorie value fails the parse.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NutritionixFood {
    pub food_name: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub nf_calories: Option<f64>,
    pub nf_protein: Option<f64>,
    pub nf_total_carbohydrate: Option<f64>,
    pub nf_total_fat: Option<f64>,
}

fn non_null<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(Some)
}

/// Parse a 200 response body into one aggregated entry.
pub fn parse_response(body: &str) -> Result<FoodEntry, LookupMiss> {
    let response: NutrientsResponse =
        serde_json::from_str(body).map_err(|e| LookupMiss::Parse(e.to_string()))?;
    let entry = aggregate_foods(&response.foods)?;
    if !entry.is_valid() {
        return Err(LookupMiss::Parse(format!(
            "negative nutrient values for '{}'",
            entry.name
        )));
    }
    Ok(entry)
}

/// Sum all recognized items into a single entry.
///
/// Calories are rounded per item before summing; macros are summed raw and
/// rounded once at the end. An empty list is `NoFoods`; a calorie value or
/// total that does not fit in `u32` is a parse failure.
pub fn aggregate_foods(foods: &[NutritionixFood]) -> Result<FoodEntry, LookupMiss> {
    if foods.is_empty() {
        return Err(LookupMiss::NoFoods);
    }

    let mut names = Vec::with_capacity(foods.len());
    let mut calories: u32 = 0;
    let (mut protein, mut carbs, mut fat) = (0.0_f64, 0.0_f64, 0.0_f64);

    for food in foods {
        let name = title_case(food.food_name.as_deref().unwrap_or(""));
        if !name.is_empty() {
            names.push(name);
        }
        calories = calories
            .checked_add(item_calories(food)?)
            .ok_or_else(|| LookupMiss::Parse("calorie total out of range".to_string()))?;
        protein += food.nf_protein.unwrap_or(0.0);
        carbs += food.nf_total_carbohydrate.unwrap_or(0.0);
        fat += food.nf_total_fat.unwrap_or(0.0);
    }

    Ok(FoodEntry::new(
        names.join(", "),
        calories,
        round1(protein),
        round1(carbs),
        round1(fat),
    ))
}

fn item_calories(food: &NutritionixFood) -> Result<u32, LookupMiss> {
    let kcal = food.nf_calories.unwrap_or(0.0).round().max(0.0);
    if kcal > f64::from(u32::MAX) {
        return Err(LookupMiss::Parse(format!("calorie value {} out of range", kcal)));
    }
    Ok(kcal as u32)
}

/// Capitalize the first letter of every alphabetic run, lowercase the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("paneer"), "Paneer");
        assert_eq!(title_case("greek YOGURT"), "Greek Yogurt");
        assert_eq!(title_case("whole-wheat bread"), "Whole-Wheat Bread");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_aggregate_empty_is_no_foods() {
        assert_eq!(aggregate_foods(&[]), Err(LookupMiss::NoFoods));
    }

    #[test]
    fn test_aggregate_rounds_calories_per_item() {
        let foods = vec![
            NutritionixFood {
                food_name: Some("paneer".into()),
                nf_calories: Some(397.4),
                nf_protein: Some(27.54),
                nf_total_carbohydrate: Some(5.1),
                nf_total_fat: Some(31.21),
            },
            NutritionixFood {
                food_name: Some("apple".into()),
                nf_calories: Some(94.6),
                nf_protein: Some(0.47),
                nf_total_carbohydrate: Some(25.1),
                nf_total_fat: Some(0.31),
            },
        ];
        let entry = aggregate_foods(&foods).unwrap();
        assert_eq!(entry.name, "Paneer, Apple");
        // 397 + 95
        assert_eq!(entry.calories, 492);
        // 27.54 + 0.47 = 28.01
        assert_eq!(entry.protein_g, 28.0);
        assert_eq!(entry.carbs_g, 30.2);
        assert_eq!(entry.fat_g, 31.5);
    }

    #[test]
    fn test_aggregate_calorie_rounding_asymmetry() {
        // Each item rounds 0.4 down to 0; a single sum would give 1.
        let item = NutritionixFood {
            food_name: Some("tea".into()),
            nf_calories: Some(0.4),
            nf_protein: Some(0.04),
            ..Default::default()
        };
        let entry = aggregate_foods(&[item.clone(), item.clone(), item]).unwrap();
        assert_eq!(entry.calories, 0);
        // Macros are summed before rounding: 0.12 -> 0.1
        assert_eq!(entry.protein_g, 0.1);
    }

    #[test]
    fn test_aggregate_skips_blank_names_and_missing_numbers() {
        let foods = vec![
            NutritionixFood {
                food_name: None,
                nf_calories: Some(50.0),
                ..Default::default()
            },
            NutritionixFood {
                food_name: Some("banana".into()),
                nf_calories: None,
                ..Default::default()
            },
        ];
        let entry = aggregate_foods(&foods).unwrap();
        assert_eq!(entry.name, "Banana");
        assert_eq!(entry.calories, 50);
        assert_eq!(entry.fat_g, 0.0);
    }

    #[test]
    fn test_parse_response_variants() {
        let ok = r#"{"foods": [{"food_name": "oats", "nf_calories": 150.2, "nf_protein": 5.3,
                     "nf_total_carbohydrate": 27.0, "nf_total_fat": null}]}"#;
        let entry = parse_response(ok).unwrap();
        assert_eq!(entry.name, "Oats");
        assert_eq!(entry.calories, 150);

        assert!(matches!(parse_response(r#"{"foods": []}"#), Err(LookupMiss::NoFoods)));
        assert!(matches!(parse_response("{}"), Err(LookupMiss::NoFoods)));
        assert!(matches!(parse_response("<html>"), Err(LookupMiss::Parse(_))));
    }

    #[test]
    fn test_parse_response_rejects_negative_macros() {
        let body = r#"{"foods": [{"food_name": "glitch", "nf_calories": 10, "nf_protein": -3}]}"#;
        assert!(matches!(parse_response(body), Err(LookupMiss::Parse(_))));
    }

    #[test]
    fn test_calorie_overflow_is_parse_error() {
        // Each item fits in u32 but the sum does not
        let body = r#"{"foods": [{"food_name": "a", "nf_calories": 3000000000},
                                 {"food_name": "b", "nf_calories": 3000000000}]}"#;
        assert!(matches!(parse_response(body), Err(LookupMiss::Parse(_))));

        let huge = NutritionixFood {
            food_name: Some("huge".into()),
            nf_calories: Some(1e12),
            ..Default::default()
        };
        assert!(matches!(aggregate_foods(&[huge]), Err(LookupMiss::Parse(_))));

        let max = NutritionixFood {
            nf_calories: Some(f64::from(u32::MAX)),
            ..Default::default()
        };
        assert_eq!(aggregate_foods(&[max]).unwrap().calories, u32::MAX);
    }

    #[test]
    fn test_null_calories_fail_but_missing_calories_count_as_zero() {
        let null = r#"{"foods": [{"food_name": "mystery", "nf_calories": null}]}"#;
        assert!(matches!(parse_response(null), Err(LookupMiss::Parse(_))));

        let missing = r#"{"foods": [{"food_name": "water", "nf_protein": null}]}"#;
        let entry = parse_response(missing).unwrap();
        assert_eq!(entry.calories, 0);
        assert_eq!(entry.protein_g, 0.0);
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(NutrientsRequest { query: "1 apple" }).unwrap();
        assert_eq!(body, serde_json::json!({"query": "1 apple"}));
    }
}
