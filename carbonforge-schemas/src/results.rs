use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Transportation,
    Electricity,
    Diet,
    Waste,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Transportation,
        Category::Electricity,
        Category::Diet,
        Category::Waste,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Transportation => "Transportation",
            Category::Electricity => "Electricity",
            Category::Diet => "Diet",
            Category::Waste => "Waste",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Annual emissions per category in tCO2e, already rounded to 3 decimals.
///
/// `total` is the sum of the rounded category values, not of the raw ones.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryResult {
    pub transportation: f64,
    pub electricity: f64,
    pub diet: f64,
    pub waste: f64,
    pub total: f64,
}

impl CategoryResult {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Transportation => self.transportation,
            Category::Electricity => self.electricity,
            Category::Diet => self.diet,
            Category::Waste => self.waste,
        }
    }

    /// Category values in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// `{"Transportation": t, "Electricity": t, "Diet": t, "Waste": t, "Total": t}`
    pub fn to_json_map(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut map: serde_json::Map<String, serde_json::Value> = self
            .iter()
            .map(|(category, tonnes)| (category.name().to_string(), serde_json::json!(tonnes)))
            .collect();
        map.insert("Total".to_string(), serde_json::json!(self.total));
        map
    }
}

/// Difference between a baseline and an alternate scenario total, in tCO2e/yr.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScenarioDelta {
    pub baseline_total: f64,
    pub alternate_total: f64,
    /// `alternate_total - baseline_total`; negative means the alternate emits less.
    pub delta: f64,
    /// `max(0, -delta)`
    pub reduction: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_map_has_four_categories_and_total() {
        let result = CategoryResult {
            transportation: 0.612,
            electricity: 2.148,
            diet: 2.055,
            waste: 0.075,
            total: 4.89,
        };
        let map = result.to_json_map();
        assert_eq!(map.len(), 5);
        assert_eq!(map["Diet"], serde_json::json!(2.055));
        assert_eq!(map["Total"], serde_json::json!(4.89));
    }

    #[test]
    fn iter_follows_display_order() {
        let names: Vec<&str> = CategoryResult::default().iter().map(|(c, _)| c.name()).collect();
        assert_eq!(names, ["Transportation", "Electricity", "Diet", "Waste"]);
    }
}
