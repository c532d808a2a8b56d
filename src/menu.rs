//! Menu Grouping
//!
//! Helper functions for rendering the menu as category sections.

use std::collections::HashMap;

use crate::models::FoodItem;

/// A derived menu section: one category and the items under it.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub category: String,
    pub items: Vec<FoodItem>,
}

/// Partition items into sections keyed by their `category` field.
///
/// Sections appear in first-seen order of each distinct category value;
/// items keep their relative order inside a section. The key is matched
/// exactly, no trimming or case folding.
pub fn group_by_category(items: &[FoodItem]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for item in items {
        match index.get(&item.category) {
            Some(&at) => groups[at].items.push(item.clone()),
            None => {
                index.insert(item.category.clone(), groups.len());
                groups.push(CategoryGroup {
                    category: item.category.clone(),
                    items: vec![item.clone()],
                });
            }
        }
    }
    groups
}

/// Anchor id for a category section ("Baked Food" -> "BakedFoodSection").
pub fn section_id(category: &str) -> String {
    format!("{}Section", category.replace(' ', ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: &str, category: &str) -> FoodItem {
        FoodItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            description: String::new(),
            price: 100.0,
            image: "/img/placeholder.png".to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert_eq!(group_by_category(&[]), Vec::new());
    }

    #[test]
    fn groups_follow_first_appearance_order() {
        let items = vec![
            make_item("1", "Baked Food"),
            make_item("2", "Drinks"),
            make_item("3", "Baked Food"),
        ];

        let groups = group_by_category(&items);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, "Baked Food");
        assert_eq!(groups[1].category, "Drinks");
        // Both baked items, still in input order
        assert_eq!(groups[0].items[0].id, "1");
        assert_eq!(groups[0].items[1].id, "3");
        assert_eq!(groups[1].items[0].id, "2");
    }

    #[test]
    fn category_match_is_case_sensitive() {
        let items = vec![make_item("1", "drinks"), make_item("2", "Drinks")];
        assert_eq!(group_by_category(&items).len(), 2);
    }

    #[test]
    fn regrouping_the_flattened_output_is_stable() {
        let items = vec![
            make_item("1", "Chicken"),
            make_item("2", "Beef"),
            make_item("3", "Chicken"),
            make_item("4", "Frozen Food"),
        ];
        let groups = group_by_category(&items);

        let flattened: Vec<FoodItem> = groups
            .iter()
            .flat_map(|g| g.items.iter().cloned())
            .collect();

        assert_eq!(group_by_category(&flattened), groups);
    }

    #[test]
    fn section_id_strips_spaces() {
        assert_eq!(section_id("Baked Food"), "BakedFoodSection");
        assert_eq!(section_id("Drinks"), "DrinksSection");
    }
}
