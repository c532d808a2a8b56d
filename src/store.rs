//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The `store_*`
//! helpers are the only write paths into the shared lists; each commits one
//! reconciliation step from the pure functions below.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{CartLine, Category, FoodItem};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Category list, mirror of the admin resource
    pub categories: Vec<Category>,
    /// Food item catalog for the menu page
    pub food_items: Vec<FoodItem>,
    /// Shopping cart, one line per distinct item
    pub cart: Vec<CartLine>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the category list with the server's list
pub fn store_replace_categories(store: &AppStore, categories: Vec<Category>) {
    *store.categories().write() = categories;
}

/// Append a freshly created category to the store
pub fn store_append_category(store: &AppStore, created: Category) {
    append_category(&mut store.categories().write(), created);
}

/// Rename a category in the store by ID
pub fn store_rename_category(store: &AppStore, id: &str, name: &str) {
    rename_category(&mut store.categories().write(), id, name);
}

/// Remove a category from the store by ID
pub fn store_remove_category(store: &AppStore, id: &str) {
    remove_category(&mut store.categories().write(), id);
}

/// Replace the food item catalog
pub fn store_replace_food_items(store: &AppStore, items: Vec<FoodItem>) {
    *store.food_items().write() = items;
}

/// Put one unit of an item into the cart
pub fn store_add_to_cart(store: &AppStore, item_id: &str) {
    add_to_cart(&mut store.cart().write(), item_id);
}

// ========================
// Reconciliation Rules
// ========================
//
// Pure list edits, applied only after the matching remote call succeeded.

/// Append the server-returned record. A new category cannot have items yet,
/// so the count is seeded to zero whatever the payload said.
pub(crate) fn append_category(list: &mut Vec<Category>, created: Category) {
    list.push(Category {
        item_count: 0,
        ..created
    });
}

/// Rewrite the name of the entry with `id`. Returns false when no entry
/// matches, leaving the list untouched.
pub(crate) fn rename_category(list: &mut [Category], id: &str, name: &str) -> bool {
    match list.iter_mut().find(|c| c.id == id) {
        Some(category) => {
            category.name = name.to_string();
            true
        }
        None => false,
    }
}

/// Drop the entry with `id`; a missing id is a no-op, not an error.
pub(crate) fn remove_category(list: &mut Vec<Category>, id: &str) {
    list.retain(|c| c.id != id);
}

/// Bump the quantity of an existing cart line, or open a new one.
pub(crate) fn add_to_cart(cart: &mut Vec<CartLine>, item_id: &str) {
    match cart.iter_mut().find(|line| line.item_id == item_id) {
        Some(line) => line.quantity += 1,
        None => cart.push(CartLine {
            item_id: item_id.to_string(),
            quantity: 1,
        }),
    }
}

/// Total number of units across the cart, for the nav badge.
pub fn cart_total(cart: &[CartLine]) -> u32 {
    cart.iter().map(|line| line.quantity).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_category(id: &str, name: &str, item_count: u32) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            item_count,
        }
    }

    #[test]
    fn append_seeds_a_zero_count_at_the_tail() {
        let mut list = vec![make_category("c0", "Starters", 4)];

        append_category(&mut list, make_category("c1", "Drinks", 9));

        assert_eq!(list.len(), 2);
        assert_eq!(list[0], make_category("c0", "Starters", 4));
        assert_eq!(list[1], make_category("c1", "Drinks", 0));
    }

    #[test]
    fn rename_touches_only_the_matching_entry() {
        let mut list = vec![
            make_category("c1", "Drinks", 3),
            make_category("c2", "Mains", 7),
        ];

        assert!(rename_category(&mut list, "c1", "Beverages"));

        assert_eq!(list[0], make_category("c1", "Beverages", 3));
        assert_eq!(list[1], make_category("c2", "Mains", 7));
    }

    #[test]
    fn rename_with_an_unknown_id_changes_nothing() {
        let mut list = vec![make_category("c1", "Drinks", 3)];

        assert!(!rename_category(&mut list, "missing", "Beverages"));

        assert_eq!(list, vec![make_category("c1", "Drinks", 3)]);
    }

    #[test]
    fn remove_deletes_exactly_the_matching_entry() {
        let mut list = vec![
            make_category("c1", "Drinks", 3),
            make_category("c2", "Mains", 7),
        ];

        remove_category(&mut list, "c1");

        assert_eq!(list, vec![make_category("c2", "Mains", 7)]);
    }

    #[test]
    fn remove_with_an_unknown_id_is_a_noop() {
        let mut list = vec![make_category("c1", "Drinks", 3)];

        remove_category(&mut list, "missing");

        assert_eq!(list, vec![make_category("c1", "Drinks", 3)]);
    }

    #[test]
    fn cart_aggregates_quantity_per_item() {
        let mut cart = Vec::new();

        add_to_cart(&mut cart, "f1");
        add_to_cart(&mut cart, "f2");
        add_to_cart(&mut cart, "f1");

        assert_eq!(
            cart,
            vec![
                CartLine {
                    item_id: "f1".to_string(),
                    quantity: 2
                },
                CartLine {
                    item_id: "f2".to_string(),
                    quantity: 1
                },
            ]
        );
        assert_eq!(cart_total(&cart), 3);
    }
}
