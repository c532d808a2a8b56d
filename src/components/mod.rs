//! UI Components
//!
//! Reusable Leptos components.

mod category_modal;
mod category_table;
mod delete_confirm_button;
mod food_category_display;
mod food_item_card;
mod nav_bar;
mod toast;

pub use category_modal::CategoryModal;
pub use category_table::CategoryTable;
pub use delete_confirm_button::DeleteConfirmButton;
pub use food_category_display::FoodCategoryDisplay;
pub use food_item_card::FoodItemCard;
pub use nav_bar::{NavBar, Page};
pub use toast::Toasts;
