//! UI Components
//!
//! Leptos components for the product views.

mod delete_confirm_button;
mod item_card;
mod item_form;
mod item_list;

pub use delete_confirm_button::DeleteConfirmButton;
pub use item_card::ItemCard;
pub use item_form::ItemForm;
pub use item_list::ItemList;
