//! Database models.

pub mod menu;
pub mod menu_item;

pub use menu::{CreateMenu, Menu, UpdateMenu, slugify};
pub use menu_item::{CreateMenuItem, MenuItem, UpdateMenuItem};
