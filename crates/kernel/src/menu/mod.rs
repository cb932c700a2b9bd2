//! Navigation menu rendering.
//!
//! A menu's items are loaded through a [`MenuStore`], assembled into a
//! [`MenuTree`] ordered by `(order, name)`, and rendered as nested tags with
//! the active path marked:
//! - [`RenderOptions`] carries tags, classes and flags for one call
//! - the active route is passed explicitly to [`MenuTree::render`]
//! - disabled items and everything below them are skipped

mod options;
mod store;
mod tag;
mod tree;

pub use options::{DEFAULT_CHILD_TAG, DEFAULT_PARENT_TAG, RenderOptions};
pub use store::{MemoryMenuStore, MenuStore, PgMenuStore};
pub use tag::{ACTIVE_CLASS, close_tag, html_escape, open_tag};
pub use tree::{MenuNode, MenuTree};
