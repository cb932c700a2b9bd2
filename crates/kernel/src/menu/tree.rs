//! Menu tree assembly and rendering.
//!
//! A flat list of items is grouped by parent into a tree, then walked
//! depth-first to produce nested markup:
//!
//! ```text
//! <ul class='parent_class'>
//!   <li class='active classes'>ITEM HTML
//!     <ul class='child_class'> ...children... </ul>
//!   </li>
//! </ul>
//! ```
//!
//! (whitespace added for readability; the output contains none)

use std::collections::HashMap;

use uuid::Uuid;

use super::options::RenderOptions;
use super::tag::{close_tag, open_tag};
use crate::models::MenuItem;

/// An item together with its ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNode {
    pub item: MenuItem,
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    /// Active when routed to `active_route` itself, or when a direct child is.
    ///
    /// Only items with a route of their own can be active, so unrouted
    /// grouping items stay unmarked. Grandchildren are not consulted.
    pub fn is_active(&self, active_route: &str) -> bool {
        if self.item.route.as_deref().is_none_or(str::is_empty) {
            return false;
        }

        self.item.matches_route(active_route)
            || self
                .children
                .iter()
                .any(|child| child.item.matches_route(active_route))
    }

    fn has_enabled_children(&self) -> bool {
        self.children.iter().any(|child| child.item.enabled)
    }
}

/// Ordered forest of a menu's items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuTree {
    roots: Vec<MenuNode>,
}

impl MenuTree {
    /// Build the tree from a flat item list.
    ///
    /// Items with no parent become roots. Every sibling set is sorted by
    /// `(order, name)` regardless of input order. Items whose parent is not
    /// in the list are unreachable and dropped.
    pub fn from_items(items: Vec<MenuItem>) -> Self {
        let mut by_parent: HashMap<Option<Uuid>, Vec<MenuItem>> = HashMap::new();
        for item in items {
            by_parent.entry(item.parent_id).or_default().push(item);
        }

        let roots = build_level(&mut by_parent, None);

        let orphans: usize = by_parent.values().map(Vec::len).sum();
        if orphans > 0 {
            tracing::debug!(orphans, "dropped menu items unreachable from a root");
        }

        Self { roots }
    }

    pub fn roots(&self) -> &[MenuNode] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Render the whole tree wrapped in one parent tag.
    ///
    /// Never fails: an empty tree yields an empty wrapper, items without a
    /// route are simply never active.
    pub fn render(&self, options: &RenderOptions, active_route: Option<&str>) -> String {
        let mut html = open_tag(options.parent_tag_name(), options.parent_class_value(), false);
        render_nodes(&mut html, &self.roots, options, active_route);
        html.push_str(&close_tag(options.parent_tag_name()));
        html
    }
}

/// Take the children of `parent` out of `by_parent`, sorted, with their subtrees.
///
/// Removing each level as it is consumed means an item is placed at most once.
fn build_level(
    by_parent: &mut HashMap<Option<Uuid>, Vec<MenuItem>>,
    parent: Option<Uuid>,
) -> Vec<MenuNode> {
    let Some(mut items) = by_parent.remove(&parent) else {
        return Vec::new();
    };
    items.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(&b.name)));

    items
        .into_iter()
        .map(|item| {
            let children = build_level(by_parent, Some(item.id));
            MenuNode { item, children }
        })
        .collect()
}

fn render_nodes(
    html: &mut String,
    nodes: &[MenuNode],
    options: &RenderOptions,
    active_route: Option<&str>,
) {
    for node in nodes.iter().filter(|node| node.item.enabled) {
        let active =
            options.marks_active() && active_route.is_some_and(|route| node.is_active(route));

        html.push_str(&open_tag(
            options.child_tag_name(),
            Some(node.item.classes.as_str()),
            active,
        ));
        html.push_str(&node.item.html());

        if options.includes_children() && node.has_enabled_children() {
            html.push_str(&open_tag(
                options.parent_tag_name(),
                options.child_class_value(),
                false,
            ));
            render_nodes(html, &node.children, options, active_route);
            html.push_str(&close_tag(options.parent_tag_name()));
        }

        html.push_str(&close_tag(options.child_tag_name()));
    }
}
