//! Menu item model.
//!
//! Items form a tree inside a menu: `parent_id = NULL` marks a top-level
//! item, every other item hangs below another item of the same menu.
//! Siblings are always ordered by `(order, name)`.
//!
//! ```sql
//! CREATE TABLE menu_item (
//!     id UUID PRIMARY KEY,
//!     menu_id UUID NOT NULL REFERENCES menu(id) ON DELETE CASCADE,
//!     parent_id UUID REFERENCES menu_item(id) ON DELETE CASCADE,
//!     "order" INTEGER NOT NULL DEFAULT 0,
//!     name TEXT NOT NULL,
//!     url TEXT,
//!     route TEXT,
//!     enabled BOOLEAN NOT NULL DEFAULT TRUE,
//!     classes TEXT NOT NULL DEFAULT '',
//!     created BIGINT NOT NULL,
//!     changed BIGINT NOT NULL
//! );
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::menu::html_escape;

fn default_true() -> bool {
    true
}

/// Menu item record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct MenuItem {
    /// Unique identifier (UUIDv7).
    pub id: Uuid,

    /// Menu this item belongs to.
    pub menu_id: Uuid,

    /// Parent item; `None` for top-level items.
    #[serde(default)]
    pub parent_id: Option<Uuid>,

    /// Sort key among siblings (lower first, ties broken by name).
    #[serde(default)]
    pub order: i32,

    /// Display label.
    pub name: String,

    /// Link target.
    #[serde(default)]
    pub url: Option<String>,

    /// Route name compared against the active route.
    #[serde(default)]
    pub route: Option<String>,

    /// Disabled items are never rendered, nor is anything below them.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Space-separated CSS classes for the item's wrapping tag.
    #[serde(default)]
    pub classes: String,

    /// Unix timestamp when created.
    #[serde(default)]
    pub created: i64,

    /// Unix timestamp when last changed.
    #[serde(default)]
    pub changed: i64,
}

/// Input for creating a menu item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMenuItem {
    pub menu_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub order: Option<i32>,
    pub name: String,
    pub url: Option<String>,
    pub route: Option<String>,
    pub enabled: Option<bool>,
    pub classes: Option<String>,
}

/// Input for updating a menu item.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMenuItem {
    pub parent_id: Option<Option<Uuid>>,
    pub order: Option<i32>,
    pub name: Option<String>,
    pub url: Option<Option<String>>,
    pub route: Option<Option<String>>,
    pub enabled: Option<bool>,
    pub classes: Option<String>,
}

impl MenuItem {
    /// Column list shared by every query returning a full record.
    pub(crate) const COLUMNS: &'static str =
        r#"id, menu_id, parent_id, "order", name, url, route, enabled, classes, created, changed"#;

    /// Build an unsaved item from creation input.
    pub fn new(input: CreateMenuItem) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            id: Uuid::now_v7(),
            menu_id: input.menu_id,
            parent_id: input.parent_id,
            order: input.order.unwrap_or(0),
            name: input.name,
            url: input.url,
            route: input.route,
            enabled: input.enabled.unwrap_or(true),
            classes: input.classes.unwrap_or_default(),
            created: now,
            changed: now,
        }
    }

    /// The item's own markup: a link when it has a URL, the bare label otherwise.
    pub fn html(&self) -> String {
        let label = html_escape(&self.name);
        match self.url.as_deref().filter(|url| !url.is_empty()) {
            Some(url) => format!("<a href='{}'>{label}</a>", html_escape(url)),
            None => label,
        }
    }

    /// Whether this item is routed to `route`.
    ///
    /// Items without a route (or with an empty one) never match.
    pub fn matches_route(&self, route: &str) -> bool {
        self.route
            .as_deref()
            .is_some_and(|own| !own.is_empty() && own == route)
    }

    /// Create a new menu item.
    pub async fn create(pool: &PgPool, input: CreateMenuItem) -> Result<Self> {
        let item = Self::new(input);

        let item = sqlx::query_as::<_, MenuItem>(&format!(
            r#"
            INSERT INTO menu_item ({columns})
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {columns}
            "#,
            columns = Self::COLUMNS
        ))
        .bind(item.id)
        .bind(item.menu_id)
        .bind(item.parent_id)
        .bind(item.order)
        .bind(&item.name)
        .bind(&item.url)
        .bind(&item.route)
        .bind(item.enabled)
        .bind(&item.classes)
        .bind(item.created)
        .bind(item.changed)
        .fetch_one(pool)
        .await
        .context("failed to create menu item")?;

        Ok(item)
    }

    /// Find a menu item by ID.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>> {
        let item = sqlx::query_as::<_, MenuItem>(&format!(
            "SELECT {} FROM menu_item WHERE id = $1",
            Self::COLUMNS
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("failed to fetch menu item by id")?;

        Ok(item)
    }

    /// All items of a menu, flat, ordered by `(order, name)`.
    pub async fn list_by_menu(pool: &PgPool, menu_id: Uuid) -> Result<Vec<Self>> {
        let items = sqlx::query_as::<_, MenuItem>(&format!(
            r#"
            SELECT {columns}
            FROM menu_item
            WHERE menu_id = $1
            ORDER BY "order" ASC, name ASC
            "#,
            columns = Self::COLUMNS
        ))
        .bind(menu_id)
        .fetch_all(pool)
        .await
        .context("failed to list menu items by menu")?;

        Ok(items)
    }

    /// Direct children of this item ordered by `(order, name)`.
    pub async fn children(&self, pool: &PgPool) -> Result<Vec<Self>> {
        let items = sqlx::query_as::<_, MenuItem>(&format!(
            r#"
            SELECT {columns}
            FROM menu_item
            WHERE parent_id = $1
            ORDER BY "order" ASC, name ASC
            "#,
            columns = Self::COLUMNS
        ))
        .bind(self.id)
        .fetch_all(pool)
        .await
        .context("failed to fetch menu item children")?;

        Ok(items)
    }

    /// Update a menu item.
    pub async fn update(pool: &PgPool, id: Uuid, input: UpdateMenuItem) -> Result<Option<Self>> {
        let Some(existing) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let now = chrono::Utc::now().timestamp();

        let parent_id = input.parent_id.unwrap_or(existing.parent_id);
        let order = input.order.unwrap_or(existing.order);
        let name = input.name.unwrap_or(existing.name);
        let url = input.url.unwrap_or(existing.url);
        let route = input.route.unwrap_or(existing.route);
        let enabled = input.enabled.unwrap_or(existing.enabled);
        let classes = input.classes.unwrap_or(existing.classes);

        let updated = sqlx::query_as::<_, MenuItem>(&format!(
            r#"
            UPDATE menu_item
            SET parent_id = $1, "order" = $2, name = $3, url = $4, route = $5,
                enabled = $6, classes = $7, changed = $8
            WHERE id = $9
            RETURNING {columns}
            "#,
            columns = Self::COLUMNS
        ))
        .bind(parent_id)
        .bind(order)
        .bind(&name)
        .bind(&url)
        .bind(&route)
        .bind(enabled)
        .bind(&classes)
        .bind(now)
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("failed to update menu item")?;

        Ok(updated)
    }

    /// Delete a menu item.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM menu_item WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .context("failed to delete menu item")?;

        Ok(result.rows_affected() > 0)
    }
}
