//! Menu model.
//!
//! A menu is the root aggregate of a navigation tree. Its items live in
//! `menu_item`; the menu itself only carries a display name and the slug
//! derived from it.
//!
//! ```sql
//! CREATE TABLE menu (
//!     id UUID PRIMARY KEY,
//!     name TEXT NOT NULL,
//!     slug TEXT NOT NULL,
//!     created BIGINT NOT NULL,
//!     changed BIGINT NOT NULL
//! );
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use super::menu_item::MenuItem;
use crate::menu::{MenuStore, MenuTree, RenderOptions};

/// Convert a menu name into its slug.
///
/// Lowercases, turns every run of non-alphanumeric characters into a single
/// hyphen, and drops leading/trailing hyphens.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Menu record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Menu {
    /// Unique identifier (UUIDv7).
    pub id: Uuid,

    /// Display name.
    pub name: String,

    /// Slug recomputed from `name` on every save.
    #[serde(default)]
    pub slug: String,

    /// Unix timestamp when created.
    #[serde(default)]
    pub created: i64,

    /// Unix timestamp when last changed.
    #[serde(default)]
    pub changed: i64,
}

/// Input for creating a menu.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMenu {
    pub name: String,
}

/// Input for updating a menu.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMenu {
    pub name: Option<String>,
}

const MENU_COLUMNS: &str = "id, name, slug, created, changed";

impl Menu {
    /// Build an unsaved menu with a fresh id and derived slug.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let now = chrono::Utc::now().timestamp();
        Self {
            id: Uuid::now_v7(),
            slug: slugify(&name),
            name,
            created: now,
            changed: now,
        }
    }

    /// Create a new menu.
    pub async fn create(pool: &PgPool, input: CreateMenu) -> Result<Self> {
        let menu = Self::new(input.name);

        let menu = sqlx::query_as::<_, Menu>(&format!(
            "INSERT INTO menu ({MENU_COLUMNS}) VALUES ($1, $2, $3, $4, $5) RETURNING {MENU_COLUMNS}"
        ))
        .bind(menu.id)
        .bind(&menu.name)
        .bind(&menu.slug)
        .bind(menu.created)
        .bind(menu.changed)
        .fetch_one(pool)
        .await
        .context("failed to create menu")?;

        Ok(menu)
    }

    /// Find a menu by ID.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>> {
        let menu = sqlx::query_as::<_, Menu>(&format!(
            "SELECT {MENU_COLUMNS} FROM menu WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("failed to fetch menu by id")?;

        Ok(menu)
    }

    /// Find a menu by slug.
    ///
    /// Slugs are not unique; the oldest menu wins.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Self>> {
        let menu = sqlx::query_as::<_, Menu>(&format!(
            "SELECT {MENU_COLUMNS} FROM menu WHERE slug = $1 ORDER BY created ASC, id ASC LIMIT 1"
        ))
        .bind(slug)
        .fetch_optional(pool)
        .await
        .context("failed to fetch menu by slug")?;

        Ok(menu)
    }

    /// List all menus ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>> {
        let menus = sqlx::query_as::<_, Menu>(&format!(
            "SELECT {MENU_COLUMNS} FROM menu ORDER BY name ASC"
        ))
        .fetch_all(pool)
        .await
        .context("failed to list menus")?;

        Ok(menus)
    }

    /// Update a menu, recomputing its slug.
    pub async fn update(pool: &PgPool, id: Uuid, input: UpdateMenu) -> Result<Option<Self>> {
        let Some(existing) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let now = chrono::Utc::now().timestamp();

        let name = input.name.unwrap_or(existing.name);
        let slug = slugify(&name);

        let updated = sqlx::query_as::<_, Menu>(&format!(
            "UPDATE menu SET name = $1, slug = $2, changed = $3 WHERE id = $4 RETURNING {MENU_COLUMNS}"
        ))
        .bind(&name)
        .bind(&slug)
        .bind(now)
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("failed to update menu")?;

        Ok(updated)
    }

    /// Delete a menu. Its items are left to the database's foreign keys.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM menu WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .context("failed to delete menu")?;

        Ok(result.rows_affected() > 0)
    }

    /// Every item of this menu, enabled or not, ordered by `(order, name)`.
    pub async fn items(&self, pool: &PgPool) -> Result<Vec<MenuItem>> {
        MenuItem::list_by_menu(pool, self.id).await
    }

    /// Top-level items of this menu, enabled or not, ordered by `(order, name)`.
    ///
    /// This is the list editors pick parents from.
    pub async fn top_level_items(&self, pool: &PgPool) -> Result<Vec<MenuItem>> {
        let items = sqlx::query_as::<_, MenuItem>(&format!(
            r#"
            SELECT {columns}
            FROM menu_item
            WHERE menu_id = $1 AND parent_id IS NULL
            ORDER BY "order" ASC, name ASC
            "#,
            columns = MenuItem::COLUMNS
        ))
        .bind(self.id)
        .fetch_all(pool)
        .await
        .context("failed to fetch top-level menu items")?;

        Ok(items)
    }

    /// Load this menu's items from `store` and render them as nested markup.
    ///
    /// Only the store can fail; rendering itself always produces output.
    pub async fn render(
        &self,
        store: &dyn MenuStore,
        options: &RenderOptions,
        active_route: Option<&str>,
    ) -> Result<String> {
        let items = store.items_for_menu(self.id).await?;
        let tree = MenuTree::from_items(items);

        tracing::debug!(
            menu = %self.slug,
            roots = tree.roots().len(),
            active_route = active_route.unwrap_or(""),
            "rendering menu"
        );

        Ok(tree.render(options, active_route))
    }
}
