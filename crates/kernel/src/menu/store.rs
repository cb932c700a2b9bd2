//! Data access for rendering.
//!
//! The renderer only needs two lookups: a menu by slug, and the flat item
//! list of a menu. [`PgMenuStore`] answers them from PostgreSQL,
//! [`MemoryMenuStore`] from records held in memory (fixtures, tests).

use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;
use uuid::Uuid;

use crate::config::Config;
use crate::models::{Menu, MenuItem};

/// Source of menus and their items.
#[async_trait]
pub trait MenuStore: Send + Sync {
    /// Find a menu by slug.
    async fn find_menu_by_slug(&self, slug: &str) -> Result<Option<Menu>>;

    /// All items of a menu, flat, ordered by `(order, name)`.
    async fn items_for_menu(&self, menu_id: Uuid) -> Result<Vec<MenuItem>>;
}

/// PostgreSQL-backed store.
#[derive(Debug, Clone)]
pub struct PgMenuStore {
    pool: PgPool,
}

impl PgMenuStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a connection pool sized from configuration.
    pub async fn connect(config: &Config) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .connect(&config.database_url)
            .await
            .context("failed to connect to PostgreSQL")?;

        info!(
            max_connections = config.database_max_connections,
            "PostgreSQL pool ready"
        );

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Check if the database connection is healthy.
    pub async fn is_healthy(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

#[async_trait]
impl MenuStore for PgMenuStore {
    async fn find_menu_by_slug(&self, slug: &str) -> Result<Option<Menu>> {
        Menu::find_by_slug(&self.pool, slug).await
    }

    async fn items_for_menu(&self, menu_id: Uuid) -> Result<Vec<MenuItem>> {
        MenuItem::list_by_menu(&self.pool, menu_id).await
    }
}

/// Menus and items held in memory.
///
/// Serializes as `{"menus": [...], "items": [...]}`, the layout of fixture
/// files accepted by `menubuilder render --fixture`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryMenuStore {
    #[serde(default)]
    menus: Vec<Menu>,
    #[serde(default)]
    items: Vec<MenuItem>,
}

impl MemoryMenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a menu.
    pub fn with_menu(mut self, menu: Menu) -> Self {
        self.menus.push(menu);
        self
    }

    /// Add an item.
    pub fn with_item(mut self, item: MenuItem) -> Self {
        self.items.push(item);
        self
    }

    /// Load a store from a JSON fixture file.
    ///
    /// Slugs in the file are ignored and recomputed from menu names.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read fixture {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("invalid fixture {}", path.display()))
    }

    /// Parse a store from fixture JSON.
    pub fn from_json(raw: &str) -> Result<Self> {
        let mut store: Self = serde_json::from_str(raw).context("failed to parse menu fixture")?;
        for menu in &mut store.menus {
            menu.slug = crate::models::slugify(&menu.name);
        }
        Ok(store)
    }

    pub fn menus(&self) -> &[Menu] {
        &self.menus
    }
}

#[async_trait]
impl MenuStore for MemoryMenuStore {
    async fn find_menu_by_slug(&self, slug: &str) -> Result<Option<Menu>> {
        Ok(self.menus.iter().find(|menu| menu.slug == slug).cloned())
    }

    async fn items_for_menu(&self, menu_id: Uuid) -> Result<Vec<MenuItem>> {
        let mut items: Vec<MenuItem> = self
            .items
            .iter()
            .filter(|item| item.menu_id == menu_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(&b.name)));
        Ok(items)
    }
}
