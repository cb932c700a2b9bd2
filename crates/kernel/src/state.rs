//! Application state shared across all handlers.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::menu::{MenuStore, PgMenuStore, RenderOptions};

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Where menus are loaded from.
    store: Arc<dyn MenuStore>,

    /// PostgreSQL store when running against a database; `None` for
    /// in-memory stores.
    postgres: Option<PgMenuStore>,

    /// Options every render request starts from.
    render_defaults: RenderOptions,
}

impl AppState {
    /// Connect to PostgreSQL and build state from configuration.
    pub async fn new(config: &Config) -> Result<Self> {
        let postgres = PgMenuStore::connect(config)
            .await
            .context("failed to create database store")?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                store: Arc::new(postgres.clone()),
                postgres: Some(postgres),
                render_defaults: config.render_defaults(),
            }),
        })
    }

    /// Build state over an arbitrary store.
    pub fn with_store(store: Arc<dyn MenuStore>, render_defaults: RenderOptions) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store,
                postgres: None,
                render_defaults,
            }),
        }
    }

    pub fn store(&self) -> &dyn MenuStore {
        self.inner.store.as_ref()
    }

    pub fn render_defaults(&self) -> &RenderOptions {
        &self.inner.render_defaults
    }

    /// Database reachability; `None` when no database is in use.
    pub async fn postgres_healthy(&self) -> Option<bool> {
        match &self.inner.postgres {
            Some(pg) => Some(pg.is_healthy().await),
            None => None,
        }
    }
}
