//! Configuration loaded from environment variables.

use std::env;

use anyhow::{Context, Result};

use crate::menu::{DEFAULT_CHILD_TAG, DEFAULT_PARENT_TAG, RenderOptions};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (default: 3000).
    pub port: u16,

    /// PostgreSQL connection URL.
    pub database_url: String,

    /// Maximum database connections in pool (default: 10).
    pub database_max_connections: u32,

    /// Tag wrapping each menu level when a request names none (default: ul).
    pub menu_parent_tag: String,

    /// Tag wrapping each menu item when a request names none (default: li).
    pub menu_child_tag: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("PORT must be a valid u16")?;

        let database_url =
            env::var("DATABASE_URL").context("DATABASE_URL environment variable is required")?;

        let database_max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .context("DATABASE_MAX_CONNECTIONS must be a valid u32")?;

        let menu_parent_tag =
            env::var("MENU_PARENT_TAG").unwrap_or_else(|_| DEFAULT_PARENT_TAG.to_string());
        let menu_child_tag =
            env::var("MENU_CHILD_TAG").unwrap_or_else(|_| DEFAULT_CHILD_TAG.to_string());

        Ok(Self {
            port,
            database_url,
            database_max_connections,
            menu_parent_tag,
            menu_child_tag,
        })
    }

    /// Render options every request starts from before applying its overrides.
    pub fn render_defaults(&self) -> RenderOptions {
        RenderOptions::new()
            .parent_tag(&self.menu_parent_tag)
            .child_tag(&self.menu_child_tag)
    }
}
