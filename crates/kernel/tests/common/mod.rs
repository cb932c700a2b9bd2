#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common helpers for integration tests.
//!
//! Everything runs against [`MemoryMenuStore`], so no database is needed.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

use menubuilder_kernel::AppState;
use menubuilder_kernel::menu::{MemoryMenuStore, RenderOptions};
use menubuilder_kernel::models::{CreateMenuItem, Menu, MenuItem};
use menubuilder_kernel::routes;

/// Builder for a menu item fixture.
pub struct ItemFixture {
    item: MenuItem,
}

/// Start an enabled, top-level item of `menu` with the given sort order.
pub fn item(menu: &Menu, name: &str, order: i32) -> ItemFixture {
    ItemFixture {
        item: MenuItem::new(CreateMenuItem {
            menu_id: menu.id,
            parent_id: None,
            order: Some(order),
            name: name.to_string(),
            url: None,
            route: None,
            enabled: None,
            classes: None,
        }),
    }
}

impl ItemFixture {
    pub fn route(mut self, route: &str) -> Self {
        self.item.route = Some(route.to_string());
        self
    }

    pub fn url(mut self, url: &str) -> Self {
        self.item.url = Some(url.to_string());
        self
    }

    pub fn classes(mut self, classes: &str) -> Self {
        self.item.classes = classes.to_string();
        self
    }

    pub fn disabled(mut self) -> Self {
        self.item.enabled = false;
        self
    }

    pub fn under(mut self, parent: &MenuItem) -> Self {
        self.item.parent_id = Some(parent.id);
        self
    }

    pub fn build(self) -> MenuItem {
        self.item
    }
}

/// Store holding `menu` and `items`.
pub fn store_with(menu: &Menu, items: Vec<MenuItem>) -> MemoryMenuStore {
    items
        .into_iter()
        .fold(MemoryMenuStore::new().with_menu(menu.clone()), |store, item| {
            store.with_item(item)
        })
}

/// Router over an in-memory store with default render options.
pub fn app(store: MemoryMenuStore) -> Router {
    routes::router(AppState::with_store(Arc::new(store), RenderOptions::default()))
}

/// GET `uri` and return status plus body text.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .expect("Failed to send request");

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// A random id that belongs to nothing.
pub fn stray_id() -> Uuid {
    Uuid::now_v7()
}
