#![allow(clippy::unwrap_used, clippy::expect_used)]
//! HTTP surface tests using the real router over an in-memory store.

use axum::http::StatusCode;
use menubuilder_kernel::models::Menu;

mod common;
use common::{app, get, item, store_with};

fn main_menu_app() -> axum::Router {
    let menu = Menu::new("Main Menu");
    let home = item(&menu, "Home", 0).route("home").url("/").build();
    let blog = item(&menu, "Blog", 1).route("blog").build();
    let post = item(&menu, "Post", 0).under(&blog).route("blog.post").build();
    app(store_with(&menu, vec![home, blog, post]))
}

#[tokio::test]
async fn renders_menu_by_slug() {
    let (status, body) = get(&main_menu_app(), "/menu/main-menu?route=home").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        "<ul><li class='active'><a href='/'>Home</a></li>\
         <li>Blog<ul><li>Post</li></ul></li></ul>"
    );
}

#[tokio::test]
async fn query_overrides_tags_and_flags() {
    let (status, body) = get(
        &main_menu_app(),
        "/menu/main-menu?route=blog.post&parent_tag=nav&child_tag=div&parent_class=top&include_children=false",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        "<nav class='top'><div><a href='/'>Home</a></div>\
         <div class='active'>Blog</div></nav>"
    );
}

#[tokio::test]
async fn mark_active_false_disables_active_class() {
    let (_, body) = get(&main_menu_app(), "/menu/main-menu?route=home&mark_active=false").await;
    assert!(!body.contains("active"));
}

#[tokio::test]
async fn unknown_slug_is_not_found() {
    let (status, body) = get(&main_menu_app(), "/menu/footer").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "menu not found: footer");
}

#[tokio::test]
async fn health_without_database() {
    let (status, body) = get(&main_menu_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert!(json["postgres"].is_null());
}
