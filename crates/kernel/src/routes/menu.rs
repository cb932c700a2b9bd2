//! Menu rendering endpoint.
//!
//! `GET /menu/{slug}` returns the menu as nested HTML. The active route and
//! any tag/class overrides come from the query string; everything not given
//! falls back to the configured defaults.

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::response::Html;
use axum::routing::get;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::menu::RenderOptions;
use crate::state::AppState;

/// Query-string overrides for a render.
#[derive(Debug, Default, Deserialize)]
pub struct RenderQuery {
    /// Name of the route currently being served.
    pub route: Option<String>,
    pub parent_tag: Option<String>,
    pub child_tag: Option<String>,
    pub parent_class: Option<String>,
    pub child_class: Option<String>,
    pub include_children: Option<bool>,
    pub mark_active: Option<bool>,
}

impl RenderQuery {
    /// Layer these overrides on top of `defaults`.
    pub fn apply(&self, defaults: &RenderOptions) -> RenderOptions {
        let mut options = defaults.clone();
        if let Some(tag) = &self.parent_tag {
            options = options.parent_tag(tag);
        }
        if let Some(tag) = &self.child_tag {
            options = options.child_tag(tag);
        }
        if let Some(class) = &self.parent_class {
            options = options.parent_class(class.as_str());
        }
        if let Some(class) = &self.child_class {
            options = options.child_class(class.as_str());
        }
        if let Some(include) = self.include_children {
            options = options.include_children(include);
        }
        if let Some(mark) = self.mark_active {
            options = options.mark_active(mark);
        }
        options
    }
}

async fn render_menu(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<RenderQuery>,
) -> AppResult<Html<String>> {
    let menu = state
        .store()
        .find_menu_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::MenuNotFound(slug.clone()))?;

    let options = query.apply(state.render_defaults());
    let html = menu
        .render(state.store(), &options, query.route.as_deref())
        .await?;

    Ok(Html(html))
}

/// Create the menu router.
pub fn router() -> Router<AppState> {
    Router::new().route("/menu/{slug}", get(render_menu))
}
