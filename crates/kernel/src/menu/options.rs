//! Per-call render options.

use super::tag::sanitize_tag;

/// Tag wrapping each level of a menu.
pub const DEFAULT_PARENT_TAG: &str = "ul";

/// Tag wrapping each item.
pub const DEFAULT_CHILD_TAG: &str = "li";

/// Immutable options for a single render call.
///
/// Built once per request and passed down the whole tree walk; nothing
/// about a render is stored on the menu itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    parent_tag: String,
    child_tag: String,
    parent_class: Option<String>,
    child_class: Option<String>,
    include_children: bool,
    mark_active: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            parent_tag: DEFAULT_PARENT_TAG.to_string(),
            child_tag: DEFAULT_CHILD_TAG.to_string(),
            parent_class: None,
            child_class: None,
            include_children: true,
            mark_active: true,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag wrapping the menu and every nested level.
    ///
    /// Invalid names fall back to the default.
    pub fn parent_tag(mut self, tag: &str) -> Self {
        self.parent_tag = sanitize_tag(tag).unwrap_or_else(|| DEFAULT_PARENT_TAG.to_string());
        self
    }

    /// Tag wrapping each item.
    ///
    /// Invalid names fall back to the default.
    pub fn child_tag(mut self, tag: &str) -> Self {
        self.child_tag = sanitize_tag(tag).unwrap_or_else(|| DEFAULT_CHILD_TAG.to_string());
        self
    }

    /// Classes for the outermost wrapper.
    pub fn parent_class(mut self, class: impl Into<String>) -> Self {
        self.parent_class = Some(class.into());
        self
    }

    /// Classes for every nested level's wrapper.
    pub fn child_class(mut self, class: impl Into<String>) -> Self {
        self.child_class = Some(class.into());
        self
    }

    pub fn include_children(mut self, include: bool) -> Self {
        self.include_children = include;
        self
    }

    pub fn mark_active(mut self, mark: bool) -> Self {
        self.mark_active = mark;
        self
    }

    pub fn parent_tag_name(&self) -> &str {
        &self.parent_tag
    }

    pub fn child_tag_name(&self) -> &str {
        &self.child_tag
    }

    pub fn parent_class_value(&self) -> Option<&str> {
        self.parent_class.as_deref()
    }

    pub fn child_class_value(&self) -> Option<&str> {
        self.child_class.as_deref()
    }

    pub fn includes_children(&self) -> bool {
        self.include_children
    }

    pub fn marks_active(&self) -> bool {
        self.mark_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.parent_tag_name(), "ul");
        assert_eq!(options.child_tag_name(), "li");
        assert_eq!(options.parent_class_value(), None);
        assert_eq!(options.child_class_value(), None);
        assert!(options.includes_children());
        assert!(options.marks_active());
    }

    #[test]
    fn builder_overrides() {
        let options = RenderOptions::new()
            .parent_tag("nav")
            .child_tag("div")
            .parent_class("menu")
            .child_class("submenu")
            .include_children(false)
            .mark_active(false);

        assert_eq!(options.parent_tag_name(), "nav");
        assert_eq!(options.child_tag_name(), "div");
        assert_eq!(options.parent_class_value(), Some("menu"));
        assert_eq!(options.child_class_value(), Some("submenu"));
        assert!(!options.includes_children());
        assert!(!options.marks_active());
    }

    #[test]
    fn invalid_tags_fall_back() {
        let options = RenderOptions::new().parent_tag("<!>").child_tag("   ");
        assert_eq!(options.parent_tag_name(), DEFAULT_PARENT_TAG);
        assert_eq!(options.child_tag_name(), DEFAULT_CHILD_TAG);
    }
}
