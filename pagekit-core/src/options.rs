use crate::ScrollIntoViewOptions;

pub const DEFAULT_ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const DEFAULT_TOGGLE_SELECTOR: &str = ".nav-toggle";
pub const DEFAULT_NAV_PANEL_ID: &str = "navMenu";
pub const DEFAULT_OPEN_CLASS: &str = "open";
pub const ARIA_EXPANDED: &str = "aria-expanded";

/// Configuration for [`crate::initialize`].
///
/// The defaults match the markup emitted by the site's templates; a host only needs to touch
/// these when the templates change. With `feature = "serde"` a host can deserialize it from a
/// partial document (e.g. JSON); missing fields fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BehaviorOptions {
    /// Selects the in-page anchors to enhance. Queried once, at initialization.
    pub anchor_selector: String,
    /// Options passed to `scrollIntoView` when an anchor target is found.
    pub scroll: ScrollIntoViewOptions,

    /// Selects the navigation toggle button (first match wins).
    pub toggle_selector: String,
    /// Element id of the collapsible navigation panel.
    pub nav_panel_id: String,
    /// Marker class whose presence means "open". Styling is up to the page's CSS.
    pub open_class: String,
    /// Attribute kept in sync with the open state on the toggle button.
    pub expanded_attribute: String,
}

impl BehaviorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor_selector(mut self, selector: impl Into<String>) -> Self {
        self.anchor_selector = selector.into();
        self
    }

    pub fn with_scroll(mut self, scroll: ScrollIntoViewOptions) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn with_toggle_selector(mut self, selector: impl Into<String>) -> Self {
        self.toggle_selector = selector.into();
        self
    }

    pub fn with_nav_panel_id(mut self, id: impl Into<String>) -> Self {
        self.nav_panel_id = id.into();
        self
    }

    pub fn with_open_class(mut self, class: impl Into<String>) -> Self {
        self.open_class = class.into();
        self
    }

    pub fn with_expanded_attribute(mut self, name: impl Into<String>) -> Self {
        self.expanded_attribute = name.into();
        self
    }
}

impl Default for BehaviorOptions {
    fn default() -> Self {
        Self {
            anchor_selector: DEFAULT_ANCHOR_SELECTOR.to_owned(),
            scroll: ScrollIntoViewOptions::smooth(),
            toggle_selector: DEFAULT_TOGGLE_SELECTOR.to_owned(),
            nav_panel_id: DEFAULT_NAV_PANEL_ID.to_owned(),
            open_class: DEFAULT_OPEN_CLASS.to_owned(),
            expanded_attribute: ARIA_EXPANDED.to_owned(),
        }
    }
}
