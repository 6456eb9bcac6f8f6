/// What a click handler asks the host to do with the event's default action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClickOutcome {
    /// Let the browser perform its default action (e.g. the instant fragment jump).
    #[default]
    AllowDefault,
    /// The handler took over; the host must call `preventDefault()`.
    PreventDefault,
}

impl ClickOutcome {
    pub fn is_default_prevented(self) -> bool {
        self == Self::PreventDefault
    }

    /// Combines outcomes of several listeners on the same event.
    pub fn merge(self, other: Self) -> Self {
        if self.is_default_prevented() || other.is_default_prevented() {
            Self::PreventDefault
        } else {
            Self::AllowDefault
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    Auto,
    #[default]
    Smooth,
    Instant,
}

/// Alignment of the target inside the viewport along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBlock {
    Start,
    Center,
    End,
    Nearest,
}

/// Mirrors the DOM `ScrollIntoViewOptions` dictionary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollIntoViewOptions {
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
    pub inline: ScrollBlock,
}

impl ScrollIntoViewOptions {
    pub fn smooth() -> Self {
        Self::default()
    }

    pub fn with_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_block(mut self, block: ScrollBlock) -> Self {
        self.block = block;
        self
    }

    pub fn with_inline(mut self, inline: ScrollBlock) -> Self {
        self.inline = inline;
        self
    }
}

impl Default for ScrollIntoViewOptions {
    fn default() -> Self {
        // Same defaults as the DOM dictionary, except for the smooth behavior.
        Self {
            behavior: ScrollBehavior::Smooth,
            block: ScrollBlock::Start,
            inline: ScrollBlock::Nearest,
        }
    }
}

/// A lightweight, serializable snapshot of the navigation panel state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavState {
    pub open: bool,
}

impl NavState {
    /// The literal written to `aria-expanded`.
    pub fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}

/// What [`crate::initialize`] attached to the document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bindings {
    /// Number of anchors that got a smooth-scroll handler.
    pub anchors: usize,
    /// Whether both the toggle button and the panel were found and bound.
    pub nav_toggle: bool,
}
