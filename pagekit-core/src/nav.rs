use crate::{BehaviorOptions, ClickOutcome, Dom, NavState, Result};

/// The mobile navigation toggle: a button that flips an open marker class on a panel and keeps
/// the button's `aria-expanded` attribute in lock-step.
///
/// This type does not hold any state of its own; the marker class on the panel is the source of
/// truth, so each toggle simply inverts whatever is currently there.
#[derive(Clone)]
pub struct NavToggle<D: Dom> {
    doc: D,
    button: D::Element,
    panel: D::Element,
    open_class: String,
    expanded_attribute: String,
}

impl<D: Dom> NavToggle<D> {
    /// Looks up the toggle button and the panel.
    ///
    /// Returns `Ok(None)` when either element is absent (or the configured button selector does
    /// not parse): the toggle is simply not present on this page.
    pub fn locate(doc: &D, options: &BehaviorOptions) -> Result<Option<Self>> {
        let button = match doc.query_selector(&options.toggle_selector) {
            Ok(button) => button,
            Err(_err) => {
                pwarn!(error = %_err, "nav toggle selector is invalid; toggle disabled");
                None
            }
        };
        let panel = doc.get_element_by_id(&options.nav_panel_id);

        let (Some(button), Some(panel)) = (button, panel) else {
            pdebug!("nav toggle or panel absent; toggle not bound");
            return Ok(None);
        };

        Ok(Some(Self {
            doc: doc.clone(),
            button,
            panel,
            open_class: options.open_class.clone(),
            expanded_attribute: options.expanded_attribute.clone(),
        }))
    }

    pub fn button(&self) -> &D::Element {
        &self.button
    }

    pub fn panel(&self) -> &D::Element {
        &self.panel
    }

    pub fn state(&self) -> NavState {
        NavState {
            open: self.doc.has_class(&self.panel, &self.open_class),
        }
    }

    /// Flips the panel and writes the new state to the button's expanded attribute.
    ///
    /// The attribute is derived from the class toggle's result, never read back. If the
    /// attribute cannot be written, the class toggle is undone so both stay in agreement.
    pub fn toggle(&self) -> Result<NavState> {
        let open = self.doc.toggle_class(&self.panel, &self.open_class)?;
        let state = NavState { open };
        if let Err(err) =
            self.doc
                .set_attribute(&self.button, &self.expanded_attribute, state.aria_expanded())
        {
            self.doc.toggle_class(&self.panel, &self.open_class)?;
            return Err(err);
        }
        ptrace!(open, "nav toggled");
        Ok(state)
    }

    /// Attaches [`Self::toggle`] to the button's click event.
    pub fn bind(self) -> Result<()> {
        let button = self.button.clone();
        let doc = self.doc.clone();
        doc.add_click_listener(
            &button,
            Box::new(move || {
                if let Err(_err) = self.toggle() {
                    pwarn!(error = %_err, "nav toggle failed");
                }
                ClickOutcome::AllowDefault
            }),
        )
    }
}

/// Locates and binds the navigation toggle. Returns whether it was bound.
pub fn bind_nav_toggle<D: Dom>(doc: &D, options: &BehaviorOptions) -> Result<bool> {
    match NavToggle::locate(doc, options)? {
        Some(toggle) => {
            toggle.bind()?;
            pdebug!("nav toggle bound");
            Ok(true)
        }
        None => Ok(false),
    }
}
