#![forbid(unsafe_code)]

//! Popover configuration.
//!
//! A [`PopoverConfig`] is assembled with builder methods, handed to the
//! popover at construction, and owned by it for the component's lifetime.
//! Button behavior is carried as plain function values on the descriptors,
//! not through a type hierarchy.

use crate::collect::FormData;
use crate::schema::ContentItem;

/// The side of the trigger the overlay is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    Top,
    Right,
    #[default]
    Bottom,
    Left,
}

/// How the popover opens and closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerMode {
    /// Activation on the trigger toggles; activation anywhere else dismisses.
    #[default]
    Click,
    /// Pointer entering the trigger shows, leaving hides.
    Hover,
}

/// What a footer button does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Collect the form and hand the result to the button's callback.
    Submit,
    /// Close the overlay, then run the button's callback.
    Hide,
}

/// Identity and cosmetics of a footer button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonDescriptor {
    pub id: String,
    pub label: String,
    pub class: Option<String>,
    pub action: ButtonAction,
}

impl ButtonDescriptor {
    /// A submit-action button.
    pub fn submit(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            class: None,
            action: ButtonAction::Submit,
        }
    }

    /// A hide-action button.
    pub fn hide(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            class: None,
            action: ButtonAction::Hide,
        }
    }

    /// Set the cosmetic class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

/// Callback invoked with the collected form values.
pub type SubmitCallback = Box<dyn FnMut(&FormData)>;

/// Callback invoked after a cancel activation.
pub type CancelCallback = Box<dyn FnMut()>;

/// The submit button and its callback.
pub struct SubmitButton {
    pub descriptor: ButtonDescriptor,
    pub(crate) on_submit: Option<SubmitCallback>,
}

impl SubmitButton {
    /// Create a submit button from a descriptor.
    pub fn new(descriptor: ButtonDescriptor) -> Self {
        Self {
            descriptor,
            on_submit: None,
        }
    }

    /// Set the callback receiving the collected values.
    pub fn on_submit(mut self, f: impl FnMut(&FormData) + 'static) -> Self {
        self.on_submit = Some(Box::new(f));
        self
    }
}

/// The cancel button and its callback.
pub struct CancelButton {
    pub descriptor: ButtonDescriptor,
    pub(crate) on_cancel: Option<CancelCallback>,
}

impl CancelButton {
    /// Create a cancel button from a descriptor.
    pub fn new(descriptor: ButtonDescriptor) -> Self {
        Self {
            descriptor,
            on_cancel: None,
        }
    }

    /// Set the callback run after the cancel action.
    pub fn on_cancel(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_cancel = Some(Box::new(f));
        self
    }
}

/// Cosmetic overrides for one overlay region: inline styles and a class,
/// applied verbatim into the generated fragment, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegionStyle {
    pub styles: Vec<(String, String)>,
    pub class: Option<String>,
}

impl RegionStyle {
    /// An empty override.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an inline style declaration.
    pub fn style(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.push((name.into(), value.into()));
        self
    }

    /// Set the region class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Check if there is nothing to apply.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty() && self.class.is_none()
    }
}

/// Per-region cosmetic overrides for the overlay chrome.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Chrome {
    pub popover: RegionStyle,
    pub arrow: RegionStyle,
    pub header: RegionStyle,
    pub body: RegionStyle,
    pub footer: RegionStyle,
}

/// Immutable popover configuration.
pub struct PopoverConfig {
    pub placement: Placement,
    pub trigger: TriggerMode,
    pub content: Vec<ContentItem>,
    pub submit: Option<SubmitButton>,
    pub cancel: Option<CancelButton>,
    pub chrome: Chrome,
}

impl PopoverConfig {
    /// Create a configuration with the given content schema and defaults
    /// (`Placement::Bottom`, `TriggerMode::Click`, no buttons, no chrome).
    pub fn new(content: Vec<ContentItem>) -> Self {
        Self {
            placement: Placement::default(),
            trigger: TriggerMode::default(),
            content,
            submit: None,
            cancel: None,
            chrome: Chrome::default(),
        }
    }

    /// Set the placement.
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Set the trigger mode.
    pub fn trigger(mut self, trigger: TriggerMode) -> Self {
        self.trigger = trigger;
        self
    }

    /// Set the submit button.
    pub fn submit(mut self, submit: SubmitButton) -> Self {
        self.submit = Some(submit);
        self
    }

    /// Set the cancel button.
    pub fn cancel(mut self, cancel: CancelButton) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Set the cosmetic overrides.
    pub fn chrome(mut self, chrome: Chrome) -> Self {
        self.chrome = chrome;
        self
    }
}
