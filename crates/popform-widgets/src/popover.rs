#![forbid(unsafe_code)]

//! The popover component.
//!
//! Ties the pipeline together: lazy single build (validate, render, mount),
//! anchored positioning on every show, visibility toggling, and button
//! actions. The host application pumps pointer events into
//! [`Popover::handle_event`]; the popover decides what each activation means
//! from the trigger and overlay bounding boxes.
//!
//! Within one activation the ordering is fixed: build (if needed) completes
//! before positioning, and positioning completes before the overlay becomes
//! visible.

use std::fmt;

use popform_core::event::{PointerEvent, PointerKind};
use popform_core::geometry::Point;
use popform_core::logging::{debug, error, warn};
use popform_dom::{ElementId, Host};
use regex::Regex;

use crate::collect::{FormData, collect};
use crate::config::{ButtonAction, PopoverConfig, TriggerMode};
use crate::position::anchored_position;
use crate::render::build_overlay;
use crate::schema::ContentItem;
use crate::validate::{SchemaViolation, validate};

/// Lifecycle phase of the overlay.
///
/// The overlay is built at most once: `Unbuilt` is left on the first
/// successful build and never re-entered. Afterwards the phase only
/// alternates between `Hidden` and `Visible`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayPhase {
    /// No overlay exists yet; nothing has been validated or rendered.
    #[default]
    Unbuilt,
    /// The overlay is mounted but not shown.
    Hidden,
    /// The overlay is mounted, positioned, and shown.
    Visible,
}

/// What a pointer event did to the popover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The event was not for this popover.
    Ignored,
    /// The overlay became visible.
    Shown,
    /// The overlay was hidden by a trigger toggle or hover leave.
    Hidden,
    /// A visible overlay was hidden by an outside activation.
    Dismissed,
    /// The submit button ran; values were collected and handed over.
    Submitted,
    /// The cancel button ran.
    Cancelled,
    /// The activation landed inside the overlay without hitting a button.
    Inside,
    /// A trigger activation could not build the overlay (invalid schema).
    BuildFailed,
}

impl Outcome {
    /// Whether the popover consumed the event.
    ///
    /// Consumed events must not reach the outside-dismissal path; this is
    /// what keeps an opening click from immediately closing the overlay.
    #[must_use]
    pub const fn is_consumed(&self) -> bool {
        !matches!(self, Self::Ignored | Self::Dismissed)
    }
}

/// Construction failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopoverError {
    /// The trigger selector resolved to no element in the host document.
    TriggerNotFound(String),
}

impl fmt::Display for PopoverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TriggerNotFound(selector) => {
                write!(f, "element not found for selector: {selector}")
            }
        }
    }
}

impl std::error::Error for PopoverError {}

/// An anchored, schema-driven form overlay bound to one trigger element.
pub struct Popover {
    config: PopoverConfig,
    trigger: ElementId,
    overlay: Option<ElementId>,
    phase: OverlayPhase,
    hovering: bool,
    violations: Vec<SchemaViolation>,
}

impl Popover {
    /// Bind a popover to the element the selector resolves to.
    ///
    /// Accepts a bare identifier or an `#id` selector. Fails if the host
    /// document has no such element; the popover never creates its trigger.
    pub fn attach<H: Host>(
        host: &H,
        selector: &str,
        config: PopoverConfig,
    ) -> Result<Self, PopoverError> {
        let id = selector.strip_prefix('#').unwrap_or(selector);
        let trigger = host
            .element_by_id(id)
            .ok_or_else(|| PopoverError::TriggerNotFound(selector.to_string()))?;
        Ok(Self {
            config,
            trigger,
            overlay: None,
            phase: OverlayPhase::Unbuilt,
            hovering: false,
            violations: Vec::new(),
        })
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    /// Whether the overlay is currently shown.
    pub fn is_visible(&self) -> bool {
        self.phase == OverlayPhase::Visible
    }

    /// Whether the overlay has been built.
    pub fn is_built(&self) -> bool {
        self.phase != OverlayPhase::Unbuilt
    }

    /// The trigger element handle.
    pub fn trigger_element(&self) -> ElementId {
        self.trigger
    }

    /// The mounted overlay handle, once built.
    pub fn overlay_element(&self) -> Option<ElementId> {
        self.overlay
    }

    /// Schema violations from the most recent failed build attempt.
    pub fn violations(&self) -> &[SchemaViolation] {
        &self.violations
    }

    /// Route a pointer event through the popover.
    ///
    /// Standalone wiring: trigger and overlay activations are handled first;
    /// an unconsumed activation then acts as the document-level dismissal
    /// for a visible click-mode overlay. Instances sharing a page should go
    /// through [`crate::dismiss::PopoverGroup`] instead, which centralizes
    /// that second step.
    pub fn handle_event<H: Host>(&mut self, host: &mut H, event: &PointerEvent) -> Outcome {
        let outcome = self.route_event(host, event);
        if outcome == Outcome::Ignored
            && self.config.trigger == TriggerMode::Click
            && event.is_activation()
            && self.is_visible()
        {
            self.dismiss(host);
            return Outcome::Dismissed;
        }
        outcome
    }

    /// Handle trigger and overlay events only, without outside dismissal.
    pub(crate) fn route_event<H: Host>(&mut self, host: &mut H, event: &PointerEvent) -> Outcome {
        match self.config.trigger {
            TriggerMode::Click => self.route_click(host, event),
            TriggerMode::Hover => self.route_hover(host, event),
        }
    }

    fn route_click<H: Host>(&mut self, host: &mut H, event: &PointerEvent) -> Outcome {
        if !event.is_activation() {
            return Outcome::Ignored;
        }
        if self.trigger_contains(host, event.position()) {
            return self.toggle(host);
        }
        self.route_overlay_activation(host, event)
    }

    fn route_hover<H: Host>(&mut self, host: &mut H, event: &PointerEvent) -> Outcome {
        match event.kind {
            PointerKind::Moved | PointerKind::Enter => {
                let inside = self.trigger_contains(host, event.position());
                if inside && !self.hovering {
                    self.hovering = true;
                    return if self.show(host) {
                        Outcome::Shown
                    } else {
                        Outcome::BuildFailed
                    };
                }
                if !inside && self.hovering {
                    self.hovering = false;
                    self.hide(host);
                    return Outcome::Hidden;
                }
                Outcome::Ignored
            }
            PointerKind::Leave => {
                if self.hovering {
                    self.hovering = false;
                    self.hide(host);
                    return Outcome::Hidden;
                }
                Outcome::Ignored
            }
            // Buttons inside the overlay still work in hover mode.
            PointerKind::Down(_) if event.is_activation() => {
                self.route_overlay_activation(host, event)
            }
            _ => Outcome::Ignored,
        }
    }

    fn route_overlay_activation<H: Host>(
        &mut self,
        host: &mut H,
        event: &PointerEvent,
    ) -> Outcome {
        if !self.is_visible() || !self.overlay_contains(host, event.position()) {
            return Outcome::Ignored;
        }
        let hit_submit = self
            .config
            .submit
            .as_ref()
            .is_some_and(|s| self.element_contains(host, &s.descriptor.id, event.position()));
        if hit_submit {
            self.submit(host);
            return Outcome::Submitted;
        }
        let hit_cancel = self
            .config
            .cancel
            .as_ref()
            .is_some_and(|c| self.element_contains(host, &c.descriptor.id, event.position()));
        if hit_cancel {
            self.cancel(host);
            return Outcome::Cancelled;
        }
        Outcome::Inside
    }

    /// Show the overlay: build on first use, position, then mark visible.
    ///
    /// Returns `false` when the content schema fails validation; the popover
    /// stays unbuilt and the violations are retained for inspection.
    pub fn show<H: Host>(&mut self, host: &mut H) -> bool {
        if !self.ensure_built(host) {
            return false;
        }
        let Some(overlay) = self.overlay else {
            return false;
        };
        let trigger_box = host.bounding_box(self.trigger);
        let overlay_box = host.bounding_box(overlay);
        let position = anchored_position(trigger_box, overlay_box.size(), self.config.placement);
        host.set_position(overlay, position);
        host.set_visible(overlay, true);
        self.phase = OverlayPhase::Visible;
        debug!("popover shown at {},{}", position.x, position.y);
        true
    }

    /// Hide the overlay. No-op before the first build.
    pub fn hide<H: Host>(&mut self, host: &mut H) {
        let Some(overlay) = self.overlay else {
            return;
        };
        host.set_visible(overlay, false);
        self.phase = OverlayPhase::Hidden;
    }

    /// Toggle visibility the way a trigger activation does.
    pub fn toggle<H: Host>(&mut self, host: &mut H) -> Outcome {
        if self.is_visible() {
            self.hide(host);
            Outcome::Hidden
        } else if self.show(host) {
            Outcome::Shown
        } else {
            Outcome::BuildFailed
        }
    }

    /// Read the current form values from the host.
    pub fn collect<H: Host>(&self, host: &H) -> FormData {
        collect(&self.config.content, host)
    }

    /// Run the submit action: collect, then hand the result to the callback.
    pub fn submit<H: Host>(&mut self, host: &mut H) {
        let data = self.collect(host);
        self.warn_pattern_mismatches(&data);
        if let Some(submit) = self.config.submit.as_mut()
            && submit.descriptor.action == ButtonAction::Submit
            && let Some(on_submit) = submit.on_submit.as_mut()
        {
            on_submit(&data);
        }
    }

    /// Run the cancel action: hide first for `Hide`-kind buttons, then the
    /// callback.
    pub fn cancel<H: Host>(&mut self, host: &mut H) {
        let hide_first = self
            .config
            .cancel
            .as_ref()
            .is_some_and(|c| c.descriptor.action == ButtonAction::Hide);
        if hide_first {
            self.hide(host);
        }
        if let Some(cancel) = self.config.cancel.as_mut()
            && let Some(on_cancel) = cancel.on_cancel.as_mut()
        {
            on_cancel();
        }
    }

    /// Hide in response to an outside activation.
    pub(crate) fn dismiss<H: Host>(&mut self, host: &mut H) {
        if self.is_visible() {
            debug!("popover dismissed by outside activation");
            self.hide(host);
        }
    }

    /// Whether this popover takes part in document-level outside dismissal.
    pub(crate) fn wants_outside_dismiss(&self) -> bool {
        self.is_built() && self.config.trigger == TriggerMode::Click
    }

    fn ensure_built<H: Host>(&mut self, host: &mut H) -> bool {
        if self.phase != OverlayPhase::Unbuilt {
            return true;
        }
        match validate(&self.config.content) {
            Ok(()) => {}
            Err(violations) => {
                for violation in &violations {
                    error!("invalid content schema: {violation}");
                }
                self.violations = violations;
                return false;
            }
        }
        self.violations.clear();
        let fragment = build_overlay(&self.config);
        let overlay = host.mount(&fragment);
        host.set_visible(overlay, false);
        self.overlay = Some(overlay);
        self.phase = OverlayPhase::Hidden;
        debug!("popover overlay built");
        true
    }

    /// Text-input patterns are rendered as a `pattern` attribute but not
    /// enforced before the submit callback runs; mismatches are surfaced on
    /// the log so the gap is visible without blocking submission.
    fn warn_pattern_mismatches(&self, data: &FormData) {
        for item in &self.config.content {
            let ContentItem::TextInput {
                id,
                pattern: Some(pattern),
                ..
            } = item
            else {
                continue;
            };
            let Ok(regex) = Regex::new(pattern) else {
                continue;
            };
            if let Some(value) = data.get(id).and_then(|v| v.as_text())
                && !regex.is_match(value)
            {
                warn!("field {id} does not match its pattern; submitting anyway");
            }
        }
    }

    fn trigger_contains<H: Host>(&self, host: &H, position: Point) -> bool {
        host.bounding_box(self.trigger).contains_point(position)
    }

    fn overlay_contains<H: Host>(&self, host: &H, position: Point) -> bool {
        self.overlay
            .is_some_and(|overlay| host.bounding_box(overlay).contains_point(position))
    }

    fn element_contains<H: Host>(&self, host: &H, id: &str, position: Point) -> bool {
        host.element_by_id(id)
            .is_some_and(|element| host.bounding_box(element).contains_point(position))
    }
}
