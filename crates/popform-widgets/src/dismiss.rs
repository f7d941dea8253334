#![forbid(unsafe_code)]

//! Shared outside-dismissal for many popovers.
//!
//! One page, one dismissal path: instead of every popover watching the whole
//! document, a [`PopoverGroup`] owns the instances and a single
//! [`DismissDispatcher`]. Events are offered to each popover in turn; the
//! first consumer wins, which is what stops an opening activation from
//! reaching the dismissal step and re-closing the overlay it just opened.
//! An activation nobody consumed is an outside activation and hides exactly
//! the instances holding a dismissal subscription.
//!
//! Subscriptions are disposable tokens, taken out once a click-mode popover
//! has built its overlay and released when the popover leaves the group, so
//! teardown is deterministic and nothing accumulates document-wide state.

use popform_core::event::PointerEvent;
use popform_core::logging::debug;
use popform_dom::Host;

use crate::popover::{Outcome, Popover};

/// Identity of one dismissal subscription.
pub type SubscriberId = u64;

/// A disposable handle to one dismissal subscription.
///
/// Deliberately neither `Copy` nor `Clone`: releasing consumes the token,
/// so a subscription cannot be released twice or outlive its owner.
#[derive(Debug, PartialEq, Eq)]
pub struct DismissToken {
    id: SubscriberId,
}

impl DismissToken {
    /// The subscriber this token stands for.
    pub fn id(&self) -> SubscriberId {
        self.id
    }
}

/// Registry of instances participating in outside dismissal.
#[derive(Debug, Default)]
pub struct DismissDispatcher {
    active: Vec<SubscriberId>,
    next_id: SubscriberId,
}

impl DismissDispatcher {
    /// Create an empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber, returning its disposable token.
    pub fn subscribe(&mut self) -> DismissToken {
        let id = self.next_id;
        self.next_id += 1;
        self.active.push(id);
        debug!("dismiss subscriber {id} registered");
        DismissToken { id }
    }

    /// Release a subscription, consuming its token.
    pub fn release(&mut self, token: DismissToken) {
        self.active.retain(|&id| id != token.id);
        debug!("dismiss subscriber {} released", token.id);
    }

    /// Check whether a subscriber is registered.
    pub fn is_subscribed(&self, id: SubscriberId) -> bool {
        self.active.contains(&id)
    }

    /// Number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.active.len()
    }
}

struct GroupEntry {
    popover: Popover,
    token: Option<DismissToken>,
}

/// A set of popovers sharing one document-level dismissal path.
#[derive(Default)]
pub struct PopoverGroup {
    entries: Vec<GroupEntry>,
    dispatcher: DismissDispatcher,
}

impl PopoverGroup {
    /// Create an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a popover, returning its index within the group.
    pub fn add(&mut self, popover: Popover) -> usize {
        self.entries.push(GroupEntry {
            popover,
            token: None,
        });
        self.entries.len() - 1
    }

    /// Remove a popover, releasing its dismissal subscription.
    pub fn remove(&mut self, index: usize) -> Option<Popover> {
        if index >= self.entries.len() {
            return None;
        }
        let entry = self.entries.remove(index);
        if let Some(token) = entry.token {
            self.dispatcher.release(token);
        }
        Some(entry.popover)
    }

    /// Borrow a popover by index.
    pub fn get(&self, index: usize) -> Option<&Popover> {
        self.entries.get(index).map(|e| &e.popover)
    }

    /// Mutably borrow a popover by index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Popover> {
        self.entries.get_mut(index).map(|e| &mut e.popover)
    }

    /// Number of popovers in the group.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the group is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The shared dispatcher (for inspection).
    pub fn dispatcher(&self) -> &DismissDispatcher {
        &self.dispatcher
    }

    /// Route one pointer event through the group.
    ///
    /// Offers the event to each popover in insertion order; the first
    /// consumer ends propagation and its index and outcome are returned. An
    /// unconsumed activation dismisses every subscribed instance and returns
    /// `None`.
    pub fn handle_event<H: Host>(
        &mut self,
        host: &mut H,
        event: &PointerEvent,
    ) -> Option<(usize, Outcome)> {
        let mut consumed = None;
        for (index, entry) in self.entries.iter_mut().enumerate() {
            let outcome = entry.popover.route_event(host, event);
            if outcome.is_consumed() {
                consumed = Some((index, outcome));
                break;
            }
        }

        if consumed.is_none() && event.is_activation() {
            for entry in &mut self.entries {
                if entry.token.is_some() {
                    entry.popover.dismiss(host);
                }
            }
        }

        self.reconcile();
        consumed
    }

    /// Bring subscriptions in line with what each popover currently wants:
    /// click-mode instances subscribe once built, everything else stays out.
    fn reconcile(&mut self) {
        for entry in &mut self.entries {
            let wants = entry.popover.wants_outside_dismiss();
            match (wants, entry.token.take()) {
                (true, None) => entry.token = Some(self.dispatcher.subscribe()),
                (false, Some(token)) => self.dispatcher.release(token),
                (_, token) => entry.token = token,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_unique_and_released() {
        let mut dispatcher = DismissDispatcher::new();
        let a = dispatcher.subscribe();
        let b = dispatcher.subscribe();
        assert_ne!(a.id(), b.id());
        assert_eq!(dispatcher.subscriber_count(), 2);

        let a_id = a.id();
        dispatcher.release(a);
        assert!(!dispatcher.is_subscribed(a_id));
        assert!(dispatcher.is_subscribed(b.id()));
        assert_eq!(dispatcher.subscriber_count(), 1);
    }

    #[test]
    fn released_ids_are_not_reused() {
        let mut dispatcher = DismissDispatcher::new();
        let a = dispatcher.subscribe();
        let a_id = a.id();
        dispatcher.release(a);
        let b = dispatcher.subscribe();
        assert_ne!(a_id, b.id());
    }

    #[test]
    fn empty_group_has_no_subscribers() {
        let group = PopoverGroup::new();
        assert!(group.is_empty());
        assert_eq!(group.len(), 0);
        assert_eq!(group.dispatcher().subscriber_count(), 0);
    }
}
