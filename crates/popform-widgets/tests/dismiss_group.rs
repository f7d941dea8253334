//! Shared outside-dismissal: many popovers, one dispatcher.
//!
//! Verifies the subscription lifecycle (taken out on build, released on
//! removal), propagation stopping (the first consumer wins, so opening one
//! popover neither dismisses it nor its siblings), and that hover-mode
//! instances never participate in outside dismissal.

use popform_harness::{MemoryHost, Rect, click_at, click_inside, move_to};
use popform_widgets::{ContentItem, Outcome, Popover, PopoverConfig, PopoverGroup, TriggerMode};

const TRIGGER_A: Rect = Rect::new(0, 0, 20, 10);
const TRIGGER_B: Rect = Rect::new(200, 0, 20, 10);
const TRIGGER_C: Rect = Rect::new(400, 0, 20, 10);

fn schema() -> Vec<ContentItem> {
    vec![ContentItem::text_input("field")]
}

fn seeded_host() -> MemoryHost {
    let mut host = MemoryHost::new();
    host.seed_element("a", TRIGGER_A);
    host.seed_element("b", TRIGGER_B);
    host.seed_element("c", TRIGGER_C);
    host
}

#[test]
fn subscriptions_follow_builds() {
    let mut host = seeded_host();
    let mut group = PopoverGroup::new();
    group.add(Popover::attach(&host, "#a", PopoverConfig::new(schema())).unwrap());
    group.add(Popover::attach(&host, "#b", PopoverConfig::new(vec![ContentItem::text_input("other")])).unwrap());
    assert_eq!(group.dispatcher().subscriber_count(), 0);

    let outcome = group.handle_event(&mut host, &click_inside(TRIGGER_A));
    assert_eq!(outcome, Some((0, Outcome::Shown)));
    // Only the built instance holds a subscription.
    assert_eq!(group.dispatcher().subscriber_count(), 1);
    assert!(group.get(0).unwrap().is_visible());
}

#[test]
fn opening_activation_does_not_reach_the_dismissal_path() {
    let mut host = seeded_host();
    let mut group = PopoverGroup::new();
    group.add(Popover::attach(&host, "#a", PopoverConfig::new(schema())).unwrap());

    group.handle_event(&mut host, &click_inside(TRIGGER_A));
    assert!(group.get(0).unwrap().is_visible());
}

#[test]
fn outside_activation_dismisses_all_subscribed_instances() {
    let mut host = seeded_host();
    let mut group = PopoverGroup::new();
    group.add(Popover::attach(&host, "#a", PopoverConfig::new(schema())).unwrap());
    group.add(
        Popover::attach(
            &host,
            "#b",
            PopoverConfig::new(vec![ContentItem::text_input("other")]),
        )
        .unwrap(),
    );

    group.handle_event(&mut host, &click_inside(TRIGGER_A));
    group.handle_event(&mut host, &click_inside(TRIGGER_B));
    // Opening B consumed its activation, so A was not dismissed by it.
    assert!(group.get(0).unwrap().is_visible());
    assert!(group.get(1).unwrap().is_visible());

    let outcome = group.handle_event(&mut host, &click_at(999, 999));
    assert_eq!(outcome, None);
    assert!(!group.get(0).unwrap().is_visible());
    assert!(!group.get(1).unwrap().is_visible());
    // Dismissed instances stay built and subscribed.
    assert_eq!(group.dispatcher().subscriber_count(), 2);
}

#[test]
fn hover_instances_never_subscribe_and_survive_outside_clicks() {
    let mut host = seeded_host();
    let mut group = PopoverGroup::new();
    group.add(Popover::attach(&host, "#a", PopoverConfig::new(schema())).unwrap());
    group.add(
        Popover::attach(
            &host,
            "#c",
            PopoverConfig::new(vec![ContentItem::text_input("hov")])
                .trigger(TriggerMode::Hover),
        )
        .unwrap(),
    );

    group.handle_event(&mut host, &click_inside(TRIGGER_A));
    group.handle_event(&mut host, &move_to(410, 5));
    assert!(group.get(0).unwrap().is_visible());
    assert!(group.get(1).unwrap().is_visible());
    assert_eq!(group.dispatcher().subscriber_count(), 1);

    group.handle_event(&mut host, &click_at(999, 999));
    assert!(!group.get(0).unwrap().is_visible());
    // The hover instance holds no subscription and is untouched.
    assert!(group.get(1).unwrap().is_visible());
}

#[test]
fn removal_releases_the_subscription() {
    let mut host = seeded_host();
    let mut group = PopoverGroup::new();
    group.add(Popover::attach(&host, "#a", PopoverConfig::new(schema())).unwrap());
    group.handle_event(&mut host, &click_inside(TRIGGER_A));
    assert_eq!(group.dispatcher().subscriber_count(), 1);

    let removed = group.remove(0);
    assert!(removed.is_some());
    assert!(group.is_empty());
    assert_eq!(group.dispatcher().subscriber_count(), 0);

    // Removing an out-of-range index is a no-op.
    assert!(group.remove(5).is_none());
}
