#![forbid(unsafe_code)]

//! popform demo binary.
//!
//! Drives a popover through a full session against the in-memory host: a
//! username input with a validation pattern, a two-checkbox consent group,
//! and submit/cancel buttons, opened from a click trigger and dismissed from
//! outside. The same configuration works against any real [`popform::Host`]
//! backend.

use popform::prelude::*;
use popform::{Chrome, FieldValue, RegionStyle};
use popform_harness::{MemoryHost, click_at, click_inside};

fn chrome() -> Chrome {
    Chrome {
        popover: RegionStyle::new()
            .style("border", "1px solid #ddd")
            .style("border-radius", "5px")
            .style("background", "#fff")
            .style("box-shadow", "0 4px 8px rgba(0, 0, 0, 0.1)")
            .style("padding", "1rem")
            .style("width", "300px")
            .style("z-index", "1000")
            .class("popover-md shadow-lg"),
        arrow: RegionStyle::new()
            .style("width", "10px")
            .style("height", "10px")
            .style("transform", "rotate(45deg)")
            .class("custom-arrow"),
        body: RegionStyle::new()
            .style("margin-top", "1rem")
            .class("bg-light p-3"),
        ..Chrome::default()
    }
}

fn config() -> PopoverConfig {
    let content = vec![
        ContentItem::TextInput {
            id: "input-field".into(),
            label: Some("Enter your username".into()),
            placeholder: Some("Username".into()),
            default_value: Some(String::new()),
            pattern: Some("^[a-zA-Z0-9_]+$".into()),
        },
        ContentItem::checkbox_group(vec![
            CheckboxItem::new("terms", "I accept the terms", false),
            CheckboxItem::new("privacy", "I accept the privacy policy", false),
        ]),
    ];

    PopoverConfig::new(content)
        .placement(Placement::Bottom)
        .submit(
            SubmitButton::new(ButtonDescriptor::submit("submit-btn", "Submit").class("btn-primary"))
                .on_submit(|data| {
                    println!("submitted {} values:", data.len());
                    for entry in &data.values {
                        match &entry.value {
                            FieldValue::Text(text) => {
                                println!("  {} ({}) = {text:?}", entry.id, entry.name);
                            }
                            FieldValue::Bool(checked) => {
                                println!("  {} ({}) = {checked}", entry.id, entry.name);
                            }
                        }
                    }
                }),
        )
        .cancel(
            CancelButton::new(ButtonDescriptor::hide("cancel-btn", "Cancel").class("btn-secondary"))
                .on_cancel(|| println!("popover cancelled")),
        )
        .chrome(chrome())
}

fn main() -> popform::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut host = MemoryHost::new();
    let trigger_box = Rect::new(50, 100, 80, 20);
    host.seed_element("popover-trigger", trigger_box);
    host.next_mount_box(Rect::new(0, 0, 300, 140));

    let mut popover = Popover::attach(&host, "#popover-trigger", config())?;

    // First activation: validate, build, position, show.
    popover.handle_event(&mut host, &click_inside(trigger_box));
    if let Some(overlay) = popover.overlay_element() {
        let overlay_box = host.bounding_box(overlay);
        println!("popover opened at ({}, {})", overlay_box.x, overlay_box.y);
    }

    // The user fills the form.
    host.set_value("input-field", "ada_lovelace");
    host.set_checked("terms", true);

    // Activate the submit button.
    host.place("submit-btn", Rect::new(60, 200, 60, 24));
    popover.handle_event(&mut host, &click_at(80, 210));

    // A click elsewhere on the page dismisses the overlay.
    popover.handle_event(&mut host, &click_at(600, 400));
    println!("visible after outside click: {}", popover.is_visible());

    Ok(())
}
