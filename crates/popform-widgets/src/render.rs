#![forbid(unsafe_code)]

//! Content rendering: schema to markup fragments.
//!
//! Pure functions from schema to [`Node`] trees. Each content item maps to a
//! short run of sibling elements; the overlay assembles them in schema order
//! inside `popover > (arrow, header?, body > (content…, footer > buttons))`.
//! Every interactive element carries its schema identifier, which is the
//! only binding the collector relies on later. Cosmetic overrides are merged
//! here, so the mounted fragment is complete and the host never restyles.

use popform_dom::Node;

use crate::config::{ButtonDescriptor, PopoverConfig, RegionStyle};
use crate::schema::ContentItem;

/// Render one content item to its markup fragment (a run of siblings).
pub fn render_item(item: &ContentItem) -> Vec<Node> {
    match item {
        ContentItem::Date { id, name } => {
            let mut input = Node::new("input").id(id).attr("type", "date");
            if let Some(name) = name {
                input = input.attr("name", name);
            }
            vec![input]
        }

        ContentItem::CheckboxGroup { items } => items
            .iter()
            .map(|item| {
                let mut input = Node::new("input")
                    .id(&item.id)
                    .class("form-check-input")
                    .attr("type", "checkbox")
                    .attr("name", &item.name);
                if item.checked {
                    input = input.flag("checked");
                }
                let label = Node::new("label")
                    .class("form-check-label")
                    .attr("for", &item.id)
                    .text(&item.name);
                Node::new("div").class("form-check").child(input).child(label)
            })
            .collect(),

        ContentItem::Range {
            id,
            min,
            max,
            step,
            name,
        } => {
            let mut fragment = Vec::new();
            if let Some(name) = name {
                fragment.push(
                    Node::new("label")
                        .class("form-label")
                        .attr("for", id)
                        .text(name),
                );
            }
            let mut input = Node::new("input")
                .id(id)
                .class("form-range")
                .attr("type", "range")
                .attr("min", format_number(*min))
                .attr("max", format_number(*max));
            if let Some(step) = step {
                input = input.attr("step", format_number(*step));
            }
            fragment.push(input);
            fragment
        }

        ContentItem::TextInput {
            id,
            label,
            placeholder,
            default_value,
            pattern,
        } => {
            let mut fragment = Vec::new();
            if let Some(label) = label {
                fragment.push(
                    Node::new("label")
                        .class("form-label")
                        .attr("for", id)
                        .text(label),
                );
            }
            let mut input = Node::new("input")
                .id(id)
                .class("form-control")
                .attr("type", "text")
                .attr("placeholder", placeholder.as_deref().unwrap_or(""))
                .attr("value", default_value.as_deref().unwrap_or(""));
            if let Some(pattern) = pattern {
                input = input.attr("pattern", pattern);
            }
            fragment.push(input);
            fragment
        }

        ContentItem::InputRange {
            id,
            min_id,
            max_id,
            min,
            max,
            step,
            label,
        } => {
            let mut row = Node::new("div")
                .id(id)
                .class("d-flex")
                .class("align-items-center")
                .class("gap-2");
            if let Some(label) = label {
                row = row.child(Node::new("label").text(label));
            }
            row = row
                .child(bound_input(min_id, "Min", *min, *max, *step))
                .child(bound_input(max_id, "Max", *min, *max, *step));
            vec![row]
        }
    }
}

fn bound_input(
    id: &str,
    placeholder: &str,
    min: Option<f64>,
    max: Option<f64>,
    step: Option<f64>,
) -> Node {
    let mut input = Node::new("input")
        .id(id)
        .class("form-control")
        .attr("type", "number")
        .attr("placeholder", placeholder);
    if let Some(min) = min {
        input = input.attr("min", format_number(min));
    }
    if let Some(max) = max {
        input = input.attr("max", format_number(max));
    }
    if let Some(step) = step {
        input = input.attr("step", format_number(step));
    }
    input
}

/// Render a footer button.
pub fn render_button(descriptor: &ButtonDescriptor) -> Node {
    Node::new("button")
        .id(&descriptor.id)
        .class("btn")
        .maybe_class(descriptor.class.as_deref())
        .text(&descriptor.label)
}

/// Build the complete overlay fragment for a configuration.
///
/// The header region only exists when its chrome override has something to
/// apply; the footer only exists when at least one button is configured.
/// Cancel renders before submit.
pub fn build_overlay(config: &PopoverConfig) -> Node {
    let mut root = apply_region(
        Node::new("div").class("popover").class("interactive-popover"),
        &config.chrome.popover,
    );

    root = root.child(apply_region(
        Node::new("div").class("popover-arrow"),
        &config.chrome.arrow,
    ));

    if !config.chrome.header.is_empty() {
        root = root.child(apply_region(
            Node::new("div").class("popover-header"),
            &config.chrome.header,
        ));
    }

    let mut body = apply_region(Node::new("div").class("popover-body"), &config.chrome.body);
    for item in &config.content {
        body = body.children(render_item(item));
    }

    if config.submit.is_some() || config.cancel.is_some() {
        let mut footer = apply_region(
            Node::new("div")
                .class("d-flex")
                .class("justify-content-end")
                .class("gap-2")
                .class("mt-3"),
            &config.chrome.footer,
        );
        if let Some(cancel) = &config.cancel {
            footer = footer.child(render_button(&cancel.descriptor));
        }
        if let Some(submit) = &config.submit {
            footer = footer.child(render_button(&submit.descriptor));
        }
        body = body.child(footer);
    }

    root.child(body)
}

fn apply_region(mut node: Node, region: &RegionStyle) -> Node {
    for (name, value) in &region.styles {
        node = node.style(name, value);
    }
    node.maybe_class(region.class.as_deref())
}

/// Format a numeric attribute the way a page author would write it.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
