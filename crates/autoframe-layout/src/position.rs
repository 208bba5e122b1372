//! Main- and cross-axis positioning.
//!
//! Offsets produced here are relative to the container's origin and already
//! include the container padding.

use autoframe_core::{AlignItems, JustifyContent};

use crate::flex::{FlexContainer, FlexItem};

/// Start offset and extra between-item spacing (excluding the gap) for a
/// justification mode.
fn justify_params(justify: JustifyContent, free_space: f64, count: usize) -> (f64, f64) {
    match (justify, count) {
        (JustifyContent::FlexEnd, _) => (free_space, 0.0),
        (JustifyContent::Center, _) => (free_space / 2.0, 0.0),
        (JustifyContent::SpaceBetween, n) if n > 1 => (0.0, free_space / (n - 1) as f64),
        (JustifyContent::SpaceAround, n) if n > 0 => {
            let slot = free_space / n as f64;
            (slot / 2.0, slot)
        }
        (JustifyContent::SpaceEvenly, n) if n > 0 => {
            let slot = free_space / (n + 1) as f64;
            (slot, slot)
        }
        // Start, and space-between with a single item
        _ => (0.0, 0.0),
    }
}

/// Place items one after another along the main axis.
pub(crate) fn position_main(items: &mut [FlexItem<'_>], container: &FlexContainer) {
    let count = items.len();
    let total_items: f64 = items.iter().map(|item| item.computed_main).sum();
    let total_gap = container.total_gap(count);

    // Hugging containers have exactly the room their items need.
    let content_space = container
        .content_main()
        .unwrap_or(total_items + total_gap);
    let free_space = (content_space - total_items - total_gap).max(0.0);

    let (start, between) = justify_params(container.justify_content, free_space, count);

    let mut cursor = container.padding_main_start + start;
    let mut iter = items.iter_mut().peekable();
    while let Some(item) = iter.next() {
        item.main_pos = cursor;
        cursor += item.computed_main;
        if iter.peek().is_some() {
            cursor += container.gap + between;
        }
    }
}

/// Place each item on the cross axis according to its effective alignment.
pub(crate) fn position_cross(items: &mut [FlexItem<'_>], container: &FlexContainer) {
    let content_cross = container.content_cross().unwrap_or_else(|| {
        items
            .iter()
            .map(|item| item.computed_cross)
            .fold(0.0_f64, f64::max)
    });

    for item in items.iter_mut() {
        let offset = match item.effective_align(container) {
            AlignItems::FlexStart | AlignItems::Stretch => 0.0,
            AlignItems::Center => (content_cross - item.computed_cross) / 2.0,
            AlignItems::FlexEnd => content_cross - item.computed_cross,
        };
        item.cross_pos = container.padding_cross_start + offset;
    }
}
