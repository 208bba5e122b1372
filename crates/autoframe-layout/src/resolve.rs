//! Main- and cross-axis size resolution.

use autoframe_core::AlignItems;
use tracing::trace;

use crate::flex::{FlexContainer, FlexItem};

/// Distribute the container's main-axis space among `items`.
///
/// Hugging containers give every item its basis verbatim, so the container's
/// own size becomes the sum of its children's natural sizes.
pub(crate) fn resolve_main_sizes(items: &mut [FlexItem<'_>], container: &FlexContainer) {
    if items.is_empty() {
        return;
    }

    let Some(content_space) = container.content_main() else {
        for item in items.iter_mut() {
            item.computed_main = item.flex_basis;
        }
        return;
    };

    let total_gap = container.total_gap(items.len());
    let total_basis: f64 = items.iter().map(|item| item.flex_basis).sum();
    let free_space = content_space - total_basis - total_gap;

    trace!(content_space, total_basis, total_gap, free_space, "resolving main sizes");

    if free_space > 0.0 {
        let total_grow: f64 = items.iter().map(|item| item.flex_grow).sum();
        if total_grow > 0.0 {
            let per_unit = free_space / total_grow;
            for item in items.iter_mut() {
                item.computed_main = item.flex_basis + item.flex_grow * per_unit;
            }
            return;
        }
    } else if free_space < 0.0 {
        let total_scaled: f64 = items
            .iter()
            .map(|item| item.flex_shrink * item.flex_basis)
            .sum();
        if total_scaled > 0.0 {
            for item in items.iter_mut() {
                let ratio = item.flex_shrink * item.flex_basis / total_scaled;
                item.computed_main = (item.flex_basis + free_space * ratio).max(0.0);
            }
            return;
        }
    }

    // No free space, nothing willing to grow, or nothing able to shrink.
    for item in items.iter_mut() {
        item.computed_main = item.flex_basis;
    }
}

/// Size every item on the cross axis.
///
/// Stretching needs a bound, so hugging cross axes always keep base sizes.
pub(crate) fn resolve_cross_sizes(items: &mut [FlexItem<'_>], container: &FlexContainer) {
    let content_cross = container.content_cross();

    for item in items.iter_mut() {
        item.computed_cross = match (content_cross, item.effective_align(container)) {
            (Some(space), AlignItems::Stretch) => space,
            _ => item.base_cross,
        };
        trace!(
            id = %item.id,
            main_mode = ?item.main_mode,
            cross_mode = ?item.cross_mode,
            base_main = item.base_main,
            main = item.computed_main,
            cross = item.computed_cross,
            "resolved item"
        );
    }
}
