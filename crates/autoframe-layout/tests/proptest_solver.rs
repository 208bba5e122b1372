//! Property-based checks over randomly generated containers.

use autoframe_core::{
    AlignItems, AutoLayout, JustifyContent, LayoutDirection, LayoutNode, Padding, Sizing,
    SizingMode,
};
use autoframe_layout::{apply_results, compute_intrinsic_size, compute_layout};
use proptest::prelude::*;

fn sizing_mode() -> impl Strategy<Value = SizingMode> {
    prop_oneof![
        Just(SizingMode::Fixed),
        Just(SizingMode::FillContainer),
        Just(SizingMode::FitContent),
    ]
}

fn align_items() -> impl Strategy<Value = AlignItems> {
    prop_oneof![
        Just(AlignItems::FlexStart),
        Just(AlignItems::Center),
        Just(AlignItems::FlexEnd),
        Just(AlignItems::Stretch),
    ]
}

fn justify_content() -> impl Strategy<Value = JustifyContent> {
    prop_oneof![
        Just(JustifyContent::FlexStart),
        Just(JustifyContent::Center),
        Just(JustifyContent::FlexEnd),
        Just(JustifyContent::SpaceBetween),
        Just(JustifyContent::SpaceAround),
        Just(JustifyContent::SpaceEvenly),
    ]
}

fn direction() -> impl Strategy<Value = LayoutDirection> {
    prop_oneof![Just(LayoutDirection::Row), Just(LayoutDirection::Column)]
}

fn child() -> impl Strategy<Value = (f64, f64, SizingMode, SizingMode, bool)> {
    (
        0.0..200.0_f64,
        0.0..200.0_f64,
        sizing_mode(),
        sizing_mode(),
        prop::bool::weighted(0.8),
    )
}

prop_compose! {
    fn frame()(
        width in 0.0..600.0_f64,
        height in 0.0..600.0_f64,
        gap in -10.0..30.0_f64,
        padding in (0.0..40.0_f64, 0.0..40.0_f64, 0.0..40.0_f64, 0.0..40.0_f64),
        direction in direction(),
        align in align_items(),
        justify in justify_content(),
        children in prop::collection::vec(child(), 0..8),
    ) -> LayoutNode {
        let layout = AutoLayout {
            enabled: true,
            direction,
            gap,
            padding: Padding::new(padding.0, padding.1, padding.2, padding.3),
            align_items: align,
            justify_content: justify,
        };
        let children = children
            .into_iter()
            .enumerate()
            .map(|(i, (w, h, horizontal, vertical, visible))| {
                LayoutNode::leaf(format!("child{i}"), w, h)
                    .with_sizing(Sizing::new(horizontal, vertical))
                    .with_visible(visible)
            })
            .collect();
        LayoutNode::container("frame", width, height, layout, children)
    }
}

proptest! {
    #[test]
    fn solving_is_deterministic(frame in frame()) {
        prop_assert_eq!(compute_layout(&frame), compute_layout(&frame));
    }

    #[test]
    fn one_result_per_visible_child_in_order(frame in frame()) {
        let results = compute_layout(&frame);
        let visible: Vec<_> = frame.visible_children().map(|c| c.id.clone()).collect();
        let ids: Vec<_> = results.iter().map(|r| r.id.clone()).collect();
        prop_assert_eq!(ids, visible);
    }

    #[test]
    fn sizes_are_never_negative(frame in frame()) {
        for result in compute_layout(&frame) {
            prop_assert!(result.width >= 0.0);
            prop_assert!(result.height >= 0.0);
        }
        let size = compute_intrinsic_size(&frame, true, true);
        prop_assert!(size.width >= 0.0);
        prop_assert!(size.height >= 0.0);
    }

    #[test]
    fn items_advance_along_main_axis(frame in frame()) {
        let row = frame.auto_layout().map(|l| l.direction) == Some(LayoutDirection::Row);
        let results = compute_layout(&frame);
        for pair in results.windows(2) {
            let (prev, next) = if row {
                (pair[0].right(), pair[1].x)
            } else {
                (pair[0].bottom(), pair[1].y)
            };
            prop_assert!(next + 1e-6 >= prev);
        }
    }

    #[test]
    fn fixed_axes_survive_apply(frame in frame()) {
        let results = compute_layout(&frame);
        let applied = apply_results(frame.children(), &results);
        for (before, after) in frame.children().iter().zip(&applied) {
            if before.sizing.horizontal == SizingMode::Fixed {
                prop_assert_eq!(before.width, after.width);
            }
            if before.sizing.vertical == SizingMode::Fixed {
                prop_assert_eq!(before.height, after.height);
            }
            if !before.visible {
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn hugging_frame_fits_its_content(frame in frame()) {
        let size = compute_intrinsic_size(&frame, true, true);
        let mut hugging = frame.clone();
        hugging.width = size.width;
        hugging.height = size.height;
        hugging.sizing = Sizing::both(SizingMode::FitContent);

        // Children of a frame sized to its content never extend past its padding box.
        let layout = hugging.auto_layout().cloned().unwrap_or_default();
        let padding = layout.padding.normalized();
        let results = compute_layout(&hugging);
        if let Some(last) = results.last() {
            let (end, limit) = match layout.direction {
                LayoutDirection::Row => (last.right(), size.width - padding.right),
                LayoutDirection::Column => (last.bottom(), size.height - padding.bottom),
            };
            let has_fill = frame
                .visible_children()
                .any(|c| c.sizing.along(layout.direction).0 == SizingMode::FillContainer);
            if !has_fill {
                prop_assert!(end <= limit + 1e-6);
            }
        }
    }
}
