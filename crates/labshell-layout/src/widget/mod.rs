//! The split widget: two panes and a draggable divider.

mod geometry;
mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::LayoutOptions;
    use crate::sizes::SplitSizes;
    use labshell_common::Rect;

    fn widget(sizes: SplitSizes, gutter: f64, min_right: f64) -> SplitWidget {
        SplitWidget::new(
            sizes,
            &LayoutOptions {
                gutter_px: gutter,
                min_tool_pane_px: min_right,
                ..LayoutOptions::default()
            },
        )
    }

    fn bounds(width: f64) -> Rect {
        Rect::new(0.0, 0.0, width, 600.0)
    }

    #[test]
    fn panes_divide_width_without_gutter() {
        let w = widget(SplitSizes::DEFAULT, 0.0, 0.0);
        let (left, right) = w.compute(bounds(800.0));
        assert!((left.width - 200.0).abs() < 0.01);
        assert!((right.width - 600.0).abs() < 0.01);
        assert!((right.x - 200.0).abs() < 0.01);
    }

    #[test]
    fn gutter_reduces_available_space() {
        let w = widget(SplitSizes::normalize(50.0, 50.0), 10.0, 0.0);
        let (left, right) = w.compute(bounds(810.0));
        assert!((left.width + right.width - 800.0).abs() < 0.01);
        assert!((right.x - 410.0).abs() < 0.01);
    }

    #[test]
    fn collapsed_left_has_zero_width() {
        let w = widget(SplitSizes::COLLAPSED, 8.0, 300.0);
        let (left, right) = w.compute(bounds(1000.0));
        assert!(left.width.abs() < 0.01);
        assert!((right.width - 992.0).abs() < 0.01);
    }

    #[test]
    fn tiny_container_never_goes_negative() {
        let w = widget(SplitSizes::DEFAULT, 20.0, 300.0);
        let (left, right) = w.compute(bounds(10.0));
        assert!(left.width >= 0.0);
        assert!(right.width >= 0.0);
    }

    #[test]
    fn compute_enforces_tool_pane_minimum() {
        let w = widget(SplitSizes::normalize(90.0, 10.0), 0.0, 300.0);
        let (left, right) = w.compute(bounds(1000.0));
        assert!((right.width - 300.0).abs() < 0.01);
        assert!((left.width - 700.0).abs() < 0.01);
    }

    #[test]
    fn constrain_keeps_sizes_that_fit() {
        let w = widget(SplitSizes::DEFAULT, 0.0, 300.0);
        let sizes = SplitSizes::normalize(40.0, 60.0);
        assert_eq!(w.constrain(sizes, 1000.0), sizes);
    }

    #[test]
    fn constrain_grows_tool_pane_to_minimum() {
        let w = widget(SplitSizes::DEFAULT, 0.0, 300.0);
        let constrained = w.constrain(SplitSizes::normalize(90.0, 10.0), 1000.0);
        assert!((constrained.right() - 30.0).abs() < 1e-9);
        assert!((constrained.left() - 70.0).abs() < 1e-9);
    }

    #[test]
    fn constrain_in_narrow_container_gives_tool_pane_everything() {
        let w = widget(SplitSizes::DEFAULT, 8.0, 300.0);
        assert_eq!(
            w.constrain(SplitSizes::DEFAULT, 250.0),
            SplitSizes::COLLAPSED
        );
    }

    #[test]
    fn left_pane_may_be_dragged_to_zero() {
        let w = widget(SplitSizes::DEFAULT, 8.0, 300.0);
        assert_eq!(
            w.constrain(SplitSizes::COLLAPSED, 1000.0),
            SplitSizes::COLLAPSED
        );
    }
}
