//! Two-pane split layout state.

/// Default share of the width given to the sidebar, in percent
pub const DEFAULT_SIDEBAR_PERCENT: f64 = 30.0;

/// Smallest share either pane may shrink to, in percent
pub const MIN_PANE_PERCENT: f64 = 15.0;

/// Relative widths of the sidebar and editor panes.
///
/// The two sizes always add up to 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitLayout {
    sidebar: f64,
}

impl SplitLayout {
    /// Build a layout from a sidebar percentage, clamped to the pane minimum
    #[must_use]
    pub fn new(sidebar_percent: f64) -> Self {
        let sidebar = if sidebar_percent.is_finite() {
            sidebar_percent.clamp(MIN_PANE_PERCENT, 100.0 - MIN_PANE_PERCENT)
        } else {
            DEFAULT_SIDEBAR_PERCENT
        };
        Self { sidebar }
    }

    /// Layout with the gutter placed at `pointer_x` inside a container
    /// `container_width` pixels wide.
    ///
    /// A zero-width container keeps the current layout.
    #[must_use]
    pub fn dragged_to(self, pointer_x: f64, container_width: f64) -> Self {
        if container_width <= 0.0 {
            return self;
        }
        Self::new(pointer_x / container_width * 100.0)
    }

    #[must_use]
    pub const fn sidebar_percent(self) -> f64 {
        self.sidebar
    }

    #[must_use]
    pub fn editor_percent(self) -> f64 {
        100.0 - self.sidebar
    }
}

impl Default for SplitLayout {
    fn default() -> Self {
        Self::new(DEFAULT_SIDEBAR_PERCENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_thirty_seventy() {
        let layout = SplitLayout::default();
        assert!((layout.sidebar_percent() - 30.0).abs() < f64::EPSILON);
        assert!((layout.editor_percent() - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn drag_moves_gutter() {
        let layout = SplitLayout::default().dragged_to(400.0, 1000.0);
        assert!((layout.sidebar_percent() - 40.0).abs() < 1e-9);
        assert!((layout.editor_percent() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn drag_is_clamped_to_minimum_pane() {
        let narrow = SplitLayout::default().dragged_to(10.0, 1000.0);
        assert!((narrow.sidebar_percent() - MIN_PANE_PERCENT).abs() < 1e-9);

        let wide = SplitLayout::default().dragged_to(990.0, 1000.0);
        assert!((wide.editor_percent() - MIN_PANE_PERCENT).abs() < 1e-9);
    }

    #[test]
    fn zero_width_container_keeps_layout() {
        let layout = SplitLayout::new(45.0);
        assert_eq!(layout.dragged_to(100.0, 0.0), layout);
    }

    #[test]
    fn non_finite_input_falls_back_to_default() {
        assert_eq!(SplitLayout::new(f64::NAN), SplitLayout::default());
    }
}
