//! One scroll dimension: an offset clamped to `[0, bound]`.
//!
//! `ScrollAxis` knows nothing about lines or columns. The owner tells it the
//! content extent and the viewport extent via [`ScrollAxis::recompute_bound`]
//! and then moves it with the step/page/jump primitives. Every mutation
//! leaves `offset <= bound`, so a renderer can read the offset at any time
//! without re-validating it.

/// Scroll position and its maximum legal value for a single axis.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScrollAxis {
    offset: usize,
    bound: usize,
    page: usize,
}

impl ScrollAxis {
    /// Axis at offset 0 with a zero bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scroll offset.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Largest offset the axis may take.
    pub fn bound(&self) -> usize {
        self.bound
    }

    /// Distance moved by a page step (`viewport_extent - 1`).
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn is_at_start(&self) -> bool {
        self.offset == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.offset == self.bound
    }

    /// Recompute the bound as `max(0, extent - viewport_extent + 1)` and pull
    /// the offset back inside it when it now overshoots.
    ///
    /// The `+ 1` leaves one row/column of the viewport for the scrollbar
    /// track, so a list exactly as tall as the viewport still scrolls by one.
    pub fn recompute_bound(&mut self, extent: usize, viewport_extent: usize) {
        self.bound = (extent + 1).saturating_sub(viewport_extent);
        self.page = viewport_extent.saturating_sub(1);
        if self.offset > self.bound {
            self.offset = self.bound;
        }
    }

    /// Move by `delta`, saturating at both ends.
    pub fn step_by(&mut self, delta: isize) {
        let target = if delta < 0 {
            self.offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.offset.saturating_add(delta as usize)
        };
        self.offset = target.min(self.bound);
    }

    pub fn step_up(&mut self) {
        self.step_by(-1);
    }

    pub fn step_down(&mut self) {
        self.step_by(1);
    }

    pub fn page_up(&mut self) {
        self.step_by(-(self.page as isize));
    }

    pub fn page_down(&mut self) {
        self.step_by(self.page as isize);
    }

    pub fn jump_to_start(&mut self) {
        self.offset = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.offset = self.bound;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_leaves_room_for_scrollbar_row() {
        let mut axis = ScrollAxis::new();
        axis.recompute_bound(3, 3);
        assert_eq!(axis.bound(), 1);
        axis.recompute_bound(3, 4);
        assert_eq!(axis.bound(), 0);
        axis.recompute_bound(0, 10);
        assert_eq!(axis.bound(), 0);
    }

    #[test]
    fn shrinking_bound_clamps_offset() {
        let mut axis = ScrollAxis::new();
        axis.recompute_bound(100, 10);
        axis.jump_to_end();
        assert_eq!(axis.offset(), 91);
        axis.recompute_bound(20, 10);
        assert_eq!(axis.offset(), 11);
        assert!(axis.is_at_end());
    }

    #[test]
    fn growing_bound_keeps_offset() {
        let mut axis = ScrollAxis::new();
        axis.recompute_bound(20, 10);
        axis.step_by(5);
        axis.recompute_bound(200, 10);
        assert_eq!(axis.offset(), 5);
    }

    #[test]
    fn step_saturates_at_both_ends() {
        let mut axis = ScrollAxis::new();
        axis.recompute_bound(12, 10);
        assert_eq!(axis.bound(), 3);
        axis.step_up();
        assert_eq!(axis.offset(), 0);
        axis.step_by(2);
        assert_eq!(axis.offset(), 2);
        axis.step_by(50);
        assert_eq!(axis.offset(), 3);
        axis.step_by(isize::MIN);
        assert_eq!(axis.offset(), 0);
    }

    #[test]
    fn page_moves_by_viewport_minus_one() {
        let mut axis = ScrollAxis::new();
        axis.recompute_bound(50, 5);
        assert_eq!(axis.page(), 4);
        axis.page_down();
        assert_eq!(axis.offset(), 4);
        axis.page_down();
        axis.page_up();
        assert_eq!(axis.offset(), 4);
        axis.page_up();
        axis.page_up();
        assert!(axis.is_at_start());
    }

    #[test]
    fn zero_viewport_has_zero_page() {
        let mut axis = ScrollAxis::new();
        axis.recompute_bound(4, 0);
        assert_eq!(axis.bound(), 5);
        assert_eq!(axis.page(), 0);
        axis.page_down();
        assert_eq!(axis.offset(), 0);
    }
}
