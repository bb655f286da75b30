//! Selection tracking and keyboard navigation rules.
//!
//! `Selection` is either unselected (`None`) or an index into the list. The
//! navigation methods take the list length and the vertical axis explicitly
//! so the rules can be exercised without a widget around them. Scrolling is
//! edge-following: the viewport only moves when the selection would leave the
//! top row or reach the row reserved for the horizontal scrollbar.

use super::scroll::ScrollAxis;

/// Currently selected line, if any.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    selected: Option<usize>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored index. May be stale (`>= len`) after `set`.
    pub fn get(&self) -> Option<usize> {
        self.selected
    }

    /// Store an index without validating it against any list.
    pub fn set(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Stored index if it refers to an existing line.
    pub fn resolve(&self, len: usize) -> Option<usize> {
        self.selected.filter(|&i| i < len)
    }

    /// Select the previous line. From unselected, jump to the last line
    /// without scrolling.
    pub fn move_up(&mut self, len: usize, vertical: &mut ScrollAxis) {
        if len == 0 {
            return;
        }
        match self.selected {
            None => self.selected = Some(len - 1),
            Some(0) => {}
            Some(i) => {
                if i == vertical.offset() {
                    vertical.step_up();
                }
                self.selected = Some(i - 1);
            }
        }
    }

    /// Select the next line. From unselected, select the first line.
    pub fn move_down(&mut self, len: usize, vertical: &mut ScrollAxis, viewport_height: usize) {
        if len == 0 {
            return;
        }
        match self.selected {
            None => self.selected = Some(0),
            Some(i) if i + 1 < len => {
                let next = i + 1;
                self.selected = Some(next);
                if next == vertical.offset() + viewport_height.saturating_sub(1) {
                    vertical.step_down();
                }
            }
            Some(_) => {}
        }
    }

    /// Scroll one page up, then move the selection up by the same distance.
    ///
    /// The two movements are computed independently and are not re-synced.
    pub fn page_up(&mut self, vertical: &mut ScrollAxis, viewport_height: usize) {
        vertical.page_up();
        if let Some(i) = self.selected {
            self.selected = Some(i.saturating_sub(viewport_height.saturating_sub(1)));
        }
    }

    /// Scroll one page down, then move the selection down by the same distance.
    pub fn page_down(&mut self, len: usize, vertical: &mut ScrollAxis, viewport_height: usize) {
        vertical.page_down();
        if let Some(i) = self.selected {
            let target = i.saturating_add(viewport_height.saturating_sub(1));
            self.selected = len.checked_sub(1).map(|last| target.min(last));
        }
    }

    pub fn jump_home(&mut self, len: usize, vertical: &mut ScrollAxis) {
        vertical.jump_to_start();
        if len > 0 {
            self.selected = Some(0);
        }
    }

    pub fn jump_end(&mut self, len: usize, vertical: &mut ScrollAxis) {
        vertical.jump_to_end();
        if len > 0 {
            self.selected = Some(len - 1);
        }
    }

    /// Select the line shown on viewport row `row`. Returns the absolute index
    /// when the row maps to an existing line; otherwise leaves the selection
    /// untouched.
    pub fn select_at(&mut self, row: usize, len: usize, vertical: &ScrollAxis) -> Option<usize> {
        let index = vertical.offset() + row;
        if index < len {
            self.selected = Some(index);
            Some(index)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis(len: usize, height: usize) -> ScrollAxis {
        let mut a = ScrollAxis::new();
        a.recompute_bound(len, height);
        a
    }

    #[test]
    fn move_up_from_unselected_picks_last_without_scrolling() {
        let mut v = axis(10, 4);
        let mut sel = Selection::new();
        sel.move_up(10, &mut v);
        assert_eq!(sel.get(), Some(9));
        assert_eq!(v.offset(), 0);
    }

    #[test]
    fn move_down_from_unselected_picks_first() {
        let mut v = axis(10, 4);
        let mut sel = Selection::new();
        sel.move_down(10, &mut v, 4);
        assert_eq!(sel.get(), Some(0));
    }

    #[test]
    fn navigation_on_empty_list_is_a_noop() {
        let mut v = axis(0, 4);
        let mut sel = Selection::new();
        sel.move_up(0, &mut v);
        sel.move_down(0, &mut v, 4);
        sel.jump_home(0, &mut v);
        sel.jump_end(0, &mut v);
        assert_eq!(sel.get(), None);
    }

    #[test]
    fn move_down_scrolls_when_reaching_scrollbar_row() {
        // height 4: content rows 0..=2, row 3 is the scrollbar track
        let mut v = axis(10, 4);
        let mut sel = Selection::new();
        sel.set(Some(2));
        sel.move_down(10, &mut v, 4);
        assert_eq!(sel.get(), Some(3));
        assert_eq!(v.offset(), 1);
        sel.move_down(10, &mut v, 4);
        assert_eq!(v.offset(), 2);
    }

    #[test]
    fn move_up_scrolls_only_at_top_row() {
        let mut v = axis(10, 4);
        v.step_by(3);
        let mut sel = Selection::new();
        sel.set(Some(5));
        sel.move_up(10, &mut v);
        assert_eq!((sel.get(), v.offset()), (Some(4), 3));
        sel.move_up(10, &mut v);
        assert_eq!((sel.get(), v.offset()), (Some(3), 3));
        sel.move_up(10, &mut v);
        assert_eq!((sel.get(), v.offset()), (Some(2), 2));
    }

    #[test]
    fn move_saturates_at_both_ends() {
        let mut v = axis(3, 10);
        let mut sel = Selection::new();
        sel.set(Some(0));
        sel.move_up(3, &mut v);
        assert_eq!(sel.get(), Some(0));
        sel.set(Some(2));
        sel.move_down(3, &mut v, 10);
        assert_eq!(sel.get(), Some(2));
    }

    #[test]
    fn page_moves_scroll_and_selection_independently() {
        let mut v = axis(20, 5);
        let mut sel = Selection::new();
        sel.set(Some(1));
        sel.page_down(20, &mut v, 5);
        assert_eq!((sel.get(), v.offset()), (Some(5), 4));
        sel.page_down(20, &mut v, 5);
        sel.page_down(20, &mut v, 5);
        sel.page_down(20, &mut v, 5);
        sel.page_down(20, &mut v, 5);
        assert_eq!((sel.get(), v.offset()), (Some(19), 16));
        sel.page_up(&mut v, 5);
        assert_eq!((sel.get(), v.offset()), (Some(15), 12));
    }

    #[test]
    fn page_without_selection_only_scrolls() {
        let mut v = axis(20, 5);
        let mut sel = Selection::new();
        sel.page_down(20, &mut v, 5);
        assert_eq!((sel.get(), v.offset()), (None, 4));
    }

    #[test]
    fn page_down_on_empty_list_clears_stale_selection() {
        let mut v = axis(0, 5);
        let mut sel = Selection::new();
        sel.set(Some(7));
        sel.page_down(0, &mut v, 5);
        assert_eq!(sel.get(), None);
    }

    #[test]
    fn jump_home_and_end_move_scroll_and_selection() {
        let mut v = axis(3, 3);
        let mut sel = Selection::new();
        sel.jump_end(3, &mut v);
        assert_eq!((sel.get(), v.offset()), (Some(2), 1));
        sel.jump_home(3, &mut v);
        assert_eq!((sel.get(), v.offset()), (Some(0), 0));
    }

    #[test]
    fn select_at_maps_row_through_offset() {
        let mut v = axis(10, 4);
        v.step_by(2);
        let mut sel = Selection::new();
        assert_eq!(sel.select_at(1, 10, &v), Some(3));
        assert_eq!(sel.get(), Some(3));
        assert_eq!(sel.select_at(9, 10, &v), None);
        assert_eq!(sel.get(), Some(3));
    }

    #[test]
    fn resolve_ignores_stale_index() {
        let mut sel = Selection::new();
        sel.set(Some(4));
        assert_eq!(sel.resolve(5), Some(4));
        assert_eq!(sel.resolve(4), None);
    }
}
