//! Scrollbar tracks for a [`ScrollList`].
//!
//! The list leaves its last column and last row free. [`ScrollbarView`]
//! draws a vertical track in that column and a horizontal track in that row,
//! and [`hit_test`] / [`apply_hit`] turn clicks the list forwarded back into
//! scroll steps. Scrollbars only move the axes; selection is never touched.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::symbols::scrollbar::{Set, HORIZONTAL, VERTICAL};
use ratatui::widgets::Widget;

use super::render::{ListStyle, StyleLookup};
use super::scroll::ScrollAxis;
use super::ScrollList;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollbarAxis {
    Vertical,
    Horizontal,
}

/// Part of a track under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollbarPart {
    DecrementArrow,
    IncrementArrow,
    /// Track between the start arrow and the thumb.
    TrackBefore,
    /// Track between the thumb and the end arrow.
    TrackAfter,
    Thumb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollbarHit {
    pub axis: ScrollbarAxis,
    pub part: ScrollbarPart,
}

/// Cell index of the thumb on a track of `len` cells (arrows included).
pub fn thumb_position(axis: &ScrollAxis, len: usize) -> usize {
    if len < 3 {
        return 0;
    }
    let cells = len - 2;
    if axis.bound() == 0 {
        return 1;
    }
    1 + axis.offset() * (cells - 1) / axis.bound()
}

fn classify(axis: &ScrollAxis, len: usize, pos: usize) -> ScrollbarPart {
    let thumb = thumb_position(axis, len);
    if pos == 0 {
        ScrollbarPart::DecrementArrow
    } else if pos + 1 == len {
        ScrollbarPart::IncrementArrow
    } else if pos < thumb {
        ScrollbarPart::TrackBefore
    } else if pos > thumb {
        ScrollbarPart::TrackAfter
    } else {
        ScrollbarPart::Thumb
    }
}

/// Classify a click at widget-relative `(column, row)`. Returns `None` when
/// the position is not on either track.
pub fn hit_test(list: &ScrollList, column: u16, row: u16) -> Option<ScrollbarHit> {
    let (width, height) = list.viewport();
    let track_h = height.saturating_sub(1);
    let track_w = width.saturating_sub(1);
    if width > 0 && column == width - 1 && row < track_h {
        let part = classify(list.vertical(), usize::from(track_h), usize::from(row));
        return Some(ScrollbarHit {
            axis: ScrollbarAxis::Vertical,
            part,
        });
    }
    if height > 0 && row == height - 1 && column < track_w {
        let part = classify(list.horizontal(), usize::from(track_w), usize::from(column));
        return Some(ScrollbarHit {
            axis: ScrollbarAxis::Horizontal,
            part,
        });
    }
    None
}

/// Move the axis named by `hit`: arrows step by one, the track pages.
pub fn apply_hit(list: &mut ScrollList, hit: ScrollbarHit) {
    let axis = match hit.axis {
        ScrollbarAxis::Vertical => list.vertical_mut(),
        ScrollbarAxis::Horizontal => list.horizontal_mut(),
    };
    match hit.part {
        ScrollbarPart::DecrementArrow => axis.step_up(),
        ScrollbarPart::IncrementArrow => axis.step_down(),
        ScrollbarPart::TrackBefore => axis.page_up(),
        ScrollbarPart::TrackAfter => axis.page_down(),
        ScrollbarPart::Thumb => {}
    }
}

/// Draws both scrollbar tracks of a list.
pub struct ScrollbarView<'a, S: StyleLookup + ?Sized> {
    list: &'a ScrollList,
    styles: &'a S,
}

impl<'a, S: StyleLookup + ?Sized> ScrollbarView<'a, S> {
    pub fn new(list: &'a ScrollList, styles: &'a S) -> Self {
        Self { list, styles }
    }

    fn track_symbol(&self, set: &Set, axis: &ScrollAxis, len: usize, pos: usize) -> (&'static str, ListStyle) {
        match classify(axis, len, pos) {
            ScrollbarPart::DecrementArrow => (set.begin, ListStyle::ScrollbarTrack),
            ScrollbarPart::IncrementArrow => (set.end, ListStyle::ScrollbarTrack),
            ScrollbarPart::Thumb => (set.thumb, ListStyle::ScrollbarThumb),
            _ => (set.track, ListStyle::ScrollbarTrack),
        }
    }
}

impl<S: StyleLookup + ?Sized> Widget for ScrollbarView<'_, S> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        let (width, height) = self.list.viewport();
        if width == 0 || height == 0 {
            return;
        }
        let track_h = height - 1;
        let track_w = width - 1;

        let x = width - 1;
        if x < area.width {
            for row in 0..track_h.min(area.height) {
                let (symbol, key) =
                    self.track_symbol(&VERTICAL, self.list.vertical(), usize::from(track_h), usize::from(row));
                if let Some(cell) = buf.cell_mut((area.x + x, area.y + row)) {
                    cell.set_symbol(symbol).set_style(self.styles.style(key));
                }
            }
        }

        let y = height - 1;
        if y < area.height {
            for col in 0..track_w.min(area.width) {
                let (symbol, key) = self.track_symbol(
                    &HORIZONTAL,
                    self.list.horizontal(),
                    usize::from(track_w),
                    usize::from(col),
                );
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + y)) {
                    cell.set_symbol(symbol).set_style(self.styles.style(key));
                }
            }
        }
    }
}
