use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::ScrollList;

/// Symbolic style keys the list asks its theme for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListStyle {
    /// The selected line.
    Selected,
    /// Other lines while the list has focus.
    Active,
    /// Other lines while the list does not have focus.
    Inactive,
    ScrollbarTrack,
    ScrollbarThumb,
}

/// Resolves symbolic style keys to concrete styles at render time.
pub trait StyleLookup {
    fn style(&self, key: ListStyle) -> Style;
}

impl<F> StyleLookup for F
where
    F: Fn(ListStyle) -> Style,
{
    fn style(&self, key: ListStyle) -> Style {
        self(key)
    }
}

/// Visible part of `line` after skipping `skip` cells, padded with spaces or
/// cut to exactly `width` cells.
///
/// A wide grapheme cut by either edge is replaced by spaces for the cells
/// that remain visible.
pub fn visible_slice(line: &str, skip: usize, width: usize) -> String {
    let end = skip + width;
    let mut out = String::with_capacity(width);
    let mut filled = 0;
    let mut col = 0;
    for g in line.graphemes(true) {
        if col >= end {
            break;
        }
        let next = col + g.width();
        if col >= skip && next <= end {
            out.push_str(g);
            filled += next - col;
        } else if next > skip {
            let cells = next.min(end) - col.max(skip);
            out.extend(std::iter::repeat(' ').take(cells));
            filled += cells;
        }
        col = next;
    }
    out.extend(std::iter::repeat(' ').take(width - filled));
    out
}

/// Draws the content rows of a [`ScrollList`].
///
/// Only the `(width - 1) x (height - 1)` content rectangle of the list's
/// viewport is written; the last column and row belong to the scrollbars.
/// Drawing reads the list and never changes it.
pub struct ListView<'a, S: StyleLookup + ?Sized> {
    list: &'a ScrollList,
    styles: &'a S,
}

impl<'a, S: StyleLookup + ?Sized> ListView<'a, S> {
    pub fn new(list: &'a ScrollList, styles: &'a S) -> Self {
        Self { list, styles }
    }
}

impl<S: StyleLookup + ?Sized> Widget for ListView<'_, S> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        let (width, height) = self.list.viewport();
        let rows = height.saturating_sub(1).min(area.height);
        let cols = width.saturating_sub(1).min(area.width);
        if rows == 0 || cols == 0 {
            return;
        }

        let base = if self.list.is_active() {
            self.styles.style(ListStyle::Active)
        } else {
            self.styles.style(ListStyle::Inactive)
        };
        let selected = self.list.selected_index();
        let top = self.list.vertical().offset();
        let left = self.list.horizontal().offset();
        let items = self.list.items();

        for row in 0..rows {
            let index = top + usize::from(row);
            let (text, style) = match items.get(index) {
                Some(line) => {
                    let style = if selected == Some(index) {
                        self.styles.style(ListStyle::Selected)
                    } else {
                        base
                    };
                    (visible_slice(line, left, usize::from(cols)), style)
                }
                None => (" ".repeat(usize::from(cols)), base),
            };
            let y = area.y + row;
            buf.set_style(Rect::new(area.x, y, cols, 1), style);
            buf.set_stringn(area.x, y, &text, usize::from(cols), style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn styles(key: ListStyle) -> Style {
        match key {
            ListStyle::Selected => Style::default().bg(Color::Blue),
            ListStyle::Active => Style::default().bg(Color::Black),
            ListStyle::Inactive => Style::default().bg(Color::DarkGray),
            _ => Style::default(),
        }
    }

    fn row_text(buf: &Buffer, y: u16, width: u16) -> String {
        (0..width)
            .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect()
    }

    #[test]
    fn visible_slice_pads_and_truncates() {
        assert_eq!(visible_slice("abc", 0, 5), "abc  ");
        assert_eq!(visible_slice("abcdef", 2, 3), "cde");
        assert_eq!(visible_slice("ab", 5, 2), "  ");
        assert_eq!(visible_slice("", 0, 0), "");
    }

    #[test]
    fn visible_slice_counts_wide_graphemes_as_two_cells() {
        assert_eq!(visible_slice("一二三", 0, 4), "一二");
        assert_eq!(visible_slice("一二三", 1, 4), " 二 ");
        assert_eq!(visible_slice("a一b", 0, 2), "a ");
        assert_eq!(visible_slice("a一b", 1, 3), "一b");
    }

    #[test]
    fn wide_line_end_is_reachable_at_horizontal_bound() {
        let mut list = ScrollList::new(["一二三四五六七八九十"], 6, 3);
        assert_eq!(list.max_width(), 20);
        for _ in 0..50 {
            list.scroll_right();
        }
        assert_eq!(list.horizontal().offset(), list.horizontal().bound());
        assert_eq!(list.horizontal().bound(), 15);
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 3));
        list.view(&styles).render(buf.area, &mut buf);
        let row = row_text(&buf, 0, 5);
        assert!(row.contains('九'), "row was {:?}", row);
        assert!(row.contains('十'), "row was {:?}", row);
        assert!(!row.contains('七'), "row was {:?}", row);
    }

    #[test]
    fn renders_from_offsets_with_selected_style() {
        let mut list = ScrollList::new(["a", "bb", "ccc"], 5, 3);
        list.jump_end();
        let mut buf = Buffer::empty(Rect::new(0, 0, 5, 3));
        list.view(&styles).render(buf.area, &mut buf);
        assert_eq!(row_text(&buf, 0, 4), "bb  ");
        assert_eq!(row_text(&buf, 1, 4), "ccc ");
        assert_eq!(buf.cell((0, 0)).map(|c| c.bg), Some(Color::Black));
        assert_eq!(buf.cell((0, 1)).map(|c| c.bg), Some(Color::Blue));
        // scrollbar column and row untouched
        assert_eq!(buf.cell((4, 0)).map(|c| c.bg), Some(Color::Reset));
        assert_eq!(buf.cell((0, 2)).map(|c| c.bg), Some(Color::Reset));
    }

    #[test]
    fn inactive_list_uses_inactive_style_for_blank_rows() {
        let mut list = ScrollList::new(["x"], 6, 4);
        list.set_active(false);
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 4));
        list.view(&styles).render(buf.area, &mut buf);
        assert_eq!(row_text(&buf, 0, 5), "x    ");
        for y in 0..3 {
            assert_eq!(buf.cell((0, y)).map(|c| c.bg), Some(Color::DarkGray));
        }
        assert_eq!(row_text(&buf, 2, 5), "     ");
    }

    #[test]
    fn rendering_is_idempotent() {
        let mut list = ScrollList::new((0..9).map(|i| format!("row {i}")), 8, 4);
        list.move_down();
        let before = format!("{:?}", list);
        let mut a = Buffer::empty(Rect::new(0, 0, 8, 4));
        let mut b = Buffer::empty(Rect::new(0, 0, 8, 4));
        list.view(&styles).render(a.area, &mut a);
        list.view(&styles).render(b.area, &mut b);
        assert_eq!(a, b);
        assert_eq!(before, format!("{:?}", list));
    }

    #[test]
    fn clips_to_smaller_area() {
        let list = ScrollList::new(["abcdefgh"], 10, 10);
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 2));
        list.view(&styles).render(buf.area, &mut buf);
        assert_eq!(row_text(&buf, 0, 3), "abc");
    }
}
