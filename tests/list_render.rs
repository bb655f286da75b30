use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::style::Color;
use ratatui::Terminal;
use scrollist::list::ScrollbarView;
use scrollist::ui::{Colors, Theme};
use scrollist::ScrollList;

fn content_rows(buf: &Buffer, rows: u16, cols: u16) -> String {
    let mut out = String::from("|");
    for y in 0..rows {
        for x in 0..cols {
            if let Some(c) = buf.cell((x, y)) {
                out.push_str(c.symbol());
            }
        }
        out.push('|');
    }
    out
}

#[test]
fn three_line_scenario_renders_last_two_lines() {
    let backend = TestBackend::new(5, 3);
    let mut term = Terminal::new(backend).unwrap();
    let colors = Colors::from_theme(&Theme::dark());

    let mut list = ScrollList::new(["a", "bb", "ccc"], 5, 3);
    list.jump_end();
    term.draw(|f| f.render_widget(list.view(&colors), f.area()))
        .unwrap();

    let buf = term.backend().buffer();
    insta::assert_snapshot!(content_rows(buf, 2, 4), @"|bb  |ccc |");
    assert_eq!(buf.cell((0, 0)).unwrap().bg, colors.list_active_style.bg.unwrap());
    assert_eq!(buf.cell((0, 1)).unwrap().bg, colors.list_selected_style.bg.unwrap());
}

#[test]
fn empty_list_renders_blank_rows() {
    let backend = TestBackend::new(8, 5);
    let mut term = Terminal::new(backend).unwrap();
    let colors = Colors::default();
    let list = ScrollList::new(Vec::<String>::new(), 8, 5);
    term.draw(|f| f.render_widget(list.view(&colors), f.area()))
        .unwrap();

    let buf = term.backend().buffer();
    insta::assert_snapshot!(content_rows(buf, 4, 7), @"|       |       |       |       |");
    for y in 0..4 {
        assert_eq!(buf.cell((0, y)).unwrap().bg, colors.list_active_style.bg.unwrap());
    }
}

#[test]
fn horizontal_offset_shifts_every_line() {
    let backend = TestBackend::new(6, 4);
    let mut term = Terminal::new(backend).unwrap();
    let colors = Colors::default();
    let mut list = ScrollList::new(["abcdefgh", "xy", "0123456789"], 6, 4);
    list.scroll_right();
    list.scroll_right();
    list.scroll_right();
    term.draw(|f| f.render_widget(list.view(&colors), f.area()))
        .unwrap();
    let buf = term.backend().buffer();
    insta::assert_snapshot!(content_rows(buf, 3, 5), @"|defgh|     |34567|");
}

#[test]
fn unfocused_list_uses_inactive_colours() {
    let backend = TestBackend::new(6, 3);
    let mut term = Terminal::new(backend).unwrap();
    let colors = Colors::default();
    let mut list = ScrollList::new(["one", "two"], 6, 3);
    list.set_selected_index(Some(1));
    list.set_active(false);
    term.draw(|f| f.render_widget(list.view(&colors), f.area()))
        .unwrap();
    let buf = term.backend().buffer();
    assert_eq!(buf.cell((0, 0)).unwrap().fg, colors.list_inactive_style.fg.unwrap());
    assert_eq!(buf.cell((0, 1)).unwrap().bg, colors.list_selected_style.bg.unwrap());
    assert_ne!(colors.list_inactive_style, colors.list_active_style);
    assert_ne!(Some(Color::Reset), colors.list_selected_style.bg);
}

#[test]
fn list_and_scrollbars_fill_the_viewport() {
    let backend = TestBackend::new(10, 6);
    let mut term = Terminal::new(backend).unwrap();
    let colors = Colors::default();
    let list = ScrollList::new((0..40).map(|i| format!("row {}", i)), 10, 6);
    term.draw(|f| {
        f.render_widget(list.view(&colors), f.area());
        f.render_widget(ScrollbarView::new(&list, &colors), f.area());
    })
    .unwrap();
    let buf = term.backend().buffer();
    let right_col: String = (0..5)
        .filter_map(|y| buf.cell((9, y)).map(|c| c.symbol().to_string()))
        .collect();
    assert!(right_col.starts_with(ratatui::symbols::scrollbar::VERTICAL.begin));
    assert!(right_col.ends_with(ratatui::symbols::scrollbar::VERTICAL.end));
}
