//! Demo container hosting two lists side by side.
//!
//! The left pane shows the input lines, the right pane the lines activated so
//! far. The host does what a window would do for its widgets: it pushes
//! geometry in on every layout, moves focus when a list asks for it, routes
//! mouse events by area, and sends clicks the list forwarded to the
//! scrollbars.

use std::sync::mpsc::{channel, Receiver, Sender};

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use tracing::debug;

use crate::config::KeyBindings;
use crate::input::mouse::MouseEvent;
use crate::input::{KeyCode, KeyEvent};
use crate::list::{self, scrollbar, FocusDirection, Outcome, ScrollList, ScrollbarView};
use crate::ui::Colors;

pub const LINES_PANE: usize = 0;
pub const HISTORY_PANE: usize = 1;

/// Most activations kept in the history pane; older ones are dropped.
pub const HISTORY_LIMIT: usize = 200;

/// Notifications sent from list callbacks back to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostMessage {
    Moved { pane: usize, index: usize, line: String },
    Activated { pane: usize, index: usize, line: String },
}

struct Pane {
    title: &'static str,
    list: ScrollList,
    outer: Rect,
    inner: Rect,
}

pub struct Host {
    panes: Vec<Pane>,
    focus: usize,
    colors: Colors,
    status: String,
    status_area: Rect,
    history: Vec<String>,
    rx: Receiver<HostMessage>,
}

fn wire(list: ScrollList, pane: usize, tx: &Sender<HostMessage>) -> ScrollList {
    let on_move = tx.clone();
    let on_activate = tx.clone();
    list.with_on_move(move |index, line| {
        let _ = on_move.send(HostMessage::Moved {
            pane,
            index,
            line: line.to_string(),
        });
    })
    .with_on_activate(move |index, line| {
        let _ = on_activate.send(HostMessage::Activated {
            pane,
            index,
            line: line.to_string(),
        });
    })
}

impl Host {
    pub fn new(items: Vec<String>, keybindings: KeyBindings, colors: Colors) -> Self {
        let (tx, rx) = channel();
        let lines = wire(
            ScrollList::new(items, 0, 0).with_keybindings(keybindings.clone()),
            LINES_PANE,
            &tx,
        );
        let mut history = wire(
            ScrollList::new(Vec::<String>::new(), 0, 0).with_keybindings(keybindings),
            HISTORY_PANE,
            &tx,
        );
        history.set_active(false);

        Host {
            panes: vec![
                Pane {
                    title: " Lines ",
                    list: lines,
                    outer: Rect::default(),
                    inner: Rect::default(),
                },
                Pane {
                    title: " Activated ",
                    list: history,
                    outer: Rect::default(),
                    inner: Rect::default(),
                },
            ],
            focus: LINES_PANE,
            colors,
            status: "Tab: switch pane  Enter/click: activate  q: quit".to_string(),
            status_area: Rect::default(),
            history: Vec::new(),
            rx,
        }
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn list(&self, pane: usize) -> Option<&ScrollList> {
        self.panes.get(pane).map(|p| &p.list)
    }

    pub fn list_mut(&mut self, pane: usize) -> Option<&mut ScrollList> {
        self.panes.get_mut(pane).map(|p| &mut p.list)
    }

    /// Screen rectangle the list in `pane` draws into.
    pub fn list_area(&self, pane: usize) -> Option<Rect> {
        self.panes.get(pane).map(|p| p.inner)
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Compute pane areas for a frame of `area` and push each list's
    /// viewport size into it.
    pub fn layout(&mut self, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[0]);

        self.status_area = rows[1];
        for (pane, outer) in self.panes.iter_mut().zip(cols.iter()) {
            pane.outer = *outer;
            pane.inner = Block::default().borders(Borders::ALL).inner(*outer);
            pane.list.resize(pane.inner.width, pane.inner.height);
        }
    }

    pub fn draw(&self, f: &mut Frame) {
        for (i, pane) in self.panes.iter().enumerate() {
            let style = if i == self.focus {
                self.colors.frame_focused_style
            } else {
                self.colors.frame_style
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .title(pane.title)
                .border_style(style);
            f.render_widget(block, pane.outer);
            f.render_widget(pane.list.view(&self.colors), pane.inner);
            f.render_widget(ScrollbarView::new(&pane.list, &self.colors), pane.inner);
        }
        let status = Paragraph::new(self.status.as_str()).style(self.colors.status_style);
        f.render_widget(status, self.status_area);
    }

    /// Handle a key press. Returns `true` when the host should quit.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let outcome = list::handle_key(&mut self.panes[self.focus].list, key);
        let quit = match outcome {
            Outcome::Consumed => false,
            Outcome::Focus(dir) => {
                self.switch_widget(dir);
                false
            }
            Outcome::Forward => matches!(key.code, KeyCode::Char('q') | KeyCode::Esc),
        };
        self.drain_messages();
        quit
    }

    /// Route an absolute-coordinate mouse event to the pane under it.
    pub fn handle_mouse(&mut self, me: &MouseEvent) {
        let at = Position::new(me.column, me.row);
        let Some(idx) = self.panes.iter().position(|p| p.inner.contains(at)) else {
            return;
        };
        if me.is_primary_down() && idx != self.focus {
            self.set_focus(idx);
        }
        let pane = &mut self.panes[idx];
        let Some(rel) = me.relative_to(pane.inner.x, pane.inner.y) else {
            return;
        };
        if list::handle_mouse(&mut pane.list, &rel) == Outcome::Forward && rel.is_primary_down() {
            if let Some(hit) = scrollbar::hit_test(&pane.list, rel.column, rel.row) {
                debug!(?hit, pane = idx, "scrollbar click");
                scrollbar::apply_hit(&mut pane.list, hit);
            }
        }
        self.drain_messages();
    }

    fn switch_widget(&mut self, dir: FocusDirection) {
        let n = self.panes.len();
        let next = match dir {
            FocusDirection::Next => (self.focus + 1) % n,
            FocusDirection::Prev => (self.focus + n - 1) % n,
        };
        self.set_focus(next);
    }

    fn set_focus(&mut self, idx: usize) {
        self.panes[self.focus].list.set_active(false);
        self.focus = idx;
        self.panes[self.focus].list.set_active(true);
        debug!(pane = idx, "focus changed");
    }

    fn drain_messages(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                HostMessage::Moved { pane, index, line } => {
                    self.status = format!("{}[{}]: {}", self.panes[pane].title.trim(), index, line);
                }
                HostMessage::Activated { pane: LINES_PANE, line, .. } => {
                    self.status = format!("Activated: {}", line);
                    self.history.push(line);
                    if self.history.len() > HISTORY_LIMIT {
                        let excess = self.history.len() - HISTORY_LIMIT;
                        self.history.drain(..excess);
                    }
                    self.panes[HISTORY_PANE].list.set_list(self.history.iter().cloned());
                }
                HostMessage::Activated { line, .. } => {
                    self.status = format!("Recalled: {}", line);
                }
            }
        }
    }
}
