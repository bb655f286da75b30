//! Scrollable, selectable list of text lines.
//!
//! [`ScrollList`] owns its lines, one [`ScrollAxis`] per direction and the
//! [`Selection`]. The host pushes the viewport size in with
//! [`ScrollList::resize`], forwards input through [`handle_key`] /
//! [`handle_mouse`] and draws with [`ScrollList::view`].
//!
//! The last row of the viewport is left for a horizontal scrollbar and the
//! last column for a vertical one; see [`scrollbar`].

use std::fmt;

use tracing::{debug, trace};

use crate::config::keybinds::KeyBindings;
use crate::errors::ListError;

pub mod input;
pub mod model;
pub mod render;
pub mod scroll;
pub mod scrollbar;
pub mod selection;

pub use input::{handle_key, handle_mouse, FocusDirection, Outcome};
pub use model::ListModel;
pub use render::{ListStyle, ListView, StyleLookup};
pub use scroll::ScrollAxis;
pub use scrollbar::{ScrollbarAxis, ScrollbarHit, ScrollbarPart, ScrollbarView};
pub use selection::Selection;

/// Callback invoked with the selected index and its line.
pub type Callback = Box<dyn FnMut(usize, &str)>;

pub struct ScrollList {
    model: ListModel,
    vertical: ScrollAxis,
    horizontal: ScrollAxis,
    selection: Selection,
    width: u16,
    height: u16,
    active: bool,
    keybindings: KeyBindings,
    on_activate: Option<Callback>,
    on_move: Option<Callback>,
}

impl fmt::Debug for ScrollList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollList")
            .field("len", &self.model.len())
            .field("max_width", &self.model.max_width())
            .field("selected", &self.selection.get())
            .field("vertical", &self.vertical)
            .field("horizontal", &self.horizontal)
            .field("viewport", &(self.width, self.height))
            .field("active", &self.active)
            .finish()
    }
}

impl ScrollList {
    /// Create a list showing a copy of `items` in a `width` x `height` viewport.
    pub fn new<I, S>(items: I, width: u16, height: u16) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = ScrollList {
            model: ListModel::new(items),
            vertical: ScrollAxis::new(),
            horizontal: ScrollAxis::new(),
            selection: Selection::new(),
            width,
            height,
            active: true,
            keybindings: KeyBindings::default(),
            on_activate: None,
            on_move: None,
        };
        list.reflow();
        list
    }

    /// Callback fired on Enter and on clicking a line.
    pub fn with_on_activate(mut self, f: impl FnMut(usize, &str) + 'static) -> Self {
        self.on_activate = Some(Box::new(f));
        self
    }

    /// Callback fired after keyboard navigation lands on a line.
    pub fn with_on_move(mut self, f: impl FnMut(usize, &str) + 'static) -> Self {
        self.on_move = Some(Box::new(f));
        self
    }

    pub fn with_keybindings(mut self, keybindings: KeyBindings) -> Self {
        self.keybindings = keybindings;
        self
    }

    pub fn set_on_activate(&mut self, f: Option<Callback>) {
        self.on_activate = f;
    }

    pub fn set_on_move(&mut self, f: Option<Callback>) {
        self.on_move = f;
    }

    pub fn keybindings(&self) -> &KeyBindings {
        &self.keybindings
    }

    /// Replace every line, clear the selection and recompute both bounds.
    pub fn set_list<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.model.replace(items);
        debug!(
            len = self.model.len(),
            max_width = self.model.max_width(),
            "list contents replaced"
        );
        self.reflow();
    }

    /// Clear the selection and recompute both scroll bounds from the current
    /// contents and viewport.
    pub fn reflow(&mut self) {
        self.selection.clear();
        self.recompute_bounds();
    }

    /// Push a new viewport size. Bounds are recomputed and offsets
    /// re-clamped; the selection is kept.
    pub fn resize(&mut self, width: u16, height: u16) {
        if (width, height) == (self.width, self.height) {
            return;
        }
        trace!(width, height, "list resized");
        self.width = width;
        self.height = height;
        self.recompute_bounds();
    }

    fn recompute_bounds(&mut self) {
        self.vertical
            .recompute_bound(self.model.len(), usize::from(self.height));
        self.horizontal
            .recompute_bound(self.model.max_width(), usize::from(self.width));
    }

    pub fn viewport(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn items(&self) -> &[String] {
        self.model.items()
    }

    /// Line at `index`; fails with `IndexOutOfRange` outside `[0, len)`.
    pub fn get(&self, index: usize) -> Result<&str, ListError> {
        self.model.get(index)
    }

    pub fn len(&self) -> usize {
        self.model.len()
    }

    pub fn is_empty(&self) -> bool {
        self.model.is_empty()
    }

    pub fn max_width(&self) -> usize {
        self.model.max_width()
    }

    pub fn vertical(&self) -> &ScrollAxis {
        &self.vertical
    }

    pub fn horizontal(&self) -> &ScrollAxis {
        &self.horizontal
    }

    pub fn vertical_mut(&mut self) -> &mut ScrollAxis {
        &mut self.vertical
    }

    pub fn horizontal_mut(&mut self) -> &mut ScrollAxis {
        &mut self.horizontal
    }

    /// Whether the widget currently has focus. Drives active/inactive styling.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Stored selection index, `None` when unselected.
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.get()
    }

    /// Selection index with `-1` meaning unselected.
    pub fn selected_index_raw(&self) -> isize {
        self.selection
            .get()
            .map_or(-1, |i| isize::try_from(i).unwrap_or(isize::MAX))
    }

    /// Store a selection index. Out-of-range values are kept as-is and make
    /// [`ScrollList::selected`] return `None`.
    pub fn set_selected_index(&mut self, index: Option<usize>) {
        self.selection.set(index);
    }

    /// Selected line, if the selection refers to an existing line.
    pub fn selected(&self) -> Option<&str> {
        self.selection
            .resolve(self.model.len())
            .map(|i| self.model.items()[i].as_str())
    }

    fn content_height(&self) -> usize {
        usize::from(self.height)
    }

    pub fn move_up(&mut self) {
        self.selection.move_up(self.model.len(), &mut self.vertical);
        self.dispatch_move();
    }

    pub fn move_down(&mut self) {
        let height = self.content_height();
        self.selection
            .move_down(self.model.len(), &mut self.vertical, height);
        self.dispatch_move();
    }

    pub fn page_up(&mut self) {
        let height = self.content_height();
        self.selection.page_up(&mut self.vertical, height);
        self.dispatch_move();
    }

    pub fn page_down(&mut self) {
        let height = self.content_height();
        self.selection
            .page_down(self.model.len(), &mut self.vertical, height);
        self.dispatch_move();
    }

    pub fn jump_home(&mut self) {
        self.selection.jump_home(self.model.len(), &mut self.vertical);
        self.dispatch_move();
    }

    pub fn jump_end(&mut self) {
        self.selection.jump_end(self.model.len(), &mut self.vertical);
        self.dispatch_move();
    }

    pub fn scroll_left(&mut self) {
        self.horizontal.step_up();
    }

    pub fn scroll_right(&mut self) {
        self.horizontal.step_down();
    }

    pub fn scroll_up(&mut self) {
        self.vertical.step_up();
    }

    pub fn scroll_down(&mut self) {
        self.vertical.step_down();
    }

    /// Select the line on viewport row `row` and activate it. Returns `false`
    /// when the row is outside the content rows or past the last line.
    pub fn select_at(&mut self, row: usize) -> bool {
        if row >= self.content_height().saturating_sub(1) {
            return false;
        }
        match self
            .selection
            .select_at(row, self.model.len(), &self.vertical)
        {
            Some(index) => {
                debug!(index, row, "list line clicked");
                self.dispatch_activate(index);
                true
            }
            None => false,
        }
    }

    /// Activate the current selection. Returns `false` without firing when
    /// nothing valid is selected.
    pub fn confirm(&mut self) -> bool {
        match self.selection.resolve(self.model.len()) {
            Some(index) => {
                self.dispatch_activate(index);
                true
            }
            None => false,
        }
    }

    fn dispatch_activate(&mut self, index: usize) {
        debug_assert!(index < self.model.len());
        debug!(index, "list line activated");
        if let Some(cb) = self.on_activate.as_mut() {
            cb(index, &self.model.items()[index]);
        }
    }

    fn dispatch_move(&mut self) {
        let Some(index) = self.selection.resolve(self.model.len()) else {
            return;
        };
        trace!(index, offset = self.vertical.offset(), "list selection moved");
        if let Some(cb) = self.on_move.as_mut() {
            cb(index, &self.model.items()[index]);
        }
    }

    /// Rendering adaptor drawing this list with `styles`.
    pub fn view<'a, S: StyleLookup + ?Sized>(&'a self, styles: &'a S) -> ListView<'a, S> {
        ListView::new(self, styles)
    }
}
