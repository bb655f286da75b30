use unicode_width::UnicodeWidthStr;

use crate::errors::ListError;

/// Display width of a line in terminal cells. Wide characters count as two.
pub fn line_width(line: &str) -> usize {
    line.width()
}

/// The lines shown by a list, owned by the widget.
///
/// Contents are only ever replaced as a whole. The widest line is measured
/// on every replacement so the horizontal scroll bound never goes stale.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListModel {
    items: Vec<String>,
    max_width: usize,
}

impl ListModel {
    /// Build a model by copying `items`.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut model = ListModel::default();
        model.replace(items);
        model
    }

    /// Replace every line. The caller's collection is copied, never aliased.
    pub fn replace<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self.max_width = self.items.iter().map(|l| line_width(l)).max().unwrap_or(0);
    }

    /// Line at `index`, or `IndexOutOfRange`.
    pub fn get(&self, index: usize) -> Result<&str, ListError> {
        self.items
            .get(index)
            .map(String::as_str)
            .ok_or(ListError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Width of the widest line (0 when empty).
    pub fn max_width(&self) -> usize {
        self.max_width
    }
}
