//! Immutable string collection with independent, restartable cursors.

use std::iter::FusedIterator;

use thiserror::Error;

/// Raised by [`Cursor::try_next`] when no unread elements remain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CursorError {
    #[error("cursor exhausted after {consumed} items")]
    Exhausted { consumed: usize },
}

/// Ordered, read-only sequence of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    items: Vec<String>,
}

impl Collection {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// A fresh cursor positioned before the first element.
    ///
    /// Cursors borrow the elements and track their own position, so any
    /// number of them can be read side by side.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor {
            items: &self.items,
            position: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Collection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a str;
    type IntoIter = Cursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}

/// Read position over a [`Collection`].
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    items: &'a [String],
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn has_next(&self) -> bool {
        self.position < self.items.len()
    }

    /// Return the element under the cursor and advance past it.
    pub fn try_next(&mut self) -> Result<&'a str, CursorError> {
        let item = self.items.get(self.position).ok_or(CursorError::Exhausted {
            consumed: self.position,
        })?;
        self.position += 1;
        Ok(item.as_str())
    }

    /// Number of elements already returned.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.items.len() - self.position
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl ExactSizeIterator for Cursor<'_> {}

impl FusedIterator for Cursor<'_> {}
