//! Item types shown by the list view.

use std::fmt;

/// Anything the list view can show: a stable id plus a one-line label.
///
/// The list view never looks at an item beyond these two accessors, so work
/// records, collection records and plain [`DisplayItem`]s all render the
/// same way.
///
/// # Examples
///
/// ```
/// use bibliognost::list::Labeled;
///
/// struct Shelf {
///     number: i64,
///     name: String,
/// }
///
/// impl Labeled for Shelf {
///     fn id(&self) -> i64 {
///         self.number
///     }
///
///     fn label(&self) -> &str {
///         &self.name
///     }
/// }
/// ```
pub trait Labeled {
    /// The record id this item was built from.
    fn id(&self) -> i64;

    /// The text drawn for this item.
    fn label(&self) -> &str;
}

/// An opaque `{id, label}` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayItem {
    pub id: i64,
    pub label: String,
}

impl DisplayItem {
    pub fn new(id: i64, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

impl Labeled for DisplayItem {
    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for DisplayItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
