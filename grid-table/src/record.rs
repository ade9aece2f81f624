use alloc::borrow::Cow;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;

/// Read access to a row record's fields by `data_index`.
pub trait CellSource {
    fn cell(&self, data_index: &str) -> Option<Cow<'_, str>>;
}

impl CellSource for BTreeMap<String, String> {
    fn cell(&self, data_index: &str) -> Option<Cow<'_, str>> {
        self.get(data_index).map(|v| Cow::Borrowed(v.as_str()))
    }
}

#[cfg(feature = "std")]
impl<S: core::hash::BuildHasher> CellSource for std::collections::HashMap<String, String, S> {
    fn cell(&self, data_index: &str) -> Option<Cow<'_, str>> {
        self.get(data_index).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl<T: CellSource + ?Sized> CellSource for Arc<T> {
    fn cell(&self, data_index: &str) -> Option<Cow<'_, str>> {
        (**self).cell(data_index)
    }
}

/// A stable row identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowKey {
    /// Position in the data set; only stable while rows are not reordered.
    Index(usize),
    Num(i64),
    Str(String),
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "#{i}"),
            Self::Num(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RowKey {
    fn from(value: i64) -> Self {
        Self::Num(value)
    }
}

impl From<String> for RowKey {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for RowKey {
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

/// Maps `(row_index, row)` to the row's key.
pub type RowKeyFn<R, K> = Arc<dyn Fn(usize, &R) -> K + Send + Sync>;

/// Keys rows by their position.
pub fn row_key_index<R>() -> RowKeyFn<R, RowKey> {
    Arc::new(|index, _| RowKey::Index(index))
}

/// Keys rows by the text of `field`, falling back to the row index when the field is absent.
pub fn row_key_field<R: CellSource>(field: impl Into<String>) -> RowKeyFn<R, RowKey> {
    let field: String = field.into();
    Arc::new(move |index, row: &R| match row.cell(&field) {
        Some(value) => RowKey::Str(value.into_owned()),
        None => RowKey::Index(index),
    })
}
