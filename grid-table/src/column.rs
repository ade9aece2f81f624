use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{TableError, VirtualRange};

/// Describes one table column.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    /// Field of the row record shown in this column.
    pub data_index: String,
    /// Identity of the column; unique within a table.
    pub key: String,
    pub title: String,
    pub width: u32,
}

impl Column {
    /// Creates a column whose `key` and `data_index` are the same field name.
    pub fn new(key: impl Into<String>, title: impl Into<String>, width: u32) -> Self {
        let key = key.into();
        Self {
            data_index: key.clone(),
            key,
            title: title.into(),
            width,
        }
    }

    pub fn with_data_index(mut self, data_index: impl Into<String>) -> Self {
        self.data_index = data_index.into();
        self
    }
}

/// A validated, cheaply clonable column set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Columns {
    columns: Arc<[Column]>,
    // starts[i] is the x offset of column i; starts[len] is the total width.
    starts: Arc<[u64]>,
}

impl Columns {
    /// Validates that column keys are unique.
    pub fn new(columns: impl Into<Vec<Column>>) -> Result<Self, TableError> {
        let columns: Vec<Column> = columns.into();
        let mut seen = BTreeSet::new();
        for column in &columns {
            if !seen.insert(column.key.as_str()) {
                return Err(TableError::duplicate_column_key(column.key.clone()));
            }
        }

        let mut starts = Vec::with_capacity(columns.len() + 1);
        let mut x = 0u64;
        starts.push(x);
        for column in &columns {
            x = x.saturating_add(u64::from(column.width));
            starts.push(x);
        }

        Ok(Self {
            columns: columns.into(),
            starts: starts.into(),
        })
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn as_slice(&self) -> &[Column] {
        &self.columns
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Column> {
        self.columns.iter()
    }

    pub fn get(&self, key: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.key == key)
    }

    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.key == key)
    }

    /// Sum of all column widths; this is the body content width.
    pub fn total_width(&self) -> u64 {
        self.starts.last().copied().unwrap_or(0)
    }

    pub fn column_start(&self, index: usize) -> Option<u64> {
        (index < self.len()).then(|| self.starts[index])
    }

    /// Columns intersecting `[scroll_left, scroll_left + viewport_width)`.
    pub fn visible_columns(&self, scroll_left: u64, viewport_width: u32) -> VirtualRange {
        let total = self.total_width();
        if self.is_empty() || viewport_width == 0 || scroll_left >= total {
            return VirtualRange::EMPTY;
        }
        let right = scroll_left.saturating_add(u64::from(viewport_width));
        // starts is sorted; the first column is the last one starting at or before scroll_left.
        let start_index = self.starts[..self.len()]
            .partition_point(|&x| x <= scroll_left)
            .saturating_sub(1);
        let end_index = self.starts[..self.len()].partition_point(|&x| x < right);
        VirtualRange {
            start_index,
            end_index,
        }
    }
}

impl<'a> IntoIterator for &'a Columns {
    type Item = &'a Column;
    type IntoIter = core::slice::Iter<'a, Column>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
