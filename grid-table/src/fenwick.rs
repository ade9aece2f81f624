use alloc::vec::Vec;

/// Binary indexed tree over row heights.
///
/// Slot `i` (1-based) holds the sum of the `low_bit(i)` heights ending at row `i - 1`.
#[derive(Clone, Debug, Default)]
pub(crate) struct RowSums {
    nodes: Vec<u64>,
    total: u64,
    top_bit: usize,
}

impl RowSums {
    pub(crate) fn from_heights(heights: &[u32]) -> Self {
        let len = heights.len();
        let mut nodes = alloc::vec![0u64; len + 1];
        let mut total = 0u64;
        for (row, &height) in heights.iter().enumerate() {
            let slot = row + 1;
            let height = u64::from(height);
            total = total.saturating_add(height);
            nodes[slot] = nodes[slot].saturating_add(height);
            let parent = slot + low_bit(slot);
            if parent <= len {
                nodes[parent] = nodes[parent].saturating_add(nodes[slot]);
            }
        }
        Self {
            nodes,
            total,
            top_bit: top_bit(len),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub(crate) fn total(&self) -> u64 {
        self.total
    }

    /// Adds `delta` to the height of `row`.
    pub(crate) fn add(&mut self, row: usize, delta: i64) {
        let len = self.len();
        if row >= len || delta == 0 {
            return;
        }
        self.total = apply_delta(self.total, delta);
        let mut slot = row + 1;
        while slot <= len {
            self.nodes[slot] = apply_delta(self.nodes[slot], delta);
            slot += low_bit(slot);
        }
    }

    /// Sum of the first `rows` heights, i.e. the top offset of row `rows`.
    pub(crate) fn prefix(&self, rows: usize) -> u64 {
        let mut slot = rows.min(self.len());
        let mut sum = 0u64;
        while slot > 0 {
            sum = sum.saturating_add(self.nodes[slot]);
            slot &= slot - 1;
        }
        sum
    }

    /// Number of leading rows whose combined height is `<= offset`.
    ///
    /// For an offset inside the table this is the index of the row containing it.
    pub(crate) fn rows_within(&self, mut offset: u64) -> usize {
        let len = self.len();
        let mut slot = 0usize;
        let mut step = self.top_bit;
        while step != 0 {
            let next = slot + step;
            if next <= len && self.nodes[next] <= offset {
                offset -= self.nodes[next];
                slot = next;
            }
            step >>= 1;
        }
        slot
    }
}

fn apply_delta(value: u64, delta: i64) -> u64 {
    if delta >= 0 {
        value.saturating_add(delta.unsigned_abs())
    } else {
        value.saturating_sub(delta.unsigned_abs())
    }
}

fn low_bit(i: usize) -> usize {
    i & i.wrapping_neg()
}

fn top_bit(len: usize) -> usize {
    if len == 0 {
        0
    } else {
        1usize << (usize::BITS - 1 - len.leading_zeros())
    }
}
