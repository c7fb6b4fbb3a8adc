use std::collections::VecDeque;

/// Default number of unique values kept in the window
pub const DEFAULT_WINDOW_SIZE: usize = 10;

/// Bounded, deduplicated FIFO of the most recently admitted numbers
#[derive(Debug, Clone)]
pub struct NumberWindow {
    items: VecDeque<i64>,
    capacity: usize,
}

impl NumberWindow {
    /// Creates an empty window. A zero capacity is bumped to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn with_default_size() -> Self {
        Self::new(DEFAULT_WINDOW_SIZE)
    }

    /// Admits a value, evicting the oldest entry when full.
    /// Values already present are ignored and keep their position.
    pub fn admit(&mut self, value: i64) -> bool {
        if self.items.contains(&value) {
            return false;
        }

        if self.items.len() >= self.capacity {
            self.items.pop_front();
        }

        self.items.push_back(value);
        true
    }

    /// Admits values in order, returning how many were inserted
    pub fn admit_all(&mut self, values: &[i64]) -> usize {
        values.iter().filter(|&&v| self.admit(v)).count()
    }

    pub fn snapshot(&self) -> WindowSnapshot {
        let current: Vec<i64> = self.items.iter().copied().collect();
        let previous = match current.split_last() {
            Some((_, rest)) => rest.to_vec(),
            None => Vec::new(),
        };
        let sum: i128 = current.iter().map(|&v| i128::from(v)).sum();
        let average = if current.is_empty() {
            0.0
        } else {
            sum as f64 / current.len() as f64
        };

        WindowSnapshot {
            previous,
            current,
            sum,
            average,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for NumberWindow {
    fn default() -> Self {
        Self::with_default_size()
    }
}

/// Read-only view of the window and its derived statistics
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSnapshot {
    pub previous: Vec<i64>,
    pub current: Vec<i64>,
    pub sum: i128,
    pub average: f64,
}

impl WindowSnapshot {
    /// Average rendered with exactly two decimal places
    pub fn formatted_average(&self) -> String {
        format!("{:.2}", self.average)
    }
}
