// ----------------------------------------------
// MinHeap
// ----------------------------------------------

pub type Priority = f32;

#[derive(Clone, Debug)]
struct HeapEntry<T> {
    priority: Priority,
    value: T,
}

// Binary min-heap of (priority, value) pairs.
//
// Unlike a keyed priority queue the same value can be added any number
// of times; searches rely on that to re-push a tile with a better cost
// and let the stale entry pop later.
//
// Pop order among equal priorities is unspecified.
#[derive(Clone, Debug)]
pub struct MinHeap<T> {
    entries: Vec<HeapEntry<T>>,
}

impl<T> MinHeap<T> {
    #[inline]
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: Vec::with_capacity(capacity) }
    }

    pub fn add(&mut self, priority: Priority, value: T) {
        debug_assert!(!priority.is_nan(), "NaN heap priority!");
        self.entries.push(HeapEntry { priority, value });
        self.sift_up(self.entries.len() - 1);
    }

    // Removes and returns the value with the smallest priority.
    pub fn pop(&mut self) -> Option<T> {
        self.pop_with_priority().map(|(_, value)| value)
    }

    pub fn pop_with_priority(&mut self) -> Option<(Priority, T)> {
        if self.entries.is_empty() {
            return None;
        }

        // Move the last entry to the root, then restore the heap order.
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let root = self.entries.pop()?;

        if !self.entries.is_empty() {
            self.sift_down(0);
        }

        Some((root.priority, root.value))
    }

    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.entries.first().map(|entry| &entry.value)
    }

    #[inline]
    pub fn peek_priority(&self) -> Option<Priority> {
        self.entries.first().map(|entry| entry.priority)
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // Linear scan. For validation and debugging only.
    pub fn contains(&self, value: &T) -> bool
        where T: PartialEq
    {
        self.entries.iter().any(|entry| entry.value == *value)
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[index].priority >= self.entries[parent].priority {
                break;
            }
            self.entries.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left  = (2 * index) + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.entries[left].priority < self.entries[smallest].priority {
                smallest = left;
            }
            if right < len && self.entries[right].priority < self.entries[smallest].priority {
                smallest = right;
            }
            if smallest == index {
                break;
            }

            self.entries.swap(index, smallest);
            index = smallest;
        }
    }

    #[cfg(test)]
    fn is_valid_heap(&self) -> bool {
        (1..self.entries.len()).all(|i| self.entries[(i - 1) / 2].priority <= self.entries[i].priority)
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ----------------------------------------------
// Unit Tests
// ----------------------------------------------
