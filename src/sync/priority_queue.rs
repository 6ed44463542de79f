//! Array-backed binary heap with a caller-supplied ordering predicate.

use std::fmt;

/// Binary heap ordered by a strict `less_than` predicate.
///
/// The element the predicate ranks lowest is the heap minimum. Elements
/// whose keys compare equal are popped in an unspecified order; callers
/// needing a total order must encode a tiebreaker in the predicate.
pub struct PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    items: Vec<T>,
    less_than: F,
}

impl<T: fmt::Debug, F> fmt::Debug for PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

impl<T, F> PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Creates an empty queue ordered by `less_than`.
    #[must_use]
    pub const fn new(less_than: F) -> Self {
        Self {
            items: Vec::new(),
            less_than,
        }
    }

    /// Returns the number of buffered elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the queue holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Inserts an element, restoring the heap invariant by sifting it
    /// toward the root. Amortised O(log n); never fails.
    pub fn push(&mut self, element: T) {
        self.items.push(element);
        self.sift_up(self.items.len() - 1);
    }

    /// Returns a reference to the minimal element without removing it.
    ///
    /// O(1) and non-mutating. Returns `None` when the queue is empty.
    #[must_use]
    pub fn peek_min(&self) -> Option<&T> {
        self.items.first()
    }

    /// Removes and returns the minimal element per the predicate.
    ///
    /// Moves the last element into the root slot and sifts it down.
    /// Returns `None` when the queue is empty; never panics.
    pub fn pop_min(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let min = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Some(min)
    }

    /// Compares the elements at positions `a` and `b`; out-of-range
    /// positions never rank first.
    fn ranks_before(&self, a: usize, b: usize) -> bool {
        match (self.items.get(a), self.items.get(b)) {
            (Some(x), Some(y)) => (self.less_than)(x, y),
            _ => false,
        }
    }

    fn sift_up(&mut self, start: usize) {
        let mut child = start;
        while child > 0 {
            let parent = (child - 1) >> 1;
            if !self.ranks_before(child, parent) {
                break;
            }
            self.items.swap(child, parent);
            child = parent;
        }
    }

    fn sift_down(&mut self, start: usize) {
        let mut parent = start;
        loop {
            let left = (parent << 1) + 1;
            let right = left + 1;
            let mut smallest = parent;
            if self.ranks_before(left, smallest) {
                smallest = left;
            }
            if self.ranks_before(right, smallest) {
                smallest = right;
            }
            if smallest == parent {
                return;
            }
            self.items.swap(parent, smallest);
            parent = smallest;
        }
    }
}
