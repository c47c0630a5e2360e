use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Min-ordered collection capped at a fixed number of elements.
///
/// Once full, an insert keeps the larger of the incoming item and the
/// current minimum, so the heap always holds the `capacity` largest items
/// pushed so far.
#[derive(Debug, Clone)]
pub struct BoundedMinHeap<T: Ord> {
    heap: BinaryHeap<Reverse<T>>,
    capacity: usize,
}

impl<T: Ord> BoundedMinHeap<T> {
    pub fn new(capacity: usize) -> Self {
        Self::with_size_hint(capacity, 0)
    }

    /// Like `new`, but preallocates for at most `min(capacity, hint)` items.
    pub fn with_size_hint(capacity: usize, hint: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity.min(hint)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.capacity
    }

    /// Insert `item`, returning whichever element no longer fits.
    ///
    /// With room to spare nothing is evicted. On a full heap the evicted
    /// element is either the old minimum or `item` itself when it is not
    /// larger than that minimum.
    pub fn push(&mut self, item: T) -> Option<T> {
        if self.capacity == 0 {
            return Some(item);
        }
        if self.heap.len() < self.capacity {
            self.heap.push(Reverse(item));
            return None;
        }
        match self.heap.peek_mut() {
            Some(mut min) if item > min.0 => Some(std::mem::replace(&mut min.0, item)),
            _ => Some(item),
        }
    }

    pub fn peek_min(&self) -> Option<&T> {
        self.heap.peek().map(|Reverse(item)| item)
    }

    pub fn pop_min(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(item)| item)
    }

    /// Drain the heap smallest-first.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.heap.len());
        while let Some(item) = self.pop_min() {
            out.push(item);
        }
        out
    }
}

impl<T: Ord> Extend<T> for BoundedMinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}
