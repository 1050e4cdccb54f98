use crate::error::Error;
use crate::sift;
use crate::Record;
use core::fmt::{Debug, Formatter};
use core::iter::FromIterator;
use log::debug;

/// Capacity of a heap created with `MaxHeap::new()`.
pub const DEFAULT_CAPACITY: usize = 1023;

/// A fixed-capacity binary max-heap of `(priority, payload)` records.
///
/// The capacity is chosen at construction and never changes. Inserting into a
/// full heap fails with `Error::CapacityExceeded` and leaves the heap as it was.
pub struct MaxHeap<P, T> {
    // Live records are exactly `slots[..]`; `slots.len()` is the count.
    slots: Vec<Record<P, T>>,
    capacity: usize,
}

impl<P: Ord, T> MaxHeap<P, T> {
    /// Creates an empty heap with `DEFAULT_CAPACITY` slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty heap that can hold at most `capacity` records.
    ///
    /// Storage for up to `DEFAULT_CAPACITY` records is reserved up front; a
    /// larger heap grows its storage as records arrive, never past `capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
        }
    }

    /// Takes ownership of an unordered sequence and heapifies it in O(n).
    ///
    /// The heap is full on return: its capacity is the length of `records`.
    pub fn from_vec(records: Vec<Record<P, T>>) -> Self {
        let mut slots = records;
        sift::heapify(&mut slots);
        let heap = Self {
            capacity: slots.len(),
            slots,
        };
        heap.check();
        heap
    }

    pub fn count(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Inserts a record into the partially-sorted heap.
    pub fn insert(&mut self, priority: P, payload: T) -> Result<(), Error> {
        if self.slots.len() == self.capacity {
            debug!("insert rejected, heap is full ({} records)", self.capacity);
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        let index = self.slots.len();
        self.slots.push(Record { priority, payload });
        sift::sift_up(&mut self.slots, index);
        self.check();
        Ok(())
    }

    /// Removes the record with the greatest priority and returns its payload.
    ///
    /// Returns `None` if the heap is empty.
    pub fn extract_max(&mut self) -> Option<T> {
        self.extract_max_record().map(|record| record.payload)
    }

    /// Like `extract_max`, but also hands back the priority.
    pub fn extract_max_record(&mut self) -> Option<Record<P, T>> {
        if self.slots.is_empty() {
            return None;
        }
        // The last record takes the root's place, then sinks.
        let record = self.slots.swap_remove(0);
        sift::sift_down(&mut self.slots, 0);
        self.check();
        Some(record)
    }

    /// The record that `extract_max` would remove next.
    pub fn peek(&self) -> Option<&Record<P, T>> {
        self.slots.first()
    }

    /// Priorities of the live records, in storage order.
    pub fn priorities(&self) -> impl Iterator<Item = &P> + '_ {
        self.slots.iter().map(|r| &r.priority)
    }

    /// Consumes the heap, returning its records in ascending priority order.
    pub fn sort(self) -> Vec<Record<P, T>> {
        let mut slots = self.slots;
        sift::sort_heap(&mut slots);
        slots
    }

    /// Sorts `records` ascending by priority by building a heap over them and
    /// then sorting that heap.
    pub fn heapsort(records: &mut Vec<Record<P, T>>) {
        let heap = Self::from_vec(core::mem::replace(records, Vec::new()));
        *records = heap.sort();
    }

    fn check(&self) {
        debug_assert!(sift::is_heap(&self.slots));
        debug_assert!(self.slots.len() <= self.capacity);
    }
}

impl<P: Ord, T> Default for MaxHeap<P, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Ord, T> From<Vec<Record<P, T>>> for MaxHeap<P, T> {
    fn from(records: Vec<Record<P, T>>) -> Self {
        Self::from_vec(records)
    }
}

impl<P: Ord, T> FromIterator<Record<P, T>> for MaxHeap<P, T> {
    fn from_iter<I: IntoIterator<Item = Record<P, T>>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<P: Ord, T> FromIterator<(P, T)> for MaxHeap<P, T> {
    fn from_iter<I: IntoIterator<Item = (P, T)>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().map(Record::from).collect())
    }
}

impl<P: Debug, T> Debug for MaxHeap<P, T> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        write!(fmt, "MaxHeap({}/{}):", self.slots.len(), self.capacity)?;
        for record in self.slots.iter() {
            write!(fmt, " {:?}", record.priority)?;
        }
        Ok(())
    }
}
