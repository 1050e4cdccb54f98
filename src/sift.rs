// Restore primitives over a slice of records laid out as a 0-indexed binary tree:
//
//           0
//     1            2
//  3     4      5     6
//
// Every function treats the whole slice as the live range. Callers that keep
// dead records past the end pass `&mut slots[..count]`.

use crate::Record;
use log::{debug, trace};

pub fn left(parent: usize) -> usize { parent * 2 + 1 }
pub fn right(parent: usize) -> usize { parent * 2 + 2 }
pub fn parent(child: usize) -> usize {
    debug_assert!(child > 0, "the root has no parent");
    (child - 1) / 2
}

/// Moves the record at `i` toward the root while its priority exceeds its parent's.
pub fn sift_up<P: Ord, T>(slots: &mut [Record<P, T>], mut i: usize) {
    while i > 0 {
        let p = parent(i);
        if slots[i].priority <= slots[p].priority {
            break;
        }
        trace!("sift_up: {} <-> {}", i, p);
        slots.swap(i, p);
        i = p;
    }
}

/// Moves the record at `i` toward the leaves while one of its children exceeds it.
///
/// The record is swapped with the larger child. When both children have the
/// same priority the left one wins.
pub fn sift_down<P: Ord, T>(slots: &mut [Record<P, T>], mut i: usize) {
    let count = slots.len();
    loop {
        let l = left(i);
        let r = right(i);

        let mut largest = i;
        if l < count && slots[l].priority > slots[largest].priority {
            largest = l;
        }
        if r < count && slots[r].priority > slots[largest].priority {
            largest = r;
        }

        if largest == i {
            break;
        }
        trace!("sift_down: {} <-> {}", i, largest);
        slots.swap(i, largest);
        i = largest;
    }
}

/// Establishes the heap invariant over an arbitrary arrangement in O(n).
///
/// Sinks every node that has at least one child, starting from the last such
/// node and working back to the root.
pub fn heapify<P: Ord, T>(slots: &mut [Record<P, T>]) {
    let count = slots.len();
    debug!("heapify: {} records", count);
    for i in (0..count / 2).rev() {
        sift_down(slots, i);
    }
}

/// Sorts a slice that already satisfies the heap invariant into ascending
/// priority order, by repeatedly moving the root past the end of the live range.
pub fn sort_heap<P: Ord, T>(slots: &mut [Record<P, T>]) {
    debug!("sort_heap: {} records", slots.len());
    for end in (1..slots.len()).rev() {
        slots.swap(0, end);
        sift_down(&mut slots[..end], 0);
    }
    debug!("sort_heap: done");
}

/// Sorts `records` in place, ascending by priority. Not stable.
pub fn heapsort<P: Ord, T>(records: &mut [Record<P, T>]) {
    heapify(records);
    sort_heap(records);
}

/// Returns true if every record's priority is at most its parent's.
pub fn is_heap<P: Ord, T>(slots: &[Record<P, T>]) -> bool {
    (1..slots.len()).all(|i| slots[i].priority <= slots[parent(i)].priority)
}
