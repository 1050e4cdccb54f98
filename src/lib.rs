//! A fixed-capacity binary max-heap with bulk heapify and in-place heapsort.
//!
//! ```
//! use maxheap::{heapsort, Record};
//!
//! let mut v = vec![Record::new(4, 'a'), Record::new(1, 'b'), Record::new(3, 'c')];
//! heapsort(&mut v);
//! assert_eq!(v.iter().map(|r| r.payload).collect::<String>(), "bca");
//! ```
//!
//! The index helpers and restore loops stay inside the crate:
//!
//! ```compile_fail
//! maxheap::sift::parent(0);
//! ```

pub mod error;
pub mod max_heap;
pub(crate) mod sift;

#[cfg(test)]
mod testing;

pub use crate::error::Error;
pub use crate::max_heap::{MaxHeap, DEFAULT_CAPACITY};
pub use crate::sift::heapsort;

/// One slot of a heap: a priority and the payload it was inserted with.
///
/// The heap only ever looks at `priority`. `payload` is moved around with it
/// and handed back to the caller on extraction.
#[derive(Clone, Debug, PartialEq)]
pub struct Record<P, T> {
    pub priority: P,
    pub payload: T,
}

impl<P, T> Record<P, T> {
    pub fn new(priority: P, payload: T) -> Self {
        Self { priority, payload }
    }
}

impl<P, T> From<(P, T)> for Record<P, T> {
    fn from((priority, payload): (P, T)) -> Self {
        Self { priority, payload }
    }
}

#[test]
fn record_from_tuple_test() {
    let r: Record<i32, &str> = (7, "seven").into();
    assert_eq!(r, Record::new(7, "seven"));
}
