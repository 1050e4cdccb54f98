use crate::Record;

pub fn init_test() {
    drop(env_logger::try_init());
}

/// Builds records whose payload is the position of the priority in `priorities`.
pub fn records(priorities: &[i64]) -> Vec<Record<i64, usize>> {
    priorities
        .iter()
        .enumerate()
        .map(|(i, &p)| Record::new(p, i))
        .collect()
}

pub fn priorities_of<P: Copy, T>(records: &[Record<P, T>]) -> Vec<P> {
    records.iter().map(|r| r.priority).collect()
}

pub fn payloads_of<P, T: Copy>(records: &[Record<P, T>]) -> Vec<T> {
    records.iter().map(|r| r.payload).collect()
}

pub fn sorted<P: Ord>(mut v: Vec<P>) -> Vec<P> {
    v.sort();
    v
}

/// `f64` ordered by `f64::total_cmp`, so NaN has a fixed place above every number.
#[derive(Clone, Copy, Debug)]
pub struct TotalF64(pub f64);

impl PartialEq for TotalF64 {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == core::cmp::Ordering::Equal
    }
}

impl Eq for TotalF64 {}

impl PartialOrd for TotalF64 {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TotalF64 {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}
