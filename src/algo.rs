//! Fork-join parallel merge sort.
//!
//! The sort recursively halves the slice. While a half is at least
//! [`SEQUENTIAL_THRESHOLD`] elements long and the remaining budget is at least 2, the
//! left half is sorted on a freshly spawned scoped thread and the right half on the
//! calling thread, each with `budget - 2`. The caller joins the left thread and merges
//! the two sorted halves in place with a stable rotation-based merge (no buffer).
//!
//! The halves never overlap, so the branches share nothing but the comparator and a
//! block of split counters; the join is the only synchronization point.
//!
//! The main entry points are [`par_sort`], [`par_sort_with_budget`] and [`par_sort_by`].

use cuneiform::cuneiform;
use std::cmp::Ordering;
use std::panic;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use std::thread;

/// Ranges shorter than this are always sorted sequentially.
pub const SEQUENTIAL_THRESHOLD: usize = 1024;

/// Bookkeeping for one sort call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Number of times a range was split in two.
    pub splits: usize,
    /// Number of worker threads actually launched. Lower than `splits` only when the
    /// platform refused to spawn a thread.
    pub spawned: usize,
    /// Deepest split level reached; 0 when the sort never split.
    pub max_depth: usize,
}

// Shared by every branch of one sort; aligned to its own cache line.
#[cuneiform]
struct SplitCounters {
    splits: AtomicUsize,
    spawned: AtomicUsize,
    max_depth: AtomicUsize,
}

impl SplitCounters {
    fn new() -> Self {
        Self {
            splits: AtomicUsize::new(0),
            spawned: AtomicUsize::new(0),
            max_depth: AtomicUsize::new(0),
        }
    }

    fn record_split(&self, depth: usize) {
        self.splits.fetch_add(1, AtomicOrdering::Relaxed);
        self.max_depth.fetch_max(depth, AtomicOrdering::Relaxed);
    }

    fn record_spawn(&self) {
        self.spawned.fetch_add(1, AtomicOrdering::Relaxed);
    }

    fn snapshot(&self) -> SortStats {
        SortStats {
            splits: self.splits.load(AtomicOrdering::Relaxed),
            spawned: self.spawned.load(AtomicOrdering::Relaxed),
            max_depth: self.max_depth.load(AtomicOrdering::Relaxed),
        }
    }
}

/// Half of the hardware parallelism reported by the platform.
///
/// Returns 0 (purely sequential sorting) when the platform cannot tell.
pub fn default_budget() -> usize {
    match thread::available_parallelism() {
        Ok(parallelism) => parallelism.get() / 2,
        Err(err) => {
            tracing::warn!(%err, "available parallelism unknown, sorting sequentially");
            0
        }
    }
}

/// Sorts `data` in ascending order with the [`default_budget`].
///
/// The sort is stable.
///
/// # Examples
///
/// ```
/// use karray::par_sort;
///
/// let mut data: Vec<u32> = (0..5000).rev().collect();
/// par_sort(&mut data);
///
/// assert!(data.windows(2).all(|w| w[0] <= w[1]));
/// ```
pub fn par_sort<T: Ord + Send>(data: &mut [T]) -> SortStats {
    par_sort_with_budget(data, default_budget())
}

/// Sorts `data` in ascending order, splitting while `budget >= 2`.
///
/// # Examples
///
/// ```
/// use karray::prelude::*;
///
/// let mut array: DynamicArray<i64> = (0..2000).map(|i| (i * 7919) % 2000).collect();
/// let stats = par_sort_with_budget(&mut array, 2);
///
/// assert_eq!(stats.splits, 1);
/// assert!(array.windows(2).all(|w| w[0] <= w[1]));
/// ```
pub fn par_sort_with_budget<T: Ord + Send>(data: &mut [T], budget: usize) -> SortStats {
    par_sort_by(data, budget, T::cmp)
}

/// Sorts `data` by `compare`, which must be a total order.
///
/// Equal elements keep their relative order.
///
/// # Panics
///
/// A panic raised by `compare` on any branch is re-raised on the calling thread once
/// every branch has finished. The element order is unspecified afterwards.
pub fn par_sort_by<T, F>(data: &mut [T], budget: usize, compare: F) -> SortStats
where
    T: Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    let length = data.len();
    if length < SEQUENTIAL_THRESHOLD || budget < 2 {
        tracing::debug!(length, budget, "sorting sequentially");
        data.sort_by(&compare);
        return SortStats::default();
    }

    let counters = SplitCounters::new();
    sort_split(data, budget, 0, &compare, &counters);

    let stats = counters.snapshot();
    tracing::debug!(length, budget, ?stats, "parallel sort finished");
    stats
}

fn sort_split<T, F>(
    data: &mut [T],
    budget: usize,
    depth: usize,
    compare: &F,
    counters: &SplitCounters,
) where
    T: Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    let length = data.len();
    if length < SEQUENTIAL_THRESHOLD || budget < 2 {
        data.sort_by(compare);
        return;
    }

    let middle = length / 2;
    let next_budget = budget - 2;
    let next_depth = depth + 1;
    counters.record_split(next_depth);
    tracing::trace!(depth, length, budget, "splitting sort range");

    let (left, right) = data.split_at_mut(middle);
    let left_joined = thread::scope(|scope| {
        let worker = thread::Builder::new()
            .name(format!("karray-sort-{next_depth}"))
            .spawn_scoped(scope, || {
                sort_split(&mut *left, next_budget, next_depth, compare, counters)
            });

        sort_split(&mut *right, next_budget, next_depth, compare, counters);

        match worker {
            Ok(handle) => {
                counters.record_spawn();
                if let Err(payload) = handle.join() {
                    panic::resume_unwind(payload);
                }
                true
            }
            Err(err) => {
                tracing::warn!(%err, depth, "could not spawn sort worker, sorting left half inline");
                false
            }
        }
    });

    if !left_joined {
        sort_split(left, next_budget, next_depth, compare, counters);
    }

    merge_in_place(data, middle, compare);
}

/// Merges the sorted runs `data[..middle]` and `data[middle..]` in place.
///
/// Stable, with O(log n) recursion depth and no auxiliary buffer; blocks are moved
/// with slice rotations.
pub(crate) fn merge_in_place<T, F>(data: &mut [T], middle: usize, compare: &F)
where
    F: Fn(&T, &T) -> Ordering,
{
    let length = data.len();
    if middle == 0 || middle >= length {
        return;
    }
    // Already in order.
    if compare(&data[middle - 1], &data[middle]) != Ordering::Greater {
        return;
    }
    sym_merge(data, 0, middle, length, compare);
}

// Merges `[a, m)` and `[m, b)`; requires `a < m < b`.
fn sym_merge<T, F>(data: &mut [T], a: usize, m: usize, b: usize, compare: &F)
where
    F: Fn(&T, &T) -> Ordering,
{
    let less = |x: &T, y: &T| compare(x, y) == Ordering::Less;

    if m - a == 1 {
        // Single element on the left: find its slot in the right run.
        let (mut lo, mut hi) = (m, b);
        while lo < hi {
            let h = lo + (hi - lo) / 2;
            if less(&data[h], &data[a]) {
                lo = h + 1;
            } else {
                hi = h;
            }
        }
        data[a..lo].rotate_left(1);
        return;
    }

    if b - m == 1 {
        // Single element on the right: find its slot in the left run.
        let (mut lo, mut hi) = (a, m);
        while lo < hi {
            let h = lo + (hi - lo) / 2;
            if !less(&data[m], &data[h]) {
                lo = h + 1;
            } else {
                hi = h;
            }
        }
        data[lo..=m].rotate_right(1);
        return;
    }

    let mid = a + (b - a) / 2;
    let n = mid + m;
    let (mut start, mut r) = if m > mid { (n - b, mid) } else { (a, m) };
    let p = n - 1;

    while start < r {
        let c = start + (r - start) / 2;
        if !less(&data[p - c], &data[c]) {
            start = c + 1;
        } else {
            r = c;
        }
    }

    let end = n - start;
    if start < m && m < end {
        data[start..end].rotate_left(m - start);
    }
    if a < start && start < mid {
        sym_merge(data, a, start, mid, compare);
    }
    if mid < end && end < b {
        sym_merge(data, mid, end, b, compare);
    }
}
