//! Breadth-first nearest-match scans over a grid rectangle.

use std::collections::VecDeque;

use parkgrid_core::{Point, Range};

use crate::route::manhattan;
use crate::traits::Pather;

/// Coordinator for nearest-match scans on a grid rectangle.
///
/// `ScanRange` owns the visited map, the queue, and the neighbor scratch
/// buffer, so repeated queries reuse their allocations instead of
/// reallocating per call.
pub struct ScanRange {
    rng: Range,
    width: usize,
    seen: Vec<bool>,
    queue: VecDeque<usize>,
    nbuf: Vec<Point>,
}

impl ScanRange {
    /// Create a new `ScanRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
            seen: vec![false; rng.len()],
            queue: VecDeque::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the underlying rectangle, growing the visited map if the
    /// new area exceeds its capacity.
    pub fn set_range(&mut self, rng: Range) {
        self.rng = rng;
        self.width = rng.width().max(0) as usize;
        let len = rng.len();
        if len > self.seen.len() {
            self.seen.resize(len, false);
        }
    }

    /// The grid rectangle being scanned.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }

    /// Breadth-first scan from `start` for the matching cell nearest by
    /// Manhattan distance.
    ///
    /// The whole component reachable from `start` is visited, each cell
    /// once: breadth-first discovery order does not in general agree with
    /// Manhattan order, so a closer match can still turn up after the
    /// first one. Neighbors are taken in the order the pather yields them
    /// (the lot pather fixes up, right, down, left); among matches at
    /// equal distance the earliest-discovered one wins. The predicate is
    /// applied to `start` itself as well.
    ///
    /// Returns `None` if `start` lies outside the range or the component
    /// holds no match.
    pub fn nearest_match<P: Pather>(
        &mut self,
        pather: &P,
        start: Point,
        mut is_match: impl FnMut(Point) -> bool,
    ) -> Option<Point> {
        let si = self.idx(start)?;

        // Reset.
        for v in self.seen.iter_mut() {
            *v = false;
        }
        let mut queue = std::mem::take(&mut self.queue);
        let mut nbuf = std::mem::take(&mut self.nbuf);
        queue.clear();

        self.seen[si] = true;
        queue.push_back(si);

        let mut best: Option<(Point, i32)> = None;

        while let Some(ci) = queue.pop_front() {
            let cp = self.point(ci);

            if is_match(cp) {
                let d = manhattan(start, cp);
                if best.is_none_or(|(_, bd)| d < bd) {
                    best = Some((cp, d));
                }
            }

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.seen[ni] {
                    continue;
                }
                self.seen[ni] = true;
                queue.push_back(ni);
            }
        }

        self.queue = queue;
        self.nbuf = nbuf;
        best.map(|(p, _)| p)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ScanRange {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rng.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ScanRange {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let range = Range::deserialize(deserializer)?;
        Ok(ScanRange::new(range))
    }
}
