//! Tail history ring buffer.
//!
//! Stores the cells the snake body occupies behind its neck. Logical index 0 is
//! the most recently vacated position; higher indices are older. Physically the
//! blocks never move: a push only rotates the head index, so a simulation step
//! costs O(1) regardless of the body length.
//!
//! Capacity is fixed at allocation time (the terminal cell count). A terminal
//! resize goes through [`TailBuffer::reallocate`], which always discards the
//! history and hands back a zeroed buffer of the new capacity.

use std::collections::TryReserveError;

use crate::types::{Coords, TailBlock};

#[derive(Debug, Clone)]
pub struct TailBuffer {
    slots: Vec<TailBlock>,
    /// Physical index of logical slot 0.
    head: usize,
    len: usize,
}

impl TailBuffer {
    /// Allocate a zeroed buffer with room for `capacity` blocks.
    pub fn with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity)?;
        slots.resize(capacity, TailBlock::default());
        Ok(Self {
            slots,
            head: 0,
            len: 0,
        })
    }

    /// Replace the buffer with a zeroed one of `capacity` blocks.
    ///
    /// History is never carried over, even when the capacity is unchanged.
    /// On failure the old buffer is left in place.
    pub fn reallocate(&mut self, capacity: usize) -> Result<(), TryReserveError> {
        *self = Self::with_capacity(capacity)?;
        Ok(())
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Record a newly vacated position at logical index 0.
    ///
    /// The history keeps at most `max_len` blocks; the oldest falls off.
    pub fn push_front(&mut self, block: TailBlock, max_len: usize) {
        let cap = self.slots.len();
        if cap == 0 || max_len == 0 {
            return;
        }
        self.head = (self.head + cap - 1) % cap;
        self.slots[self.head] = block;
        self.len = (self.len + 1).min(max_len).min(cap);
    }

    /// Block at logical index `i` (0 = most recent).
    pub fn get(&self, i: usize) -> Option<&TailBlock> {
        if i >= self.len {
            return None;
        }
        Some(&self.slots[(self.head + i) % self.slots.len()])
    }

    /// Blocks from most recent to oldest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &TailBlock> + '_ {
        (0..self.len).filter_map(move |i| self.get(i))
    }

    pub fn contains(&self, pos: Coords) -> bool {
        self.iter().any(|b| b.pos == pos)
    }

    /// Zero every slot and forget the history.
    pub fn clear(&mut self) {
        self.slots.fill(TailBlock::default());
        self.head = 0;
        self.len = 0;
    }

    /// Raw physical slots, including stale ones beyond `len`.
    pub fn slots(&self) -> &[TailBlock] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(x: i32, y: i32) -> TailBlock {
        TailBlock::new(Coords::new(x, y))
    }

    #[test]
    fn push_front_orders_most_recent_first() {
        let mut buf = TailBuffer::with_capacity(8).unwrap();
        buf.push_front(block(1, 0), 4);
        buf.push_front(block(2, 0), 4);
        buf.push_front(block(3, 0), 4);

        let xs: Vec<i32> = buf.iter().map(|b| b.pos.x).collect();
        assert_eq!(xs, vec![3, 2, 1]);
        assert_eq!(buf.get(0).unwrap().pos.x, 3);
    }

    #[test]
    fn max_len_drops_the_oldest() {
        let mut buf = TailBuffer::with_capacity(8).unwrap();
        for x in 0..5 {
            buf.push_front(block(x, 0), 2);
        }
        assert_eq!(buf.len(), 2);
        let xs: Vec<i32> = buf.iter().map(|b| b.pos.x).collect();
        assert_eq!(xs, vec![4, 3]);
    }

    #[test]
    fn wraps_around_physical_end() {
        let mut buf = TailBuffer::with_capacity(3).unwrap();
        for x in 0..10 {
            buf.push_front(block(x, 0), 3);
        }
        let xs: Vec<i32> = buf.iter().map(|b| b.pos.x).collect();
        assert_eq!(xs, vec![9, 8, 7]);
    }

    #[test]
    fn growing_max_len_does_not_revive_stale_slots() {
        let mut buf = TailBuffer::with_capacity(8).unwrap();
        for x in 0..6 {
            buf.push_front(block(x, 0), 1);
        }
        assert_eq!(buf.len(), 1);
        buf.push_front(block(42, 0), 6);
        assert_eq!(buf.len(), 2);
        let xs: Vec<i32> = buf.iter().map(|b| b.pos.x).collect();
        assert_eq!(xs, vec![42, 5]);
    }

    #[test]
    fn clear_zeroes_everything() {
        let mut buf = TailBuffer::with_capacity(4).unwrap();
        let mut b = block(3, 3);
        b.ingested = true;
        buf.push_front(b, 4);
        buf.clear();
        assert!(buf.is_empty());
        assert!(buf.slots().iter().all(|s| *s == TailBlock::default()));
    }

    #[test]
    fn zero_capacity_ignores_pushes() {
        let mut buf = TailBuffer::with_capacity(0).unwrap();
        buf.push_front(block(1, 1), 5);
        assert!(buf.is_empty());
        assert!(!buf.contains(Coords::new(1, 1)));
    }
}
