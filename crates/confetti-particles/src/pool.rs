//! Free-list of expired particles waiting to be reused

use std::collections::VecDeque;

/// FIFO recycle pool.
///
/// Released items are handed back unchanged; resetting them before reuse is
/// the caller's job.
pub struct RecyclePool<T> {
    free: VecDeque<T>,
}

impl<T> Default for RecyclePool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RecyclePool<T> {
    pub fn new() -> Self {
        Self {
            free: VecDeque::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            free: VecDeque::with_capacity(capacity),
        }
    }

    /// Oldest released item, if any
    pub fn acquire(&mut self) -> Option<T> {
        self.free.pop_front()
    }

    pub fn release(&mut self, item: T) {
        self.free.push_back(item);
    }

    pub fn len(&self) -> usize {
        self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.free.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_from_empty_pool() {
        let mut pool: RecyclePool<u32> = RecyclePool::new();
        assert!(pool.acquire().is_none());
        assert!(pool.is_empty());
    }

    #[test]
    fn pool_is_fifo() {
        let mut pool = RecyclePool::with_capacity(4);
        pool.release(1);
        pool.release(2);
        pool.release(3);
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.acquire(), Some(1));
        assert_eq!(pool.acquire(), Some(2));
        pool.release(4);
        assert_eq!(pool.acquire(), Some(3));
        assert_eq!(pool.acquire(), Some(4));
        assert!(pool.is_empty());
    }
}
