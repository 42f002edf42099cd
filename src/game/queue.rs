use std::collections::VecDeque;

use super::board::Coord;

/// A player's pieces on the board, oldest first, holding at most
/// `capacity` coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceQueue {
    pieces: VecDeque<Coord>,
    capacity: usize,
}

impl PieceQueue {
    pub fn with_capacity(capacity: usize) -> Self {
        PieceQueue {
            pieces: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a piece. Returns the evicted oldest piece if the queue was
    /// already full.
    pub fn push(&mut self, coord: Coord) -> Option<Coord> {
        self.pieces.push_back(coord);
        if self.pieces.len() > self.capacity {
            self.pieces.pop_front()
        } else {
            None
        }
    }

    /// Remove the first entry equal to `coord`. Returns whether one was found.
    pub fn remove(&mut self, coord: Coord) -> bool {
        match self.position(coord) {
            Some(idx) => {
                self.pieces.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Index of `coord`, 0 being the oldest piece.
    pub fn position(&self, coord: Coord) -> Option<usize> {
        self.pieces.iter().position(|&c| c == coord)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.position(coord).is_some()
    }

    /// The oldest piece, the next one to vanish.
    pub fn front(&self) -> Option<Coord> {
        self.pieces.front().copied()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.pieces.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.pieces.iter().copied()
    }
}
