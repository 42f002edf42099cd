use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

/// A board position, row 0 at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// Step `steps` times along `(dr, dc)`. `None` if that leaves the
    /// non-negative quadrant; the caller still has to bounds-check the top.
    fn offset(self, dr: isize, dc: isize, steps: usize) -> Option<Coord> {
        let steps = steps as isize;
        Some(Coord {
            row: self.row.checked_add_signed(dr * steps)?,
            col: self.col.checked_add_signed(dc * steps)?,
        })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Horizontal, vertical, diagonal down-right, diagonal up-right.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Square grid stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty `size`×`size` board
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Get the cell at a specific position.
    ///
    /// Panics if the position is off the board; use [`Board::in_bounds`]
    /// first for untrusted input.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.size + col]
    }

    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.row * self.size + coord.col] = cell;
    }

    pub(crate) fn clear(&mut self, coord: Coord) {
        self.set(coord, Cell::Empty);
    }

    /// Number of non-empty cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// All coordinates holding `cell`, row-major.
    pub fn cells_matching(&self, cell: Cell) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == cell)
            .map(|(i, _)| Coord::new(i / self.size, i % self.size))
            .collect()
    }

    /// Check whether `cell` has a run of at least `win_length` through
    /// `(row, col)` in any of the four line directions.
    ///
    /// The origin always counts as one, whatever the board holds there, and
    /// each side of it is scanned at most `win_length - 1` steps.
    pub fn check_win(&self, row: usize, col: usize, cell: Cell, win_length: usize) -> bool {
        let origin = Coord::new(row, col);
        DIRECTIONS.iter().any(|&(dr, dc)| {
            let forward = self.count_direction(origin, dr, dc, cell, win_length);
            let backward = self.count_direction(origin, -dr, -dc, cell, win_length);
            1 + forward + backward >= win_length
        })
    }

    /// Same scan as [`Board::check_win`], but return the cells of the first
    /// winning run found, ordered along the line.
    pub fn winning_run(
        &self,
        row: usize,
        col: usize,
        cell: Cell,
        win_length: usize,
    ) -> Option<Vec<Coord>> {
        let origin = Coord::new(row, col);
        for &(dr, dc) in &DIRECTIONS {
            let forward = self.count_direction(origin, dr, dc, cell, win_length);
            let backward = self.count_direction(origin, -dr, -dc, cell, win_length);
            if 1 + forward + backward >= win_length {
                let run = (1..=backward)
                    .rev()
                    .filter_map(|step| origin.offset(-dr, -dc, step))
                    .chain(std::iter::once(origin))
                    .chain((1..=forward).filter_map(|step| origin.offset(dr, dc, step)))
                    .collect();
                return Some(run);
            }
        }
        None
    }

    /// Count consecutive `cell`s from `origin` (exclusive) along one
    /// direction, stopping after `win_length - 1` steps.
    fn count_direction(
        &self,
        origin: Coord,
        dr: isize,
        dc: isize,
        cell: Cell,
        win_length: usize,
    ) -> usize {
        let mut count = 0;
        for step in 1..win_length {
            match origin.offset(dr, dc, step) {
                Some(c) if self.in_bounds(c.row, c.col) && self.get(c.row, c.col) == cell => {
                    count += 1;
                }
                _ => break,
            }
        }
        count
    }
}
