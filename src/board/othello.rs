use crate::board::{Coord, GameState, Player};
use crate::error::BoardError;
use std::fmt;

const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

pub const MIN_SIDE: usize = 4;
pub const MAX_SIDE: usize = 26;

/// Square Othello board. Cells are stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    side: usize,
    cells: Vec<Option<Player>>,
    to_move: Player,
}

impl Board {
    /// Standard opening: four discs in the centre, player one to move.
    pub fn new(side: usize) -> Result<Self, BoardError> {
        if side % 2 != 0 || !(MIN_SIDE..=MAX_SIDE).contains(&side) {
            return Err(BoardError::InvalidSize(side));
        }
        let mut board = Self { side, cells: vec![None; side * side], to_move: Player::One };
        let h = side / 2;
        board.set(Coord::new(h - 1, h - 1), Some(Player::Two));
        board.set(Coord::new(h, h), Some(Player::Two));
        board.set(Coord::new(h - 1, h), Some(Player::One));
        board.set(Coord::new(h, h - 1), Some(Player::One));
        Ok(board)
    }

    pub fn standard() -> Self {
        let mut cells = vec![None; 64];
        cells[27] = Some(Player::Two);
        cells[28] = Some(Player::One);
        cells[35] = Some(Player::One);
        cells[36] = Some(Player::Two);
        Self { side: 8, cells, to_move: Player::One }
    }

    /// Parse a text grid: `X`/`B` for player one, `O`/`W` for player two,
    /// `.`/`-` for empty. Whitespace inside a row is ignored.
    pub fn from_rows<S: AsRef<str>>(rows: &[S], to_move: Player) -> Result<Self, BoardError> {
        let side = rows.len();
        if side % 2 != 0 || !(MIN_SIDE..=MAX_SIDE).contains(&side) {
            return Err(BoardError::InvalidSize(side));
        }
        let mut cells = Vec::with_capacity(side * side);
        for (r, row) in rows.iter().enumerate() {
            let before = cells.len();
            for ch in row.as_ref().chars().filter(|c| !c.is_whitespace()) {
                cells.push(match ch {
                    'X' | 'x' | 'B' | 'b' => Some(Player::One),
                    'O' | 'o' | 'W' | 'w' => Some(Player::Two),
                    '.' | '-' => None,
                    other => return Err(BoardError::Parse(format!("unexpected {other:?} in row {r}"))),
                });
            }
            if cells.len() - before != side {
                return Err(BoardError::Parse(format!(
                    "row {r} has {} cells, expected {side}",
                    cells.len() - before
                )));
            }
        }
        Ok(Self { side, cells, to_move })
    }

    pub fn get(&self, at: Coord) -> Option<Player> {
        if self.in_bounds(at) {
            self.cells[self.index(at)]
        } else {
            None
        }
    }

    pub fn in_bounds(&self, at: Coord) -> bool {
        at.row < self.side && at.col < self.side
    }

    pub fn is_legal(&self, at: Coord) -> bool {
        self.in_bounds(at)
            && self.cells[self.index(at)].is_none()
            && DIRECTIONS.iter().any(|&(dr, dc)| self.flank_length(at, dr, dc) > 0)
    }

    /// Validating counterpart of `GameState::apply_move`.
    pub fn play(&self, at: Coord) -> Result<Self, BoardError> {
        if !self.in_bounds(at) {
            return Err(BoardError::OutOfBounds(at));
        }
        if !self.is_legal(at) {
            return Err(BoardError::IllegalMove(at));
        }
        Ok(self.apply_move(at))
    }

    /// Player holding more discs, `None` on a tie.
    pub fn leader(&self) -> Option<Player> {
        let (one, two) = self.token_counts();
        match one.cmp(&two) {
            std::cmp::Ordering::Greater => Some(Player::One),
            std::cmp::Ordering::Less => Some(Player::Two),
            std::cmp::Ordering::Equal => None,
        }
    }

    fn index(&self, at: Coord) -> usize {
        at.row * self.side + at.col
    }

    fn set(&mut self, at: Coord, cell: Option<Player>) {
        let idx = self.index(at);
        self.cells[idx] = cell;
    }

    fn step(&self, at: Coord, dr: isize, dc: isize) -> Option<Coord> {
        let row = at.row.checked_add_signed(dr)?;
        let col = at.col.checked_add_signed(dc)?;
        let next = Coord::new(row, col);
        self.in_bounds(next).then_some(next)
    }

    /// Opponent discs that a placement at `at` would flip in one direction.
    fn flank_length(&self, at: Coord, dr: isize, dc: isize) -> usize {
        let me = self.to_move;
        let mut run = 0;
        let mut cur = at;
        while let Some(next) = self.step(cur, dr, dc) {
            match self.cells[self.index(next)] {
                Some(p) if p == me => return run,
                Some(_) => run += 1,
                None => return 0,
            }
            cur = next;
        }
        0
    }

    fn has_any_move(&self) -> bool {
        (0..self.side)
            .flat_map(|r| (0..self.side).map(move |c| Coord::new(r, c)))
            .any(|at| self.is_legal(at))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl GameState for Board {
    fn is_terminal(&self) -> bool {
        !self.has_any_move() && !self.forced_pass().has_any_move()
    }

    fn token_counts(&self) -> (u32, u32) {
        self.cells.iter().fold((0, 0), |(one, two), cell| match cell {
            Some(Player::One) => (one + 1, two),
            Some(Player::Two) => (one, two + 1),
            None => (one, two),
        })
    }

    fn legal_moves(&self) -> Vec<Coord> {
        let mut moves = Vec::new();
        for row in 0..self.side {
            for col in 0..self.side {
                let at = Coord::new(row, col);
                if self.is_legal(at) {
                    moves.push(at);
                }
            }
        }
        moves
    }

    fn side_to_move(&self) -> Player {
        self.to_move
    }

    fn side_length(&self) -> usize {
        self.side
    }

    fn apply_move(&self, at: Coord) -> Self {
        let mut next = self.clone();
        let me = self.to_move;
        for (dr, dc) in DIRECTIONS {
            let run = self.flank_length(at, dr, dc);
            let mut cur = at;
            for _ in 0..run {
                match self.step(cur, dr, dc) {
                    Some(c) => {
                        next.set(c, Some(me));
                        cur = c;
                    }
                    None => break,
                }
            }
        }
        next.set(at, Some(me));
        next.to_move = me.opponent();
        next
    }

    fn forced_pass(&self) -> Self {
        let mut next = self.clone();
        next.to_move = self.to_move.opponent();
        next
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..self.side {
            write!(f, " {}", (b'a' + col as u8) as char)?;
        }
        writeln!(f)?;
        for row in 0..self.side {
            write!(f, "{:>2}", row + 1)?;
            for col in 0..self.side {
                let ch = match self.cells[row * self.side + col] {
                    Some(Player::One) => 'X',
                    Some(Player::Two) => 'O',
                    None => '.',
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        let (one, two) = self.token_counts();
        write!(f, "X: {one}  O: {two}  to move: {}", self.to_move)
    }
}
