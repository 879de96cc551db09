//! Grid-world fixture shared by the integration tests and benchmarks.
//!
//! Worlds are written as text: `.` is a cell costing 1, `#` is impassable,
//! `@` marks the start, `*` the goal and a digit is a cell of that cost.
//! Moving into a cell costs that cell's value; the heuristic is Manhattan
//! distance, which is admissible and consistent because every cell costs at
//! least 1.

#![allow(dead_code)]

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use pathsearch_lib::{Cost, SearchOutcome, SearchState, StateTransition};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

const IMPASSABLE: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    fn offset(self) -> (i64, i64) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Direction::Up => '^',
            Direction::Right => '>',
            Direction::Down => 'V',
            Direction::Left => '<',
        }
    }
}

/// Cell costs, row-major. Impassable cells hold `IMPASSABLE`.
#[derive(Debug)]
pub struct Grid {
    cells: Vec<Vec<i32>>,
}

impl Grid {
    pub fn width(&self) -> i64 {
        self.cells.first().map_or(0, |row| row.len() as i64)
    }

    pub fn height(&self) -> i64 {
        self.cells.len() as i64
    }

    fn cost(&self, x: i64, y: i64) -> Option<Cost> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return None;
        }
        let value = self.cells[y as usize][x as usize];
        (value != IMPASSABLE).then_some(value as Cost)
    }
}

/// A cell of a shared grid. Equality and hashing ignore the grid handle.
#[derive(Clone)]
pub struct Position {
    pub x: i64,
    pub y: i64,
    grid: Arc<Grid>,
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl SearchState for Position {
    type Transition = Direction;

    fn successors(&self) -> Vec<StateTransition<Self>> {
        Direction::ALL
            .iter()
            .filter_map(|&direction| {
                let (dx, dy) = direction.offset();
                let (x, y) = (self.x + dx, self.y + dy);
                let cost = self.grid.cost(x, y)?;
                Some(StateTransition::new(
                    Position {
                        x,
                        y,
                        grid: Arc::clone(&self.grid),
                    },
                    direction,
                    cost,
                ))
            })
            .collect()
    }

    fn estimate_cost(&self, target: &Self) -> Cost {
        ((target.x - self.x).abs() + (target.y - self.y).abs()) as Cost
    }
}

/// A parsed world: the grid plus its marked start and goal.
pub struct World {
    pub grid: Arc<Grid>,
    pub start: Position,
    pub goal: Position,
}

impl World {
    /// Parse the text format described in the module docs. Surrounding
    /// whitespace on every row is ignored so worlds can be indented in tests.
    pub fn parse(text: &str) -> Self {
        let mut start = (0, 0);
        let mut goal = (0, 0);
        let cells: Vec<Vec<i32>> = text
            .trim()
            .lines()
            .enumerate()
            .map(|(y, row)| {
                row.trim()
                    .chars()
                    .enumerate()
                    .map(|(x, cell)| match cell {
                        '.' => 1,
                        '#' => IMPASSABLE,
                        '@' => {
                            start = (x as i64, y as i64);
                            1
                        }
                        '*' => {
                            goal = (x as i64, y as i64);
                            1
                        }
                        digit => digit.to_digit(10).expect("grid cell is a digit") as i32,
                    })
                    .collect::<Vec<i32>>()
            })
            .collect();

        Self::from_cells(cells, start, goal)
    }

    /// Build a world from raw cell costs.
    pub fn from_cells(cells: Vec<Vec<i32>>, start: (i64, i64), goal: (i64, i64)) -> Self {
        let grid = Arc::new(Grid { cells });
        Self {
            start: Position {
                x: start.0,
                y: start.1,
                grid: Arc::clone(&grid),
            },
            goal: Position {
                x: goal.0,
                y: goal.1,
                grid: Arc::clone(&grid),
            },
            grid,
        }
    }

    pub fn at(&self, x: i64, y: i64) -> Position {
        Position {
            x,
            y,
            grid: Arc::clone(&self.grid),
        }
    }
}

/// Transition symbols of a path, e.g. `">>V>"`.
pub fn directions(outcome: &SearchOutcome<Position>) -> String {
    outcome.transitions().map(|d| d.symbol()).collect()
}

/// A `width` x `height` world with random cell costs in `1..=max_cost` and
/// roughly `wall_percent` percent impassable cells. The start is the top-left
/// corner and the goal the bottom-right corner; both are always passable.
pub fn random_world(
    seed: u64,
    width: usize,
    height: usize,
    max_cost: i32,
    wall_percent: f64,
) -> World {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cells: Vec<Vec<i32>> = (0..height)
        .map(|_| {
            (0..width)
                .map(|_| {
                    if rng.gen_bool(wall_percent / 100.0) {
                        IMPASSABLE
                    } else {
                        rng.gen_range(1..=max_cost)
                    }
                })
                .collect()
        })
        .collect();
    cells[0][0] = 1;
    cells[height - 1][width - 1] = 1;

    World::from_cells(cells, (0, 0), (width as i64 - 1, height as i64 - 1))
}
