//! Matrix rain simulation.
//!
//! Pure state stepped by the effect task. Rendering lives in the terminal
//! renderer; this module only decides which glyph sits in which cell.

use rand::Rng;
use std::time::Duration;

/// Half-width katakana plus digits, all single-cell in a terminal.
pub const GLYPHS: &str = "ｱｲｳｴｵｶｷｸｹｺｻｼｽｾｿﾀﾁﾂﾃﾄﾅﾆﾇﾈﾉﾊﾋﾌﾍﾎﾏﾐﾑﾒﾓﾔﾕﾖﾗﾘﾙﾚﾛﾜｦﾝ0123456789";

/// A cell disappears after this many ticks without being redrawn.
pub const TRAIL_TICKS: u8 = 20;

const INITIAL_ACTIVE_SHARE: f64 = 0.01;
const RESET_CHANCE: f64 = 0.025;

/// One painted cell. `age` is 0 on the tick it was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub age: u8,
}

/// Row-major snapshot of the rain grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixFrame {
    pub cols: u16,
    pub rows: u16,
    pub cells: Vec<Option<Cell>>,
}

impl MatrixFrame {
    pub fn get(&self, col: u16, row: u16) -> Option<Cell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells[row as usize * self.cols as usize + col as usize]
    }
}

#[derive(Debug, Clone)]
pub struct MatrixRain {
    cols: u16,
    rows: u16,
    /// Next row each column will draw at; negative rows are above the screen.
    drops: Vec<i32>,
    active: Vec<bool>,
    cells: Vec<Option<Cell>>,
    glyphs: Vec<char>,
}

impl MatrixRain {
    /// Seed a grid with drops above the screen and ~1% of columns active.
    pub fn new<R: Rng + ?Sized>(cols: u16, rows: u16, rng: &mut R) -> Self {
        let width = cols as usize;
        let drops = (0..width)
            .map(|_| -(rng.gen_range(0..rows.max(1)) as i32))
            .collect();
        let active = (0..width)
            .map(|_| rng.gen_bool(INITIAL_ACTIVE_SHARE))
            .collect();
        Self {
            cols,
            rows,
            drops,
            active,
            cells: vec![None; width * rows as usize],
            glyphs: GLYPHS.chars().collect(),
        }
    }

    pub fn active_columns(&self) -> usize {
        self.active.iter().filter(|a| **a).count()
    }

    /// Number of columns that should be raining after `elapsed`.
    ///
    /// The active share ramps linearly from 1% to 100% over `ramp`.
    pub fn target_active(&self, elapsed: Duration, ramp: Duration) -> usize {
        let share = if ramp.is_zero() {
            1.0
        } else {
            let progress = elapsed.as_secs_f64() / ramp.as_secs_f64();
            (INITIAL_ACTIVE_SHARE + progress * (1.0 - INITIAL_ACTIVE_SHARE)).min(1.0)
        };
        (self.cols as f64 * share).floor() as usize
    }

    /// Advance one tick.
    pub fn step<R: Rng + ?Sized>(&mut self, elapsed: Duration, ramp: Duration, rng: &mut R) {
        self.fade();
        let target = self.target_active(elapsed, ramp);
        self.activate_columns(target, rng);

        let width = self.cols as usize;
        let rows = self.rows as i32;
        for col in 0..width {
            if !self.active[col] {
                continue;
            }
            let row = self.drops[col];
            if (0..rows).contains(&row) {
                let glyph = self.glyphs[rng.gen_range(0..self.glyphs.len())];
                self.cells[row as usize * width + col] = Some(Cell { glyph, age: 0 });
            }
            if row >= rows && rng.gen_bool(RESET_CHANCE) {
                self.drops[col] = 0;
            }
            self.drops[col] += 1;
        }
    }

    pub fn frame(&self) -> MatrixFrame {
        MatrixFrame {
            cols: self.cols,
            rows: self.rows,
            cells: self.cells.clone(),
        }
    }

    fn fade(&mut self) {
        for slot in self.cells.iter_mut() {
            *slot = (*slot).and_then(|cell| {
                (cell.age + 1 < TRAIL_TICKS).then_some(Cell {
                    age: cell.age + 1,
                    ..cell
                })
            });
        }
    }

    /// Switch random inactive columns on until `target` are active.
    fn activate_columns<R: Rng + ?Sized>(&mut self, target: usize, rng: &mut R) {
        let current = self.active_columns();
        if current >= target {
            return;
        }
        let mut inactive: Vec<usize> = (0..self.active.len())
            .filter(|idx| !self.active[*idx])
            .collect();
        let half_height = (self.rows / 2).max(1);
        for _ in 0..target - current {
            if inactive.is_empty() {
                break;
            }
            let pick = inactive.swap_remove(rng.gen_range(0..inactive.len()));
            self.active[pick] = true;
            self.drops[pick] = -(rng.gen_range(0..half_height) as i32);
        }
    }
}
