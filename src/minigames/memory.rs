//! Spatial memory: remember where the one safe cell was.

use super::{frame, Minigame};
use crate::console::{Console, KeyRead};
use crate::core::constants::MAX_GRID_SIDE;
use crate::encounter::EncounterContext;
use rand::Rng;

const SAFE_GLYPH: char = 'O';
const DECOY_GLYPH: char = 'X';
const HIDDEN_GLYPH: char = '?';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryParams {
    pub rows: usize,
    pub cols: usize,
    /// Damage for anything but the exact safe cell.
    pub damage: u32,
    pub display_ms: u64,
    /// Time allowed for each of the two coordinate keys.
    pub response_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
}

impl GridCell {
    /// "B3" style label: row letter, one-based column digit.
    pub fn label(&self) -> String {
        format!("{}{}", (b'A' + self.row as u8) as char, self.col + 1)
    }
}

impl MemoryParams {
    fn dims(&self) -> (usize, usize) {
        (
            self.rows.clamp(2, MAX_GRID_SIDE),
            self.cols.clamp(2, MAX_GRID_SIDE),
        )
    }
}

pub fn roll_safe_cell(params: &MemoryParams, rng: &mut impl Rng) -> GridCell {
    let (rows, cols) = params.dims();
    GridCell {
        row: rng.gen_range(0..rows),
        col: rng.gen_range(0..cols),
    }
}

/// Row letter then column digit. Either read missing or out of range is `None`.
pub fn parse_cell(row: KeyRead, col: KeyRead, rows: usize, cols: usize) -> Option<GridCell> {
    let row = row.key()?.as_letter_index().filter(|r| *r < rows)?;
    let col = col.key()?.as_index().filter(|c| *c < cols)?;
    Some(GridCell { row, col })
}

/// Binary: exact match or the full damage.
pub fn score(guess: Option<GridCell>, safe: GridCell, damage: u32) -> u32 {
    if guess == Some(safe) {
        0
    } else {
        damage
    }
}

fn grid_lines(rows: usize, cols: usize, safe: Option<GridCell>) -> Vec<String> {
    let mut lines = Vec::with_capacity(rows + 1);
    let header: Vec<String> = (1..=cols).map(|c| c.to_string()).collect();
    lines.push(format!("   {}", header.join(" ")));
    for row in 0..rows {
        let cells: Vec<String> = (0..cols)
            .map(|col| {
                let glyph = match safe {
                    Some(cell) if cell.row == row && cell.col == col => SAFE_GLYPH,
                    Some(_) => DECOY_GLYPH,
                    None => HIDDEN_GLYPH,
                };
                glyph.to_string()
            })
            .collect();
        lines.push(format!("{}  {}", (b'A' + row as u8) as char, cells.join(" ")));
    }
    lines
}

impl Minigame for MemoryParams {
    fn min_damage(&self) -> u32 {
        self.damage
    }

    fn max_damage(&self) -> u32 {
        self.damage
    }

    fn play<R: Rng, C: Console>(&self, ctx: &mut EncounterContext<R, C>) -> u32 {
        let (rows, cols) = self.dims();
        let safe = roll_safe_cell(self, &mut ctx.rng);

        let mut body = vec![format!("Remember the safe spot ({})!", SAFE_GLYPH), String::new()];
        body.extend(grid_lines(rows, cols, Some(safe)));
        ctx.render(&frame("Memory!", body, "Watch closely"));
        let display = ctx.window(self.display_ms);
        ctx.console.hold(display);

        let controls = format!(
            "[A-{}] Row  [1-{}] Column",
            (b'A' + rows as u8 - 1) as char,
            cols
        );
        let mut body = vec!["! Where was it safe?".to_string(), String::new()];
        body.extend(grid_lines(rows, cols, None));
        ctx.render(&frame("Memory!", body, &controls));

        let response = ctx.window(self.response_ms);
        let row = ctx.console.read_key(response);
        // No point waiting for a column after a missed row.
        let col = match row {
            KeyRead::Key(_) => ctx.console.read_key(response),
            KeyRead::Timeout => KeyRead::Timeout,
        };

        let guess = parse_cell(row, col, rows, cols);
        let damage = score(guess, safe, self.damage);
        tracing::debug!(
            safe = %safe.label(),
            guess = ?guess.map(|g| g.label()),
            damage,
            "memory resolved"
        );
        damage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Key;
    use crate::minigames::test_support::{neutral_context, scripted};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn params() -> MemoryParams {
        MemoryParams {
            rows: 3,
            cols: 4,
            damage: 18,
            display_ms: 2000,
            response_ms: 3000,
        }
    }

    fn cell_keys(cell: GridCell) -> (Key, Key) {
        let row = (b'a' + cell.row as u8) as char;
        let col = char::from_digit(cell.col as u32 + 1, 10).unwrap();
        (Key::Char(row), Key::Char(col))
    }

    #[test]
    fn test_label() {
        assert_eq!(GridCell { row: 1, col: 2 }.label(), "B3");
    }

    #[test]
    fn test_parse_cell() {
        let k = |c| KeyRead::Key(Key::Char(c));
        assert_eq!(parse_cell(k('b'), k('3'), 3, 4), Some(GridCell { row: 1, col: 2 }));
        assert_eq!(parse_cell(k('B'), k('3'), 3, 4), Some(GridCell { row: 1, col: 2 }));
        assert_eq!(parse_cell(k('d'), k('1'), 3, 4), None);
        assert_eq!(parse_cell(k('a'), k('5'), 3, 4), None);
        assert_eq!(parse_cell(k('1'), k('a'), 3, 4), None);
        assert_eq!(parse_cell(KeyRead::Timeout, k('1'), 3, 4), None);
    }

    #[test]
    fn test_score_is_binary() {
        let safe = GridCell { row: 0, col: 0 };
        assert_eq!(score(Some(safe), safe, 18), 0);
        assert_eq!(score(Some(GridCell { row: 0, col: 1 }), safe, 18), 18);
        assert_eq!(score(None, safe, 18), 18);
    }

    #[test]
    fn test_grid_has_exactly_one_safe_cell() {
        let lines = grid_lines(3, 4, Some(GridCell { row: 2, col: 3 }));
        let safe_count: usize = lines.iter().map(|l| l.matches(SAFE_GLYPH).count()).sum();
        assert_eq!(safe_count, 1);
        assert!(lines[3].ends_with('O'));

        let hidden = grid_lines(3, 4, None);
        assert!(hidden.iter().all(|l| !l.contains(SAFE_GLYPH)));
    }

    #[test]
    fn test_play_exact_recall_blocks() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let safe = roll_safe_cell(&params(), &mut rng);
        let (row, col) = cell_keys(safe);

        let mut ctx = neutral_context(scripted().press(row).press(col));
        assert_eq!(params().play(&mut ctx), 0);
    }

    #[test]
    fn test_play_wrong_cell_is_full_damage() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let safe = roll_safe_cell(&params(), &mut rng);
        let wrong = GridCell {
            row: safe.row,
            col: (safe.col + 1) % 4,
        };
        let (row, col) = cell_keys(wrong);

        let mut ctx = neutral_context(scripted().press(row).press(col));
        assert_eq!(params().play(&mut ctx), 18);
    }

    #[test]
    fn test_play_timeout_is_full_damage() {
        let mut ctx = neutral_context(scripted());
        assert_eq!(params().play(&mut ctx), 18);
    }
}
