//! Stateless text rendering of the engine's state.

use crate::config::{EmptyCellStyle, GameConfig};
use timeline_tictactoe::{Board, Cell, GameEngine, HistoryEntry, Position, WinningLine};

/// Renders the board, status line, order toggle, and move list.
pub fn render(engine: &GameEngine, config: &GameConfig) -> String {
    let winner = if *config.highlight_winner() {
        engine.winner()
    } else {
        None
    };

    let mut out = render_board(engine.current_board(), winner, *config.empty_cell());
    out.push_str("\n\n");
    out.push_str(&engine.status().to_string());
    out.push('\n');
    out.push_str(order_label(engine.is_ascending()));
    out.push('\n');
    out.push_str(&render_moves(engine));
    out
}

/// Draws the board as three rows of three cells.
pub fn render_board(board: &Board, winner: Option<WinningLine>, style: EmptyCellStyle) -> String {
    Position::ALL
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|&pos| render_cell(board.get(pos), pos, winner, style))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}

fn render_cell(
    cell: Cell,
    pos: Position,
    winner: Option<WinningLine>,
    style: EmptyCellStyle,
) -> String {
    match cell {
        Cell::Occupied(mark) if winner.is_some_and(|line| line.contains(pos)) => {
            format!("[{}]", mark)
        }
        Cell::Occupied(mark) => format!(" {} ", mark),
        Cell::Empty => match style {
            EmptyCellStyle::Index => format!(" {} ", pos),
            EmptyCellStyle::Dot => " . ".to_string(),
        },
    }
}

/// Label for the move-list order toggle.
pub fn order_label(is_ascending: bool) -> &'static str {
    if is_ascending {
        "Order: Ascending"
    } else {
        "Order: Descending"
    }
}

/// Describes the history entry at `step`.
pub fn move_description(step: usize, entry: &HistoryEntry) -> String {
    match entry.placed() {
        Some(pos) if step > 0 => format!("Go to move #{} at square {}", step, pos),
        _ => "Go to game start".to_string(),
    }
}

/// One line per history entry in display order; the current step is marked.
pub fn render_moves(engine: &GameEngine) -> String {
    engine
        .ordered_moves()
        .into_iter()
        .map(|(step, entry)| {
            let marker = if step == engine.step_number() { '>' } else { ' ' };
            format!("{} {:>2}. {}", marker, step, move_description(step, entry))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(cells: &[usize]) -> GameEngine {
        let mut engine = GameEngine::new();
        for &cell in cells {
            engine.place_mark_at(cell).unwrap();
        }
        engine
    }

    #[test]
    fn test_empty_board_shows_indices() {
        let board = render_board(&Board::new(), None, EmptyCellStyle::Index);
        assert_eq!(
            board,
            " 0 | 1 | 2 \n---+---+---\n 3 | 4 | 5 \n---+---+---\n 6 | 7 | 8 "
        );
    }

    #[test]
    fn test_dot_style() {
        let engine = play(&[4]);
        let board = render_board(engine.current_board(), None, EmptyCellStyle::Dot);
        assert_eq!(
            board.lines().nth(2),
            Some(" . | X | . ")
        );
    }

    #[test]
    fn test_winning_cells_are_bracketed() {
        let engine = play(&[0, 4, 1, 3, 2]);
        let board = render_board(engine.current_board(), engine.winner(), EmptyCellStyle::Index);
        assert_eq!(board.lines().next(), Some("[X]|[X]|[X]"));
        assert_eq!(board.lines().nth(2), Some(" O | O | 5 "));
    }

    #[test]
    fn test_move_list_marks_current_and_reverses() {
        let mut engine = play(&[4, 0]);
        engine.jump_to(1).unwrap();

        assert_eq!(
            render_moves(&engine),
            "   0. Go to game start\n>  1. Go to move #1 at square 4\n   2. Go to move #2 at square 0"
        );

        engine.toggle_order();
        assert_eq!(
            render_moves(&engine).lines().next(),
            Some("   2. Go to move #2 at square 0")
        );
    }

    #[test]
    fn test_full_view_status_line() {
        let engine = play(&[0, 4, 1, 3, 2]);
        let view = render(&engine, &GameConfig::default());
        assert!(view.contains("\n\nWinner: X\nOrder: Ascending\n"));
    }
}
