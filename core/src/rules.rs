//! Read-only terminal detection over a board. Every query is total.

use crate::*;

/// True iff at least one slot is empty.
pub fn empty_space_exists(board: &Board) -> bool {
    board.slots().iter().any(Option::is_none)
}

/// True iff some tile holds exactly [`WIN_VALUE`].
pub fn max_tile_exists(board: &Board) -> bool {
    board.iter_tiles().any(|tile| tile.is_winning())
}

/// True if a slot is empty or two orthogonal neighbours can merge.
pub fn at_least_one_move_exists(board: &Board) -> bool {
    if empty_space_exists(board) {
        return true;
    }

    let slots = board.slots();
    board.iter_tiles().any(|tile| {
        slots
            .iter_neighbors(tile.position())
            .filter_map(|pos| slots[pos.to_nd_index()])
            .any(|neighbor| neighbor.can_merge_with(&tile))
    })
}

pub fn game_over(board: &Board) -> bool {
    max_tile_exists(board) || !at_least_one_move_exists(board)
}

/// Classifies the board; a winning tile takes precedence over a stalemate.
pub fn terminal_state(board: &Board) -> EngineState {
    if max_tile_exists(board) {
        EngineState::Won
    } else if !at_least_one_move_exists(board) {
        EngineState::Lost
    } else {
        EngineState::Active
    }
}
