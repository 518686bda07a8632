use bevy::math::Vec2;
use board_core::{Position, BOARD_COLS, BOARD_ROWS};

/// Centre of a cell in world space. The board is centred on the origin with row 0 at the top.
pub fn position_to_world(pos: Position, square_size: f32) -> Vec2 {
    let x = (pos.col() as f32 - (BOARD_COLS as f32 - 1.0) / 2.0) * square_size;
    let y = ((BOARD_ROWS as f32 - 1.0) / 2.0 - pos.row() as f32) * square_size;
    Vec2::new(x, y)
}

/// The cell under `world`, or `None` off the board or for a non-positive `square_size`.
pub fn world_to_position(world: Vec2, square_size: f32) -> Option<Position> {
    if !world.is_finite() || !square_size.is_finite() || square_size <= 0.0 {
        return None;
    }
    let col = (world.x / square_size + BOARD_COLS as f32 / 2.0).floor();
    let row = (BOARD_ROWS as f32 / 2.0 - world.y / square_size).floor();
    if col < 0.0 || row < 0.0 {
        return None;
    }
    Position::new(row as usize, col as usize).ok()
}

pub fn board_extent(square_size: f32) -> Vec2 {
    Vec2::new(BOARD_COLS as f32 * square_size, BOARD_ROWS as f32 * square_size)
}
