// Board geometry and notation
pub mod error;
pub mod notation;
pub mod position;

// Re-export main types for convenience
pub use error::NotationError;
pub use notation::{convert_coord_to_notation, Notation, COL_LABELS, ROW_LABELS};
pub use position::{Position, BOARD_COLS, BOARD_ROWS};
