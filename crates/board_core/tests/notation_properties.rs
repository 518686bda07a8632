use std::collections::HashSet;

use board_core::{
    convert_coord_to_notation, Notation, NotationError, Position, BOARD_COLS, BOARD_ROWS,
};

#[test]
fn every_cell_matches_label_pattern() {
    for row in 0..BOARD_ROWS {
        for col in 0..BOARD_COLS {
            let label = convert_coord_to_notation(row, col).unwrap();
            let bytes = label.as_bytes();
            assert_eq!(bytes.len(), 2, "label {label:?} for ({row}, {col})");
            assert!((b'a'..=b'e').contains(&bytes[0]), "bad file in {label:?}");
            assert!((b'1'..=b'6').contains(&bytes[1]), "bad rank in {label:?}");
        }
    }
}

#[test]
fn labels_are_distinct() {
    let labels: HashSet<String> = Position::all()
        .map(|p| convert_coord_to_notation(p.row(), p.col()).unwrap())
        .collect();
    assert_eq!(labels.len(), BOARD_ROWS * BOARD_COLS);
}

#[test]
fn repeated_calls_agree() {
    for position in Position::all() {
        let first = convert_coord_to_notation(position.row(), position.col());
        for _ in 0..3 {
            assert_eq!(convert_coord_to_notation(position.row(), position.col()), first);
        }
    }
}

#[test]
fn labels_parse_back_to_the_same_cell() {
    for position in Position::all() {
        let label = convert_coord_to_notation(position.row(), position.col()).unwrap();
        let parsed: Notation = label.parse().unwrap();
        assert_eq!(parsed.position(), position);
    }
}

#[test]
fn first_row_off_the_board_fails_everywhere() {
    for col in 0..BOARD_COLS {
        assert_eq!(
            convert_coord_to_notation(BOARD_ROWS, col),
            Err(NotationError::InvalidPosition { row: BOARD_ROWS, col })
        );
    }
    for row in 0..BOARD_ROWS {
        assert!(convert_coord_to_notation(row, BOARD_COLS).is_err());
    }
}
