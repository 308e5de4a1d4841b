//! Shape catalog and piece tests - geometry, rotation, validity

use blockfall::core::{pieces, Board, Piece};
use blockfall::types::PieceKind;

#[test]
fn test_catalog_rotation_counts() {
    assert_eq!(pieces::rotation_count(PieceKind::O), 1);
    assert_eq!(pieces::rotation_count(PieceKind::I), 2);
    assert_eq!(pieces::rotation_count(PieceKind::S), 2);
    assert_eq!(pieces::rotation_count(PieceKind::Z), 2);
    assert_eq!(pieces::rotation_count(PieceKind::T), 4);
    assert_eq!(pieces::rotation_count(PieceKind::J), 4);
    assert_eq!(pieces::rotation_count(PieceKind::L), 4);
}

#[test]
fn test_each_state_is_a_tetromino() {
    for kind in PieceKind::ALL {
        for state in pieces::shapes(kind) {
            // Four cells, all distinct
            let mut cells = state.to_vec();
            cells.sort_unstable();
            cells.dedup();
            assert_eq!(cells.len(), 4, "{:?} state has duplicate cells", kind);
        }
    }
}

#[test]
fn test_rotation_cycle_closure() {
    for kind in PieceKind::ALL {
        let count = pieces::rotation_count(kind);
        let start = Piece::spawn(kind, 10);

        let mut piece = start;
        for step in 1..=count {
            piece = piece.rotated();
            if step < count {
                assert_ne!(piece.shape(), start.shape(), "{:?} repeated early", kind);
            }
        }
        assert_eq!(piece, start, "{:?} did not close after {} turns", kind, count);
    }
}

#[test]
fn test_spawn_is_horizontally_centered() {
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind, 10);
        assert_eq!(piece.y, 0);

        let xs: Vec<i8> = piece.cells().iter().map(|&(x, _)| x).collect();
        let min = *xs.iter().min().unwrap();
        let max = *xs.iter().max().unwrap();
        // Occupied columns sit within one cell of perfect center
        let slack_left = min;
        let slack_right = 9 - max;
        assert!(
            (slack_left - slack_right).abs() <= 1,
            "{:?} spawns off-center: columns {}..={}",
            kind,
            min,
            max
        );
    }
}

#[test]
fn test_spawn_centering_follows_board_width() {
    let piece = Piece::spawn(PieceKind::T, 8);
    assert_eq!(piece.x, 2);

    let piece = Piece::spawn(PieceKind::I, 12);
    assert_eq!(piece.x, 4);
}

#[test]
fn test_fits_rejects_column_out_of_range() {
    let board = Board::new(10, 20);

    let left = Piece {
        kind: PieceKind::I,
        rot: 0,
        x: -1,
        y: 5,
    };
    assert!(!left.fits(&board));

    let right = Piece {
        kind: PieceKind::I,
        rot: 0,
        x: 7,
        y: 5,
    };
    assert!(!right.fits(&board));
}

#[test]
fn test_fits_rejects_row_at_or_below_floor() {
    let board = Board::new(10, 20);

    let piece = Piece {
        kind: PieceKind::O,
        rot: 0,
        x: 3,
        y: 19,
    };
    // Bottom cells would land on row 20
    assert!(!piece.fits(&board));
    assert!(piece.translated(0, -1).fits(&board));
}

#[test]
fn test_fits_rejects_overlap_with_settled_cells() {
    let mut board = Board::new(10, 20);
    board.set(4, 10, Some(PieceKind::Z));

    let piece = Piece {
        kind: PieceKind::O,
        rot: 0,
        x: 3,
        y: 9,
    };
    // O covers (4,9),(5,9),(4,10),(5,10); (4,10) is taken
    assert!(!piece.fits(&board));
    assert!(piece.translated(1, 0).fits(&board));
}

#[test]
fn test_fits_accepts_rows_above_visible_top() {
    let mut board = Board::new(10, 20);
    // Even a completely full top row cannot collide with cells above it
    for x in 0..10 {
        board.set(x, 0, Some(PieceKind::J));
    }

    let above = Piece {
        kind: PieceKind::I,
        rot: 1,
        x: 0,
        y: -4,
    };
    assert!(above.fits(&board));

    // Column bounds still apply above the top
    let outside = Piece {
        kind: PieceKind::I,
        rot: 0,
        x: -1,
        y: -3,
    };
    assert!(!outside.fits(&board));
}

#[test]
fn test_candidates_do_not_mutate_origin() {
    let piece = Piece::spawn(PieceKind::L, 10);

    let rotated = piece.rotated();
    let translated = piece.translated(2, 3);

    assert_eq!(piece, Piece::spawn(PieceKind::L, 10));
    assert_eq!(rotated.rot, 1);
    assert_eq!((translated.x, translated.y), (piece.x + 2, piece.y + 3));
}
