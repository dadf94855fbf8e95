//! Pieces tests - canonical shapes, clockwise rotation, randomizer

use blockfall::core::{canonical_shape, rotate_clockwise, Piece, PieceRandomizer, Shape};
use blockfall::types::{PieceKind, BOARD_WIDTH};

fn cells(shape: &Shape) -> Vec<(i8, i8)> {
    shape.filled_cells().collect()
}

fn rotated(kind: PieceKind, turns: usize) -> Shape {
    (0..turns).fold(Shape::canonical(kind), |s, _| s.rotated_cw())
}

// ============== Shape Tests ==============

#[test]
fn test_i_piece_rotations() {
    assert_eq!(cells(&rotated(PieceKind::I, 0)), [(0, 1), (1, 1), (2, 1), (3, 1)]);
    assert_eq!(cells(&rotated(PieceKind::I, 1)), [(2, 0), (2, 1), (2, 2), (2, 3)]);
    assert_eq!(cells(&rotated(PieceKind::I, 2)), [(0, 2), (1, 2), (2, 2), (3, 2)]);
    assert_eq!(cells(&rotated(PieceKind::I, 3)), [(1, 0), (1, 1), (1, 2), (1, 3)]);
}

#[test]
fn test_o_piece_is_rotation_invariant() {
    let o = Shape::canonical(PieceKind::O);
    assert_eq!(cells(&o), [(0, 0), (1, 0), (0, 1), (1, 1)]);
    assert_eq!(o.rotated_cw(), o);
}

#[test]
fn test_t_piece_rotations() {
    assert_eq!(cells(&rotated(PieceKind::T, 0)), [(1, 0), (0, 1), (1, 1), (2, 1)]);
    assert_eq!(cells(&rotated(PieceKind::T, 1)), [(1, 0), (1, 1), (2, 1), (1, 2)]);
    assert_eq!(cells(&rotated(PieceKind::T, 2)), [(0, 1), (1, 1), (2, 1), (1, 2)]);
    assert_eq!(cells(&rotated(PieceKind::T, 3)), [(1, 0), (0, 1), (1, 1), (1, 2)]);
}

#[test]
fn test_s_and_z_rotations() {
    assert_eq!(cells(&rotated(PieceKind::S, 0)), [(1, 0), (2, 0), (0, 1), (1, 1)]);
    assert_eq!(cells(&rotated(PieceKind::S, 1)), [(1, 0), (1, 1), (2, 1), (2, 2)]);
    assert_eq!(cells(&rotated(PieceKind::Z, 0)), [(0, 0), (1, 0), (1, 1), (2, 1)]);
    assert_eq!(cells(&rotated(PieceKind::Z, 1)), [(2, 0), (1, 1), (2, 1), (1, 2)]);
}

#[test]
fn test_j_and_l_rotations() {
    assert_eq!(cells(&rotated(PieceKind::J, 0)), [(0, 0), (0, 1), (1, 1), (2, 1)]);
    assert_eq!(cells(&rotated(PieceKind::J, 1)), [(1, 0), (2, 0), (1, 1), (1, 2)]);
    assert_eq!(cells(&rotated(PieceKind::L, 0)), [(2, 0), (0, 1), (1, 1), (2, 1)]);
    assert_eq!(cells(&rotated(PieceKind::L, 1)), [(1, 0), (1, 1), (1, 2), (2, 2)]);
}

#[test]
fn test_four_rotations_are_identity() {
    for kind in PieceKind::ALL {
        assert_eq!(rotated(kind, 4), Shape::canonical(kind), "{:?}", kind);
    }
}

#[test]
fn test_canonical_table_matches_shape() {
    for kind in PieceKind::ALL {
        let table = canonical_shape(kind);
        let shape = Shape::canonical(kind);
        assert_eq!(shape.height(), table.len());
        for (row, expected) in shape.rows().iter().zip(table) {
            assert_eq!(row.as_slice(), *expected);
        }
    }
}

#[test]
fn test_rotate_clockwise_non_square() {
    let m = vec![vec![1, 2, 3], vec![4, 5, 6]];
    assert_eq!(rotate_clockwise(&m), vec![vec![4, 1], vec![5, 2], vec![6, 3]]);
}

// ============== Piece Tests ==============

#[test]
fn test_piece_copies_canonical_shape() {
    let mut piece = Piece::new(PieceKind::L);
    assert_eq!((piece.x, piece.y), (0, 0));

    piece.shape = piece.shape.rotated_cw();

    // A fresh piece still gets the spawn orientation
    assert_eq!(Piece::new(PieceKind::L).shape, Shape::canonical(PieceKind::L));
}

#[test]
fn test_spawn_columns() {
    let expected = [
        (PieceKind::I, 3),
        (PieceKind::O, 4),
        (PieceKind::T, 3),
        (PieceKind::S, 3),
        (PieceKind::Z, 3),
        (PieceKind::J, 3),
        (PieceKind::L, 3),
    ];
    for (kind, x) in expected {
        assert_eq!(Piece::new(kind).centered_x(BOARD_WIDTH), x, "{:?}", kind);
    }
}

#[test]
fn test_piece_colors() {
    assert_eq!(Piece::new(PieceKind::I).color().r, 0x00);
    assert_eq!(Piece::new(PieceKind::L).color(), PieceKind::L.color());
}

// ============== Randomizer Tests ==============

#[test]
fn test_randomizer_is_deterministic_per_seed() {
    let mut a = PieceRandomizer::new(42);
    let mut b = PieceRandomizer::new(42);
    let seq_a: Vec<_> = (0..50).map(|_| a.next_kind()).collect();
    let seq_b: Vec<_> = (0..50).map(|_| b.next_kind()).collect();
    assert_eq!(seq_a, seq_b);
}

#[test]
fn test_randomizer_produces_every_kind() {
    let mut rng = PieceRandomizer::new(7);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..500 {
        seen.insert(rng.next_kind());
    }
    assert_eq!(seen.len(), PieceKind::ALL.len());
}

#[test]
fn test_randomizer_piece_starts_at_origin() {
    let mut rng = PieceRandomizer::new(3);
    let piece = rng.next_piece();
    assert_eq!((piece.x, piece.y), (0, 0));
    assert_eq!(piece.shape, Shape::canonical(piece.kind));
}
