//! Matrix module - generic 2D grid rotation
//!
//! Grids are row-major `Vec<Vec<T>>`. Rectangular grids are supported: a grid
//! with R rows and C columns rotates into one with C rows and R columns.

/// Rotate a grid 90° clockwise.
///
/// Cell `(r, c)` of the input lands at `(c, rows - 1 - r)` of the output.
/// The input is left untouched. An empty grid rotates into an empty grid.
///
/// ```
/// use blockfall_core::matrix::rotate_clockwise;
///
/// let bar = vec![vec![1, 1, 1, 1]];
/// let upright = rotate_clockwise(&bar);
/// assert_eq!(upright, vec![vec![1], vec![1], vec![1], vec![1]]);
/// ```
pub fn rotate_clockwise<T: Copy>(matrix: &[Vec<T>]) -> Vec<Vec<T>> {
    let rows = matrix.len();
    let Some(first) = matrix.first() else {
        return Vec::new();
    };
    let cols = first.len();

    (0..cols)
        .map(|c| (0..rows).map(|r| matrix[rows - 1 - r][c]).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_square() {
        let t = vec![vec![0, 1, 0], vec![1, 1, 1], vec![0, 0, 0]];
        let rotated = rotate_clockwise(&t);
        assert_eq!(rotated, vec![vec![0, 1, 0], vec![0, 1, 1], vec![0, 1, 0]]);
        // Input untouched
        assert_eq!(t, vec![vec![0, 1, 0], vec![1, 1, 1], vec![0, 0, 0]]);
    }

    #[test]
    fn test_rotate_index_mapping() {
        let m = vec![vec![1, 2, 3], vec![4, 5, 6]];
        let rotated = rotate_clockwise(&m);

        assert_eq!(rotated.len(), 3);
        assert!(rotated.iter().all(|row| row.len() == 2));
        for (r, row) in m.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                assert_eq!(rotated[c][m.len() - 1 - r], v);
            }
        }
    }

    #[test]
    fn test_four_rotations_is_identity() {
        let s = vec![
            vec![0, 0, 0, 0],
            vec![1, 1, 1, 1],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ];
        let mut m = s.clone();
        for _ in 0..4 {
            m = rotate_clockwise(&m);
        }
        assert_eq!(m, s);
    }

    #[test]
    fn test_rotate_empty() {
        let empty: Vec<Vec<u8>> = Vec::new();
        assert!(rotate_clockwise(&empty).is_empty());
    }
}
