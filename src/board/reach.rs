//! Subset-sum reachability over remaining tile values.

use crate::core::TileValue;

/// Whether any subset of `values` sums exactly to `target`.
///
/// Bitset DP: bit `s` of the accumulator marks sum `s` as achievable.
/// Tile sums never exceed 1+2+...+9 = 45, so a `u64` holds every bit.
pub(crate) fn can_reach(values: impl Iterator<Item = TileValue>, target: u8) -> bool {
    let mut sums: u64 = 1;
    for value in values {
        sums |= sums << value.raw();
    }
    sums & (1 << target) != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(raw: &[u8]) -> Vec<TileValue> {
        raw.iter().map(|&v| TileValue::new(v).unwrap()).collect()
    }

    #[test]
    fn test_singleton() {
        assert!(can_reach(values(&[5]).into_iter(), 5));
        assert!(!can_reach(values(&[9]).into_iter(), 5));
    }

    #[test]
    fn test_pair_sum() {
        assert!(can_reach(values(&[2, 7]).into_iter(), 9));
        assert!(can_reach(values(&[2, 7]).into_iter(), 2));
        assert!(!can_reach(values(&[2, 7]).into_iter(), 8));
    }

    #[test]
    fn test_empty_reaches_nothing() {
        assert!(!can_reach(std::iter::empty(), 1));
        assert!(!can_reach(std::iter::empty(), 9));
    }

    #[test]
    fn test_full_board_reaches_every_target() {
        for target in 1..=9 {
            assert!(can_reach(TileValue::all(), target));
        }
    }

    #[test]
    fn test_needs_three_tiles() {
        // 1+3+4 = 8, no smaller subset works but reachability holds
        assert!(can_reach(values(&[1, 3, 4]).into_iter(), 8));
        assert!(!can_reach(values(&[1, 3]).into_iter(), 8));
    }
}
