//! Ordinal levels and the mixed-radix joint state codec.

use crate::error::MarkovError;

/// Three-level ordinal classification of one weather attribute.
///
/// Each attribute of a day is classified into one of three mutually
/// exclusive levels based on its lower and upper cutoffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Level {
    /// Value at or below the lower cutoff.
    Low = 0,
    /// Value above the lower cutoff but at or below the upper cutoff.
    Medium = 1,
    /// Value above the upper cutoff.
    High = 2,
}

impl Level {
    /// All three levels in index order.
    pub const ALL: [Level; 3] = [Self::Low, Self::Medium, Self::High];

    /// Returns the zero-based index of this level (matches the `#[repr(u8)]` discriminant).
    pub fn as_index(self) -> usize {
        self as usize
    }

    /// Returns the level with the given zero-based index, or `None` past 2.
    pub fn from_index(index: usize) -> Option<Level> {
        match index {
            0 => Some(Self::Low),
            1 => Some(Self::Medium),
            2 => Some(Self::High),
            _ => None,
        }
    }

    /// Returns the lowercase display name of this level.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Mixed-radix codec between per-attribute level tuples and joint state indices.
///
/// A state space is fixed by its `arity` (levels per attribute) and `width`
/// (number of attributes). A tuple encodes little-endian, attribute 0 in the
/// least significant digit:
///
/// ```text
/// index = levels[0] + levels[1] * arity + levels[2] * arity^2 + ...
/// ```
///
/// Encoding and decoding are exact inverses over `0..n_states()`, so every
/// joint state has exactly one index and vice versa.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSpace {
    arity: usize,
    width: usize,
    n_states: usize,
}

impl StateSpace {
    /// Creates a state space with `arity` levels per attribute and `width` attributes.
    ///
    /// # Errors
    ///
    /// Returns [`MarkovError::InvalidStateSpace`] when `arity < 2`, when
    /// `width < 1`, or when `arity^width` overflows `usize`.
    pub fn new(arity: usize, width: usize) -> Result<Self, MarkovError> {
        if arity < 2 {
            return Err(MarkovError::InvalidStateSpace {
                reason: format!("arity must be at least 2, got {arity}"),
            });
        }
        if width < 1 {
            return Err(MarkovError::InvalidStateSpace {
                reason: format!("width must be at least 1, got {width}"),
            });
        }
        let mut n_states: usize = 1;
        for _ in 0..width {
            n_states = n_states
                .checked_mul(arity)
                .ok_or_else(|| MarkovError::InvalidStateSpace {
                    reason: format!("state count {arity}^{width} overflows usize"),
                })?;
        }
        Ok(Self {
            arity,
            width,
            n_states,
        })
    }

    /// Returns the number of levels per attribute.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Returns the number of attributes per day.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of joint states, `arity^width`.
    pub fn n_states(&self) -> usize {
        self.n_states
    }

    /// Encodes a tuple of level digits into its joint state index.
    ///
    /// # Errors
    ///
    /// Returns [`MarkovError::WidthMismatch`] when the tuple length differs
    /// from [`width`](Self::width), and [`MarkovError::LevelOutOfRange`] when
    /// a digit is `>= arity`.
    pub fn encode(&self, levels: &[usize]) -> Result<usize, MarkovError> {
        if levels.len() != self.width {
            return Err(MarkovError::WidthMismatch {
                expected: self.width,
                got: levels.len(),
            });
        }
        let mut index = 0;
        let mut radix = 1;
        for (attribute, &level) in levels.iter().enumerate() {
            if level >= self.arity {
                return Err(MarkovError::LevelOutOfRange {
                    attribute,
                    level,
                    arity: self.arity,
                });
            }
            index += level * radix;
            radix *= self.arity;
        }
        Ok(index)
    }

    /// Encodes a tuple of [`Level`] values into its joint state index.
    ///
    /// # Errors
    ///
    /// Same conditions as [`encode`](Self::encode). Level digits can only be
    /// out of range for spaces with `arity == 2`.
    pub fn encode_levels(&self, levels: &[Level]) -> Result<usize, MarkovError> {
        let digits: Vec<usize> = levels.iter().map(|level| level.as_index()).collect();
        self.encode(&digits)
    }

    /// Decodes a joint state index into its tuple of level digits.
    ///
    /// # Errors
    ///
    /// Returns [`MarkovError::StateOutOfRange`] when `index >= n_states()`.
    pub fn decode(&self, index: usize) -> Result<Vec<usize>, MarkovError> {
        let mut levels = vec![0; self.width];
        self.decode_into(index, &mut levels)?;
        Ok(levels)
    }

    /// Decodes a joint state index into a pre-allocated buffer.
    ///
    /// Avoids the allocation of [`decode`](Self::decode) for callers that
    /// decode in a loop.
    ///
    /// # Errors
    ///
    /// Returns [`MarkovError::WidthMismatch`] when the buffer length differs
    /// from [`width`](Self::width), and [`MarkovError::StateOutOfRange`] when
    /// `index >= n_states()`.
    pub fn decode_into(&self, index: usize, levels: &mut [usize]) -> Result<(), MarkovError> {
        if levels.len() != self.width {
            return Err(MarkovError::WidthMismatch {
                expected: self.width,
                got: levels.len(),
            });
        }
        if index >= self.n_states {
            return Err(MarkovError::StateOutOfRange {
                index,
                n_states: self.n_states,
            });
        }
        let mut rest = index;
        for slot in levels.iter_mut() {
            *slot = rest % self.arity;
            rest /= self.arity;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_as_index_values() {
        assert_eq!(Level::Low.as_index(), 0);
        assert_eq!(Level::Medium.as_index(), 1);
        assert_eq!(Level::High.as_index(), 2);
    }

    #[test]
    fn level_from_index_round_trip() {
        for level in Level::ALL {
            assert_eq!(Level::from_index(level.as_index()), Some(level));
        }
        assert_eq!(Level::from_index(3), None);
    }

    #[test]
    fn level_labels() {
        assert_eq!(Level::Low.label(), "low");
        assert_eq!(Level::Medium.label(), "medium");
        assert_eq!(Level::High.label(), "high");
    }

    #[test]
    fn all_ordering() {
        assert_eq!(Level::ALL, [Level::Low, Level::Medium, Level::High]);
    }

    #[test]
    fn trait_assertions() {
        fn assert_copy<T: Copy>() {}
        fn assert_eq<T: Eq>() {}
        fn assert_hash<T: std::hash::Hash>() {}
        assert_copy::<Level>();
        assert_eq::<Level>();
        assert_hash::<Level>();
    }

    #[test]
    fn space_counts_states() {
        assert_eq!(StateSpace::new(3, 5).unwrap().n_states(), 243);
        assert_eq!(StateSpace::new(2, 3).unwrap().n_states(), 8);
        assert_eq!(StateSpace::new(5, 2).unwrap().n_states(), 25);
    }

    #[test]
    fn space_rejects_small_arity() {
        assert!(matches!(
            StateSpace::new(1, 5),
            Err(MarkovError::InvalidStateSpace { .. })
        ));
    }

    #[test]
    fn space_rejects_zero_width() {
        assert!(matches!(
            StateSpace::new(3, 0),
            Err(MarkovError::InvalidStateSpace { .. })
        ));
    }

    #[test]
    fn space_rejects_overflowing_state_count() {
        // 3^41 does not fit in 64 bits.
        assert!(matches!(
            StateSpace::new(3, 41),
            Err(MarkovError::InvalidStateSpace { .. })
        ));
    }

    #[test]
    fn encode_is_little_endian() {
        let space = StateSpace::new(3, 5).unwrap();
        assert_eq!(space.encode(&[0, 0, 0, 0, 0]).unwrap(), 0);
        assert_eq!(space.encode(&[2, 0, 0, 0, 0]).unwrap(), 2);
        assert_eq!(space.encode(&[0, 1, 0, 0, 0]).unwrap(), 3);
        assert_eq!(space.encode(&[2, 1, 0, 0, 0]).unwrap(), 5);
        assert_eq!(space.encode(&[0, 0, 0, 0, 1]).unwrap(), 81);
        assert_eq!(space.encode(&[2, 2, 2, 2, 2]).unwrap(), 242);
    }

    #[test]
    fn encode_checks_width() {
        let space = StateSpace::new(3, 5).unwrap();
        assert!(matches!(
            space.encode(&[0, 1, 2]),
            Err(MarkovError::WidthMismatch {
                expected: 5,
                got: 3
            })
        ));
    }

    #[test]
    fn encode_checks_digits() {
        let space = StateSpace::new(3, 5).unwrap();
        assert!(matches!(
            space.encode(&[0, 3, 0, 0, 0]),
            Err(MarkovError::LevelOutOfRange {
                attribute: 1,
                level: 3,
                arity: 3
            })
        ));
    }

    #[test]
    fn encode_levels_matches_encode() {
        let space = StateSpace::new(3, 3).unwrap();
        let tuple = [Level::High, Level::Low, Level::Medium];
        let digits = [2, 0, 1];
        assert_eq!(
            space.encode_levels(&tuple).unwrap(),
            space.encode(&digits).unwrap()
        );
        assert_eq!(space.encode_levels(&tuple).unwrap(), 11);
    }

    #[test]
    fn decode_known_indices() {
        let space = StateSpace::new(3, 5).unwrap();
        assert_eq!(space.decode(0).unwrap(), vec![0, 0, 0, 0, 0]);
        assert_eq!(space.decode(5).unwrap(), vec![2, 1, 0, 0, 0]);
        assert_eq!(space.decode(81).unwrap(), vec![0, 0, 0, 0, 1]);
        assert_eq!(space.decode(242).unwrap(), vec![2, 2, 2, 2, 2]);
    }

    #[test]
    fn decode_inverts_encode_exhaustively() {
        let space = StateSpace::new(3, 3).unwrap();
        for index in 0..space.n_states() {
            let levels = space.decode(index).unwrap();
            assert_eq!(space.encode(&levels).unwrap(), index);
        }
    }

    #[test]
    fn decode_rejects_out_of_range_index() {
        let space = StateSpace::new(3, 2).unwrap();
        assert!(matches!(
            space.decode(9),
            Err(MarkovError::StateOutOfRange {
                index: 9,
                n_states: 9
            })
        ));
    }

    #[test]
    fn decode_into_checks_buffer_length() {
        let space = StateSpace::new(3, 4).unwrap();
        let mut buffer = [0usize; 2];
        assert!(matches!(
            space.decode_into(7, &mut buffer),
            Err(MarkovError::WidthMismatch {
                expected: 4,
                got: 2
            })
        ));
    }

    #[test]
    fn generic_arity_round_trip() {
        let space = StateSpace::new(5, 2).unwrap();
        assert_eq!(space.encode(&[4, 3]).unwrap(), 19);
        assert_eq!(space.decode(19).unwrap(), vec![4, 3]);
    }
}
