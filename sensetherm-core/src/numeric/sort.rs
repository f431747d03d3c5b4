//! Index sorting.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::cmp::Ordering;

use crate::errors::{NumericError, NumericResult};

/// Direction of [`sort_indices`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortOrder {
    /// Smallest value first
    #[default]
    Ascending,
    /// Largest value first
    Descending,
}

impl SortOrder {
    /// Legacy flag character.
    pub fn flag(self) -> char {
        match self {
            Self::Ascending => 'a',
            Self::Descending => 'd',
        }
    }
}

impl TryFrom<char> for SortOrder {
    type Error = NumericError;

    fn try_from(flag: char) -> Result<Self, Self::Error> {
        match flag {
            'a' | 'A' => Ok(Self::Ascending),
            'd' | 'D' => Ok(Self::Descending),
            _ => Err(NumericError::InvalidSortOrder),
        }
    }
}

/// Indices that visit `data` in sorted order, leaving `data` untouched.
///
/// The sort is stable: equal values keep their original relative order in
/// both directions. NaN compares equal to everything.
///
/// ```
/// use sensetherm_core::numeric::{sort_indices, SortOrder};
///
/// assert_eq!(sort_indices(&[3.0, 1.0, 2.0], SortOrder::Ascending).unwrap(), [1, 2, 0]);
/// assert_eq!(sort_indices(&[3.0, 1.0, 2.0], SortOrder::Descending).unwrap(), [0, 2, 1]);
/// ```
///
/// # Errors
///
/// [`NumericError::InsufficientData`] for an empty slice.
pub fn sort_indices(data: &[f64], order: SortOrder) -> NumericResult<Vec<usize>> {
    if data.is_empty() {
        return Err(NumericError::InsufficientData { required: 1, available: 0 });
    }

    let mut index: Vec<usize> = (0..data.len()).collect();
    let compare = |a: &usize, b: &usize| data[*a].partial_cmp(&data[*b]).unwrap_or(Ordering::Equal);
    match order {
        SortOrder::Ascending => index.sort_by(compare),
        SortOrder::Descending => index.sort_by(|a, b| compare(b, a)),
    }
    Ok(index)
}
