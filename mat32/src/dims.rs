use core::fmt;
use core::str::FromStr;

use crate::{Enum, InvalidEnumError};

/// Labels of the four components of a homogeneous coordinate, X, Y, Z and W.
///
/// This is an integer with named values rather than a Rust `enum`, so that it can hold values
/// which are not one of the labels (see [`Enum::set_int64()`]); such values are not
/// [valid](Enum::is_valid) but can still be formatted and compared.
///
/// ```
/// use mat32::{Dims, Enum as _};
///
/// let mut d: Dims = "y".parse().unwrap();
/// assert_eq!(d, Dims::Y);
/// assert_eq!(d.int64(), 1);
/// assert_eq!(d.to_string(), "Y");
///
/// d.set_int64(99);
/// assert!(!d.is_valid());
/// assert_eq!(d.to_string(), "99");
/// ```
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[repr(transparent)]
pub struct Dims(i64);

impl Dims {
    #[allow(missing_docs)]
    pub const X: Self = Self(0);
    #[allow(missing_docs)]
    pub const Y: Self = Self(1);
    #[allow(missing_docs)]
    pub const Z: Self = Self(2);
    #[allow(missing_docs)]
    pub const W: Self = Self(3);

    /// One more than the largest valid value; the number of valid values.
    pub const N: Self = Self(4);

    /// All four valid values in ascending order, [X, Y, Z, W].
    pub const ALL: [Self; 4] = [Self::X, Self::Y, Self::Z, Self::W];

    /// Convert to a number for indexing 4-element arrays, or [`None`] if this is not a
    /// valid value.
    #[inline]
    pub const fn index(self) -> Option<usize> {
        match self.0 {
            0..=3 => Some(self.0 as usize),
            _ => None,
        }
    }

    /// Returns the label, if this is a valid value.
    const fn label(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("X"),
            1 => Some("Y"),
            2 => Some("Z"),
            3 => Some("W"),
            _ => None,
        }
    }

    fn from_label(s: &str) -> Option<Self> {
        let exact = match s {
            "X" => Some(Self::X),
            "Y" => Some(Self::Y),
            "Z" => Some(Self::Z),
            "W" => Some(Self::W),
            _ => None,
        };
        exact.or(match s {
            "x" => Some(Self::X),
            "y" => Some(Self::Y),
            "z" => Some(Self::Z),
            "w" => Some(Self::W),
            _ => None,
        })
    }
}

impl Enum for Dims {
    const TYPE_NAME: &'static str = "Dims";

    #[inline]
    fn set_string(&mut self, s: &str) -> Result<(), InvalidEnumError> {
        match Self::from_label(s) {
            Some(value) => {
                *self = value;
                Ok(())
            }
            None => {
                log::debug!("rejected {s:?} as a {}", Self::TYPE_NAME);
                Err(InvalidEnumError::new(s, Self::TYPE_NAME))
            }
        }
    }

    #[inline]
    fn int64(self) -> i64 {
        self.0
    }

    #[inline]
    fn set_int64(&mut self, n: i64) {
        if Self(n).index().is_none() {
            log::trace!("storing out-of-range value {n} in {}", Self::TYPE_NAME);
        }
        self.0 = n;
    }

    #[inline]
    fn values() -> &'static [Self] {
        &Self::ALL
    }

    #[inline]
    fn is_valid(self) -> bool {
        self.index().is_some()
    }
}

/// Formats the value as its label, `X`, `Y`, `Z` or `W`,
/// or as a decimal integer if it is not a valid value.
impl fmt::Display for Dims {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => f.write_str(label),
            None => fmt::Display::fmt(&self.0, f),
        }
    }
}

impl fmt::Debug for Dims {
    #[mutants::skip]
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => write!(f, "Dims::{label}"),
            None => f.debug_tuple("Dims").field(&self.0).finish(),
        }
    }
}

impl FromStr for Dims {
    type Err = InvalidEnumError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut value = Self::default();
        value.set_string(s)?;
        Ok(value)
    }
}

/// Does not check that the value is valid.
impl From<i64> for Dims {
    #[inline]
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Dims> for i64 {
    #[inline]
    fn from(value: Dims) -> Self {
        value.0
    }
}

mod impl_index_dims {
    use super::Dims;
    use core::ops;

    /// Panics if the [`Dims`] is not a valid value.
    impl<T> ops::Index<Dims> for [T; 4] {
        type Output = T;

        #[inline]
        #[track_caller]
        fn index(&self, index: Dims) -> &Self::Output {
            match index.index() {
                Some(i) => &self[i],
                None => panic!("{index:?} is not a valid index"),
            }
        }
    }
    impl<T> ops::IndexMut<Dims> for [T; 4] {
        #[inline]
        #[track_caller]
        fn index_mut(&mut self, index: Dims) -> &mut Self::Output {
            match index.index() {
                Some(i) => &mut self[i],
                None => panic!("{index:?} is not a valid index"),
            }
        }
    }
}
