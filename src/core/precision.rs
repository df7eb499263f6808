use crate::encoders::algorithms::errors::DictionaryError;

/// Smallest supported alphabet size.
pub const MIN_BASE: usize = 2;

/// Largest supported alphabet size.
pub const MAX_BASE: usize = 256;

/// The accumulator search stops once it exceeds this value.
///
/// The working range ends up below 2^56, so `width * 256` and `value * base`
/// both fit in a `u64`.
const PRECISION_CEILING: u64 = (1 << 56) - 1;

/// Fixed-precision constants shared by the range encoder and decoder.
///
/// The coder works on a window of `max_digits_to_decode` base-N digits. Its
/// numeric range is `msd_divisor * base`, the place value of the leading digit
/// is `msd_divisor`, and that of the digit after it is `second_msd_divisor`.
///
/// # Example
///
/// ```
/// use base_rc::Precision;
///
/// let precision = Precision::for_base(256).unwrap();
/// assert_eq!(precision.msd_divisor(), 1 << 40);
/// assert_eq!(precision.max_digits_to_emit(), 1);
/// assert_eq!(precision.max_digits_to_decode(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision {
    base: u64,
    msd_divisor: u64,
    second_msd_divisor: u64,
    max_digits_to_emit: u32,
    max_digits_to_decode: u32,
}

impl Precision {
    /// Derives the constants for an alphabet of `base` symbols.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::InvalidSize`] unless `2 <= base <= 256`.
    pub fn for_base(base: usize) -> Result<Self, DictionaryError> {
        if !(MIN_BASE..=MAX_BASE).contains(&base) {
            return Err(DictionaryError::InvalidSize { size: base });
        }
        let base = base as u64;

        let mut accumulator: u64 = 1;
        let mut iterations: u32 = 0;
        while accumulator <= PRECISION_CEILING {
            accumulator *= base;
            iterations += 1;
        }

        let msd_divisor = accumulator / (base * base);

        let mut max_digits_to_emit = 0;
        let mut reach: u64 = 1;
        while reach < 256 {
            reach *= base;
            max_digits_to_emit += 1;
        }

        Ok(Precision {
            base,
            msd_divisor,
            second_msd_divisor: msd_divisor / base,
            max_digits_to_emit,
            max_digits_to_decode: iterations - 1,
        })
    }

    /// Returns the alphabet size these constants were derived for.
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Place value of the window's most significant digit.
    pub fn msd_divisor(&self) -> u64 {
        self.msd_divisor
    }

    /// Place value of the digit right after the most significant one.
    pub fn second_msd_divisor(&self) -> u64 {
        self.second_msd_divisor
    }

    /// Number of output digits needed to represent one input byte.
    ///
    /// Also the per-byte limit on renormalization shifts.
    pub fn max_digits_to_emit(&self) -> u32 {
        self.max_digits_to_emit
    }

    /// Number of digits in the working window.
    pub fn max_digits_to_decode(&self) -> u32 {
        self.max_digits_to_decode
    }

    /// Size of the working range, `base^max_digits_to_decode`.
    pub fn range(&self) -> u64 {
        self.msd_divisor * self.base
    }

    pub(crate) fn leading_digit(&self, value: u64) -> u64 {
        value / self.msd_divisor
    }

    pub(crate) fn second_digit(&self, value: u64) -> u64 {
        (value / self.second_msd_divisor) % self.base
    }

    /// Drops the leading digit and moves everything up one place.
    pub(crate) fn shift_out_leading(&self, value: u64) -> u64 {
        (value % self.msd_divisor) * self.base
    }

    /// Drops the second digit, keeping the leading one in place.
    pub(crate) fn collapse_second(&self, value: u64) -> u64 {
        self.leading_digit(value) * self.msd_divisor
            + (value % self.second_msd_divisor) * self.base
    }
}
