use crate::core::precision::Precision;

/// One renormalization step, carrying the leading digit it concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shift {
    /// Both bounds share their leading digit; it is final and shifts out.
    Settle(u64),
    /// The bounds straddle a leading-digit boundary and the second digits
    /// are `base - 1` and `0`. Carries the upper bound's leading digit.
    Defer(u64),
}

/// The working interval `[lo, hi]`, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Interval {
    lo: u64,
    hi: u64,
}

impl Interval {
    /// The whole working range.
    pub(crate) fn full(precision: &Precision) -> Self {
        Interval {
            lo: 0,
            hi: precision.range() - 1,
        }
    }

    #[cfg(test)]
    pub(crate) fn lo(&self) -> u64 {
        self.lo
    }

    pub(crate) fn hi(&self) -> u64 {
        self.hi
    }

    fn width(&self) -> u64 {
        self.hi - self.lo + 1
    }

    /// Narrows to the sub-interval that represents `byte`.
    pub(crate) fn narrow(&mut self, byte: u8) {
        let width = self.width();
        let byte = u64::from(byte);
        let lo = self.lo;
        self.lo = lo + (width * byte).div_ceil(256);
        self.hi = lo + (width * (byte + 1)).div_ceil(256) - 1;
    }

    /// The byte whose sub-interval contains `value`.
    ///
    /// Values outside the interval are clamped to it, so windows read from
    /// text the encoder never produced still map to some byte.
    pub(crate) fn byte_at(&self, value: u64) -> u8 {
        let width = self.width();
        let offset = value.saturating_sub(self.lo).min(width - 1);
        ((offset * 256) / width) as u8
    }

    /// Classifies the next renormalization step, or `None` to hold.
    pub(crate) fn next_shift(&self, precision: &Precision) -> Option<Shift> {
        let lo_msd = precision.leading_digit(self.lo);
        let hi_msd = precision.leading_digit(self.hi);

        if lo_msd == hi_msd {
            return Some(Shift::Settle(hi_msd));
        }

        let top = precision.base() - 1;
        if hi_msd - lo_msd == 1
            && precision.second_digit(self.lo) == top
            && precision.second_digit(self.hi) == 0
        {
            return Some(Shift::Defer(hi_msd));
        }

        None
    }

    pub(crate) fn apply(&mut self, shift: Shift, precision: &Precision) {
        match shift {
            Shift::Settle(_) => {
                self.lo = precision.shift_out_leading(self.lo);
                self.hi = precision.shift_out_leading(self.hi);
            }
            Shift::Defer(_) => {
                self.lo = precision.collapse_second(self.lo);
                self.hi = precision.collapse_second(self.hi);
            }
        }
    }
}

/// Applies up to `limit` shifts, handing each one to `on_shift` after the
/// interval has moved. Returns the number of shifts performed.
pub(crate) fn renormalize<F>(
    interval: &mut Interval,
    precision: &Precision,
    limit: u32,
    mut on_shift: F,
) -> u32
where
    F: FnMut(Shift),
{
    let mut performed = 0;
    while performed < limit {
        let Some(shift) = interval.next_shift(precision) else {
            break;
        };
        interval.apply(shift, precision);
        on_shift(shift);
        performed += 1;
    }
    performed
}

/// Number of data digits the encoder would emit if its input ended with the
/// interval in this state, after `shifts` shifts so far.
///
/// The final flush always stops on its own within `max_digits_to_decode`
/// shifts, since the interval never collapses to a single value.
pub(crate) fn projected_len(interval: &Interval, precision: &Precision, shifts: u64) -> u64 {
    let mut flushed = *interval;
    let flush = renormalize(
        &mut flushed,
        precision,
        precision.max_digits_to_decode(),
        |_| {},
    );
    shifts + u64::from(flush) + 1
}
