use num_traits::{PrimInt, Unsigned};

/// Unsigned primitive integers that can carry a packed bit field.
///
/// Conversions go through explicit shifts and truncation, never through
/// reinterpreting the value's storage, so results do not depend on host byte
/// order.
pub trait Field: PrimInt + Unsigned {
    /// Width of the type in bits.
    const BITS: usize;

    /// Zero-extend into the 64 bit working width.
    fn into_bits(self) -> u64;

    /// Keep the low bits that fit the type, discarding the rest.
    fn from_low_bits(bits: u64) -> Self;
}

macro_rules! impl_field {
    ($($ty:ty),*) => {$(
        impl Field for $ty {
            const BITS: usize = <$ty>::BITS as usize;

            #[inline]
            fn into_bits(self) -> u64 {
                self as u64
            }

            #[inline]
            fn from_low_bits(bits: u64) -> Self {
                bits as $ty
            }
        }
    )*};
}

impl_field!(u8, u16, u32, u64, usize);
