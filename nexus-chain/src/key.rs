//! Node identity.
//!
//! A [`Key`] names one slot in a list's storage. Links between nodes are keys,
//! and "the same node" always means "the same key" - never equal values.
//! A reserved sentinel (`NONE`) stands in for "no node" so that a link slot
//! is a plain copyable integer instead of an `Option`.

/// Copyable index type with a sentinel "none" value.
///
/// Implemented for the unsigned integer types; `u32` is the default used by
/// [`Arena`](crate::Arena). Custom key types only need a spare value for the
/// sentinel.
///
/// # Example
///
/// ```
/// use nexus_chain::Key;
///
/// #[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// struct Slot(u16);
///
/// impl Key for Slot {
///     const NONE: Self = Slot(u16::MAX);
///
///     fn from_usize(val: usize) -> Self {
///         Slot(val as u16)
///     }
///
///     fn as_usize(&self) -> usize {
///         self.0 as usize
///     }
/// }
///
/// assert!(Slot::NONE.is_none());
/// assert!(Slot(3).is_some());
/// ```
pub trait Key: Copy + Eq + core::fmt::Debug {
    /// Sentinel value representing "no node".
    const NONE: Self;

    /// Creates a key from a slot position.
    fn from_usize(val: usize) -> Self;

    /// Returns the slot position this key names.
    fn as_usize(&self) -> usize;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Returns `true` if this names a slot.
    #[inline]
    fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Converts the sentinel into `None`.
    #[inline]
    fn into_option(self) -> Option<Self> {
        if self.is_none() { None } else { Some(self) }
    }
}

macro_rules! impl_key_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Key for $ty {
                const NONE: Self = <$ty>::MAX;

                #[inline]
                fn from_usize(val: usize) -> Self {
                    val as Self
                }

                #[inline]
                fn as_usize(&self) -> usize {
                    *self as usize
                }
            }
        )*
    };
}

impl_key_for_unsigned!(u8, u16, u32, u64, usize);
