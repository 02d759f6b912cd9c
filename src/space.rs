//! Describe the coordinate frames ("Spaces") entities can belong to
//!
//! A [`Space`] is a pure type-level tag: it is never instantiated, and two
//! Spaces are the same only if they are the same type. Besides its identity, a
//! Space tells which [`Unit`] magnitudes of its vectors are expressed in, and
//! whether its entities may be projected onto the XY plane.

// # TYPES & TRAITS //

/// A coordinate frame. Use the [`space!`][crate::space!] macro to declare one
pub trait Space: 'static {
    /// The name used when printing entities of this Space
    const NAME: &'static str;
    /// The type returned by [`mag`][crate::Vector3::mag]
    type Unit: Unit;
    /// Whether 3D entities of this Space can be projected to 2D. Either
    /// [`XyAllowed`] or [`XyForbidden`]
    type Xy: XyCapability;

    /// The `AllowsXY` capability bit, read from [`Self::Xy`]
    fn allows_xy() -> bool {
        <Self::Xy as XyCapability>::ALLOWED
    }
}

/// A strongly-typed magnitude, built from and convertible to a raw scalar
pub trait Unit: Copy {
    fn from_raw(raw: f64) -> Self;
    fn raw(self) -> f64;
}

/// Raw scalars are their own unit
impl Unit for f64 {
    fn from_raw(raw: f64) -> Self {
        raw
    }
    fn raw(self) -> f64 {
        self
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Type-level boolean telling whether a Space supports 2D projection
pub trait XyCapability: sealed::Sealed + 'static {
    const ALLOWED: bool;
}

/// The Space supports projecting 3D entities onto its XY plane
#[derive(Debug, Clone, Copy)]
pub enum XyAllowed {}

/// The Space does not support projecting 3D entities onto its XY plane
#[derive(Debug, Clone, Copy)]
pub enum XyForbidden {}

impl sealed::Sealed for XyAllowed {}
impl sealed::Sealed for XyForbidden {}

impl XyCapability for XyAllowed {
    const ALLOWED: bool = true;
}
impl XyCapability for XyForbidden {
    const ALLOWED: bool = false;
}

/// Declare one or several [`Space`]s. Each one becomes an uninhabited enum, so
/// it can only ever be used as a type parameter:
///
/// ```
/// geoframe::space! {
///     /// Patient coordinates, in millimeters
///     pub Patient { unit: f64 }
///     pub Screen { unit: f64, xy: geoframe::XyForbidden }
/// }
/// use geoframe::Space as _;
/// assert_eq!(Patient::NAME, "Patient");
/// assert!(Patient::allows_xy());
/// assert!(!Screen::allows_xy());
/// ```
///
/// When `xy` is omitted, the Space allows XY projection.
#[macro_export]
macro_rules! space {
    (@xy) => { $crate::XyAllowed };
    (@xy $xy:ty) => { $xy };
    ($($(#[$meta:meta])* $vis:vis $name:ident { unit: $unit:ty $(, xy: $xy:ty)? $(,)? })*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            $vis enum $name {}

            impl $crate::Space for $name {
                const NAME: &'static str = stringify!($name);
                type Unit = $unit;
                type Xy = $crate::space!(@xy $($xy)?);
            }
        )*
    };
}

#[cfg(test)]
pub(crate) mod test_spaces {
    //! Spaces shared by the unit tests of this crate

    use super::Unit;

    /// A length in millimeters
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Mm(pub f64);

    impl Unit for Mm {
        fn from_raw(raw: f64) -> Self {
            Mm(raw)
        }
        fn raw(self) -> f64 {
            self.0
        }
    }

    crate::space! {
        pub View { unit: Mm }
        pub Patient { unit: Mm }
        pub Image { unit: f64 }
        pub Detector { unit: f64, xy: crate::XyForbidden }
    }
}

#[cfg(test)]
mod tests {
    use super::{test_spaces::*, *};
    use crate::test_macros::*;

    simple_eqs! {
        space_name: View::NAME => "View",
        xy_defaults_to_allowed: Image::allows_xy() => true,
        xy_forbidden: Detector::allows_xy() => false,
        unit_round_trip: Mm::from_raw(4.5).raw() => 4.5,
        f64_unit: <f64 as Unit>::from_raw(2.0) => 2.0
    }
}
