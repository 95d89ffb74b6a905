//! Scalar quantities tagged with a compile-time unit marker.
//!
//! A [`Quantity<U>`] is an `f64` that remembers its units. Adding or
//! comparing quantities requires matching units; multiplying two quantities
//! produces a quantity in [`Product`] units, so the dot product of two
//! length vectors is an area.
//!
//! Lengths and angles convert to and from the SI quantities of `uom`, which
//! also performs every unit conversion (millimeters, degrees, turns).

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use uom::si::angle::{degree, radian, revolution};
use uom::si::f64 as si;
use uom::si::length::{meter, millimeter};
use uom::si::ratio::ratio;

/// Marker for dimensionless values (ratios, direction components).
#[derive(Debug)]
pub enum Unitless {}

/// Marker for lengths in meters.
#[derive(Debug)]
pub enum Meters {}

/// Marker for on-screen lengths in pixels.
#[derive(Debug)]
pub enum Pixels {}

/// Marker for angles in radians.
#[derive(Debug)]
pub enum Radians {}

/// Units of the product of a quantity in `A` and a quantity in `B`.
pub struct Product<A, B>(PhantomData<fn() -> (A, B)>);

/// Units of a quantity multiplied by itself.
pub type Squared<U> = Product<U, U>;

/// A length in meters.
pub type Length = Quantity<Meters>;

/// An area in square meters.
pub type Area = Quantity<Squared<Meters>>;

/// An angle in radians.
pub type Angle = Quantity<Radians>;

/// A scalar value tagged with units `U`.
pub struct Quantity<U> {
    value: f64,
    units: PhantomData<fn() -> U>,
}

impl<U> Quantity<U> {
    /// Wraps a raw value, trusting that it is expressed in units `U`.
    #[must_use]
    pub const fn from_raw(value: f64) -> Self {
        Self {
            value,
            units: PhantomData,
        }
    }

    /// Returns the raw value in units `U`.
    #[must_use]
    pub const fn raw(self) -> f64 {
        self.value
    }

    /// The additive identity.
    #[must_use]
    pub const fn zero() -> Self {
        Self::from_raw(0.0)
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(self) -> Self {
        Self::from_raw(self.value.abs())
    }

    /// Returns the smaller of the two quantities.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self::from_raw(self.value.min(other.value))
    }

    /// Returns the larger of the two quantities.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::from_raw(self.value.max(other.value))
    }

    /// Total ordering following [`f64::total_cmp`].
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.value.total_cmp(&other.value)
    }

    /// Multiplies two quantities, producing a quantity in [`Product`] units.
    #[must_use]
    pub fn times<V>(self, other: Quantity<V>) -> Quantity<Product<U, V>> {
        Quantity::from_raw(self.value * other.value)
    }

    /// Returns this quantity multiplied by itself.
    #[must_use]
    pub fn squared(self) -> Quantity<Squared<U>> {
        self.times(self)
    }

    /// Ratio of two quantities in the same units.
    #[must_use]
    pub fn ratio(self, other: Self) -> f64 {
        self.value / other.value
    }

    /// Linear interpolation, `t = 0` gives `start` and `t = 1` gives `end`.
    #[must_use]
    pub fn interpolate_from(start: Self, end: Self, t: f64) -> Self {
        if t <= 0.5 {
            Self::from_raw(start.value + t * (end.value - start.value))
        } else {
            Self::from_raw(end.value + (1.0 - t) * (start.value - end.value))
        }
    }
}

impl<U, V> Quantity<Product<U, V>> {
    /// Divides a product quantity by one of its factors.
    #[must_use]
    pub fn over(self, other: Quantity<V>) -> Quantity<U> {
        Quantity::from_raw(self.value / other.value)
    }
}

impl<U> Quantity<Squared<U>> {
    /// Square root of a squared quantity.
    #[must_use]
    pub fn sqrt(self) -> Quantity<U> {
        Quantity::from_raw(self.value.sqrt())
    }
}

impl Quantity<Unitless> {
    /// Returns a dimensionless quantity.
    #[must_use]
    pub const fn unitless(value: f64) -> Self {
        Self::from_raw(value)
    }
}

impl Quantity<Meters> {
    /// Returns a length of `value` meters.
    #[must_use]
    pub const fn meters(value: f64) -> Self {
        Self::from_raw(value)
    }

    /// Returns a length of `value` millimeters, stored in meters.
    #[must_use]
    pub fn millimeters(value: f64) -> Self {
        Self::from_si(si::Length::new::<millimeter>(value))
    }

    /// Converts an SI length into meters.
    #[must_use]
    pub fn from_si(length: si::Length) -> Self {
        Self::from_raw(length.get::<meter>())
    }

    /// Returns this length as an SI length.
    #[must_use]
    pub fn to_si(self) -> si::Length {
        si::Length::new::<meter>(self.value)
    }

    /// Returns the value in meters.
    #[must_use]
    pub const fn in_meters(self) -> f64 {
        self.value
    }

    /// Returns the value in millimeters.
    #[must_use]
    pub fn in_millimeters(self) -> f64 {
        self.to_si().get::<millimeter>()
    }
}

impl From<si::Length> for Quantity<Meters> {
    fn from(length: si::Length) -> Self {
        Self::from_si(length)
    }
}

impl From<Quantity<Meters>> for si::Length {
    fn from(length: Quantity<Meters>) -> Self {
        length.to_si()
    }
}

impl Quantity<Pixels> {
    /// Returns an on-screen length of `value` pixels.
    #[must_use]
    pub const fn pixels(value: f64) -> Self {
        Self::from_raw(value)
    }
}

impl Quantity<Radians> {
    /// Returns an angle of `value` radians.
    #[must_use]
    pub const fn radians(value: f64) -> Self {
        Self::from_raw(value)
    }

    /// Returns an angle of `value` degrees, stored in radians.
    #[must_use]
    pub fn degrees(value: f64) -> Self {
        Self::from_si(si::Angle::new::<degree>(value))
    }

    /// An angle given in full turns, `turns(1.0)` being 360 degrees.
    #[must_use]
    pub fn turns(value: f64) -> Self {
        Self::from_si(si::Angle::new::<revolution>(value))
    }

    /// Converts an SI angle into radians.
    #[must_use]
    pub fn from_si(angle: si::Angle) -> Self {
        Self::from_raw(angle.get::<radian>())
    }

    /// Returns this angle as an SI angle.
    #[must_use]
    pub fn to_si(self) -> si::Angle {
        si::Angle::new::<radian>(self.value)
    }

    /// Returns the value in radians.
    #[must_use]
    pub const fn in_radians(self) -> f64 {
        self.value
    }

    /// Returns the value in degrees.
    #[must_use]
    pub fn in_degrees(self) -> f64 {
        self.to_si().get::<degree>()
    }

    /// Returns the sine.
    #[must_use]
    pub fn sin(self) -> f64 {
        self.to_si().sin().get::<ratio>()
    }

    /// Returns the cosine.
    #[must_use]
    pub fn cos(self) -> f64 {
        self.to_si().cos().get::<ratio>()
    }

    /// Returns the tangent.
    #[must_use]
    pub fn tan(self) -> f64 {
        self.to_si().tan().get::<ratio>()
    }

    /// Two-argument arctangent of `y / x`, in `(-pi, pi]`.
    #[must_use]
    pub fn atan2(y: f64, x: f64) -> Self {
        Self::from_si(si::Ratio::new::<ratio>(y).atan2(si::Ratio::new::<ratio>(x)))
    }
}

impl From<si::Angle> for Quantity<Radians> {
    fn from(angle: si::Angle) -> Self {
        Self::from_si(angle)
    }
}

impl From<Quantity<Radians>> for si::Angle {
    fn from(angle: Quantity<Radians>) -> Self {
        angle.to_si()
    }
}

impl<U> Clone for Quantity<U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U> Copy for Quantity<U> {}

impl<U> Default for Quantity<U> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<U> fmt::Debug for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Quantity").field(&self.value).finish()
    }
}

impl<U> PartialEq for Quantity<U> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<U> PartialOrd for Quantity<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<U> Add for Quantity<U> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_raw(self.value + rhs.value)
    }
}

impl<U> AddAssign for Quantity<U> {
    fn add_assign(&mut self, rhs: Self) {
        self.value += rhs.value;
    }
}

impl<U> Sub for Quantity<U> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_raw(self.value - rhs.value)
    }
}

impl<U> SubAssign for Quantity<U> {
    fn sub_assign(&mut self, rhs: Self) {
        self.value -= rhs.value;
    }
}

impl<U> Neg for Quantity<U> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_raw(-self.value)
    }
}

impl<U> Mul<f64> for Quantity<U> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::from_raw(self.value * rhs)
    }
}

impl<U> Mul<Quantity<U>> for f64 {
    type Output = Quantity<U>;

    fn mul(self, rhs: Quantity<U>) -> Quantity<U> {
        Quantity::from_raw(self * rhs.value)
    }
}

impl<U> Div<f64> for Quantity<U> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::from_raw(self.value / rhs)
    }
}

impl<U> Sum for Quantity<U> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn products_track_units() {
        let width = Length::meters(3.0);
        let height = Length::meters(4.0);
        let area: Area = width.times(height);
        assert_eq!(area.raw(), 12.0);
        assert_eq!(area.over(height), width);
        assert_eq!(width.squared().sqrt(), width);
    }

    #[test]
    fn angle_conversions() {
        assert_relative_eq!(Angle::degrees(180.0).in_radians(), std::f64::consts::PI);
        assert_relative_eq!(Angle::turns(0.25).in_degrees(), 90.0);
        assert_relative_eq!(Angle::degrees(30.0).sin(), 0.5, epsilon = 1e-15);
        assert_relative_eq!(Angle::atan2(1.0, -1.0).in_degrees(), 135.0, epsilon = 1e-12);
        assert_relative_eq!(Angle::degrees(45.0).tan(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn si_round_trips() {
        use uom::si::angle::degree;
        use uom::si::length::{centimeter, meter};

        let length = Length::millimeters(1250.0);
        assert_relative_eq!(length.in_meters(), 1.25, epsilon = 1e-15);
        assert_relative_eq!(length.in_millimeters(), 1250.0, epsilon = 1e-12);
        let si_length: si::Length = length.into();
        assert_relative_eq!(si_length.get::<centimeter>(), 125.0, epsilon = 1e-12);
        assert_eq!(Length::from(si::Length::new::<meter>(2.0)), Length::meters(2.0));

        let angle = Angle::from(si::Angle::new::<degree>(90.0));
        assert_relative_eq!(angle.in_radians(), std::f64::consts::FRAC_PI_2, epsilon = 1e-15);
        assert_relative_eq!(angle.to_si().get::<degree>(), 90.0, epsilon = 1e-12);
    }

    #[test]
    fn ordering_and_sum() {
        let lengths = [Length::meters(1.0), Length::meters(-2.5), Length::meters(4.0)];
        let total: Length = lengths.iter().copied().sum();
        assert_eq!(total, Length::meters(2.5));
        assert!(Length::meters(-2.5) < Length::zero());
        assert_eq!(
            Length::meters(1.0).total_cmp(&Length::meters(1.0)),
            Ordering::Equal
        );
        assert_eq!(Length::meters(-3.0).abs().max(Length::meters(2.0)), Length::meters(3.0));
    }

    #[test]
    fn interpolation_uses_nearer_endpoint() {
        let a = Length::meters(2.0);
        let b = Length::meters(6.0);
        assert_eq!(Quantity::interpolate_from(a, b, 0.25), Length::meters(3.0));
        assert_eq!(Quantity::interpolate_from(a, b, 1.5), Length::meters(8.0));
    }
}
