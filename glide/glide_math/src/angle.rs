use std::f32::consts::{PI, TAU};
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// An angle in the XY plane. Positive angles turn counter-clockwise
/// (from +X towards +Y).
#[derive(Default, Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Angle {
    rads: f32,
}

impl Angle {
    pub const fn rad(rads: f32) -> Self {
        Self { rads }
    }

    pub fn deg(degs: f32) -> Self {
        Self {
            rads: degs * PI / 180.,
        }
    }

    pub const fn as_rad(self) -> f32 {
        self.rads
    }

    pub fn as_deg(self) -> f32 {
        self.rads * 180. / PI
    }

    /// Equivalent angle in [0, 2*PI)
    pub fn normalized(self) -> Self {
        let mut rads = self.rads % TAU;
        if rads < 0. {
            rads += TAU;
        }
        Self { rads }
    }
}

impl Add for Angle {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self {
            rads: self.rads + other.rads,
        }
    }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, other: Self) {
        self.rads += other.rads;
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self {
            rads: self.rads - other.rads,
        }
    }
}

impl SubAssign for Angle {
    fn sub_assign(&mut self, other: Self) {
        self.rads -= other.rads;
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { rads: -self.rads }
    }
}

impl Mul<f32> for Angle {
    type Output = Self;

    fn mul(self, x: f32) -> Self::Output {
        Self { rads: self.rads * x }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_conversions() {
        assert_approx_eq!(Angle::deg(180.).as_rad(), PI);
        assert_approx_eq!(Angle::rad(PI / 2.).as_deg(), 90., eps = 1e-4);
        assert_approx_eq!(Angle::default().as_rad(), 0.);
    }

    #[test]
    fn angle_arithmetic() {
        let a = Angle::deg(90.);
        let b = Angle::deg(45.);
        assert_approx_eq!((a + b).as_deg(), 135., eps = 1e-4);
        assert_approx_eq!((a - b).as_deg(), 45., eps = 1e-4);
        assert_approx_eq!((-a).as_deg(), -90., eps = 1e-4);
        assert_approx_eq!((b * 2.).as_deg(), 90., eps = 1e-4);
    }

    #[test]
    fn angle_normalized() {
        assert_approx_eq!(Angle::deg(-90.).normalized().as_deg(), 270., eps = 1e-4);
        assert_approx_eq!(Angle::deg(450.).normalized().as_deg(), 90., eps = 1e-4);
        assert_approx_eq!(Angle::deg(90.).normalized().as_deg(), 90., eps = 1e-4);
    }
}
