use crate::angle::Angle;
use crate::math::{self, approx_eq};
use std::f32::consts::{FRAC_PI_2, TAU};
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

#[repr(C)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

pub type Vec2f = Vector2<f32>;

/// Policy for operations that need a direction out of the null vector
/// (`angle`, `normalized_or_axis`, `with_magnitude`). When the null vector is
/// not allowed, it is re-defined as a vector along NULL_VECTOR_ANGLE.
pub const NULL_VECTOR_ALLOWED: bool = false;
pub const NULL_VECTOR_ANGLE: Angle = Angle::rad(0.);

impl<T: Hash> Hash for Vector2<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.x.hash(state);
        self.y.hash(state);
    }
}

impl<T: Copy> From<(T, T)> for Vector2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T: Copy> From<Vector2<T>> for (T, T) {
    fn from(v: Vector2<T>) -> Self {
        (v.x, v.y)
    }
}

impl<T> Vector2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Default> Default for Vector2<T> {
    fn default() -> Self {
        Self {
            x: T::default(),
            y: T::default(),
        }
    }
}

impl<T: Copy> Copy for Vector2<T> {}

impl<T: Clone> Clone for Vector2<T> {
    fn clone(&self) -> Self {
        Self {
            x: self.x.clone(),
            y: self.y.clone(),
        }
    }
}

impl<T: Debug> Debug for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{{ x: {:?}, y: {:?} }}", self.x, self.y)
    }
}

impl<T: PartialEq> PartialEq for Vector2<T> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl<T: Eq> Eq for Vector2<T> {}

impl<T: Copy + Neg<Output = T>> Neg for Vector2<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<T: Copy + Add<Output = T>> Add for Vector2<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T: Copy + Sub<Output = T>> Sub for Vector2<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T: Copy + Mul<Output = T>> Mul<T> for Vector2<T> {
    type Output = Self;

    fn mul(self, other: T) -> Self::Output {
        Self {
            x: self.x * other,
            y: self.y * other,
        }
    }
}

// @WaitForStable: we should really implement Mul<Vector2<T>> for T, but that's
// not currently allowed.
impl Mul<Vector2<f32>> for f32 {
    type Output = Vector2<f32>;

    fn mul(self, other: Vector2<f32>) -> Self::Output {
        Self::Output {
            x: self * other.x,
            y: self * other.y,
        }
    }
}

impl<T: Copy + Mul<Output = T>> Mul for Vector2<T> {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        Self {
            x: self.x * other.x,
            y: self.y * other.y,
        }
    }
}

impl<T: Copy + Div<Output = T>> Div<T> for Vector2<T> {
    type Output = Self;

    fn div(self, other: T) -> Self::Output {
        Self {
            x: self.x / other,
            y: self.y / other,
        }
    }
}

impl<T: Copy + Div<Output = T>> Div for Vector2<T> {
    type Output = Self;

    fn div(self, other: Self) -> Self::Output {
        Self {
            x: self.x / other.x,
            y: self.y / other.y,
        }
    }
}

impl<T: Copy + Add<Output = T>> AddAssign for Vector2<T> {
    fn add_assign(&mut self, other: Self) {
        *self = Self {
            x: self.x + other.x,
            y: self.y + other.y,
        };
    }
}

impl<T: Copy + Sub<Output = T>> SubAssign for Vector2<T> {
    fn sub_assign(&mut self, other: Self) {
        *self = Self {
            x: self.x - other.x,
            y: self.y - other.y,
        };
    }
}

impl<T: Copy + Mul<Output = T>> MulAssign<T> for Vector2<T> {
    fn mul_assign(&mut self, other: T) {
        *self = Self {
            x: self.x * other,
            y: self.y * other,
        };
    }
}

impl<T: Copy + Div<Output = T>> DivAssign<T> for Vector2<T> {
    fn div_assign(&mut self, other: T) {
        *self = Self {
            x: self.x / other,
            y: self.y / other,
        };
    }
}

impl<T: Copy> Index<usize> for Vector2<T> {
    type Output = T;

    fn index(&self, idx: usize) -> &Self::Output {
        match idx {
            0 => &self.x,
            1 => &self.y,
            _ => fatal!("Tried to index Vector2 with invalid index {}", idx),
        }
    }
}

#[inline(always)]
pub fn lerp_v(v1: Vec2f, v2: Vec2f, t: f32) -> Vec2f {
    v2!(math::lerp(v1.x, v2.x, t), math::lerp(v1.y, v2.y, t))
}

#[inline]
pub fn approx_eq_v(a: Vec2f, b: Vec2f) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

#[cfg(debug_assertions)]
#[inline(always)]
pub fn sanity_check_v(v: Vec2f) {
    debug_assert!(!v.x.is_nan());
    debug_assert!(!v.y.is_nan());
}

#[cfg(not(debug_assertions))]
pub fn sanity_check_v(_: Vec2f) {}

impl Vec2f {
    #[inline]
    pub fn magnitude2(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn magnitude(self) -> f32 {
        self.magnitude2().sqrt()
    }

    /// True if both coordinates are zero within COMP_EPSILON.
    #[inline]
    pub fn is_near_zero(self) -> bool {
        approx_eq(self.x, 0.) && approx_eq(self.y, 0.)
    }

    #[inline]
    pub fn dot(self, b: Self) -> f32 {
        self.x * b.x + self.y * b.y
    }

    #[inline]
    pub fn from_polar(r: f32, theta: f32) -> Self {
        let (s, c) = theta.sin_cos();
        Self { x: r * c, y: r * s }
    }

    #[inline]
    pub fn from_rotation(rot: Angle) -> Self {
        let (s, c) = rot.as_rad().sin_cos();
        v2!(c, s)
    }

    pub fn distance(self, other: Self) -> f32 {
        self.distance2(other).sqrt()
    }

    pub fn distance2(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Returns the normalized vector, or 0 if it has length 0.
    #[inline]
    pub fn normalized_or_zero(self) -> Self {
        let mag = self.magnitude2();
        if mag == 0. {
            return Self::default();
        }

        let den = 1.0 / mag.sqrt();
        Self {
            x: self.x * den,
            y: self.y * den,
        }
    }

    /// Unit form honoring the null-vector policy: a (near) null vector becomes
    /// the unit vector along NULL_VECTOR_ANGLE rather than staying null.
    #[inline]
    pub fn normalized_or_axis(self) -> Self {
        if self.is_near_zero() {
            if NULL_VECTOR_ALLOWED {
                self
            } else {
                Self::from_rotation(NULL_VECTOR_ANGLE)
            }
        } else {
            self.normalized_or_zero()
        }
    }

    /// Rescales to the given signed magnitude (negative flips the direction).
    /// A (near) null vector is re-defined along NULL_VECTOR_ANGLE.
    pub fn with_magnitude(self, mag: f32) -> Self {
        if self.is_near_zero() {
            if NULL_VECTOR_ALLOWED {
                self
            } else {
                Self::from_polar(mag, NULL_VECTOR_ANGLE.as_rad())
            }
        } else {
            self * (mag / self.magnitude())
        }
    }

    #[inline]
    pub fn rotated(self, angle: Angle) -> Self {
        let (s, c) = angle.as_rad().sin_cos();
        Self {
            x: c * self.x - s * self.y,
            y: s * self.x + c * self.y,
        }
    }

    /// Angle with +OX, in [0, 2*PI). The null vector maps to NULL_VECTOR_ANGLE.
    pub fn angle(self) -> Angle {
        if self.is_near_zero() {
            return NULL_VECTOR_ANGLE;
        }
        let mut rads = self.y.atan2(self.x);
        if rads < 0. {
            rads += TAU;
        }
        Angle::rad(rads)
    }

    /// Signed angle turning from `guide` to `self`, in (-2*PI, 2*PI).
    /// Positive means a counter-clockwise turn. The sign matters: movement
    /// restriction relies on it, so this is `angle() - guide.angle()` exactly,
    /// not a symmetric "angle between".
    #[inline]
    pub fn angle_between(self, guide: Self) -> Angle {
        self.angle() - guide.angle()
    }

    /// Signed length of the component of `self` along `guide`.
    #[inline]
    pub fn tangent_scalar(self, guide: Self) -> f32 {
        self.magnitude() * self.angle_between(guide).as_rad().cos()
    }

    /// Signed length of the component of `self` perpendicular to `guide`
    /// (positive towards `guide` rotated +90 degrees).
    #[inline]
    pub fn normal_scalar(self, guide: Self) -> f32 {
        self.magnitude() * self.angle_between(guide).as_rad().sin()
    }

    /// Component of `self` parallel to `guide`.
    pub fn tangent_part(self, guide: Self) -> Self {
        Self::from_polar(self.tangent_scalar(guide), guide.angle().as_rad())
    }

    /// Component of `self` perpendicular to `guide`.
    /// tangent_part + normal_part reassemble the original vector.
    pub fn normal_part(self, guide: Self) -> Self {
        Self::from_polar(
            self.normal_scalar(guide),
            guide.angle().as_rad() + FRAC_PI_2,
        )
    }

    /// Cheap same-direction test for linearly dependent vectors: no coordinate
    /// pair with opposite signs.
    #[inline]
    pub fn same_dir_fast(self, other: Self) -> bool {
        !((self.x * other.x < 0.) || (self.y * other.y < 0.))
    }
}

impl Display for Vec2f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[derive(Debug)]
pub struct Parse_Vector_Error {
    input: String,
}

impl std::error::Error for Parse_Vector_Error {}

impl Display for Parse_Vector_Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot parse `{}` as a \"(x,y)\" vector", self.input)
    }
}

impl FromStr for Vec2f {
    type Err = Parse_Vector_Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || Parse_Vector_Error {
            input: String::from(s),
        };
        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(err)?;
        let mut coords = inner.splitn(2, ',');
        let x = coords
            .next()
            .and_then(|c| c.trim().parse::<f32>().ok())
            .ok_or_else(err)?;
        let y = coords
            .next()
            .and_then(|c| c.trim().parse::<f32>().ok())
            .ok_or_else(err)?;
        Ok(v2!(x, y))
    }
}

#[cfg(test)]
impl glide_test::approx_eq_testable::Approx_Eq_Testable for Vec2f {
    fn cmp_list(&self) -> Vec<f32> {
        vec![self.x, self.y]
    }
}
