use crate::math::approx_eq;

/// A closed 1D interval [min, max].
///
/// min > max is allowed and means the empty interval; `normalized` swaps the
/// limits back when an operation (like scaling by a negative factor) produced
/// a reversed but genuinely non-empty pair.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Canonical empty interval: neutral element of `union`.
    pub const EMPTY: Interval = Interval::new(f32::INFINITY, f32::NEG_INFINITY);

    /// The whole real line: neutral element of `intersection`.
    pub const FULL: Interval = Interval::new(f32::NEG_INFINITY, f32::INFINITY);

    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.min <= self.max
    }

    /// Same limits, swapped if needed so that min <= max.
    pub fn normalized(self) -> Self {
        if self.is_valid() {
            self
        } else {
            Self::new(self.max, self.min)
        }
    }

    #[inline]
    pub fn size(self) -> f32 {
        self.max - self.min
    }

    #[inline]
    pub fn center(self) -> f32 {
        0.5 * (self.min + self.max)
    }

    #[inline]
    pub fn contains(self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Closed overlap test: sharing a single limit counts.
    #[inline]
    pub fn overlaps(self, other: Self) -> bool {
        self.min <= other.max && other.min <= self.max
    }

    /// Scales both limits; a negative factor reverses them, so the result is
    /// re-normalized to stay a valid interval.
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.min * factor, self.max * factor).normalized()
    }

    pub fn intersection(self, other: Self) -> Self {
        Self::new(self.min.max(other.min), self.max.min(other.max))
    }

    /// Interval hull of the two (the smallest interval containing both).
    pub fn union(self, other: Self) -> Self {
        Self::new(self.min.min(other.min), self.max.max(other.max))
    }

    /// Times `t` at which `point + speed * t` lies inside this interval.
    /// With ~zero speed the answer degenerates to always (FULL) or never
    /// (EMPTY) depending on where the point already is.
    pub fn hit_times_of_point(self, point: f32, speed: f32) -> Self {
        if approx_eq(speed, 0.) {
            if self.contains(point) {
                Self::FULL
            } else {
                Self::EMPTY
            }
        } else {
            Self::new((self.min - point) / speed, (self.max - point) / speed).normalized()
        }
    }

    /// Times `t` at which `other + speed * t` overlaps this interval: the
    /// union of the point sweeps of `other`'s two edges (both intervals keep
    /// constant size, so the overlap window is a single convex interval).
    /// The ~zero speed case falls back to the static overlap test, which also
    /// covers a wider `other` fully containing this interval.
    pub fn hit_times_of_interval(self, other: Self, speed: f32) -> Self {
        if approx_eq(speed, 0.) {
            if self.overlaps(other) {
                Self::FULL
            } else {
                Self::EMPTY
            }
        } else {
            self.hit_times_of_point(other.min, speed)
                .union(self.hit_times_of_point(other.max, speed))
        }
    }
}

#[cfg(test)]
impl glide_test::approx_eq_testable::Approx_Eq_Testable for Interval {
    fn cmp_list(&self) -> Vec<f32> {
        vec![self.min, self.max]
    }
}
