use crate::shape::Shape;
use glide_math::math::approx_eq;
use glide_math::vector::Vec2f;

/// Where a round shape's center sits relative to a rectangle, per axis:
/// -1 before the rectangle's extent, 0 within it, +1 past it. The nine
/// combinations split the plane into the rectangle's surrounding regions
/// (4 corners, 4 sides, inside).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Region {
    pub x: i8,
    pub y: i8,
}

impl Region {
    #[inline]
    pub fn is_corner(self) -> bool {
        self.x != 0 && self.y != 0
    }

    #[inline]
    pub fn is_side(self) -> bool {
        (self.x != 0) != (self.y != 0)
    }

    #[inline]
    pub fn is_inside(self) -> bool {
        self.x == 0 && self.y == 0
    }
}

#[inline]
fn classify_coord(coord: f32, lo: f32, hi: f32) -> i8 {
    if coord < lo {
        -1
    } else if coord <= hi {
        0
    } else {
        1
    }
}

pub fn classify(center: Vec2f, rect: &Shape) -> Region {
    let lo = rect.corner();
    let hi = lo + rect.diagonal();
    Region {
        x: classify_coord(center.x, lo.x, hi.x),
        y: classify_coord(center.y, lo.y, hi.y),
    }
}

/// The rectangle corner a corner region is adjacent to.
pub fn corner_point(rect: &Shape, region: Region) -> Vec2f {
    debug_assert!(region.is_corner());
    let mut point = rect.corner();
    let size = rect.diagonal();
    if region.x > 0 {
        point.x += size.x;
    }
    if region.y > 0 {
        point.y += size.y;
    }
    point
}

/// Relative placement of two extents projected on one axis, used when
/// resolving rectangle-against-rectangle movement.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Axis_Relation {
    Centered,
    Inside,
    Border,
    Outside,
}

/// Classifies the placement and reports the side the first extent sits on
/// (sign of center_a - center_b, 0 when centered).
pub fn classify_axis(
    center_a: f32,
    extent_a: f32,
    center_b: f32,
    extent_b: f32,
) -> (Axis_Relation, f32) {
    let dist = center_a - center_b;
    let reach = 0.5 * (extent_a + extent_b);
    let sign = if dist > 0. {
        1.
    } else if dist < 0. {
        -1.
    } else {
        0.
    };
    let relation = if approx_eq(dist, 0.) {
        Axis_Relation::Centered
    } else if approx_eq(dist.abs(), reach) {
        Axis_Relation::Border
    } else if dist.abs() < reach {
        Axis_Relation::Inside
    } else {
        Axis_Relation::Outside
    };
    (relation, sign)
}
