use glide_math::vector::Vec2f;

/// A collision shape, placed in the plane. Rectangles are axis-aligned;
/// a point is the degenerate zero-size shape.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape {
    Point { pos: Vec2f },
    Circle { center: Vec2f, radius: f32 },
    Rect { corner: Vec2f, size: Vec2f },
}

impl Shape {
    pub fn point(pos: Vec2f) -> Self {
        Shape::Point { pos }
    }

    pub fn circle(center: Vec2f, radius: f32) -> Self {
        assert!(radius >= 0., "Circle radius must be non-negative!");
        Shape::Circle { center, radius }
    }

    pub fn rect(corner: Vec2f, size: Vec2f) -> Self {
        assert!(
            size.x >= 0. && size.y >= 0.,
            "Rect size must be non-negative!"
        );
        Shape::Rect { corner, size }
    }

    /// Index used by the pairwise dispatch tables.
    #[inline]
    pub(crate) fn kind_index(&self) -> usize {
        match self {
            Shape::Point { .. } => 0,
            Shape::Circle { .. } => 1,
            Shape::Rect { .. } => 2,
        }
    }

    pub fn center(&self) -> Vec2f {
        match *self {
            Shape::Point { pos } => pos,
            Shape::Circle { center, .. } => center,
            Shape::Rect { corner, size } => corner + size * 0.5,
        }
    }

    /// Top-left corner of the rectangle fully containing the shape.
    pub fn corner(&self) -> Vec2f {
        match *self {
            Shape::Point { pos } => pos,
            Shape::Circle { center, radius } => center - v2!(radius, radius),
            Shape::Rect { corner, .. } => corner,
        }
    }

    pub fn set_center(&mut self, ncenter: Vec2f) {
        match self {
            Shape::Point { pos } => *pos = ncenter,
            Shape::Circle { center, .. } => *center = ncenter,
            Shape::Rect { corner, size } => *corner = ncenter - *size * 0.5,
        }
    }

    pub fn set_corner(&mut self, ncorner: Vec2f) {
        match self {
            Shape::Point { pos } => *pos = ncorner,
            Shape::Circle { center, radius } => *center = ncorner + v2!(*radius, *radius),
            Shape::Rect { corner, .. } => *corner = ncorner,
        }
    }

    /// Radius of the circle fully containing the shape (for rectangles, the
    /// circle through their corners).
    pub fn radius(&self) -> f32 {
        match *self {
            Shape::Point { .. } => 0.,
            Shape::Circle { radius, .. } => radius,
            Shape::Rect { size, .. } => (size * 0.5).magnitude(),
        }
    }

    /// Extent of the rectangle fully containing the shape.
    pub fn diagonal(&self) -> Vec2f {
        match *self {
            Shape::Point { .. } => v2!(0., 0.),
            Shape::Circle { radius, .. } => v2!(2. * radius, 2. * radius),
            Shape::Rect { size, .. } => size,
        }
    }

    /// Resizes so the containing circle gets the given radius.
    /// Does nothing on a point, which has no size.
    pub fn set_radius(&mut self, nradius: f32) {
        match self {
            Shape::Point { .. } => (),
            Shape::Circle { radius, .. } => *radius = nradius,
            Shape::Rect { size, .. } => *size = v2!(2. * nradius, 2. * nradius),
        }
    }

    /// Resizes so the containing rectangle gets the given extent. A circle
    /// keeps being inscribed: its radius becomes half the smaller dimension.
    /// Does nothing on a point.
    pub fn set_diagonal(&mut self, ndiag: Vec2f) {
        match self {
            Shape::Point { .. } => (),
            Shape::Circle { radius, .. } => *radius = 0.5 * ndiag.x.min(ndiag.y),
            Shape::Rect { size, .. } => *size = ndiag,
        }
    }

    pub fn translate(&mut self, offset: Vec2f) {
        match self {
            Shape::Point { pos } => *pos += offset,
            Shape::Circle { center, .. } => *center += offset,
            Shape::Rect { corner, .. } => *corner += offset,
        }
    }

    /// The circle fully containing this shape, as a shape.
    pub fn bounding_circle(&self) -> Shape {
        Shape::circle(self.center(), self.radius())
    }
}
