use crate::contact::{contact_rect_rect, contact_round_rect, contact_round_round};
use crate::region;
use crate::shape::Shape;
use glide_math::interval::Interval;
use glide_math::math::approx_eq;
use glide_math::vector::{sanity_check_v, Vec2f};

/// Sentinel for "never hits within any finite future time".
pub const NO_HIT: f32 = -1.;

/// A straight sweep visits each of the 8 regions surrounding a rectangle at
/// most once. Needing more transitions means the input was malformed
/// (e.g. a non-finite speed), so the walk gives up instead of oscillating.
pub const MAX_REGION_STEPS: u32 = 8;

type Tth_Cb = fn(&Shape, &Shape, Vec2f) -> f32;

const TTH_CB_TABLE: [[Tth_Cb; 3]; 3] = [
    [tth_round_round, tth_round_round, tth_round_rect],
    [tth_round_round, tth_round_round, tth_round_rect],
    [tth_rect_round, tth_rect_round, tth_rect_rect],
];

/// Fraction of the unit time step at which `a`, moving at `speed` relative to
/// `b`, first touches `b`. Returns 0 if the shapes are already in contact,
/// NO_HIT if they never touch, and may return values past 1 when the hit
/// falls beyond the current step.
pub fn time_to_hit(a: &Shape, b: &Shape, speed: Vec2f) -> f32 {
    sanity_check_v(speed);
    TTH_CB_TABLE[a.kind_index()][b.kind_index()](a, b, speed)
}

// Mirror of the round/rect solver: swap the frame of reference.
fn tth_rect_round(rect: &Shape, round: &Shape, speed: Vec2f) -> f32 {
    tth_round_rect(round, rect, -speed)
}

#[inline]
fn snap_zero(t: f32) -> f32 {
    if approx_eq(t, 0.) {
        0.
    } else {
        t
    }
}

/// Time for a coordinate moving at `speed` to reach `to`: 0 when already
/// there with no speed, NO_HIT when unreachable.
pub(crate) fn axis_hit_time(from: f32, to: f32, speed: f32) -> f32 {
    if !approx_eq(speed, 0.) {
        (to - from) / speed
    } else if approx_eq(from, to) {
        0.
    } else {
        NO_HIT
    }
}

/// First contact time of two circles (or points: radius 0) under relative
/// speed, via the quadratic |gap + speed*t|^2 = (r_a + r_b)^2.
pub(crate) fn tth_round_round(a: &Shape, b: &Shape, speed: Vec2f) -> f32 {
    if contact_round_round(a, b) {
        return 0.;
    }
    if speed.is_near_zero() {
        return NO_HIT;
    }

    let gap = a.center() - b.center();
    let reach = a.radius() + b.radius();

    // Coefficients written through the decomposition of the gap along the
    // speed: 2 * gap.speed = 2 * |gap|cos(angle) * |speed|
    let along = gap.tangent_scalar(speed);
    let ac = speed.magnitude2();
    let bc = 2. * along * speed.magnitude();
    let cc = gap.magnitude2() - reach * reach;

    let disc = bc * bc - 4. * ac * cc;
    if disc < 0. {
        return NO_HIT;
    }

    // Smaller root = first touch; a negative one means the approach already
    // happened in the past.
    let sol = (-bc - disc.sqrt()) / (2. * ac);
    if sol < 0. {
        return NO_HIT;
    }
    snap_zero(sol)
}

/// Per-axis escape time out of the current region: an axis escapes only
/// towards its direction of motion (the band edge ahead when within the
/// extent, the adjacent region boundary when out of it). NO_HIT = this axis
/// never leaves its placement.
fn axis_escape_time(pos: f32, lo: f32, hi: f32, placement: i8, speed: f32) -> f32 {
    if approx_eq(speed, 0.) {
        return NO_HIT;
    }
    match placement {
        0 => {
            if speed > 0. {
                (hi - pos) / speed
            } else {
                (lo - pos) / speed
            }
        }
        -1 => {
            if speed > 0. {
                (lo - pos) / speed
            } else {
                NO_HIT
            }
        }
        _ => {
            if speed < 0. {
                (hi - pos) / speed
            } else {
                NO_HIT
            }
        }
    }
}

// An axis that never escapes cannot bound the region change; otherwise the
// region is left as soon as either axis crosses.
#[inline]
fn combine_escape_times(a: f32, b: f32) -> f32 {
    if a < 0. || b < 0. {
        a.max(b)
    } else {
        a.min(b)
    }
}

#[inline]
fn step_towards(placement: i8, speed: f32) -> i8 {
    if speed > 0. && placement < 1 {
        placement + 1
    } else if speed < 0. && placement > -1 {
        placement - 1
    } else {
        placement
    }
}

/// First contact time of a circle (or point) against a rectangle: walks the
/// rectangle's surrounding regions along the motion, in each region racing
/// the hit against the nearest feature (corner point or side slab) with the
/// escape into the next region.
pub(crate) fn tth_round_rect(round: &Shape, rect: &Shape, speed: Vec2f) -> f32 {
    if contact_round_rect(round, rect) {
        return 0.;
    }

    let corner = rect.corner();
    let size = rect.diagonal();
    let radius = round.radius();
    let mut center = round.center();
    let mut reg = region::classify(center, rect);
    let mut elapsed = 0.;

    for _ in 0..MAX_REGION_STEPS {
        let hit = if reg.is_corner() {
            let pin = Shape::point(region::corner_point(rect, reg));
            tth_round_round(&Shape::circle(center, radius), &pin, speed)
        } else if reg.is_side() {
            if reg.x != 0 {
                let (from, to) = if reg.x > 0 {
                    (center.x - radius, corner.x + size.x)
                } else {
                    (center.x + radius, corner.x)
                };
                axis_hit_time(from, to, speed.x)
            } else {
                let (from, to) = if reg.y > 0 {
                    (center.y - radius, corner.y + size.y)
                } else {
                    (center.y + radius, corner.y)
                };
                axis_hit_time(from, to, speed.y)
            }
        } else {
            // Center within both extents and no contact cannot happen; settle
            // for "touching now" instead of walking blind.
            return snap_zero(elapsed);
        };

        let esc_x = axis_escape_time(center.x, corner.x, corner.x + size.x, reg.x, speed.x);
        let esc_y = axis_escape_time(center.y, corner.y, corner.y + size.y, reg.y, speed.y);
        let escape = combine_escape_times(esc_x, esc_y);

        if hit < 0. && escape < 0. {
            return NO_HIT;
        }
        if hit >= 0. && (escape < 0. || hit <= escape) {
            return snap_zero(elapsed + hit);
        }

        // Escaped before hitting: advance to the region boundary and step the
        // crossing axes towards the motion.
        elapsed += escape;
        center += speed * escape;
        if esc_x >= 0. && approx_eq(esc_x, escape) {
            reg.x = step_towards(reg.x, speed.x);
        }
        if esc_y >= 0. && approx_eq(esc_y, escape) {
            reg.y = step_towards(reg.y, speed.y);
        }
    }

    lwarn!(
        "Region walk did not settle within {} transitions (non-finite input?)",
        MAX_REGION_STEPS
    );
    NO_HIT
}

/// First contact time of two rectangles: per axis, the time window during
/// which the extents overlap (slab sweep), intersected across axes.
pub(crate) fn tth_rect_rect(a: &Shape, b: &Shape, speed: Vec2f) -> f32 {
    if contact_rect_rect(a, b) {
        return 0.;
    }

    let a_corner = a.corner();
    let a_size = a.diagonal();
    let b_corner = b.corner();
    let b_size = b.diagonal();

    let mut windows = [Interval::FULL; 2];
    for axis in 0..2 {
        let fixed = Interval::new(b_corner[axis], b_corner[axis] + b_size[axis]);
        let moving = Interval::new(a_corner[axis], a_corner[axis] + a_size[axis]);
        windows[axis] = fixed.hit_times_of_interval(moving, speed[axis]);
    }

    let window = windows[0].intersection(windows[1]);
    if !window.is_valid() {
        return NO_HIT;
    }
    if window.contains(0.) {
        // Overlapping right now; the contact pre-check normally catches this
        return 0.;
    }

    let first = snap_zero(window.min);
    if first < 0. {
        // The overlap window is entirely in the past
        return NO_HIT;
    }
    first.min(1.)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::contact;

    #[test]
    fn circle_circle_head_on() {
        // Closing gap of 3 between the surfaces at speed 1
        let a = Shape::circle(v2!(0., 0.), 1.);
        let b = Shape::circle(v2!(5., 0.), 1.);
        assert_approx_eq!(time_to_hit(&a, &b, v2!(1., 0.)), 3., eps = 1e-4);
        // Too slow to make the step is still a valid (>1) answer
        assert_approx_eq!(time_to_hit(&a, &b, v2!(0.5, 0.)), 6., eps = 1e-4);
    }

    #[test]
    fn circle_circle_misses() {
        let a = Shape::circle(v2!(-5., 3.), 1.);
        let b = Shape::circle(v2!(0., 0.), 1.);
        // Tangential pass with no radial approach
        assert_eq!(time_to_hit(&a, &b, v2!(1., 0.)), NO_HIT);
        // Moving away
        let a = Shape::circle(v2!(-5., 0.), 1.);
        assert_eq!(time_to_hit(&a, &b, v2!(-1., 0.)), NO_HIT);
    }

    #[test]
    fn overlapping_is_zero_for_any_speed() {
        let a = Shape::circle(v2!(0., 0.), 1.);
        let b = Shape::circle(v2!(1., 0.), 1.);
        assert!(contact(&a, &b));
        for speed in &[v2!(0., 0.), v2!(1., 0.), v2!(-3., 2.)] {
            assert_eq!(time_to_hit(&a, &b, *speed), 0.);
        }
    }

    #[test]
    fn no_motion_never_hits() {
        let a = Shape::circle(v2!(0., 0.), 1.);
        let b = Shape::circle(v2!(5., 0.), 1.);
        assert_eq!(time_to_hit(&a, &b, v2!(0., 0.)), NO_HIT);

        let r = Shape::rect(v2!(3., 3.), v2!(1., 1.));
        assert_eq!(time_to_hit(&a, &r, v2!(0., 0.)), NO_HIT);
        assert_eq!(time_to_hit(&r, &a, v2!(0., 0.)), NO_HIT);
        assert_eq!(
            time_to_hit(&r, &Shape::rect(v2!(0., 0.), v2!(1., 1.)), v2!(0., 0.)),
            NO_HIT
        );
    }

    #[test]
    fn point_reaches_rect_edge() {
        let p = Shape::point(v2!(0., 0.));
        let r = Shape::rect(v2!(1., 0.), v2!(1., 1.));
        assert_approx_eq!(time_to_hit(&p, &r, v2!(1., 0.)), 1.);
    }

    #[test]
    fn circle_hits_rect_side() {
        let c = Shape::circle(v2!(-2., 0.5), 0.5);
        let r = Shape::rect(v2!(0., 0.), v2!(1., 1.));
        // Leading edge at -1.5 travels to the face at 0
        assert_approx_eq!(time_to_hit(&c, &r, v2!(1., 0.)), 1.5);

        // Same approach from the far side
        let c = Shape::circle(v2!(4., 0.5), 1.);
        assert_approx_eq!(time_to_hit(&c, &r, v2!(-1., 0.)), 2.);
    }

    #[test]
    fn circle_hits_rect_corner_diagonally() {
        let c = Shape::circle(v2!(-2., -2.), 1.);
        let r = Shape::rect(v2!(0., 0.), v2!(2., 2.));
        // Surface meets the (0, 0) corner along the diagonal:
        // (|gap| - radius) / |speed| = (2*sqrt(2) - 1) / sqrt(2)
        assert_approx_eq!(time_to_hit(&c, &r, v2!(1., 1.)), 1.292_893, eps = 1e-3);
    }

    #[test]
    fn circle_walks_regions_and_misses() {
        // Passes above the rectangle: crosses three regions, never hits
        let c = Shape::circle(v2!(-3., -2.), 0.5);
        let r = Shape::rect(v2!(0., 0.), v2!(2., 2.));
        assert_eq!(time_to_hit(&c, &r, v2!(1., 0.)), NO_HIT);

        // Aims below the corner it would first meet
        let p = Shape::point(v2!(3., 4.));
        assert_eq!(time_to_hit(&p, &r, v2!(0., -1.)), NO_HIT);
    }

    #[test]
    fn point_hits_rect_after_region_change() {
        // Moving diagonally: crosses from the corner region into the side
        // region at t = 2, then meets the left face at t = 3
        let p = Shape::point(v2!(-3., -2.));
        let r = Shape::rect(v2!(0., 0.), v2!(4., 4.));
        assert_approx_eq!(time_to_hit(&p, &r, v2!(1., 1.)), 3., eps = 1e-4);
    }

    #[test]
    fn rect_meets_rect_at_step_boundary() {
        let a = Shape::rect(v2!(0., 0.), v2!(1., 1.));
        let b = Shape::rect(v2!(2., 0.), v2!(1., 1.));
        assert_approx_eq!(time_to_hit(&a, &b, v2!(1., 0.)), 1.);
    }

    #[test]
    fn rect_rect_within_step() {
        let a = Shape::rect(v2!(0., 0.), v2!(1., 1.));
        let b = Shape::rect(v2!(1.5, 0.), v2!(1., 1.));
        assert_approx_eq!(time_to_hit(&a, &b, v2!(1., 0.)), 0.5);
    }

    #[test]
    fn rect_rect_late_hits_report_the_step_boundary() {
        // A hit later than the step is reported at the step boundary for
        // this pair (the window is clamped to the current step)
        let a = Shape::rect(v2!(0., 0.), v2!(1., 1.));
        let b = Shape::rect(v2!(5., 0.), v2!(1., 1.));
        assert_approx_eq!(time_to_hit(&a, &b, v2!(1., 0.)), 1.);
    }

    #[test]
    fn rect_rect_misses() {
        let a = Shape::rect(v2!(0., 0.), v2!(1., 1.));
        // Moving away: the overlap window lies in the past
        let b = Shape::rect(v2!(2., 0.), v2!(1., 1.));
        assert_eq!(time_to_hit(&a, &b, v2!(-1., 0.)), NO_HIT);
        // Sliding past on a different row: windows never intersect
        let b = Shape::rect(v2!(3., 3.), v2!(1., 1.));
        assert_eq!(time_to_hit(&a, &b, v2!(1., 0.)), NO_HIT);
    }

    #[test]
    fn touching_rects_hit_immediately() {
        let a = Shape::rect(v2!(0., 0.), v2!(1., 1.));
        let b = Shape::rect(v2!(1., 0.), v2!(1., 1.));
        assert_eq!(time_to_hit(&a, &b, v2!(1., 0.)), 0.);
        assert_eq!(time_to_hit(&a, &b, v2!(-1., 0.)), 0.);
    }

    #[test]
    fn tth_is_reciprocal() {
        let a = Shape::circle(v2!(0., 0.), 1.);
        let b = Shape::rect(v2!(4., -1.), v2!(2., 2.));
        let speed = v2!(1., 0.25);
        assert_approx_eq!(
            time_to_hit(&a, &b, speed),
            time_to_hit(&b, &a, -speed),
            eps = 1e-4
        );

        let c = Shape::point(v2!(-3., 0.));
        assert_approx_eq!(
            time_to_hit(&c, &a, v2!(1., 0.)),
            time_to_hit(&a, &c, v2!(-1., 0.)),
            eps = 1e-4
        );
    }
}
