use crate::region::{self, Axis_Relation, Region};
use crate::shape::Shape;
use crate::tth::{tth_rect_rect, tth_round_rect, tth_round_round};
use glide_math::vector::{sanity_check_v, Vec2f};

type Mov_Cb = fn(&Shape, &Shape, Vec2f) -> Vec2f;

const MOV_CB_TABLE: [[Mov_Cb; 3]; 3] = [
    [mov_round_round, mov_round_round, mov_round_rect],
    [mov_round_round, mov_round_round, mov_round_rect],
    [mov_rect_round, mov_rect_round, mov_rect_rect],
];

/// Largest part of `speed` that `a` can take over one unit step without
/// penetrating `b`. Motion is clamped at the moment of first contact and,
/// once touching, restricted to sliding: the component approaching `b` is
/// cancelled, the rest passes through. Separating motion is never restricted.
pub fn move_against(a: &Shape, b: &Shape, speed: Vec2f) -> Vec2f {
    sanity_check_v(speed);
    MOV_CB_TABLE[a.kind_index()][b.kind_index()](a, b, speed)
}

// Mirror: b's restriction seen from a's frame.
fn mov_rect_round(rect: &Shape, round: &Shape, speed: Vec2f) -> Vec2f {
    -mov_round_rect(round, rect, -speed)
}

pub(crate) fn mov_round_round(a: &Shape, b: &Shape, speed: Vec2f) -> Vec2f {
    let t = tth_round_round(a, b, speed);
    if t < 0. || t >= 1. {
        // No hit within this step
        return speed;
    }

    let gap = b.center() - a.center();
    if gap.is_near_zero() {
        // Coincident centers: no direction to push against
        return speed;
    }

    if t == 0. {
        // Already touching: cancel the approach part, keep the sliding part
        if speed.tangent_scalar(gap) > 0. {
            speed.normal_part(gap)
        } else {
            speed
        }
    } else {
        // Move freely up to the moment of contact
        speed * t
    }
}

// Remainder restriction against a side: cancel the perpendicular component
// when it still points at the rectangle, leave the slide along the face.
fn slide_along_side(mut rem: Vec2f, reg: Region) -> Vec2f {
    if reg.x != 0 {
        if rem.x * f32::from(reg.x) < 0. {
            rem.x = 0.;
        }
    } else if rem.y * f32::from(reg.y) < 0. {
        rem.y = 0.;
    }
    rem
}

pub(crate) fn mov_round_rect(round: &Shape, rect: &Shape, speed: Vec2f) -> Vec2f {
    let t = tth_round_rect(round, rect, speed);
    if t < 0. || t >= 1. {
        return speed;
    }

    // Split into the free run until contact and the leftover to resolve
    // against the touched feature.
    let free = speed * t;
    let rem = speed - free;
    let mut reached = *round;
    reached.translate(free);

    let reg = region::classify(reached.center(), rect);
    let resolved = if reg.is_corner() {
        let pin = Shape::point(region::corner_point(rect, reg));
        mov_round_round(&reached, &pin, rem)
    } else if reg.is_inside() {
        // Degenerate: center on/within the extents. Fall back to the
        // rectangle's containing circle.
        mov_round_round(&reached, &rect.bounding_circle(), rem)
    } else {
        slide_along_side(rem, reg)
    };

    free + resolved
}

pub(crate) fn mov_rect_rect(a: &Shape, b: &Shape, speed: Vec2f) -> Vec2f {
    let t = tth_rect_rect(a, b, speed);
    if t < 0. || t >= 1. {
        return speed;
    }

    let free = speed * t;
    let mut rem = speed - free;
    let mut reached = *a;
    reached.translate(free);

    let (rel_x, sign_x) = region::classify_axis(
        reached.center().x,
        reached.diagonal().x,
        b.center().x,
        b.diagonal().x,
    );
    let (rel_y, sign_y) = region::classify_axis(
        reached.center().y,
        reached.diagonal().y,
        b.center().y,
        b.diagonal().y,
    );
    let drives_x = rem.x * sign_x < 0.;
    let drives_y = rem.y * sign_y < 0.;

    match (rel_x == Axis_Relation::Border, rel_y == Axis_Relation::Border) {
        (true, true) => {
            // Corner touch: a single correction per step. The dominant axis
            // keeps its component (sliding along the other axis' face), the
            // weaker one is dropped; ties go to X.
            if drives_x || drives_y {
                if rem.x.abs() >= rem.y.abs() {
                    rem.y = 0.;
                } else {
                    rem.x = 0.;
                }
            }
        }
        (true, false) => {
            if drives_x && rel_y != Axis_Relation::Outside {
                rem.x = 0.;
            }
        }
        (false, true) => {
            if drives_y && rel_x != Axis_Relation::Outside {
                rem.y = 0.;
            }
        }
        _ => {}
    }

    free + rem
}
