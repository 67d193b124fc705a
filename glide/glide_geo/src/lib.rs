#![warn(clippy::all)]
#![allow(clippy::new_without_default)]
#![allow(clippy::too_many_arguments)]
#![allow(non_camel_case_types)]
#![cfg_attr(debug_assertions, allow(dead_code))]

#[macro_use]
extern crate glide_diagnostics;

#[macro_use]
extern crate glide_math;

#[cfg(test)]
#[macro_use]
extern crate glide_test;

pub mod contact;
pub mod mov;
pub mod region;
pub mod shape;
pub mod tth;

pub use contact::contact;
pub use mov::move_against;
pub use shape::Shape;
pub use tth::{time_to_hit, NO_HIT};

use glide_math::vector::Vec2f;

impl Shape {
    /// See [`contact`].
    pub fn contact(&self, other: &Shape) -> bool {
        contact(self, other)
    }

    /// See [`time_to_hit`].
    pub fn time_to_hit(&self, other: &Shape, speed: Vec2f) -> f32 {
        time_to_hit(self, other, speed)
    }

    /// See [`move_against`].
    pub fn move_against(&self, other: &Shape, speed: Vec2f) -> Vec2f {
        move_against(self, other, speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_math::math::clamp;
    use glide_math::vector::Vec2f;

    fn shape_pool() -> Vec<Shape> {
        vec![
            Shape::point(v2!(0., 0.)),
            Shape::point(v2!(3., 1.)),
            Shape::circle(v2!(0., 0.), 1.),
            Shape::circle(v2!(4., 0.), 1.5),
            Shape::circle(v2!(-2., -2.), 0.5),
            Shape::rect(v2!(1., 1.), v2!(2., 2.)),
            Shape::rect(v2!(-4., 0.), v2!(2., 1.)),
            Shape::rect(v2!(3., 3.), v2!(1., 4.)),
        ]
    }

    fn speed_pool() -> Vec<Vec2f> {
        vec![
            v2!(0., 0.),
            v2!(1., 0.),
            v2!(0., -1.),
            v2!(1., 1.),
            v2!(-0.5, 0.25),
            v2!(3., -2.),
        ]
    }

    // Signed overlap amount, > 0 only when the shapes strictly interpenetrate.
    fn penetration_depth(a: &Shape, b: &Shape) -> f32 {
        fn round_vs_rect(round: &Shape, rect: &Shape) -> f32 {
            let offset = round.center() - rect.corner();
            let size = rect.diagonal();
            let closest = v2!(clamp(offset.x, 0., size.x), clamp(offset.y, 0., size.y));
            round.radius() - (closest - offset).magnitude()
        }

        let a_round = matches!(a, Shape::Point { .. } | Shape::Circle { .. });
        let b_round = matches!(b, Shape::Point { .. } | Shape::Circle { .. });
        match (a_round, b_round) {
            (true, true) => a.radius() + b.radius() - a.center().distance(b.center()),
            (true, false) => round_vs_rect(a, b),
            (false, true) => round_vs_rect(b, a),
            (false, false) => {
                let dist = a.center() - b.center();
                let reach = (a.diagonal() + b.diagonal()) * 0.5;
                (reach.x - dist.x.abs()).min(reach.y - dist.y.abs())
            }
        }
    }

    #[test]
    fn contact_is_symmetric() {
        for a in &shape_pool() {
            for b in &shape_pool() {
                assert_eq!(contact(a, b), contact(b, a), "{:?} / {:?}", a, b);
            }
        }
    }

    #[test]
    fn tth_is_reciprocal() {
        for a in &shape_pool() {
            for b in &shape_pool() {
                for speed in &speed_pool() {
                    let forward = time_to_hit(a, b, *speed);
                    let backward = time_to_hit(b, a, -*speed);
                    assert!(
                        (forward - backward).abs() < 1e-3,
                        "{:?} / {:?} at {:?}: {} vs {}",
                        a,
                        b,
                        speed,
                        forward,
                        backward
                    );
                }
            }
        }
    }

    #[test]
    fn contact_implies_zero_tth() {
        for a in &shape_pool() {
            for b in &shape_pool() {
                if !contact(a, b) {
                    continue;
                }
                for speed in &speed_pool() {
                    assert_eq!(time_to_hit(a, b, *speed), 0., "{:?} / {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn no_motion_hits_now_or_never() {
        for a in &shape_pool() {
            for b in &shape_pool() {
                let expected = if contact(a, b) { 0. } else { NO_HIT };
                assert_eq!(
                    time_to_hit(a, b, v2!(0., 0.)),
                    expected,
                    "{:?} / {:?}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn late_or_missing_hits_leave_the_speed_alone() {
        for a in &shape_pool() {
            for b in &shape_pool() {
                for speed in &speed_pool() {
                    let t = time_to_hit(a, b, *speed);
                    if t < 0. || t >= 1. {
                        assert_eq!(move_against(a, b, *speed), *speed, "{:?} / {:?}", a, b);
                    }
                }
            }
        }
    }

    #[test]
    fn move_against_is_reciprocal() {
        for a in &shape_pool() {
            for b in &shape_pool() {
                for speed in &speed_pool() {
                    let forward = move_against(a, b, *speed);
                    let backward = -move_against(b, a, -*speed);
                    assert!(
                        (forward - backward).magnitude() < 1e-3,
                        "{:?} / {:?} at {:?}: {:?} vs {:?}",
                        a,
                        b,
                        speed,
                        forward,
                        backward
                    );
                }
            }
        }
    }

    #[test]
    fn resolved_motion_does_not_deepen_contact() {
        for a in &shape_pool() {
            for b in &shape_pool() {
                if a == b {
                    continue;
                }
                for speed in &speed_pool() {
                    let constrained = move_against(a, b, *speed);
                    let mut moved = *a;
                    moved.translate(constrained);
                    let before = penetration_depth(a, b);
                    let after = penetration_depth(&moved, b);
                    assert!(
                        after <= before.max(0.) + 1e-3,
                        "{:?} / {:?} at {:?}: depth {} -> {}",
                        a,
                        b,
                        speed,
                        before,
                        after
                    );
                }
            }
        }
    }
}
