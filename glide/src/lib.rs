#![warn(clippy::all)]
#![allow(clippy::new_without_default)]
#![allow(clippy::too_many_arguments)]
#![allow(non_camel_case_types)]
#![cfg_attr(debug_assertions, allow(dead_code))]

pub use glide_diagnostics as diagnostics;
pub use glide_geo as geo;
pub use glide_math as math;

pub use glide_geo::{contact, move_against, time_to_hit, Shape, NO_HIT};
pub use glide_math::interval::Interval;
pub use glide_math::vector::Vec2f;
