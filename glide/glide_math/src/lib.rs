#![warn(clippy::all)]
#![allow(clippy::new_without_default)]
#![allow(clippy::too_many_arguments)]
#![allow(non_camel_case_types)]
#![cfg_attr(debug_assertions, allow(dead_code))]

#[macro_use]
extern crate glide_diagnostics;

#[cfg(test)]
#[macro_use]
extern crate glide_test;

#[macro_use]
pub mod prelude;

pub mod angle;
pub mod interval;
pub mod math;
pub mod vector;

pub use prelude::*;
