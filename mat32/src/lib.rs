//! Single-precision (`f32`) math.
//!
//! This library provides `f32` versions of the usual elementary, transcendental and rounding
//! functions, as free functions, plus a few helpers that a standard library does not have
//! ([`lerp()`], [`clamp()`], [`min_pos()`], [`int_multiple()`], [`truncate()`], and so on).
//! It also defines [`Dims`], the labels of the four axes of a homogeneous coordinate.
//!
//! No function here reports errors. Inputs outside a function’s domain produce NaN or an
//! infinity, following the special cases documented on each function, so that bulk numeric code
//! need not check each call; use [`is_nan()`] and [`is_inf()`] where it matters.
//!
//! All computation is done by [`libm`], not the platform’s C library, so results are the same on
//! every target. A few functions compute in `f64` internally and round the result to `f32` once;
//! which ones is an implementation detail.

#![no_std]
// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![cfg_attr(
    not(any(test, feature = "arbitrary")),
    warn(clippy::std_instead_of_core, clippy::std_instead_of_alloc)
)]
#![warn(clippy::missing_inline_in_public_items)]

#[cfg(any(feature = "std", test))]
#[cfg_attr(test, macro_use)]
extern crate std;
#[macro_use]
extern crate alloc;

mod consts;
pub use consts::*;
mod dims;
pub use dims::*;
mod enums;
pub use enums::*;
mod exp_log;
pub use exp_log::*;
mod helpers;
pub use helpers::*;
mod rounding;
pub use rounding::*;
#[cfg(feature = "serde")]
mod serde_impls;
mod special;
pub use special::*;
mod trig;
pub use trig::*;
