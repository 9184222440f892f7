//! # Graphics Probe
//!
//! Shared support library for two small diagnostic binaries:
//!
//! - `matrix_dump` prints the view and projection matrices produced by the
//!   camera math in [`foundation::math`] and [`render::camera`].
//! - `vulkan_smoke` walks the minimal Vulkan bring-up sequence: instance,
//!   window, surface, physical-device enumeration, and a per-device
//!   presentation-support query.
//!
//! Neither probe renders anything. The library exists so the Vulkan glue,
//! the windowing layer, and the matrix conventions live in one place and
//! can be unit tested without a display or a driver.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod foundation;
pub mod render;
