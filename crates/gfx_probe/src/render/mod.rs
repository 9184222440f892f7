//! Rendering-adjacent glue: camera math, windowing, and Vulkan bring-up
//!
//! Nothing in here draws. The modules cover exactly what the diagnostic
//! probes exercise:
//!
//! - [`camera`]: view/projection matrix generation
//! - [`window`]: GLFW window and display-connection layer
//! - [`vulkan`]: instance, surface, and physical-device glue over ash

pub mod camera;
pub mod vulkan;
pub mod window;

pub use camera::Camera;
pub use window::Window;
