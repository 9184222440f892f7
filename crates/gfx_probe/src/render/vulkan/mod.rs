//! Vulkan bring-up glue over ash
//!
//! Covers the instance, surface, and physical-device layers the smoke
//! probe walks through. Handles are RAII wrappers; drop order in callers
//! must destroy the surface before the instance.

pub mod device;
pub mod instance;
pub mod surface;

pub use device::{query_presentation_support, PhysicalDeviceInfo};
pub use instance::{InstanceDescriptor, VulkanError, VulkanInstance, VulkanResult};
pub use surface::Surface;
