//! Physical device enumeration
//!
//! The smoke probe only needs the device list and each device's identity;
//! queue family selection and logical device creation are out of scope.

use ash::vk;
use std::ffi::CStr;

use crate::render::vulkan::{Surface, VulkanError, VulkanInstance, VulkanResult};

/// A physical rendering device and its cached properties
pub struct PhysicalDeviceInfo {
    /// Vulkan physical device handle
    pub handle: vk::PhysicalDevice,
    /// Device properties and limits
    pub properties: vk::PhysicalDeviceProperties,
}

impl PhysicalDeviceInfo {
    /// Enumerate all physical devices available to the instance
    ///
    /// An empty list is not an error; hosts without a rendering-capable
    /// driver report zero devices.
    pub fn enumerate(instance: &VulkanInstance) -> VulkanResult<Vec<Self>> {
        let devices = unsafe {
            instance
                .instance
                .enumerate_physical_devices()
                .map_err(VulkanError::Api)?
        };

        let infos: Vec<Self> = devices
            .into_iter()
            .map(|handle| {
                let properties =
                    unsafe { instance.instance.get_physical_device_properties(handle) };
                Self { handle, properties }
            })
            .collect();

        log::info!("Enumerated {} physical device(s)", infos.len());

        Ok(infos)
    }

    /// Device name as reported by the driver
    pub fn name(&self) -> String {
        // device_name is a NUL-terminated C string in a fixed-size array
        unsafe {
            CStr::from_ptr(self.properties.device_name.as_ptr())
                .to_string_lossy()
                .into_owned()
        }
    }
}

/// Query presentation support on the given surface for each device
///
/// Queries queue family 0 of every enumerated device, one boolean per
/// device in enumeration order. An empty device slice performs no surface
/// queries at all.
pub fn query_presentation_support(
    devices: &[PhysicalDeviceInfo],
    surface: &Surface,
) -> VulkanResult<Vec<bool>> {
    devices
        .iter()
        .map(|device| surface.supports_present(device.handle, 0))
        .collect()
}
