//! Vulkan instance management
//!
//! Builds the instance from a plain description of what the application
//! wants: identifiers, capability layers, and surface extensions. The
//! driver rejects anything it cannot provide; there is no probing or
//! fallback here.

use ash::{vk, Entry, Instance};
use std::ffi::CString;
use thiserror::Error;

/// Name of the Khronos validation layer
pub const VALIDATION_LAYER: &str = "VK_LAYER_KHRONOS_validation";

/// Vulkan-specific error types
#[derive(Error, Debug)]
pub enum VulkanError {
    /// General Vulkan API error with result code
    #[error("Vulkan API error: {0:?}")]
    Api(vk::Result),

    /// Vulkan setup failed before or outside an API call
    #[error("Initialization failed: {0}")]
    InitializationFailed(String),
}

/// Result type for Vulkan operations
pub type VulkanResult<T> = Result<T, VulkanError>;

/// Description of the instance an application wants to create
///
/// Corresponds to `VkApplicationInfo` plus the layer and extension lists
/// of `VkInstanceCreateInfo`, held as owned strings until creation time.
#[derive(Debug, Clone)]
pub struct InstanceDescriptor {
    /// Application name reported to the driver
    pub application_name: String,
    /// Engine name reported to the driver
    pub engine_name: String,
    /// Requested capability layer names
    pub layers: Vec<String>,
    /// Requested instance extension names
    pub extensions: Vec<String>,
    /// Requested Vulkan API version
    pub api_version: u32,
}

impl InstanceDescriptor {
    /// Create a descriptor with empty layer and extension lists
    pub fn new(application_name: &str, engine_name: &str) -> Self {
        Self {
            application_name: application_name.to_string(),
            engine_name: engine_name.to_string(),
            layers: Vec::new(),
            extensions: Vec::new(),
            api_version: vk::API_VERSION_1_0,
        }
    }

    /// Request additional instance extensions
    #[must_use]
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions.extend(extensions);
        self
    }

    /// Request the Khronos validation layer
    #[must_use]
    pub fn with_validation(mut self, enabled: bool) -> Self {
        if enabled && !self.layers.iter().any(|l| l == VALIDATION_LAYER) {
            self.layers.push(VALIDATION_LAYER.to_string());
        }
        self
    }
}

/// Vulkan instance wrapper with RAII cleanup
pub struct VulkanInstance {
    /// Vulkan entry point
    pub entry: Entry,
    /// Vulkan instance handle
    pub instance: Instance,
}

impl VulkanInstance {
    /// Load the Vulkan library and create an instance from the descriptor
    ///
    /// Fails with [`VulkanError::Api`] when a requested layer or extension
    /// is unavailable on the host.
    pub fn new(descriptor: &InstanceDescriptor) -> VulkanResult<Self> {
        let entry = unsafe { Entry::load() }.map_err(|e| {
            VulkanError::InitializationFailed(format!("Failed to load Vulkan: {:?}", e))
        })?;

        let app_name = to_cstring(&descriptor.application_name)?;
        let engine_name = to_cstring(&descriptor.engine_name)?;
        let app_info = vk::ApplicationInfo::builder()
            .application_name(&app_name)
            .application_version(vk::make_api_version(0, 1, 0, 0))
            .engine_name(&engine_name)
            .engine_version(vk::make_api_version(0, 1, 0, 0))
            .api_version(descriptor.api_version);

        // The CString vectors must outlive instance creation; the pointer
        // vectors borrow from them.
        let layer_names = descriptor
            .layers
            .iter()
            .map(|name| to_cstring(name))
            .collect::<VulkanResult<Vec<CString>>>()?;
        let layer_name_ptrs: Vec<*const i8> =
            layer_names.iter().map(|name| name.as_ptr()).collect();

        let extension_names = descriptor
            .extensions
            .iter()
            .map(|name| to_cstring(name))
            .collect::<VulkanResult<Vec<CString>>>()?;
        let extension_name_ptrs: Vec<*const i8> =
            extension_names.iter().map(|name| name.as_ptr()).collect();

        log::debug!("Requesting instance layers: {:?}", descriptor.layers);
        log::debug!("Requesting instance extensions: {:?}", descriptor.extensions);

        let create_info = vk::InstanceCreateInfo::builder()
            .application_info(&app_info)
            .enabled_layer_names(&layer_name_ptrs)
            .enabled_extension_names(&extension_name_ptrs);

        let instance = unsafe {
            entry
                .create_instance(&create_info, None)
                .map_err(VulkanError::Api)?
        };

        log::info!("Created Vulkan instance for \"{}\"", descriptor.application_name);

        Ok(Self { entry, instance })
    }
}

impl Drop for VulkanInstance {
    fn drop(&mut self) {
        unsafe {
            self.instance.destroy_instance(None);
        }
    }
}

fn to_cstring(name: &str) -> VulkanResult<CString> {
    CString::new(name).map_err(|_| {
        VulkanError::InitializationFailed(format!("Name contains interior NUL: {:?}", name))
    })
}
