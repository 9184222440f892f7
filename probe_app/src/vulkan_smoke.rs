//! Vulkan smoke-test probe
//!
//! Walks the minimal bring-up sequence: window, instance, surface,
//! physical-device enumeration, and a presentation-support query per
//! device. Exits 1 with a one-line diagnostic on the first failure, 0
//! otherwise. All handles are released through RAII on every exit path.

use gfx_probe::config::{Config, SmokeConfig};
use gfx_probe::render::vulkan::{
    query_presentation_support, InstanceDescriptor, PhysicalDeviceInfo, Surface, VulkanInstance,
};
use gfx_probe::render::Window;

const CONFIG_PATH: &str = "vulkan_smoke.toml";

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = SmokeConfig::load_or_default(CONFIG_PATH)?;

    log::info!("Opening display connection and window...");
    let window = Window::new(
        &config.window.title,
        config.window.width,
        config.window.height,
    )?;

    let descriptor = InstanceDescriptor::new("vulkan_smoke", "gfx_probe")
        .with_extensions(window.get_required_instance_extensions()?)
        .with_validation(config.validation);

    // Declaration order matters: surface must drop before instance.
    let instance = VulkanInstance::new(&descriptor)?;
    let surface = Surface::new(&instance, &window)?;

    let devices = PhysicalDeviceInfo::enumerate(&instance)?;
    if devices.is_empty() {
        log::warn!("No physical devices found; skipping presentation-support query");
        return Ok(());
    }

    let support = query_presentation_support(&devices, &surface)?;
    for (device, supported) in devices.iter().zip(&support) {
        log::info!("{}: presentation support = {}", device.name(), supported);
    }

    Ok(())
}

fn main() {
    gfx_probe::foundation::logging::init_with_level(log::LevelFilter::Info);

    if let Err(e) = run() {
        eprintln!("vulkan_smoke: {}", e);
        std::process::exit(1);
    }

    log::info!("Smoke test passed");
}
