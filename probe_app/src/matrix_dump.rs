//! Matrix dump probe
//!
//! Prints the view and projection matrices for a fixed camera setup so the
//! output can be diffed against reference values from other math
//! libraries. The projection is printed with the Vulkan Y-flip applied.

use gfx_probe::foundation::math::{Mat4, Vec3};
use gfx_probe::render::Camera;

/// Print a matrix as a named block, one row per line
fn dump_mat4(name: &str, m: &Mat4) {
    println!("{}: {{", name);
    for row in 0..4 {
        println!(
            "    {:.6} {:.6} {:.6} {:.6}",
            m[(row, 0)],
            m[(row, 1)],
            m[(row, 2)],
            m[(row, 3)]
        );
    }
    println!("}}");
}

fn main() {
    // Fixed camera setup: eye at (2, 2, 2) looking at the origin in a
    // Z-up world, 45-degree FOV at 1200x675.
    let mut camera = Camera::perspective(
        Vec3::new(2.0, 2.0, 2.0),
        45.0,
        1200.0 / 675.0,
        0.1,
        10.0,
    );
    camera.look_at(Vec3::zeros(), Vec3::new(0.0, 0.0, 1.0));

    let view = camera.view_matrix();
    let proj = camera.vulkan_projection_matrix();

    dump_mat4("View", &view);
    dump_mat4("Proj", &proj);
}
