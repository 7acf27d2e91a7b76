use crate::model::ChartError;
use minifb::{Key, Window, WindowOptions};

/// Shows rendered RGB pixels in a window and blocks until the user
/// closes it (or presses Escape).
pub fn present(title: &str, rgb: &[u8], width: usize, height: usize) -> Result<(), ChartError> {
    let pixels: Vec<u32> = rgb
        .chunks_exact(3)
        .map(|p| (u32::from(p[0]) << 16) | (u32::from(p[1]) << 8) | u32::from(p[2]))
        .collect();

    let mut window = Window::new(title, width, height, WindowOptions::default())?;
    window.set_target_fps(30);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        window.update_with_buffer(&pixels, width, height)?;
    }

    Ok(())
}
