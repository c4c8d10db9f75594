//! Output size tracking.
//!
//! kiss3d sizes its surface and updates its cameras on resize by itself, at
//! the full scale factor of the monitor. [`Viewport`] only records what the
//! scenes see so it can be logged and queried; it does not drive rendering.

use kiss3d::event::WindowEvent;

/// Cap applied to the reported device pixel ratio.
pub const MAX_PIXEL_RATIO: f64 = 2.0;

/// Framebuffer size, aspect ratio and effective pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: u32,
    height: u32,
    pixel_ratio: f64,
}

impl Viewport {
    /// Creates a viewport for a framebuffer of the given size.
    pub fn new(width: u32, height: u32, scale_factor: f64) -> Self {
        let mut viewport = Viewport {
            width: 0,
            height: 0,
            pixel_ratio: 1.0,
        };
        viewport.resize(width, height, scale_factor);
        viewport
    }

    /// Records a new framebuffer size.
    pub fn resize(&mut self, width: u32, height: u32, scale_factor: f64) {
        self.width = width;
        self.height = height;
        self.pixel_ratio = scale_factor.clamp(f64::MIN_POSITIVE, MAX_PIXEL_RATIO);
    }

    /// Handles a window event. Returns `true` if it was a resize.
    pub fn handle_event(&mut self, event: &WindowEvent, scale_factor: f64) -> bool {
        if let WindowEvent::FramebufferSize(w, h) = *event {
            self.resize(w, h, scale_factor);
            log::debug!(
                "viewport resized to {}x{} (aspect {:.3}, pixel ratio {})",
                w,
                h,
                self.aspect(),
                self.pixel_ratio
            );
            true
        } else {
            false
        }
    }

    /// Width over height; a zero height is treated as one pixel.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Framebuffer width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Framebuffer height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Device pixel ratio, capped at [`MAX_PIXEL_RATIO`].
    ///
    /// Informational: kiss3d owns the surface scale and renders at the
    /// uncapped scale factor.
    pub fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }
}
