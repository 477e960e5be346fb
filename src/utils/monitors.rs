//! Monitor geometry for pinning the overlay to a screen corner.
//!
//! egui reports the size of the monitor hosting the viewport through
//! `ViewportInfo::monitor_size`; this module turns that size plus the overlay
//! size into the outer position of the window.

use thiserror::Error;

use crate::models::settings::ScreenCorner;

/// A rectangle representing a monitor's area in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonitorRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl MonitorRect {
    /// Monitor anchored at the origin, which is how egui reports the
    /// current monitor.
    pub fn from_size(width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    /// Returns true if `other` lies completely inside this rectangle.
    #[cfg(test)]
    fn contains(&self, other: &MonitorRect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x + other.width <= self.x + self.width
            && other.y + other.height <= self.y + self.height
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WindowSetupError {
    #[error("monitor size is not available")]
    MonitorUnavailable,
    #[error("overlay of {window_width}x{window_height} does not fit on a {monitor_width}x{monitor_height} monitor")]
    WindowTooLarge {
        window_width: f32,
        window_height: f32,
        monitor_width: f32,
        monitor_height: f32,
    },
}

/// Outer position `(x, y)` placing a `width` x `height` window in `corner`
/// of `monitor`, `margin` points away from both edges.
///
/// The margin is dropped rather than pushing the window off screen when the
/// monitor is too small to honour it.
pub fn corner_position(
    monitor: Option<MonitorRect>,
    width: f32,
    height: f32,
    corner: ScreenCorner,
    margin: f32,
) -> Result<(f32, f32), WindowSetupError> {
    let monitor = monitor
        .filter(|m| m.width > 0.0 && m.height > 0.0)
        .ok_or(WindowSetupError::MonitorUnavailable)?;

    if width > monitor.width || height > monitor.height {
        return Err(WindowSetupError::WindowTooLarge {
            window_width: width,
            window_height: height,
            monitor_width: monitor.width,
            monitor_height: monitor.height,
        });
    }

    let margin_x = margin.min((monitor.width - width) / 2.0).max(0.0);
    let margin_y = margin.min((monitor.height - height) / 2.0).max(0.0);

    let left = monitor.x + margin_x;
    let right = monitor.x + monitor.width - width - margin_x;
    let top = monitor.y + margin_y;
    let bottom = monitor.y + monitor.height - height - margin_y;

    Ok(match corner {
        ScreenCorner::TopLeft => (left, top),
        ScreenCorner::TopRight => (right, top),
        ScreenCorner::BottomLeft => (left, bottom),
        ScreenCorner::BottomRight => (right, bottom),
    })
}
