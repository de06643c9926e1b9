//! Pure draw-plan computation for the arc widget.
//!
//! Everything the canvas draws for one frame — the range track, the
//! progress arc and their end caps — is computed here as plain data, so the
//! visual output can be asserted on without a renderer. The canvas program
//! in [`crate::arc_progress`] just strokes and fills the plan.

use iced::{Color, Point, Size, color};

use crate::geometry::{self, DrawingArea};

pub const DEFAULT_RANGE: f32 = 270.0;
pub const DEFAULT_START_ANGLE: f32 = 135.0;
pub const DEFAULT_RANGE_PATH_WIDTH: f32 = 4.0;
pub const DEFAULT_PROGRESS_PATH_WIDTH: f32 = 20.0;
pub const DEFAULT_RANGE_PATH_COLOR: Color = color!(0xbbbbbb);
pub const DEFAULT_PROGRESS_PATH_COLOR: Color = color!(0xff0000);

/// Visual styling for the arc widget.
///
/// Angles are degrees: 0° points along +x from the center and positive
/// angles sweep clockwise (y-down screen coordinates). Out-of-range angles
/// are accepted as-is; the caller owns their visual result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcStyle {
    /// Angular origin of the track
    pub start_angle: f32,
    /// Total angular extent of the track representing 100%
    pub range: f32,
    pub range_path_color: Color,
    pub range_path_width: f32,
    pub progress_path_color: Color,
    pub progress_path_width: f32,
}

impl Default for ArcStyle {
    fn default() -> Self {
        Self {
            start_angle: DEFAULT_START_ANGLE,
            range: DEFAULT_RANGE,
            range_path_color: DEFAULT_RANGE_PATH_COLOR,
            range_path_width: DEFAULT_RANGE_PATH_WIDTH,
            progress_path_color: DEFAULT_PROGRESS_PATH_COLOR,
            progress_path_width: DEFAULT_PROGRESS_PATH_WIDTH,
        }
    }
}

/// One stroked arc
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpan {
    pub center: Point,
    pub radius: f32,
    /// Start angle in degrees
    pub start_angle: f32,
    /// Sweep in degrees, always drawn in the positive direction
    pub sweep: f32,
    pub width: f32,
    pub color: Color,
}

/// One filled end-cap dot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapDot {
    pub center: Point,
    pub radius: f32,
    pub color: Color,
}

/// Draw commands for one frame, in paint order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawPlan {
    pub area: DrawingArea,
    pub track: ArcSpan,
    pub track_caps: [CapDot; 2],
    pub fill: ArcSpan,
    pub fill_caps: [CapDot; 2],
}

impl DrawPlan {
    /// True when the surface is too small to draw anything meaningful
    pub fn is_degenerate(&self) -> bool {
        self.area.radius <= 0.0
    }
}

fn cap_at(center: Point, radius: f32, angle_deg: f32, stroke_width: f32, color: Color) -> CapDot {
    let angle = angle_deg.to_radians();
    CapDot {
        center: Point::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        ),
        radius: stroke_width / 2.0,
        color,
    }
}

/// Compute the draw plan for a surface of `size`.
///
/// Pure function of its inputs: geometry is recomputed from the current
/// size on every call, and equal inputs produce an equal plan.
pub fn plan(size: Size, style: &ArcStyle, progress: f32) -> DrawPlan {
    let progress = progress.clamp(0.0, 1.0);
    let max_width = style.range_path_width.max(style.progress_path_width);
    let area = geometry::drawing_area(size, max_width);
    let center = Point::new(size.width / 2.0, size.height / 2.0);
    let fill_sweep = progress * style.range;

    DrawPlan {
        area,
        track: ArcSpan {
            center,
            radius: area.radius,
            start_angle: style.start_angle,
            sweep: style.range,
            width: style.range_path_width,
            color: style.range_path_color,
        },
        track_caps: [
            cap_at(
                center,
                area.radius,
                style.start_angle,
                style.range_path_width,
                style.range_path_color,
            ),
            cap_at(
                center,
                area.radius,
                style.start_angle + style.range,
                style.range_path_width,
                style.range_path_color,
            ),
        ],
        fill: ArcSpan {
            center,
            radius: area.radius,
            start_angle: style.start_angle,
            sweep: fill_sweep,
            width: style.progress_path_width,
            color: style.progress_path_color,
        },
        fill_caps: [
            cap_at(
                center,
                area.radius,
                style.start_angle,
                style.progress_path_width,
                style.progress_path_color,
            ),
            cap_at(
                center,
                area.radius,
                style.start_angle + fill_sweep,
                style.progress_path_width,
                style.progress_path_color,
            ),
        ],
    }
}
