//! The arc progress widget.
//!
//! [`ArcProgress`] owns the widget state record: visual styling plus the
//! progress animator. It lives in application state, is mutated through
//! setters, and renders through an iced `Canvas`.
//!
//! # Usage
//!
//! ```no_run
//! use arc_progress::{ArcProgress, ArcProgressConfig};
//!
//! let mut widget = ArcProgress::new(ArcProgressConfig {
//!     animation_enabled: true,
//!     ..Default::default()
//! });
//! widget.set_progress(0.8);
//! // while widget.is_animating(): call widget.tick() every 16 ms and
//! // redraw with widget.view()
//! ```

use iced::widget::Canvas;
use iced::widget::canvas::{self, Frame, Geometry, Path, Program, Stroke};
use iced::{Color, Element, Fill, Radians, Rectangle, Renderer, Theme, mouse};

use crate::animator::{DEFAULT_DURATION_MS, ProgressAnimator};
use crate::easing::Interpolator;
use crate::render::{self, ArcSpan, ArcStyle};

/// Construction-time configuration with the documented defaults.
///
/// This is the plain record an attribute/styling collaborator would
/// produce; the widget itself never parses raw configuration formats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcProgressConfig {
    /// Total sweep of the track in degrees (default 270)
    pub range: f32,
    /// Track color (default light gray)
    pub range_path_color: Color,
    /// Track stroke width (default 4)
    pub range_path_width: f32,
    /// Initial progress fraction (default 0.25)
    pub progress: f32,
    /// Progress arc color (default red)
    pub progress_path_color: Color,
    /// Progress arc stroke width (default 20)
    pub progress_path_width: f32,
    /// Angular origin of the track in degrees (default 135)
    pub start_angle: f32,
    /// Whether `set_progress` animates (default false)
    pub animation_enabled: bool,
    /// Transition duration in milliseconds (default 250)
    pub animation_duration_ms: u64,
}

impl Default for ArcProgressConfig {
    fn default() -> Self {
        Self {
            range: render::DEFAULT_RANGE,
            range_path_color: render::DEFAULT_RANGE_PATH_COLOR,
            range_path_width: render::DEFAULT_RANGE_PATH_WIDTH,
            progress: 0.25,
            progress_path_color: render::DEFAULT_PROGRESS_PATH_COLOR,
            progress_path_width: render::DEFAULT_PROGRESS_PATH_WIDTH,
            start_angle: render::DEFAULT_START_ANGLE,
            animation_enabled: false,
            animation_duration_ms: DEFAULT_DURATION_MS,
        }
    }
}

/// Arc-shaped progress indicator with animated transitions.
///
/// All state mutation goes through the setters below; each mutated value is
/// picked up by the next [`ArcProgress::view`] call, so the host only needs
/// to redraw (iced does this on every update) and, while
/// [`ArcProgress::is_animating`] is true, call [`ArcProgress::tick`] at a
/// 16 ms cadence.
pub struct ArcProgress {
    style: ArcStyle,
    animator: ProgressAnimator,
}

impl ArcProgress {
    pub fn new(config: ArcProgressConfig) -> Self {
        let mut animator = ProgressAnimator::new(config.progress);
        animator.set_enabled(config.animation_enabled);
        animator.set_duration_ms(config.animation_duration_ms);

        Self {
            style: ArcStyle {
                start_angle: config.start_angle,
                range: config.range,
                range_path_color: config.range_path_color,
                range_path_width: config.range_path_width.max(0.0),
                progress_path_color: config.progress_path_color,
                progress_path_width: config.progress_path_width.max(0.0),
            },
            animator,
        }
    }

    /// Request a new progress fraction, clamped to [0, 1].
    ///
    /// Animates when animation is enabled, otherwise takes effect
    /// immediately. Calling this mid-transition supersedes the running
    /// transition, restarting from the currently displayed value.
    pub fn set_progress(&mut self, value: f32) {
        self.animator.set_progress(value);
    }

    /// Currently displayed progress fraction in [0, 1]
    pub fn progress(&self) -> f32 {
        self.animator.progress()
    }

    /// Set the total sweep of the track in degrees
    pub fn set_range(&mut self, degrees: f32) {
        self.style.range = degrees;
    }

    pub fn range(&self) -> f32 {
        self.style.range
    }

    /// Set the angular origin of the track in degrees
    pub fn set_start_angle(&mut self, degrees: f32) {
        self.style.start_angle = degrees;
    }

    pub fn start_angle(&self) -> f32 {
        self.style.start_angle
    }

    pub fn set_range_path_color(&mut self, color: Color) {
        self.style.range_path_color = color;
    }

    pub fn range_path_color(&self) -> Color {
        self.style.range_path_color
    }

    pub fn set_progress_path_color(&mut self, color: Color) {
        self.style.progress_path_color = color;
    }

    pub fn progress_path_color(&self) -> Color {
        self.style.progress_path_color
    }

    /// Set the track stroke width; negative values clamp to zero
    pub fn set_range_path_width(&mut self, width: f32) {
        self.style.range_path_width = width.max(0.0);
    }

    pub fn range_path_width(&self) -> f32 {
        self.style.range_path_width
    }

    /// Set the progress arc stroke width; negative values clamp to zero
    pub fn set_progress_path_width(&mut self, width: f32) {
        self.style.progress_path_width = width.max(0.0);
    }

    pub fn progress_path_width(&self) -> f32 {
        self.style.progress_path_width
    }

    pub fn set_animation_enabled(&mut self, enabled: bool) {
        self.animator.set_enabled(enabled);
    }

    pub fn is_animation_enabled(&self) -> bool {
        self.animator.is_enabled()
    }

    pub fn set_animation_duration(&mut self, duration_ms: u64) {
        self.animator.set_duration_ms(duration_ms);
    }

    pub fn animation_duration(&self) -> u64 {
        self.animator.duration_ms()
    }

    /// Swap the easing curve used for transitions
    pub fn set_interpolator(&mut self, easing: impl Interpolator + 'static) {
        self.animator.set_interpolator(easing);
    }

    pub fn interpolator(&self) -> &dyn Interpolator {
        self.animator.interpolator()
    }

    /// Advance one animation frame; returns `true` while more are needed
    pub fn tick(&mut self) -> bool {
        self.animator.tick()
    }

    /// Whether a progress transition is in flight
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Build the canvas element for the current state.
    ///
    /// The element fills its container; geometry is recomputed from the
    /// actual bounds on every draw.
    pub fn view<'a, Message: 'a>(&self) -> Element<'a, Message> {
        Canvas::new(ArcCanvas {
            style: self.style,
            progress: self.animator.progress(),
        })
        .width(Fill)
        .height(Fill)
        .into()
    }
}

impl Default for ArcProgress {
    fn default() -> Self {
        Self::new(ArcProgressConfig::default())
    }
}

/// Snapshot of one frame, handed to the canvas.
#[derive(Debug, Clone, Copy)]
struct ArcCanvas {
    style: ArcStyle,
    progress: f32,
}

fn arc_path(span: &ArcSpan) -> Path {
    Path::new(|builder| {
        builder.arc(canvas::path::Arc {
            center: span.center,
            radius: span.radius,
            start_angle: Radians(span.start_angle.to_radians()),
            end_angle: Radians((span.start_angle + span.sweep).to_radians()),
        });
    })
}

impl<Message> Program<Message> for ArcCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let plan = render::plan(bounds.size(), &self.style, self.progress);

        if plan.is_degenerate() {
            return vec![frame.into_geometry()];
        }

        frame.stroke(
            &arc_path(&plan.track),
            Stroke::default()
                .with_width(plan.track.width)
                .with_color(plan.track.color),
        );
        for cap in &plan.track_caps {
            frame.fill(&Path::circle(cap.center, cap.radius), cap.color);
        }

        if plan.fill.sweep > 0.0 {
            frame.stroke(
                &arc_path(&plan.fill),
                Stroke::default()
                    .with_width(plan.fill.width)
                    .with_color(plan.fill.color),
            );
        }
        for cap in &plan.fill_caps {
            frame.fill(&Path::circle(cap.center, cap.radius), cap.color);
        }

        vec![frame.into_geometry()]
    }
}
