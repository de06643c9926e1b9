//! An animated arc-shaped progress widget for iced.
//!
//! The widget draws a background range track spanning a configurable
//! angular sweep, a progress arc covering `progress * range` degrees, and
//! rounded end-cap dots on both. Progress changes can be animated with a
//! pluggable easing curve on a fixed 16 ms tick.
//!
//! See `src/main.rs` for a demo application exercising every knob.

pub mod animator;
pub mod arc_progress;
pub mod easing;
pub mod geometry;
pub mod render;

pub use animator::{ProgressAnimator, TICK_INTERVAL_MS};
pub use arc_progress::{ArcProgress, ArcProgressConfig};
pub use easing::{Easing, Interpolator};
