//! Demo application messages

use arc_progress::Easing;

/// Messages emitted by the demo controls
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Animation frame while a progress transition is running
    AnimationTick,
    /// Start angle slider moved (degrees)
    StartAngleChanged(f32),
    /// Sweep range slider moved (degrees)
    RangeChanged(f32),
    /// Track stroke width slider moved
    RangeWidthChanged(f32),
    /// Progress stroke width slider moved
    ProgressWidthChanged(f32),
    /// Animation toggle flipped
    AnimationToggled(bool),
    /// Animation duration slider moved (milliseconds)
    DurationChanged(f32),
    /// Easing curve selected
    EasingSelected(Easing),
    /// Bump the target progress by 10%
    IncrementProgress,
    /// Reset the target progress to zero
    ClearProgress,
}
