//! Demo application state

use arc_progress::{ArcProgress, ArcProgressConfig, Easing};

/// Demo state: the widget under test plus the control panel's own values
pub struct App {
    /// The widget being exercised
    pub widget: ArcProgress,
    /// Accumulated target driven by the +10% button. Deliberately left
    /// unclamped here; the widget clamps on write.
    pub target: f32,
    /// Easing curve currently selected in the pick list
    pub easing: Easing,
}

impl Default for App {
    fn default() -> Self {
        let widget = ArcProgress::new(ArcProgressConfig {
            progress: 0.0,
            animation_enabled: true,
            animation_duration_ms: 500,
            ..Default::default()
        });

        Self {
            widget,
            target: 0.0,
            easing: Easing::default(),
        }
    }
}
