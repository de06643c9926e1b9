//! Demo application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

pub use message::Message;
pub use state::App;

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        tracing::info!("starting arc progress demo");
        (Self::default(), Task::none())
    }

    pub fn title(&self) -> String {
        "Arc Progress".to_string()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Animation ticks, active only while a transition is in flight.
    ///
    /// This is the widget's tick-scheduling contract: the subscription is
    /// (re)created while `is_animating()` holds and dropped the moment the
    /// animator settles, so a superseded transition can never tick again.
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::time::Duration;

        if self.widget.is_animating() {
            iced::time::every(Duration::from_millis(arc_progress::TICK_INTERVAL_MS))
                .map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        }
    }
}
