//! Message handling for the demo

use iced::Task;

use super::{App, Message};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AnimationTick => {
                self.widget.tick();
            }
            Message::StartAngleChanged(degrees) => self.widget.set_start_angle(degrees),
            Message::RangeChanged(degrees) => self.widget.set_range(degrees),
            Message::RangeWidthChanged(width) => self.widget.set_range_path_width(width),
            Message::ProgressWidthChanged(width) => self.widget.set_progress_path_width(width),
            Message::AnimationToggled(enabled) => self.widget.set_animation_enabled(enabled),
            Message::DurationChanged(millis) => {
                self.widget.set_animation_duration(millis.max(0.0) as u64);
            }
            Message::EasingSelected(easing) => {
                self.easing = easing;
                self.widget.set_interpolator(easing);
            }
            Message::IncrementProgress => {
                self.target += 0.1;
                self.widget.set_progress(self.target);
            }
            Message::ClearProgress => {
                self.target = 0.0;
                self.widget.set_progress(0.0);
            }
        }

        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arc_progress::Easing;

    fn settle(app: &mut App) {
        let mut guard = 0;
        while app.widget.is_animating() {
            let _ = app.update(Message::AnimationTick);
            guard += 1;
            assert!(guard < 10_000, "animation never settled");
        }
    }

    #[test]
    fn sliders_write_through_to_the_widget() {
        let mut app = App::default();

        let _ = app.update(Message::StartAngleChanged(90.0));
        let _ = app.update(Message::RangeChanged(180.0));
        let _ = app.update(Message::RangeWidthChanged(8.0));
        let _ = app.update(Message::ProgressWidthChanged(16.0));
        let _ = app.update(Message::DurationChanged(750.0));

        assert_eq!(app.widget.start_angle(), 90.0);
        assert_eq!(app.widget.range(), 180.0);
        assert_eq!(app.widget.range_path_width(), 8.0);
        assert_eq!(app.widget.progress_path_width(), 16.0);
        assert_eq!(app.widget.animation_duration(), 750);
    }

    #[test]
    fn increment_accumulates_and_widget_clamps() {
        let mut app = App::default();

        for _ in 0..15 {
            let _ = app.update(Message::IncrementProgress);
        }
        settle(&mut app);

        // The demo's accumulator runs past 1.0, the widget does not.
        assert!(app.target > 1.0);
        assert_eq!(app.widget.progress(), 1.0);
    }

    #[test]
    fn clear_resets_target_and_progress() {
        let mut app = App::default();

        let _ = app.update(Message::IncrementProgress);
        settle(&mut app);
        let _ = app.update(Message::ClearProgress);
        settle(&mut app);

        assert_eq!(app.target, 0.0);
        assert_eq!(app.widget.progress(), 0.0);
    }

    #[test]
    fn easing_selection_updates_state_and_widget() {
        let mut app = App::default();

        let _ = app.update(Message::EasingSelected(Easing::Bounce));
        assert_eq!(app.easing, Easing::Bounce);

        // The swapped curve shapes the next transition
        let _ = app.update(Message::IncrementProgress);
        settle(&mut app);
        assert!((app.widget.progress() - 0.1).abs() < 1e-2);
    }
}
