//! Arc progress demo - exercises every knob of the arc progress widget
//!
//! Shows the widget next to a control panel with angle/width sliders, an
//! animation toggle, a duration slider and an easing picker.

mod app;
mod theme;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .antialiasing(true)
        .run()
}
