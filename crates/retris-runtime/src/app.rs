use crossterm::event::Event;
use ratatui::Frame;

use crate::Runtime;

/// Trait for applications driven by [`Runtime::run`].
pub trait App {
    /// Initializes the application.
    ///
    /// Called once at the start of `Runtime::run()`. Use this to configure the frame rate.
    fn init(&mut self, runtime: &mut Runtime);

    /// Returns whether the application should exit.
    fn should_exit(&self) -> bool;

    /// Handles a terminal event (key input, resize, etc.).
    ///
    /// At most one event is delivered per frame, before [`Self::update`].
    fn handle_event(&mut self, runtime: &mut Runtime, event: Event);

    /// Advances application state by one frame.
    fn update(&mut self, runtime: &mut Runtime);

    /// Draws the screen. Called once per frame after [`Self::update`].
    fn draw(&self, frame: &mut Frame);
}
