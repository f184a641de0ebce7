use std::{
    io, thread,
    time::{Duration, Instant},
};

use crossterm::event;

use crate::{App, frame_clock::FrameClock};

/// Default frame interval (50 frames per second).
const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(20);

/// Terminal application runtime.
///
/// Runs an [`App`] at a fixed frame rate.
#[derive(Debug)]
pub struct Runtime {
    clock: FrameClock,
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

impl Runtime {
    /// Creates a new Runtime running at 50 frames per second.
    #[must_use]
    pub fn new() -> Self {
        Self {
            clock: FrameClock::new(DEFAULT_FRAME_INTERVAL, Instant::now()),
        }
    }

    /// Sets the frame rate (frames per second).
    pub fn set_frame_rate(&mut self, rate: f64) {
        self.set_frame_interval(Duration::from_secs_f64(1.0 / rate));
    }

    /// Sets the frame interval.
    pub fn set_frame_interval(&mut self, interval: Duration) {
        self.clock.set_interval(interval, Instant::now());
    }

    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        self.clock.interval()
    }

    /// Runs the application.
    ///
    /// 1. Calls `app.init()` for initialization
    /// 2. Until `app.should_exit()` returns true, once per frame:
    ///    - polls for one terminal event without blocking and passes it to `app.handle_event()`
    ///    - calls `app.update()`
    ///    - calls `app.draw()`
    ///    - sleeps until the next frame is due
    pub fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        ratatui::run(|terminal| {
            self.clock.reset(Instant::now());
            while !app.should_exit() {
                if event::poll(Duration::ZERO)? {
                    app.handle_event(&mut self, event::read()?);
                    if app.should_exit() {
                        break;
                    }
                }
                app.update(&mut self);
                terminal.draw(|f| app.draw(f))?;

                thread::sleep(self.clock.remaining(Instant::now()));
                self.clock.advance(Instant::now());
            }
            Ok(())
        })
    }
}
