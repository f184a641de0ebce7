use crossterm::event::Event;
use log::debug;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::Line,
};
use retris_engine::{GameSession, SessionState};
use retris_runtime::{App, Runtime};

use crate::{
    input::{self, Input},
    ui::widgets::{KeyBinding, KeyBindingDisplay, SessionDisplay, TitleDisplay, style},
};

const GAME_OVER_PROMPT: &str = ">>> GAME OVER! Press 'R' to restart or 'Q' to quit <<<";

const PLAYING_KEYS: &[KeyBinding] = &[
    (&["W", "↑"], "Rotate"),
    (&["A", "D", "←", "→"], "Move"),
    (&["S", "↓"], "Drop"),
    (&["Q"], "Quit"),
    (&["R"], "Restart"),
];

#[derive(Debug)]
pub struct PlayApp {
    session: GameSession,
    is_exiting: bool,
}

impl PlayApp {
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            is_exiting: false,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }
}

impl App for PlayApp {
    #[expect(clippy::cast_precision_loss)]
    fn init(&mut self, runtime: &mut Runtime) {
        runtime.set_frame_rate(self.session.fps() as f64);
        debug!("frame interval {:?}", runtime.frame_interval());
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, _runtime: &mut Runtime, event: Event) {
        match input::map_event(&event) {
            Some(Input::Command(command)) => self.session.apply(command),
            Some(Input::Quit) => self.is_exiting = true,
            None => {}
        }
    }

    fn update(&mut self, _runtime: &mut Runtime) {
        self.session.increment_frame();
    }

    fn draw(&self, frame: &mut Frame) {
        let title = TitleDisplay::new();
        let session_display = SessionDisplay::new(&self.session);

        let [title_area, main_area, footer_area] = Layout::vertical([
            Constraint::Length(title.height()),
            Constraint::Length(session_display.height()),
            Constraint::Length(1),
        ])
        .spacing(1)
        .areas(frame.area());

        frame.render_widget(title, title_area);
        frame.render_widget(session_display, main_area);
        match self.session.session_state() {
            SessionState::Playing => {
                frame.render_widget(KeyBindingDisplay::new(PLAYING_KEYS), footer_area);
            }
            SessionState::GameOver => {
                let prompt = Line::styled(GAME_OVER_PROMPT, style::GAME_OVER_PROMPT).centered();
                frame.render_widget(prompt, footer_area);
            }
        }
    }
}
