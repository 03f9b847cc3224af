//! Screen manager
//!
//! A small state machine over the three top-level screens. Exactly one screen
//! is active at a time, and only the game screen drives the simulation. Game
//! over is not a screen of its own: the session flags it, the overlay renders
//! on top, and the screen stays `Game` until a restart or menu action.

use crate::config::GameConfig;
use crate::game::{Canvas, Session};
use crate::hud::Hud;

/// The top-level screens (fixed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Instructions,
    Game,
}

/// Discrete user actions consumed by the screen manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    /// Menu -> Game
    Play,
    /// Menu -> Instructions
    ShowInstructions,
    /// Instructions -> Menu
    Back,
    /// Instructions -> Game
    StartFromInstructions,
    /// Game -> Menu (stops the session)
    ShowMenu,
    /// Game-over overlay -> fresh session
    Restart,
}

/// Top-level application state: active screen, the running session (if any),
/// and the HUD bridge.
pub struct App {
    pub screen: Screen,
    pub session: Option<Session>,
    pub hud: Hud,
    pub config: GameConfig,
    pub canvas: Canvas,
}

impl App {
    /// Start at the menu with no session running.
    pub fn new(config: GameConfig, canvas: Canvas) -> Self {
        Self {
            screen: Screen::Menu,
            session: None,
            hud: Hud::new(),
            config,
            canvas,
        }
    }

    /// Apply one user action to the state machine.
    pub fn apply(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::Play | ScreenAction::StartFromInstructions => {
                self.start_session();
            }
            ScreenAction::ShowInstructions => {
                self.screen = Screen::Instructions;
            }
            ScreenAction::Back | ScreenAction::ShowMenu => {
                // Dropping the session stops the loop; the play field hides
                self.screen = Screen::Menu;
                self.session = None;
            }
            ScreenAction::Restart => {
                println!("Restarting session");
                match self.session.as_mut() {
                    Some(session) => session.restart(),
                    None => return self.start_session(),
                }
                self.hud.reset();
            }
        }
    }

    /// Should the simulation tick this frame? Only on the game screen with a
    /// live session that has not ended.
    pub fn should_tick(&self) -> bool {
        self.screen == Screen::Game
            && self.session.as_ref().is_some_and(|s| !s.game_over)
    }

    /// Is the game-over overlay showing?
    pub fn game_over(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.game_over)
    }

    fn start_session(&mut self) {
        println!("Starting new session on {}x{} canvas", self.canvas.w, self.canvas.h);
        self.screen = Screen::Game;
        self.session = Some(Session::new(self.config.clone(), self.canvas));
        self.hud.reset();
    }
}
