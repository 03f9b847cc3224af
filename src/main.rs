//! GLIMMER: a tiny arcade game about gathering hope in the dark
//!
//! Steer a small light with the pointer (or a finger), collect hope orbs to
//! brighten the world, and stay away from the roaming shadows. One screen
//! manager, one session, one fixed-size play field - the whole game runs in
//! a single cooperative frame loop.

mod app;
mod config;
mod game;
mod hud;
mod screens;
mod ui;

use macroquad::prelude::*;

use app::{App, Screen};
use config::GameConfig;
use game::{draw_session, Canvas};
use ui::{PointerState, Rect};

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Glimmer v{}", VERSION),
        window_width: 840,
        window_height: 700,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

/// The play field rect, centered in the window with the chrome strip above.
fn play_area(canvas: Canvas) -> Rect {
    let x = ((screen_width() - canvas.w) * 0.5).round();
    let y = (((screen_height() - canvas.h) * 0.5) + 20.0).round();
    Rect::new(x, y, canvas.w, canvas.h)
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = GameConfig::load_or_default("glimmer.ron");

    // The canvas is derived from the viewport once and never resized
    let canvas = config.resolve_canvas(screen_width(), screen_height());
    let mut app = App::new(config, canvas);

    println!("=== GLIMMER v{} ===", VERSION);

    loop {
        // Latest pointer sample wins; no event queue draining
        let pointer = PointerState::sample();
        let screen_rect = Rect::screen(screen_width(), screen_height());

        let action = match app.screen {
            Screen::Menu => screens::draw_menu(screen_rect, &pointer),
            Screen::Instructions => screens::draw_instructions(screen_rect, &pointer),
            Screen::Game => {
                clear_background(screens::BG_COLOR);
                let area = play_area(app.canvas);

                if app.should_tick() {
                    if let Some(session) = app.session.as_mut() {
                        // Pointer input in play-field coordinates; the
                        // session clamps it to the canvas
                        session.tick(pointer.x - area.x, pointer.y - area.y);
                    }
                }
                if let Some(session) = app.session.as_mut() {
                    app.hud.drain(&mut session.events);
                }

                if let Some(session) = app.session.as_ref() {
                    draw_session(session, area);
                }

                let mut action = screens::draw_game_chrome(area, &app.hud, &pointer);
                if app.game_over() {
                    if let Some(overlay_action) = screens::draw_game_over(area, &app.hud, &pointer)
                    {
                        action = Some(overlay_action);
                    }
                }
                action
            }
        };

        if let Some(action) = action {
            app.apply(action);
        }

        next_frame().await;
    }
}
