use log::{info, warn};
use macroquad::prelude::*;
use sparse_life::{Config, Session, input::InputState, rendering};

fn load_config() -> Config {
    Config::from_env().unwrap_or_else(|err| {
        warn!("ignoring environment overrides: {err}");
        Config::default()
    })
}

fn window_conf() -> Conf {
    let config = Config::default();
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: config.screen_width as i32,
        window_height: config.screen_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = load_config();
    info!(
        "starting: cell size {}, step interval {}s",
        config.cell_size, config.step_interval
    );
    let viewport = vec2(config.screen_width, config.screen_height);
    let mut session = Session::new(config);
    let mut input = InputState::new();

    loop {
        let intents = input.poll();
        session.frame(intents, get_frame_time());

        let snapshot = session.snapshot();
        rendering::clear();
        rendering::draw_grid_lines(&session.camera, session.config(), viewport);
        rendering::draw_cells(&snapshot, &session.camera, session.config(), viewport);
        rendering::draw_status(&snapshot);

        next_frame().await;
    }
}
