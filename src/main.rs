use std::error::Error;
use std::io::{self, BufWriter};

use log::{error, info};
use macroquad::prelude::*;
use elementary_automata::{
    AppState, Simulation, SimulationConfig,
    cli::Args,
    input::{self, PanelFields},
    rendering::{self, MacroquadRenderer, TextRenderer},
    ui,
};

fn window_conf(config: &SimulationConfig) -> Conf {
    Conf {
        window_title: "Elementary Cellular Automata".to_owned(),
        window_width: config.screen_width as i32,
        window_height: config.screen_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse()?;
    if args.headless {
        return run_headless(args.config);
    }

    let config = args.config;
    macroquad::Window::from_config(window_conf(&config), run_window(config));
    Ok(())
}

/// Print every generation to stdout as text
fn run_headless(config: SimulationConfig) -> Result<(), Box<dyn Error>> {
    let mut simulation = Simulation::new(config)?;
    let mut text = TextRenderer::new(BufWriter::new(io::stdout().lock()));
    let rows = simulation.render(&mut text);
    text.finish()?;
    info!("Printed {} generations of rule {}", rows, config.ruleset);
    Ok(())
}

async fn run_window(config: SimulationConfig) {
    let mut state = match AppState::new(config) {
        Ok(state) => state,
        Err(err) => {
            error!("Invalid configuration: {}", err);
            return;
        }
    };
    info!(
        "Rule {} with {} cells per row, {} generations",
        config.ruleset,
        config.row_len(),
        config.generation_count()
    );

    let mut fields = PanelFields {
        ruleset: ui::create_ruleset_box(config.ruleset.to_string()),
        cell_size: ui::create_cell_size_box(config.cell_size.to_string()),
    };
    let buttons = ui::create_buttons();

    loop {
        let mouse_pos = mouse_position();

        // Escape leaves a text field first, then quits
        if is_key_pressed(KeyCode::Escape) {
            if fields.ruleset.is_focused() || fields.cell_size.is_focused() {
                fields.ruleset.set_focused(false);
                fields.cell_size.set_focused(false);
            } else {
                break;
            }
        }

        if input::handle_text_entry(&mut fields, mouse_pos) {
            state = fields.submit(state);
        }
        state = input::process_button_clicks(state, &buttons, &mut fields, mouse_pos);
        state = input::process_keyboard_input(state, &mut fields);

        state = state.tick(get_frame_time());

        clear_background(WHITE);
        state.draw(&mut MacroquadRenderer);
        rendering::draw_panel(&state, &[&fields.ruleset, &fields.cell_size], &buttons, mouse_pos);

        next_frame().await;
    }
}
