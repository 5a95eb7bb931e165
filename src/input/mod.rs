use macroquad::prelude::*;

use crate::application::AppState;
use crate::ui::{BUTTON_ALGORITHM, BUTTON_ANIMATE, BUTTON_RENDER, Button, TextBox};

/// The two entry fields of the configure panel
pub struct PanelFields {
    pub ruleset: TextBox,
    pub cell_size: TextBox,
}

impl PanelFields {
    /// Field that currently receives typed characters
    fn focused_mut(&mut self) -> Option<&mut TextBox> {
        if self.ruleset.is_focused() {
            Some(&mut self.ruleset)
        } else if self.cell_size.is_focused() {
            Some(&mut self.cell_size)
        } else {
            None
        }
    }

    /// Move focus ruleset -> cell size -> ruleset
    pub fn cycle_focus(&mut self) {
        let to_cell_size = self.ruleset.is_focused();
        self.ruleset.set_focused(!to_cell_size);
        self.cell_size.set_focused(to_cell_size);
    }

    /// Reflect the active configuration back into the fields
    pub fn sync_from(&mut self, state: &AppState) {
        let config = state.config();
        self.ruleset.set_text(config.ruleset.to_string());
        self.cell_size.set_text(config.cell_size.to_string());
    }

    /// Render trigger: hand the field text to the application
    pub fn submit(&mut self, state: AppState) -> AppState {
        let state = state.apply_text(self.ruleset.text(), self.cell_size.text());
        self.sync_from(&state);
        state
    }
}

/// Route mouse focus and typed characters into the panel fields.
/// Returns true if Enter was pressed inside a field.
pub fn handle_text_entry(fields: &mut PanelFields, mouse_pos: (f32, f32)) -> bool {
    fields.ruleset.update(mouse_pos);
    fields.cell_size.update(mouse_pos);

    if is_key_pressed(KeyCode::Tab) {
        fields.cycle_focus();
    }

    let Some(field) = fields.focused_mut() else {
        // Drain characters typed while nothing has focus
        while get_char_pressed().is_some() {}
        return false;
    };

    while let Some(c) = get_char_pressed() {
        field.push_char(c);
    }
    if is_key_pressed(KeyCode::Backspace) {
        field.backspace();
    }
    is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter)
}

/// Process keyboard shortcuts functionally.
/// Shortcuts are ignored while a text field has focus.
pub fn process_keyboard_input(state: AppState, fields: &mut PanelFields) -> AppState {
    if fields.ruleset.is_focused() || fields.cell_size.is_focused() {
        return state;
    }

    type KeyAction = (KeyCode, fn(AppState) -> AppState);

    let actions: [KeyAction; 8] = [
        (KeyCode::Space, AppState::toggle_animation),
        (KeyCode::A, AppState::cycle_algorithm),
        (KeyCode::R, AppState::random_seed),
        (KeyCode::S, AppState::single_seed),
        (KeyCode::Up, AppState::next_ruleset),
        (KeyCode::Down, AppState::prev_ruleset),
        (KeyCode::Right, |s| s.adjust_speed(10.0)),
        (KeyCode::Left, |s| s.adjust_speed(-10.0)),
    ];

    let new_state = actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    if is_key_pressed(KeyCode::Enter) {
        return fields.submit(new_state);
    }
    fields.sync_from(&new_state);
    new_state
}

/// Process panel button clicks functionally
pub fn process_button_clicks(
    state: AppState,
    buttons: &[Button],
    fields: &mut PanelFields,
    mouse_pos: (f32, f32),
) -> AppState {
    buttons
        .iter()
        .enumerate()
        .fold(state, |s, (idx, btn)| {
            if !btn.is_clicked(mouse_pos) {
                return s;
            }
            match idx {
                BUTTON_RENDER => fields.submit(s),
                BUTTON_ANIMATE => s.toggle_animation(),
                BUTTON_ALGORITHM => s.cycle_algorithm(),
                _ => s,
            }
        })
}
