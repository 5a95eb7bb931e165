mod button;
mod text_box;

pub use button::Button;
pub use text_box::TextBox;

use macroquad::prelude::Rect;

use crate::application::RULESET_MAX_CHARS;

// Floating configure panel, drawn over the automaton
pub const PANEL_X: f32 = 40.0;
pub const PANEL_Y: f32 = 40.0;
pub const PANEL_WIDTH: f32 = 160.0;
pub const PANEL_HEIGHT: f32 = 285.0;
pub const BUTTON_HEIGHT: f32 = 26.0;
pub const TEXT_BOX_HEIGHT: f32 = 24.0;

const INNER_X: f32 = PANEL_X + 8.0;
const INNER_WIDTH: f32 = PANEL_WIDTH - 16.0;

/// Largest cell size the text box accepts
pub const CELL_SIZE_MAX_CHARS: usize = 3;

pub fn panel_rect() -> Rect {
    Rect::new(PANEL_X, PANEL_Y, PANEL_WIDTH, PANEL_HEIGHT)
}

/// Full-width widget slot `top` pixels below the panel's top edge
fn slot(top: f32, height: f32) -> Rect {
    Rect::new(INNER_X, PANEL_Y + top, INNER_WIDTH, height)
}

/// Ruleset entry field
pub fn create_ruleset_box(initial: impl AsRef<str>) -> TextBox {
    TextBox::new(slot(45.0, TEXT_BOX_HEIGHT), "Ruleset", RULESET_MAX_CHARS).with_text(initial)
}

/// Cell size entry field
pub fn create_cell_size_box(initial: impl AsRef<str>) -> TextBox {
    TextBox::new(slot(95.0, TEXT_BOX_HEIGHT), "Cell size", CELL_SIZE_MAX_CHARS).with_text(initial)
}

/// Index of each panel button in `create_buttons()`
pub const BUTTON_RENDER: usize = 0;
pub const BUTTON_ANIMATE: usize = 1;
pub const BUTTON_ALGORITHM: usize = 2;

/// Create panel buttons with the standard layout
pub fn create_buttons() -> Vec<Button> {
    ["Render", "Animate", "Algorithm"]
        .into_iter()
        .enumerate()
        .map(|(i, label)| Button::new(slot(130.0 + i as f32 * 30.0, BUTTON_HEIGHT), label))
        .collect()
}
