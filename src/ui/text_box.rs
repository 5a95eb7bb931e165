use macroquad::prelude::*;

/// Single-line numeric text entry.
/// Editing is kept separate from drawing so it can be driven by any input source.
#[derive(Clone, Debug)]
pub struct TextBox {
    rect: Rect,
    label: String,
    text: String,
    max_chars: usize,
    focused: bool,
}

impl TextBox {
    pub fn new(rect: Rect, label: impl Into<String>, max_chars: usize) -> Self {
        Self {
            rect,
            label: label.into(),
            text: String::new(),
            max_chars,
            focused: false,
        }
    }

    /// Builder: initial contents (truncated to `max_chars`)
    pub fn with_text(mut self, text: impl AsRef<str>) -> Self {
        self.set_text(text);
        self
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace contents, keeping only digits up to `max_chars`
    pub fn set_text(&mut self, text: impl AsRef<str>) {
        self.text.clear();
        for c in text.as_ref().chars() {
            self.push_char(c);
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Append a typed character. Returns false if it was rejected.
    pub fn push_char(&mut self, c: char) -> bool {
        if !c.is_ascii_digit() || self.text.chars().count() >= self.max_chars {
            return false;
        }
        self.text.push(c);
        true
    }

    /// Delete the last character
    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Check if a point lies inside the entry field
    pub fn contains(&self, pos: (f32, f32)) -> bool {
        self.rect.contains(Vec2::from(pos))
    }

    /// Focus on click inside, lose focus on click elsewhere
    pub fn update(&mut self, mouse_pos: (f32, f32)) {
        if is_mouse_button_pressed(MouseButton::Left) {
            self.focused = self.contains(mouse_pos);
        }
    }

    pub fn draw(&self) {
        let Rect { x, y, w, h } = self.rect;
        draw_text(&self.label, x, y - 4.0, 14.0, GRAY);

        let border = if self.focused { WHITE } else { Color::from_rgba(90, 90, 90, 255) };
        draw_rectangle(x, y, w, h, Color::from_rgba(15, 15, 15, 255));
        draw_rectangle_lines(x, y, w, h, 1.5, border);

        let shown = if self.focused { format!("{}_", self.text) } else { self.text.clone() };
        draw_text(&shown, x + 5.0, y + 17.0, 18.0, WHITE);
    }
}
