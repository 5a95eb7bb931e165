use macroquad::prelude::*;

/// Push button drawn in the same style as the panel's text boxes
#[derive(Clone, Debug)]
pub struct Button {
    rect: Rect,
    label: String,
}

impl Button {
    pub fn new(rect: Rect, label: impl Into<String>) -> Self {
        Self { rect, label: label.into() }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn contains(&self, pos: (f32, f32)) -> bool {
        self.rect.contains(Vec2::from(pos))
    }

    /// Pressed this frame with the cursor over the button
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.contains(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let Rect { x, y, w, h } = self.rect;
        let hovered = self.contains(mouse_pos);
        let fill = if hovered { Color::from_rgba(60, 60, 60, 255) } else { Color::from_rgba(15, 15, 15, 255) };
        let border = if hovered { WHITE } else { Color::from_rgba(90, 90, 90, 255) };
        draw_rectangle(x, y, w, h, fill);
        draw_rectangle_lines(x, y, w, h, 1.5, border);

        let size = measure_text(&self.label, None, 16, 1.0);
        draw_text(&self.label, x + (w - size.width) / 2.0, y + (h + size.height) / 2.0, 16.0, WHITE);
    }
}
