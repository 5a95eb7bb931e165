use std::io::{self, Write};

use macroquad::prelude::*;

use crate::application::AppState;
use crate::domain::Cell;
use crate::ui::{Button, TextBox, panel_rect};

/// Presentation capability the simulation draws through.
///
/// Each generation arrives as a row of cells together with its vertical
/// pixel offset; cell `i` covers `[i * cell_size, (i + 1) * cell_size)`.
pub trait Renderer {
    fn draw_generation(&mut self, row: &[Cell], y: u32, cell_size: u32);
}

/// Draws generations as grayscale squares in the macroquad window
pub struct MacroquadRenderer;

impl Renderer for MacroquadRenderer {
    fn draw_generation(&mut self, row: &[Cell], y: u32, cell_size: u32) {
        let size = cell_size as f32;
        for (i, cell) in row.iter().enumerate() {
            // Background is already white, skip dead cells
            if !cell.is_alive() {
                continue;
            }
            let shade = cell.brightness();
            draw_rectangle(
                i as f32 * size,
                y as f32,
                size,
                size,
                Color::from_rgba(shade, shade, shade, 255),
            );
        }
    }
}

/// In-memory grayscale image, one byte per pixel
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl FrameBuffer {
    /// Create a white frame buffer
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Cell::Dead.brightness(); width as usize * height as usize],
        }
    }

    /// Pixel value at (x, y), None outside the buffer
    pub fn pixel(&self, x: u32, y: u32) -> Option<u8> {
        (x < self.width && y < self.height)
            .then(|| self.pixels[y as usize * self.width as usize + x as usize])
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

impl Renderer for FrameBuffer {
    fn draw_generation(&mut self, row: &[Cell], y: u32, cell_size: u32) {
        let y_end = (y + cell_size).min(self.height);
        for (i, cell) in row.iter().enumerate() {
            let x_start = i as u32 * cell_size;
            if x_start >= self.width {
                break;
            }
            let x_end = (x_start + cell_size).min(self.width);
            let shade = cell.brightness();
            for py in y..y_end {
                let line = py as usize * self.width as usize;
                self.pixels[line + x_start as usize..line + x_end as usize].fill(shade);
            }
        }
    }
}

/// Writes each generation as a line of text: `#` alive, `.` dead
pub struct TextRenderer<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Return the writer, or the first write error encountered
    pub fn finish(mut self) -> io::Result<W> {
        match self.error.take() {
            Some(err) => Err(err),
            None => {
                self.out.flush()?;
                Ok(self.out)
            }
        }
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn draw_generation(&mut self, row: &[Cell], _y: u32, _cell_size: u32) {
        if self.error.is_some() {
            return;
        }
        let line: String = row.iter().map(|c| if c.is_alive() { '#' } else { '.' }).collect();
        if let Err(err) = writeln!(self.out, "{}", line) {
            self.error = Some(err);
        }
    }
}

/// Info lines shown under the panel buttons
pub fn panel_info(state: &AppState) -> [String; 4] {
    let config = state.simulation.config();
    [
        format!("Rule {} | {} cells", config.ruleset, config.row_len()),
        format!("{} | {} seed", config.algorithm, config.seed.name()),
        config.algorithm.description().to_string(),
        format!("Rows {}/{}", state.revealed_rows(), config.generation_count()),
    ]
}

/// Draw the configure panel with its widgets and status lines
pub fn draw_panel(state: &AppState, text_boxes: &[&TextBox], buttons: &[Button], mouse_pos: (f32, f32)) {
    let Rect { x: px, y: py, w: pw, h: ph } = panel_rect();
    draw_rectangle(px, py, pw, ph, Color::from_rgba(30, 30, 30, 230));
    draw_rectangle_lines(px, py, pw, ph, 2.0, Color::from_rgba(80, 80, 80, 255));
    draw_text("Configure", px + 8.0, py + 18.0, 18.0, WHITE);

    text_boxes.iter().for_each(|tb| tb.draw());
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    for (i, line) in panel_info(state).iter().enumerate() {
        draw_text(line, px + 8.0, py + ph - 56.0 + i as f32 * 14.0, 14.0, LIGHTGRAY);
    }

    if let Some(status) = &state.status {
        draw_text(status, px + 8.0, py + ph + 16.0, 16.0, Color::from_rgba(220, 60, 60, 255));
    }
}
