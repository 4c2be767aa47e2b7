//! Full-screen renderer for the log, the prompt row, and effect overlays.
//!
//! Layout is computed as plain data first (`layout_screen`) so scrolling and
//! cursor placement can be tested without a terminal.

use crate::effects::MatrixFrame;
use crate::output::LineKind;
use crate::session::{Overlay, Session, WipeStyle};
use crate::tui::settings;
use crate::tui::text::{cell_position, clip_to_width, hard_wrap, wrap_text};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Color, Print, PrintStyledContent, Stylize};
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTone {
    /// Echoed command, or the live edit line.
    Command,
    Response,
}

/// One terminal row of the normal (non-matrix) screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutRow {
    pub text: String,
    pub tone: RowTone,
    /// Leading chars of `text` that belong to the prompt.
    pub prompt_chars: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Rows from the top of the screen, already scrolled.
    pub rows: Vec<LayoutRow>,
    /// `(column, row)` of the edit cursor, or `None` when input is hidden.
    pub cursor: Option<(u16, u16)>,
}

/// Lay out the log plus the prompt row, scrolled so the bottom is visible.
pub fn layout_screen(session: &Session, prompt: &str, cols: u16, rows: u16) -> ScreenLayout {
    let width = cols.max(1) as usize;
    let height = rows.max(1) as usize;
    let mut out = Vec::new();

    for line in session.log().lines() {
        match line.kind {
            LineKind::Command => push_prompted(&mut out, prompt, &line.text, width),
            LineKind::Response => {
                out.extend(wrap_text(&line.text, width).into_iter().map(|text| LayoutRow {
                    text,
                    tone: RowTone::Response,
                    prompt_chars: 0,
                }))
            }
        }
    }

    let mut cursor = None;
    if session.input_enabled() && *session.overlay() == Overlay::None {
        let first_input_row = out.len();
        let edit_line = format!("{prompt}{}", session.input().as_str());
        push_prompted(&mut out, prompt, session.input().as_str(), width);
        let char_idx = prompt.chars().count() + session.input().cursor();
        let (col, offset_row) = cell_position(&edit_line, char_idx, width);
        let row = first_input_row + offset_row;
        // Cursor parked just past a full row lands on a fresh row.
        while out.len() <= row {
            out.push(LayoutRow {
                text: String::new(),
                tone: RowTone::Command,
                prompt_chars: 0,
            });
        }
        cursor = Some((col, row));
    }

    let skip = out.len().saturating_sub(height);
    let rows: Vec<LayoutRow> = out.into_iter().skip(skip).collect();
    let cursor = cursor.map(|(col, row)| (col as u16, row.saturating_sub(skip) as u16));
    ScreenLayout { rows, cursor }
}

fn push_prompted(out: &mut Vec<LayoutRow>, prompt: &str, text: &str, width: usize) {
    let mut remaining_prompt = prompt.chars().count();
    for row in hard_wrap(&format!("{prompt}{text}"), width) {
        let prompt_chars = remaining_prompt.min(row.chars().count());
        remaining_prompt -= prompt_chars;
        out.push(LayoutRow {
            text: row,
            tone: RowTone::Command,
            prompt_chars,
        });
    }
}

/// Replace roughly one in `NOISE_ONE_IN` non-space cells with noise.
pub fn corrupt_text<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    text.chars()
        .map(|ch| {
            if !ch.is_whitespace() && rng.gen_ratio(1, settings::NOISE_ONE_IN) {
                settings::NOISE_GLYPHS[rng.gen_range(0..settings::NOISE_GLYPHS.len())]
            } else {
                ch
            }
        })
        .collect()
}

/// Handles all terminal output for the interactive front end.
pub struct Renderer {
    /// Whether ANSI color/style output is enabled.
    color: bool,
    noise: StdRng,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self {
            color,
            noise: StdRng::from_entropy(),
        }
    }

    /// Repaint the whole screen for the current session state.
    pub fn draw<W: Write>(
        &mut self,
        out: &mut W,
        session: &Session,
        prompt: &str,
        (cols, rows): (u16, u16),
    ) -> io::Result<()> {
        out.queue(Hide)?;
        match session.overlay() {
            Overlay::Matrix { frame, .. } => self.draw_matrix(out, frame.as_ref(), cols, rows)?,
            Overlay::Wipe { style, .. } => {
                self.draw_log(out, session, prompt, cols, rows, *style)?;
            }
            Overlay::None => {
                self.draw_log(out, session, prompt, cols, rows, WipeStyle::Normal)?;
            }
        }
        out.flush()
    }

    fn draw_log<W: Write>(
        &mut self,
        out: &mut W,
        session: &Session,
        prompt: &str,
        cols: u16,
        rows: u16,
        style: WipeStyle,
    ) -> io::Result<()> {
        let layout = layout_screen(session, prompt, cols, rows);
        let width = cols.max(1) as usize;

        for screen_row in 0..rows {
            out.queue(MoveTo(0, screen_row))?;
            out.queue(Clear(ClearType::CurrentLine))?;
            let Some(row) = layout.rows.get(screen_row as usize) else {
                continue;
            };
            let text = clip_to_width(&row.text, width);
            if !self.color {
                out.queue(Print(text))?;
                continue;
            }

            let prompt_part: String = text.chars().take(row.prompt_chars).collect();
            let rest: String = text.chars().skip(row.prompt_chars).collect();
            if !prompt_part.is_empty() {
                out.queue(PrintStyledContent(prompt_part.with(settings::COLOR_PROMPT)))?;
            }
            let (rest, fg) = match style {
                WipeStyle::Normal => (rest, tone_color(row.tone)),
                WipeStyle::Glitch => (rest, settings::COLOR_GLITCH),
                WipeStyle::Corrupted => (
                    corrupt_text(&rest, &mut self.noise),
                    settings::COLOR_CORRUPTED,
                ),
            };
            out.queue(PrintStyledContent(rest.with(fg)))?;
        }

        if let Some((col, row)) = layout.cursor {
            out.queue(MoveTo(col, row))?;
            out.queue(Show)?;
        }
        Ok(())
    }

    fn draw_matrix<W: Write>(
        &self,
        out: &mut W,
        frame: Option<&MatrixFrame>,
        cols: u16,
        rows: u16,
    ) -> io::Result<()> {
        for row in 0..rows {
            out.queue(MoveTo(0, row))?;
            out.queue(Clear(ClearType::CurrentLine))?;
            let Some(frame) = frame else {
                continue;
            };
            for col in 0..cols.min(frame.cols) {
                match frame.get(col, row) {
                    Some(cell) if self.color => {
                        out.queue(PrintStyledContent(
                            cell.glyph.to_string().with(matrix_color(cell.age)),
                        ))?;
                    }
                    Some(cell) => {
                        out.queue(Print(cell.glyph))?;
                    }
                    None => {
                        out.queue(Print(' '))?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn tone_color(tone: RowTone) -> Color {
    match tone {
        RowTone::Command => settings::COLOR_COMMAND,
        RowTone::Response => settings::COLOR_RESPONSE,
    }
}

fn matrix_color(age: u8) -> Color {
    match age {
        0 => settings::COLOR_MATRIX_HEAD,
        a if a < settings::MATRIX_FADE_AGE => settings::COLOR_MATRIX_TRAIL,
        _ => settings::COLOR_MATRIX_FADED,
    }
}
