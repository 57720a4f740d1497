//! Terminal render target
//!
//! The production display region. Entries are written as two-line blocks;
//! with ANSI enabled the screen is wiped on every clear and entries are
//! coloured by action, otherwise each render is separated by a rule.

use std::io::Write;

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Stylize},
    terminal::{Clear, ClearType},
};

use crate::domain::ports::RenderTarget;
use crate::error::FeedError;
use crate::feed::renderer::ENTRY_CLASS;

const HEADER: &str = "Repository activity";
const RULE: &str = "----------------------------------------";

pub struct TerminalRenderTarget<W: Write + Send> {
    out: W,
    ansi: bool,
}

impl<W: Write + Send> TerminalRenderTarget<W> {
    pub fn new(out: W, ansi: bool) -> Self {
        Self { out, ansi }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Colour for a style class; unknown actions keep the default colour
fn class_color(style_class: &str) -> Option<Color> {
    let action = style_class
        .strip_prefix(ENTRY_CLASS)
        .map(str::trim_start)
        .unwrap_or(style_class);

    match action {
        "PUSH" => Some(Color::Green),
        "PULL_REQUEST" => Some(Color::Cyan),
        "MERGE" => Some(Color::Magenta),
        _ => None,
    }
}

impl<W: Write + Send> RenderTarget for TerminalRenderTarget<W> {
    fn clear(&mut self) -> Result<(), FeedError> {
        if self.ansi {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
            writeln!(self.out, "{}\n", HEADER.bold())?;
        } else {
            writeln!(self.out, "{}", RULE)?;
            writeln!(self.out, "{}\n", HEADER)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn append_entry(
        &mut self,
        text: &str,
        timestamp_text: &str,
        style_class: &str,
    ) -> Result<(), FeedError> {
        match (self.ansi, class_color(style_class)) {
            (true, Some(color)) => writeln!(self.out, "{} {}", "*".with(color), text)?,
            _ => writeln!(self.out, "* {}", text)?,
        }

        if self.ansi {
            writeln!(self.out, "  {}", timestamp_text.dim())?;
        } else {
            writeln!(self.out, "  {}", timestamp_text)?;
        }

        self.out.flush()?;
        Ok(())
    }

    fn append_placeholder(&mut self, text: &str) -> Result<(), FeedError> {
        if self.ansi {
            writeln!(self.out, "{}", text.italic())?;
        } else {
            writeln!(self.out, "{}", text)?;
        }
        self.out.flush()?;
        Ok(())
    }
}
