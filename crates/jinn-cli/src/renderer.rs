//! Terminal rendering module for rich markdown output
//!
//! Session views are markdown; this module prints them through termimad, or
//! as plain text when colors are disabled.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGrey);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    pub fn is_rich(&self) -> bool {
        self.rich_enabled
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            for line in markdown.lines() {
                if line.starts_with('#') {
                    println!("\x1b[34m{line}\x1b[0m");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
        io::stdout().flush()?;
        Ok(())
    }

    /// Print the input prompt without a trailing newline.
    pub fn prompt(&self, text: &str) -> Result<()> {
        if self.rich_enabled {
            print!("\x1b[32m{text}\x1b[0m");
        } else {
            print!("{text}");
        }
        io::stdout().flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.is_rich());
    }

    #[test]
    fn test_default_is_rich() {
        assert!(TerminalRenderer::default().is_rich());
    }
}
