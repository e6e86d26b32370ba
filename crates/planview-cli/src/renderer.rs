//! Terminal rendering for plan markdown and notifications
//!
//! Plans are formatted as markdown by the core crate. In rich mode headers,
//! bold text and inline code are styled with termimad; plain mode prints the
//! markdown unchanged so output stays easy to grep.

use anyhow::Result;
use planview_core::Notification;
use termimad::{crossterm::style::Color, MadSkin};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const BLUE: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

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
        skin.italic.set_fg(Color::Magenta);
        // Timeline bars and icons are rendered as inline code.
        skin.inline_code.set_fg(Color::Cyan);
        skin.inline_code.set_bg(Color::AnsiValue(236));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        // Headers keep their hash marks so phase numbering stays visible.
        for line in markdown.lines() {
            if line.starts_with('#') {
                println!("{BLUE}{line}{RESET}");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }

    /// Print a success or error notification on its own line.
    pub fn notify(&self, notification: &Notification) -> Result<()> {
        if self.rich_enabled {
            let color = if notification.success { GREEN } else { RED };
            print!("{color}{notification}{RESET}");
        } else {
            print!("{notification}");
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
