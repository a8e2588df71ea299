// server/src/cli/display.rs

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::{Color, Stylize};
use crossterm::terminal::{Clear, ClearType, size as terminal_size};

const BORDER_CHAR: char = '#';
const INNER_PADDING: usize = 6;

/// Banner shown once before the main menu, sized to the terminal width.
pub fn print_welcome_screen(out: &mut dyn Write) -> Result<()> {
    let (cols, _) = terminal_size().unwrap_or((80, 24));
    write_welcome_screen(out, cols as usize)
}

pub fn write_welcome_screen(out: &mut dyn Write, width: usize) -> Result<()> {
    let width = width.max(48);
    let border = BORDER_CHAR.to_string().repeat(width);
    let lines: [(&str, Color, bool); 6] = [
        ("", Color::Blue, false),
        ("Medication Tracking System", Color::DarkCyan, true),
        (concat!("Version ", env!("CARGO_PKG_VERSION")), Color::White, true),
        ("", Color::Blue, false),
        ("Pick a number from each menu. 0 goes back.", Color::Green, true),
        ("Press Ctrl-D at any prompt to leave.", Color::Yellow, false),
    ];

    writeln!(out, "{}", border.as_str().with(Color::Cyan))?;
    for (text, color, bold) in lines {
        let content_width = width.saturating_sub(2 + INNER_PADDING);
        let padding = content_width.saturating_sub(text.len());
        let left = padding / 2;
        let styled = if bold { text.with(color).bold() } else { text.with(color) };
        writeln!(
            out,
            "{}{}{}{}{}",
            format!("{}{}", BORDER_CHAR, " ".repeat(INNER_PADDING / 2)).with(Color::Cyan),
            " ".repeat(left),
            styled,
            " ".repeat(padding - left),
            format!("{}{}", " ".repeat(INNER_PADDING / 2), BORDER_CHAR).with(Color::Cyan),
        )?;
    }
    writeln!(out, "{}", border.as_str().with(Color::Cyan))?;
    out.flush()?;
    Ok(())
}

pub fn clear_terminal_screen() -> Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
        .context("Failed to clear terminal screen or move cursor")?;
    io::stdout().flush()?;
    Ok(())
}
