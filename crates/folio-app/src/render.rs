use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use folio_terminal::{Block, Mode, Payload};

use crate::app_state::{AppState, Emit};

const ACCENT: Color = Color::Cyan;
const MUTED: Color = Color::DarkGrey;
const ERROR: Color = Color::Red;

/// Styled line output over any writer.
///
/// In raw mode lines end with `\r\n` and the prompt is redrawn in place.
pub struct Screen<W: Write> {
    out: W,
    color: bool,
    raw: bool,
}

impl<W: Write> Screen<W> {
    pub fn new(out: W, color: bool, raw: bool) -> Self {
        Self { out, color, raw }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn newline(&mut self) -> io::Result<()> {
        let nl = if self.raw { "\r\n" } else { "\n" };
        queue!(self.out, Print(nl))
    }

    fn styled(&mut self, text: &str, color: Option<Color>, bold: bool) -> io::Result<()> {
        if self.color {
            if let Some(c) = color {
                queue!(self.out, SetForegroundColor(c))?;
            }
            if bold {
                queue!(self.out, SetAttribute(Attribute::Bold))?;
            }
        }
        queue!(self.out, Print(text))?;
        if self.color && (color.is_some() || bold) {
            queue!(self.out, SetAttribute(Attribute::Reset), ResetColor)?;
        }
        Ok(())
    }

    fn line(&mut self, indent: usize, text: &str, color: Option<Color>, bold: bool) -> io::Result<()> {
        queue!(self.out, Print(" ".repeat(indent)))?;
        self.styled(text, color, bold)?;
        self.newline()
    }

    fn blocks(&mut self, blocks: &[Block], indent: usize, base: Option<Color>) -> io::Result<()> {
        for block in blocks {
            match block {
                Block::Title(t) => self.line(indent, t, base, true)?,
                Block::Label(t) => self.line(indent, &t.to_uppercase(), Some(ACCENT), false)?,
                Block::Paragraph(t) => self.line(indent, t, base, false)?,
                Block::Note(t) => self.line(indent, t, Some(MUTED), false)?,
                Block::Bullets(items) => {
                    for item in items {
                        self.line(indent, &format!("  • {item}"), base, false)?;
                    }
                },
                Block::Tags(tags) => {
                    if !tags.is_empty() {
                        let chips: Vec<String> = tags.iter().map(|t| format!("[{t}]")).collect();
                        self.line(indent, &chips.join(" "), Some(ACCENT), false)?;
                    }
                },
                Block::Field { label, value } => {
                    queue!(self.out, Print(" ".repeat(indent)))?;
                    self.styled(&format!("{label}: "), Some(ACCENT), false)?;
                    self.styled(value, base, false)?;
                    self.newline()?;
                },
                Block::Card(inner) => {
                    self.line(indent, "┌", Some(MUTED), false)?;
                    self.blocks(inner, indent + 2, base)?;
                },
            }
        }
        Ok(())
    }

    /// Print a payload.
    pub fn payload(&mut self, payload: &Payload) -> io::Result<()> {
        let base = if payload.is_error() { Some(ERROR) } else { None };
        self.blocks(&payload.blocks, 2, base)
    }

    /// Print one queued emit.
    pub fn emit(&mut self, emit: &Emit, state: &AppState) -> io::Result<()> {
        match emit {
            Emit::Result { command, payload } => {
                self.line(0, &format!("› {command}"), Some(ACCENT), true)?;
                self.payload(payload)?;
                self.newline()?;
            },
            Emit::Section(card) => {
                self.line(0, &"─".repeat(48), Some(MUTED), false)?;
                self.payload(card)?;
                self.newline()?;
            },
            Emit::ClearScreen => {
                if self.raw {
                    queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
                }
            },
            Emit::Notice(text) => self.line(0, text, Some(MUTED), false)?,
            Emit::Tips => self.tips()?,
            Emit::CheatSheet => self.cheat_sheet(state)?,
        }
        Ok(())
    }

    pub fn tips(&mut self) -> io::Result<()> {
        self.line(0, "NEW HERE?", Some(ACCENT), true)?;
        self.line(
            2,
            "Type a command at the prompt to explore the résumé (`help` lists everything).",
            None,
            false,
        )?;
        self.line(
            2,
            "Tab/Shift+Tab autocomplete, ↑/↓ recall history, Ctrl+L clears the input, Alt+1..7 run the chips below.",
            None,
            false,
        )?;
        self.line(
            2,
            "F2 opens the command cheat sheet. Press Esc to hide these tips.",
            Some(MUTED),
            false,
        )?;
        self.newline()
    }

    pub fn cheat_sheet(&mut self, state: &AppState) -> io::Result<()> {
        self.line(0, "COMMAND CHEAT SHEET", Some(ACCENT), true)?;
        for cmd in state.terminal.registry().commands() {
            let name = if cmd.aliases.is_empty() {
                cmd.name.clone()
            } else {
                format!("{} ({})", cmd.name, cmd.aliases.join(", "))
            };
            queue!(self.out, Print("  "))?;
            self.styled(&format!("{name:<32}"), None, true)?;
            self.styled(&cmd.description, Some(MUTED), false)?;
            self.newline()?;
        }
        self.line(0, "F2 or Esc closes this sheet.", Some(MUTED), false)?;
        self.newline()
    }

    /// Welcome banner, tips (unless dismissed), and command chips.
    pub fn banner(&mut self, state: &AppState) -> io::Result<()> {
        let prompt = state.config.prompt.clone();
        self.line(0, &format!("{prompt} welcome"), Some(ACCENT), true)?;
        let about = &state.terminal.content().about;
        self.line(2, &about.headline, None, false)?;
        self.line(
            2,
            "This résumé behaves like a UNIX terminal: type a command, hit enter, and explore.",
            Some(MUTED),
            false,
        )?;
        self.newline()?;
        if state.show_tips {
            self.tips()?;
        }
        self.chips(state)
    }

    pub fn chips(&mut self, state: &AppState) -> io::Result<()> {
        let chips: Vec<String> = state
            .terminal
            .registry()
            .primary_commands()
            .iter()
            .enumerate()
            .map(|(i, c)| format!("[{}] {}", i + 1, c.name))
            .collect();
        self.line(0, &chips.join("  "), Some(ACCENT), false)
    }

    /// Redraw the prompt line with inline suggestions.
    pub fn prompt(&mut self, state: &AppState) -> io::Result<()> {
        if self.raw {
            queue!(self.out, Print("\r"), Clear(ClearType::CurrentLine))?;
        }
        let mode = match state.terminal.mode() {
            Mode::Hybrid => "",
            Mode::Terminal => " [terminal-only]",
        };
        self.styled(&format!("{}{mode} ", state.config.prompt), Some(ACCENT), true)?;
        queue!(self.out, Print(state.editor.input()))?;

        let registry = state.terminal.registry();
        let suggestions = state.editor.suggestions(registry);
        if !suggestions.is_empty() && !state.editor.input().is_empty() {
            let selected = state.editor.suggestion_index();
            let rendered: Vec<String> = suggestions
                .iter()
                .enumerate()
                .map(|(i, s)| {
                    if Some(i) == selected {
                        format!("<{s}>")
                    } else {
                        s.to_string()
                    }
                })
                .collect();
            self.styled(&format!("   {}", rendered.join(" ")), Some(MUTED), false)?;
            if self.raw {
                // Park the cursor back at the end of the input.
                let hint_len = 3 + rendered.join(" ").chars().count();
                queue!(
                    self.out,
                    crossterm::cursor::MoveLeft(hint_len.min(u16::MAX as usize) as u16)
                )?;
            }
        }
        Ok(())
    }

    /// Drop the in-progress prompt line before printing output over it.
    pub fn clear_line(&mut self) -> io::Result<()> {
        if self.raw {
            queue!(self.out, Print("\r"), Clear(ClearType::CurrentLine))?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
