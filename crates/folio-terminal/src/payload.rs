//! Presentation payloads.
//!
//! A payload is a small document of blocks. The core never formats for a
//! particular screen; [`Payload::to_lines`] gives a plain-text rendering and
//! the shell is free to style blocks itself.

/// Whether a payload reports success or a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    Info,
    Error,
}

/// One element of a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Prominent heading (a role, a project name).
    Title(String),
    /// Small caps-style label (category, location, issuer).
    Label(String),
    Paragraph(String),
    Bullets(Vec<String>),
    /// Inline chips (tech stack, tags, links).
    Tags(Vec<String>),
    /// `label: value` pair.
    Field { label: String, value: String },
    /// Muted aside.
    Note(String),
    /// Nested group rendered as a bordered card.
    Card(Vec<Block>),
}

/// Renderable output of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    pub kind: PayloadKind,
    pub blocks: Vec<Block>,
}

impl Payload {
    pub fn info(blocks: Vec<Block>) -> Self {
        Self {
            kind: PayloadKind::Info,
            blocks,
        }
    }

    pub fn error(blocks: Vec<Block>) -> Self {
        Self {
            kind: PayloadKind::Error,
            blocks,
        }
    }

    /// Single-paragraph info payload.
    pub fn note(text: impl Into<String>) -> Self {
        Self::info(vec![Block::Paragraph(text.into())])
    }

    pub fn is_error(&self) -> bool {
        self.kind == PayloadKind::Error
    }

    /// Plain-text rendering, one string per output line.
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for block in &self.blocks {
            push_block(&mut lines, block, "");
        }
        lines
    }

    /// Concatenated text of every block, for searching.
    pub fn text(&self) -> String {
        self.to_lines().join("\n")
    }
}

fn push_block(lines: &mut Vec<String>, block: &Block, indent: &str) {
    match block {
        Block::Title(t) | Block::Paragraph(t) => lines.push(format!("{indent}{t}")),
        Block::Label(t) => lines.push(format!("{indent}{}", t.to_uppercase())),
        Block::Note(t) => lines.push(format!("{indent}({t})")),
        Block::Bullets(items) => {
            for item in items {
                lines.push(format!("{indent}  - {item}"));
            }
        },
        Block::Tags(tags) => {
            if !tags.is_empty() {
                let chips: Vec<String> = tags.iter().map(|t| format!("[{t}]")).collect();
                lines.push(format!("{indent}{}", chips.join(" ")));
            }
        },
        Block::Field { label, value } => lines.push(format!("{indent}{label}: {value}")),
        Block::Card(inner) => {
            let nested = format!("{indent}  ");
            lines.push(format!("{indent}+"));
            for b in inner {
                push_block(lines, b, &nested);
            }
        },
    }
}
