//! Payload builders for terminal command output.

use folio_types::content::Resume;

use crate::payload::{Block, Payload};
use crate::registry::{CommandRegistry, names};
use crate::session::Mode;

/// Shown for recognised commands without a dedicated renderer.
pub const ACKNOWLEDGED: &str = "Command acknowledged, functionality coming soon.";

/// `help`: every command with aliases, category, and description.
pub fn help_payload(registry: &CommandRegistry) -> Payload {
    let mut blocks = vec![Block::Note(
        "Available commands. Use `Tab` to autocomplete, `↑` / `↓` for history, and `clear` to reset."
            .to_string(),
    )];
    for cmd in registry.commands() {
        let title = if cmd.aliases.is_empty() {
            cmd.name.clone()
        } else {
            format!("{} ({})", cmd.name, cmd.aliases.join(", "))
        };
        blocks.push(Block::Card(vec![
            Block::Title(title),
            Block::Label(cmd.category.to_string()),
            Block::Paragraph(cmd.description.clone()),
        ]));
    }
    Payload::info(blocks)
}

/// Payload for a section command, or `None` if `name` has no content renderer.
pub fn section_payload(name: &str, resume: &Resume) -> Option<Payload> {
    let blocks = match name {
        names::ABOUT => {
            let mut blocks: Vec<Block> = resume
                .about
                .paragraphs
                .iter()
                .map(|p| Block::Paragraph(p.clone()))
                .collect();
            blocks.push(Block::Note(format!(
                "Availability: {}",
                resume.meta.availability
            )));
            blocks
        },
        names::EXPERIENCE => resume
            .experience
            .iter()
            .map(|role| {
                Block::Card(vec![
                    Block::Title(format!("{} · {}", role.title, role.organization)),
                    Block::Note(role.range.display()),
                    Block::Label(role.location.clone()),
                    Block::Paragraph(role.summary.clone()),
                    Block::Bullets(role.achievements.clone()),
                ])
            })
            .collect(),
        names::PROJECTS => resume
            .projects
            .iter()
            .map(|project| {
                Block::Card(vec![
                    Block::Title(project.name.clone()),
                    Block::Note(project.timeframe.clone()),
                    field("Problem", &project.problem),
                    field("Solution", &project.solution),
                    field("Impact", &project.impact),
                    Block::Tags(project.tech.clone()),
                ])
            })
            .collect(),
        names::EDUCATION => {
            let edu = &resume.education;
            vec![
                Block::Title(edu.degree.clone()),
                Block::Label(format!("{} · {}", edu.institution, edu.location)),
                Block::Note(edu.range.display()),
                Block::Bullets(edu.highlights.clone()),
            ]
        },
        names::CERTIFICATIONS => resume
            .certifications
            .iter()
            .map(|cert| {
                Block::Card(vec![
                    Block::Title(cert.name.clone()),
                    Block::Label(format!("{} · {}", cert.issuer, cert.issued)),
                ])
            })
            .collect(),
        names::SKILLS => resume
            .skills
            .iter()
            .map(|group| {
                Block::Card(vec![
                    Block::Label(group.label.clone()),
                    Block::Bullets(group.items.clone()),
                ])
            })
            .collect(),
        names::CONTACT => contact_blocks(resume),
        _ => return None,
    };
    Some(Payload::info(blocks))
}

pub(crate) fn contact_blocks(resume: &Resume) -> Vec<Block> {
    let contact = &resume.contact;
    vec![
        field("Email", &contact.email),
        field("Phone", &contact.phone),
        field("Location", &contact.location),
        Block::Label("Links".to_string()),
        Block::Bullets(
            contact
                .links
                .iter()
                .map(|l| format!("{} <{}>", l.label, l.href))
                .collect(),
        ),
    ]
}

fn field(label: &str, value: &str) -> Block {
    Block::Field {
        label: label.to_string(),
        value: value.to_string(),
    }
}

/// Unrecognised input. `token` is the normalised input.
pub fn not_found_payload(token: &str) -> Payload {
    Payload::error(vec![Block::Paragraph(format!(
        "Command not found: {token}. Type `help` to see available commands."
    ))])
}

/// Confirmation after `toggle`.
pub fn toggle_payload(mode: Mode) -> Payload {
    Payload::note(format!("Toggled mode to {}.", mode.as_str()))
}

/// Static instructions for `download`.
pub fn download_payload() -> Payload {
    Payload::info(vec![
        Block::Paragraph("PDF download support is on the roadmap. For now:".to_string()),
        Block::Bullets(vec![
            "Use your terminal or browser print dialog and save as PDF.".to_string(),
            "Or reach out via email and I will share the current résumé.".to_string(),
        ]),
    ])
}

pub fn acknowledged_payload() -> Payload {
    Payload::note(ACKNOWLEDGED)
}
