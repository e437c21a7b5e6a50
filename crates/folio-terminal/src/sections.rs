//! Résumé sections and the scrollable layout shown in hybrid mode.

use folio_types::content::Resume;

use crate::output::contact_blocks;
use crate::payload::{Block, Payload};
use crate::registry::{SCROLL_START, names};

/// Section focused when a session starts.
pub const DEFAULT_SECTION: &str = "about";

/// A card in the scrollable layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub id: String,
    pub title: String,
    /// Command that focuses this section.
    pub command: String,
    pub summary: String,
}

fn descriptor(id: &str, title: &str, summary: String) -> SectionDescriptor {
    SectionDescriptor {
        id: id.to_string(),
        title: title.to_string(),
        command: id.to_string(),
        summary,
    }
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

/// The seven résumé sections, in layout order, with summaries derived from
/// the content.
pub fn section_descriptors(resume: &Resume) -> Vec<SectionDescriptor> {
    let mut orgs: Vec<&str> = Vec::new();
    for role in &resume.experience {
        if !orgs.contains(&role.organization.as_str()) {
            orgs.push(&role.organization);
        }
    }
    let issuers = {
        let mut v: Vec<&str> = Vec::new();
        for cert in &resume.certifications {
            if !v.contains(&cert.issuer.as_str()) {
                v.push(&cert.issuer);
            }
        }
        v
    };

    vec![
        descriptor(
            names::ABOUT,
            "About",
            resume
                .about
                .paragraphs
                .first()
                .cloned()
                .unwrap_or_else(|| resume.about.headline.clone()),
        ),
        descriptor(
            names::EXPERIENCE,
            "Experience",
            format!(
                "{} role(s) across {}.",
                resume.experience.len(),
                join_names(orgs.into_iter())
            ),
        ),
        descriptor(
            names::PROJECTS,
            "Projects",
            format!(
                "{} highlighted build(s): {}.",
                resume.projects.len(),
                join_names(resume.projects.iter().map(|p| p.name.as_str()))
            ),
        ),
        descriptor(
            names::EDUCATION,
            "Education",
            format!(
                "{} at {}.",
                resume.education.degree, resume.education.institution
            ),
        ),
        descriptor(
            names::CERTIFICATIONS,
            "Certifications",
            format!(
                "{} credential(s) from {}.",
                resume.certifications.len(),
                join_names(issuers.into_iter())
            ),
        ),
        descriptor(
            names::SKILLS,
            "Skills",
            format!(
                "Proficiencies grouped as {}.",
                join_names(resume.skills.iter().map(|s| s.label.as_str()))
            ),
        ),
        descriptor(
            names::CONTACT,
            "Contact",
            "Email, phone, and professional profiles for collaboration.".to_string(),
        ),
    ]
}

/// Body of a section card. Richer than the terminal output: experience
/// shows tags and certifications show credential ids.
pub fn section_body(id: &str, resume: &Resume) -> Vec<Block> {
    match id {
        names::ABOUT => {
            let mut blocks: Vec<Block> = resume
                .about
                .paragraphs
                .iter()
                .map(|p| Block::Paragraph(p.clone()))
                .collect();
            blocks.push(Block::Note(resume.meta.availability.clone()));
            blocks
        },
        names::EXPERIENCE => resume
            .experience
            .iter()
            .map(|role| {
                Block::Card(vec![
                    Block::Title(format!("{} · {}", role.title, role.organization)),
                    Block::Label(role.location.clone()),
                    Block::Note(role.range.display()),
                    Block::Paragraph(role.summary.clone()),
                    Block::Bullets(role.achievements.clone()),
                    Block::Tags(role.tags.clone()),
                ])
            })
            .collect(),
        names::PROJECTS => resume
            .projects
            .iter()
            .map(|p| {
                Block::Card(vec![
                    Block::Title(p.name.clone()),
                    Block::Note(p.timeframe.clone()),
                    Block::Field {
                        label: "Problem".to_string(),
                        value: p.problem.clone(),
                    },
                    Block::Field {
                        label: "Solution".to_string(),
                        value: p.solution.clone(),
                    },
                    Block::Field {
                        label: "Impact".to_string(),
                        value: p.impact.clone(),
                    },
                    Block::Tags(p.tech.clone()),
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
                let mut card = vec![
                    Block::Title(cert.name.clone()),
                    Block::Label(format!("{} · {}", cert.issuer, cert.issued)),
                ];
                if let Some(id) = &cert.credential_id {
                    card.push(Block::Note(format!("Credential ID: {id}")));
                }
                Block::Card(card)
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
        _ => vec![Block::Note(
            "Detailed content for this section is not available yet.".to_string(),
        )],
    }
}

/// The scrollable résumé layout and its focused section.
#[derive(Debug, Clone)]
pub struct ScrollLayout {
    sections: Vec<SectionDescriptor>,
    active: String,
}

impl ScrollLayout {
    pub fn new(resume: &Resume) -> Self {
        Self {
            sections: section_descriptors(resume),
            active: DEFAULT_SECTION.to_string(),
        }
    }

    pub fn sections(&self) -> &[SectionDescriptor] {
        &self.sections
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn get(&self, id: &str) -> Option<&SectionDescriptor> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Move focus to `id`. Focusing the layout start, or an id the layout does
    /// not know, keeps the current section active. Returns whether the active
    /// section changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if id == SCROLL_START || self.get(id).is_none() || self.active == id {
            return false;
        }
        self.active = id.to_string();
        true
    }

    /// One section rendered as a card.
    pub fn card(&self, section: &SectionDescriptor, resume: &Resume) -> Payload {
        let status = if section.id == self.active {
            "Active section"
        } else {
            "Scroll or run the command to focus this section."
        };
        let mut blocks = vec![
            Block::Title(section.title.clone()),
            Block::Label(format!("Command: {}", section.command)),
            Block::Paragraph(section.summary.clone()),
        ];
        blocks.push(Block::Card(section_body(&section.id, resume)));
        blocks.push(Block::Note(status.to_string()));
        Payload::info(blocks)
    }

    /// Every section, in order.
    pub fn render(&self, resume: &Resume) -> Vec<Payload> {
        self.sections.iter().map(|s| self.card(s, resume)).collect()
    }
}
