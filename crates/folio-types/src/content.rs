//! Résumé content model.
//!
//! Mirrors the JSON layout of `content/resume.json`. Every field is required
//! except `DateRange::label` and `Certification::credential_id`; unknown keys
//! are ignored. Semantic checks (email shape, link URLs) live in
//! [`crate::validate`].

use serde::{Deserialize, Serialize};

/// Sample résumé shipped with the repository.
pub const EMBEDDED_RESUME: &str = include_str!("../../../content/resume.json");

/// A start/end pair with an optional preformatted label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl DateRange {
    /// The label if present, otherwise `start – end`.
    pub fn display(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!("{} – {}", self.start, self.end),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub links: Vec<ContactLink>,
}

impl Contact {
    /// Phone number with spaces and dashes stripped, for `tel:` links.
    pub fn dial_string(&self) -> String {
        self.phone
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub headline: String,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub location: String,
    pub degree: String,
    pub range: DateRange,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: String,
    pub title: String,
    pub organization: String,
    pub location: String,
    pub range: DateRange,
    pub summary: String,
    pub achievements: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub id: String,
    pub name: String,
    pub timeframe: String,
    pub problem: String,
    pub solution: String,
    pub impact: String,
    pub tech: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub issued: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub label: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeMeta {
    pub tagline: String,
    pub location: String,
    pub availability: String,
    pub last_updated: String,
}

/// The full résumé document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
    pub contact: Contact,
    pub about: About,
    pub education: Education,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<Certification>,
    pub skills: Vec<SkillCategory>,
    pub meta: ResumeMeta,
}
