//! Command definitions, the built-in registry, and name/alias resolution.
//!
//! The registry is an ordered list of definitions plus a dictionary mapping
//! every lower-cased name and alias to the owning definition. Both are built
//! once and never mutated afterwards.

use std::collections::HashMap;
use std::fmt;

use folio_types::error::{FolioError, Result};

/// Section id used by `scroll` to focus the top of the résumé layout.
pub const SCROLL_START: &str = "scroll-start";

/// Names of the built-in commands the dispatcher special-cases.
pub mod names {
    pub const HELP: &str = "help";
    pub const ABOUT: &str = "about";
    pub const EXPERIENCE: &str = "experience";
    pub const PROJECTS: &str = "projects";
    pub const EDUCATION: &str = "education";
    pub const CERTIFICATIONS: &str = "certifications";
    pub const SKILLS: &str = "skills";
    pub const CONTACT: &str = "contact";
    pub const SCROLL: &str = "scroll";
    pub const CLEAR: &str = "clear";
    pub const TOGGLE: &str = "toggle";
    pub const DOWNLOAD: &str = "download";
}

/// Commands offered as one-keystroke chips beneath the prompt.
pub const PRIMARY_COMMANDS: [&str; 7] = [
    names::HELP,
    names::ABOUT,
    names::EXPERIENCE,
    names::PROJECTS,
    names::SKILLS,
    names::CONTACT,
    names::SCROLL,
];

/// Grouping shown in `help` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandCategory {
    Core,
    Section,
    Utility,
    Contact,
}

impl CommandCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Section => "section",
            Self::Utility => "utility",
            Self::Contact => "contact",
        }
    }
}

impl fmt::Display for CommandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user-invokable command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDefinition {
    /// Primary name (what autocomplete offers).
    pub name: String,
    /// One-line description for `help`.
    pub description: String,
    pub category: CommandCategory,
    /// Alternate spellings resolving to this command.
    pub aliases: Vec<String>,
    /// Section that receives focus when this command resolves.
    pub related_section: Option<String>,
}

impl CommandDefinition {
    pub fn new(name: &str, description: &str, category: CommandCategory) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            category,
            aliases: Vec::new(),
            related_section: None,
        }
    }

    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn with_section(mut self, section_id: &str) -> Self {
        self.related_section = Some(section_id.to_string());
        self
    }
}

/// The built-in command table, in display order.
pub fn builtin_commands() -> Vec<CommandDefinition> {
    use CommandCategory::*;
    vec![
        CommandDefinition::new(
            names::HELP,
            "List all available commands and keyboard shortcuts.",
            Core,
        )
        .with_aliases(&["?"]),
        CommandDefinition::new(
            names::ABOUT,
            "Read the background summary and current focus areas.",
            Section,
        )
        .with_section("about"),
        CommandDefinition::new(
            names::EXPERIENCE,
            "Review the professional timeline and key achievements.",
            Section,
        )
        .with_section("experience"),
        CommandDefinition::new(
            names::PROJECTS,
            "Explore highlighted builds with context, impact, and tech stacks.",
            Section,
        )
        .with_section("projects"),
        CommandDefinition::new(
            names::EDUCATION,
            "View academic background and relevant highlights.",
            Section,
        )
        .with_section("education"),
        CommandDefinition::new(
            names::CERTIFICATIONS,
            "See certifications and credentials with issue dates.",
            Section,
        )
        .with_section("certifications"),
        CommandDefinition::new(
            names::SKILLS,
            "Browse technical proficiencies organized by category.",
            Section,
        )
        .with_section("skills"),
        CommandDefinition::new(
            names::CONTACT,
            "Retrieve contact details and quick links.",
            Contact,
        )
        .with_section("contact"),
        CommandDefinition::new(
            names::SCROLL,
            "Jump focus to the scrollable résumé layout.",
            Utility,
        )
        .with_aliases(&["view"])
        .with_section(SCROLL_START),
        CommandDefinition::new(names::CLEAR, "Clear the terminal output window.", Utility),
        CommandDefinition::new(
            names::TOGGLE,
            "Switch between terminal-only and hybrid layouts.",
            Utility,
        ),
        CommandDefinition::new(
            names::DOWNLOAD,
            "Instructions to download a PDF copy of the résumé.",
            Utility,
        )
        .with_aliases(&["download resume", "resume"]),
    ]
}

/// Trim and lower-case raw input.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Ordered command table with a derived name/alias dictionary.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: Vec<CommandDefinition>,
    dictionary: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Build a registry, rejecting empty or colliding names and aliases.
    pub fn new(commands: Vec<CommandDefinition>) -> Result<Self> {
        let mut dictionary = HashMap::new();
        for (idx, cmd) in commands.iter().enumerate() {
            for key in std::iter::once(&cmd.name).chain(cmd.aliases.iter()) {
                let key = normalize(key);
                if key.is_empty() {
                    return Err(FolioError::Registry(format!(
                        "command '{}' has an empty name or alias",
                        cmd.name
                    )));
                }
                if let Some(&owner) = dictionary.get(&key) {
                    let owner: &CommandDefinition = &commands[owner];
                    return Err(FolioError::Registry(format!(
                        "'{key}' is claimed by both '{}' and '{}'",
                        owner.name, cmd.name
                    )));
                }
                dictionary.insert(key, idx);
            }
        }
        log::debug!(
            "Command registry built: {} commands, {} keys",
            commands.len(),
            dictionary.len()
        );
        Ok(Self {
            commands,
            dictionary,
        })
    }

    /// Registry holding [`builtin_commands`].
    pub fn builtin() -> Result<Self> {
        Self::new(builtin_commands())
    }

    /// Resolve raw input against names and aliases (exact match after
    /// trimming and lower-casing). Empty input resolves to nothing.
    pub fn resolve(&self, input: &str) -> Option<&CommandDefinition> {
        let key = normalize(input);
        if key.is_empty() {
            return None;
        }
        self.dictionary.get(&key).map(|&idx| &self.commands[idx])
    }

    /// All definitions in registry order.
    pub fn commands(&self) -> &[CommandDefinition] {
        &self.commands
    }

    /// Definitions named in [`PRIMARY_COMMANDS`], in registry order.
    pub fn primary_commands(&self) -> Vec<&CommandDefinition> {
        self.commands
            .iter()
            .filter(|c| PRIMARY_COMMANDS.contains(&c.name.as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reg() -> CommandRegistry {
        CommandRegistry::builtin().unwrap()
    }

    #[test]
    fn builtin_has_twelve_commands_in_order() {
        let reg = reg();
        let names: Vec<&str> = reg.commands().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "help",
                "about",
                "experience",
                "projects",
                "education",
                "certifications",
                "skills",
                "contact",
                "scroll",
                "clear",
                "toggle",
                "download"
            ]
        );
    }

    #[test]
    fn every_alias_resolves_to_its_owner() {
        let reg = reg();
        for cmd in reg.commands() {
            assert_eq!(reg.resolve(&cmd.name), Some(cmd));
            for alias in &cmd.aliases {
                assert_eq!(reg.resolve(alias), Some(cmd), "alias {alias}");
            }
        }
    }

    #[test]
    fn resolution_trims_and_lowercases() {
        let reg = reg();
        assert_eq!(reg.resolve(" Help ").unwrap().name, "help");
        assert_eq!(reg.resolve("HELP").unwrap().name, "help");
        assert_eq!(reg.resolve("  Download Resume\t").unwrap().name, "download");
        assert_eq!(reg.resolve("VIEW").unwrap().name, "scroll");
    }

    #[test]
    fn no_partial_matching() {
        let reg = reg();
        assert!(reg.resolve("hel").is_none());
        assert!(reg.resolve("download res").is_none());
        assert!(reg.resolve("helpme").is_none());
    }

    #[test]
    fn empty_input_resolves_to_nothing() {
        let reg = reg();
        assert!(reg.resolve("").is_none());
        assert!(reg.resolve("   ").is_none());
    }

    #[test]
    fn alias_collision_is_rejected() {
        let cmds = vec![
            CommandDefinition::new("help", "h", CommandCategory::Core).with_aliases(&["?"]),
            CommandDefinition::new("hint", "h", CommandCategory::Core).with_aliases(&["?"]),
        ];
        let err = CommandRegistry::new(cmds).unwrap_err();
        assert!(format!("{err}").contains("'?'"));
    }

    #[test]
    fn case_insensitive_name_collision_is_rejected() {
        let cmds = vec![
            CommandDefinition::new("about", "a", CommandCategory::Section),
            CommandDefinition::new("x", "x", CommandCategory::Utility).with_aliases(&["ABOUT"]),
        ];
        assert!(CommandRegistry::new(cmds).is_err());
    }

    #[test]
    fn empty_alias_is_rejected() {
        let cmds = vec![CommandDefinition::new("a", "a", CommandCategory::Core).with_aliases(&[" "])];
        assert!(CommandRegistry::new(cmds).is_err());
    }

    #[test]
    fn key_count_covers_names_and_aliases() {
        let reg = reg();
        let expected: usize = reg.commands().iter().map(|c| 1 + c.aliases.len()).sum();
        assert_eq!(reg.dictionary.len(), expected);
    }

    #[test]
    fn primary_commands_follow_registry_order() {
        let reg = reg();
        let names: Vec<&str> = reg
            .primary_commands()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(
            names,
            ["help", "about", "experience", "projects", "skills", "contact", "scroll"]
        );
    }

    #[test]
    fn scroll_focuses_scroll_start() {
        let reg = reg();
        assert_eq!(
            reg.resolve("scroll").unwrap().related_section.as_deref(),
            Some(SCROLL_START)
        );
    }

    #[test]
    fn category_display() {
        assert_eq!(CommandCategory::Contact.to_string(), "contact");
        assert_eq!(CommandCategory::Core.as_str(), "core");
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn padding_and_case_never_change_resolution(
                idx in 0usize..12,
                left in "[ \t]{0,4}",
                right in "[ \t]{0,4}",
                upper in any::<bool>(),
            ) {
                let reg = reg();
                let name = reg.commands()[idx].name.clone();
                let cased = if upper { name.to_uppercase() } else { name.clone() };
                let input = format!("{left}{cased}{right}");
                prop_assert_eq!(
                    reg.resolve(&input).map(|c| c.name.as_str()),
                    Some(name.as_str())
                );
            }

            #[test]
            fn normalize_is_idempotent(s in "[ A-Za-z?]{0,20}") {
                let once = normalize(&s);
                prop_assert_eq!(normalize(&once), once.clone());
            }
        }
    }
}
