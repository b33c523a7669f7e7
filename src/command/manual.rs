use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display as DisplayDerive, EnumIter as EnumIterDerive, EnumString};

use crate::core::types::TypeHelpCommand;
use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, DisplayDerive, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum ManualTopic {
    General,
    Add,
    Del,
    Link,
    Unlink,
    Show,
    Export,
    Reset,
    Credentials,
    Config,
    Log,
    Man,
    Time,
    Url,
}

impl ManualTopic {
    pub fn try_from(input: &str) -> Result<Self> {
        Self::from_str(input).map_err(|_| {
            Error::Parse(format!(
                "Unsupported manual topic: '{}'. Valid topics: {}",
                input.trim(),
                valid_csv::<ManualTopic>()
            ))
        })
    }
}

#[derive(Debug, Clone)]
pub struct ManualSection {
    title: String,
    body: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ManualPage {
    name: String,
    summary: String,
    sections: Vec<ManualSection>,
}

impl ManualPage {
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_section(
            "NAME",
            &[format!("{} - {}", self.name, self.summary)],
            &mut out,
        );
        for section in &self.sections {
            self.write_section(&section.title, &section.body, &mut out);
        }
        out.trim_end().to_string()
    }

    fn write_section(&self, title: &str, lines: &[String], out: &mut String) {
        out.push_str(&title.to_uppercase());
        out.push('\n');
        for line in lines {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
    }
}

pub struct ManualPageBuilder {
    name: String,
    summary: String,
    sections: Vec<ManualSection>,
}

impl ManualPageBuilder {
    pub fn new(name: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            summary: summary.into(),
            sections: Vec::new(),
        }
    }

    pub fn section(mut self, title: &str, body: Vec<String>) -> Self {
        self.sections.push(ManualSection {
            title: title.to_string(),
            body,
        });
        self
    }

    pub fn build(self) -> ManualPage {
        ManualPage {
            name: self.name,
            summary: self.summary,
            sections: self.sections,
        }
    }
}

pub struct ManualCatalog;

impl ManualCatalog {
    pub fn new() -> Self {
        Self
    }

    pub fn page_for(&self, topic: Option<&str>) -> Result<ManualPage> {
        let topic = match topic {
            None => ManualTopic::General,
            Some(name) => ManualTopic::try_from(name)?,
        };
        Ok(self.build_page(topic))
    }

    pub fn topics(&self) -> Vec<String> {
        ManualTopic::iter().map(|t| t.to_string()).collect()
    }

    fn build_page(&self, topic: ManualTopic) -> ManualPage {
        match topic {
            ManualTopic::General => self.general_page(),
            ManualTopic::Add => self.simple_page(
                "add",
                "Add a course entry to a weekday.",
                vec!["add <day> \"<course>\" <start> <end> [true|false]".to_string()],
                vec![
                    "Times accept 24-hour or 12-hour clock formats; see 'man time'.".to_string(),
                    "The trailing boolean enables per-course notifications (default False)."
                        .to_string(),
                    "A course may be scheduled several times, on any days.".to_string(),
                ],
            ),
            ManualTopic::Del => self.simple_page(
                "del",
                "Remove one schedule entry.",
                vec!["del <day> <number>".to_string()],
                vec![
                    "Entry numbers are the ones printed by 'show'.".to_string(),
                    "Removing the last entry for a course also drops the course and its link."
                        .to_string(),
                ],
            ),
            ManualTopic::Link => self.simple_page(
                "link",
                "Store the link value for a scheduled course.",
                vec!["link \"<course>\" <value>".to_string()],
                vec![
                    "The value is a URL or an XPath, per the configured metadata kind."
                        .to_string(),
                    "Course names must match the schedule exactly.".to_string(),
                ],
            ),
            ManualTopic::Unlink => self.simple_page(
                "unlink",
                "Remove the stored link for a course.",
                vec!["unlink \"<course>\"".to_string()],
                vec!["The course itself stays scheduled.".to_string()],
            ),
            ManualTopic::Show => self.simple_page(
                "show",
                "Display the current schedule and links.",
                vec!["show".to_string()],
                vec!["Prints one table per weekday plus the link table.".to_string()],
            ),
            ManualTopic::Export => self.simple_page(
                "export",
                "Write the YAML artifacts.",
                vec!["export <schedule|metadata>".to_string()],
                vec![
                    "'schedule' writes course_details.yaml to the exports directory.".to_string(),
                    "'metadata' writes course_url.yaml or course_xpath.yaml, depending on config."
                        .to_string(),
                ],
            ),
            ManualTopic::Reset => self.simple_page(
                "reset",
                "Clear the whole session.",
                vec!["reset".to_string()],
                vec!["Courses, schedule entries, and links are cleared together.".to_string()],
            ),
            ManualTopic::Credentials => self.simple_page(
                "credentials",
                "Enter LMS credentials and write the .env file.",
                vec!["credentials".to_string()],
                vec![
                    "Opens an interactive form for the LMS id, password, and webhook URL."
                        .to_string(),
                    "The file is written in plaintext; keep it out of version control."
                        .to_string(),
                ],
            ),
            ManualTopic::Config => self.simple_page(
                "config",
                "View or edit configuration values.",
                vec!["config".to_string()],
                vec![
                    "Opens an interactive configuration editor.".to_string(),
                    "Press enter to accept a selection and update a value.".to_string(),
                ],
            ),
            ManualTopic::Log => self.simple_page(
                "log",
                "Print the current session log to the console.",
                vec!["log".to_string()],
                vec![
                    "Shows the session log file contents if it exists.".to_string(),
                    "Does not create a log file when one is missing.".to_string(),
                ],
            ),
            ManualTopic::Man => self.simple_page(
                "man",
                "Show manual pages for commands and topics.",
                vec!["man [topic]".to_string()],
                vec![
                    format!("Topics: {}", self.topics().join(", ")),
                    "Use 'man' with no topic for the general manual.".to_string(),
                ],
            ),
            ManualTopic::Time => self.type_help_page(TypeHelpCommand::Time),
            ManualTopic::Url => self.type_help_page(TypeHelpCommand::Url),
        }
    }

    fn general_page(&self) -> ManualPage {
        ManualPageBuilder::new("courseplan", "Course schedule YAML generator.")
            .section("SYNOPSIS", vec!["<command> [args]".to_string()])
            .section("COMMANDS", general_command_lines())
            .section(
                "TOPICS",
                vec![
                    "Use 'man <topic>' for command-specific details.".to_string(),
                    format!("Available topics: {}", self.topics().join(", ")),
                ],
            )
            .build()
    }

    fn simple_page(
        &self,
        name: &str,
        summary: &str,
        synopsis: Vec<String>,
        description: Vec<String>,
    ) -> ManualPage {
        ManualPageBuilder::new(name, summary)
            .section("SYNOPSIS", synopsis)
            .section("DESCRIPTION", description)
            .build()
    }

    fn type_help_page(&self, kind: TypeHelpCommand) -> ManualPage {
        ManualPageBuilder::new(kind.to_string(), "Type helper command.")
            .section("SYNOPSIS", vec![kind.to_string()])
            .section("DESCRIPTION", vec![kind.usage()])
            .build()
    }
}

impl Default for ManualCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn general_command_lines() -> Vec<String> {
    vec![
        "add <day> \"<course>\" <start> <end> [true|false]  # Add a course entry".to_string(),
        "del <day> <number>                      # Remove a schedule entry".to_string(),
        "link \"<course>\" <value>                 # Store a course link".to_string(),
        "unlink \"<course>\"                       # Remove a course link".to_string(),
        "show                                    # Display schedule and links".to_string(),
        "export <schedule|metadata>              # Write the YAML files".to_string(),
        "reset                                   # Clear the session".to_string(),
        "credentials                             # Write the credentials file".to_string(),
        "config                                  # View or edit config".to_string(),
        "log                                     # Print the session log".to_string(),
        "man [topic]                             # Show manual pages".to_string(),
        "time | url                              # Type helper commands".to_string(),
    ]
}
