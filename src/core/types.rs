use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum GlobalCommand {
    #[strum(serialize = "show", to_string = "show")]
    Show,
    #[strum(serialize = "export", to_string = "export")]
    Export,
    #[strum(serialize = "reset", to_string = "reset")]
    Reset,
    #[strum(serialize = "credentials", to_string = "credentials")]
    Credentials,
    #[strum(serialize = "config", to_string = "config")]
    Config,
    #[strum(serialize = "log", to_string = "log")]
    Log,
    #[strum(serialize = "man", to_string = "man")]
    Man,
}

impl GlobalCommand {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "Unsupported global command: '{}'. Valid global commands: {}",
                s.trim(),
                valid_csv::<GlobalCommand>()
            ))
        })
    }
}

/// Verbs that act on one schedule entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum EntryAction {
    #[strum(serialize = "add", to_string = "add")]
    Add,
    #[strum(serialize = "del", serialize = "remove", to_string = "del")]
    Remove,
}

impl EntryAction {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "Unsupported action: '{}'. Valid actions: {}",
                s.trim(),
                valid_csv::<EntryAction>()
            ))
        })
    }
}

/// Verbs that act on the per-course metadata mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum MetadataAction {
    #[strum(serialize = "link", to_string = "link")]
    Link,
    #[strum(serialize = "unlink", to_string = "unlink")]
    Unlink,
}

impl MetadataAction {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "Unsupported action: '{}'. Valid actions: {}",
                s.trim(),
                valid_csv::<MetadataAction>()
            ))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum TypeHelpCommand {
    #[strum(serialize = "time", to_string = "time")]
    Time,
    #[strum(serialize = "url", to_string = "url")]
    Url,
}

impl TypeHelpCommand {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "Unsupported type help command: '{}'. Valid type help commands: {}",
                s.trim(),
                valid_csv::<TypeHelpCommand>()
            ))
        })
    }

    pub fn usage(&self) -> String {
        match self {
            TypeHelpCommand::Time => ClockTime::usage(),
            TypeHelpCommand::Url => Url::usage(),
        }
    }
}

/// The five weekdays a course can be scheduled on. Display form is the
/// YAML mapping key (`Monday`, `Tuesday`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum Weekday {
    #[strum(serialize = "mon", serialize = "monday", serialize = "mon.", to_string = "Monday")]
    Monday,
    #[strum(serialize = "tue", serialize = "tuesday", serialize = "tue.", to_string = "Tuesday")]
    Tuesday,
    #[strum(
        serialize = "wed",
        serialize = "wednesday",
        serialize = "wed.",
        to_string = "Wednesday"
    )]
    Wednesday,
    #[strum(
        serialize = "thu",
        serialize = "thursday",
        serialize = "thu.",
        to_string = "Thursday"
    )]
    Thursday,
    #[strum(serialize = "fri", serialize = "friday", serialize = "fri.", to_string = "Friday")]
    Friday,
}

impl Weekday {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "Invalid day of the week: '{}'. Valid days: {}",
                s.trim(),
                valid_csv::<Weekday>()
            ))
        })
    }
}

/// A single clock time with no date or timezone component.
///
/// Accepted inputs, tried in order: 24-hour `HH:MM`, 12-hour `H:MM`,
/// 24-hour `HH:MM:SS`, 12-hour `H:MM:SS`. 12-hour inputs carry no meridian
/// and are read as morning times. The canonical rendering is 24-hour `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime(pub NaiveTime);

#[derive(Copy, Clone, Debug, EnumIterDerive, AsRefStr)]
pub enum ClockFormat {
    #[strum(serialize = "%H:%M")]
    Hm24,
    #[strum(serialize = "%I:%M %p")]
    Hm12,
    #[strum(serialize = "%H:%M:%S")]
    Hms24,
    #[strum(serialize = "%I:%M:%S %p")]
    Hms12,
}

impl ClockFormat {
    fn is_twelve_hour(self) -> bool {
        matches!(self, ClockFormat::Hm12 | ClockFormat::Hms12)
    }

    /// chrono refuses `%I` without a meridian, so the 12-hour formats get a
    /// morning suffix appended to the token before parsing.
    fn build_parse_spec(self, raw_token: &str) -> ClockParseSpec {
        let token = raw_token.trim();
        let input = if self.is_twelve_hour() {
            format!("{token} AM")
        } else {
            token.to_owned()
        };
        ClockParseSpec {
            input,
            clock_format: self,
        }
    }
}

#[derive(Debug, Clone)]
struct ClockParseSpec {
    input: String,
    clock_format: ClockFormat,
}

impl ClockTime {
    pub fn try_from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        for f in ClockFormat::iter() {
            let spec = f.build_parse_spec(s);
            if let Ok(t) = NaiveTime::parse_from_str(&spec.input, spec.clock_format.as_ref()) {
                return Ok(ClockTime(t));
            }
        }
        Err(Error::Validation(Self::error_message(s)))
    }

    pub fn usage() -> String {
        "Supported time formats: HH:MM (24-hour), H:MM, HH:MM:SS, H:MM:SS. \
         12-hour inputs are read as morning times. Example: 12:05"
            .to_string()
    }

    fn error_message(input: &str) -> String {
        format!("Invalid time format: '{}'. {}", input, Self::usage())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^https?://(?:(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+[A-Z]{2,6}\.?|localhost|\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})(?::\d+)?(?:/?|[/?]\S+)$",
    )
    .expect("URL pattern must compile")
});

/// A syntactically valid `http`/`https` URL. Matching is case-insensitive
/// and anchored at both ends; the host must be a dotted name with a 2-6
/// letter top-level label, `localhost`, or a dotted-quad address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Url(String);

impl Url {
    pub fn is_valid(s: &str) -> bool {
        URL_PATTERN.is_match(s)
    }

    pub fn try_from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if Self::is_valid(s) {
            Ok(Url(s.to_string()))
        } else {
            Err(Error::Validation(Self::error_message(s)))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn usage() -> String {
        "A URL must start with http:// or https:// followed by a hostname, \
         localhost, or a numeric address, with an optional port and path. \
         Example: https://example.com/course"
            .to_string()
    }

    fn error_message(input: &str) -> String {
        format!("Invalid URL: '{}'. {}", input, Self::usage())
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which auxiliary value the metadata section collects per course.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MetadataKind {
    #[strum(serialize = "url", to_string = "url")]
    Url,
    #[strum(serialize = "xpath", to_string = "xpath")]
    Xpath,
}

impl MetadataKind {
    pub fn help(&self) -> &'static str {
        match self {
            MetadataKind::Url => "Each course links to a destination URL.",
            MetadataKind::Xpath => "Each course links to a page-locator (XPath) expression.",
        }
    }

    /// Label used in prompts and tables for the linked value.
    pub fn value_label(&self) -> &'static str {
        match self {
            MetadataKind::Url => "URL",
            MetadataKind::Xpath => "XPath",
        }
    }

    pub fn export_file_name(&self) -> &'static str {
        match self {
            MetadataKind::Url => "course_url.yaml",
            MetadataKind::Xpath => "course_xpath.yaml",
        }
    }

    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "Invalid metadata kind: '{}'. Valid kinds: {}",
                s.trim(),
                valid_csv::<MetadataKind>()
            ))
        })
    }
}

/// What the `export` command writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum ExportTarget {
    #[strum(serialize = "schedule", to_string = "schedule")]
    Schedule,
    #[strum(serialize = "metadata", serialize = "links", to_string = "metadata")]
    Metadata,
}

impl ExportTarget {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "Invalid export target: '{}'. Valid targets: {}",
                s.trim(),
                valid_csv::<ExportTarget>()
            ))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum BoolFormat {
    #[strum(serialize = "true", serialize = "True", to_string = "True")]
    TextTrue,

    #[strum(serialize = "false", serialize = "False", to_string = "False")]
    TextFalse,
}

impl BoolFormat {
    #[inline]
    fn to_bool(self) -> bool {
        matches!(self, BoolFormat::TextTrue)
    }
}

/// Boolean with the capitalized `True`/`False` text form the exported YAML
/// requires. Downstream consumers expect exactly this casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bool(pub bool);

impl Bool {
    pub fn try_from_str(s: &str) -> Result<Self> {
        match BoolFormat::from_str(s) {
            Ok(fmt) => Ok(Bool(fmt.to_bool())),
            Err(_) => Err(Error::Parse(format!(
                "Invalid string value for boolean: '{}'. Valid values: {}",
                s,
                valid_csv::<BoolFormat>()
            ))),
        }
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.0 { "True" } else { "False" })
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Bool, <D as Deserializer<'de>>::Error> {
        let b = String::deserialize(deserializer)?;
        Bool::try_from_str(&b).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum Flag {
    #[strum(serialize = "-h", serialize = "-help", to_string = "-h")]
    Help,
}

impl Flag {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "Invalid flag: '{}'. Valid flags: {}",
                s.trim(),
                valid_csv::<Flag>()
            ))
        })
    }
}
