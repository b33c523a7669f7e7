use crate::arg::args::{
    Arg, BoolArg, ClockTimeArg, ExportTargetArg, FlagArg, IntArg, LocatorArg, NameArg, UrlArg,
    WeekdayArg,
};
use crate::core::types::{BoolFormat, ExportTarget, Flag, Weekday};
use crate::errors::Error;
use crate::extensions::enums::valid_csv;

pub trait ArgMatcher {
    fn matches_variant(actual: &Arg) -> bool;
    fn expected_error(provided: &Arg) -> Error;
}

impl ArgMatcher for NameArg {
    fn matches_variant(actual: &Arg) -> bool {
        matches!(actual, Arg::Name(_))
    }
    fn expected_error(provided: &Arg) -> Error {
        Error::Parse(format!("Expected a quoted name, got {}", provided))
    }
}

impl ArgMatcher for IntArg {
    fn matches_variant(a: &Arg) -> bool {
        matches!(a, Arg::Int(_))
    }
    fn expected_error(provided: &Arg) -> Error {
        Error::Parse(format!("Expected an integer, got {:?}", provided))
    }
}

impl ArgMatcher for WeekdayArg {
    fn matches_variant(actual: &Arg) -> bool {
        matches!(actual, Arg::Weekday(_))
    }
    fn expected_error(provided: &Arg) -> Error {
        Error::Parse(format!(
            "Expected a day of the week, got {:?}. Valid days: {}",
            provided,
            valid_csv::<Weekday>()
        ))
    }
}

impl ArgMatcher for ClockTimeArg {
    fn matches_variant(actual: &Arg) -> bool {
        matches!(actual, Arg::ClockTime(_))
    }
    fn expected_error(provided: &Arg) -> Error {
        Error::Parse(format!(
            "Expected a clock time such as 12:05, got {:?}.",
            provided
        ))
    }
}

impl ArgMatcher for BoolArg {
    fn matches_variant(actual: &Arg) -> bool {
        matches!(actual, Arg::Bool(_))
    }
    fn expected_error(provided: &Arg) -> Error {
        Error::Parse(format!(
            "Expected a boolean, got {:?}. Valid booleans: {}",
            provided,
            valid_csv::<BoolFormat>()
        ))
    }
}

impl ArgMatcher for UrlArg {
    fn matches_variant(actual: &Arg) -> bool {
        matches!(actual, Arg::Url(_))
    }
    fn expected_error(provided: &Arg) -> Error {
        Error::Parse(format!(
            "Expected a URL such as https://example.com/course, got {:?}.",
            provided
        ))
    }
}

impl ArgMatcher for LocatorArg {
    fn matches_variant(actual: &Arg) -> bool {
        matches!(actual, Arg::Locator(_))
    }
    fn expected_error(provided: &Arg) -> Error {
        Error::Parse(format!(
            "Expected a slash-rooted locator expression, got {:?}.",
            provided
        ))
    }
}

impl ArgMatcher for ExportTargetArg {
    fn matches_variant(actual: &Arg) -> bool {
        matches!(actual, Arg::ExportTarget(_))
    }
    fn expected_error(provided: &Arg) -> Error {
        Error::Parse(format!(
            "Expected an export target, got {:?}. Valid targets: {}",
            provided,
            valid_csv::<ExportTarget>()
        ))
    }
}

impl ArgMatcher for FlagArg {
    fn matches_variant(actual: &Arg) -> bool {
        matches!(actual, Arg::Flag(_))
    }
    fn expected_error(provided: &Arg) -> Error {
        Error::Parse(format!(
            "Expected a flag, got {:?}. Valid flags: {}",
            provided,
            valid_csv::<Flag>()
        ))
    }
}
