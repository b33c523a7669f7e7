use crate::arg::arg_matcher::ArgMatcher;
use crate::arg::args::{
    Arg, BoolArg, ClockTimeArg, ExportTargetArg, IntArg, NameArg, UrlArg, WeekdayArg,
};
use crate::core::types::{Bool, ClockTime, ExportTarget, Url, Weekday};
use crate::errors::Result;

/// Typed access to one positional argument. `try_extract_at` is the
/// fallible form used by commands to validate their argument shape.
pub trait ArgExtractor<'a>: ArgMatcher {
    type Out;

    fn try_extract(actual: &'a Arg) -> Option<Self::Out>;
}

/// Extract position `idx` or fail with the matcher's expected-type error.
pub fn try_extract_at<'a, E: ArgExtractor<'a>>(args: &'a [Arg], idx: usize) -> Result<E::Out> {
    let a = &args[idx];
    E::try_extract(a).ok_or_else(|| E::expected_error(a))
}

impl<'a> ArgExtractor<'a> for NameArg {
    type Out = &'a String;
    fn try_extract(a: &'a Arg) -> Option<Self::Out> {
        match a {
            Arg::Name(s) => Some(s),
            _ => None,
        }
    }
}

impl<'a> ArgExtractor<'a> for IntArg {
    type Out = i32;
    fn try_extract(a: &'a Arg) -> Option<Self::Out> {
        match a {
            Arg::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl<'a> ArgExtractor<'a> for WeekdayArg {
    type Out = Weekday; // Copy
    fn try_extract(a: &'a Arg) -> Option<Self::Out> {
        match a {
            Arg::Weekday(d) => Some(*d),
            _ => None,
        }
    }
}

impl<'a> ArgExtractor<'a> for ClockTimeArg {
    type Out = ClockTime; // Copy
    fn try_extract(a: &'a Arg) -> Option<Self::Out> {
        match a {
            Arg::ClockTime(t) => Some(*t),
            _ => None,
        }
    }
}

impl<'a> ArgExtractor<'a> for BoolArg {
    type Out = Bool; // Copy
    fn try_extract(a: &'a Arg) -> Option<Self::Out> {
        match a {
            Arg::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl<'a> ArgExtractor<'a> for UrlArg {
    type Out = &'a Url;
    fn try_extract(a: &'a Arg) -> Option<Self::Out> {
        match a {
            Arg::Url(u) => Some(u),
            _ => None,
        }
    }
}

impl<'a> ArgExtractor<'a> for ExportTargetArg {
    type Out = ExportTarget; // Copy
    fn try_extract(a: &'a Arg) -> Option<Self::Out> {
        match a {
            Arg::ExportTarget(t) => Some(*t),
            _ => None,
        }
    }
}
