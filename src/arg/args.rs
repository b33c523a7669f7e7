use crate::extensions::enums::valid_csv;
use std::fmt;
use std::marker::PhantomData;

use crate::core::types::{Bool, ClockTime, ExportTarget, Flag, Url, Weekday};
use crate::errors::{Error, Result};

#[derive(Debug, Clone)]
pub enum Arg {
    Flag(Flag),
    Weekday(Weekday),
    ClockTime(ClockTime),
    Bool(Bool),
    Int(i32),
    Url(Url),
    Locator(String),
    ExportTarget(ExportTarget),
    Name(String),
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Flag(x) => write!(f, "{x}"),
            Arg::Weekday(x) => write!(f, "{x}"),
            Arg::ClockTime(x) => write!(f, "{x}"),
            Arg::Bool(x) => write!(f, "{x}"),
            Arg::Int(x) => write!(f, "{x}"),
            Arg::Url(x) => write!(f, "{x}"),
            Arg::Locator(x) => write!(f, "{x}"),
            Arg::ExportTarget(x) => write!(f, "{x}"),
            Arg::Name(x) => write!(f, "\"{x}\""),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TokenStream {
    toks: Vec<String>,
    i: usize,
}
impl TokenStream {
    pub fn new(raw: &[String]) -> Self {
        Self {
            toks: raw.to_vec(),
            i: 0,
        }
    }
    pub fn eof(&self) -> bool {
        self.i >= self.toks.len()
    }
    pub fn peek(&self) -> Result<&str> {
        self.toks
            .get(self.i)
            .map(|s| s.as_str())
            .ok_or_else(|| Error::Parse("EOF".into()))
    }
    pub fn next(&mut self) -> Result<String> {
        let s = self.peek()?.to_string();
        self.i += 1;
        Ok(s)
    }
}

pub trait SingleTokenArg {
    fn accepts(tok: &str) -> bool;
    fn new(tok: &str) -> Result<Arg>;
}

pub trait MultiTokenArg: SingleTokenArg {
    fn starts_sequence(tok: &str) -> bool;
}

pub trait ArgFactory {
    fn can_start(&self, tok: &str) -> bool;
    fn parse(&self, ts: &mut TokenStream) -> Result<Arg>;
}

pub struct SingleTokenFactory<A: SingleTokenArg>(PhantomData<A>);
impl<A: SingleTokenArg> SingleTokenFactory<A> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}
impl<A: SingleTokenArg> ArgFactory for SingleTokenFactory<A> {
    fn can_start(&self, tok: &str) -> bool {
        A::accepts(tok)
    }
    fn parse(&self, ts: &mut TokenStream) -> Result<Arg> {
        let tok = ts.next()?;
        A::new(&tok)
    }
}

pub struct MultiTokenFactory<A: MultiTokenArg>(PhantomData<A>);
impl<A: MultiTokenArg> MultiTokenFactory<A> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}
impl<A: MultiTokenArg> ArgFactory for MultiTokenFactory<A> {
    fn can_start(&self, tok: &str) -> bool {
        A::starts_sequence(tok)
    }
    fn parse(&self, ts: &mut TokenStream) -> Result<Arg> {
        let mut buf: Vec<String> = vec![ts.next()?];
        loop {
            let joined = buf.join(" ");
            if A::accepts(&joined) {
                return A::new(&joined);
            }
            if ts.eof() {
                return A::new(&joined);
            }
            buf.push(ts.next()?);
        }
    }
}

/// Quoted course names; quotes may span several whitespace tokens.
pub struct NameArg;
impl MultiTokenArg for NameArg {
    fn starts_sequence(value: &str) -> bool {
        !value.is_empty() && matches!(value.as_bytes()[0], b'\'' | b'"')
    }
}

impl SingleTokenArg for NameArg {
    fn accepts(value: &str) -> bool {
        if value.len() < 2 {
            return false;
        }
        let q = value.as_bytes()[0] as char;
        if q != '\'' && q != '"' {
            return false;
        }
        if !value.ends_with(q) {
            return false;
        }
        !value[1..value.len() - 1].is_empty()
    }
    fn new(value: &str) -> Result<Arg> {
        if !Self::accepts(value) {
            return Err(Error::Parse(
                "Name must contain text wrapped in single or double quotes.".into(),
            ));
        }
        Ok(Arg::Name(value[1..value.len() - 1].to_string()))
    }
}

pub struct WeekdayArg;
impl SingleTokenArg for WeekdayArg {
    fn accepts(value: &str) -> bool {
        Weekday::try_from(value).is_ok()
    }
    fn new(value: &str) -> Result<Arg> {
        Ok(Arg::Weekday(Weekday::try_from(value)?))
    }
}

pub struct ClockTimeArg;
impl SingleTokenArg for ClockTimeArg {
    fn accepts(value: &str) -> bool {
        ClockTime::try_from_str(value).is_ok()
    }
    fn new(value: &str) -> Result<Arg> {
        Ok(Arg::ClockTime(ClockTime::try_from_str(value)?))
    }
}

pub struct BoolArg;
impl SingleTokenArg for BoolArg {
    fn accepts(value: &str) -> bool {
        Bool::try_from_str(value).is_ok()
    }
    fn new(value: &str) -> Result<Arg> {
        Ok(Arg::Bool(Bool::try_from_str(value)?))
    }
}

pub struct IntArg;
impl SingleTokenArg for IntArg {
    fn accepts(value: &str) -> bool {
        !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
    }
    fn new(value: &str) -> Result<Arg> {
        value
            .parse::<i32>()
            .map(Arg::Int)
            .map_err(|_| Error::Parse(format!("Expected an integer, got '{}'", value)))
    }
}

pub struct UrlArg;
impl SingleTokenArg for UrlArg {
    fn accepts(value: &str) -> bool {
        Url::is_valid(value)
    }
    fn new(value: &str) -> Result<Arg> {
        Ok(Arg::Url(Url::try_from_str(value)?))
    }
}

/// Bare page-locator expressions. Anything slash-rooted qualifies; the full
/// value stays one whitespace-free token (XPath steps contain none).
pub struct LocatorArg;
impl SingleTokenArg for LocatorArg {
    fn accepts(value: &str) -> bool {
        value.starts_with('/') && value.len() > 1
    }
    fn new(value: &str) -> Result<Arg> {
        if !Self::accepts(value) {
            return Err(Error::Parse(format!(
                "Invalid locator: '{}'. Expected a slash-rooted expression such as /html/body/div[1].",
                value
            )));
        }
        Ok(Arg::Locator(value.to_string()))
    }
}

pub struct ExportTargetArg;
impl SingleTokenArg for ExportTargetArg {
    fn accepts(value: &str) -> bool {
        ExportTarget::try_from(value).is_ok()
    }
    fn new(value: &str) -> Result<Arg> {
        Ok(Arg::ExportTarget(ExportTarget::try_from(value)?))
    }
}

pub struct FlagArg;
impl SingleTokenArg for FlagArg {
    fn accepts(value: &str) -> bool {
        Flag::try_from(value).is_ok()
    }
    fn new(value: &str) -> Result<Arg> {
        Ok(Arg::Flag(Flag::try_from(value).map_err(|_| {
            Error::Parse(format!(
                "Invalid flag: {}. Valid flags: {}",
                value,
                valid_csv::<Flag>()
            ))
        })?))
    }
}
