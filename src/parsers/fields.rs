use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::models::{Comment, Datetime, Time};

// Send date: day, month, year, hours, minutes, seconds, timezone
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^Date: .*?([0-9]{1,2}) ([A-Za-z]{3}) ([0-9]+) ([0-9]+):([0-9]+):([0-9]+) ([+-][0-9]{4})",
    )
    .expect("date pattern is valid")
});

static ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Message-id: <([^>]*)>").expect("id pattern is valid"));

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Name</strong>: ([^<]+)</p>").expect("name pattern is valid"));

// Shortest body: stops at the first closing paragraph after the name
static MESSAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Name</strong>:.*?</p><p>([\s\S]+?)</p>").expect("message pattern is valid")
});

/// A field of a comment block, named as in the JSON output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Date,
    Id,
    Name,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Date => "date",
            Field::Id => "id",
            Field::Name => "name",
            Field::Message => "message",
        };
        f.write_str(name)
    }
}

/// Why a comment block could not be turned into a [`Comment`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("missing {0} field")]
    MissingField(Field),

    #[error("{component} '{value}' in date header does not fit a number")]
    InvalidNumber { component: &'static str, value: String },
}

/// Extract a comment from a single archive block
///
/// Each field is taken from the first match in the block; later repeats are ignored.
/// Values are returned exactly as matched: HTML entities and whitespace are kept.
///
/// # Errors
///
/// Returns [`ExtractError::MissingField`] for the first of date, id, name and message
/// (in that order) that has no match, and [`ExtractError::InvalidNumber`] when a date
/// digit run overflows its integer type.
pub fn extract_comment(block: &str) -> Result<Comment, ExtractError> {
    let datetime = extract_datetime(block)?;
    let id = first_capture(&ID_RE, block, Field::Id)?;
    let name = first_capture(&NAME_RE, block, Field::Name)?;
    let message = first_capture(&MESSAGE_RE, block, Field::Message)?;

    Ok(Comment::new(id, datetime, name, message))
}

fn extract_datetime(block: &str) -> Result<Datetime, ExtractError> {
    let caps = DATE_RE.captures(block).ok_or(ExtractError::MissingField(Field::Date))?;

    let time = Time::new(
        parse_number(&caps[4], "hours")?,
        parse_number(&caps[5], "minutes")?,
        parse_number(&caps[6], "seconds")?,
        &caps[7],
    );

    let day = parse_number(&caps[1], "day")?;
    let year = parse_number(&caps[3], "year")?;

    Ok(Datetime::new(day, &caps[2], year, time))
}

fn first_capture<'a>(re: &Regex, block: &'a str, field: Field) -> Result<&'a str, ExtractError> {
    re.captures(block)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or(ExtractError::MissingField(field))
}

fn parse_number<T: FromStr>(digits: &str, component: &'static str) -> Result<T, ExtractError> {
    digits
        .parse()
        .map_err(|_| ExtractError::InvalidNumber { component, value: digits.to_string() })
}
