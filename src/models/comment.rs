use serde::{Deserialize, Serialize};

/// One blog comment recovered from an archive block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub datetime: Datetime,
    pub name: String,
    pub message: String,
}

/// Send date of a comment, as written in its `Date:` header
///
/// Values are taken verbatim from the header; a day of 32 or an hour of 25 is
/// carried through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Datetime {
    pub day: u32,
    pub month: String,
    pub year: i32,
    pub time: Time,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Time {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub timezone: String,
}

impl Comment {
    pub fn new(
        id: impl Into<String>,
        datetime: Datetime,
        name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self { id: id.into(), datetime, name: name.into(), message: message.into() }
    }
}

impl Datetime {
    pub fn new(day: u32, month: impl Into<String>, year: i32, time: Time) -> Self {
        Self { day, month: month.into(), year, time }
    }
}

impl Time {
    pub fn new(hours: u32, minutes: u32, seconds: u32, timezone: impl Into<String>) -> Self {
        Self { hours, minutes, seconds, timezone: timezone.into() }
    }
}
