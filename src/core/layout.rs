//! Record layout: field codes and line rendering
//!
//! A layout template mixes literal text with field codes followed by printf
//! modifiers, e.g. `"%(t)s | %(n)20s | %(l)8s | %(m)s"`.
//!
//! | Code   | Field                                       |
//! |--------|---------------------------------------------|
//! | `%(t)` | time, rendered with the date format         |
//! | `%(n)` | logger name                                 |
//! | `%(f)` | name of the function that issued the call   |
//! | `%(l)` | level name                                  |
//! | `%(m)` | message                                     |
//!
//! Each code becomes a bare `%`, so `%(n)20s` turns into `%20s` and takes
//! the logger name as its argument.

use super::caller::{CallerResolver, CALL_SITE_SKIP};
use super::log_level::LogLevel;
use super::printf;
use super::timestamp::{self, Timestamp};

/// A record attribute addressable from a layout template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Time,
    Name,
    Function,
    Level,
    Message,
}

impl Field {
    fn from_code(code: u8) -> Option<Self> {
        match code {
            b't' => Some(Field::Time),
            b'n' => Some(Field::Name),
            b'f' => Some(Field::Function),
            b'l' => Some(Field::Level),
            b'm' => Some(Field::Message),
            _ => None,
        }
    }

    /// Match a 4-byte `%(x)` code at the start of `text`
    fn at_start(text: &str) -> Option<Self> {
        match text.as_bytes() {
            [b'%', b'(', code, b')', ..] => Self::from_code(*code),
            _ => None,
        }
    }

    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Field::Time => "%(t)",
            Field::Name => "%(n)",
            Field::Function => "%(f)",
            Field::Level => "%(l)",
            Field::Message => "%(m)",
        }
    }
}

/// The values a layout draws from
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub name: &'a str,
    pub level: LogLevel,
    pub message: &'a str,
    pub timestamp: &'a Timestamp,
}

/// A parsed layout template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    template: String,
    fields: Vec<Field>,
}

impl Layout {
    /// Split `format` into a printf template and the ordered field list.
    ///
    /// The scan moves in 4-character windows over recognized codes and one
    /// character at a time otherwise, so field order always matches
    /// placeholder order in the template.
    #[must_use]
    pub fn parse(format: &str) -> Self {
        let mut template = String::with_capacity(format.len());
        let mut fields = Vec::new();
        let mut rest = format;

        while !rest.is_empty() {
            if let Some(field) = Field::at_start(rest) {
                template.push('%');
                fields.push(field);
                rest = &rest[4..];
                continue;
            }

            let mut chars = rest.chars();
            if let Some(c) = chars.next() {
                template.push(c);
            }
            rest = chars.as_str();
        }

        Self { template, fields }
    }

    /// The printf template left after stripping field codes
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Fields in the order they appear
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Resolve every field of `record` in template order
    pub fn arguments<C>(&self, record: &Record<'_>, date_format: &str, caller: &C) -> Vec<String>
    where
        C: CallerResolver + ?Sized,
    {
        self.fields
            .iter()
            .map(|field| match field {
                Field::Time => timestamp::render(record.timestamp, date_format),
                Field::Name => record.name.to_string(),
                Field::Function => caller.function_name(CALL_SITE_SKIP),
                Field::Level => record.level.to_str().to_string(),
                Field::Message => record.message.to_string(),
            })
            .collect()
    }

    /// Render one log line
    pub fn render<C>(&self, record: &Record<'_>, date_format: &str, caller: &C) -> String
    where
        C: CallerResolver + ?Sized,
    {
        let args = self.arguments(record, date_format, caller);
        printf::sprintf(&self.template, args.as_slice())
    }
}

/// Parse `format` and render `record` with it
pub fn render<C>(record: &Record<'_>, format: &str, date_format: &str, caller: &C) -> String
where
    C: CallerResolver + ?Sized,
{
    Layout::parse(format).render(record, date_format, caller)
}
