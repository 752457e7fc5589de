//! printf-style positional substitution
//!
//! Renders a template such as `"%20s | %-8s | %s"` against an ordered list
//! of string arguments. Only string verbs are meaningful since every layout
//! field resolves to text; malformed placeholders degrade into visible
//! `%!` diagnostics instead of failing.

use std::fmt::Write;
use std::iter::Peekable;
use std::str::Chars;

/// Widths and precisions stop parsing once they grow past this value
pub const MAX_NUMBER: usize = 1_000_000;

/// An oversized width or precision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TooLarge;

/// A parsed `%[flags][width][.precision]verb` placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Spec {
    left_align: bool,
    zero_pad: bool,
    width: Option<usize>,
    precision: Option<usize>,
    verb: char,
}

impl Spec {
    fn pad(&self, value: &str) -> String {
        let value: String = match self.precision {
            Some(precision) => value.chars().take(precision).collect(),
            None => value.to_string(),
        };

        let len = value.chars().count();
        let width = match self.width {
            Some(width) if width > len => width,
            _ => return value,
        };

        let fill = width - len;
        if self.left_align {
            format!("{}{}", value, " ".repeat(fill))
        } else {
            let pad = if self.zero_pad { "0" } else { " " };
            format!("{}{}", pad.repeat(fill), value)
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Token {
    Literal(char),
    /// `%%`
    Percent,
    Placeholder(Spec),
    /// A `%` with nothing after it, or with an oversized number
    NoVerb,
}

struct Tokens<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Tokens<'a> {
    fn new(template: &'a str) -> Self {
        Self {
            chars: template.chars().peekable(),
        }
    }

    /// Parse a width or precision. A number past [`MAX_NUMBER`] swallows
    /// the rest of the template and yields `Err`.
    fn number(&mut self) -> Result<Option<usize>, TooLarge> {
        let mut value: Option<usize> = None;
        while let Some(digit) = self.chars.peek().and_then(|c| c.to_digit(10)) {
            let current = value.unwrap_or(0);
            if current > MAX_NUMBER {
                self.chars.by_ref().for_each(drop);
                return Err(TooLarge);
            }
            self.chars.next();
            value = Some(current * 10 + digit as usize);
        }
        Ok(value)
    }

    fn placeholder(&mut self) -> Token {
        let mut spec = Spec::default();

        while let Some(&flag) = self.chars.peek() {
            match flag {
                '-' => spec.left_align = true,
                '0' => spec.zero_pad = true,
                '+' | ' ' | '#' => {}
                _ => break,
            }
            self.chars.next();
        }

        spec.width = match self.number() {
            Ok(width) => width,
            Err(TooLarge) => return Token::NoVerb,
        };

        if self.chars.peek() == Some(&'.') {
            self.chars.next();
            spec.precision = match self.number() {
                Ok(precision) => Some(precision.unwrap_or(0)),
                Err(TooLarge) => return Token::NoVerb,
            };
        }

        match self.chars.next() {
            Some('%') => Token::Percent,
            Some(verb) => {
                spec.verb = verb;
                Token::Placeholder(spec)
            }
            None => Token::NoVerb,
        }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        match self.chars.next()? {
            '%' => Some(self.placeholder()),
            c => Some(Token::Literal(c)),
        }
    }
}

/// Number of arguments `template` consumes
#[must_use]
pub fn placeholder_count(template: &str) -> usize {
    Tokens::new(template)
        .filter(|token| matches!(token, Token::Placeholder(_)))
        .count()
}

/// Substitute `args` into `template` positionally.
///
/// Supported verbs are `s` and `v` (the value as is) and `q` (quoted).
/// Width pads on the left, or on the right with the `-` flag; precision
/// truncates. Both count characters.
#[must_use]
pub fn sprintf<S: AsRef<str>>(template: &str, args: &[S]) -> String {
    let mut out = String::with_capacity(template.len() + args.iter().map(|a| a.as_ref().len()).sum::<usize>());
    let mut args = args.iter().map(AsRef::as_ref);

    for token in Tokens::new(template) {
        match token {
            Token::Literal(c) => out.push(c),
            Token::Percent => out.push('%'),
            Token::NoVerb => out.push_str("%!(NOVERB)"),
            Token::Placeholder(spec) => match args.next() {
                None => {
                    let _ = write!(out, "%!{}(MISSING)", spec.verb);
                }
                Some(arg) => match spec.verb {
                    's' | 'v' => out.push_str(&spec.pad(arg)),
                    'q' => out.push_str(&spec.pad(&format!("{:?}", arg))),
                    verb => {
                        let _ = write!(out, "%!{}(string={})", verb, arg);
                    }
                },
            },
        }
    }

    let extra: Vec<String> = args.map(|arg| format!("string={}", arg)).collect();
    if !extra.is_empty() {
        let _ = write!(out, "%!(EXTRA {})", extra.join(", "));
    }

    out
}
