//! Caller identity for the `%(f)` layout field
//!
//! The function that issued a log call is captured where the call is
//! written: [`call_site!`](crate::call_site) records the fully qualified path
//! of the enclosing function at compile time, and resolution later strips
//! the frames that belong to the capture machinery itself.

use std::panic::Location;

/// Frames added by [`function_name!`](crate::function_name) on top of the
/// calling function: the marker fn it declares.
pub const CALL_SITE_SKIP: usize = 1;

/// Rendered when nothing is known about the caller
pub const UNKNOWN_FUNCTION: &str = "unknown";

/// Resolves the name of the function that invoked a logging call.
///
/// `skip` is the number of innermost frames to discard before naming the
/// caller. Resolvers that already hold a final name ignore it.
pub trait CallerResolver {
    fn function_name(&self, skip: usize) -> String;
}

/// A call site captured by [`call_site!`](crate::call_site)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    function: &'static str,
    file: &'static str,
    line: u32,
    module_path: &'static str,
}

impl CallSite {
    #[must_use]
    pub fn new(function: &'static str, file: &'static str, line: u32, module_path: &'static str) -> Self {
        Self {
            function,
            file,
            line,
            module_path,
        }
    }

    /// Full frame path, including the capture marker
    #[must_use]
    pub fn raw_function(&self) -> &'static str {
        self.function
    }

    #[must_use]
    pub fn file(&self) -> &'static str {
        self.file
    }

    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[must_use]
    pub fn module_path(&self) -> &'static str {
        self.module_path
    }
}

impl CallerResolver for CallSite {
    fn function_name(&self, skip: usize) -> String {
        let frames = split_frames(self.function);
        if skip >= frames.len() {
            return UNKNOWN_FUNCTION.to_string();
        }
        frames[..frames.len() - skip].join("::")
    }
}

/// An explicit caller name
impl CallerResolver for str {
    fn function_name(&self, _skip: usize) -> String {
        self.to_string()
    }
}

impl CallerResolver for String {
    fn function_name(&self, _skip: usize) -> String {
        self.clone()
    }
}

/// Source location of a `#[track_caller]` entry point, rendered as `file:line`
impl CallerResolver for Location<'_> {
    fn function_name(&self, _skip: usize) -> String {
        format!("{}:{}", self.file(), self.line())
    }
}

/// No caller information
#[derive(Debug, Clone, Copy, Default)]
pub struct UnknownCaller;

impl CallerResolver for UnknownCaller {
    fn function_name(&self, _skip: usize) -> String {
        UNKNOWN_FUNCTION.to_string()
    }
}

/// Split a type path into frames on `::`, ignoring separators nested in
/// generic arguments (`Vec<alloc::string::String>`).
fn split_frames(path: &str) -> Vec<&str> {
    let mut frames = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let bytes = path.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                frames.push(&path[start..i]);
                i += 2;
                start = i;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    frames.push(&path[start..]);

    frames
}
