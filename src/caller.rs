//! Call-site resolution.
//!
//! Every public emission method is `#[track_caller]`, so the location of the
//! user's call is available without walking the stack. A non-zero caller depth
//! means "report the frame `depth` levels above that call", which needs a real
//! stack walk. That walk is best-effort: without debug info it fails and the
//! source segment is simply left out of the header.

use std::borrow::Cow;
use std::fmt;
use std::panic::Location;
use std::path::Path;

/// A resolved source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    /// Source file as recorded by the compiler or the debug info
    pub file: Cow<'static, str>,
    /// 1-based line number
    pub line: u32,
}

impl CallSite {
    pub fn new(file: impl Into<Cow<'static, str>>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// Call site recorded by `#[track_caller]`.
    pub fn from_location(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }

    /// `<parent-directory>/<file-name>`, or just the file name at the root.
    pub fn short_path(&self) -> String {
        short_path(&self.file)
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.short_path(), self.line)
    }
}

/// Reduce a path to its last two components.
pub fn short_path(file: &str) -> String {
    let path = Path::new(file);
    let Some(name) = path.file_name() else {
        return file.to_string();
    };
    match path.parent().and_then(Path::file_name) {
        Some(dir) => format!("{}/{}", dir.to_string_lossy(), name.to_string_lossy()),
        None => name.to_string_lossy().into_owned(),
    }
}

/// Resolve the call site `depth` frames above `origin`.
///
/// Depth 0 is `origin` itself and never fails.
pub fn resolve(origin: &'static Location<'static>, depth: usize) -> Option<CallSite> {
    if depth == 0 {
        return Some(CallSite::from_location(origin));
    }
    walk_from(origin, depth)
}

fn walk_from(origin: &'static Location<'static>, depth: usize) -> Option<CallSite> {
    let backtrace = backtrace::Backtrace::new();
    let origin_file = Path::new(origin.file());

    // Inlined calls show up as extra symbols on one frame, so iterate symbols,
    // not frames, to get the logical call chain.
    let mut sources = backtrace
        .frames()
        .iter()
        .flat_map(|frame| frame.symbols())
        .filter_map(|symbol| Some((symbol.filename()?.to_path_buf(), symbol.lineno()?)));

    sources.find(|(file, line)| *line == origin.line() && file.ends_with(origin_file))?;

    let (file, line) = sources.nth(depth - 1)?;
    Some(CallSite::new(file.to_string_lossy().into_owned(), line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn here() -> &'static Location<'static> {
        Location::caller()
    }

    #[test]
    fn test_short_path_keeps_parent_dir() {
        assert_eq!(short_path("/home/user/project/src/main.rs"), "src/main.rs");
        assert_eq!(short_path("src/logger/core.rs"), "logger/core.rs");
        assert_eq!(short_path("tests/emit.rs"), "tests/emit.rs");
    }

    #[test]
    fn test_short_path_without_parent() {
        assert_eq!(short_path("main.rs"), "main.rs");
        assert_eq!(short_path(""), "");
    }

    #[test]
    fn test_depth_zero_is_track_caller_location() {
        let location = here();
        let site = resolve(location, 0).expect("depth 0 always resolves");
        assert_eq!(site.line, location.line());
        assert_eq!(site.file, location.file());
        assert_eq!(site.short_path(), "src/caller.rs");
    }

    #[test]
    fn test_display_formats_short_path_and_line() {
        let site = CallSite::new("/a/b/c/file.rs", 42);
        assert_eq!(site.to_string(), "c/file.rs:42");
    }

    #[inline(never)]
    fn one_frame_up() -> Option<CallSite> {
        resolve(Location::caller(), 1)
    }

    #[test]
    fn test_depth_one_reports_the_calling_function() {
        let site = one_frame_up();
        let expected_line = line!() - 1;
        // Stack walking needs debug info; without it the site is omitted.
        if let Some(site) = site {
            assert!(site.file.ends_with("caller.rs"), "got {}", site.file);
            assert_eq!(site.line, expected_line);
        }
    }

    fn returned_location() -> &'static Location<'static> {
        here()
    }

    #[test]
    fn test_origin_not_on_stack_does_not_resolve() {
        let stale = returned_location();
        assert!(resolve(stale, 3).is_none());
    }
}
