//! Call-site resolution.

use sitelog_types::{CallSite, CallSiteResolver, Frame};
use std::path::{Path, PathBuf};

/// Function name used when a frame has no named function.
pub const ANONYMOUS_FUNCTION: &str = "main";

/// Resolves frames relative to a root directory.
///
/// Absolute file paths under the root are shortened to a relative path;
/// anything else is kept as reported. Function paths are reduced to their
/// innermost named segment.
///
/// `file!()` and `Location::file()` report paths relative to the directory
/// the crate was built from, not the runtime working directory. Those
/// relative paths pass through unchanged; only absolute paths (such as
/// dependencies compiled from outside the workspace) are shortened.
#[derive(Debug, Clone)]
pub struct WorkingDirResolver {
    root: PathBuf,
}

impl WorkingDirResolver {
    /// Resolve relative to the current working directory.
    pub fn new() -> Self {
        Self::with_root(std::env::current_dir().unwrap_or_default())
    }

    /// Resolve relative to `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn relativize(&self, file: &str) -> String {
        let path = Path::new(file);
        if path.is_absolute() {
            if let Ok(relative) = path.strip_prefix(&self.root) {
                return relative.to_string_lossy().into_owned();
            }
        }
        file.to_string()
    }
}

impl Default for WorkingDirResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CallSiteResolver for WorkingDirResolver {
    fn resolve(&self, frame: &Frame<'_>) -> CallSite {
        CallSite {
            file: self.relativize(frame.file),
            line: frame.line,
            function: short_function_name(frame.function).to_string(),
        }
    }
}

/// Innermost named segment of a function path.
///
/// `app::worker::run::{{closure}}` becomes `run`; a missing or empty path
/// becomes [`ANONYMOUS_FUNCTION`].
pub fn short_function_name(path: Option<&str>) -> &str {
    path.into_iter()
        .flat_map(|p| p.rsplit("::"))
        .find(|segment| !segment.is_empty() && *segment != "{{closure}}")
        .unwrap_or(ANONYMOUS_FUNCTION)
}

/// Fully-qualified path of the enclosing function, e.g. `app::worker::run`.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __type_name_of(__here);
        name.strip_suffix("::__here").unwrap_or(name)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_path_under_root() {
        let resolver = WorkingDirResolver::with_root("/srv/app");
        let site = resolver.resolve(&Frame::new("/srv/app/src/jobs/sync.rs", 88, Some("app::jobs::sync")));

        assert_eq!(site.file, "src/jobs/sync.rs");
        assert_eq!(site.line, 88);
        assert_eq!(site.function, "sync");
    }

    #[test]
    fn test_paths_outside_root_kept() {
        let resolver = WorkingDirResolver::with_root("/srv/app");

        let site = resolver.resolve(&Frame::new("/opt/other/lib.rs", 1, None));
        assert_eq!(site.file, "/opt/other/lib.rs");

        let site = resolver.resolve(&Frame::new("src/main.rs", 3, None));
        assert_eq!(site.file, "src/main.rs");
    }

    #[test]
    fn test_compiler_relative_path_unchanged() {
        let resolver = WorkingDirResolver::new();
        let site = resolver.resolve(&Frame::new(file!(), line!(), None));

        assert_eq!(site.file, file!());
        assert!(site.file.ends_with("src/callsite.rs"));
    }

    #[test]
    fn test_anonymous_function_is_main() {
        assert_eq!(short_function_name(None), "main");
        assert_eq!(short_function_name(Some("")), "main");
        assert_eq!(short_function_name(Some("{{closure}}")), "main");
    }

    #[test]
    fn test_closures_are_skipped() {
        assert_eq!(short_function_name(Some("app::serve::{{closure}}::{{closure}}")), "serve");
        assert_eq!(short_function_name(Some("handle")), "handle");
    }

    #[test]
    fn test_function_name_macro() {
        let name = crate::function_name!();
        assert!(name.ends_with("test_function_name_macro"), "got {}", name);
        assert_eq!(short_function_name(Some(name)), "test_function_name_macro");

        let from_closure = (|| crate::function_name!())();
        assert_eq!(short_function_name(Some(from_closure)), "test_function_name_macro");
    }
}
