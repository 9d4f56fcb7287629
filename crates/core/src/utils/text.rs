use std::path::{Component, Path, PathBuf};

/// Separators accepted between test-file patterns
const PATTERN_SEPARATORS: &[char] = &[' ', '\t', '\r', '\n'];

/// Trim a value and turn blank strings into `None`
pub fn fix_empty_and_trim(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Split a whitespace-separated pattern list into its tokens
pub fn split_patterns(patterns: &str) -> impl Iterator<Item = &str> {
    patterns
        .split(PATTERN_SEPARATORS)
        .filter(|token| !token.is_empty())
}

/// Drop the Windows verbatim prefix that `canonicalize` adds.
///
/// `\\?\C:\ws` becomes `C:\ws` and `\\?\UNC\host\share` becomes
/// `\\host\share`. Anything else is returned unchanged.
pub fn simplify_path(path: &Path) -> PathBuf {
    let Some(text) = path.to_str() else {
        return path.to_path_buf();
    };
    if let Some(rest) = text.strip_prefix(r"\\?\UNC\") {
        return PathBuf::from(format!(r"\\{rest}"));
    }
    match text.strip_prefix(r"\\?\") {
        Some(rest) if rest.as_bytes().get(1) == Some(&b':') => PathBuf::from(rest),
        _ => path.to_path_buf(),
    }
}

/// Express `path` relative to `base`, using `/` as separator.
///
/// Relative paths are resolved against `base` first. A path that does not
/// live under `base` is returned as-is.
pub fn relativize(base: &Path, path: &Path) -> String {
    let base = simplify_path(base);
    let joined = base.join(simplify_path(path));
    match joined.strip_prefix(&base) {
        Ok(rel) => rel
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                Component::ParentDir => Some("..".to_string()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => joined.to_string_lossy().into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix_empty_and_trim() {
        assert_eq!(fix_empty_and_trim(None), None);
        assert_eq!(fix_empty_and_trim(Some("")), None);
        assert_eq!(fix_empty_and_trim(Some("  \t\n")), None);
        assert_eq!(
            fix_empty_and_trim(Some("  x64 ")),
            Some("x64".to_string())
        );
    }

    #[test]
    fn test_split_patterns() {
        let tokens: Vec<_> = split_patterns(" a/*.dll\tb/*.dll\r\n\nc.dll ").collect();
        assert_eq!(tokens, vec!["a/*.dll", "b/*.dll", "c.dll"]);
        assert_eq!(split_patterns("   ").count(), 0);
    }

    #[test]
    fn test_relativize() {
        let base = PathBuf::from("/ws");
        assert_eq!(
            relativize(&base, Path::new("/ws/TestResults/run.coverage")),
            "TestResults/run.coverage"
        );
        assert_eq!(
            relativize(&base, Path::new("out/run.coverage")),
            "out/run.coverage"
        );
        assert_eq!(
            relativize(&base, Path::new("/elsewhere/run.coverage")),
            "/elsewhere/run.coverage"
        );
    }

    #[test]
    fn test_simplify_path() {
        assert_eq!(
            simplify_path(Path::new(r"\\?\C:\ws")),
            PathBuf::from(r"C:\ws")
        );
        assert_eq!(
            simplify_path(Path::new(r"\\?\UNC\build\share\ws")),
            PathBuf::from(r"\\build\share\ws")
        );
        assert_eq!(simplify_path(Path::new("/ws")), PathBuf::from("/ws"));
        assert_eq!(
            simplify_path(Path::new(r"\\?\Volume{x}\ws")),
            PathBuf::from(r"\\?\Volume{x}\ws")
        );
    }

    #[cfg(windows)]
    #[test]
    fn test_relativize_against_canonical_workspace() {
        assert_eq!(
            relativize(
                Path::new(r"\\?\C:\ws"),
                Path::new(r"C:\ws\TestResults\run.coverage")
            ),
            "TestResults/run.coverage"
        );
        assert_eq!(
            relativize(Path::new(r"C:\ws"), Path::new(r"TestResults\run.coverage")),
            "TestResults/run.coverage"
        );
    }
}
