use chrono::Local;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Folders searched for a font given only by file name.
pub const SYSTEM_FONT_DIRS: &[&str] = &[
    "C:\\Windows\\Fonts",
    "/usr/share/fonts",
    "/usr/local/share/fonts",
    "/Library/Fonts",
    "/System/Library/Fonts",
];

/// Offset that centers `inner` inside `outer`, rounding down.
pub fn centered_offset(outer: i32, inner: i32) -> i32 {
    (outer - inner).div_euclid(2)
}

/// Prefixes a message with the local wall-clock time, e.g. `[14:03:59] ...`.
pub fn log_line(message: &str) -> String {
    format!("[{}] {}", Local::now().format("%H:%M:%S"), message)
}

/// Resolves a bare font file name the way desktop toolkits do: the working
/// directory first, then every system font folder (recursively, ignoring case).
pub fn find_font_file(name: &str) -> Option<PathBuf> {
    let dirs: Vec<&Path> = SYSTEM_FONT_DIRS.iter().map(Path::new).collect();
    find_font_file_in(name, Path::new("."), &dirs)
}

/// Same lookup as `find_font_file` with explicit folders.
pub fn find_font_file_in(name: &str, working_dir: &Path, font_dirs: &[&Path]) -> Option<PathBuf> {
    let local = working_dir.join(name);
    if local.is_file() {
        return Some(local);
    }

    font_dirs.iter().find_map(|dir| {
        WalkDir::new(dir)
            .follow_links(true)
            .into_iter()
            .filter_map(Result::ok)
            .find(|entry| {
                entry.file_type().is_file()
                    && entry.file_name().to_string_lossy().eq_ignore_ascii_case(name)
            })
            .map(|entry| entry.into_path())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("icon2048_utils_{}_{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn centered_offset_floors_odd_remainders() {
        assert_eq!(centered_offset(128, 80), 24);
        assert_eq!(centered_offset(128, 53), 37);
        assert_eq!(centered_offset(128, 128), 0);
        assert_eq!(centered_offset(128, 131), -2);
    }

    #[test]
    fn log_line_has_timestamp_prefix() {
        let line = log_line("font loaded");
        assert!(line.starts_with('['));
        assert_eq!(&line[9..], "] font loaded");
    }

    #[test]
    fn working_directory_wins_over_font_dirs() {
        let root = scratch_dir("local");
        let fonts = root.join("fonts");
        fs::create_dir_all(&fonts).unwrap();
        fs::write(root.join("arial.ttf"), b"local").unwrap();
        fs::write(fonts.join("arial.ttf"), b"system").unwrap();

        let found = find_font_file_in("arial.ttf", &root, &[fonts.as_path()]);
        assert_eq!(found, Some(root.join("arial.ttf")));
        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn font_dirs_are_searched_recursively_ignoring_case() {
        let root = scratch_dir("nested");
        let nested = root.join("fonts").join("truetype").join("msttcorefonts");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("Arial.TTF"), b"system").unwrap();

        let missing = root.join("missing");
        let fonts = root.join("fonts");
        let found = find_font_file_in("arial.ttf", &root.join("cwd"), &[missing.as_path(), fonts.as_path()]);
        assert_eq!(found, Some(nested.join("Arial.TTF")));
        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn unknown_font_is_not_found() {
        let root = scratch_dir("none");
        assert_eq!(find_font_file_in("nope.ttf", &root, &[root.as_path()]), None);
        fs::remove_dir_all(&root).unwrap();
    }
}
