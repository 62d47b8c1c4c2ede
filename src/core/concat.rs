use crate::utils::error::Result;
use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Always included, even inside excluded directories.
const SPECIAL_FILES: &[&str] = &["Dockerfile", "docker-compose.yml"];

const SOURCE_EXTENSIONS: &[&str] = &["py", "js", "dart"];

const EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    "android",
    "build",
    "web",
    "test",
    ".idea",
    ".dart_tool",
];

/// Summary of a concatenation run.
#[derive(Debug, Clone)]
pub struct ConcatSummary {
    pub output_path: PathBuf,
    pub files_written: usize,
    pub files_skipped: usize,
}

/// Decides whether a file belongs in the concatenated artifact.
///
/// `Dockerfile` and `docker-compose.yml` always qualify. Otherwise the
/// extension must be on the source allow-list and no ancestor directory may
/// be on the exclusion list. Exclusion matches whole path segments, not
/// substrings, so `latest.py` is kept while `node_modules/c.js` is dropped.
pub fn is_important_file(path: &Path) -> bool {
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        if SPECIAL_FILES.contains(&name) {
            return true;
        }
    }

    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    if !SOURCE_EXTENSIONS.contains(&ext) {
        return false;
    }

    !in_excluded_dir(path)
}

fn in_excluded_dir(path: &Path) -> bool {
    let Some(parent) = path.parent() else {
        return false;
    };

    parent.components().any(|component| match component {
        Component::Normal(segment) => segment
            .to_str()
            .is_some_and(|s| EXCLUDED_DIRS.contains(&s)),
        _ => false,
    })
}

/// Walks `root` and writes every important file into one text artifact:
/// a `# <path>` header, the file content, then a blank-line separator,
/// in traversal order. The artifact is created inside `root` and replaces
/// any previous run's output.
///
/// Files that cannot be read (binary content, permissions) are reported on
/// standard error and skipped; the run continues.
pub fn concatenate_important_files(root: &Path, output_filename: &str) -> Result<ConcatSummary> {
    let output_path = root.join(output_filename);
    let mut outfile = fs::File::create(&output_path)?;

    let mut files_written = 0;
    let mut files_skipped = 0;

    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if path == output_path {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        if !is_important_file(relative) {
            continue;
        }

        match fs::read_to_string(path) {
            Ok(content) => {
                writeln!(outfile, "# {}", relative.display())?;
                outfile.write_all(content.as_bytes())?;
                outfile.write_all(b"\n\n")?;
                files_written += 1;
            }
            Err(e) => {
                eprintln!("Error reading file {}: {}", path.display(), e);
                files_skipped += 1;
            }
        }
    }

    Ok(ConcatSummary {
        output_path,
        files_written,
        files_skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_files_always_important() {
        assert!(is_important_file(Path::new("Dockerfile")));
        assert!(is_important_file(Path::new("b/Dockerfile")));
        assert!(is_important_file(Path::new("docker-compose.yml")));
        // Even inside an excluded directory.
        assert!(is_important_file(Path::new("node_modules/Dockerfile")));
    }

    #[test]
    fn test_source_extensions() {
        assert!(is_important_file(Path::new("a.py")));
        assert!(is_important_file(Path::new("src/app.js")));
        assert!(is_important_file(Path::new("lib/main.dart")));

        assert!(!is_important_file(Path::new("README.md")));
        assert!(!is_important_file(Path::new("main.rs")));
        assert!(!is_important_file(Path::new("Makefile")));
    }

    #[test]
    fn test_excluded_directories_match_segments() {
        assert!(!is_important_file(Path::new("b/node_modules/c.js")));
        assert!(!is_important_file(Path::new("src/test/helpers.py")));
        assert!(!is_important_file(Path::new(".idea/settings.py")));
        assert!(!is_important_file(Path::new("app/build/gen.dart")));
    }

    #[test]
    fn test_substring_of_excluded_name_does_not_match() {
        // The old substring rule dropped these; segment matching keeps them.
        assert!(is_important_file(Path::new("latest.py")));
        assert!(is_important_file(Path::new("mytest/a.py")));
        assert!(is_important_file(Path::new("testing/b.js")));
        assert!(is_important_file(Path::new("webapp/c.js")));
    }

    #[test]
    fn test_file_named_like_excluded_dir_is_kept() {
        // Only directory segments are checked, never the file name itself.
        assert!(is_important_file(Path::new("test.py")));
        assert!(is_important_file(Path::new("src/build.py")));
    }
}
