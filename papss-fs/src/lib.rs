//! Capability-based output file helpers built on `cap-std` and `camino`.
//!
//! Report writers in the CLI hand a UTF-8 path to [`create_utf8_file`], which
//! creates any missing parent directories before truncating or creating the
//! file itself.
#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use std::io;
use std::path::Component;

/// Create (or truncate) a file, creating its parent directories first.
///
/// # Errors
/// Returns an IO error when the path has no file name or when a directory or
/// the file cannot be created.
pub fn create_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    ensure_parent_dir(path)?;
    let (dir, file_name) = open_dir_and_file(path)?;
    dir.create(file_name.as_str())
}

/// Ensure the parent directory for `path` exists, handling absolute paths safely for cap-std.
///
/// # Errors
/// Returns an IO error when the base directory cannot be opened or a
/// component cannot be created.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() || parent == Utf8Path::new("/") {
        return Ok(());
    }

    let (base_dir, relative) = base_dir_and_relative(parent)?;
    if relative.as_os_str().is_empty() {
        return Ok(());
    }
    base_dir.create_dir_all(&relative)
}

fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("output path {path} has no file name")))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Split a parent path into an ambient base directory and a relative suffix.
fn base_dir_and_relative(parent: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let std_parent = parent.as_std_path();

    let (base, relative) = match std_parent.components().next() {
        // Windows drive or UNC prefix.
        Some(Component::Prefix(prefix)) => {
            let prefix_str = prefix
                .as_os_str()
                .to_str()
                .ok_or_else(|| io::Error::other("non-UTF-8 path prefix"))?;

            let base = Utf8PathBuf::from(prefix_str).join(std::path::MAIN_SEPARATOR.to_string());
            let relative = std_parent
                .strip_prefix(base.as_std_path())
                .or_else(|_| std_parent.strip_prefix(prefix.as_os_str()))
                .map_err(|_| io::Error::other("failed to strip prefix from parent path"))?
                .to_path_buf();
            (base, relative)
        }
        Some(Component::RootDir) => {
            let base = Utf8PathBuf::from(std::path::MAIN_SEPARATOR.to_string());
            let relative = std_parent
                .strip_prefix(base.as_std_path())
                .map_err(|_| io::Error::other("failed to strip root from absolute path"))?
                .to_path_buf();
            (base, relative)
        }
        _ => (Utf8PathBuf::from("."), std_parent.to_path_buf()),
    };

    let dir = fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?;
    let relative = Utf8PathBuf::from_path_buf(relative)
        .map_err(|_| io::Error::other("non-UTF-8 parent path"))?;

    Ok((dir, relative))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use std::io::Write;
    use tempfile::TempDir;

    #[fixture]
    fn workspace() -> (TempDir, Utf8PathBuf) {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        (tmp, root)
    }

    #[rstest]
    fn creates_missing_parent_directories(workspace: (TempDir, Utf8PathBuf)) {
        let (_tmp, root) = workspace;
        let target = root.join("reports/2024/towns.csv");

        let mut file = create_utf8_file(&target).expect("create nested file");
        file.write_all(b"name\n").expect("write header");

        let written = std::fs::read_to_string(target.as_std_path()).expect("read back");
        assert_eq!(written, "name\n");
    }

    #[rstest]
    fn truncates_existing_files(workspace: (TempDir, Utf8PathBuf)) {
        let (_tmp, root) = workspace;
        let target = root.join("markers.json");
        std::fs::write(target.as_std_path(), b"stale contents").expect("seed file");

        let mut file = create_utf8_file(&target).expect("reopen file");
        file.write_all(b"[]").expect("write markers");

        let written = std::fs::read_to_string(target.as_std_path()).expect("read back");
        assert_eq!(written, "[]");
    }

    #[rstest]
    fn ensure_parent_dir_accepts_bare_file_names() {
        ensure_parent_dir(Utf8Path::new("towns.csv")).expect("no parent to create");
    }

    #[rstest]
    fn rejects_paths_without_a_file_name(workspace: (TempDir, Utf8PathBuf)) {
        let (_tmp, root) = workspace;
        let err = create_utf8_file(&root.join("..")).expect_err("no file name");
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }
}
