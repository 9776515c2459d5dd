//! Destination path normalization.

use std::path::{Component, Path};

/// Convert a source-relative file path to a normalized destination path.
///
/// The final extension of the file name is dropped and the remaining
/// components are joined with `/`, wrapped in leading and trailing slashes:
/// - `path/first.txt` -> `/path/first/`
/// - `/guide.md` -> `/guide/`
/// - `a/b.tar.gz` -> `/a/b.tar/`
/// - `docs/` -> `/docs/`
/// - `""` -> `/`
///
/// `.` components are skipped and `..` removes the previous component. A `..`
/// that would climb above the root is dropped.
pub fn to_destination_path(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();

    let mut segments: Vec<String> = Vec::new();
    match (path.parent(), path.file_stem()) {
        (Some(dir), Some(stem)) => {
            push_components(dir, &mut segments);
            push_components(Path::new(stem), &mut segments);
        }
        // Paths ending in `..` (or bare roots) have no file name to strip
        _ => push_components(path, &mut segments),
    }

    let mut destination = String::from("/");
    for segment in &segments {
        destination.push_str(segment);
        destination.push('/');
    }
    destination
}

fn push_components(path: &Path, segments: &mut Vec<String>) {
    for component in path.components() {
        match component {
            Component::Normal(part) => segments.push(part.to_string_lossy().into_owned()),
            Component::ParentDir => {
                segments.pop();
            }
            // Leading separators and drive prefixes never become segments
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
}
