use std::path::{Path, PathBuf};

/// File name of `path` up to its first `.`, so `slab.relaxed.xyz` gives `slab`.
pub fn basename(path: &Path) -> String {
    let name = path.file_name().unwrap_or_default().to_string_lossy();
    match name.split_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => name.into_owned(),
    }
}

/// Output file derived from `input`: `<dir>/<basename><suffix>`, in the
/// current directory when no `dir` is given.
pub fn artifact_path(input: &Path, dir: Option<&Path>, suffix: &str) -> PathBuf {
    let file_name = format!("{}{}", basename(input), suffix);
    match dir {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}
