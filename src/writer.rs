//! Output file writer.

use colored::*;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Resolve where the generated file goes.
///
/// A path ending in `.ts` is taken as the exact output file, with its parent
/// as the directory to create. Anything else is a directory, and the file is
/// `index.d.ts` (declarations only) or `index.ts` inside it.
pub fn resolve_output_path(output_path: &str, declarations_only: bool) -> (PathBuf, PathBuf) {
    if output_path.ends_with(".ts") {
        let file = PathBuf::from(output_path);
        let dir = file.parent().unwrap_or(Path::new("")).to_path_buf();
        (dir, file)
    } else {
        let dir = PathBuf::from(output_path);
        let file = dir.join(if declarations_only {
            "index.d.ts"
        } else {
            "index.ts"
        });
        (dir, file)
    }
}

/// Write the generated contents to disk, creating missing directories.
///
/// Failures are reported to stderr and swallowed here: a write error ends
/// the generation incomplete but must not crash the process.
pub async fn write_output(contents: &str, output_path: &str, declarations_only: bool) {
    if let Err(e) = try_write(contents, output_path, declarations_only).await {
        eprintln!("{} {}", "Write failed:".red().bold(), e);
    }
}

async fn try_write(
    contents: &str,
    output_path: &str,
    declarations_only: bool,
) -> std::io::Result<()> {
    let (dir, file) = resolve_output_path(output_path, declarations_only);
    fs::create_dir_all(&dir).await?;
    fs::write(&file, contents).await
}
