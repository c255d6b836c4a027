//! Embeds the package version and the git revision it was built from.
//!
//! `EHRI_VERSION` is `<package version>` outside a git checkout and
//! `<package version> (<short rev>[, modified])` inside one.

use std::path::PathBuf;
use std::process::Command;

fn main() {
    let package = env!("CARGO_PKG_VERSION");

    if let Some(git_dir) = git(&["rev-parse", "--absolute-git-dir"]) {
        let git_dir = PathBuf::from(git_dir);
        println!("cargo:rerun-if-changed={}", git_dir.join("HEAD").display());
        println!("cargo:rerun-if-changed={}", git_dir.join("index").display());
    }

    let version = match git(&["rev-parse", "--short=10", "HEAD"]) {
        Some(rev) if worktree_modified() => format!("{package} ({rev}, modified)"),
        Some(rev) => format!("{package} ({rev})"),
        None => package.to_string(),
    };

    println!("cargo:rustc-env=EHRI_VERSION={version}");
}

/// Trimmed stdout of a successful, non-empty git command.
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn worktree_modified() -> bool {
    git(&["status", "--porcelain", "--untracked-files=no"]).is_some()
}
