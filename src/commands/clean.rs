//! Clean command implementation
//!
//! Best-effort removal of tool caches and build artifacts. Missing targets
//! are skipped silently; removal failures are reported as warnings and never
//! abort the command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use walkdir::WalkDir;

use crate::config::ProjectContext;
use crate::utils::terminal;

/// Cache directories removed from the project root
const CACHE_DIRS: &[&str] = &[".pytest_cache", ".ruff_cache", "htmlcov", "dist", "build"];

/// Cache files removed from the project root
const CACHE_FILES: &[&str] = &[".coverage"];

/// Remove caches and build artifacts
#[derive(Args, Debug)]
pub struct CleanCommand {
    /// Show what would be deleted without deleting anything
    #[arg(long)]
    pub dry_run: bool,

    /// Also remove the project virtualenv (.venv)
    #[arg(long)]
    pub venv: bool,
}

impl CleanCommand {
    /// Execute the clean command
    pub fn execute(self, ctx: &ProjectContext, _verbose: bool) -> Result<()> {
        terminal::print_info("Cleaning caches and build artifacts...");

        let mut cleaner = CacheCleaner::new(ctx.root().to_path_buf(), self.dry_run);
        cleaner.clean_root_targets();
        cleaner.clean_scattered_caches();
        if self.venv {
            cleaner.remove_dir(&ctx.root().join(".venv"), ".venv/");
        }
        cleaner.print_summary();

        Ok(())
    }
}

/// Collects what was removed (or would be) and what failed
struct CacheCleaner {
    root: PathBuf,
    dry_run: bool,
    removed: Vec<String>,
    freed: u64,
    failed: Vec<(String, String)>,
}

impl CacheCleaner {
    fn new(root: PathBuf, dry_run: bool) -> Self {
        Self {
            root,
            dry_run,
            removed: Vec::new(),
            freed: 0,
            failed: Vec::new(),
        }
    }

    /// Fixed cache targets directly under the project root
    fn clean_root_targets(&mut self) {
        for dir in CACHE_DIRS {
            let path = self.root.join(dir);
            self.remove_dir(&path, &format!("{dir}/"));
        }
        for file in CACHE_FILES {
            let path = self.root.join(file);
            self.remove_file(&path, file);
        }
    }

    /// Caches scattered through the tree: __pycache__ and *.egg-info
    fn clean_scattered_caches(&mut self) {
        let walker = WalkDir::new(&self.root).into_iter().filter_entry(|e| {
            let name = e.file_name().to_string_lossy();
            name != ".venv" && name != ".git"
        });

        let mut targets = Vec::new();
        for entry in walker.filter_map(|e| e.ok()) {
            if !entry.file_type().is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if name == "__pycache__" || name.ends_with(".egg-info") {
                targets.push(entry.path().to_path_buf());
            }
        }

        for target in targets {
            let display = target
                .strip_prefix(&self.root)
                .unwrap_or(&target)
                .to_string_lossy()
                .to_string();
            self.remove_dir(&target, &format!("{display}/"));
        }
    }

    fn remove_dir(&mut self, path: &Path, name: &str) {
        if !path.is_dir() {
            return;
        }
        let size = dir_size(path);
        if self.dry_run {
            println!("  [DRY RUN] Would remove: {} ({})", name, format_size(size));
            self.removed.push(name.to_string());
            self.freed += size;
            return;
        }
        match fs::remove_dir_all(path) {
            Ok(_) => {
                self.removed.push(name.to_string());
                self.freed += size;
                println!("  removed {} ({})", name, format_size(size));
            }
            Err(e) => {
                self.failed.push((name.to_string(), e.to_string()));
                terminal::print_warning(&format!("could not remove {name}: {e}"));
            }
        }
    }

    fn remove_file(&mut self, path: &Path, name: &str) {
        if !path.is_file() {
            return;
        }
        let size = path.metadata().map(|m| m.len()).unwrap_or(0);
        if self.dry_run {
            println!("  [DRY RUN] Would remove: {} ({})", name, format_size(size));
            self.removed.push(name.to_string());
            self.freed += size;
            return;
        }
        match fs::remove_file(path) {
            Ok(_) => {
                self.removed.push(name.to_string());
                self.freed += size;
                println!("  removed {} ({})", name, format_size(size));
            }
            Err(e) => {
                self.failed.push((name.to_string(), e.to_string()));
                terminal::print_warning(&format!("could not remove {name}: {e}"));
            }
        }
    }

    fn print_summary(&self) {
        if self.removed.is_empty() {
            terminal::print_info("Nothing to clean");
            return;
        }
        let verb = if self.dry_run { "Would free" } else { "Freed" };
        terminal::print_success(&format!(
            "{} {} across {} targets",
            verb,
            format_size(self.freed),
            self.removed.len()
        ));
        if !self.failed.is_empty() {
            terminal::print_warning(&format!(
                "{} targets could not be removed",
                self.failed.len()
            ));
        }
    }
}

/// Total size of all files under a directory
fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter_map(|e| e.metadata().ok())
        .filter(|m| m.is_file())
        .map(|m| m.len())
        .sum()
}

/// Human-readable byte count
fn format_size(size_bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = size_bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    format!("{:.2} {}", size, UNITS[unit_idx])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn touch(path: &Path, bytes: &[u8]) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        let mut f = fs::File::create(path).unwrap();
        f.write_all(bytes).unwrap();
    }

    #[test]
    fn test_format_size_units() {
        assert_eq!(format_size(0), "0.00 B");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.00 MB");
    }

    #[test]
    fn test_clean_removes_caches_and_keeps_sources() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("src/demo/app.py"), b"print('hi')");
        touch(&root.join("src/demo/__pycache__/app.cpython-312.pyc"), b"xx");
        touch(&root.join(".pytest_cache/v/cache/lastfailed"), b"{}");
        touch(&root.join(".coverage"), b"data");
        touch(&root.join("dist/demo-0.1.0.tar.gz"), b"pkg");

        let mut cleaner = CacheCleaner::new(root.to_path_buf(), false);
        cleaner.clean_root_targets();
        cleaner.clean_scattered_caches();

        assert!(root.join("src/demo/app.py").is_file());
        assert!(!root.join("src/demo/__pycache__").exists());
        assert!(!root.join(".pytest_cache").exists());
        assert!(!root.join(".coverage").exists());
        assert!(!root.join("dist").exists());
        assert!(cleaner.failed.is_empty());
        assert!(cleaner.freed > 0);
    }

    #[test]
    fn test_dry_run_deletes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("pkg/__pycache__/m.pyc"), b"xx");
        touch(&root.join(".coverage"), b"data");

        let mut cleaner = CacheCleaner::new(root.to_path_buf(), true);
        cleaner.clean_root_targets();
        cleaner.clean_scattered_caches();

        assert!(root.join("pkg/__pycache__").exists());
        assert!(root.join(".coverage").exists());
        assert_eq!(cleaner.removed.len(), 2);
    }

    #[test]
    fn test_venv_is_left_alone_by_default_scan() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join(".venv/lib/__pycache__/m.pyc"), b"xx");

        let mut cleaner = CacheCleaner::new(root.to_path_buf(), false);
        cleaner.clean_scattered_caches();

        assert!(root.join(".venv/lib/__pycache__").exists());
        assert!(cleaner.removed.is_empty());
    }
}
