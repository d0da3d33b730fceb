#![forbid(unsafe_code)]

use crate::rename::rename_files;
use crate::replace::rewrite_target_files;

use anyhow::Context;
use std::ops::Not;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

pub use crate::mapping::{FILENAME_REPLACEMENTS, IMPORT_REPLACEMENTS, RENAMES, RenameEntry, Replacement, TARGET_EXTENSIONS, TARGET_SUBTREE};
pub use crate::replace::apply_replacements;
pub use crate::statistics::Statistics;

mod glob;
mod mapping;
mod rename;
mod replace;
mod statistics;

pub struct RenamerOptions {
    pub root: Option<PathBuf>,
    pub dry_run: bool,
    pub use_git: bool,
}

pub struct ImportFixerOptions {
    pub root: Option<PathBuf>,
    pub dry_run: bool,
}

pub fn run_renamer(options: RenamerOptions) -> ExitCode {
    let root = match enter_project_root(options.root) {
        Ok(root) => root,
        Err(error) => {
            log::error!("{:#}", error);
            return ExitCode::FAILURE;
        }
    };

    let mut statistics = Statistics::new();
    let result = rename_to_kebab_case(&root, RENAMES, FILENAME_REPLACEMENTS, options.dry_run, options.use_git, &mut statistics);

    println!("==============================");
    print!("{}", statistics.renamer_summary());

    finish(result, options.dry_run)
}

pub fn run_import_fixer(options: ImportFixerOptions) -> ExitCode {
    let root = match enter_project_root(options.root) {
        Ok(root) => root,
        Err(error) => {
            log::error!("{:#}", error);
            return ExitCode::FAILURE;
        }
    };

    let mut statistics = Statistics::new();
    let result = fix_imports(&root, IMPORT_REPLACEMENTS, options.dry_run, &mut statistics);

    println!("==============================");
    print!("{}", statistics.import_fixer_summary());

    finish(result, options.dry_run)
}

pub fn rename_to_kebab_case(
    root: &Path,
    renames: &[RenameEntry],
    replacements: &[Replacement],
    is_dry_run: bool,
    use_git: bool,
    statistics: &mut Statistics,
) -> anyhow::Result<()> {
    log::info!("Starting file renames...");
    rename_files(root, renames, is_dry_run, use_git, statistics)?;
    log::info!("File renames complete, now updating imports in all files...");

    rewrite_target_files(root, replacements, is_dry_run, statistics)?;
    log::info!("Import updates complete");

    Ok(())
}

pub fn fix_imports(root: &Path, replacements: &[Replacement], is_dry_run: bool, statistics: &mut Statistics) -> anyhow::Result<()> {
    log::info!("Fixing import statements...");
    rewrite_target_files(root, replacements, is_dry_run, statistics)?;
    log::info!("Fixed imports in {} files", statistics.updated_files);

    Ok(())
}

/// Finds the nearest directory, starting at `start` and walking up, that contains the target subtree.
pub fn find_project_root(start: &Path) -> anyhow::Result<PathBuf> {
    start
        .ancestors()
        .find(|directory| directory.join(TARGET_SUBTREE).is_dir())
        .map(Path::to_path_buf)
        .ok_or_else(|| anyhow::anyhow!("Neither {} nor any of its parents contains {}", start.display(), TARGET_SUBTREE))
}

fn enter_project_root(explicit_root: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    let root = match explicit_root {
        Some(root) => std::fs::canonicalize(&root).with_context(|| format!("Project root {} does not exist", root.display()))?,
        None => {
            let current_working_directory = std::env::current_dir().context("Cannot determine current working directory")?;
            find_project_root(&current_working_directory)?
        }
    };

    std::env::set_current_dir(&root).with_context(|| format!("Cannot change into project root {}", root.display()))?;
    log::debug!("Project root: {}", root.display());

    Ok(root)
}

fn finish(result: anyhow::Result<()>, is_dry_run: bool) -> ExitCode {
    if is_dry_run {
        log::warn!("This was just a dry run. To actually apply the changes, run again without the '--dry-run' flag.")
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{:#}", error);
            ExitCode::FAILURE
        }
    }
}

pub(crate) fn display_path_without_prefix(path: &Path, prefix: &Path) -> String {
    path.strip_prefix(prefix)
        .ok()
        .filter(|relative_path| relative_path.as_os_str().is_empty().not())
        .unwrap_or(path)
        .display()
        .to_string()
}
