use crate::display_path_without_prefix;
use crate::glob::evaluate_target_files;
use crate::mapping::{Replacement, TARGET_EXTENSIONS, TARGET_SUBTREE};
use crate::statistics::Statistics;

use anyhow::Context;
use std::ops::Not;
use std::path::Path;

/// Plain text substitution: a token inside a comment or an unrelated string literal is rewritten as well.
pub fn apply_replacements(content: &str, replacements: &[Replacement]) -> String {
    replacements.iter().fold(content.to_string(), |content, replacement| {
        if replacement.old.is_empty().not() && content.contains(replacement.old) {
            content.replace(replacement.old, replacement.new)
        } else {
            content
        }
    })
}

pub fn rewrite_file(path: &Path, replacements: &[Replacement], is_dry_run: bool) -> anyhow::Result<bool> {
    let original_content = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let content = apply_replacements(&original_content, replacements);

    if content == original_content {
        return Ok(false);
    }

    if is_dry_run.not() {
        std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    }

    Ok(true)
}

pub fn rewrite_target_files(root: &Path, replacements: &[Replacement], is_dry_run: bool, statistics: &mut Statistics) -> anyhow::Result<()> {
    let (paths, errors) = evaluate_target_files(&root.join(TARGET_SUBTREE), &TARGET_EXTENSIONS)?;

    if errors.is_empty().not() {
        statistics.unreadable_paths += errors.len() as u64;

        log::warn!(
            "Some paths below {} could not be read and are skipped. \
            Make sure you have the permissions for these paths and symlinks are not broken.",
            TARGET_SUBTREE
        );

        for error in errors.iter() {
            log::warn!("{}", error);
        }
    }

    if paths.is_empty() {
        log::warn!("No .ts or .svelte files found below {}", TARGET_SUBTREE);
    }

    for path in paths {
        let clean_path = display_path_without_prefix(&path, root);

        if rewrite_file(&path, replacements, is_dry_run)? {
            if is_dry_run {
                log::info!("[DRY RUN] Updated imports in: {}", clean_path);
            } else {
                log::info!("Updated imports in: {}", clean_path);
            }
            statistics.updated_files += 1;
        } else {
            log::debug!("Nothing to update in: {}", clean_path);
            statistics.unchanged_files += 1;
        }
    }

    Ok(())
}
