use crate::display_path_without_prefix;
use crate::mapping::RenameEntry;
use crate::statistics::Statistics;

use anyhow::Context;
use std::ops::Not;
use std::path::Path;
use std::process::Command;

pub fn rename_files(root: &Path, entries: &[RenameEntry], is_dry_run: bool, use_git: bool, statistics: &mut Statistics) -> anyhow::Result<()> {
    for entry in entries {
        rename_file(root, entry, is_dry_run, use_git, statistics)?;
    }

    Ok(())
}

pub fn rename_file(root: &Path, entry: &RenameEntry, is_dry_run: bool, use_git: bool, statistics: &mut Statistics) -> anyhow::Result<()> {
    let source = root.join(entry.source);
    let destination = root.join(entry.destination);

    if source.exists().not() {
        log::warn!("File not found: {}", entry.source);
        statistics.missing_files += 1;
        return Ok(());
    }

    if is_dry_run {
        log::info!("[DRY RUN] Renaming: {} -> {}", entry.source, entry.destination);
        statistics.renamed_files += 1;
        return Ok(());
    }

    log::info!("Renaming: {} -> {}", entry.source, entry.destination);

    if use_git.not() || move_with_git(root, entry).not() {
        std::fs::rename(&source, &destination).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                display_path_without_prefix(&source, root),
                display_path_without_prefix(&destination, root)
            )
        })?;
    }

    statistics.renamed_files += 1;
    Ok(())
}

// true when git did the move
fn move_with_git(root: &Path, entry: &RenameEntry) -> bool {
    let output = Command::new("git").args(["mv", entry.source, entry.destination]).current_dir(root).output();

    match output {
        Ok(output) if output.status.success() => true,
        Ok(output) => {
            log::debug!("git mv {} failed, renaming directly: {}", entry.source, String::from_utf8_lossy(&output.stderr).trim());
            false
        }
        Err(error) => {
            log::debug!("Cannot run git, renaming directly: {}", error);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const FOO: RenameEntry = RenameEntry {
        source: "a/Foo.svelte",
        destination: "a/foo.svelte",
    };

    const BAR: RenameEntry = RenameEntry {
        source: "a/Bar.ts",
        destination: "a/bar.ts",
    };

    fn project_with_directory() -> tempfile::TempDir {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("a")).unwrap();
        temp_dir
    }

    #[test]
    fn moves_existing_file_with_identical_content() {
        let temp_dir = project_with_directory();
        let root = temp_dir.path();
        fs::write(root.join(FOO.source), b"<script>\n\t// \xc3\xa4\n</script>\n").unwrap();
        let mut statistics = Statistics::new();

        rename_file(root, &FOO, false, false, &mut statistics).unwrap();

        assert!(root.join(FOO.source).exists().not());
        assert_eq!(fs::read(root.join(FOO.destination)).unwrap(), b"<script>\n\t// \xc3\xa4\n</script>\n");
        assert_eq!(statistics.renamed_files, 1);
    }

    #[test]
    fn missing_source_is_not_fatal_and_later_entries_still_run() {
        let temp_dir = project_with_directory();
        let root = temp_dir.path();
        fs::write(root.join(BAR.source), "export {};").unwrap();
        let mut statistics = Statistics::new();

        rename_files(root, &[FOO, BAR], false, false, &mut statistics).unwrap();

        assert!(root.join(FOO.destination).exists().not());
        assert!(root.join(BAR.destination).exists());
        assert_eq!(statistics.missing_files, 1);
        assert_eq!(statistics.renamed_files, 1);
    }

    #[test]
    fn falls_back_to_plain_rename_outside_of_a_repository() {
        let temp_dir = project_with_directory();
        let root = temp_dir.path();
        fs::write(root.join(BAR.source), "export {};").unwrap();
        let mut statistics = Statistics::new();

        rename_file(root, &BAR, false, true, &mut statistics).unwrap();

        assert!(root.join(BAR.source).exists().not());
        assert_eq!(fs::read_to_string(root.join(BAR.destination)).unwrap(), "export {};");
    }

    fn git(root: &Path, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(["-c", "user.name=kebabify", "-c", "user.email=kebabify@localhost", "-c", "commit.gpgsign=false"])
            .args(args)
            .current_dir(root)
            .output()
            .unwrap();
        assert!(output.status.success(), "git {:?} failed: {}", args, String::from_utf8_lossy(&output.stderr));
        String::from_utf8(output.stdout).unwrap()
    }

    #[test]
    fn tracked_file_is_moved_with_git() {
        let temp_dir = project_with_directory();
        let root = temp_dir.path();
        fs::write(root.join(BAR.source), "export {};").unwrap();
        git(root, &["init", "--quiet"]);
        git(root, &["add", "."]);
        git(root, &["commit", "--quiet", "-m", "initial"]);
        let mut statistics = Statistics::new();

        rename_file(root, &BAR, false, true, &mut statistics).unwrap();

        let status = git(root, &["status", "--porcelain"]);
        assert!(status.starts_with("R "), "{}", status);
        assert!(status.contains("a/Bar.ts -> a/bar.ts"), "{}", status);
        assert!(root.join(BAR.source).exists().not());
        assert_eq!(statistics.renamed_files, 1);
    }

    #[test]
    fn dry_run_leaves_the_file_in_place() {
        let temp_dir = project_with_directory();
        let root = temp_dir.path();
        fs::write(root.join(BAR.source), "export {};").unwrap();
        let mut statistics = Statistics::new();

        rename_file(root, &BAR, true, true, &mut statistics).unwrap();

        assert!(root.join(BAR.source).exists());
        assert!(root.join(BAR.destination).exists().not());
        assert_eq!(statistics.renamed_files, 1);
    }

    #[test]
    fn failing_move_aborts_and_keeps_earlier_moves() {
        let temp_dir = project_with_directory();
        let root = temp_dir.path();
        fs::write(root.join(BAR.source), "export {};").unwrap();
        fs::write(root.join("a/Orphan.ts"), "").unwrap();
        let orphan = RenameEntry {
            source: "a/Orphan.ts",
            destination: "missing-directory/orphan.ts",
        };
        let mut statistics = Statistics::new();

        let result = rename_files(root, &[BAR, orphan, FOO], false, false, &mut statistics);

        assert!(result.is_err());
        assert!(root.join(BAR.destination).exists());
        assert!(root.join(orphan.source).exists());
        assert_eq!(statistics.missing_files, 0);
    }
}
