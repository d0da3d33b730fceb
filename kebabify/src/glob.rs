use anyhow::Context;
use glob::{GlobError, MatchOptions, Pattern};
use std::path::{Path, PathBuf};

/// Collects every file below `directory` whose extension is one of `extensions`.
///
/// The files are grouped by extension in the given order, and each group is sorted case-insensitively.
/// Entries that could not be read while walking the tree are returned separately instead of aborting the search.
pub fn evaluate_target_files(directory: &Path, extensions: &[&str]) -> anyhow::Result<(Vec<PathBuf>, Vec<GlobError>)> {
    let match_options = MatchOptions {
        case_sensitive: true,
        ..Default::default()
    };

    let escaped_directory = Pattern::escape(&directory.display().to_string());

    let mut paths = Vec::<PathBuf>::new();
    let mut errors = Vec::<GlobError>::new();

    for extension in extensions {
        let pattern = format!("{}/**/*.{}", escaped_directory, extension);

        let glob_results = glob::glob_with(&pattern, match_options).with_context(|| format!("Failed to interpret glob pattern '{}'", pattern))?;

        let (mut extension_paths, extension_errors) = glob_results.fold(
            (Vec::<PathBuf>::new(), Vec::<GlobError>::new()),
            |(mut paths, mut errors), glob_result| {
                match glob_result {
                    Ok(path) if path.is_file() => paths.push(path),
                    Ok(_) => {}
                    Err(error) => errors.push(error),
                };
                (paths, errors)
            },
        );

        extension_paths.sort_by_key(|path_buf| path_buf.as_os_str().to_ascii_lowercase());

        paths.extend(extension_paths);
        errors.extend(extension_errors);
    }

    errors.sort_by_key(|glob_error| glob_error.path().as_os_str().to_ascii_lowercase());

    Ok((paths, errors))
}
