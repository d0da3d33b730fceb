#![forbid(unsafe_code)]

use clap::Parser;
use kebabify::ImportFixerOptions;
use kebabify_cli::{ImportFixerCli, init_logging, print_completions};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = ImportFixerCli::parse();

    if let Some(shell) = args.common.completions {
        print_completions::<ImportFixerCli>(shell);
        return ExitCode::SUCCESS;
    }

    init_logging(args.common.verbose);

    let options = ImportFixerOptions {
        root: args.common.root,
        dry_run: args.common.dry_run,
    };

    kebabify::run_import_fixer(options)
}
