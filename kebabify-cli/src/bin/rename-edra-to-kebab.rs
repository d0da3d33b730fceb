#![forbid(unsafe_code)]

use clap::Parser;
use kebabify::RenamerOptions;
use kebabify_cli::{RenamerCli, init_logging, print_completions};
use std::ops::Not;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = RenamerCli::parse();

    if let Some(shell) = args.common.completions {
        print_completions::<RenamerCli>(shell);
        return ExitCode::SUCCESS;
    }

    init_logging(args.common.verbose);

    let options = RenamerOptions {
        root: args.common.root,
        dry_run: args.common.dry_run,
        use_git: args.no_git.not(),
    };

    kebabify::run_renamer(options)
}
