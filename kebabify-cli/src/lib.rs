#![forbid(unsafe_code)]

use clap::{Args, CommandFactory, Parser};
use clap_complete::Shell;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CommonArgs {
    #[clap(
        long,
        help = "The project root. By default, the nearest directory containing src/lib/components/edra, starting at the current working directory."
    )]
    pub root: Option<PathBuf>,

    #[clap(long, default_value_t = false, help = "Only report what would change, without touching any file.")]
    pub dry_run: bool,

    #[clap(long, short, default_value_t = false, help = "Log debug details, like files that did not need any change.")]
    pub verbose: bool,

    #[clap(long, value_name = "SHELL", help = "Print the completion script for the given shell and exit.")]
    pub completions: Option<Shell>,
}

#[derive(Debug, Parser)]
#[command(
    name = "rename-edra-to-kebab",
    version,
    about = "Rename the edra component files to kebab-case and rewrite every reference to their old names."
)]
pub struct RenamerCli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[clap(long, default_value_t = false, help = "Rename with the filesystem only, instead of trying 'git mv' first.")]
    pub no_git: bool,
}

#[derive(Debug, Parser)]
#[command(
    name = "fix-edra-imports",
    version,
    about = "Rewrite the .js import specifiers of the edra components to their kebab-case names."
)]
pub struct ImportFixerCli {
    #[clap(flatten)]
    pub common: CommonArgs,
}

pub fn init_logging(verbose: bool) {
    env_logger::builder()
        .format_timestamp(None)
        .format_target(false)
        .filter_level(if verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .init();
}

pub fn print_completions<C: CommandFactory>(shell: Shell) {
    let mut command = C::command();
    let bin_name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, bin_name, &mut std::io::stdout());
}
