// Argument parsing via clap.
//
// Keep this as a single, self-contained file; the build script includes it
// directly to generate completions and the manpage.

use clap::*;
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "metalgpu [OPTIONS]";

/// The arguments for metalgpu.
#[derive(Parser, Debug)]
#[command(
    name = crate_name!(),
    version = crate_version!(),
    about = "View Metal GPU information.",
    disable_help_flag = true,
    disable_version_flag = true,
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
    override_usage = USAGE,
)]
pub struct Args {
    #[command(flatten)]
    pub selection_args: SelectionArgs,

    #[command(flatten)]
    pub other_args: OtherArgs,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Selection Options")]
pub struct SelectionArgs {
    #[arg(
        short = 'd',
        long = "default",
        help = "View the default GPU.",
        long_help = "Only view the system's default GPU. Fails if the system does not report one."
    )]
    pub default_only: bool,

    #[arg(
        short = 'i',
        long = "index",
        value_name = "N",
        allow_negative_numbers = true,
        help = "View the GPU at the specified index.",
        long_help = indoc! {
            "Only view the GPU at the given position. The position is taken from the list that \
            remains after --default is applied, so with --default the only valid index is 0. \
            Fails if the index is out of range."
        }
    )]
    pub index: Option<i64>,
}

#[derive(Args, Clone, Debug)]
#[command(next_help_heading = "Other Options")]
pub struct OtherArgs {
    #[arg(short = 'h', long, action = ArgAction::Help, help = "Prints help info (for more details use `--help`.)")]
    help: (),

    #[arg(short = 'V', long, action = ArgAction::Version, help = "Prints version information.")]
    version: (),
}

/// Returns a [`Command`] based off of [`Args`].
pub fn build_cmd() -> Command {
    Args::command()
}

/// Returns the parsed [`Args`] from the process' arguments.
pub fn get_args() -> Args {
    Args::parse()
}
