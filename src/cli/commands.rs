use clap::Parser;

/// Inserts a space before every line feed in the .sol files under test/ and src/
#[derive(Parser, Debug)]
#[command(
    name = "sol-replace",
    about = "Inserts a space before every line feed in the .sol files under test/ and src/",
    version,
    long_about = "sol-replace walks test/ and then src/ below the current directory and \
                  rewrites every file whose name ends in .sol (any case) in place, putting \
                  one space in front of each line feed. Other files are left untouched.\n\n\
                  The run stops at the first error and exits with status 1."
)]
pub struct CliArgs {
    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Log every rewritten file")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors"
    )]
    pub quiet: bool,
}
