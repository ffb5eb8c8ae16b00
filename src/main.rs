use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vcf2eds::cli;

fn main() -> anyhow::Result<()> {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage requests succeed; any other argument problem is a failure
            let code = match e.kind() {
                ErrorKind::DisplayHelp
                | ErrorKind::DisplayVersion
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 0,
                _ => 1,
            };
            e.print()?;
            std::process::exit(code);
        }
    };

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("vcf2eds=debug,info")
    } else {
        EnvFilter::new("vcf2eds=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    cli::convert::run(&cli)
}
