use crate::commands::{run_clean, run_trigger, CleanArgs, TriggerArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use contact_cleaner::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Contact Cleaner",
    about = "Clean contact-list CSV exports and deduplicate them by phone number",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Clean a local CSV export and write the result to a file or stdout
    Clean(CleanArgs),
    /// Replay an object-created event against the filesystem object store
    Trigger(TriggerArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the root directory of the object store
    #[arg(long)]
    pub(crate) storage_root: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Clean(args) => run_clean(args),
        Command::Trigger(args) => run_trigger(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["contact-cleaner"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_clean_arguments() {
        let cli = Cli::try_parse_from([
            "contact-cleaner",
            "clean",
            "--input",
            "in.csv",
            "--output",
            "out.csv",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Clean(args)) => {
                assert_eq!(args.input, PathBuf::from("in.csv"));
                assert_eq!(args.output, Some(PathBuf::from("out.csv")));
            }
            other => panic!("expected clean command, got {other:?}"),
        }
    }

    #[test]
    fn parses_trigger_arguments() {
        let cli = Cli::try_parse_from([
            "contact-cleaner",
            "trigger",
            "--event",
            "event.json",
            "--storage-root",
            "/tmp/buckets",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Trigger(args)) => {
                assert_eq!(args.event, PathBuf::from("event.json"));
                assert_eq!(args.storage_root, Some(PathBuf::from("/tmp/buckets")));
            }
            other => panic!("expected trigger command, got {other:?}"),
        }
    }
}
