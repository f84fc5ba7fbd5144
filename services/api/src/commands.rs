use clap::Args;
use contact_cleaner::config::AppConfig;
use contact_cleaner::error::AppError;
use contact_cleaner::storage::{FilesystemObjectStore, ObjectStore};
use contact_cleaner::telemetry;
use contact_cleaner::workflows::contacts::{CleaningSummary, ContactCleaner};
use contact_cleaner::workflows::trigger::{CleanupTrigger, ObjectCreatedEvent, TriggerResponse};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct CleanArgs {
    /// Contact export to clean
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Where to write the cleaned CSV (defaults to stdout)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct TriggerArgs {
    /// JSON file holding an object-created notification
    #[arg(long)]
    pub(crate) event: PathBuf,
    /// Override the root directory of the object store
    #[arg(long)]
    pub(crate) storage_root: Option<PathBuf>,
}

pub(crate) fn run_clean(args: CleanArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let summary = clean_file(&args.input, args.output.as_deref())?;

    eprintln!(
        "kept {} of {} rows ({} missing a field, {} duplicate phones)",
        summary.accepted,
        summary.rows_read,
        summary.rejected_missing_field,
        summary.rejected_duplicate_phone
    );
    Ok(())
}

pub(crate) fn run_trigger(args: TriggerArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let root = args.storage_root.unwrap_or(config.storage.root);
    let trigger = CleanupTrigger::new(
        FilesystemObjectStore::new(root),
        config.storage.output_prefix,
    );

    let response = replay_event(&args.event, &trigger)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

// The output is only opened once the whole input has been read and cleaned,
// so a failed run or `--output` pointing at the input never truncates data.
fn clean_file(input: &Path, output: Option<&Path>) -> Result<CleaningSummary, AppError> {
    let contacts = ContactCleaner::from_path(input)?;
    let rendered = ContactCleaner::render(&contacts)?;

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            info!(output = %path.display(), "wrote cleaned contacts");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&rendered)?;
            stdout.flush()?;
        }
    }

    Ok(contacts.summary)
}

fn replay_event<S: ObjectStore>(
    event_path: &Path,
    trigger: &CleanupTrigger<S>,
) -> Result<TriggerResponse, AppError> {
    let raw = std::fs::read(event_path)?;
    let event: ObjectCreatedEvent = serde_json::from_slice(&raw)?;
    Ok(trigger.handle(&event)?)
}
