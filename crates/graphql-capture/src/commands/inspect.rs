use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_capture::ClassifierConfig;
use libgraphql_capture::DisplayRecord;
use libgraphql_capture::har::HarEntry;
use libgraphql_capture::har::HarLog;
use libgraphql_capture::process_transaction;
use libgraphql_capture::TransactionClassifier;
use libgraphql_capture::TransactionOutcome;
use std::collections::HashSet;
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use walkdir::WalkDir;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// Display records as a pretty-printed JSON array.
    Json,
    /// The captured query text and variables of every record.
    Raw,
}

#[derive(Debug, clap::Args)]
pub(crate) struct InspectCmd {
    #[arg(
        help="Path to a JSON file of classifier settings \
             (e.g. `{\"urlPatterns\": [\"/graphql$\"]}`).",
        long,
    )]
    config: Option<PathBuf>,

    #[arg(
        default_value="json",
        help="How to print the GraphQL records that were found.",
        long,
        value_enum,
    )]
    format: OutputFormat,

    #[arg(
        default_values_t=["har".to_string()],
        help="Set of file extensions to filter to when searching for capture \
             files within a directory.",
        long,
        value_delimiter = ',',
    )]
    har_file_exts: Vec<String>,

    #[arg(
        help="A regular expression matched against request URLs. Any \
             non-preflight request whose URL matches is treated as GraphQL. \
             May be repeated.",
        long="url-pattern",
    )]
    url_patterns: Vec<String>,

    #[arg(
        help="Paths to one or more HAR files or directories containing HAR \
             files to inspect.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl InspectCmd {
    fn find_har_files(&self, errors: &mut Vec<Box<dyn Error>>) -> Vec<PathBuf> {
        let har_file_exts: HashSet<&str> =
            self.har_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.'))
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }
                        if let Some(ext) = path.extension().map(|s| s.to_string_lossy())
                            && har_file_exts.contains(&*ext) {
                            file_paths.push(path.to_path_buf());
                        } else {
                            log::trace!("Skipping non-capture file: {path:#?}.");
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(Box::new(e));
                    },
                }
            }
        }

        // A single explicitly-named file is inspected even if its extension
        // isn't one of `--har-file-exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to inspect {first_arg_path:#?} even though it \
                doesn't match any of the --har-file-exts."
            );
            file_paths.push(first_arg_path.to_owned());
        }

        file_paths
    }

    fn load_classifier(&self) -> anyhow::Result<TransactionClassifier> {
        let config = match &self.config {
            Some(config_path) => ClassifierConfig::from_file(config_path)?,
            None => ClassifierConfig::default(),
        };
        let config = config.with_url_patterns(self.url_patterns.iter().cloned());
        Ok(TransactionClassifier::from_config(&config)?)
    }
}

#[inherent::inherent]
impl RunnableCommand for InspectCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let classifier = match self.load_classifier() {
            Ok(classifier) => Arc::new(classifier),
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Invalid classifier configuration: {e:#}",
                output_utils::RED_X,
            )),
        };

        let mut errors: Vec<Box<dyn Error>> = vec![];
        let file_paths = self.find_har_files(&mut errors);
        log::debug!("Found {} capture files to inspect.", file_paths.len());

        let mut entries: Vec<HarEntry> = vec![];
        for file_path in &file_paths {
            match HarLog::from_file(file_path) {
                Ok(har_log) => {
                    log::debug!(
                        "Loaded {} entries from {file_path:#?}.",
                        har_log.entries.len(),
                    );
                    entries.extend(har_log.entries);
                },
                Err(e) => errors.push(Box::new(e)),
            }
        }

        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Errors loading capture files: {errors:#?}",
                output_utils::RED_X,
            ));
        }

        let num_entries = entries.len();
        let tasks: Vec<_> =
            entries.into_iter()
                .map(|entry| {
                    let classifier = Arc::clone(&classifier);
                    tokio::spawn(async move {
                        let outcome = process_transaction(&entry, &classifier).await;
                        outcome.map(|outcome| (entry.request.url, outcome))
                    })
                })
                .collect();

        let mut outcomes = vec![];
        for task in tasks {
            match task.await {
                Ok(Some(outcome)) => outcomes.push(outcome),
                Ok(None) => (),
                Err(e) => return CommandResult::stderr(format_args!(
                    "{} Inspection task failed: {e}",
                    output_utils::RED_X,
                )),
            }
        }

        let num_records: usize =
            outcomes.iter()
                .map(|(_, outcome)| outcome.as_ref().map_or(0, Vec::len))
                .sum();
        log::info!(
            "{} Found {num_records} GraphQL operations in {} of {num_entries} \
            captured transactions.",
            output_utils::GREEN_CHECK,
            outcomes.len(),
        );

        let rendered = match self.format {
            OutputFormat::Json => render_json(&outcomes),
            OutputFormat::Raw => Ok(render_raw(&outcomes)),
        };
        match rendered {
            Ok(output) => CommandResult::stdout(format_args!("{output}")),
            Err(e) => CommandResult::stderr(format_args!(
                "{} Failed to serialize records: {e}",
                output_utils::RED_X,
            )),
        }
    }
}

fn render_json(outcomes: &[(String, TransactionOutcome)]) -> serde_json::Result<String> {
    let mut values = vec![];
    for (url, outcome) in outcomes {
        match outcome {
            Ok(records) => {
                for record in records {
                    values.push(serde_json::to_value(record)?);
                }
            },
            Err(e) => values.push(serde_json::json!({
                "url": url,
                "error": e.to_string(),
            })),
        }
    }
    serde_json::to_string_pretty(&values)
}

fn render_raw(outcomes: &[(String, TransactionOutcome)]) -> String {
    let mut sections = vec![];
    for (url, outcome) in outcomes {
        match outcome {
            Ok(records) => sections.extend(records.iter().map(render_raw_record)),
            Err(e) => sections.push(format!("# {url}\n{e}\n")),
        }
    }
    sections.join("\n")
}

fn render_raw_record(record: &DisplayRecord) -> String {
    match record.query() {
        Ok(parse_result) => {
            let variables =
                serde_json::to_string_pretty(parse_result.query_variables())
                    .unwrap_or_else(|e| format!("<unprintable variables: {e}>"));
            format!(
                "# {}\n## Raw Query Data\n{}\n## Query Variables\n{variables}\n",
                record.url(),
                parse_result.bare_query(),
            )
        },
        Err(e) => format!("# {}\n{e}\n", record.url()),
    }
}
