//! Shell command definitions and execution

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fitlayout_client::{build_query, RepositoryClient};
use fitlayout_core::{ClientError, ParamMap, RdfFormat};
use serde_json::Value;
use std::path::PathBuf;

/// One parsed interactive command line.
#[derive(Debug, Parser)]
#[command(name = "fitlayout", no_binary_name = true, disable_version_flag = true)]
pub struct ShellCli {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Debug, Subcommand)]
pub enum ShellCommand {
    /// Check that the repository is reachable
    Ping,
    /// List artifacts, optionally constrained to one exact RDF type
    List {
        /// Full type IRI to filter on
        type_filter: Option<String>,
    },
    /// Export the whole repository graph
    Dump {
        /// Serialization format (turtle, n3, json-ld, xml, nquads)
        format: String,
        /// Write to this file instead of printing
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Import a serialized RDF file into the repository
    Import {
        file: PathBuf,
        /// Serialization format (turtle, n3, json-ld, xml, nquads)
        format: String,
        /// Upload in chunks of at most this many lines (nquads/n3 only)
        #[arg(long)]
        split: Option<usize>,
    },
    /// Invoke a remote artifact service
    Invoke {
        /// Service identifier, e.g. FitLayout.Puppeteer
        service: String,
        /// IRI of the input artifact, omit for source-creating services
        #[arg(long)]
        input: Option<String>,
        /// Service parameter as KEY=VALUE (value parsed as JSON when possible)
        #[arg(short = 'p', long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,
    },
    /// Render a URL into a new Page artifact
    Render {
        url: String,
        #[arg(long)]
        width: Option<u32>,
        #[arg(long)]
        height: Option<u32>,
    },
    /// Segment a Page artifact into a new AreaTree artifact
    Segment {
        /// IRI of the Page artifact to segment
        iri: String,
        #[arg(long)]
        preserve_aux: bool,
    },
    /// Fetch an artifact graph
    Get {
        iri: String,
        #[arg(long, default_value = "turtle")]
        format: String,
    },
    /// Fetch artifact metadata without binary payloads
    Info {
        iri: String,
        #[arg(long, default_value = "turtle")]
        format: String,
    },
    /// Save an artifact's rendered image
    Image { iri: String, output: PathBuf },
    /// Delete an artifact from the repository
    Delete { iri: String },
    /// Run a SPARQL query
    Query {
        sparql: String,
        /// Do not prepend the canonical prefix header
        #[arg(long)]
        no_prefix: bool,
    },
}

/// Outcome of one executed command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub success: bool,
    pub message: String,
}

impl CommandResult {
    fn ok<M: Into<String>>(message: M) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Parse a `KEY=VALUE` service parameter. The value is taken as JSON
/// when it parses, as a plain string otherwise.
fn parse_param(raw: &str) -> Result<(String, Value), ClientError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| ClientError::Usage(format!("expected KEY=VALUE, got '{raw}'")))?;
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

fn param_map(raw: &[String]) -> Result<ParamMap, ClientError> {
    let mut params = ParamMap::new();
    for entry in raw {
        let (key, value) = parse_param(entry)?;
        params.insert(key, value);
    }
    Ok(params)
}

/// Executes parsed shell commands against one repository session.
pub struct CommandExecutor {
    client: RepositoryClient,
}

impl CommandExecutor {
    pub fn new(client: RepositoryClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &RepositoryClient {
        &self.client
    }

    pub fn execute(&self, command: ShellCommand) -> Result<CommandResult> {
        match command {
            ShellCommand::Ping => {
                self.client.ping()?;
                Ok(CommandResult::ok("repository is up"))
            }
            ShellCommand::List { type_filter } => {
                let listing: Vec<String> = self
                    .client
                    .artifacts(type_filter.as_deref())?
                    .map(|artifact| artifact.to_string())
                    .collect();
                if listing.is_empty() {
                    Ok(CommandResult::ok("no artifacts"))
                } else {
                    Ok(CommandResult::ok(listing.join("\n")))
                }
            }
            ShellCommand::Dump { format, output } => {
                let document = self.client.dump(&format, output.as_deref())?;
                match output {
                    Some(path) => Ok(CommandResult::ok(format!(
                        "repository dumped to {}",
                        path.display()
                    ))),
                    None => Ok(CommandResult::ok(document.into_string())),
                }
            }
            ShellCommand::Import {
                file,
                format,
                split,
            } => {
                let format = RdfFormat::from_name(&format)?;
                let report = self
                    .client
                    .import_file(&file, format, split)
                    .with_context(|| format!("importing {}", file.display()))?;
                Ok(CommandResult::ok(format!(
                    "imported {} line(s) in {} request(s)",
                    report.lines_sent, report.chunks_sent
                )))
            }
            ShellCommand::Invoke {
                service,
                input,
                params,
            } => {
                let params = param_map(&params)?;
                let response = self
                    .client
                    .invoke_service(&service, input.as_deref(), params)?;
                Ok(CommandResult::ok(serde_json::to_string_pretty(&response)?))
            }
            ShellCommand::Render { url, width, height } => {
                let mut overrides = ParamMap::new();
                if let Some(width) = width {
                    overrides.insert("width".to_string(), Value::from(width));
                }
                if let Some(height) = height {
                    overrides.insert("height".to_string(), Value::from(height));
                }
                let iri = self.client.render_page(&url, overrides)?;
                Ok(CommandResult::ok(iri))
            }
            ShellCommand::Segment { iri, preserve_aux } => {
                let mut overrides = ParamMap::new();
                overrides.insert("preserveAuxAreas".to_string(), Value::from(preserve_aux));
                let produced = self.client.segment_page(&iri, overrides)?;
                Ok(CommandResult::ok(produced))
            }
            ShellCommand::Get { iri, format } => {
                let format = RdfFormat::from_name(&format)?;
                let document = self.client.get_artifact(&iri, format)?;
                Ok(CommandResult::ok(document.into_string()))
            }
            ShellCommand::Info { iri, format } => {
                let format = RdfFormat::from_name(&format)?;
                let document = self.client.get_artifact_info(&iri, format)?;
                Ok(CommandResult::ok(document.into_string()))
            }
            ShellCommand::Image { iri, output } => {
                let bytes = self.client.get_artifact_image(&iri)?;
                std::fs::write(&output, &bytes)
                    .with_context(|| format!("writing {}", output.display()))?;
                Ok(CommandResult::ok(format!(
                    "wrote {} byte(s) to {}",
                    bytes.len(),
                    output.display()
                )))
            }
            ShellCommand::Delete { iri } => {
                self.client.delete_artifact(&iri)?;
                Ok(CommandResult::ok(format!("deleted {iri}")))
            }
            ShellCommand::Query { sparql, no_prefix } => {
                let query = build_query(&sparql, !no_prefix);
                let results = self.client.query(&query)?;
                Ok(CommandResult::ok(serde_json::to_string_pretty(&results)?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(line: &str) -> ShellCommand {
        let words = shell_words::split(line).unwrap();
        ShellCli::try_parse_from(words).unwrap().command
    }

    #[test]
    fn parses_import_with_split() {
        let command = parse("import data.nq nquads --split 100");
        match command {
            ShellCommand::Import {
                file,
                format,
                split,
            } => {
                assert_eq!(file, PathBuf::from("data.nq"));
                assert_eq!(format, "nquads");
                assert_eq!(split, Some(100));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_invoke_with_params() {
        let command = parse(
            "invoke FitLayout.Puppeteer -p url=http://example.org/ -p width=1200 -p height=800",
        );
        match command {
            ShellCommand::Invoke {
                service,
                input,
                params,
            } => {
                assert_eq!(service, "FitLayout.Puppeteer");
                assert!(input.is_none());
                assert_eq!(params.len(), 3);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn param_values_parse_as_json_when_possible() {
        let (key, value) = parse_param("width=1200").unwrap();
        assert_eq!(key, "width");
        assert_eq!(value, Value::from(1200));

        let (_, value) = parse_param("preserveAuxAreas=true").unwrap();
        assert_eq!(value, Value::Bool(true));

        let (_, value) = parse_param("url=http://example.org/").unwrap();
        assert_eq!(value, Value::String("http://example.org/".to_string()));
    }

    #[test]
    fn param_without_equals_is_a_usage_error() {
        assert!(matches!(
            parse_param("width"),
            Err(ClientError::Usage(_))
        ));
    }

    #[test]
    fn unknown_subcommand_is_a_parse_error() {
        let words = shell_words::split("frobnicate now").unwrap();
        assert!(ShellCli::try_parse_from(words).is_err());
    }
}
