//! CLI command definitions and handlers

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ontocheck_core::Graph;
use ontocheck_rdfs::{EntailmentProfile, RdfsConfig};
use ontocheck_validate::{TypeClosure, ValidationConfig, Validator};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Main CLI structure
#[derive(Parser)]
#[command(name = "ontocheck")]
#[command(about = "Validate RDF data against an OWL/RDFS schema")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Validate a data graph against a schema graph
    Validate {
        /// Data graph as a JSON array of triples
        #[arg(short, long)]
        data: PathBuf,

        /// Schema graph as a JSON array of triples
        #[arg(short, long)]
        schema: PathBuf,

        /// Entailment profile used for the type closure
        #[arg(short, long)]
        profile: Option<ProfileArg>,

        /// Also report undeclared classes and properties
        #[arg(long)]
        strict: bool,

        /// Reasoner iteration limit
        #[arg(long)]
        max_iterations: Option<usize>,

        /// Reasoner time limit in milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,

        /// Validation configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the closed rdf:type graph of a data graph
    Closure {
        /// Data graph as a JSON array of triples
        #[arg(short, long)]
        data: PathBuf,

        /// Schema graph as a JSON array of triples
        #[arg(short, long)]
        schema: PathBuf,

        /// Entailment profile used for the type closure
        #[arg(short, long)]
        profile: Option<ProfileArg>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Show tool information
    Info,
}

/// Output format options
#[derive(Clone, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    JsonPretty,
}

/// Entailment profile names accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ProfileArg {
    Rdfs,
    #[value(name = "owl-rl")]
    OwlRl,
}

impl From<ProfileArg> for EntailmentProfile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Rdfs => EntailmentProfile::Rdfs,
            ProfileArg::OwlRl => EntailmentProfile::RdfsOwlRl,
        }
    }
}

/// Command execution result
pub struct CommandResult {
    pub success: bool,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Read a graph from a JSON file
pub fn load_graph(path: &Path) -> Result<Graph> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let graph = Graph::from_json_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
    debug!(path = %path.display(), triples = graph.len(), "graph loaded");
    Ok(graph)
}

/// Merge the optional config file with command-line overrides
///
/// Flags win over the file; `--strict` only ever enables checks.
pub fn resolve_config(
    config: Option<&Path>,
    profile: Option<ProfileArg>,
    strict: bool,
    max_iterations: Option<usize>,
    timeout_ms: Option<u64>,
) -> Result<ValidationConfig> {
    let mut resolved = match config {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            serde_json::from_str::<ValidationConfig>(&content)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => ValidationConfig::default(),
    };

    if let Some(profile) = profile {
        resolved.reasoner.profile = profile.into();
    }
    if strict {
        resolved = resolved.strict();
    }
    if let Some(max_iterations) = max_iterations {
        resolved.reasoner.max_iterations = max_iterations;
    }
    if let Some(timeout_ms) = timeout_ms {
        resolved.reasoner.timeout_ms = timeout_ms;
    }

    Ok(resolved)
}

fn render<T: serde::Serialize>(value: &T, format: &OutputFormat, text: impl FnOnce() -> String) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => text(),
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::JsonPretty => serde_json::to_string_pretty(value)?,
    })
}

/// Execute CLI commands
#[derive(Debug, Default)]
pub struct CommandExecutor;

impl CommandExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Execute a CLI command
    pub fn execute(&self, command: Commands) -> Result<CommandResult> {
        match command {
            Commands::Validate {
                data,
                schema,
                profile,
                strict,
                max_iterations,
                timeout_ms,
                config,
                format,
            } => {
                let config = resolve_config(config.as_deref(), profile, strict, max_iterations, timeout_ms)?;
                self.execute_validate(&data, &schema, config, format)
            }
            Commands::Closure {
                data,
                schema,
                profile,
                format,
            } => self.execute_closure(&data, &schema, profile, format),
            Commands::Info => self.execute_info(),
        }
    }

    fn execute_validate(
        &self,
        data: &Path,
        schema: &Path,
        config: ValidationConfig,
        format: OutputFormat,
    ) -> Result<CommandResult> {
        let data = load_graph(data)?;
        let schema = load_graph(schema)?;
        info!(profile = %config.reasoner.profile, "validating");

        let report = Validator::new(config).report(&data, &schema)?;

        let output = render(&report, &format, || report.to_simple_string())?;
        println!("{}", output.trim_end());

        Ok(CommandResult {
            success: report.conforms(),
            message: format!("{} violation(s)", report.results.len()),
            data: Some(report.to_json()?),
        })
    }

    fn execute_closure(
        &self,
        data: &Path,
        schema: &Path,
        profile: Option<ProfileArg>,
        format: OutputFormat,
    ) -> Result<CommandResult> {
        let data = load_graph(data)?;
        let schema = load_graph(schema)?;
        let config = profile
            .map(|p| RdfsConfig::with_profile(p.into()))
            .unwrap_or_default();

        let closure = TypeClosure::build(&data, &schema, &config)?;
        let triples = closure.graph().to_json()?;

        let output = render(&triples, &format, || {
            closure
                .graph()
                .iter()
                .map(|t| t.to_string())
                .collect::<Vec<_>>()
                .join("\n")
        })?;
        println!("{}", output);

        Ok(CommandResult {
            success: true,
            message: format!("{} type statements", closure.graph().len()),
            data: Some(triples),
        })
    }

    fn execute_info(&self) -> Result<CommandResult> {
        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "profiles": [EntailmentProfile::Rdfs.to_string(), EntailmentProfile::RdfsOwlRl.to_string()],
            "checks": ["domain", "range", "disjoint-classes", "unknown-classes", "unknown-properties"]
        });

        println!("{}", serde_json::to_string_pretty(&info)?);

        Ok(CommandResult {
            success: true,
            message: "Tool information".to_string(),
            data: Some(info),
        })
    }
}
