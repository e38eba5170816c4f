//! CrewDesk CLI - access checks from the command line
//!
//! # Configuration
//!
//! Configuration is loaded from multiple sources with priority:
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`CREWDESK_*`)
//! 3. Project config (`.crewdesk/config.toml` in the project root)
//! 4. Global config (`~/.crewdesk/config.toml`)
//! 5. Default values (lowest priority)
//!
//! # Environment Variables
//!
//! - `CREWDESK_DEBUG`: Enable debug mode (`true`/`false`)
//! - `CREWDESK_AUDIT`: Enable the decision audit trail
//! - `CREWDESK_AUDIT_ALLOWED`: Also log allowed decisions
//! - `CREWDESK_LOG_FILE`: Log file directory (enables file logging)
//! - `CREWDESK_LOG_LEVEL`: File log level
//!
//! # Exit Status
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | allowed / non-empty answer |
//! | 1 | denied / empty answer |
//! | 2 | usage, I/O, or config error |

mod commands;
mod tracing_writer;

use anyhow::Result;
use clap::{Parser, Subcommand};
use crewdesk_auth::ResourceKind;
use crewdesk_runtime::{
    AuditedPolicy, ConfigError, ConfigLoader, ConfigResolver, CrewdeskConfig,
};
use crewdesk_types::User;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// CrewDesk access checks
#[derive(Parser, Debug)]
#[command(name = "crewdesk")]
#[command(version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Project root directory (defaults to current directory)
    #[arg(short = 'C', long, global = true)]
    project: Option<PathBuf>,

    /// Override log file directory path (also: CREWDESK_LOG_FILE)
    #[arg(long, value_name = "PATH", global = true)]
    log_file: Option<PathBuf>,

    /// Override file log level (also: CREWDESK_LOG_LEVEL, default: info)
    #[arg(long, value_name = "LEVEL", global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check one action; exits 0 when allowed, 1 when denied
    Check {
        /// User as inline JSON or a path to a JSON file
        #[arg(long, value_name = "FILE|JSON")]
        user: String,

        /// Resource kind (tickets, schedules)
        #[arg(long)]
        resource: String,

        /// Action name
        #[arg(long)]
        action: String,

        /// Target record as inline JSON or a path to a JSON file
        #[arg(long, value_name = "FILE|JSON")]
        record: Option<String>,

        /// Print the decision as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the actions a user may take on a resource
    Actions {
        #[arg(long, value_name = "FILE|JSON")]
        user: String,

        #[arg(long)]
        resource: ResourceKind,

        #[arg(long, value_name = "FILE|JSON")]
        record: Option<String>,
    },

    /// Print the role × action rule table
    Table {
        /// Only this resource kind
        #[arg(long)]
        resource: Option<ResourceKind>,
    },

    /// List the sections a user may enter
    Sections {
        #[arg(long, value_name = "FILE|JSON")]
        user: String,
    },

    /// List the roles a user may assign in the employee editor
    Roles {
        #[arg(long, value_name = "FILE|JSON")]
        user: String,
    },
}

/// CLI-based configuration resolver.
///
/// Merges file/env config via [`ConfigLoader`] and applies CLI argument
/// overrides as the highest-priority layer.
struct CliConfigResolver {
    project_root: PathBuf,
    debug: bool,
    log_file: Option<PathBuf>,
    log_level: Option<String>,
}

impl CliConfigResolver {
    fn from_args(args: &Args) -> Self {
        let project_root = args.project.clone().unwrap_or_else(|| {
            std::env::current_dir().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Failed to get current directory, using '.'");
                PathBuf::from(".")
            })
        });

        Self {
            project_root,
            debug: args.debug,
            log_file: args.log_file.clone(),
            log_level: args.log_level.clone(),
        }
    }

    fn resolve(&self) -> Result<CrewdeskConfig, ConfigError> {
        let mut config = ConfigLoader::new()
            .with_project_root(&self.project_root)
            .load()?;
        self.apply(&mut config);
        Ok(config)
    }
}

impl ConfigResolver for CliConfigResolver {
    fn apply(&self, config: &mut CrewdeskConfig) {
        if self.debug {
            config.debug = true;
        }
        if let Some(ref p) = self.log_file {
            config.logging.file = true;
            config.logging.file_path = Some(p.clone());
        }
        if let Some(ref level) = self.log_level {
            config.logging.file_level.clone_from(level);
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<bool> {
    let args = Args::parse();
    let resolver = CliConfigResolver::from_args(&args);

    let config = resolver
        .resolve()
        .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;

    init_tracing(&config, args.verbose);

    info!(path = %resolver.project_root.display(), "Project root");

    let policy = AuditedPolicy::new(config.audit.clone());

    let outcome = match args.command {
        Command::Check {
            user,
            resource,
            action,
            record,
            json,
        } => {
            let user: User = commands::load_json(&user, "user")?;
            let record = record
                .map(|r| commands::load_json::<serde_json::Value>(&r, "record"))
                .transpose()?;
            commands::check(&policy, user, &resource, &action, record, json)?
        }
        Command::Actions {
            user,
            resource,
            record,
        } => {
            let user: User = commands::load_json(&user, "user")?;
            let record = record
                .map(|r| commands::load_json::<serde_json::Value>(&r, "record"))
                .transpose()?;
            commands::actions(&user, resource, record)?
        }
        Command::Table { resource } => commands::table(resource),
        Command::Sections { user } => {
            let user: User = commands::load_json(&user, "user")?;
            commands::sections(&policy, &user)
        }
        Command::Roles { user } => {
            let user: User = commands::load_json(&user, "user")?;
            commands::roles(&user)
        }
    };

    println!("{}", outcome.text);
    Ok(outcome.affirmative)
}

/// Installs the terminal layer and, when configured, the file layer.
///
/// Terminal filter: `--debug` > `--verbose` > `RUST_LOG` > `warn`.
/// The file filter is always `logging.file_level`.
fn init_tracing(config: &CrewdeskConfig, verbose: bool) {
    let terminal_filter = if config.debug {
        EnvFilter::new("debug")
    } else if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let terminal_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let log_dir = config.logging.resolved_dir();
    let log_file = if config.logging.file {
        match tracing_writer::open_log_file(&log_dir) {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!(
                    "Warning: cannot open log file in {}: {e}",
                    log_dir.display()
                );
                None
            }
        }
    } else {
        None
    };

    if let Some(file) = log_file {
        let file_filter = EnvFilter::try_new(&config.logging.file_level)
            .unwrap_or_else(|_| EnvFilter::new("info"));
        let file_layer = fmt::layer()
            .with_target(false)
            .with_ansi(false)
            .with_writer(tracing_writer::FileMakeWriter::new(file));

        tracing_subscriber::registry()
            .with(terminal_layer.with_filter(terminal_filter))
            .with(file_layer.with_filter(file_filter))
            .init();

        info!(
            path = %log_dir.join(tracing_writer::LOG_FILE_NAME).display(),
            level = %config.logging.file_level,
            "File logging enabled"
        );
    } else {
        tracing_subscriber::registry()
            .with(terminal_layer.with_filter(terminal_filter))
            .init();
    }
}
