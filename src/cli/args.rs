//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::job::{JobStatus, PropertyType};

/// FieldVolt - field service job tracker for electrical technicians
#[derive(Parser, Debug)]
#[command(name = "fieldvolt")]
#[command(version)]
#[command(about = "Local-first job tracker with AI-assisted electrical diagnostics")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage jobs
    Job {
        #[command(subcommand)]
        action: JobAction,
    },
    /// Clock in or out of a job
    Clock {
        /// Job id or unique id prefix
        job: String,
    },
    /// Capture a diagnostic note, with AI analysis when available
    Note {
        /// Job id or unique id prefix
        job: String,
        /// Problem description; omit to dictate from the terminal
        text: Option<String>,
        /// Read the description line by line from stdin
        #[arg(long, conflicts_with = "text")]
        dictate: bool,
        /// Skip the analysis call and record the transcript only
        #[arg(long)]
        no_analysis: bool,
    },
    /// Manage job-site photos
    Photo {
        #[command(subcommand)]
        action: PhotoAction,
    },
    /// Manage part line items
    Part {
        #[command(subcommand)]
        action: PartAction,
    },
    /// Browse the materials catalog
    Catalog {
        /// Restrict to one category id (wiring, devices, breakers, boxes, lighting)
        #[arg(short, long)]
        category: Option<String>,
        /// Case-insensitive name substring
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Toggle safety checklist flags
    Checklist {
        /// Job id or unique id prefix
        job: String,
        /// Toggle "PPE worn"
        #[arg(long)]
        ppe: bool,
        /// Toggle "voltage tested"
        #[arg(long)]
        voltage: bool,
        /// Toggle "lockout/tagout applied"
        #[arg(long)]
        lockout: bool,
        /// Toggle "hazards noted"
        #[arg(long)]
        hazards: bool,
    },
    /// Set free-text notes on a job
    Notes {
        /// Job id or unique id prefix
        job: String,
        /// Replace the tech notes
        #[arg(long)]
        tech: Option<String>,
        /// Replace the customer notes
        #[arg(long)]
        customer: Option<String>,
    },
    /// Show time and cost totals for a job
    Summary {
        /// Job id or unique id prefix
        job: String,
    },
    /// Manage user settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Job management actions
#[derive(Subcommand, Debug)]
pub enum JobAction {
    /// Create a new job
    New {
        #[arg(long)]
        customer: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long)]
        address: String,
        #[arg(long, value_enum, default_value_t = PropertyArg::Residential)]
        property: PropertyArg,
    },
    /// List jobs
    List {
        /// Show the archived view instead of the active one
        #[arg(long)]
        archived: bool,
        /// Narrow the active view to one status (active or completed);
        /// archived jobs are listed with --archived
        #[arg(long, value_enum, conflicts_with = "archived")]
        status: Option<StatusArg>,
        /// Case-insensitive search over customer name and address
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one job in full
    Show {
        job: String,
    },
    /// Mark a job completed, or re-open it
    Complete {
        job: String,
    },
    /// Archive a job
    Archive {
        job: String,
    },
    /// Restore an archived job to its pre-archive status
    Restore {
        job: String,
    },
    /// Permanently delete a job and all its data
    Delete {
        job: String,
        /// Confirm the deletion; without this flag nothing is removed
        #[arg(long)]
        yes: bool,
    },
}

/// Photo actions
#[derive(Subcommand, Debug)]
pub enum PhotoAction {
    /// Embed an image file into the job record
    Add { job: String, path: String },
    /// List photos on a job
    List { job: String },
    /// Remove one photo by id prefix
    Rm { job: String, photo: String },
}

/// Part actions
#[derive(Subcommand, Debug)]
pub enum PartAction {
    /// Add a part, seeded from the catalog or custom-named
    Add {
        job: String,
        /// Catalog item name (substring, must match exactly one item)
        #[arg(long, conflicts_with = "name")]
        item: Option<String>,
        /// Custom part name (zero default cost)
        #[arg(long)]
        name: Option<String>,
        /// Quantity, defaults to 1
        #[arg(long)]
        qty: Option<u32>,
        /// Unit cost override
        #[arg(long)]
        cost: Option<f64>,
    },
    /// List parts on a job
    List { job: String },
    /// Remove one part by id prefix
    Rm { job: String, part: String },
}

/// Settings actions
#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    /// Show all settings
    Show,
    /// Set a settings value
    Set {
        /// Settings key
        key: String,
        /// Settings value
        value: String,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Property type argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PropertyArg {
    Residential,
    Commercial,
    Industrial,
}

impl std::fmt::Display for PropertyArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Residential => "residential",
            Self::Commercial => "commercial",
            Self::Industrial => "industrial",
        })
    }
}

impl From<PropertyArg> for PropertyType {
    fn from(arg: PropertyArg) -> Self {
        match arg {
            PropertyArg::Residential => PropertyType::Residential,
            PropertyArg::Commercial => PropertyType::Commercial,
            PropertyArg::Industrial => PropertyType::Industrial,
        }
    }
}

/// Status argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Active,
    Completed,
    Archived,
}

impl From<StatusArg> for JobStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Active => JobStatus::Active,
            StatusArg::Completed => JobStatus::Completed,
            StatusArg::Archived => JobStatus::Archived,
        }
    }
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "api_key",
    "model",
    "data_dir",
    "prompt.persona",
    "prompt.jurisdiction",
    "prompt.code_references",
];

/// Valid settings keys
pub const VALID_SETTINGS_KEYS: &[&str] = &["name", "company", "default_hourly_rate", "dark_mode"];

pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn config_keys_validate() {
        assert!(is_valid_config_key("api_key"));
        assert!(is_valid_config_key("prompt.persona"));
        assert!(!is_valid_config_key("invalid_key"));
    }

    #[test]
    fn note_parses_positional_text() {
        let cli = Cli::try_parse_from(["fieldvolt", "note", "abc123", "breaker trips"]).unwrap();
        match cli.command {
            Commands::Note {
                job,
                text,
                dictate,
                no_analysis,
            } => {
                assert_eq!(job, "abc123");
                assert_eq!(text.as_deref(), Some("breaker trips"));
                assert!(!dictate);
                assert!(!no_analysis);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn note_text_conflicts_with_dictate() {
        let result = Cli::try_parse_from(["fieldvolt", "note", "abc", "text", "--dictate"]);
        assert!(result.is_err());
    }

    #[test]
    fn list_status_conflicts_with_archived() {
        let result =
            Cli::try_parse_from(["fieldvolt", "job", "list", "--archived", "--status", "active"]);
        assert!(result.is_err());
    }

    #[test]
    fn part_item_conflicts_with_name() {
        let result = Cli::try_parse_from([
            "fieldvolt", "part", "add", "abc", "--item", "GFCI", "--name", "Custom",
        ]);
        assert!(result.is_err());
    }
}
