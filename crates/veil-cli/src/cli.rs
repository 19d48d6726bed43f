use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use veil_core::{ComplianceStandard, SensitivityLevel};

#[derive(Parser)]
#[command(name = "veil")]
#[command(about = "Redact sensitive data and check compliance", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub options: RedactorOptions,

    #[command(subcommand)]
    pub command: Commands,
}

/// How to build the redactor for this invocation
#[derive(Args, Debug, Default)]
pub struct RedactorOptions {
    /// Sensitivity level: LOW, MEDIUM, HIGH or CUSTOM (default from config)
    #[arg(long, global = true)]
    pub level: Option<SensitivityLevel>,

    /// Only apply rules tagged with this standard (e.g. pci-dss, gdpr)
    #[arg(long, global = true)]
    pub standard: Option<ComplianceStandard>,

    /// Custom rule file to import (overrides the config's rules_file)
    #[arg(long, global = true)]
    pub rules: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Redact a file (or stdin) and print the result
    Redact {
        /// Input file; reads stdin when omitted
        path: Option<PathBuf>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,

        /// Exit with an error if compliance violations remain
        #[arg(long)]
        strict: bool,
    },

    /// Redact several files independently and print a JSON array
    Batch {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// List catalog rules
    Rules {
        /// Include disabled rules and rules without a matcher
        #[arg(long)]
        all: bool,
    },

    /// Write the level and custom rules to a rule file
    Export {
        /// Destination JSON file
        path: PathBuf,
    },
}
