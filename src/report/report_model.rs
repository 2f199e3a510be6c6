use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output document format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Self-contained HTML matrix
    #[default]
    Html,

    /// The merged aggregate as JSON
    Json,
}
