use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Report category a section header opens.
///
/// The "no category yet" state is not a variant: the scanner models it as
/// its own `NoSection` state so content can never be attributed to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Storage,
    Services,
    Critical,
    Pending,
    Ssh,
}

impl Category {
    /// All categories, in report order
    pub const ALL: [Category; 5] = [
        Category::Storage,
        Category::Services,
        Category::Critical,
        Category::Pending,
        Category::Ssh,
    ];

    /// Stable lowercase name used on the command line and in config files
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Storage => "storage",
            Category::Services => "services",
            Category::Critical => "critical",
            Category::Pending => "pending",
            Category::Ssh => "ssh",
        }
    }

    /// Literal line prefix that opens this category's section
    pub fn header_prefix(self) -> &'static str {
        match self {
            Category::Storage => "Filesystem",
            Category::Services => "--- FAILED SERVICES",
            Category::Critical => "--- CRITICAL LOGS",
            Category::Pending => "--- PENDING UPDATES",
            Category::Ssh => "--- RECENT FAILED SSH",
        }
    }

    /// Category-specific column names, following the `Id, Hostname, Date` prefix
    pub fn field_columns(self) -> &'static [&'static str] {
        match self {
            Category::Storage => &["Filesystem", "Size", "Used", "Avail", "Use%", "Mounted on"],
            Category::Services => &["Service"],
            Category::Critical => &["Critical Log"],
            Category::Pending => &["Pending Update"],
            Category::Ssh => &["Failed SSH Attempt"],
        }
    }

    /// Full column list of this category's table
    pub fn columns(self) -> Vec<&'static str> {
        let mut columns = vec!["Id", "Hostname", "Date"];
        columns.extend_from_slice(self.field_columns());
        columns
    }

    /// Default file stem for this category's output table
    pub fn default_file_stem(self) -> &'static str {
        match self {
            Category::Storage => "disk_storage",
            Category::Services => "failed_services",
            Category::Critical => "critical_logs",
            Category::Pending => "pending_updates",
            Category::Ssh => "failed_ssh",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}
