//! Output format selection.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Target layout for serialized hosts text.
///
/// Defaults to [`OutputFormat::Unix`], which FreeBSD, macOS and Linux all
/// accept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per address, domains space-separated; disabled domains on a
    /// separate `# `-prefixed line.
    #[default]
    Unix,
    /// One line per entry, `# `-prefixed when disabled.
    Windows,
}

impl OutputFormat {
    /// Lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unix => "unix",
            Self::Windows => "windows",
        }
    }
}

/// Maps an OS name to a format. Unknown names fall back to Unix.
impl FromStr for OutputFormat {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("windows") {
            Ok(Self::Windows)
        } else {
            Ok(Self::Unix)
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_os_name() {
        assert_eq!("windows".parse::<OutputFormat>().unwrap(), OutputFormat::Windows);
        assert_eq!("Windows".parse::<OutputFormat>().unwrap(), OutputFormat::Windows);
        assert_eq!("linux".parse::<OutputFormat>().unwrap(), OutputFormat::Unix);
        assert_eq!("darwin".parse::<OutputFormat>().unwrap(), OutputFormat::Unix);
        assert_eq!("plan9".parse::<OutputFormat>().unwrap(), OutputFormat::Unix);
        assert_eq!(OutputFormat::default(), OutputFormat::Unix);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&OutputFormat::Windows).unwrap();
        assert_eq!(json, "\"windows\"");
        let parsed: OutputFormat = serde_json::from_str("\"unix\"").unwrap();
        assert_eq!(parsed, OutputFormat::Unix);
    }
}
