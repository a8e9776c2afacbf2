use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a pipeline stage runs: a hosted endpoint or the local machine.
///
/// Selected independently for transcription and answering, and passed
/// explicitly at every call site.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    #[default]
    Remote,
    Local,
}

impl ExecutionMode {
    /// Get the string identifier for this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionMode::Remote => "remote",
            ExecutionMode::Local => "local",
        }
    }

    /// List all available modes
    pub fn all() -> &'static [ExecutionMode] {
        &[ExecutionMode::Remote, ExecutionMode::Local]
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ExecutionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "remote" => Ok(ExecutionMode::Remote),
            "local" => Ok(ExecutionMode::Local),
            _ => Err(format!("Unknown mode: {}. Use 'remote' or 'local'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trip() {
        for mode in ExecutionMode::all() {
            let parsed: ExecutionMode = mode.as_str().parse().unwrap();
            assert_eq!(parsed, *mode);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Remote".parse::<ExecutionMode>(), Ok(ExecutionMode::Remote));
        assert_eq!("LOCAL".parse::<ExecutionMode>(), Ok(ExecutionMode::Local));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!("hosted".parse::<ExecutionMode>().is_err());
    }

    #[test]
    fn default_is_remote() {
        assert_eq!(ExecutionMode::default(), ExecutionMode::Remote);
    }
}
