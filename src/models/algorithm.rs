//! Scheduling discipline identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A CPU scheduling discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Process-Next (non-preemptive SJF).
    Spn,
    /// Highest-Response-Ratio-Next.
    Hrrn,
    /// Shortest-Remaining-Time-First (preemptive).
    Srtf,
    /// Round-Robin with a fixed quantum.
    #[serde(rename = "rr")]
    RoundRobin,
}

impl Algorithm {
    /// Every discipline, in presentation order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Fcfs,
        Algorithm::Spn,
        Algorithm::Hrrn,
        Algorithm::Srtf,
        Algorithm::RoundRobin,
    ];

    /// Short name (e.g., "FCFS", "RR").
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Spn => "SPN",
            Algorithm::Hrrn => "HRRN",
            Algorithm::Srtf => "SRTF",
            Algorithm::RoundRobin => "RR",
        }
    }

    /// Long description.
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First-Come-First-Served",
            Algorithm::Spn => "Shortest Process Next",
            Algorithm::Hrrn => "Highest Response Ratio Next",
            Algorithm::Srtf => "Shortest Remaining Time First",
            Algorithm::RoundRobin => "Round Robin",
        }
    }

    /// Whether the discipline may interrupt a running task.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Algorithm::Srtf | Algorithm::RoundRobin)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scheduling algorithm: {0}")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Algorithm::Fcfs),
            "spn" | "sjf" => Ok(Algorithm::Spn),
            "hrrn" => Ok(Algorithm::Hrrn),
            "srtf" | "srt" => Ok(Algorithm::Srtf),
            "rr" | "round-robin" | "roundrobin" => Ok(Algorithm::RoundRobin),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}
