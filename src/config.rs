//! Runtime configuration knobs for the host process.
//!
//! Plain value holders with no algorithmic content: accelerator performance
//! and priority hints plus a CPU power/thread policy. The benchmark driver
//! fills one [`RuntimeConfig`] from flags and hands it to whatever subsystem
//! consumes the hints. With the `config` feature the same structure loads
//! from TOML.

use std::str::FromStr;

#[cfg(feature = "config")]
use serde::Deserialize;

/// Accelerator performance hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum PerfHint {
    #[default]
    Default,
    Low,
    Normal,
    High,
}

/// Accelerator priority hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum PriorityHint {
    #[default]
    Default,
    Low,
    Normal,
    High,
}

/// CPU power / scheduling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum PowerPolicy {
    #[default]
    Default,
    HighPerformance,
    BatterySave,
}

impl FromStr for PerfHint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "low" => Ok(Self::Low),
            "normal" => Ok(Self::Normal),
            "high" => Ok(Self::High),
            other => Err(format!("unknown perf hint: {other}")),
        }
    }
}

impl FromStr for PriorityHint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "low" => Ok(Self::Low),
            "normal" => Ok(Self::Normal),
            "high" => Ok(Self::High),
            other => Err(format!("unknown priority hint: {other}")),
        }
    }
}

impl FromStr for PowerPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "high_performance" => Ok(Self::HighPerformance),
            "battery_save" => Ok(Self::BatterySave),
            other => Err(format!("unknown power policy: {other}")),
        }
    }
}

/// Process-wide runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Deserialize))]
#[cfg_attr(feature = "config", serde(default, rename_all = "snake_case"))]
pub struct RuntimeConfig {
    perf_hint: PerfHint,
    priority_hint: PriorityHint,
    num_threads: usize,
    power: PowerPolicy,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            perf_hint: PerfHint::Default,
            priority_hint: PriorityHint::Default,
            num_threads: 1,
            power: PowerPolicy::Default,
        }
    }
}

impl RuntimeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn perf_hint(&self) -> PerfHint {
        self.perf_hint
    }

    pub fn priority_hint(&self) -> PriorityHint {
        self.priority_hint
    }

    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    pub fn power(&self) -> PowerPolicy {
        self.power
    }

    pub fn set_perf_hint(&mut self, hint: PerfHint) -> &mut Self {
        self.perf_hint = hint;
        self
    }

    pub fn set_priority_hint(&mut self, hint: PriorityHint) -> &mut Self {
        self.priority_hint = hint;
        self
    }

    /// Worker thread count; clamped to at least one.
    pub fn set_num_threads(&mut self, num_threads: usize) -> &mut Self {
        self.num_threads = num_threads.max(1);
        self
    }

    pub fn set_power(&mut self, policy: PowerPolicy) -> &mut Self {
        self.power = policy;
        self
    }

    /// Parse a configuration from TOML text.
    #[cfg(feature = "config")]
    pub fn from_toml_str(text: &str) -> crate::error::Result<Self> {
        toml::from_str(text).map_err(|e| crate::error::BlobmapError::config(e.to_string()))
    }
}
