// SPDX-License-Identifier: MIT

//! The fixed set of monitored subsystems served by the kernel.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A monitored subsystem. The set is fixed at compile time; the kernel
/// knows no other task names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Task {
    Supply,
    System,
    Weather,
    Fritz,
    Sensor,
    Notifier,
    Traffic,
    Rcsocket,
}

/// Error for a task name outside the fixed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown task: {0}")]
pub struct UnknownTask(pub String);

impl Task {
    /// All tasks, in kernel scheduling order.
    pub const ALL: [Task; 8] = [
        Task::Supply,
        Task::System,
        Task::Weather,
        Task::Fritz,
        Task::Sensor,
        Task::Notifier,
        Task::Traffic,
        Task::Rcsocket,
    ];

    /// Wire name of the task, as the kernel expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Task::Supply => "supply",
            Task::System => "system",
            Task::Weather => "weather",
            Task::Fritz => "fritz",
            Task::Sensor => "sensor",
            Task::Notifier => "notifier",
            Task::Traffic => "traffic",
            Task::Rcsocket => "rcsocket",
        }
    }
}

impl FromStr for Task {
    type Err = UnknownTask;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "supply" => Ok(Task::Supply),
            "system" => Ok(Task::System),
            "weather" => Ok(Task::Weather),
            "fritz" => Ok(Task::Fritz),
            "sensor" => Ok(Task::Sensor),
            "notifier" => Ok(Task::Notifier),
            "traffic" => Ok(Task::Traffic),
            "rcsocket" => Ok(Task::Rcsocket),
            other => Err(UnknownTask(other.to_string())),
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
