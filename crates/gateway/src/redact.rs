// SPDX-License-Identifier: MIT

//! Authorization- and mode-dependent redaction of kernel reports.
//!
//! Rules live in a per-task lookup table and are applied by a small
//! tree walker over field paths; rules whose path is absent from the
//! document are silent no-ops, which makes the whole transform
//! idempotent. Reduction runs before anonymization — later rules may
//! act on fields earlier ones already stripped.

use serde_json::Value;
use thiserror::Error;

use pimon_core::Task;

/// Error decoding the kernel body on the redaction path.
#[derive(Debug, Error)]
#[error("malformed kernel report: {0}")]
pub struct RedactError(#[from] serde_json::Error);

/// A field path from the document root.
type Path = &'static [&'static str];

/// One redaction operation.
enum Rule {
    /// Remove the field at the path from its parent object.
    Remove(Path),
    /// Remove the `samples`/`avgsamples` children of the sample
    /// logger at the path; the logger object itself stays.
    StripSamples(Path),
    /// Truncate the array at the path to its first element.
    KeepFirst(Path),
    /// For every object in the array at `path`, remove each of the
    /// given field paths.
    PruneEntries { path: Path, fields: &'static [Path] },
}

/// Fields a caller in reduced mode loses, per task. These are the
/// bulky historical time series; current values stay.
fn reduced_rules(task: Task) -> &'static [Rule] {
    match task {
        Task::Supply => &[
            Rule::StripSamples(&["report", "voltage"]),
            Rule::StripSamples(&["report", "current"]),
            Rule::StripSamples(&["report", "power"]),
            // the energy meter is history through and through
            Rule::Remove(&["report", "energy"]),
        ],
        Task::System => &[
            Rule::StripSamples(&["report", "net", "rx", "rates"]),
            Rule::StripSamples(&["report", "net", "tx", "rates"]),
            Rule::StripSamples(&["report", "disk", "write", "rate", "rates"]),
            Rule::StripSamples(&["report", "disk", "read", "rate", "rates"]),
            Rule::StripSamples(&["report", "system", "usage"]),
            Rule::StripSamples(&["report", "tempctrl", "speed"]),
            Rule::StripSamples(&["report", "tempctrl", "temp"]),
        ],
        Task::Weather => &[
            Rule::Remove(&["report", "forecast", "logs"]),
            Rule::Remove(&["report", "forecast", "hourly"]),
            Rule::Remove(&["report", "forecast", "daily"]),
        ],
        Task::Fritz => &[
            Rule::StripSamples(&["report", "dsl", "rx", "rate", "rates"]),
            Rule::StripSamples(&["report", "dsl", "tx", "rate", "rates"]),
        ],
        Task::Rcsocket => &[Rule::PruneEntries {
            path: &["report", "socketctrl", "sockets"],
            fields: &[&["log"], &["energy"]],
        }],
        Task::Sensor | Task::Notifier | Task::Traffic => &[],
    }
}

/// Fields an anonymous caller loses, per task, applied after the
/// reduced-mode rules on the same document.
fn anonymous_rules(task: Task) -> &'static [Rule] {
    match task {
        Task::Traffic => &[Rule::KeepFirst(&["report", "directions"])],
        // no device list (smartphone presence) for strangers
        Task::Fritz => &[Rule::Remove(&["report", "devices"])],
        Task::Rcsocket => &[Rule::PruneEntries {
            path: &["report", "socketctrl", "sockets"],
            fields: &[
                &["location"],
                &["name"],
                &["automat"],
                &["automat_msg"],
                &["log"],
                &["energy", "logs"],
            ],
        }],
        Task::Supply | Task::System | Task::Weather | Task::Sensor | Task::Notifier => &[],
    }
}

/// Apply the redaction transform for the session state.
///
/// A fully authorized, unreduced session short-circuits without
/// decoding; everything else decodes, mutates and re-encodes.
pub fn redact(
    task: Task,
    authorized: bool,
    reduced: bool,
    payload: &str,
) -> Result<String, RedactError> {
    if authorized && !reduced {
        return Ok(payload.to_string());
    }

    let mut doc: Value = serde_json::from_str(payload)?;

    if reduced {
        apply(&Rule::Remove(&["info", "totaltime"]), &mut doc);
        for rule in reduced_rules(task) {
            apply(rule, &mut doc);
        }
    }

    if !authorized {
        apply(&Rule::Remove(&["request"]), &mut doc);
        for rule in anonymous_rules(task) {
            apply(rule, &mut doc);
        }
    }

    Ok(doc.to_string())
}

fn apply(rule: &Rule, doc: &mut Value) {
    match rule {
        Rule::Remove(path) => remove_at(doc, path),
        Rule::StripSamples(path) => {
            if let Some(Value::Object(logger)) = lookup_mut(doc, path) {
                logger.remove("samples");
                logger.remove("avgsamples");
            }
        }
        Rule::KeepFirst(path) => {
            if let Some(Value::Array(entries)) = lookup_mut(doc, path) {
                entries.truncate(1);
            }
        }
        Rule::PruneEntries { path, fields } => {
            if let Some(Value::Array(entries)) = lookup_mut(doc, path) {
                for entry in entries.iter_mut() {
                    for field in *fields {
                        remove_at(entry, field);
                    }
                }
            }
        }
    }
}

/// Walk object keys down to the node at `path`.
fn lookup_mut<'a>(doc: &'a mut Value, path: &[&str]) -> Option<&'a mut Value> {
    path.iter().try_fold(doc, |node, key| node.get_mut(*key))
}

/// Remove the field named by the last path segment from its parent
/// object. Missing intermediate nodes make this a no-op.
fn remove_at(doc: &mut Value, path: &[&str]) {
    let Some((last, parents)) = path.split_last() else {
        return;
    };
    if let Some(Value::Object(parent)) = lookup_mut(doc, parents) {
        parent.remove(*last);
    }
}

#[cfg(test)]
#[path = "redact_tests.rs"]
mod tests;
