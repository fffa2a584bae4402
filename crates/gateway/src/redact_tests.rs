// SPDX-License-Identifier: MIT

//! Rule-table behavior per task and authorization state.

use serde_json::{json, Value};

use super::*;

fn redacted(task: Task, authorized: bool, reduced: bool, doc: &Value) -> Value {
    let out = redact(task, authorized, reduced, &doc.to_string()).expect("valid doc");
    serde_json::from_str(&out).expect("redactor must emit valid JSON")
}

fn sample_logger() -> Value {
    json!({ "samples": [1, 2], "avgsamples": [1.5], "min": 1, "max": 2 })
}

#[test]
fn authorized_unreduced_is_byte_for_byte_passthrough() {
    // Short-circuit path: not even decoded, whitespace survives.
    let raw = "{ \"info\": { \"totaltime\": 5 },\n  \"report\": {} }";
    let out = redact(Task::Supply, true, false, raw).unwrap();
    assert_eq!(out, raw);
}

#[test]
fn reduced_removes_totaltime_for_every_task() {
    let doc = json!({ "info": { "totaltime": 5, "runtime": 1 }, "report": {} });
    for task in Task::ALL {
        let out = redacted(task, true, true, &doc);
        assert!(out["info"].get("totaltime").is_none(), "{task}");
        assert_eq!(out["info"]["runtime"], 1, "{task}");
    }
}

#[test]
fn reduced_supply_strips_loggers_and_drops_energy() {
    let doc = json!({
        "info": { "totaltime": 5 },
        "report": {
            "voltage": sample_logger(),
            "current": sample_logger(),
            "power": sample_logger(),
            "energy": { "logs": { "day": {} } }
        }
    });
    let out = redacted(Task::Supply, true, true, &doc);
    for field in ["voltage", "current", "power"] {
        let logger = &out["report"][field];
        assert!(logger.get("samples").is_none(), "{field}");
        assert!(logger.get("avgsamples").is_none(), "{field}");
        assert_eq!(logger["min"], 1, "other children of {field} survive");
    }
    assert!(out["report"].get("energy").is_none());
}

#[test]
fn reduced_system_strips_all_rate_loggers() {
    let doc = json!({
        "info": { "totaltime": 5 },
        "report": {
            "net": { "rx": { "rates": sample_logger() }, "tx": { "rates": sample_logger() } },
            "disk": {
                "write": { "rate": { "rates": sample_logger() } },
                "read": { "rate": { "rates": sample_logger() } }
            },
            "system": { "usage": sample_logger() },
            "tempctrl": { "speed": sample_logger(), "temp": sample_logger() }
        }
    });
    let out = redacted(Task::System, true, true, &doc);
    let report = &out["report"];
    for logger in [
        &report["net"]["rx"]["rates"],
        &report["net"]["tx"]["rates"],
        &report["disk"]["write"]["rate"]["rates"],
        &report["disk"]["read"]["rate"]["rates"],
        &report["system"]["usage"],
        &report["tempctrl"]["speed"],
        &report["tempctrl"]["temp"],
    ] {
        assert!(logger.get("samples").is_none());
        assert!(logger.get("avgsamples").is_none());
        assert_eq!(logger["min"], 1);
    }
}

#[test]
fn reduced_weather_drops_forecast_history() {
    let doc = json!({
        "info": { "totaltime": 5 },
        "report": {
            "forecast": { "logs": {}, "hourly": [], "daily": [], "currently": { "temp": 21 } }
        }
    });
    let out = redacted(Task::Weather, true, true, &doc);
    let forecast = &out["report"]["forecast"];
    assert!(forecast.get("logs").is_none());
    assert!(forecast.get("hourly").is_none());
    assert!(forecast.get("daily").is_none());
    assert_eq!(forecast["currently"]["temp"], 21);
}

#[test]
fn reduced_fritz_strips_dsl_rates_but_keeps_devices() {
    let doc = json!({
        "info": { "totaltime": 5 },
        "report": {
            "dsl": {
                "rx": { "rate": { "rates": sample_logger() } },
                "tx": { "rate": { "rates": sample_logger() } }
            },
            "devices": [ { "name": "phone", "log": [1] } ]
        }
    });
    let out = redacted(Task::Fritz, true, true, &doc);
    assert!(out["report"]["dsl"]["rx"]["rate"]["rates"].get("samples").is_none());
    assert!(out["report"]["dsl"]["tx"]["rate"]["rates"].get("samples").is_none());
    // per-device logs are inspected but never mutated in reduced mode
    assert_eq!(out["report"]["devices"][0]["log"][0], 1);
}

#[test]
fn anonymous_fritz_drops_the_device_list() {
    let doc = json!({ "info": {}, "report": { "devices": [ {} ], "dsl": {} } });
    let out = redacted(Task::Fritz, false, false, &doc);
    assert!(out["report"].get("devices").is_none());
    assert!(out["report"].get("dsl").is_some());
}

#[test]
fn reduced_rcsocket_prunes_log_and_energy_per_socket() {
    let doc = json!({
        "info": { "totaltime": 5 },
        "report": { "socketctrl": { "sockets": [
            { "name": "a", "log": [1], "energy": { "logs": [] }, "state": true },
            { "name": "b", "log": [2], "energy": { "logs": [] }, "state": false }
        ] } }
    });
    let out = redacted(Task::Rcsocket, true, true, &doc);
    for socket in out["report"]["socketctrl"]["sockets"].as_array().unwrap() {
        assert!(socket.get("log").is_none());
        assert!(socket.get("energy").is_none());
        assert!(socket.get("name").is_some(), "authorized callers keep names");
        assert!(socket.get("state").is_some());
    }
}

#[test]
fn anonymous_rcsocket_keeps_energy_totals_but_not_logs() {
    let doc = json!({
        "info": {},
        "report": { "socketctrl": { "sockets": [ {
            "name": "a", "location": "kitchen", "automat": {}, "automat_msg": "on at dusk",
            "log": [1], "energy": { "logs": [2], "total": 5 }, "state": true
        } ] } }
    });
    let out = redacted(Task::Rcsocket, false, false, &doc);
    let socket = &out["report"]["socketctrl"]["sockets"][0];
    for hidden in ["name", "location", "automat", "automat_msg", "log"] {
        assert!(socket.get(hidden).is_none(), "{hidden}");
    }
    assert!(socket["energy"].get("logs").is_none());
    assert_eq!(socket["energy"]["total"], 5);
    assert_eq!(socket["state"], true);
}

#[test]
fn anonymous_reduced_rcsocket_scenario() {
    // Reduction drops log/energy wholesale, anonymization then finds
    // nothing left of them and removes the identity fields.
    let raw = r#"{"info":{"totaltime":5},"report":{"socketctrl":{"sockets":[{"name":"a","log":[1],"energy":{"logs":[2]},"location":"x"}]}}}"#;
    let out: Value = serde_json::from_str(&redact(Task::Rcsocket, false, true, raw).unwrap()).unwrap();
    assert!(out["info"].get("totaltime").is_none());
    let socket = &out["report"]["socketctrl"]["sockets"][0];
    for hidden in ["name", "log", "energy", "location", "automat", "automat_msg"] {
        assert!(socket.get(hidden).is_none(), "{hidden}");
    }
}

#[test]
fn anonymous_traffic_keeps_only_the_first_direction() {
    let doc = json!({
        "info": {},
        "report": { "directions": [ { "id": 1 }, { "id": 2 }, { "id": 3 } ] }
    });
    let out = redacted(Task::Traffic, false, false, &doc);
    let directions = out["report"]["directions"].as_array().unwrap();
    assert_eq!(directions.len(), 1);
    assert_eq!(directions[0]["id"], 1);
}

#[test]
fn authorized_traffic_keeps_every_direction() {
    let raw = r#"{"info":{},"report":{"directions":[{"id":1},{"id":2},{"id":3}]}}"#;
    let out = redact(Task::Traffic, true, false, raw).unwrap();
    assert_eq!(out, raw);
}

#[test]
fn anonymous_callers_lose_the_request_section() {
    let doc = json!({ "info": {}, "report": {}, "request": { "pending": [] } });
    let out = redacted(Task::Sensor, false, false, &doc);
    assert!(out.get("request").is_none());
}

#[test]
fn authorized_reduced_keeps_the_request_section() {
    let doc = json!({ "info": { "totaltime": 5 }, "report": {}, "request": {} });
    let out = redacted(Task::Sensor, true, true, &doc);
    assert!(out.get("request").is_some());
    assert!(out["info"].get("totaltime").is_none());
}

#[test]
fn redaction_is_idempotent() {
    let doc = json!({
        "info": { "totaltime": 5 },
        "report": { "socketctrl": { "sockets": [
            { "name": "a", "log": [1], "energy": { "logs": [2] }, "location": "x" }
        ] } },
        "request": {}
    });
    let once = redact(Task::Rcsocket, false, true, &doc.to_string()).unwrap();
    let twice = redact(Task::Rcsocket, false, true, &once).unwrap();
    assert_eq!(
        serde_json::from_str::<Value>(&once).unwrap(),
        serde_json::from_str::<Value>(&twice).unwrap()
    );
}

#[test]
fn absent_fields_are_silent_noops() {
    let doc = json!({ "info": {}, "report": {} });
    for task in Task::ALL {
        let out = redacted(task, false, true, &doc);
        assert_eq!(out, doc, "{task}");
    }
}

#[test]
fn malformed_report_is_an_error_not_a_panic() {
    assert!(redact(Task::Sensor, false, false, "not json").is_err());
}
