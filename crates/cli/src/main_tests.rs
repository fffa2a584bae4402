// SPDX-License-Identifier: MIT

use super::*;

#[test]
fn report_invocation_parses() {
    let cli = Cli::try_parse_from([
        "pimon", "--task", "weather", "--timestamp", "1437080400000", "report",
    ])
    .unwrap();
    let map = cli.params.to_map();
    assert_eq!(map.get("task").map(String::as_str), Some("weather"));
    assert_eq!(map.get("timestamp").map(String::as_str), Some("1437080400000"));
    assert!(!map.contains_key("reduced"));
    assert!(matches!(cli.operation, Operation::Report));
}

#[test]
fn command_invocation_carries_command_and_payload() {
    let cli = Cli::try_parse_from([
        "pimon",
        "--task",
        "rcsocket",
        "--apikey",
        "k",
        "command",
        "--command",
        "socketctrl.toggle",
        "--payload",
        r#"{"id":1}"#,
    ])
    .unwrap();
    match cli.operation {
        Operation::Command { command, payload } => {
            assert_eq!(command.as_deref(), Some("socketctrl.toggle"));
            assert_eq!(payload.as_deref(), Some(r#"{"id":1}"#));
        }
        _ => panic!("expected command operation"),
    }
}

#[test]
fn absent_params_stay_out_of_the_map() {
    let cli = Cli::try_parse_from(["pimon", "quit"]).unwrap();
    assert!(cli.params.to_map().is_empty());
}
