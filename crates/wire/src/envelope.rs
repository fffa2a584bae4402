// SPDX-License-Identifier: MIT

//! The uniform `{success, payload}` reply wrapper.

/// Wrap a successful payload. `payload` must already be valid JSON
/// text (the redactor's output, or the kernel's body); it is embedded
/// raw. An empty body (the kernel's EXIT reply carries none) becomes
/// `null` so the envelope stays well-formed.
pub fn wrap_ok(payload: &str) -> String {
    let body = if payload.is_empty() { "null" } else { payload };
    format!(r#"{{"success":true,"payload":{body}}}"#)
}

/// Wrap a failure. The payload is embedded as a quoted string,
/// typically a 3-character status code.
pub fn wrap_err(payload: &str) -> String {
    format!(r#"{{"success":false,"payload":"{payload}"}}"#)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_embeds_raw_json() {
        assert_eq!(
            wrap_ok(r#"{"info":{}}"#),
            r#"{"success":true,"payload":{"info":{}}}"#
        );
    }

    #[test]
    fn empty_success_body_becomes_null() {
        assert_eq!(wrap_ok(""), r#"{"success":true,"payload":null}"#);
    }

    #[test]
    fn failure_embeds_quoted_string() {
        assert_eq!(wrap_err("E24"), r#"{"success":false,"payload":"E24"}"#);
    }

    #[test]
    fn output_is_parseable_json() {
        let parsed: serde_json::Value = serde_json::from_str(&wrap_ok("[1,2]")).unwrap();
        assert_eq!(parsed["success"], true);
        assert_eq!(parsed["payload"][0], 1);
    }
}
