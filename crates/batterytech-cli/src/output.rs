// SPDX-License-Identifier: Apache-2.0

use serde_json::Value;
use std::io::Write;

#[derive(Clone, Copy)]
pub(crate) struct OutputMode {
    pub json: bool,
}

/// Machine mode prints compact JSON, human mode prints `text`.
pub(crate) fn emit(
    out: &mut impl Write,
    mode: OutputMode,
    payload: &Value,
    text: &str,
) -> Result<(), String> {
    let rendered = if mode.json {
        serde_json::to_string(payload).map_err(|e| e.to_string())?
    } else {
        text.trim_end().to_string()
    };
    writeln!(out, "{rendered}").map_err(|e| format!("write failed: {e}"))
}
