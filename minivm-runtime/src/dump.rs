//! Human-readable memory dumps

use std::fmt::Write;

/// Layout caption printed under every dump. Aligns with the hex cells above it.
pub const CAPTION: &str = "INSTRUCTIONS ---------------------------^ OUT-^ IN-1^ IN-2^";

/// Render `label`, then every cell as two-digit hex followed by a space, then the caption.
pub fn format_memory(label: &str, memory: &[u8]) -> String {
    let mut out = String::with_capacity(label.len() + memory.len() * 3 + CAPTION.len() + 4);
    out.push_str(label);
    out.push('\n');
    for byte in memory {
        let _ = write!(out, "{:02x} ", byte);
    }
    out.push('\n');
    out.push_str(CAPTION);
    out.push_str("\n\n");
    out
}
