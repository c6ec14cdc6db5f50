/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::io::{self, Write};

pub const VALUES_PER_LINE: usize = 8;

/// Renders `pixels` as a `std::array<uint32_t, N>` declaration named `identifier`.
pub fn format_declaration(identifier: &str, pixels: &[u32]) -> String {
    let mut out = format!("std::array<uint32_t, {}> {} = {{\n", pixels.len(), identifier);
    // 12 bytes per "0xAABBGGRR, " plus a line break every 8
    out.reserve(pixels.len() * 13 + 3);

    let last = pixels.len().saturating_sub(1);
    for (i, px) in pixels.iter().enumerate() {
        out.push_str(&format!("0x{px:08X}"));
        if i != last {
            out.push_str(", ");
        }
        if (i + 1) % VALUES_PER_LINE == 0 {
            out.push('\n');
        }
    }

    out.push_str("\n};");
    out
}

pub fn write_declaration<W: Write>(w: &mut W, identifier: &str, pixels: &[u32]) -> io::Result<()> {
    w.write_all(format_declaration(identifier, pixels).as_bytes())
}

/// Pulls the `0x`-prefixed literals back out of a declaration's body, in order.
pub fn parse_hex_literals(text: &str) -> Vec<u32> {
    let body = text.split_once('{').map_or(text, |(_, body)| body);
    body.split(|c: char| c == ',' || c.is_whitespace() || c == '}' || c == ';')
        .filter_map(|tok| tok.strip_prefix("0x").or_else(|| tok.strip_prefix("0X")))
        .filter_map(|hex| u32::from_str_radix(hex, 16).ok())
        .collect()
}

/// Checks that `identifier` matches `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_valid_identifier(identifier: &str) -> bool {
    let mut chars = identifier.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
