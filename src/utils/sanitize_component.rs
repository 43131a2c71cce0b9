// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Produce filesystem- and LaTeX-safe path components for staged figures.

/// Name used when a component sanitizes down to nothing.
const FALLBACK_COMPONENT: &str = "figure";

/// Produce a filesystem-safe path component.
///
/// # Steps
/// - Transliterate Unicode to ASCII with `deunicode` (e.g., "Å" → "A").
/// - Allow ASCII alphanumerics plus `-`, `_`, and `.`; treat other characters as `_`.
/// - Collapse runs of `_` and `.`; trim trailing dots/spaces.
/// - Guard against reserved/empty names.
///
/// Spaces and parentheses never survive, which is what `\includegraphics`
/// needs from a filename.
pub fn sanitize_component(value: &str) -> String {
    let transliterated = deunicode::deunicode(value);
    let mut out = String::with_capacity(transliterated.len());
    let mut last: Option<char> = None;

    for ch in transliterated.chars() {
        let mapped = if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == '.' {
            ch
        } else {
            '_'
        };

        match mapped {
            '_' | '.' if last == Some(mapped) => {}
            c => {
                out.push(c);
                last = Some(c);
            }
        }
    }

    // No stray underscore right before the extension.
    while let Some(pos) = out.find("_.") {
        out.remove(pos);
    }

    while out.ends_with('.') || out.ends_with(' ') {
        out.pop();
    }

    if out.is_empty() || out == "." || out == ".." || out == "_" {
        return FALLBACK_COMPONENT.to_string();
    }

    let (basename, ext) = match out.rsplit_once('.') {
        Some((base, ext)) if !base.is_empty() => (base.to_string(), Some(ext.to_string())),
        _ => (out.clone(), None),
    };

    if is_reserved_device_name(&basename) {
        let mut new_base = basename;
        new_base.push('_');
        out = if let Some(ext) = ext {
            format!("{new_base}.{ext}")
        } else {
            new_base
        };
    }

    out
}

/// True when `name` passes through [`sanitize_component`] unchanged.
pub fn is_safe_component(name: &str) -> bool {
    sanitize_component(name) == name
}

fn is_reserved_device_name(basename: &str) -> bool {
    let upper = basename.to_ascii_uppercase();
    match upper.as_str() {
        "CON" | "PRN" | "AUX" | "NUL" => true,
        other => {
            let bytes = other.as_bytes();
            bytes.len() == 4
                && (other.starts_with("COM") || other.starts_with("LPT"))
                && matches!(bytes[3], b'1'..=b'9')
        }
    }
}
