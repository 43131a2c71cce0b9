// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Prose normalization for text blocks embedded in LaTeX sources.

/// Normalize a prose block so it can be pasted into a LaTeX document.
///
/// - Typographic quotes become ASCII quotes, en/em dashes become `--`/`---`,
///   and no-break spaces become plain spaces.
/// - A bare `&` becomes the word "and"; a bare `%` is escaped as `\%`.
///   Already escaped `\&` and `\%` are left alone.
/// - Markdown strong emphasis (`**text**`) becomes `\textbf{text}`.
///
/// Running the function twice yields the same result as running it once.
pub fn latex_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        let escaped = prev == Some('\\');
        match ch {
            '&' if !escaped => push_and(&mut out, prev, chars.peek().copied()),
            '%' if !escaped => out.push_str("\\%"),
            c if push_typographic(&mut out, c) => {}
            c => out.push(c),
        }
        prev = Some(ch);
    }

    strong_to_textbf(&out)
}

/// Escape a free-form value (title, author, address) as literal LaTeX text.
///
/// Punctuation is normalized like [`latex_text`] and `&` is spelled out, but every
/// other special character prints as itself: `\` `#` `$` `%` `_` `{` `}` `~` `^`.
/// Markdown markers are not interpreted.
pub fn latex_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut prev: Option<char> = None;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '&' => push_and(&mut out, prev, chars.peek().copied()),
            '#' | '$' | '%' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(ch);
            }
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            '\\' => out.push_str("\\textbackslash{}"),
            c if push_typographic(&mut out, c) => {}
            c => out.push(c),
        }
        prev = Some(ch);
    }
    out
}

/// Flatten typographic quotes, dashes and no-break spaces; false when `ch` is none of them.
fn push_typographic(out: &mut String, ch: char) -> bool {
    match ch {
        '\u{201C}' | '\u{201D}' => out.push('"'),
        '\u{2018}' | '\u{2019}' => out.push('\''),
        '\u{2013}' => out.push_str("--"),
        '\u{2014}' => out.push_str("---"),
        '\u{00A0}' => out.push(' '),
        _ => return false,
    }
    true
}

/// Spell out `&` as a word, padding it with spaces where the neighbours lack them.
fn push_and(out: &mut String, prev: Option<char>, next: Option<char>) {
    if prev.is_some_and(|p| !p.is_whitespace()) {
        out.push(' ');
    }
    out.push_str("and");
    if next.is_some_and(|n| !n.is_whitespace()) {
        out.push(' ');
    }
}

/// Rewrite balanced `**...**` pairs as `\textbf{...}`; an unmatched marker is kept verbatim.
fn strong_to_textbf(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("**") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("**") else {
            break;
        };
        out.push_str(&rest[..start]);
        out.push_str("\\textbf{");
        out.push_str(&after[..end]);
        out.push('}');
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::{latex_literal, latex_text};

    #[test]
    fn latex_text_flattens_typographic_punctuation() {
        let input = "\u{201C}Black Box\u{201D} isn\u{2019}t 1991\u{2013}1995\u{2014}really\u{00A0}ok";
        assert_eq!(
            latex_text(input),
            "\"Black Box\" isn't 1991--1995---really ok"
        );
    }

    #[test]
    fn latex_text_escapes_bare_percent_only() {
        assert_eq!(latex_text("a 40% rate"), "a 40\\% rate");
        assert_eq!(latex_text("a 40\\% rate"), "a 40\\% rate");
    }

    #[test]
    fn latex_text_spells_out_ampersands() {
        assert_eq!(latex_text("Q-PID & Isochron"), "Q-PID and Isochron");
        assert_eq!(latex_text("A&B"), "A and B");
        assert_eq!(latex_text("R\\&D"), "R\\&D");
    }

    #[test]
    fn latex_text_converts_markdown_strong_emphasis() {
        assert_eq!(
            latex_text("a return to **Diegetic Prototyping** [2]"),
            "a return to \\textbf{Diegetic Prototyping} [2]"
        );
        assert_eq!(latex_text("dangling ** marker"), "dangling ** marker");
    }

    #[test]
    fn latex_text_is_idempotent() {
        let input = "**Design Fiction** & 40% of \u{201C}users\u{201D}";
        let once = latex_text(input);
        assert_eq!(latex_text(&once), once);
    }

    // Free-form values must not leak LaTeX control characters.
    #[test]
    fn latex_literal_escapes_special_characters() {
        assert_eq!(
            latex_literal("C# Artifacts_v2 {beta} 50% $5 & more"),
            "C\\# Artifacts\\_v2 \\{beta\\} 50\\% \\$5 and more"
        );
        assert_eq!(
            latex_literal("~user^2\\path"),
            "\\textasciitilde{}user\\textasciicircum{}2\\textbackslash{}path"
        );
        assert_eq!(latex_literal("first_last@example.org"), "first\\_last@example.org");
        assert_eq!(latex_literal("\u{201C}Quoted\u{201D}"), "\"Quoted\"");
    }
}
