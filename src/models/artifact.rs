// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! The physical objects of the collection.

/// One USB-housed art object and the copy that describes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Artifact {
    /// Display name, e.g. "The Q-PID".
    pub name: &'static str,
    /// Upper-case theme shown next to the name in the README.
    pub theme: &'static str,
    /// One-line pull quote.
    pub quote: &'static str,
    pub material: &'static str,
    pub payload: &'static str,
    pub function: &'static str,
    /// Photo filename as delivered under `images/`.
    pub photo: &'static str,
    /// Sanitized filename the photo is staged to.
    pub figure: &'static str,
    /// Short gallery caption.
    pub caption: &'static str,
}

impl Artifact {
    /// README heading, e.g. `1) THE Q-PID (LIQUID INTELLIGENCE)`.
    pub fn heading(&self, position: usize) -> String {
        format!(
            "{}) {} ({})",
            position,
            self.name.to_ascii_uppercase(),
            self.theme
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Artifact;

    #[test]
    fn heading_upper_cases_name_and_keeps_theme() {
        let artifact = Artifact {
            name: "The Q-PID",
            theme: "LIQUID INTELLIGENCE",
            quote: "",
            material: "",
            payload: "",
            function: "",
            photo: "",
            figure: "",
            caption: "",
        };
        assert_eq!(artifact.heading(1), "1) THE Q-PID (LIQUID INTELLIGENCE)");
    }
}
