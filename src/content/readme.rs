// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! README copy. Sections built from the artifact list live in `logic::readme`.

pub const HEADLINE: &str = "THE UNORTHODOX ARTIFACTS";
pub const STRAPLINE: &str = "TANGIBLE ALGORITHMICS • DIEGETIC PROTOTYPING • DARK RESEARCH AESTHETICS";

pub const BADGES: &str = r#"[![Paper](https://img.shields.io/badge/Read-The_Research_Paper-blue?style=for-the-badge&logo=adobeacrobatreader)](./hci_paper.pdf)
[![Status](https://img.shields.io/badge/Status-Manufactured-success?style=for-the-badge)]()
[![Build PDF](https://img.shields.io/badge/Build-HCI_Paper_(Tectonic)-yellow?style=for-the-badge&logo=latex)](#-build-the-hci-paper)
[![Made with Rust](https://img.shields.io/badge/Made_with-Rust-000000?style=for-the-badge&logo=rust&logoColor=white)]()
[![License](https://img.shields.io/badge/License-MIT_Leonardo-black?style=for-the-badge)]()

*As submitted to MIT Press (Leonardo Journal), 2025.*"#;

pub const MANIFESTO: &str = r#"We live in an era of "Invisible Computation." We believe code should have **weight**.
This collection physicalizes abstract mathematical dynamics—Chaos Theory, Liquid Neural Networks, and Entropy—into functional, heavy-metal interfaces.

**These are not just USB drives. They are Talismans of Logic.**

By placing algorithms into hand-made, high-mass forms, we invite a tactile relationship with abstraction. Each artifact is a field guide from the future—equal parts instrument, sculpture, and research probe."#;

pub const QUICKSTART: &str = r#"```bash
# 1) Clone
git clone https://github.com/your-org/your-repo.git
cd your-repo

# 2) Generate/refresh the README (optional)
artifact-press readme

# 3) Open the paper
start hci_paper.pdf  # Windows
# open hci_paper.pdf  # macOS
# xdg-open hci_paper.pdf  # Linux
```"#;

pub const BUILD_PAPER: &str = r#"You can reproduce the PDF locally. On Windows the portable LaTeX engine (Tectonic) is downloaded on first use.

- Any platform:
  ```bash
  artifact-press paper illustrated --open
  ```
- Windows (PowerShell), by hand:
  ```powershell
  .\tectonic.exe .\hci_paper.tex
  ```
- macOS/Linux (requires TeX Live or Tectonic):
  ```bash
  artifact-press --compiler tectonic paper illustrated  # or
  pdflatex hci_paper.tex && bibtex hci_paper && pdflatex hci_paper.tex && pdflatex hci_paper.tex
  ```

The result will be `hci_paper.pdf` in the project root. The blind-review manuscript and the repository copy are produced by `artifact-press paper submission`."#;

pub const ALGORITHMS: &str = r#"- **Liquid Neural Networks (NCPs / NATURA)**
  - Sparse, stateful recurrent cells capable of continuous-time adaptation.
  - Useful for time-series, control, and embodied intelligence.
- **Lorenz Attractor (Deterministic Chaos)**
  - Classic chaotic system with sensitive dependence on initial conditions.
  - Monte Carlo perturbations visualize trajectory divergence.
- **Perceptual Flash Protocols (Visual Routines)**
  - Rapid temporal patterning designed to disrupt habitual attention and invite exploration.
- **Cognitive Externalization (Mnemonic Ledger)**
  - Speculative interface for logging thought prompts and associations.

> This repository focuses on artistic research and HCI prototyping. Implementations are simplified and designed for demonstration."#;

pub const ETHICS: &str = r#"- These artifacts are **art/research prototypes**. They are not medical devices and make **no therapeutic, diagnostic, or surveillance claims**.
- Do not operate visual flash sequences if you are photo‑sensitive or advised to avoid strobing stimuli.
- Respect privacy: any logging mechanism should be used with explicit consent and local, secure storage."#;

pub const FAQ: &str = r#"**Are these real objects?**  Yes—functional prototypes with working payloads where noted.

**Can I buy one?**  Limited runs may be produced. For inquiries, reach out below.

**Can I contribute code or research?**  PRs and issues are welcome—especially for reproducibility, simulation improvements, and documentation."#;

pub const LICENSE: &str = r#"Unless otherwise noted:
- Code and text are released under **MIT (Leonardo)**.
- Images/renderings are provided for research and documentation; check provenance before commercial reuse."#;

pub const MOTTO: &str = "The Future is Unwritten, but it is Deterministic.";
pub const CITATION_KEY: &str = "unorthodox2025tangible";
pub const CITATION_VENUE: &str = "Proceedings / Leonardo (MIT Press) — Submission";
pub const CITATION_URL: &str = "https://github.com/your-org/your-repo/hci_paper.pdf";
pub const FOOTER: &str = "— END OF DOSSIER —";
