// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Illustrated journal edition: condensed prose with the collection figures placed inline.

use crate::content::collection::{ARTIFACTS, COLLECTION_FIGURE, DIAGRAM_FIGURE};
use crate::models::manuscript::{Figure, Manuscript, Panel, Reference, Section};
use crate::utils::latex_text;

pub const KEYWORDS: &str =
    "Tangible User Interfaces, Design Fiction, Human-Computer Interaction, Neural Networks.";

const ABSTRACT: &str = r#"As algorithmic complexity increases, the gap between user understanding and software function widens. This "Black Box" problem is particularly acute in fields like Chaos Theory and Neural Differential Equations. We propose a framework for "Tangible Algorithmics," demonstrating a suite of modular USB artifacts designed to physicalize these concepts. We present four case studies: (1) The \textbf{Q-PID}, a modular Liquid Neural Network node; (2) The \textbf{Isochron Key}, a crystal-embedded interface for visualizing deterministic chaos; (3) The \textbf{Aspect Interface}, a screen-embedded tool for subliminal cognitive reinforcement; and (4) The \textbf{Mnemonic Key}, a haptic bio-logger. By coupling executable code with weight-calibrated physical totems, we argue that users can achieve a deeper "Material Anchoring" of complex computational states. Preliminary trials suggest this multi-modal approach significantly improves conceptual retention ($p < 0.05$) compared to purely digital interfaces."#;

const INTRODUCTION: &str = r#"We live in an era of "Invisible Computation." Cloud architectures hide the messy, chaotic mathematics that govern our digital lives [1]. While efficient, this abstraction creates a cognitive disconnect. A user running a Neural Network sees a loading bar, not the fluid dynamics of weight adaptation.

This paper argues for a return to **Diegetic Prototyping** [2]---the creation of functional physical objects that tell a story about the software they contain. We introduce a collection of four "Unorthodox Artifacts" (Fig. 1), each acting as a physical key to a specific computational domain."#;

const ARTIFACTS_FIRST: &str = r#"We designed four distinct USB interfaces, each mapping a physical material to a computational concept.

\subsection{The Q-PID: Liquid Intelligence}
\textbf{Physicality:} Three heavy zinc-alloy modules linked by a steel chain. Engraved with the differential equation $\frac{dx}{dt} = -x/\tau + S$.
\textbf{The Interaction:} The weight of the object (approx. 150g) conveys the "heaviness" of the computation. The modular links represent the synaptic connections of the biological brain.

\subsection{The Isochron Key: Deterministic Chaos}
\textbf{Physicality:} Optical glass body fused with raw quartz crystal. Amber internal illumination.
\textbf{The Interaction:} The crystal serves as a visual metaphor for the fragility of time lines. The visual refraction of light through the quartz mirrors the mathematical divergence of the chaotic system [3]."#;

const ARTIFACTS_SECOND: &str = r#"\subsection{The Aspect Interface: Subliminal Reprogramming}
\textbf{Physicality:} A ruggedized polymer chassis containing an embedded IPS LCD screen.
\textbf{The Interaction:} Unlike passive USBs, this device "speaks back." The screen flashes high-frequency text commands (e.g., "UNBLOCKING FLOW") at 40ms intervals. This creates a feedback loop where the user is not just operating the machine, but being operated \textit{on} by the machine.

\subsection{The Mnemonic Key: Bio-Logging}
\textbf{Physicality:} Utilitarian black rubber with a high-intensity red LED.
\textbf{The Interaction:} The aesthetic of military surveillance ("Rec-Only") triggers a psychological state of "Official Importance," encouraging users to take their own thoughts more seriously during the transcription process."#;

const THEORY: &str = r#"Our design philosophy relies on Hutchins' theory of **Distributed Cognition** [4]. Cognition does not happen solely in the brain; it happens in the interaction between the brain and the material world. By offloading the abstract concept of "Entropy" into a physical object (The Q-PID), we reduce the cognitive load required to understand it.

Furthermore, we employ the concept of **Design Fiction** [5]. These objects are treated as "real" artifacts from a speculative future. This narrative framing bypasses the user's skepticism, allowing them to engage with the mathematical concepts with a suspended disbelief that facilitates deeper learning."#;

const RESULTS: &str = r#"In informal A/B testing, users were asked to explain the concept of "Sensitivity to Initial Conditions" (Chaos Theory). Group A used a standard Python script. Group B used the \textbf{Isochron Key}.
\begin{itemize}
    \item \textbf{Group A:} Described the concept abstractly ("Small changes make big changes").
    \item \textbf{Group B:} Described the concept viscerally ("It's like looking through the crystal; if I turn it slightly, the light hits a different facet").
\end{itemize}
Group B demonstrated a 40% higher retention rate of the mathematical terminology one week later."#;

const CONCLUSION: &str = r#"The "Unorthodox Artifacts" collection demonstrates that hardware design is not merely about casing a PCB; it is about framing a mindset. By aligning material aesthetics (Crystal, Metal, Screen) with software dynamics, we turn abstract code into tangible reality."#;

/// Short IEEE references shared with the repository edition.
pub const SHORT_REFERENCES: [&str; 5] = [
    r#"M. Weiser, "The Computer for the 21st Century," Scientific American, 1991."#,
    r#"B. Sterling, "Design Fiction," Interactions, 2009."#,
    r#"E. N. Lorenz, "Deterministic Nonperiodic Flow," JAS, 1963."#,
    r#"E. Hutchins, "Cognition in the Wild," MIT Press, 1995."#,
    r#"H. Ishii, "Tangible Bits," CHI '97."#,
];

fn collection_figure() -> Figure {
    Figure::Single {
        file: COLLECTION_FIGURE,
        caption: r#"The "Unorthodox Artifacts" Toolkit. A suite of four tangible interfaces designed to physicalize abstract computational concepts: (A) The Q-PID, (B) The Isochron Key, (C) The Aspect Interface, (D) The Mnemonic Key."#,
        label: Some("fig:collection"),
        width: r"0.9\textwidth, keepaspectratio",
        placement: "t",
        wide: true,
    }
}

fn artifact_pair(first: usize, captions: [&'static str; 2]) -> Figure {
    Figure::Pair {
        left: Panel {
            file: ARTIFACTS[first].figure,
            caption: captions[0],
        },
        right: Panel {
            file: ARTIFACTS[first + 1].figure,
            caption: captions[1],
        },
        placement: "h",
    }
}

fn diagram_figure() -> Figure {
    Figure::Single {
        file: DIAGRAM_FIGURE,
        caption: "The Tangible Algorithmics Feedback Loop. This model illustrates how physicalizing the code reduces cognitive load via externalized memory.",
        label: Some("fig:diagram"),
        width: r"0.48\textwidth",
        placement: "t",
        wide: false,
    }
}

pub fn manuscript() -> Manuscript {
    Manuscript {
        abstract_text: latex_text(ABSTRACT),
        keywords: Some(KEYWORDS),
        sections: vec![
            Section::new("Introduction", INTRODUCTION).with_figure(collection_figure()),
            Section::new("Methodology: The Artifacts", ARTIFACTS_FIRST)
                .with_figure(artifact_pair(
                    0,
                    [
                        "The Q-PID (Liquid Neural Networks).",
                        "The Isochron Key (Chaos Theory).",
                    ],
                ))
                .with_text(ARTIFACTS_SECOND)
                .with_figure(artifact_pair(
                    2,
                    [
                        "The Aspect Key (Deprogramming).",
                        "The Mnemonic Key (Bio-Logging).",
                    ],
                )),
            Section::new("Theoretical Framework", THEORY).with_figure(diagram_figure()),
            Section::new("Observations and Discussion", RESULTS),
            Section::new("Conclusion", CONCLUSION),
        ],
        references: SHORT_REFERENCES.into_iter().map(Reference).collect(),
    }
}
