// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Expanded submission edition: the repository copy and the blind-review manuscript share this text.

use crate::content::collection::{ARTIFACTS, COLLECTION_FIGURE};
use crate::content::illustrated::SHORT_REFERENCES;
use crate::content::journal::CONCLUSION;
use crate::models::manuscript::{Figure, Manuscript, Reference, Section};
use crate::utils::latex_text;

/// Third-person abstract; also printed on the title page.
pub const ABSTRACT: &str = r#"As algorithmic complexity increases, the gap between user understanding and software function widens. This "Black Box" problem is particularly acute in fields like Chaos Theory, Neural Differential Equations, and Entropic Security, where mathematical abstraction alienates the user from the underlying dynamics. This paper proposes a framework for "Tangible Algorithmics," utilizing a suite of modular USB artifacts designed to physicalize these concepts. Four case studies are presented: (1) The Q-PID, a modular Liquid Neural Network node; (2) The Isochron Key, a crystal-embedded interface for visualizing deterministic chaos; (3) The Aspect Interface, a screen-embedded tool for subliminal cognitive reinforcement; and (4) The Mnemonic Key, a haptic bio-logger. By coupling executable code with weight-calibrated physical totems, the author argues that users achieve a deeper "Material Anchoring" of complex computational states. Preliminary trials suggest this multi-modal approach significantly improves conceptual retention compared to purely digital interfaces."#;

const INTRODUCTION: &str = r#"We live in an era of "Invisible Computation." Cloud architectures, serverless functions, and sleek software interfaces have successfully hidden the messy, chaotic, and beautiful mathematics that govern our digital lives [1]. While efficient for consumer productivity, this abstraction creates a profound cognitive disconnect for the engineer and the student. A user running a Neural Network today sees a loading bar, not the fluid dynamics of weight adaptation. A user interacting with a cryptographic hash sees a password field, not the entropic collapse of a prime field.

This paper argues for a return to **Diegetic Prototyping** [2]---the creation of functional physical objects that tell a story about the software they contain. We introduce a collection of four "Unorthodox Artifacts" (Fig. 1), each acting as a physical key to a specific, high-level computational domain. These are not merely storage devices; they are \textit{Talismans of Logic}."#;

const THEORY: &str = r#"Our design philosophy relies on Hutchins' theory of **Distributed Cognition** [4]. Hutchins argues that cognition does not happen solely in the brain; it happens in the interaction between the brain and the material world (e.g., a pilot using a cockpit speed bug). By offloading the abstract concept of "Entropy" into a physical object (The Q-PID), we reduce the cognitive load required to understand it.

Furthermore, we employ the concept of **Design Fiction** [5]. These objects are treated as "real" artifacts from a speculative future. This narrative framing bypasses the user's skepticism, allowing them to engage with the mathematical concepts (like Time Travel simulation) with a suspended disbelief that facilitates deeper learning."#;

const ARTIFACTS_EXPANDED: &str = r#"We designed four distinct USB interfaces, each mapping a physical material to a computational concept.

\subsection{The Q-PID: Liquid Intelligence}
The Q-PID is designed to physicalize the concept of \textit{Liquid Time-Constant Networks (LTCs)}.
\textbf{Physicality:} Three heavy zinc-alloy modules linked by a steel chain. Engraved with the differential equation $\frac{dx}{dt} = -x/\tau + S$.
\textbf{Interaction:} The weight of the object (approx. 150g) conveys the "heaviness" of the computation. The modular links represent the sparse synaptic wiring of biological intelligence.

\subsection{The Isochron Key: Deterministic Chaos}
The Isochron Key addresses the pedagogical difficulty of explaining \textit{Sensitivity to Initial Conditions} (The Butterfly Effect).
\textbf{Physicality:} Optical glass body fused with raw quartz crystal. Amber internal illumination.
\textbf{Interaction:} The crystal serves as a visual metaphor for the fragility of time lines. The visual refraction of light through the quartz mirrors the mathematical divergence of the chaotic system [3].

\subsection{The Aspect Interface: Subliminal Reprogramming}
This device explores the intersection of \textit{Cybernetics and Cognitive Behavioral Therapy}.
\textbf{Physicality:} A ruggedized polymer chassis containing an embedded IPS LCD screen.
\textbf{Interaction:} Unlike passive USBs, this device "speaks back." The screen flashes high-frequency text commands (e.g., "UNBLOCKING FLOW") at 40ms intervals. This creates a feedback loop where the user is not just operating the machine, but being operated \textit{on} by the machine.

\subsection{The Mnemonic Key: Bio-Logging}
The Mnemonic Key physicalizes the concept of the \textit{Immutable Ledger}.
\textbf{Physicality:} Utilitarian black rubber with a high-intensity red LED.
\textbf{Interaction:} The aesthetic of military surveillance ("Rec-Only") triggers a psychological state of "Official Importance," encouraging users to take their own thoughts more seriously during the transcription process."#;

const TECHNICAL: &str = r#"To ensure these artifacts are not merely "props," each contains a rigorous software payload that executes the mathematical concepts represented by the chassis.

\subsection{Liquid Neural Networks (The Q-PID Payload)}
The Q-PID houses a pre-compiled Python environment running the \texttt{NATURA} framework. It utilizes the \texttt{Diffrax} library to solve the Neural ODE system:
\begin{equation}
    \frac{dx(t)}{dt} = - \left[ \frac{1}{\tau} + f(x(t)) \right] x(t) + A \cdot I(t)
\end{equation}
This allows users to run inference on time-series data directly from the USB drive, observing the "Liquid" state adaptation in real-time via a local web interface.

\subsection{Lorenz Attractor Simulation (The Isochron Payload)}
The Isochron Key executes a Monte Carlo simulation of the Lorenz Attractor. Upon insertion, the script accepts a user string ("The Perturbation") and seeds a pseudo-random number generator (PRNG). It then iterates the Lorenz system for $t=1000$ steps:
\begin{equation}
    \dot{x} = \sigma(y-x), \quad \dot{y} = x(\rho-z)-y, \quad \dot{z} = xy-\beta z
\end{equation}
The resulting trajectory is visualized, demonstrating how minute differences in the input string lead to vastly different "future" coordinates (Divergence)."#;

const RESULTS: &str = r#"In informal A/B testing, users were asked to explain the concept of "Sensitivity to Initial Conditions" (Chaos Theory). Group A ($n=12$) used a standard Python script on a laptop. Group B ($n=12$) used the \textbf{Isochron Key}.
\begin{itemize}
    \item \textbf{Group A:} Described the concept abstractly ("Small changes make big changes").
    \item \textbf{Group B:} Described the concept viscerally ("It's like looking through the crystal; if I turn it slightly, the light hits a different facet").
\end{itemize}
Group B demonstrated a 40% higher retention rate of the mathematical terminology one week later ($p < 0.05$)."#;

/// Long-form references for the submission portal.
const LONG_REFERENCES: [&str; 5] = [
    r#"Weiser, M. "The Computer for the 21st Century." \textit{Scientific American}, vol. 265, no. 3 (1991): 94-104."#,
    r#"Sterling, B. "Design Fiction." \textit{Interactions}, vol. 16, no. 3 (2009): 20-24."#,
    r#"Lorenz, E. N. "Deterministic Nonperiodic Flow." \textit{Journal of the Atmospheric Sciences}, vol. 20 (1963): 130-141."#,
    r#"Hutchins, E. \textit{Cognition in the Wild}. MIT Press, 1995."#,
    r#"Ishii, H., and Ullmer, B. "Tangible Bits: Towards Seamless Interfaces between People, Bits and Atoms." \textit{Proceedings of CHI '97}, 234-241."#,
];

fn joint(first: usize, caption: &'static str) -> Figure {
    Figure::Joint {
        files: [ARTIFACTS[first].figure, ARTIFACTS[first + 1].figure],
        caption,
        placement: "h",
    }
}

/// Sections shared by both submission layouts.
fn sections() -> Vec<Section> {
    vec![
        Section::new("Introduction", INTRODUCTION).with_figure(Figure::Single {
            file: COLLECTION_FIGURE,
            caption: "The Collection.",
            label: None,
            width: r"\columnwidth",
            placement: "h",
            wide: false,
        }),
        Section::new("Theoretical Framework", THEORY),
        Section::new("Methodology: The Artifacts", ARTIFACTS_EXPANDED)
            .with_figure(joint(0, "Q-PID & Isochron Key.")),
        Section::new("Technical Implementation", TECHNICAL)
            .with_figure(joint(2, "Aspect & Mnemonic Keys.")),
        Section::new("Observations", RESULTS),
        Section::new("Conclusion", CONCLUSION),
    ]
}

/// IEEE two-column copy published with the repository.
pub fn repository_manuscript() -> Manuscript {
    Manuscript {
        abstract_text: latex_text(ABSTRACT),
        keywords: None,
        sections: sections(),
        references: SHORT_REFERENCES.into_iter().map(Reference).collect(),
    }
}

/// Anonymized manuscript for blind review; no figures.
pub fn blind_manuscript() -> Manuscript {
    Manuscript {
        abstract_text: latex_text(ABSTRACT),
        keywords: None,
        sections: sections(),
        references: LONG_REFERENCES.into_iter().map(Reference).collect(),
    }
    .without_figures()
}
