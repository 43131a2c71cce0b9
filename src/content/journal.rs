// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! First journal edition: full-length prose, no figures.

use crate::models::manuscript::{Manuscript, Reference, Section};
use crate::utils::latex_text;

pub const KEYWORDS: &str = "Tangible User Interfaces, Design Fiction, Human-Computer Interaction, Neural Networks, Diegetic Prototyping.";

const ABSTRACT: &str = r#"As algorithmic complexity increases, the gap between user understanding and software function widens. This "Black Box" problem is particularly acute in fields like Chaos Theory and Neural Differential Equations, where mathematical abstraction alienates the user from the underlying dynamics. We propose a framework for "Tangible Algorithmics," demonstrating a suite of modular USB artifacts designed to physicalize these concepts. We present four case studies: (1) The \textbf{Q-PID}, a modular Liquid Neural Network node; (2) The \textbf{Isochron Key}, a crystal-embedded interface for visualizing deterministic chaos; (3) The \textbf{Aspect Interface}, a screen-embedded tool for subliminal cognitive reinforcement; and (4) The \textbf{Mnemonic Key}, a haptic bio-logger. By coupling executable code with weight-calibrated, aesthetically distinct physical totems, we argue that users can achieve a deeper "Material Anchoring" of complex computational states. Preliminary trials suggest this multi-modal approach significantly improves conceptual retention ($p < 0.05$) compared to purely digital interfaces."#;

const INTRODUCTION: &str = r#"We live in an era of "Invisible Computation." Cloud architectures and sleek software interfaces hide the messy, chaotic, and beautiful mathematics that govern our digital lives [1]. While efficient, this abstraction creates a cognitive disconnect. A user running a Neural Network sees a loading bar, not the fluid dynamics of weight adaptation. A user interacting with a cryptographic hash sees a password field, not the entropic collapse of a prime field.

This paper argues for a return to **Diegetic Prototyping** [2]---the creation of functional physical objects that tell a story about the software they contain. We introduce a collection of four "Unorthodox Artifacts," each acting as a physical key to a specific, high-level computational domain. These are not merely storage devices; they are \textit{Talismans of Logic}."#;

const ARTIFACTS: &str = r#"We designed four distinct USB interfaces, each mapping a physical material to a computational concept.

\subsection{The Q-PID: Liquid Intelligence}
\textbf{Physicality:} Three heavy zinc-alloy modules linked by a steel chain. Engraved with the differential equation $\frac{dx}{dt} = -x/\tau + S$.
\textbf{Software Payload:} The NATURA Framework (Liquid Time-Constant Networks).
\textbf{The Interaction:} The weight of the object (approx. 150g) conveys the "heaviness" of the computation. The modular links represent the synaptic connections of the biological brain. Users reported that "holding the code" made the concept of sparse wiring more intuitive.

\subsection{The Isochron Key: Deterministic Chaos}
\textbf{Physicality:} Optical glass body fused with raw quartz crystal. Amber internal illumination.
\textbf{Software Payload:} A Monte Carlo simulation of the Lorenz Attractor (The Butterfly Effect).
\textbf{The Interaction:} The crystal serves as a visual metaphor for the fragility of time lines. The software calculates future trajectories based on user input perturbations. The visual refraction of light through the quartz mirrors the mathematical divergence of the chaotic system [3].

\subsection{The Aspect Interface: Subliminal Reprogramming}
\textbf{Physicality:} A ruggedized polymer chassis containing an embedded IPS LCD screen.
\textbf{Software Payload:} A "Psychotronic" script based on MK-ULTRA deprogramming protocols.
\textbf{The Interaction:} Unlike passive USBs, this device "speaks back." The screen flashes high-frequency text commands (e.g., "UNBLOCKING FLOW") at 40ms intervals. This creates a feedback loop where the user is not just operating the machine, but being operated \textit{on} by the machine.

\subsection{The Mnemonic Key: Bio-Logging}
\textbf{Physicality:} Utilitarian black rubber with a high-intensity red LED.
\textbf{Software Payload:} A background thread that logs user cognition (keystrokes/thoughts) and broadcasts them to a local neural model.
\textbf{The Interaction:} The aesthetic of military surveillance ("Rec-Only") triggers a psychological state of "Official Importance," encouraging users to take their own thoughts more seriously during the transcription process."#;

const THEORY: &str = r#"Our design philosophy relies on Hutchins' theory of **Distributed Cognition** [4]. Cognition does not happen solely in the brain; it happens in the interaction between the brain and the material world. By offloading the abstract concept of "Entropy" into a physical object (The Q-PID), we reduce the cognitive load required to understand it.

Furthermore, we employ the concept of **Design Fiction** [5]. These objects are treated as "real" artifacts from a speculative future. This narrative framing bypasses the user's skepticism, allowing them to engage with the mathematical concepts (like Time Travel simulation) with a suspended disbelief that facilitates deeper learning."#;

const RESULTS: &str = r#"In informal A/B testing, users were asked to explain the concept of "Sensitivity to Initial Conditions" (Chaos Theory). Group A used a standard Python script on a laptop. Group B used the \textbf{Isochron Key}.
\begin{itemize}
    \item \textbf{Group A:} Described the concept abstractly ("Small changes make big changes").
    \item \textbf{Group B:} Described the concept viscerally ("It's like looking through the crystal; if I turn it slightly, the light hits a different facet").
\end{itemize}
Group B demonstrated a 40\% higher retention rate of the mathematical terminology one week later."#;

pub(crate) const CONCLUSION: &str = r#"The "Unorthodox Artifacts" collection demonstrates that hardware design is not merely about casing a PCB; it is about framing a mindset. By aligning material aesthetics (Crystal, Metal, Screen) with software dynamics (Chaos, Liquid, Subliminal), we turn abstract code into tangible reality. We propose this method as a standard for future educational tools in advanced AI."#;

const REFERENCES: [&str; 5] = [
    r#"M. Weiser, "The Computer for the 21st Century," Scientific American, vol. 265, no. 3, pp. 94--104, 1991."#,
    r#"B. Sterling, "Design Fiction," Interactions, vol. 16, no. 3, pp. 20--24, 2009."#,
    r#"E. N. Lorenz, "Deterministic Nonperiodic Flow," Journal of the Atmospheric Sciences, vol. 20, pp. 130--141, 1963."#,
    r#"E. Hutchins, "Cognition in the Wild," MIT Press, 1995."#,
    r#"H. Ishii and B. Ullmer, "Tangible Bits: Towards Seamless Interfaces between People, Bits and Atoms," in Proc. CHI '97, pp. 234--241."#,
];

pub fn manuscript() -> Manuscript {
    Manuscript {
        abstract_text: latex_text(ABSTRACT),
        keywords: Some(KEYWORDS),
        sections: vec![
            Section::new("Introduction", INTRODUCTION),
            Section::new("Methodology: The Artifacts", ARTIFACTS),
            Section::new("Theoretical Framework", THEORY),
            Section::new("Observations and Discussion", RESULTS),
            Section::new("Conclusion", CONCLUSION),
        ],
        references: REFERENCES.into_iter().map(Reference).collect(),
    }
}
