// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Collection-wide constants shared by the README, the papers and image staging.

use crate::models::artifact::Artifact;

pub const PAPER_TITLE: &str = "Tangible Algorithmics: Physicalizing Abstract Mathematical Dynamics via Diegetic USB Artifacts";
pub const PAPER_AUTHOR: &str = "Utah Hans";
pub const PAPER_AFFILIATION: &str = "Department of Unorthodox Engineering, Future Institute";
pub const PAPER_EMAIL: &str = "utah@utahcreates.com";
pub const JOURNAL_LINE: &str = "Leonardo, Vol. 58, No. 3, 2025";

pub const COLLECTION_PHOTO: &str = "THE FULL COLLECTOR'S SET.jpg";
pub const COLLECTION_FIGURE: &str = "fig1_collection.jpg";
pub const COLLECTION_CAPTION: &str = "Collector's Set";

/// System diagram; staged under the same name it is delivered with.
pub const DIAGRAM_FIGURE: &str = "fig4_diagram.png";
pub const DIAGRAM_CAPTION: &str = "System Diagram";

/// The four artifacts in catalogue order.
pub const ARTIFACTS: [Artifact; 4] = [
    Artifact {
        name: "The Q-PID",
        theme: "LIQUID INTELLIGENCE",
        quote: "A brain that you can hold.",
        material: "Zinc Alloy & Brushed Titanium",
        payload: "**NATURA Framework** (Neural Circuit Policies)",
        function: "Portable Liquid Neural Network environment. The chains express sparse synaptic wiring and dynamic state flow.",
        photo: "q-pid liquid intelligence concept.jpg",
        figure: "fig2a_qpid.jpg",
        caption: "Q-PID",
    },
    Artifact {
        name: "The Isochron Key",
        theme: "DETERMINISTIC CHAOS",
        quote: "See the timeline fracture.",
        material: "Optical Glass & Raw Quartz",
        payload: "**Lorenz Attractor Solver** (Monte Carlo Simulation)",
        function: "Simulates the Butterfly Effect. Provide a micro-perturbation and watch future-state trajectories diverge across 1,000 steps.",
        photo: "THE ISOCHRON KEY (The Time Telescope).jpg",
        figure: "fig2b_isochron.jpg",
        caption: "Isochron Key",
    },
    Artifact {
        name: "The Aspect Interface",
        theme: "DEPROGRAMMING",
        quote: "The machine that speaks back.",
        material: "Carbon Fiber Composite & IPS Screen",
        payload: "**Psychotronic Counter-Measure**",
        function: "High-frequency visual flash sequences (~40 ms) to disrupt cognitive ruts and invite reframing.",
        photo: "THE ASPECT 23 KEY (The Deprogrammer).jpg",
        figure: "fig3a_aspect.jpg",
        caption: "Aspect Interface",
    },
    Artifact {
        name: "The Mnemonic Key",
        theme: "BIO-LOGGING",
        quote: "Record everything. Forget nothing.",
        material: "Rubberized Mil-Spec Polymer",
        payload: "**Thought Transcription Engine**",
        function: "Conceptual passive-logging interface for externalized cognition.",
        photo: "THE MNEMONIC KEY (The Bio-Logger).jpg",
        figure: "fig3b_mnemonic.jpg",
        caption: "Mnemonic Key",
    },
];
