//! Mind-map graph construction
//!
//! Turns a validated outline into a positioned node/edge graph.
//!
//! # Architecture
//!
//! ```text
//! MindMapOutline (validated)
//!        │
//!        ▼
//! build_graph ──► node_position (radial tier layout)
//!        │
//!        ▼
//! MindMapGraph (positioned nodes/edges, per-tier styles)
//! ```
//!
//! Everything here is pure: no network, no I/O, deterministic output for a
//! given outline and settings.

pub mod builder;
pub mod layout;
pub mod style;

pub use builder::build_graph;
pub use layout::node_position;
pub use style::{cross_reference_edge_style, hierarchy_edge_style, node_style};
