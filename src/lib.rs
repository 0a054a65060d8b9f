//! modscout audits a resolved dependency tree of jar artifacts and reports
//! how far each dependency has moved toward JPMS modularization, both at its
//! pinned version and at the highest published release.

pub mod cli;
pub mod coordinates;
pub mod error;
pub mod graph;
pub mod inspect;
pub mod render;
pub mod report;
pub mod resolver;
pub mod status;
pub mod tree;
pub mod version;
