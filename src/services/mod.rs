//! Infrastructure services for spec-maker.
//!
//! This module contains:
//! - SpecExporter/SpecSharer: collaborator contracts for the completion
//!   screen's download and share actions

mod export;

pub use export::{
    write_artifact, JsonExporter, MarkdownExporter, SpecExporter, SpecSharer, UnconfiguredSharer,
};
