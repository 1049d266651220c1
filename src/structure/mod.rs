// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Structure catalog for VERSECRAFT.
//!
//! Defines the six section types with their fixed configuration, whole-song
//! structure patterns, section instantiation with occurrence numbering, and
//! the free-form structure builder.

pub mod pattern;
pub mod section;

pub use pattern::{sections_from_pattern, StructureBuilder, StructurePattern};
pub use section::{
    append_section, global_index, is_first_chorus, position_at, relabel_sections, total_lines,
    LineSlot, Section, SectionKind, SectionSpec,
};
