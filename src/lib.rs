// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! VERSECRAFT - Guided lyric composition wizard.
//!
//! Walks a user line by line through a song-section template, offering
//! rule-constrained random phrase suggestions, and serializes the finished
//! composition into a single prompt block for an AI music generator.
//!
//! The library is organized around:
//! - [`structure`]: section types, whole-song patterns, and the free-form
//!   structure builder
//! - [`phrases`]: the phrase bank (built-in or loaded from YAML)
//! - [`suggest`]: the candidate suggestion engine
//! - [`session`]: the composition session state machine (cursor, frontier,
//!   commit/skip/copy/jump)
//! - [`export`]: the prompt serializer
//!
//! The terminal front end lives in [`ui`] and carries no composition logic
//! of its own.

pub mod export;
pub mod phrases;
pub mod session;
pub mod structure;
pub mod suggest;
pub mod ui;
