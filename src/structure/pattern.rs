// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Whole-song structure patterns.
//!
//! Patterns are ordered section-type sequences, either predefined or
//! assembled block by block through the structure builder.

use super::section::{relabel_sections, Section, SectionKind};

/// An ordered section-type sequence for a whole song
#[derive(Debug, Clone)]
pub struct StructurePattern {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Human-readable description of the sequence
    pub description: String,
    /// Section types in order (repeats allowed)
    pub sections: Vec<SectionKind>,
}

impl StructurePattern {
    /// Create a new pattern
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        sections: Vec<SectionKind>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            sections,
        }
    }

    /// The predefined patterns, in menu order
    pub fn builtin() -> Vec<StructurePattern> {
        vec![
            StructurePattern::new(
                "pattern1",
                "陣形・甲",
                "イントロ → サビ → Ａメロ → Ｂメロ → サビ",
                vec![
                    SectionKind::Intro,
                    SectionKind::Chorus,
                    SectionKind::Verse,
                    SectionKind::PreChorus,
                    SectionKind::Chorus,
                ],
            ),
            StructurePattern::new(
                "pattern2",
                "陣形・乙",
                "サビ → Ａメロ → Ｂメロ → サビ → ブリッジ → サビ",
                vec![
                    SectionKind::Chorus,
                    SectionKind::Verse,
                    SectionKind::PreChorus,
                    SectionKind::Chorus,
                    SectionKind::Bridge,
                    SectionKind::Chorus,
                ],
            ),
        ]
    }

    /// Total lyric lines across the pattern
    pub fn total_lines(&self) -> usize {
        self.sections.iter().map(|k| k.line_count()).sum()
    }
}

/// Instantiate sections from a pattern in order, numbering repeated types
pub fn sections_from_pattern(pattern: &StructurePattern) -> Vec<Section> {
    let mut sections: Vec<Section> = pattern
        .sections
        .iter()
        .map(|&kind| Section::new(kind, 1))
        .collect();
    relabel_sections(&mut sections);
    sections
}

/// Free-form structure assembly: add, remove, and reorder section blocks
/// before finalizing them into a pattern
#[derive(Debug, Clone, Default)]
pub struct StructureBuilder {
    kinds: Vec<SectionKind>,
}

impl StructureBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section block
    pub fn add(&mut self, kind: SectionKind) {
        self.kinds.push(kind);
    }

    /// Remove the block at `index`; out-of-range indices are ignored
    pub fn remove(&mut self, index: usize) {
        if index < self.kinds.len() {
            self.kinds.remove(index);
        }
    }

    /// Move the block at `index` one slot earlier; returns whether it moved
    pub fn move_up(&mut self, index: usize) -> bool {
        if index > 0 && index < self.kinds.len() {
            self.kinds.swap(index - 1, index);
            true
        } else {
            false
        }
    }

    /// Move the block at `index` one slot later; returns whether it moved
    pub fn move_down(&mut self, index: usize) -> bool {
        if index + 1 < self.kinds.len() {
            self.kinds.swap(index, index + 1);
            true
        } else {
            false
        }
    }

    /// The assembled block sequence
    pub fn kinds(&self) -> &[SectionKind] {
        &self.kinds
    }

    /// Number of blocks
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Check whether no blocks have been added
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Drop all blocks
    pub fn clear(&mut self) {
        self.kinds.clear();
    }

    /// Occurrence-suffixed labels for display ("Chorus", "Chorus 2", ...)
    pub fn labels(&self) -> Vec<String> {
        sections_from_pattern(&self.preview_pattern())
            .iter()
            .map(|s| s.label().to_string())
            .collect()
    }

    /// Total lyric lines across the assembled blocks
    pub fn total_lines(&self) -> usize {
        self.kinds.iter().map(|k| k.line_count()).sum()
    }

    /// Finalize the assembled sequence into a pattern
    pub fn build(&self) -> StructurePattern {
        let description = self
            .kinds
            .iter()
            .map(|k| k.short_name())
            .collect::<Vec<_>>()
            .join(" → ");
        StructurePattern::new("zero", "陣形・自由", description, self.kinds.clone())
    }

    fn preview_pattern(&self) -> StructurePattern {
        StructurePattern::new("zero", "陣形・自由", String::new(), self.kinds.clone())
    }
}
