// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Section types and section instances.
//!
//! Each section type carries a fixed configuration: display label, line
//! count, and the annotation tags rendered with every instance. Instances
//! get an occurrence suffix ("Chorus 2") recomputed from position whenever
//! the sequence changes.

use std::collections::HashMap;
use std::fmt;

/// The six section types a song structure is assembled from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Intro,
    Verse,
    PreChorus,
    Chorus,
    Bridge,
    Outro,
}

/// Fixed configuration for one section type
#[derive(Debug, Clone, Copy)]
pub struct SectionSpec {
    /// Base display label
    pub label: &'static str,
    /// Number of lyric lines per instance
    pub line_count: usize,
    /// Annotation tags rendered under the label of every instance
    pub annotations: &'static [&'static str],
}

const INTRO_SPEC: SectionSpec = SectionSpec {
    label: "Intro",
    line_count: 2,
    annotations: &[
        "(Taiko drum roll -> Shamisen riff)",
        "(High-speed Eurobeat ignition)",
    ],
};

const VERSE_SPEC: SectionSpec = SectionSpec {
    label: "Verse",
    line_count: 4,
    annotations: &[
        "(Key: Major, Storytelling, High Tempo)",
        "(Rhythm: Fast Beat)",
    ],
};

const PRE_CHORUS_SPEC: SectionSpec = SectionSpec {
    label: "Pre-Chorus",
    line_count: 2,
    annotations: &["(Rising tension, Drum roll)", "(Rhythm: Accelerating)"],
};

const CHORUS_SPEC: SectionSpec = SectionSpec {
    label: "Chorus",
    line_count: 4,
    annotations: &[
        "(Key: Minor, Driving, Dramatic)",
        "(Full synth, Shout vocals, Taiko barrage)",
    ],
};

const BRIDGE_SPEC: SectionSpec = SectionSpec {
    label: "Bridge",
    line_count: 3,
    annotations: &[
        "(Breakdown, Emotional, Shamisen solo)",
        "(Rhythm: Free, Dramatic)",
    ],
};

const OUTRO_SPEC: SectionSpec = SectionSpec {
    label: "Outro",
    line_count: 2,
    annotations: &["(Final roar)", "(Repeat -> Fade out)"],
};

impl SectionKind {
    /// All section types in builder-palette order
    pub const ALL: [SectionKind; 6] = [
        SectionKind::Intro,
        SectionKind::Verse,
        SectionKind::PreChorus,
        SectionKind::Chorus,
        SectionKind::Bridge,
        SectionKind::Outro,
    ];

    /// Get the fixed configuration for this section type
    pub fn spec(self) -> &'static SectionSpec {
        match self {
            SectionKind::Intro => &INTRO_SPEC,
            SectionKind::Verse => &VERSE_SPEC,
            SectionKind::PreChorus => &PRE_CHORUS_SPEC,
            SectionKind::Chorus => &CHORUS_SPEC,
            SectionKind::Bridge => &BRIDGE_SPEC,
            SectionKind::Outro => &OUTRO_SPEC,
        }
    }

    /// Base display label
    pub fn label(self) -> &'static str {
        self.spec().label
    }

    /// Lines per instance of this type
    pub fn line_count(self) -> usize {
        self.spec().line_count
    }

    /// Short Japanese name used in pattern descriptions
    pub fn short_name(self) -> &'static str {
        match self {
            SectionKind::Intro => "イントロ",
            SectionKind::Verse => "Ａメロ",
            SectionKind::PreChorus => "Ｂメロ",
            SectionKind::Chorus => "サビ",
            SectionKind::Bridge => "ブリッジ",
            SectionKind::Outro => "アウトロ",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One slot in a section: unvisited, explicitly skipped, or committed text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineSlot {
    /// Never visited
    Empty,
    /// Explicit skip (a deliberate blank line, distinct from unvisited)
    Skipped,
    /// Committed text
    Text(String),
}

impl Default for LineSlot {
    fn default() -> Self {
        LineSlot::Empty
    }
}

impl LineSlot {
    /// Get committed text, if any
    pub fn text(&self) -> Option<&str> {
        match self {
            LineSlot::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Check whether this slot holds non-blank committed text
    pub fn has_text(&self) -> bool {
        match self {
            LineSlot::Text(t) => !t.trim().is_empty(),
            _ => false,
        }
    }
}

/// A section instance within a song structure
#[derive(Debug, Clone)]
pub struct Section {
    kind: SectionKind,
    label: String,
    lines: Vec<LineSlot>,
    annotations: Vec<String>,
}

impl Section {
    /// Create a new instance with the given occurrence number (1-based).
    /// The first occurrence gets the bare label, later ones a numeric suffix.
    pub fn new(kind: SectionKind, occurrence: usize) -> Self {
        let spec = kind.spec();
        Self {
            kind,
            label: occurrence_label(kind, occurrence),
            lines: vec![LineSlot::Empty; spec.line_count],
            annotations: spec.annotations.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Get the section type
    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    /// Get the display label (with occurrence suffix)
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the line slots
    pub fn lines(&self) -> &[LineSlot] {
        &self.lines
    }

    /// Get one line slot
    pub fn line(&self, index: usize) -> Option<&LineSlot> {
        self.lines.get(index)
    }

    /// Number of lines (fixed after creation)
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Get the annotation tags
    pub fn annotations(&self) -> &[String] {
        &self.annotations
    }

    /// Write a line slot; out-of-range indices are ignored
    pub fn set_line(&mut self, index: usize, slot: LineSlot) {
        if let Some(line) = self.lines.get_mut(index) {
            *line = slot;
        }
    }
}

/// Compute the occurrence-suffixed label for a section type
fn occurrence_label(kind: SectionKind, occurrence: usize) -> String {
    if occurrence > 1 {
        format!("{} {}", kind.label(), occurrence)
    } else {
        kind.label().to_string()
    }
}

/// Recompute every label's occurrence suffix from scratch in linear order.
/// Idempotent; labels are the only field written.
pub fn relabel_sections(sections: &mut [Section]) {
    let mut counts: HashMap<SectionKind, usize> = HashMap::new();
    for section in sections.iter_mut() {
        let count = counts.entry(section.kind).or_insert(0);
        *count += 1;
        section.label = occurrence_label(section.kind, *count);
    }
}

/// Build one new section numbered against `existing` plus itself,
/// without mutating `existing`
pub fn append_section(existing: &[Section], kind: SectionKind) -> Section {
    let occurrence = existing.iter().filter(|s| s.kind == kind).count() + 1;
    Section::new(kind, occurrence)
}

/// True iff the section at `index` is a chorus and no earlier section is
pub fn is_first_chorus(sections: &[Section], index: usize) -> bool {
    match sections.get(index) {
        Some(section) if section.kind == SectionKind::Chorus => sections[..index]
            .iter()
            .all(|s| s.kind != SectionKind::Chorus),
        _ => false,
    }
}

/// Total line count across a section sequence
pub fn total_lines(sections: &[Section]) -> usize {
    sections.iter().map(|s| s.line_count()).sum()
}

/// Linearized line index of (section, line): the sum of all earlier
/// sections' line counts plus the line offset
pub fn global_index(sections: &[Section], section: usize, line: usize) -> usize {
    let before: usize = sections[..section.min(sections.len())]
        .iter()
        .map(|s| s.line_count())
        .sum();
    before + line
}

/// Map a linearized line index back to (section, line)
pub fn position_at(sections: &[Section], index: usize) -> Option<(usize, usize)> {
    let mut remaining = index;
    for (i, section) in sections.iter().enumerate() {
        if remaining < section.line_count() {
            return Some((i, remaining));
        }
        remaining -= section.line_count();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sections() -> Vec<Section> {
        vec![
            Section::new(SectionKind::Intro, 1),
            Section::new(SectionKind::Chorus, 1),
            Section::new(SectionKind::Verse, 1),
            Section::new(SectionKind::PreChorus, 1),
            Section::new(SectionKind::Chorus, 2),
        ]
    }

    #[test]
    fn test_spec_line_counts() {
        assert_eq!(SectionKind::Intro.line_count(), 2);
        assert_eq!(SectionKind::Verse.line_count(), 4);
        assert_eq!(SectionKind::PreChorus.line_count(), 2);
        assert_eq!(SectionKind::Chorus.line_count(), 4);
        assert_eq!(SectionKind::Bridge.line_count(), 3);
        assert_eq!(SectionKind::Outro.line_count(), 2);
    }

    #[test]
    fn test_section_creation() {
        let section = Section::new(SectionKind::Chorus, 1);
        assert_eq!(section.label(), "Chorus");
        assert_eq!(section.line_count(), 4);
        assert_eq!(section.annotations().len(), 2);
        assert!(section.lines().iter().all(|l| *l == LineSlot::Empty));

        let second = Section::new(SectionKind::Chorus, 2);
        assert_eq!(second.label(), "Chorus 2");
    }

    #[test]
    fn test_set_line() {
        let mut section = Section::new(SectionKind::Intro, 1);
        section.set_line(0, LineSlot::Text("line".to_string()));
        assert_eq!(section.line(0).and_then(|l| l.text()), Some("line"));

        // Out of range writes are ignored
        section.set_line(99, LineSlot::Skipped);
        assert_eq!(section.line_count(), 2);
    }

    #[test]
    fn test_line_slot_has_text() {
        assert!(!LineSlot::Empty.has_text());
        assert!(!LineSlot::Skipped.has_text());
        assert!(!LineSlot::Text("   ".to_string()).has_text());
        assert!(LineSlot::Text("line".to_string()).has_text());
    }

    #[test]
    fn test_relabel_after_removal() {
        let mut sections = sample_sections();
        sections.remove(1); // drop the first chorus
        relabel_sections(&mut sections);

        let labels: Vec<&str> = sections.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Intro", "Verse", "Pre-Chorus", "Chorus"]);
    }

    #[test]
    fn test_relabel_idempotent() {
        let mut sections = sample_sections();
        sections.swap(1, 4);
        relabel_sections(&mut sections);
        let once: Vec<String> = sections.iter().map(|s| s.label().to_string()).collect();
        relabel_sections(&mut sections);
        let twice: Vec<String> = sections.iter().map(|s| s.label().to_string()).collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_relabel_touches_labels_only() {
        let mut sections = sample_sections();
        sections[1].set_line(0, LineSlot::Text("kept".to_string()));
        let annotations_before = sections[1].annotations().to_vec();

        relabel_sections(&mut sections);

        assert_eq!(sections[1].line(0).and_then(|l| l.text()), Some("kept"));
        assert_eq!(sections[1].annotations(), annotations_before.as_slice());
        assert_eq!(sections[1].line_count(), 4);
    }

    #[test]
    fn test_append_section_numbering() {
        let sections = sample_sections();
        let appended = append_section(&sections, SectionKind::Chorus);
        assert_eq!(appended.label(), "Chorus 3");

        let first_bridge = append_section(&sections, SectionKind::Bridge);
        assert_eq!(first_bridge.label(), "Bridge");
        // existing is untouched
        assert_eq!(sections.len(), 5);
    }

    #[test]
    fn test_is_first_chorus() {
        let sections = sample_sections();
        assert!(is_first_chorus(&sections, 1));
        assert!(!is_first_chorus(&sections, 4)); // second chorus
        assert!(!is_first_chorus(&sections, 0)); // intro
        assert!(!is_first_chorus(&sections, 99)); // out of range
    }

    #[test]
    fn test_global_index() {
        // intro(2) chorus(4) verse(4) pre-chorus(2) chorus(4) = 16 lines
        let sections = sample_sections();
        assert_eq!(total_lines(&sections), 16);
        assert_eq!(global_index(&sections, 0, 0), 0);
        assert_eq!(global_index(&sections, 2, 1), 7);
        assert_eq!(global_index(&sections, 4, 3), 15);
    }

    #[test]
    fn test_position_at() {
        let sections = sample_sections();
        assert_eq!(position_at(&sections, 0), Some((0, 0)));
        assert_eq!(position_at(&sections, 7), Some((2, 1)));
        assert_eq!(position_at(&sections, 15), Some((4, 3)));
        assert_eq!(position_at(&sections, 16), None);
    }

    #[test]
    fn test_position_round_trip() {
        let sections = sample_sections();
        for index in 0..total_lines(&sections) {
            let (section, line) = position_at(&sections, index).unwrap();
            assert_eq!(global_index(&sections, section, line), index);
        }
    }
}
