// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Composition session state.
//!
//! Tracks the wizard cursor over a section sequence, the furthest line
//! reached (which bounds backward/forward jumps), the used-phrase history
//! feeding the dedup rule, and the working title and vocal selection.
//! Every operation is total: once the composition is complete, or when a
//! target is invalid, edits are ignored rather than rejected.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::export::VocalStyle;
use crate::structure::{
    global_index, is_first_chorus, position_at, sections_from_pattern, total_lines, LineSlot,
    Section, SectionKind, StructurePattern,
};
use crate::suggest::{SuggestionContext, SuggestionEngine};

/// Position of one line within a section sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Section index
    pub section: usize,
    /// Line index within the section
    pub line: usize,
}

impl Cursor {
    pub fn new(section: usize, line: usize) -> Self {
        Self { section, line }
    }
}

/// Result of a commit-class edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The cursor advanced to the following line
    Advanced(Cursor),
    /// The last line was committed and the composition is complete
    Completed,
    /// The edit did not apply
    Ignored,
}

/// A line referenced by position, with its section label and current text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilledLine {
    /// Where the line lives
    pub position: Cursor,
    /// Display label of the owning section
    pub label: String,
    /// The committed text, empty for blank slots
    pub text: String,
}

/// One guided pass over a song structure
#[derive(Debug, Clone)]
pub struct CompositionSession {
    sections: Vec<Section>,
    cursor: Option<Cursor>,
    frontier: usize,
    used_phrases: HashSet<String>,
    title: String,
    vocal: VocalStyle,
}

impl CompositionSession {
    /// Open a session over a section sequence. An empty sequence yields a
    /// session that is already complete.
    pub fn new(sections: Vec<Section>) -> Self {
        let cursor = if sections.is_empty() {
            None
        } else {
            Some(Cursor::new(0, 0))
        };
        info!(
            "session opened: {} sections, {} lines",
            sections.len(),
            total_lines(&sections)
        );
        Self {
            sections,
            cursor,
            frontier: 0,
            used_phrases: HashSet::new(),
            title: String::new(),
            vocal: VocalStyle::default(),
        }
    }

    /// Open a session over a catalog pattern
    pub fn from_pattern(pattern: &StructurePattern) -> Self {
        Self::new(sections_from_pattern(pattern))
    }

    /// Set the working title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the vocal selection
    pub fn with_vocal(mut self, vocal: VocalStyle) -> Self {
        self.vocal = vocal;
        self
    }

    /// Commit text into the line under the cursor and advance.
    ///
    /// Blank input (after trimming) records a skip. Non-blank verse and
    /// pre-chorus commits are remembered for the dedup rule, exactly as
    /// given. Committing the last line completes the composition.
    pub fn commit(&mut self, text: &str) -> CommitOutcome {
        let cursor = match self.cursor {
            Some(c) => c,
            None => return CommitOutcome::Ignored,
        };

        let trimmed = text.trim();
        let slot = if trimmed.is_empty() {
            LineSlot::Skipped
        } else {
            LineSlot::Text(text.to_string())
        };

        let kind = self.sections[cursor.section].kind();
        if !trimmed.is_empty() && (kind == SectionKind::Verse || kind == SectionKind::PreChorus) {
            self.used_phrases.insert(text.to_string());
        }
        self.sections[cursor.section].set_line(cursor.line, slot);
        self.advance(cursor)
    }

    /// Skip the line under the cursor, leaving a deliberate blank
    pub fn skip(&mut self) -> CommitOutcome {
        self.commit("")
    }

    /// Commit a copy of an earlier committed line into the cursor line.
    /// Invalid, blank, or self-referential sources are ignored.
    pub fn copy_from(&mut self, source: Cursor) -> CommitOutcome {
        let cursor = match self.cursor {
            Some(c) => c,
            None => return CommitOutcome::Ignored,
        };
        if source == cursor {
            return CommitOutcome::Ignored;
        }

        let text = match self
            .sections
            .get(source.section)
            .and_then(|s| s.line(source.line))
        {
            Some(LineSlot::Text(t)) if !t.trim().is_empty() => t.clone(),
            _ => return CommitOutcome::Ignored,
        };
        self.commit(&text)
    }

    /// Move the cursor to any line at or behind the frontier.
    ///
    /// Returns whether the cursor moved. Out-of-range targets, targets past
    /// the frontier, and the current position itself are silent no-ops.
    pub fn jump(&mut self, target: Cursor) -> bool {
        let current = match self.cursor {
            Some(c) => c,
            None => return false,
        };
        if target == current {
            return false;
        }
        let in_range = target.section < self.sections.len()
            && target.line < self.sections[target.section].line_count();
        if !in_range || self.global_index(target) > self.frontier {
            return false;
        }

        self.cursor = Some(target);
        debug!("cursor jumped to {}:{}", target.section, target.line);
        true
    }

    /// Context for a candidate request at the cursor, or None once complete
    pub fn suggestion_context(&self) -> Option<SuggestionContext<'_>> {
        let cursor = self.cursor?;
        let section = &self.sections[cursor.section];
        Some(SuggestionContext {
            kind: section.kind(),
            line_index: cursor.line,
            first_chorus: is_first_chorus(&self.sections, cursor.section),
            used_phrases: &self.used_phrases,
        })
    }

    /// Draw a fresh candidate set for the cursor line
    pub fn regenerate_candidates(&self, engine: &mut SuggestionEngine) -> Vec<String> {
        match self.suggestion_context() {
            Some(ctx) => engine.candidates(&ctx),
            None => Vec::new(),
        }
    }

    /// Committed lines offered as copy sources, excluding the cursor line
    pub fn filled_lines(&self) -> Vec<FilledLine> {
        let mut filled = Vec::new();
        for (section_index, section) in self.sections.iter().enumerate() {
            for (line_index, slot) in section.lines().iter().enumerate() {
                let position = Cursor::new(section_index, line_index);
                if Some(position) == self.cursor {
                    continue;
                }
                if let LineSlot::Text(text) = slot {
                    if text.trim().is_empty() {
                        continue;
                    }
                    filled.push(FilledLine {
                        position,
                        label: section.label().to_string(),
                        text: text.clone(),
                    });
                }
            }
        }
        filled
    }

    /// Every line at or behind the frontier except the cursor line, in
    /// composition order. These are exactly the valid jump targets.
    pub fn visited_lines(&self) -> Vec<FilledLine> {
        let cursor = match self.cursor {
            Some(c) => c,
            None => return Vec::new(),
        };

        let mut visited = Vec::new();
        for index in 0..=self.frontier {
            let position = match self.cursor_at(index) {
                Some(p) => p,
                None => break,
            };
            if position == cursor {
                continue;
            }
            let section = &self.sections[position.section];
            let text = section
                .line(position.line)
                .and_then(|slot| slot.text())
                .unwrap_or("")
                .to_string();
            visited.push(FilledLine {
                position,
                label: section.label().to_string(),
                text,
            });
        }
        visited
    }

    /// Linearized line index of a position within the whole structure
    pub fn global_index(&self, cursor: Cursor) -> usize {
        global_index(&self.sections, cursor.section, cursor.line)
    }

    /// Position at a linearized line index, or None past the end
    pub fn cursor_at(&self, index: usize) -> Option<Cursor> {
        position_at(&self.sections, index).map(|(section, line)| Cursor::new(section, line))
    }

    /// Total line count of the structure
    pub fn total_lines(&self) -> usize {
        total_lines(&self.sections)
    }

    /// Whether every line has been visited
    pub fn is_complete(&self) -> bool {
        self.cursor.is_none()
    }

    /// Fraction of lines behind the cursor, 1.0 once complete
    pub fn progress(&self) -> f64 {
        let total = self.total_lines();
        if total == 0 {
            return 1.0;
        }
        match self.cursor {
            Some(c) => self.global_index(c) as f64 / total as f64,
            None => 1.0,
        }
    }

    /// Get the section sequence
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Get the cursor, or None once complete
    pub fn cursor(&self) -> Option<Cursor> {
        self.cursor
    }

    /// Get the section under the cursor
    pub fn current_section(&self) -> Option<&Section> {
        self.cursor.map(|c| &self.sections[c.section])
    }

    /// Linearized index of the furthest line reached
    pub fn frontier(&self) -> usize {
        self.frontier
    }

    /// Phrases remembered for the dedup rule
    pub fn used_phrases(&self) -> &HashSet<String> {
        &self.used_phrases
    }

    /// Get the working title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the working title
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Get the vocal selection
    pub fn vocal(&self) -> VocalStyle {
        self.vocal
    }

    /// Replace the vocal selection
    pub fn set_vocal(&mut self, vocal: VocalStyle) {
        self.vocal = vocal;
    }

    /// Consume the session, keeping the section sequence for review edits
    pub fn into_sections(self) -> Vec<Section> {
        self.sections
    }

    /// Move past `from`, raising the frontier on forward motion only
    fn advance(&mut self, from: Cursor) -> CommitOutcome {
        let next_line = from.line + 1;
        let next = if next_line < self.sections[from.section].line_count() {
            Some(Cursor::new(from.section, next_line))
        } else if from.section + 1 < self.sections.len() {
            Some(Cursor::new(from.section + 1, 0))
        } else {
            None
        };

        match next {
            Some(cursor) => {
                self.cursor = Some(cursor);
                let reached = self.global_index(cursor);
                if reached > self.frontier {
                    self.frontier = reached;
                }
                debug!("cursor advanced to {}:{}", cursor.section, cursor.line);
                CommitOutcome::Advanced(cursor)
            }
            None => {
                self.cursor = None;
                info!("composition complete: {} lines", self.total_lines());
                CommitOutcome::Completed
            }
        }
    }
}
