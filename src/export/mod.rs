// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Prompt serialization for the external music generator.
//!
//! Renders a composition into the bracketed text format the generator
//! consumes: a style descriptor block, a title block, and the lyric body
//! with one header and its annotation tags per section.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::structure::{LineSlot, Section};

/// Vocal style selection, which drives the style descriptor block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocalStyle {
    Male,
    Female,
}

impl Default for VocalStyle {
    fn default() -> Self {
        VocalStyle::Male
    }
}

impl VocalStyle {
    /// Style descriptor rendered into the prompt header
    pub fn descriptor(self) -> &'static str {
        match self {
            VocalStyle::Male => {
                "Eurobeat, High Tempo, Electronic Dance, Male Vocals, Powerful, Shouting, \
                 Jidaigeki Anime Style, Dramatic, Heavy Bassline, Synthesizer Rush"
            }
            VocalStyle::Female => {
                "Eurobeat, High Tempo, Electronic Dance, Female Vocals, High Range, Emotional, \
                 Jidaigeki Anime Style, Dramatic, Heavy Bassline, Synthesizer Rush"
            }
        }
    }

    /// Short name shown in menus
    pub fn name(self) -> &'static str {
        match self {
            VocalStyle::Male => "Male",
            VocalStyle::Female => "Female",
        }
    }
}

/// Render the full generator prompt.
///
/// Section headers and annotations are always emitted. Skipped lines render
/// as deliberate blank lines; unvisited or whitespace-only lines render as
/// nothing at all.
pub fn render_prompt(title: &str, sections: &[Section], vocal: VocalStyle) -> String {
    let mut out = String::new();

    out.push_str("【スタイル】\n");
    out.push_str(vocal.descriptor());
    out.push_str(", Japanese Lyrics Only, Do not sing text in parentheses\n");
    out.push('\n');

    out.push_str("【タイトル】\n");
    out.push_str(title);
    out.push_str("\n\n");

    out.push_str("【歌詞】\n");
    for section in sections {
        out.push('\n');
        out.push('[');
        out.push_str(section.label());
        out.push_str("]\n");
        for annotation in section.annotations() {
            out.push_str(annotation);
            out.push('\n');
        }
        for slot in section.lines() {
            match slot {
                LineSlot::Skipped => out.push('\n'),
                LineSlot::Text(text) if !text.trim().is_empty() => {
                    out.push_str(text);
                    out.push('\n');
                }
                _ => {}
            }
        }
    }

    out
}

/// Write a rendered prompt to disk
pub fn save_prompt<P: AsRef<Path>>(path: P, prompt: &str) -> Result<()> {
    fs::write(path.as_ref(), prompt)
        .with_context(|| format!("Failed to write prompt to {}", path.as_ref().display()))?;
    info!("prompt saved to {}", path.as_ref().display());
    Ok(())
}
