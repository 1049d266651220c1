// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Phrase bank for VERSECRAFT.
//!
//! This module provides the read-only phrase pools the suggestion engine
//! draws from, either the built-in dictionary or a custom bank loaded from
//! a YAML file.

mod builtin;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Validation failures for a phrase bank
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BankError {
    /// A required pool holds no phrases
    #[error("phrase pool '{0}' is empty")]
    EmptyPool(&'static str),
    /// No chorus opener contains the anthem keyword
    #[error("no chorus opener contains the anthem keyword '{0}'")]
    NoAnthemOpener(String),
    /// No chorus ending contains the signature keyword
    #[error("no chorus ending contains the signature keyword '{0}'")]
    NoSignatureEnding(String),
}

/// Named, read-only phrase pools plus the two keyword markers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhraseBank {
    /// Intro line candidates
    #[serde(default)]
    pub intro_tags: Vec<String>,
    /// Outro line candidates
    #[serde(default)]
    pub outro_tags: Vec<String>,
    /// Verse (A-melo) storytelling lines
    #[serde(default)]
    pub verse_phrases: Vec<String>,
    /// Pre-chorus (B-melo) build-up lines
    #[serde(default)]
    pub pre_chorus_phrases: Vec<String>,
    /// Chorus first-line shouts; the anthem subset contains `opener_keyword`
    #[serde(default)]
    pub chorus_openers: Vec<String>,
    /// General chorus lines
    #[serde(default)]
    pub chorus_lines: Vec<String>,
    /// Chorus closing lines; the signature subset contains `ending_keyword`
    #[serde(default)]
    pub chorus_endings: Vec<String>,
    /// Bridge lines
    #[serde(default)]
    pub bridge_phrases: Vec<String>,
    /// Title prefix fragments
    #[serde(default)]
    pub title_starters: Vec<String>,
    /// Title suffix fragments
    #[serde(default)]
    pub title_enders: Vec<String>,
    /// Keyword marking the anthem subset of chorus openers
    #[serde(default)]
    pub opener_keyword: String,
    /// Keyword marking the signature subset of chorus endings
    #[serde(default)]
    pub ending_keyword: String,
}

impl PhraseBank {
    /// The built-in Yasuke jidaigeki-Eurobeat dictionary
    pub fn builtin() -> Self {
        builtin::bank()
    }

    /// Load a phrase bank from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read phrase bank file: {:?}", path.as_ref()))?;
        let bank = Self::from_yaml(&contents)?;
        debug!("Loaded phrase bank from {:?}", path.as_ref());
        Ok(bank)
    }

    /// Parse a phrase bank from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse phrase bank YAML")
    }

    /// Serialize to a YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize phrase bank to YAML")
    }

    /// Save the bank to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write phrase bank file: {:?}", path.as_ref()))
    }

    /// All pools with their names, in declaration order
    pub fn pools(&self) -> [(&'static str, &[String]); 10] {
        [
            ("intro_tags", self.intro_tags.as_slice()),
            ("outro_tags", self.outro_tags.as_slice()),
            ("verse_phrases", self.verse_phrases.as_slice()),
            ("pre_chorus_phrases", self.pre_chorus_phrases.as_slice()),
            ("chorus_openers", self.chorus_openers.as_slice()),
            ("chorus_lines", self.chorus_lines.as_slice()),
            ("chorus_endings", self.chorus_endings.as_slice()),
            ("bridge_phrases", self.bridge_phrases.as_slice()),
            ("title_starters", self.title_starters.as_slice()),
            ("title_enders", self.title_enders.as_slice()),
        ]
    }

    /// Check that every pool has phrases and both keyword subsets exist
    pub fn validate(&self) -> std::result::Result<(), BankError> {
        for (name, pool) in self.pools() {
            if pool.is_empty() {
                return Err(BankError::EmptyPool(name));
            }
        }
        if self.anthem_openers().is_empty() {
            return Err(BankError::NoAnthemOpener(self.opener_keyword.clone()));
        }
        if self.signature_endings().is_empty() {
            return Err(BankError::NoSignatureEnding(self.ending_keyword.clone()));
        }
        Ok(())
    }

    /// Chorus openers containing the anthem keyword
    pub fn anthem_openers(&self) -> Vec<String> {
        self.chorus_openers
            .iter()
            .filter(|l| l.contains(&self.opener_keyword))
            .cloned()
            .collect()
    }

    /// Chorus openers without the anthem keyword
    pub fn other_openers(&self) -> Vec<String> {
        self.chorus_openers
            .iter()
            .filter(|l| !l.contains(&self.opener_keyword))
            .cloned()
            .collect()
    }

    /// Chorus endings containing the signature keyword
    pub fn signature_endings(&self) -> Vec<String> {
        self.chorus_endings
            .iter()
            .filter(|l| l.contains(&self.ending_keyword))
            .cloned()
            .collect()
    }

    /// Chorus endings without the signature keyword
    pub fn other_endings(&self) -> Vec<String> {
        self.chorus_endings
            .iter()
            .filter(|l| !l.contains(&self.ending_keyword))
            .cloned()
            .collect()
    }
}
