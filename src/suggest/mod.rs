// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Candidate suggestion engine.
//!
//! Maps (section type, line position, context flags, used-phrase history)
//! to small rule-constrained suggestion sets: forced anthem/signature
//! inclusion on the marked chorus lines, dedup-with-fallback on verse and
//! pre-chorus lines, plus the quick-pick and title draws.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use crate::phrases::PhraseBank;
use crate::structure::SectionKind;

/// Candidates offered per line
pub const CANDIDATE_COUNT: usize = 3;

/// Context for one candidate request
#[derive(Debug)]
pub struct SuggestionContext<'a> {
    /// Section type at the cursor
    pub kind: SectionKind,
    /// Line position within the section
    pub line_index: usize,
    /// Whether the section is the first chorus in the sequence
    pub first_chorus: bool,
    /// Phrases already committed into verse / pre-chorus slots
    pub used_phrases: &'a HashSet<String>,
}

/// Rule-constrained random phrase suggestions backed by a phrase bank
pub struct SuggestionEngine {
    bank: PhraseBank,
    rng: StdRng,
}

impl SuggestionEngine {
    /// Create an engine with an entropy-seeded RNG
    pub fn new(bank: PhraseBank) -> Self {
        Self {
            bank,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an engine with a fixed seed for reproducible draws
    pub fn with_seed(bank: PhraseBank, seed: u64) -> Self {
        Self {
            bank,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Produce the candidate set for one line.
    ///
    /// Returns 3 distinct phrases whenever the effective pool allows it;
    /// a smaller pool is returned whole, shuffled.
    pub fn candidates(&mut self, ctx: &SuggestionContext) -> Vec<String> {
        let picked = match ctx.kind {
            SectionKind::Intro => {
                let mut union = self.bank.intro_tags.clone();
                if let Some(opener) = pick_one(&mut self.rng, &self.bank.chorus_openers) {
                    union.push(opener);
                }
                sample_distinct(&mut self.rng, &union, CANDIDATE_COUNT)
            }
            SectionKind::Chorus => {
                if ctx.line_index == 0 {
                    self.chorus_opener_candidates()
                } else if ctx.line_index + 1 == ctx.kind.line_count() {
                    self.chorus_ending_candidates(ctx.first_chorus)
                } else {
                    sample_distinct(&mut self.rng, &self.bank.chorus_lines, CANDIDATE_COUNT)
                }
            }
            SectionKind::Verse => {
                let pool = filter_used(&self.bank.verse_phrases, ctx.used_phrases, CANDIDATE_COUNT);
                sample_distinct(&mut self.rng, &pool, CANDIDATE_COUNT)
            }
            SectionKind::PreChorus => {
                let pool = filter_used(
                    &self.bank.pre_chorus_phrases,
                    ctx.used_phrases,
                    CANDIDATE_COUNT,
                );
                sample_distinct(&mut self.rng, &pool, CANDIDATE_COUNT)
            }
            SectionKind::Bridge => {
                sample_distinct(&mut self.rng, &self.bank.bridge_phrases, CANDIDATE_COUNT)
            }
            SectionKind::Outro => {
                let mut union = self.bank.outro_tags.clone();
                if let Some(ending) = pick_one(&mut self.rng, &self.bank.chorus_endings) {
                    union.push(ending);
                }
                if let Some(line) = pick_one(&mut self.rng, &self.bank.chorus_lines) {
                    union.push(line);
                }
                sample_distinct(&mut self.rng, &union, CANDIDATE_COUNT)
            }
        };

        debug!(
            "{} candidates for {} line {}",
            picked.len(),
            ctx.kind,
            ctx.line_index
        );
        picked
    }

    /// One uniform draw for the quick-fill shortcut, independent of the
    /// dedup and forced-inclusion rules
    pub fn quick_pick(&mut self, kind: SectionKind) -> Option<String> {
        if kind == SectionKind::Chorus {
            return pick_one(&mut self.rng, &self.bank.chorus_endings);
        }
        let pool: Vec<String> = self
            .bank
            .verse_phrases
            .iter()
            .chain(self.bank.chorus_lines.iter())
            .cloned()
            .collect();
        pick_one(&mut self.rng, &pool)
    }

    /// A random song title: one starter fragment followed by one ender
    pub fn random_title(&mut self) -> String {
        let starter = pick_one(&mut self.rng, &self.bank.title_starters).unwrap_or_default();
        let ender = pick_one(&mut self.rng, &self.bank.title_enders).unwrap_or_default();
        format!("{}{}", starter, ender)
    }

    /// Chorus line 0: at least one anthem-keyword opener, the rest from the
    /// remaining openers unioned with the general chorus lines
    fn chorus_opener_candidates(&mut self) -> Vec<String> {
        let mut rest = self.bank.other_openers();
        rest.extend(self.bank.chorus_lines.iter().cloned());
        sample_with_forced(
            &mut self.rng,
            &self.bank.anthem_openers(),
            &rest,
            CANDIDATE_COUNT,
        )
    }

    /// Chorus last line: the first chorus must offer a signature-keyword
    /// ending; later choruses draw uniformly from the full ending pool
    fn chorus_ending_candidates(&mut self, first_chorus: bool) -> Vec<String> {
        if first_chorus {
            sample_with_forced(
                &mut self.rng,
                &self.bank.signature_endings(),
                &self.bank.other_endings(),
                CANDIDATE_COUNT,
            )
        } else {
            sample_distinct(&mut self.rng, &self.bank.chorus_endings, CANDIDATE_COUNT)
        }
    }
}

/// Sample up to `count` distinct phrases in random order
fn sample_distinct(rng: &mut StdRng, pool: &[String], count: usize) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut distinct: Vec<&String> = Vec::new();
    for phrase in pool {
        if seen.insert(phrase.as_str()) {
            distinct.push(phrase);
        }
    }

    let mut picked: Vec<String> = distinct
        .choose_multiple(rng, count)
        .map(|s| (*s).clone())
        .collect();
    picked.shuffle(rng);
    picked
}

/// One uniform draw from a pool
fn pick_one(rng: &mut StdRng, pool: &[String]) -> Option<String> {
    pool.choose(rng).cloned()
}

/// One forced draw from `forced_pool`, the rest from `rest_pool`, shuffled
/// together. An empty forced pool degrades to a plain draw from the rest.
fn sample_with_forced(
    rng: &mut StdRng,
    forced_pool: &[String],
    rest_pool: &[String],
    count: usize,
) -> Vec<String> {
    let forced = match pick_one(rng, forced_pool) {
        Some(f) => f,
        None => return sample_distinct(rng, rest_pool, count),
    };

    let rest: Vec<String> = rest_pool.iter().filter(|p| **p != forced).cloned().collect();
    let mut picked = sample_distinct(rng, &rest, count.saturating_sub(1));
    picked.push(forced);
    picked.shuffle(rng);
    picked
}

/// Pool minus already-used phrases, unless the remainder falls below
/// `min_required`; the dedup constraint is advisory, never blocking
fn filter_used(pool: &[String], used: &HashSet<String>, min_required: usize) -> Vec<String> {
    let available: Vec<String> = pool
        .iter()
        .filter(|p| !used.contains(*p))
        .cloned()
        .collect();
    if available.len() >= min_required {
        available
    } else {
        pool.to_vec()
    }
}
