// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Integration tests for VERSECRAFT
//!
//! These tests drive the wizard end to end through the public API: phrase
//! bank, structure catalog, suggestion engine, composition session, and
//! prompt serializer working together.

use std::collections::HashSet;
use std::io::Write;

use versecraft::export::{render_prompt, VocalStyle};
use versecraft::phrases::PhraseBank;
use versecraft::session::{CommitOutcome, CompositionSession, Cursor};
use versecraft::structure::{
    append_section, relabel_sections, sections_from_pattern, LineSlot, SectionKind,
    StructureBuilder, StructurePattern,
};
use versecraft::suggest::SuggestionEngine;

/// Drive a full composition from pattern selection to the rendered prompt
#[test]
fn test_full_wizard_flow() {
    let patterns = StructurePattern::builtin();
    let mut session = CompositionSession::from_pattern(&patterns[0])
        .with_title("漆黒の侍")
        .with_vocal(VocalStyle::Female);
    let mut engine = SuggestionEngine::with_seed(PhraseBank::builtin(), 42);

    let mut committed = Vec::new();
    loop {
        let candidates = session.regenerate_candidates(&mut engine);
        assert_eq!(candidates.len(), 3, "each line offers three candidates");

        committed.push(candidates[0].clone());
        match session.commit(&candidates[0]) {
            CommitOutcome::Advanced(_) => {}
            CommitOutcome::Completed => break,
            CommitOutcome::Ignored => panic!("commit ignored mid-flow"),
        }
    }

    assert!(session.is_complete());
    assert_eq!(committed.len(), 16);

    let title = session.title().to_string();
    let vocal = session.vocal();
    let sections = session.into_sections();
    let prompt = render_prompt(&title, &sections, vocal);

    assert!(prompt.starts_with("【スタイル】\n"));
    assert!(prompt.contains("Female Vocals"));
    assert!(prompt.contains("【タイトル】\n漆黒の侍"));
    assert!(prompt.contains("【歌詞】\n"));
    for line in &committed {
        assert!(prompt.contains(line.as_str()), "missing lyric: {}", line);
    }
    // every section header appears, repeated types numbered
    assert!(prompt.contains("\n[Intro]\n"));
    assert!(prompt.contains("\n[Chorus]\n"));
    assert!(prompt.contains("\n[Chorus 2]\n"));
}

/// The frontier never decreases under any mix of operations
#[test]
fn test_frontier_monotonic_over_mixed_operations() {
    let patterns = StructurePattern::builtin();
    let mut session = CompositionSession::from_pattern(&patterns[1]);

    let mut last_frontier = session.frontier();
    let total = session.total_lines();

    for step in 0..total * 3 {
        match step % 5 {
            0 => {
                session.commit(&format!("line {}", step));
            }
            1 => {
                session.skip();
            }
            2 => {
                session.jump(Cursor::new(0, 0));
            }
            3 => {
                session.copy_from(Cursor::new(0, 0));
            }
            _ => {
                let target = session.cursor_at(session.frontier());
                if let Some(target) = target {
                    session.jump(target);
                }
            }
        }
        assert!(
            session.frontier() >= last_frontier,
            "frontier regressed at step {}",
            step
        );
        assert_eq!(session.total_lines(), total, "line total changed");
        last_frontier = session.frontier();
    }
}

/// Jumps succeed exactly when the target's linearized index is within the
/// frontier and the target is not the cursor itself
#[test]
fn test_jump_validity_matches_frontier() {
    let patterns = StructurePattern::builtin();
    let mut session = CompositionSession::from_pattern(&patterns[0]);

    // visit the first seven lines
    for _ in 0..7 {
        session.skip();
    }
    assert_eq!(session.frontier(), 7);

    for index in 0..session.total_lines() {
        let target = session.cursor_at(index).unwrap();
        let cursor = session.cursor().unwrap();
        let expected = index <= session.frontier() && target != cursor;

        let before = session.cursor();
        let moved = session.jump(target);
        assert_eq!(moved, expected, "jump to index {}", index);
        if !moved {
            assert_eq!(session.cursor(), before, "failed jump moved the cursor");
        }

        // move back to a known spot for the next probe
        session.jump(Cursor::new(1, 1));
    }
}

/// Used phrases collect only non-blank verse and pre-chorus commits, and
/// copying an existing line adds no duplicates
#[test]
fn test_used_phrase_collection() {
    // intro, chorus, verse, pre-chorus, chorus
    let patterns = StructurePattern::builtin();
    let mut session = CompositionSession::from_pattern(&patterns[0]);

    for _ in 0..6 {
        session.skip();
    }
    assert_eq!(session.cursor(), Some(Cursor::new(2, 0)));

    session.commit("A");
    session.commit("B");
    session.commit("");
    let expected: HashSet<String> = ["A", "B"].iter().map(|s| s.to_string()).collect();
    assert_eq!(session.used_phrases(), &expected);

    session.copy_from(Cursor::new(2, 0));
    assert_eq!(session.used_phrases(), &expected);

    // candidates for the pre-chorus exclude nothing (different pool), but a
    // verse draw never re-offers A or B while enough phrases remain
    session.jump(Cursor::new(2, 0));
    let mut engine = SuggestionEngine::with_seed(PhraseBank::builtin(), 9);
    for _ in 0..20 {
        for candidate in session.regenerate_candidates(&mut engine) {
            assert_ne!(candidate, "A");
            assert_ne!(candidate, "B");
        }
    }
}

/// Chorus keyword constraints hold when driven through a live session
#[test]
fn test_chorus_constraints_through_session() {
    let bank = PhraseBank::builtin();
    let patterns = StructurePattern::builtin();
    // pattern 2 opens on a chorus
    let mut session = CompositionSession::from_pattern(&patterns[1]);
    let mut engine = SuggestionEngine::with_seed(bank.clone(), 3);

    // first chorus, line 0: at least one anthem opener
    for _ in 0..20 {
        let candidates = session.regenerate_candidates(&mut engine);
        assert!(
            candidates.iter().any(|c| c.contains(&bank.opener_keyword)),
            "no anthem opener in {:?}",
            candidates
        );
    }

    // first chorus, last line: at least one signature ending
    for _ in 0..3 {
        session.skip();
    }
    assert_eq!(session.cursor(), Some(Cursor::new(0, 3)));
    for _ in 0..20 {
        let candidates = session.regenerate_candidates(&mut engine);
        assert!(
            candidates.iter().any(|c| c.contains(&bank.ending_keyword)),
            "no signature ending in {:?}",
            candidates
        );
        for candidate in &candidates {
            assert!(bank.chorus_endings.contains(candidate));
        }
    }

    // the second chorus' last line draws uniformly from the full ending pool
    for _ in 0..10 {
        session.skip();
    }
    assert_eq!(session.cursor(), Some(Cursor::new(3, 3)));
    for _ in 0..10 {
        let candidates = session.regenerate_candidates(&mut engine);
        assert_eq!(candidates.len(), 3);
        for candidate in &candidates {
            assert!(bank.chorus_endings.contains(candidate));
        }
    }
}

/// A custom structure built block by block flows into a session
#[test]
fn test_builder_structure_flow() {
    let mut builder = StructureBuilder::new();
    builder.add(SectionKind::Chorus);
    builder.add(SectionKind::Verse);
    builder.add(SectionKind::Chorus);
    builder.move_up(1);
    builder.remove(2);

    let pattern = builder.build();
    assert_eq!(
        pattern.sections,
        vec![SectionKind::Verse, SectionKind::Chorus]
    );

    let session = CompositionSession::from_pattern(&pattern);
    assert_eq!(session.total_lines(), 8);
    assert_eq!(session.sections()[1].label(), "Chorus");
}

/// Relabeling after removal is idempotent and leaves content untouched
#[test]
fn test_relabel_after_removal() {
    let patterns = StructurePattern::builtin();
    let mut sections = sections_from_pattern(&patterns[1]);
    sections[0].set_line(0, LineSlot::Text("kept".to_string()));

    sections.remove(3); // the second chorus
    relabel_sections(&mut sections);
    let once: Vec<String> = sections.iter().map(|s| s.label().to_string()).collect();
    relabel_sections(&mut sections);
    let twice: Vec<String> = sections.iter().map(|s| s.label().to_string()).collect();

    assert_eq!(once, twice);
    assert_eq!(once, vec!["Chorus", "Verse", "Pre-Chorus", "Bridge", "Chorus 2"]);
    assert_eq!(sections[0].line(0).and_then(|l| l.text()), Some("kept"));

    let appended = append_section(&sections, SectionKind::Chorus);
    assert_eq!(appended.label(), "Chorus 3");
}

/// The serializer layout is an exact contract: headers, annotations,
/// lyric lines, blank lines for skips, nothing for unvisited slots
#[test]
fn test_serializer_layout_contract() {
    let patterns = StructurePattern::builtin();
    let mut session = CompositionSession::from_pattern(&patterns[0]);
    session.commit("line1");
    session.skip();

    let sections = session.into_sections();
    let prompt = render_prompt("T", &sections, VocalStyle::Male);

    let expected_intro = "\n[Intro]\n\
                          (Taiko drum roll -> Shamisen riff)\n\
                          (High-speed Eurobeat ignition)\n\
                          line1\n\n";
    assert!(
        prompt.contains(expected_intro),
        "intro block mismatch in {:?}",
        prompt
    );

    // untouched chorus renders only its header and annotations
    let expected_chorus = "\n[Chorus]\n\
                           (Key: Minor, Driving, Dramatic)\n\
                           (Full synth, Shout vocals, Taiko barrage)\n\n[Verse]";
    assert!(
        prompt.contains(expected_chorus),
        "chorus block mismatch in {:?}",
        prompt
    );
}

/// A bank loaded from YAML drives the engine just like the built-in one
#[test]
fn test_custom_bank_file_flow() {
    let yaml = r#"
intro_tags: ["open a", "open b", "open c"]
outro_tags: ["close a", "close b", "close c"]
verse_phrases: ["tale a", "tale b", "tale c", "tale d"]
pre_chorus_phrases: ["rise a", "rise b", "rise c"]
chorus_openers: ["HEY! shout", "plain shout", "other shout"]
chorus_lines: ["hook a", "hook b", "hook c"]
chorus_endings: ["the HEY stays", "soft close", "long close"]
bridge_phrases: ["turn a", "turn b", "turn c"]
title_starters: ["Iron "]
title_enders: ["Road"]
opener_keyword: "HEY!"
ending_keyword: "HEY"
"#;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let bank = PhraseBank::load(file.path()).unwrap();
    assert_eq!(bank.validate(), Ok(()));

    let mut engine = SuggestionEngine::with_seed(bank.clone(), 7);
    assert_eq!(engine.random_title(), "Iron Road");

    let patterns = StructurePattern::builtin();
    let mut session = CompositionSession::from_pattern(&patterns[1]);
    let candidates = session.regenerate_candidates(&mut engine);
    assert!(candidates.iter().any(|c| c.contains("HEY!")));

    // drive the whole structure; every line resolves from the small bank
    loop {
        let candidates = session.regenerate_candidates(&mut engine);
        assert!(!candidates.is_empty());
        if session.commit(&candidates[0]) == CommitOutcome::Completed {
            break;
        }
    }
    assert!(session.is_complete());
}

/// Quick fill picks stay inside their documented pools
#[test]
fn test_quick_fill_pools() {
    let bank = PhraseBank::builtin();
    let mut engine = SuggestionEngine::with_seed(bank.clone(), 13);

    for _ in 0..20 {
        let ending = engine.quick_pick(SectionKind::Chorus).unwrap();
        assert!(bank.chorus_endings.contains(&ending));

        let other = engine.quick_pick(SectionKind::Verse).unwrap();
        assert!(bank.verse_phrases.contains(&other) || bank.chorus_lines.contains(&other));
    }
}

/// Editing after completion is ignored; the session stays valid
#[test]
fn test_session_total_after_completion() {
    let patterns = StructurePattern::builtin();
    let mut session = CompositionSession::from_pattern(&patterns[0]);
    for _ in 0..session.total_lines() {
        session.skip();
    }
    assert!(session.is_complete());

    assert_eq!(session.commit("late"), CommitOutcome::Ignored);
    assert!(!session.jump(Cursor::new(0, 0)));
    assert_eq!(session.frontier(), 15);

    let sections = session.into_sections();
    assert!(sections
        .iter()
        .flat_map(|s| s.lines())
        .all(|slot| *slot == LineSlot::Skipped));

    // skipped lines render as deliberate blanks
    let prompt = render_prompt("T", &sections, VocalStyle::Male);
    assert!(prompt.contains("(High-speed Eurobeat ignition)\n\n\n"));
}
