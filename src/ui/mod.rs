// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Terminal UI for the VERSECRAFT wizard.
//!
//! Provides a ratatui-based terminal interface that walks the screen flow
//! from vocal selection through structure choice, the line-by-line wizard,
//! review, title, and the final prompt export.

mod screens;

use std::collections::HashSet;
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::export::{render_prompt, save_prompt, VocalStyle};
use crate::session::{CommitOutcome, CompositionSession, Cursor, FilledLine};
use crate::structure::{
    position_at, sections_from_pattern, total_lines, LineSlot, Section, SectionKind,
    StructureBuilder, StructurePattern,
};
use crate::suggest::{SuggestionContext, SuggestionEngine};

/// Which screen is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Vocal selection and entry point
    Home,
    /// Structure pattern catalog
    Patterns,
    /// Custom structure builder
    Builder,
    /// Line-by-line composition wizard
    Wizard,
    /// Full-lyric review and touch-up
    Review,
    /// Title confirmation
    Title,
    /// Rendered prompt and file export
    Export,
}

/// What a submitted text input applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Custom line for the wizard cursor
    WizardCustom,
    /// Replacement text for the review selection
    ReviewEdit,
    /// Replacement title
    TitleEdit,
}

impl InputContext {
    /// Overlay title
    pub fn title(self) -> &'static str {
        match self {
            InputContext::WizardCustom => " Custom Line ",
            InputContext::ReviewEdit => " Edit Line ",
            InputContext::TitleEdit => " Edit Title ",
        }
    }
}

/// Free-text input overlay state
#[derive(Debug, Clone)]
pub struct InputState {
    /// Text typed so far
    pub buffer: String,
    /// Where the text goes on submit
    pub context: InputContext,
}

/// UI state driving the screen flow
#[derive(Debug, Clone)]
pub struct AppState {
    /// Active screen
    pub screen: Screen,
    /// Vocal selection made on the home screen
    pub vocal: VocalStyle,
    /// Catalog patterns offered on the pattern screen
    pub patterns: Vec<StructurePattern>,
    /// Selected pattern row (the row past the last pattern is the custom entry)
    pub pattern_index: usize,
    /// Custom structure under construction
    pub builder: StructureBuilder,
    /// Selected row in the builder sequence
    pub builder_index: usize,
    /// Whether the active session came from the builder
    pub from_builder: bool,
    /// Active composition
    pub session: Option<CompositionSession>,
    /// Candidates for the cursor line
    pub candidates: Vec<String>,
    /// Copy-source list while copy mode is open
    pub copy_sources: Option<Vec<FilledLine>>,
    /// Selected copy source row
    pub copy_index: usize,
    /// Visited-line list while the jump picker is open
    pub jump_targets: Option<Vec<FilledLine>>,
    /// Selected jump target row
    pub jump_index: usize,
    /// Completed sections under review
    pub review_sections: Vec<Section>,
    /// Selected review line as a flat index
    pub review_index: usize,
    /// Reroll candidates for the review selection
    pub review_candidates: Vec<String>,
    /// Working title
    pub title: String,
    /// Rendered prompt shown on the export screen
    pub prompt: String,
    /// Export screen scroll offset
    pub export_scroll: u16,
    /// Pending free-text input overlay
    pub input: Option<InputState>,
    /// Status message
    pub status_message: Option<String>,
    /// Status message timestamp
    pub status_time: Option<Instant>,
    /// Output path for the written prompt
    pub out_path: PathBuf,
    /// Whether to continue running
    pub running: bool,
}

impl AppState {
    /// Create the initial state over a pattern catalog
    pub fn new(patterns: Vec<StructurePattern>, out_path: PathBuf) -> Self {
        Self {
            screen: Screen::Home,
            vocal: VocalStyle::default(),
            patterns,
            pattern_index: 0,
            builder: StructureBuilder::new(),
            builder_index: 0,
            from_builder: false,
            session: None,
            candidates: Vec::new(),
            copy_sources: None,
            copy_index: 0,
            jump_targets: None,
            jump_index: 0,
            review_sections: Vec::new(),
            review_index: 0,
            review_candidates: Vec::new(),
            title: String::new(),
            prompt: String::new(),
            export_scroll: 0,
            input: None,
            status_message: None,
            status_time: None,
            out_path,
            running: true,
        }
    }

    /// Set a status message that will be displayed temporarily
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_time = Some(Instant::now());
    }

    /// Clear expired status message
    pub fn clear_expired_status(&mut self) {
        if let Some(time) = self.status_time {
            if time.elapsed() > Duration::from_secs(3) {
                self.status_message = None;
                self.status_time = None;
            }
        }
    }

    /// Apply one key press to the state
    pub fn handle_key(
        &mut self,
        engine: &mut SuggestionEngine,
        code: KeyCode,
        modifiers: KeyModifiers,
    ) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }

        if self.input.is_some() {
            self.handle_input_key(engine, code);
            return;
        }

        match self.screen {
            Screen::Home => self.handle_home_key(code),
            Screen::Patterns => self.handle_patterns_key(engine, code),
            Screen::Builder => self.handle_builder_key(engine, code, modifiers),
            Screen::Wizard => self.handle_wizard_key(engine, code),
            Screen::Review => self.handle_review_key(engine, code),
            Screen::Title => self.handle_title_key(engine, code),
            Screen::Export => self.handle_export_key(code),
        }
    }

    /// Position of the review selection
    pub fn review_position(&self) -> Option<(usize, usize)> {
        position_at(&self.review_sections, self.review_index)
    }

    fn handle_home_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                self.vocal = match self.vocal {
                    VocalStyle::Male => VocalStyle::Female,
                    VocalStyle::Female => VocalStyle::Male,
                };
            }
            KeyCode::Enter => self.screen = Screen::Patterns,
            _ => {}
        }
    }

    fn handle_patterns_key(&mut self, engine: &mut SuggestionEngine, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Esc => self.screen = Screen::Home,
            KeyCode::Up => self.pattern_index = self.pattern_index.saturating_sub(1),
            KeyCode::Down => {
                // the extra row is the custom-structure entry
                if self.pattern_index < self.patterns.len() {
                    self.pattern_index += 1;
                }
            }
            KeyCode::Enter => {
                if self.pattern_index < self.patterns.len() {
                    let pattern = self.patterns[self.pattern_index].clone();
                    self.from_builder = false;
                    self.start_session(engine, sections_from_pattern(&pattern));
                } else {
                    self.builder.clear();
                    self.builder_index = 0;
                    self.screen = Screen::Builder;
                }
            }
            _ => {}
        }
    }

    fn handle_builder_key(
        &mut self,
        engine: &mut SuggestionEngine,
        code: KeyCode,
        modifiers: KeyModifiers,
    ) {
        match code {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Esc => self.screen = Screen::Patterns,
            KeyCode::Char(c @ '1'..='6') => {
                let kind = SectionKind::ALL[(c as usize) - ('1' as usize)];
                self.builder.add(kind);
                self.builder_index = self.builder.len() - 1;
            }
            KeyCode::Char('d') | KeyCode::Backspace => {
                self.builder.remove(self.builder_index);
                if self.builder_index > 0 && self.builder_index >= self.builder.len() {
                    self.builder_index -= 1;
                }
            }
            KeyCode::Up if modifiers.contains(KeyModifiers::SHIFT) => {
                if self.builder.move_up(self.builder_index) {
                    self.builder_index -= 1;
                }
            }
            KeyCode::Down if modifiers.contains(KeyModifiers::SHIFT) => {
                if self.builder.move_down(self.builder_index) {
                    self.builder_index += 1;
                }
            }
            KeyCode::Up => self.builder_index = self.builder_index.saturating_sub(1),
            KeyCode::Down => {
                if self.builder_index + 1 < self.builder.len() {
                    self.builder_index += 1;
                }
            }
            KeyCode::Enter => {
                if self.builder.is_empty() {
                    self.set_status("Add at least one section");
                } else {
                    let pattern = self.builder.build();
                    self.from_builder = true;
                    self.start_session(engine, sections_from_pattern(&pattern));
                }
            }
            _ => {}
        }
    }

    fn handle_wizard_key(&mut self, engine: &mut SuggestionEngine, code: KeyCode) {
        if self.copy_sources.is_some() {
            self.handle_copy_key(engine, code);
            return;
        }
        if self.jump_targets.is_some() {
            self.handle_jump_key(engine, code);
            return;
        }

        match code {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Esc => {
                self.session = None;
                self.candidates.clear();
                self.screen = if self.from_builder {
                    Screen::Builder
                } else {
                    Screen::Patterns
                };
            }
            KeyCode::Char(c @ '1'..='3') => {
                let index = (c as usize) - ('1' as usize);
                let text = match self.candidates.get(index) {
                    Some(t) => t.clone(),
                    None => return,
                };
                self.commit_current(engine, &text);
            }
            KeyCode::Char('r') => {
                if let Some(session) = &self.session {
                    self.candidates = session.regenerate_candidates(engine);
                }
            }
            KeyCode::Char('g') => {
                let kind = match self
                    .session
                    .as_ref()
                    .and_then(|s| s.current_section())
                    .map(|s| s.kind())
                {
                    Some(k) => k,
                    None => return,
                };
                if let Some(text) = engine.quick_pick(kind) {
                    self.commit_current(engine, &text);
                }
            }
            KeyCode::Char('e') => {
                self.input = Some(InputState {
                    buffer: String::new(),
                    context: InputContext::WizardCustom,
                });
            }
            KeyCode::Char('s') => {
                let outcome = match self.session.as_mut() {
                    Some(session) => session.skip(),
                    None => return,
                };
                self.after_commit(engine, outcome);
            }
            KeyCode::Char('c') => {
                let sources = match &self.session {
                    Some(s) => s.filled_lines(),
                    None => Vec::new(),
                };
                if sources.is_empty() {
                    self.set_status("No committed lines to copy yet");
                } else {
                    self.copy_sources = Some(sources);
                    self.copy_index = 0;
                }
            }
            KeyCode::Char('j') => {
                let targets = match &self.session {
                    Some(s) => s.visited_lines(),
                    None => Vec::new(),
                };
                if targets.is_empty() {
                    self.set_status("No visited lines to jump to yet");
                } else {
                    self.jump_targets = Some(targets);
                    self.jump_index = 0;
                }
            }
            KeyCode::Left | KeyCode::Right => self.jump_adjacent(engine, code),
            _ => {}
        }
    }

    fn handle_copy_key(&mut self, engine: &mut SuggestionEngine, code: KeyCode) {
        let len = self.copy_sources.as_ref().map(|s| s.len()).unwrap_or(0);
        match code {
            KeyCode::Esc | KeyCode::Char('c') => self.copy_sources = None,
            KeyCode::Up => self.copy_index = self.copy_index.saturating_sub(1),
            KeyCode::Down => {
                if self.copy_index + 1 < len {
                    self.copy_index += 1;
                }
            }
            KeyCode::Enter => {
                let source = self
                    .copy_sources
                    .as_ref()
                    .and_then(|s| s.get(self.copy_index))
                    .map(|f| f.position);
                self.copy_sources = None;
                if let Some(source) = source {
                    self.commit_copy(engine, source);
                }
            }
            _ => {}
        }
    }

    fn handle_jump_key(&mut self, engine: &mut SuggestionEngine, code: KeyCode) {
        let len = self.jump_targets.as_ref().map(|t| t.len()).unwrap_or(0);
        match code {
            KeyCode::Esc | KeyCode::Char('j') => self.jump_targets = None,
            KeyCode::Up => self.jump_index = self.jump_index.saturating_sub(1),
            KeyCode::Down => {
                if self.jump_index + 1 < len {
                    self.jump_index += 1;
                }
            }
            KeyCode::Enter => {
                let target = self
                    .jump_targets
                    .as_ref()
                    .and_then(|t| t.get(self.jump_index))
                    .map(|f| f.position);
                self.jump_targets = None;
                let moved = match (self.session.as_mut(), target) {
                    (Some(session), Some(target)) => session.jump(target),
                    _ => false,
                };
                if moved {
                    if let Some(session) = &self.session {
                        self.candidates = session.regenerate_candidates(engine);
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_review_key(&mut self, engine: &mut SuggestionEngine, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Esc => self.screen = Screen::Patterns,
            KeyCode::Up => {
                self.review_index = self.review_index.saturating_sub(1);
                self.review_candidates.clear();
            }
            KeyCode::Down => {
                if self.review_index + 1 < total_lines(&self.review_sections) {
                    self.review_index += 1;
                    self.review_candidates.clear();
                }
            }
            KeyCode::Char('r') => self.reroll_review_candidates(engine),
            KeyCode::Char(c @ '1'..='3') => {
                let index = (c as usize) - ('1' as usize);
                if let Some(text) = self.review_candidates.get(index).cloned() {
                    self.apply_review_text(&text);
                    self.review_candidates.clear();
                }
            }
            KeyCode::Char('e') => {
                let prefill = self
                    .review_position()
                    .and_then(|(section, line)| self.review_sections[section].line(line))
                    .and_then(|slot| slot.text())
                    .unwrap_or("")
                    .to_string();
                self.input = Some(InputState {
                    buffer: prefill,
                    context: InputContext::ReviewEdit,
                });
            }
            KeyCode::Enter => self.screen = Screen::Title,
            _ => {}
        }
    }

    fn handle_title_key(&mut self, engine: &mut SuggestionEngine, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Esc => self.screen = Screen::Review,
            KeyCode::Char('r') => self.title = engine.random_title(),
            KeyCode::Char('e') => {
                self.input = Some(InputState {
                    buffer: self.title.clone(),
                    context: InputContext::TitleEdit,
                });
            }
            KeyCode::Enter => {
                self.prompt = render_prompt(&self.title, &self.review_sections, self.vocal);
                self.export_scroll = 0;
                self.screen = Screen::Export;
            }
            _ => {}
        }
    }

    fn handle_export_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Esc => self.screen = Screen::Title,
            KeyCode::Up => self.export_scroll = self.export_scroll.saturating_sub(1),
            KeyCode::Down => self.export_scroll = self.export_scroll.saturating_add(1),
            KeyCode::Char('w') => {
                let message = match save_prompt(&self.out_path, &self.prompt) {
                    Ok(()) => format!("Prompt written to {}", self.out_path.display()),
                    Err(err) => format!("Write failed: {}", err),
                };
                self.set_status(message);
            }
            KeyCode::Char('n') => self.restart(),
            _ => {}
        }
    }

    fn handle_input_key(&mut self, engine: &mut SuggestionEngine, code: KeyCode) {
        match code {
            KeyCode::Esc => self.input = None,
            KeyCode::Enter => self.submit_input(engine),
            KeyCode::Backspace => {
                if let Some(input) = self.input.as_mut() {
                    input.buffer.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(input) = self.input.as_mut() {
                    input.buffer.push(c);
                }
            }
            _ => {}
        }
    }

    fn submit_input(&mut self, engine: &mut SuggestionEngine) {
        let input = match self.input.take() {
            Some(i) => i,
            None => return,
        };
        match input.context {
            InputContext::WizardCustom => {
                let text = input.buffer.trim().to_string();
                if !text.is_empty() {
                    self.commit_current(engine, &text);
                }
            }
            InputContext::ReviewEdit => {
                self.apply_review_text(&input.buffer);
                self.review_candidates.clear();
            }
            InputContext::TitleEdit => {
                let text = input.buffer.trim();
                if !text.is_empty() {
                    self.title = text.to_string();
                }
            }
        }
    }

    /// Open a wizard session over the given sections
    fn start_session(&mut self, engine: &mut SuggestionEngine, sections: Vec<Section>) {
        let session = CompositionSession::new(sections)
            .with_title(engine.random_title())
            .with_vocal(self.vocal);
        if session.is_complete() {
            self.set_status("Structure has no lines");
            return;
        }
        self.candidates = session.regenerate_candidates(engine);
        self.session = Some(session);
        self.copy_sources = None;
        self.jump_targets = None;
        self.screen = Screen::Wizard;
    }

    /// Commit text at the wizard cursor and react to the outcome
    fn commit_current(&mut self, engine: &mut SuggestionEngine, text: &str) {
        let outcome = match self.session.as_mut() {
            Some(session) => session.commit(text),
            None => return,
        };
        self.after_commit(engine, outcome);
    }

    /// Commit a copy from an earlier line
    fn commit_copy(&mut self, engine: &mut SuggestionEngine, source: Cursor) {
        let outcome = match self.session.as_mut() {
            Some(session) => session.copy_from(source),
            None => return,
        };
        if outcome == CommitOutcome::Ignored {
            self.set_status("Nothing to copy from that line");
        }
        self.after_commit(engine, outcome);
    }

    fn after_commit(&mut self, engine: &mut SuggestionEngine, outcome: CommitOutcome) {
        match outcome {
            CommitOutcome::Advanced(_) => {
                if let Some(session) = &self.session {
                    self.candidates = session.regenerate_candidates(engine);
                }
                self.copy_sources = None;
                self.jump_targets = None;
            }
            CommitOutcome::Completed => self.finish_wizard(),
            CommitOutcome::Ignored => {}
        }
    }

    /// Jump one line backward or forward within the frontier
    fn jump_adjacent(&mut self, engine: &mut SuggestionEngine, code: KeyCode) {
        let session = match self.session.as_mut() {
            Some(s) => s,
            None => return,
        };
        let cursor = match session.cursor() {
            Some(c) => c,
            None => return,
        };

        let global = session.global_index(cursor);
        let target = if code == KeyCode::Left {
            global.checked_sub(1)
        } else {
            Some(global + 1)
        };
        let moved = target
            .and_then(|g| session.cursor_at(g))
            .map(|t| session.jump(t))
            .unwrap_or(false);
        if moved {
            if let Some(session) = &self.session {
                self.candidates = session.regenerate_candidates(engine);
            }
            self.copy_sources = None;
            self.jump_targets = None;
        }
    }

    /// Hand the finished composition to the review screen
    fn finish_wizard(&mut self) {
        if let Some(session) = self.session.take() {
            self.title = session.title().to_string();
            self.vocal = session.vocal();
            self.review_sections = session.into_sections();
            self.review_index = 0;
            self.review_candidates.clear();
            self.candidates.clear();
            self.copy_sources = None;
            self.jump_targets = None;
            self.screen = Screen::Review;
        }
    }

    /// Replace the review selection; blank input clears the line
    fn apply_review_text(&mut self, text: &str) {
        if let Some((section, line)) = self.review_position() {
            let slot = if text.trim().is_empty() {
                LineSlot::Empty
            } else {
                LineSlot::Text(text.to_string())
            };
            self.review_sections[section].set_line(line, slot);
        }
    }

    /// Draw fresh candidates for the review selection. Review rerolls carry
    /// no wizard context: no first-chorus forcing, no used-phrase history.
    fn reroll_review_candidates(&mut self, engine: &mut SuggestionEngine) {
        let (section, line) = match self.review_position() {
            Some(p) => p,
            None => return,
        };
        let used = HashSet::new();
        let ctx = SuggestionContext {
            kind: self.review_sections[section].kind(),
            line_index: line,
            first_chorus: false,
            used_phrases: &used,
        };
        self.review_candidates = engine.candidates(&ctx);
    }

    /// Reset everything except the vocal selection and start over
    fn restart(&mut self) {
        self.session = None;
        self.candidates.clear();
        self.copy_sources = None;
        self.copy_index = 0;
        self.jump_targets = None;
        self.jump_index = 0;
        self.builder.clear();
        self.builder_index = 0;
        self.from_builder = false;
        self.pattern_index = 0;
        self.review_sections.clear();
        self.review_candidates.clear();
        self.review_index = 0;
        self.title.clear();
        self.prompt.clear();
        self.export_scroll = 0;
        self.input = None;
        self.screen = Screen::Home;
    }
}

/// Terminal wizard application
pub struct App {
    /// Screen and composition state
    state: AppState,
    /// Candidate engine
    engine: SuggestionEngine,
    /// Terminal handle
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Create the app and put the terminal into raw alternate-screen mode
    pub fn new(state: AppState, engine: SuggestionEngine) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            state,
            engine,
            terminal,
        })
    }

    /// Run the event loop until quit
    pub fn run(&mut self) -> io::Result<()> {
        while self.state.running {
            self.state.clear_expired_status();
            self.draw()?;

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.state.handle_key(&mut self.engine, key.code, key.modifiers);
                    }
                }
            }
        }
        Ok(())
    }

    /// Draw the active screen
    fn draw(&mut self) -> io::Result<()> {
        let state = &self.state;
        self.terminal.draw(|frame| screens::render(frame, state))?;
        Ok(())
    }

    /// Cleanup terminal on drop
    fn cleanup(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
