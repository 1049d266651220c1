// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Screen rendering for the wizard UI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::export::VocalStyle;
use crate::session::FilledLine;
use crate::structure::{LineSlot, SectionKind};

use super::{AppState, InputState, Screen};

/// Render the active screen with its overlays
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Main layout: header, content, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_header(frame, chunks[0], state);

    match state.screen {
        Screen::Home => render_home(frame, chunks[1], state),
        Screen::Patterns => render_patterns(frame, chunks[1], state),
        Screen::Builder => render_builder(frame, chunks[1], state),
        Screen::Wizard => render_wizard(frame, chunks[1], state),
        Screen::Review => render_review(frame, chunks[1], state),
        Screen::Title => render_title(frame, chunks[1], state),
        Screen::Export => render_export(frame, chunks[1], state),
    }

    render_status_bar(frame, chunks[2], state);

    // Overlays
    if let Some(sources) = &state.copy_sources {
        render_line_overlay(frame, area, " Copy From ", sources, state.copy_index);
    }
    if let Some(targets) = &state.jump_targets {
        render_line_overlay(frame, area, " Jump To ", targets, state.jump_index);
    }
    if let Some(input) = &state.input {
        render_input_overlay(frame, area, input);
    }
}

/// Render the header bar with the screen name and vocal selection
fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let screen_name = match state.screen {
        Screen::Home => "Home",
        Screen::Patterns => "Structure",
        Screen::Builder => "Custom Structure",
        Screen::Wizard => "Composition",
        Screen::Review => "Review",
        Screen::Title => "Title",
        Screen::Export => "Export",
    };

    let block = Block::default().borders(Borders::ALL).title(" VERSECRAFT ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = Line::from(vec![
        Span::styled(screen_name, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled("Vocal: ", Style::default().fg(Color::DarkGray)),
        Span::styled(state.vocal.name(), Style::default().fg(Color::Magenta)),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}

/// Render the home screen: vocal selection and entry point
fn render_home(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Vocal Style ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from("Guided lyric composition for jidaigeki Eurobeat."),
        Line::from(""),
        Line::from(Span::styled(
            "Pick a vocal style:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for style in [VocalStyle::Male, VocalStyle::Female] {
        let marker = if state.vocal == style { "> " } else { "  " };
        let line_style = if state.vocal == style {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(Span::styled(
            format!("{}{}", marker, style.name()),
            line_style,
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter to continue",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render the pattern catalog with the trailing custom-structure entry
fn render_patterns(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Song Structure ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for (i, pattern) in state.patterns.iter().enumerate() {
        let selected = state.pattern_index == i;
        lines.push(row_line(
            selected,
            format!(
                "{}  ({} lines)",
                pattern.name,
                pattern.total_lines()
            ),
        ));
        lines.push(Line::from(Span::styled(
            format!("     {}", pattern.description),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let custom_selected = state.pattern_index == state.patterns.len();
    lines.push(Line::from(""));
    lines.push(row_line(custom_selected, "陣形・自由 (build your own)".to_string()));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render the custom structure builder
fn render_builder(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(20)])
        .split(area);

    // Palette of section types
    let palette_block = Block::default().borders(Borders::ALL).title(" Sections ");
    let palette_inner = palette_block.inner(chunks[0]);
    frame.render_widget(palette_block, chunks[0]);

    let palette: Vec<Line> = SectionKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            Line::from(vec![
                Span::styled(
                    format!(" {} ", i + 1),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("{} ({} lines)", kind.label(), kind.line_count())),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(palette), palette_inner);

    // Assembled sequence
    let sequence_block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Sequence ({} lines) ", state.builder.total_lines()));
    let sequence_inner = sequence_block.inner(chunks[1]);
    frame.render_widget(sequence_block, chunks[1]);

    if state.builder.is_empty() {
        let empty = Paragraph::new("Press 1-6 to add sections")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, sequence_inner);
        return;
    }

    let rows: Vec<Line> = state
        .builder
        .labels()
        .into_iter()
        .enumerate()
        .map(|(i, label)| row_line(state.builder_index == i, label))
        .collect();
    frame.render_widget(Paragraph::new(rows), sequence_inner);
}

/// Render the line-by-line composition wizard
fn render_wizard(frame: &mut Frame, area: Rect, state: &AppState) {
    let session = match &state.session {
        Some(s) => s,
        None => return,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress
            Constraint::Min(6),    // Current section
            Constraint::Length(5), // Candidates
        ])
        .split(area);

    // Progress gauge over the linearized line index
    let position = session
        .cursor()
        .map(|c| session.global_index(c))
        .unwrap_or_else(|| session.total_lines());
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Progress "))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(session.progress())
        .label(format!("line {} / {}", position + 1, session.total_lines()));
    frame.render_widget(gauge, chunks[0]);

    // Current section with its lines so far
    let (section, cursor) = match (session.current_section(), session.cursor()) {
        (Some(section), Some(cursor)) => (section, cursor),
        _ => return,
    };

    let section_block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" [{}] ", section.label()));
    let section_inner = section_block.inner(chunks[1]);
    frame.render_widget(section_block, chunks[1]);

    let mut lines: Vec<Line> = section
        .annotations()
        .iter()
        .map(|a| Line::from(Span::styled(a.clone(), Style::default().fg(Color::DarkGray))))
        .collect();
    for (i, slot) in section.lines().iter().enumerate() {
        let marker = if i == cursor.line { "> " } else { "  " };
        let (text, style) = match slot {
            LineSlot::Text(t) => (t.as_str(), Style::default().fg(Color::White)),
            LineSlot::Skipped => ("(blank)", Style::default().fg(Color::DarkGray)),
            LineSlot::Empty => ("...", Style::default().fg(Color::DarkGray)),
        };
        let marker_style = if i == cursor.line {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(marker, marker_style),
            Span::styled(text.to_string(), style),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), section_inner);

    // Candidates for the cursor line
    let candidates_block = Block::default()
        .borders(Borders::ALL)
        .title(" Suggestions ");
    let candidates_inner = candidates_block.inner(chunks[2]);
    frame.render_widget(candidates_block, chunks[2]);

    let candidate_lines: Vec<Line> = state
        .candidates
        .iter()
        .enumerate()
        .map(|(i, candidate)| {
            Line::from(vec![
                Span::styled(
                    format!(" {} ", i + 1),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::raw(candidate.clone()),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(candidate_lines), candidates_inner);
}

/// Render the full-lyric review screen
fn render_review(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(5)])
        .split(area);

    let block = Block::default().borders(Borders::ALL).title(" Lyrics ");
    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    let mut lines = Vec::new();
    let mut flat_index = 0usize;
    for section in &state.review_sections {
        lines.push(Line::from(Span::styled(
            format!("[{}]", section.label()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        for slot in section.lines() {
            let selected = flat_index == state.review_index;
            let text = match slot {
                LineSlot::Text(t) => t.clone(),
                LineSlot::Skipped => "(blank)".to_string(),
                LineSlot::Empty => "(empty)".to_string(),
            };
            lines.push(row_line(selected, text));
            flat_index += 1;
        }
    }

    // Keep the selection in view
    let selected_row = state.review_index
        + state
            .review_position()
            .map(|(section, _)| section + 1)
            .unwrap_or(0);
    let visible = inner.height as usize;
    let scroll = selected_row.saturating_sub(visible.saturating_sub(1)) as u16;
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);

    // Reroll candidates for the selection
    let candidates_block = Block::default()
        .borders(Borders::ALL)
        .title(" Replacements ");
    let candidates_inner = candidates_block.inner(chunks[1]);
    frame.render_widget(candidates_block, chunks[1]);

    if state.review_candidates.is_empty() {
        let hint = Paragraph::new("r to draw replacement lines")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, candidates_inner);
    } else {
        let rows: Vec<Line> = state
            .review_candidates
            .iter()
            .enumerate()
            .map(|(i, candidate)| {
                Line::from(vec![
                    Span::styled(
                        format!(" {} ", i + 1),
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(candidate.clone()),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(rows), candidates_inner);
    }
}

/// Render the title confirmation screen
fn render_title(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().borders(Borders::ALL).title(" Title ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            state.title.clone(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(
            "r: redraw  e: edit  Enter: build prompt",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render the finished prompt with its scroll offset
fn render_export(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Generator Prompt ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(state.prompt.clone())
        .wrap(Wrap { trim: false })
        .scroll((state.export_scroll, 0));
    frame.render_widget(paragraph, inner);
}

/// Render the status bar: a transient message or per-screen key hints
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let text = if let Some(ref msg) = state.status_message {
        Span::styled(msg.clone(), Style::default().fg(Color::Yellow))
    } else {
        let hints = match state.screen {
            Screen::Home => " Left/Right: Vocal | Enter: Continue | q: Quit",
            Screen::Patterns => " Up/Down: Select | Enter: Start | Esc: Back | q: Quit",
            Screen::Builder => {
                " 1-6: Add | d: Remove | Shift+Up/Dn: Reorder | Enter: Start | Esc: Back"
            }
            Screen::Wizard => {
                " 1-3: Pick | r: Redraw | g: Quick fill | e: Custom | s: Skip | c: Copy | j: Jump | Left/Right: Move"
            }
            Screen::Review => " Up/Down: Select | r: Redraw | 1-3: Replace | e: Edit | Enter: Continue",
            Screen::Title => " r: Redraw | e: Edit | Enter: Continue | Esc: Back",
            Screen::Export => " w: Write file | Up/Down: Scroll | n: New song | q: Quit",
        };
        Span::styled(hints, Style::default().fg(Color::DarkGray))
    };
    frame.render_widget(Paragraph::new(text), area);
}

/// Render a line-picker overlay (copy sources or jump targets)
fn render_line_overlay(
    frame: &mut Frame,
    area: Rect,
    title: &'static str,
    lines: &[FilledLine],
    selected: usize,
) {
    let height = (lines.len() as u16 + 2).min(area.height.saturating_sub(4));
    let overlay = centered_rect(area, 60, height.max(3));

    frame.render_widget(
        Block::default().style(Style::default().bg(Color::Black)),
        overlay,
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let rows: Vec<Line> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let text = if line.text.is_empty() {
                "(blank)"
            } else {
                line.text.as_str()
            };
            row_line(
                selected == i,
                format!("{} line {}: {}", line.label, line.position.line + 1, text),
            )
        })
        .collect();

    let visible = inner.height as usize;
    let scroll = selected.saturating_sub(visible.saturating_sub(1)) as u16;
    frame.render_widget(Paragraph::new(rows).scroll((scroll, 0)), inner);
}

/// Render the free-text input overlay
fn render_input_overlay(frame: &mut Frame, area: Rect, input: &InputState) {
    let overlay = centered_rect(area, 60, 3);

    frame.render_widget(
        Block::default().style(Style::default().bg(Color::Black)),
        overlay,
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .title(input.context.title())
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let line = Line::from(vec![
        Span::raw(input.buffer.clone()),
        Span::styled("_", Style::default().fg(Color::Yellow)),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}

/// A rect centered in `area` spanning `percent_x` of its width with a fixed height
fn centered_rect(area: Rect, percent_x: u16, height: u16) -> Rect {
    let width = area.width * percent_x / 100;
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// A selectable row with the shared marker and highlight style
fn row_line(selected: bool, text: String) -> Line<'static> {
    let marker = if selected { "> " } else { "  " };
    let style = if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(Span::styled(format!("{}{}", marker, text), style))
}
