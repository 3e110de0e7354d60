use prompttune_core::{AppViewModel, ComplexityLevel, PromptStyle, StepStatus};
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};
use ratatui::Frame;

use super::constants::*;
use super::layout;
use crate::platform::app::{EditTarget, Focus, UiState};

pub(crate) fn render(frame: &mut Frame, view: &AppViewModel, ui: &UiState) {
    let areas = layout::compute(frame.area());
    render_input(frame, areas.input, view, ui);
    render_config(frame, areas.config, view, ui);
    render_stages(frame, areas.stages, view);
    render_notice(frame, areas.notice, view);
    render_results(frame, areas.results, view, ui);
    render_status(frame, areas.status, ui);
}

fn render_input(frame: &mut Frame, area: Rect, view: &AppViewModel, ui: &UiState) {
    let editing = ui.editing == Some(EditTarget::Prompt);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(ui.focus == Focus::Prompt, editing))
        .title(format!(" {APP_TITLE}: {INPUT_TITLE} "));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [text_area, footer] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

    if editing {
        // Single-line scroll view while the cursor is live.
        let width = text_area.width.max(1) as usize;
        let scroll = ui.editor.visual_scroll(width.saturating_sub(1));
        frame.render_widget(
            Paragraph::new(ui.editor.value()).scroll((0, scroll as u16)),
            text_area,
        );
        let cursor_x = ui.editor.visual_cursor().saturating_sub(scroll) as u16;
        frame.set_cursor_position(Position::new(text_area.x + cursor_x, text_area.y));
    } else if view.input.is_empty() {
        frame.render_widget(
            Paragraph::new(INPUT_PLACEHOLDER).style(Style::default().fg(Color::DarkGray)),
            text_area,
        );
    } else {
        frame.render_widget(
            Paragraph::new(view.input.as_str()).wrap(Wrap { trim: false }),
            text_area,
        );
    }

    let submit = if view.busy {
        Span::styled(SUBMIT_BUSY, Style::default().fg(Color::Yellow))
    } else if view.can_submit {
        Span::styled(SUBMIT_READY, Style::default().fg(Color::Green))
    } else {
        Span::styled(SUBMIT_READY, Style::default().fg(Color::DarkGray))
    };
    let count = Span::styled(
        format!("{} belgi", view.input.chars().count()),
        Style::default().fg(Color::DarkGray),
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![count, Span::raw("  "), submit])),
        footer,
    );
}

fn render_config(frame: &mut Frame, area: Rect, view: &AppViewModel, ui: &UiState) {
    let [style_area, complexity_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);

    let style_lines: Vec<Line> = PromptStyle::ALL
        .iter()
        .map(|style| choice_line(style.label(), *style == view.style))
        .collect();
    render_choice_list(
        frame,
        style_area,
        STYLE_TITLE,
        style_lines,
        ui.focus == Focus::Style,
    );

    let complexity_lines: Vec<Line> = ComplexityLevel::ALL
        .iter()
        .map(|level| choice_line(level.label(), *level == view.complexity))
        .collect();
    render_choice_list(
        frame,
        complexity_area,
        COMPLEXITY_TITLE,
        complexity_lines,
        ui.focus == Focus::Complexity,
    );
}

fn choice_line(label: &str, selected: bool) -> Line<'_> {
    if selected {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::LightBlue)),
            Span::styled(
                label,
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(vec![Span::raw("  "), Span::raw(label)])
    }
}

fn render_choice_list(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line>, focused: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(focused, false))
        .title(format!(" {title} "));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_stages(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let cells = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
    for (index, row) in view.stage_rows.iter().enumerate() {
        let (label, description) = STAGE_CELLS[index];
        let (symbol, color) = match row.status {
            StepStatus::Pending => ("o", Color::DarkGray),
            StepStatus::Active => ("*", Color::LightBlue),
            StepStatus::Completed => ("+", Color::Green),
            StepStatus::Error => ("x", Color::Red),
        };
        let lines = vec![
            Line::from(Span::styled(
                format!("{symbol} {label}"),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                description,
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).centered(), cells[index]);
    }
}

fn render_notice(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    if let Some(message) = &view.error {
        frame.render_widget(
            Paragraph::new(format!("! {message}")).style(Style::default().fg(Color::Red)),
            area,
        );
    }
}

fn render_results(frame: &mut Frame, area: Rect, view: &AppViewModel, ui: &UiState) {
    let Some(analysis) = &view.analysis else {
        frame.render_widget(
            Paragraph::new(RESULTS_PLACEHOLDER)
                .style(Style::default().fg(Color::DarkGray))
                .centered(),
            area,
        );
        return;
    };

    let [analysis_area, variants_area] =
        Layout::vertical([Constraint::Length(4), Constraint::Min(5)]).areas(area);

    render_analysis(frame, analysis_area, analysis);
    render_variants(frame, variants_area, view, ui);
}

fn render_analysis(frame: &mut Frame, area: Rect, analysis: &prompttune_core::AnalysisView) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::horizontal([
        Constraint::Percentage(40),
        Constraint::Percentage(30),
        Constraint::Percentage(30),
    ])
    .split(inner);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                ANALYSIS_INTENT,
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(analysis.intent_detected.as_str()),
        ]),
        columns[0],
    );

    let [clarity_label, clarity_bar] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(columns[1]);
    frame.render_widget(
        Paragraph::new(Span::styled(
            ANALYSIS_CLARITY,
            Style::default().fg(Color::DarkGray),
        )),
        clarity_label,
    );
    frame.render_widget(
        Gauge::default()
            .ratio(analysis.clarity_score / 100.0)
            .label(format!("{:.0}/100", analysis.clarity_score))
            .gauge_style(Style::default().fg(Color::LightBlue)),
        clarity_bar,
    );

    // Mirrors the web layout: at most two issues are shown.
    if !analysis.grammar_issues.is_empty() {
        let mut lines = vec![Line::from(Span::styled(
            ANALYSIS_ISSUES,
            Style::default().fg(Color::DarkGray),
        ))];
        for issue in analysis.grammar_issues.iter().take(2) {
            lines.push(Line::from(Span::styled(
                format!("- {issue}"),
                Style::default().fg(Color::Yellow),
            )));
        }
        frame.render_widget(Paragraph::new(lines), columns[2]);
    }
}

fn render_variants(frame: &mut Frame, area: Rect, view: &AppViewModel, ui: &UiState) {
    if view.variants.is_empty() {
        return;
    }
    let count = view.variants.len();
    let selected = ui.selected_variant.min(count - 1);
    let columns =
        Layout::horizontal(vec![Constraint::Ratio(1, count as u32); count]).split(area);

    for (index, variant) in view.variants.iter().enumerate() {
        let focused = ui.focus == Focus::Variants && index == selected;
        let editing = ui.editing == Some(EditTarget::Variant(index));

        let mut title = format!(" {} ", variant.title);
        if !variant.tags.is_empty() {
            title = format!("{}[{}] ", title, variant.tags.join("]["));
        }
        if ui.copied_index() == Some(index) {
            title = format!("{}({COPIED_BADGE}) ", title);
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(focus_style(focused, editing))
            .title(title);
        let inner = block.inner(columns[index]);
        frame.render_widget(block, columns[index]);

        let [content_area, reasoning_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(3)]).areas(inner);

        frame.render_widget(
            Paragraph::new(variant.content.as_str()).wrap(Wrap { trim: false }),
            content_area,
        );
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(
                    REASONING_PREFIX,
                    Style::default()
                        .fg(Color::LightBlue)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    variant.reasoning.as_str(),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
            .wrap(Wrap { trim: true }),
            reasoning_area,
        );
    }
}

fn render_status(frame: &mut Frame, area: Rect, ui: &UiState) {
    let hints = if ui.editing.is_some() {
        HINTS_EDITING
    } else {
        HINTS_NORMAL
    };
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn focus_style(focused: bool, editing: bool) -> Style {
    if editing {
        Style::default().fg(Color::Green)
    } else if focused {
        Style::default().fg(Color::LightBlue)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
