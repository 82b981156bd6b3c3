use ratatui::prelude::*;
use ratatui::widgets::{Block, Clear, Gauge, Paragraph, Wrap};

use crate::scoring::Quadrant;
use crate::tui::app::{App, InputMode};
use crate::tui::theme;
use crate::wizard::Mode;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 12 || area.width < 40 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    match app.session.mode() {
        Mode::Collecting => draw_wizard(frame, app),
        Mode::ShowingResult => draw_result(frame, app),
    }

    if app.input_mode == InputMode::Help {
        render_help_popup(frame, app);
    }
}

fn draw_wizard(frame: &mut Frame, app: &App) {
    // Layout: Title(1) + Step(1) + Gauge(1) + Name(3) + Criterion(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(frame.area());

    render_title(frame, chunks[0], app);
    render_step_line(frame, chunks[1], app);
    render_gauge(frame, chunks[2], app);
    render_name_field(frame, chunks[3], app);
    render_criterion(frame, chunks[4], app);
    render_status_bar(frame, chunks[5], app);
}

fn draw_result(frame: &mut Frame, app: &App) {
    // Layout: Title(1) + Heading(2) + Grid(10) + Text(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(10),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(frame.area());

    render_title(frame, chunks[0], app);
    render_result_heading(frame, chunks[1], app);
    render_quadrant_grid(frame, chunks[2], app);
    render_result_text(frame, chunks[3], app);
    render_status_bar(frame, chunks[4], app);
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let title = Line::from(Span::styled(
        "GrantLaunch",
        Style::default().fg(app.colors.title_color).bold(),
    ));
    frame.render_widget(Paragraph::new(title), area);
}

fn render_step_line(frame: &mut Frame, area: Rect, app: &App) {
    let text = format!(
        "Criterion {} of {}",
        app.session.step() + 1,
        app.session.step_count()
    );
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(app.colors.muted)),
        area,
    );
}

fn render_gauge(frame: &mut Frame, area: Rect, app: &App) {
    let gauge = Gauge::default()
        .ratio(app.session.progress())
        .label(format!(
            "{}/{}",
            app.session.step() + 1,
            app.session.step_count()
        ))
        .gauge_style(
            Style::default()
                .fg(app.colors.gauge_filled)
                .bg(app.colors.gauge_empty),
        );
    frame.render_widget(gauge, area);
}

fn render_name_field(frame: &mut Frame, area: Rect, app: &App) {
    let editing = app.input_mode == InputMode::NameInput;
    let border_style = if editing {
        Style::default().fg(app.colors.input_active)
    } else {
        Style::default().fg(app.colors.muted)
    };

    let block = Block::bordered()
        .title(" Funder Name (e to edit) ")
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = if editing {
        format!("{}|", app.session.funder_name())
    } else if app.session.funder_name().is_empty() {
        "This funder".to_string()
    } else {
        app.session.funder_name().to_string()
    };
    let style = if editing || !app.session.funder_name().is_empty() {
        Style::default()
    } else {
        Style::default().fg(app.colors.muted)
    };
    frame.render_widget(Paragraph::new(text).style(style), inner);
}

fn render_criterion(frame: &mut Frame, area: Rect, app: &App) {
    let criterion = app.session.current_criterion();
    let answered_yes = app.session.answer(&criterion.id);

    let block = Block::bordered().border_style(Style::default().fg(app.colors.muted));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let answer_span = if answered_yes {
        Span::styled("Yes", Style::default().fg(app.colors.yes_color).bold())
    } else {
        Span::styled("No", Style::default().fg(app.colors.no_color).bold())
    };

    let lines = vec![
        Line::from(Span::styled(
            criterion.label.clone(),
            Style::default().bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            criterion.description.clone(),
            Style::default().fg(app.colors.muted),
        )),
        Line::from(""),
        Line::from(vec![Span::raw("Answer: "), answer_span]),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_result_heading(frame: &mut Frame, area: Rect, app: &App) {
    let Some(result) = app.session.result() else {
        return;
    };
    let who = if app.session.funder_name().is_empty() {
        "This funder"
    } else {
        app.session.funder_name()
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("Analysis for {}", who),
            Style::default().bold(),
        )),
        Line::from(vec![
            Span::raw(format!("Score {}/{} - ", result.score, app.session.step_count())),
            Span::styled(
                result.quadrant.label(),
                Style::default()
                    .fg(theme::quadrant_color(result.quadrant))
                    .bold(),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_quadrant_grid(frame: &mut Frame, area: Rect, app: &App) {
    let Some(result) = app.session.result() else {
        return;
    };

    // Same cell order as the fit chart: weak effort up top-left,
    // strongest match top-right.
    let layout_rows = Layout::vertical([Constraint::Fill(1), Constraint::Fill(1)]).split(area);
    let top = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(layout_rows[0]);
    let bottom =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(layout_rows[1]);

    let cells = [
        (top[0], Quadrant::PotentialNeedsWork),
        (top[1], Quadrant::StrongMatch),
        (bottom[0], Quadrant::LowPriority),
        (bottom[1], Quadrant::GoodFitLimitedFunds),
    ];

    for (cell_area, quadrant) in cells {
        let matched = quadrant == result.quadrant;
        let border_style = if matched {
            Style::default().fg(theme::quadrant_color(quadrant)).bold()
        } else {
            Style::default().fg(app.colors.grid_dim)
        };

        let block = Block::bordered().border_style(border_style);
        let inner = block.inner(cell_area);
        frame.render_widget(block, cell_area);

        let label_style = if matched {
            Style::default().fg(theme::quadrant_color(quadrant)).bold()
        } else {
            Style::default().fg(app.colors.grid_dim)
        };

        let mut lines = vec![Line::from(Span::styled(quadrant.label(), label_style))];
        if matched {
            lines.push(Line::from(Span::styled(
                format!("{}", result.score),
                Style::default().fg(theme::quadrant_color(quadrant)).bold(),
            )));
        }

        let pad = (inner.height as usize).saturating_sub(lines.len()) / 2;
        let mut padded: Vec<Line> = std::iter::repeat_with(|| Line::from(""))
            .take(pad)
            .collect();
        padded.extend(lines);

        frame.render_widget(
            Paragraph::new(padded)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            inner,
        );
    }
}

fn render_result_text(frame: &mut Frame, area: Rect, app: &App) {
    let Some(result) = app.session.result() else {
        return;
    };

    let lines = vec![
        Line::from(Span::styled(
            result.explanation.clone(),
            Style::default().fg(theme::quadrant_color(result.quadrant)),
        )),
        Line::from(""),
        Line::from(Span::styled("Recommendation", Style::default().bold())),
        Line::from(""),
        Line::from(Span::raw(result.recommendation.clone())),
    ];

    let block = Block::bordered().border_style(Style::default().fg(app.colors.muted));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let text = if let Some((ref msg, _)) = app.flash_message {
        Line::from(Span::styled(
            msg.clone(),
            Style::default().fg(app.colors.flash_color),
        ))
    } else {
        // Build hints with colored shortcut keys
        let hints: Vec<(&str, &str)> = match (app.session.mode(), &app.input_mode) {
            (_, InputMode::NameInput) => {
                vec![("Enter/Esc", ":done "), ("Backspace", ":delete")]
            }
            (Mode::Collecting, _) => {
                let next_label = if app.is_final_step() {
                    ":finish "
                } else {
                    ":next "
                };
                vec![
                    ("Space", ":toggle "),
                    ("y", "/n answer "),
                    ("\u{2190}", ":back "),
                    ("\u{2192}", next_label),
                    ("e", ":name "),
                    ("?", ":help "),
                    ("q", ":quit"),
                ]
            }
            (Mode::ShowingResult, _) => vec![
                ("r", ":start over "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
        };

        let mut spans = Vec::new();
        for (key, label) in hints {
            spans.push(Span::styled(
                key,
                Style::default().fg(app.colors.status_key_color),
            ));
            spans.push(Span::raw(label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(app.colors.status_bar_bg)),
        area,
    );
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Render the help overlay popup
fn render_help_popup(frame: &mut Frame, app: &App) {
    let popup_area = centered_rect_fixed(46, 14, frame.area());

    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(" Keyboard Shortcuts ")
        .border_style(Style::default().fg(app.colors.popup_border));
    frame.render_widget(block.clone(), popup_area);

    let inner = block.inner(popup_area);

    let key_style = Style::default().fg(app.colors.status_key_color).bold();
    let help_lines = vec![
        Line::from(vec![
            Span::styled("Space / t     ", key_style),
            Span::raw("Toggle the current answer"),
        ]),
        Line::from(vec![
            Span::styled("y / n         ", key_style),
            Span::raw("Answer yes / no"),
        ]),
        Line::from(vec![
            Span::styled("Right / l     ", key_style),
            Span::raw("Next criterion (last one finishes)"),
        ]),
        Line::from(vec![
            Span::styled("Left / h      ", key_style),
            Span::raw("Previous criterion"),
        ]),
        Line::from(vec![
            Span::styled("e             ", key_style),
            Span::raw("Edit the funder name"),
        ]),
        Line::from(vec![
            Span::styled("r             ", key_style),
            Span::raw("Start over (result screen)"),
        ]),
        Line::from(vec![
            Span::styled("?             ", key_style),
            Span::raw("Show/hide this help"),
        ]),
        Line::from(vec![
            Span::styled("q / Ctrl-c    ", key_style),
            Span::raw("Quit"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(app.colors.muted),
        )),
    ];

    frame.render_widget(Paragraph::new(help_lines), inner);
}
