//! Section renderers: header, editor, trigger, error, results, footer

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, Paragraph, Wrap},
    Frame,
};
use rollcall_core::SELECTION_THRESHOLD;

use crate::tui::animation::{pulse::SHUFFLE_ICON, pulse_style};
use crate::tui::app::App;

const TITLE: &str = "VR Experience Participant Selector";
const PLACEHOLDER: &str =
    "Enter student names (one per line) for VR experience participation";

/// Terminal width at which the result grid widens from 2 to 4 columns
const WIDE_GRID_MIN_WIDTH: u16 = 80;

/// Number of result columns for a given width
pub fn grid_columns(width: u16) -> usize {
    if width >= WIDE_GRID_MIN_WIDTH {
        4
    } else {
        2
    }
}

impl App {
    pub(super) fn render_header(&self, f: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let title = Paragraph::new(Line::from(vec![
            Span::styled("◖◗ ", Style::default().fg(theme.accent_color)),
            Span::styled(
                TITLE,
                Style::default()
                    .fg(theme.title_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_color))
                .style(Style::default().bg(theme.panel_bg_color)),
        );
        f.render_widget(title, area);
    }

    pub(super) fn render_editor(&mut self, f: &mut Frame, area: Rect) {
        let count = self.selector.candidates().len();
        let count_color = if count >= SELECTION_THRESHOLD {
            self.theme.success_color
        } else {
            self.theme.warning_color
        };
        let title = Line::from(vec![
            Span::styled(" Roster ", Style::default().fg(self.theme.title_color)),
            Span::styled(
                format!("({} names) ", count),
                Style::default().fg(count_color),
            ),
        ]);

        let focused = !self.selector.is_animating();
        self.input
            .render(f, area, &self.theme, title, PLACEHOLDER, focused);
    }

    pub(super) fn render_trigger(&self, f: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let animating = self.selector.is_animating();

        let label = if animating {
            format!("{} Launching VR...", self.spinner.glyph())
        } else {
            format!("{} Select {} VR Participants", SHUFFLE_ICON, SELECTION_THRESHOLD)
        };

        let style = if self.selector.can_select() {
            Style::default()
                .fg(theme.badge_fg_color)
                .bg(theme.accent_color)
                .add_modifier(Modifier::BOLD)
        } else if animating {
            Style::default()
                .fg(theme.animation_color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dim_color)
        };

        let width = (label.chars().count() as u16 + 6).min(area.width);
        let button_area = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y,
            width,
            height: area.height,
        };

        let button = Paragraph::new(Line::from(Span::styled(format!(" {} ", label), style)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border_color)),
            );
        f.render_widget(button, button_area);
    }

    pub(super) fn render_error(&self, f: &mut Frame, area: Rect) {
        let Some(error) = self.selector.error() else {
            return;
        };
        let theme = &self.theme;
        let banner = Paragraph::new(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(theme.error_color),
        )))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.error_color))
                .title(Span::styled(
                    " Error ",
                    Style::default()
                        .fg(theme.error_color)
                        .add_modifier(Modifier::BOLD),
                )),
        );
        f.render_widget(banner, area);
    }

    pub(super) fn render_results(&self, f: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let animating = self.selector.is_animating();
        let heading = if animating {
            "Initializing VR Headsets..."
        } else {
            "Selected VR Participants"
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_color))
            .title(Span::styled(
                format!(" {} ", heading),
                Style::default()
                    .fg(theme.title_color)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(theme.panel_bg_color));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let grid_area = match self.selector.progress() {
            Some(progress) => {
                let rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(1), Constraint::Min(0)])
                    .split(inner);
                let gauge = LineGauge::default()
                    .filled_style(Style::default().fg(theme.highlight_color))
                    .unfilled_style(Style::default().fg(theme.dim_color))
                    .ratio(progress);
                f.render_widget(gauge, rows[0]);
                rows[1]
            }
            None => inner,
        };

        let names = self.selector.visible();
        let cols = grid_columns(grid_area.width);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, cols as u32); cols])
            .split(grid_area);

        let name_style = pulse_style(theme, animating, self.selector.pulse());
        let badge_style = Style::default()
            .fg(theme.badge_fg_color)
            .bg(theme.badge_bg_color)
            .add_modifier(Modifier::BOLD);

        for (col, column_area) in columns.iter().enumerate() {
            let lines: Vec<Line> = names
                .iter()
                .enumerate()
                .skip(col)
                .step_by(cols)
                .map(|(idx, name)| {
                    Line::from(vec![
                        Span::styled(format!("{:>3} ", idx + 1), badge_style),
                        Span::raw(" "),
                        Span::styled(name.clone(), name_style),
                    ])
                })
                .collect();
            f.render_widget(Paragraph::new(lines), *column_area);
        }
    }

    pub(super) fn render_footer(&self, f: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let key = |k: &'static str| {
            Span::styled(
                k,
                Style::default()
                    .fg(theme.accent_color)
                    .add_modifier(Modifier::BOLD),
            )
        };
        let text = |t: &'static str| Span::styled(t, Style::default().fg(theme.dim_color));

        let footer = Paragraph::new(Line::from(vec![
            key("Ctrl+S"),
            text(": select  "),
            key("Ctrl+V"),
            text(": paste  "),
            key("Ctrl+U"),
            text(": clear  "),
            key("Ctrl+T"),
            Span::styled(
                format!(": theme ({})  ", theme.display_name),
                Style::default().fg(theme.dim_color),
            ),
            key("Esc"),
            text(": quit"),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(footer, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_columns() {
        assert_eq!(grid_columns(40), 2);
        assert_eq!(grid_columns(79), 2);
        assert_eq!(grid_columns(80), 4);
        assert_eq!(grid_columns(200), 4);
    }
}
