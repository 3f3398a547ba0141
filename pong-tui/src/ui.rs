//! Drawing: maps the unit-square game state onto terminal cells.
//!
//! The layout math lives in pure helpers so the event loop can run the same
//! mapping in reverse, turning a mouse row back into a field fraction.

use pong_core::config::GameConfig;
use pong_core::game::GameManager;
use pong_core::paddle::Paddle;
use pong_core::types::Side;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

/// The bordered field area: everything except the help line at the bottom.
pub fn field_rect(area: Rect) -> Rect {
    let layout = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).split(area);
    layout[0]
}

/// Field-height fraction of a terminal `row`, or `None` when the row falls
/// outside the playable area.
pub fn row_fraction(area: Rect, row: u16) -> Option<f64> {
    let inner = field_rect(area).inner(Margin::new(1, 1));
    if inner.height == 0 || row < inner.y || row >= inner.y + inner.height {
        return None;
    }
    Some((row - inner.y) as f64 / inner.height as f64)
}

pub fn draw(frame: &mut Frame, game: &GameManager) {
    let area = frame.area();
    let field = field_rect(area);

    let border = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .style(Style::default().fg(Color::Cyan));
    frame.render_widget(border, field);

    let inner = field.inner(Margin::new(1, 1));
    if inner.width < 4 || inner.height < 4 {
        return;
    }
    // Wipe the previous frame's cells so old ball and paddle positions do
    // not linger in the double buffer
    frame.render_widget(Clear, inner);

    let config = game.config();
    draw_paddle(frame, inner, game.player(), config);
    draw_paddle(frame, inner, game.computer(), config);
    draw_ball(frame, inner, game);
    draw_scores(frame, inner, game);

    if let Some(text) = game.status_text() {
        draw_status_overlay(frame, inner, text);
    }

    let help = Paragraph::new("mouse: aim | click/space: start/pause | q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    let help_area = Rect::new(area.x, area.y + area.height.saturating_sub(1), area.width, 1);
    frame.render_widget(help, help_area);
}

fn draw_paddle(frame: &mut Frame, inner: Rect, paddle: &Paddle, config: &GameConfig) {
    let width = ((config.paddle_thickness * inner.width as f64).round() as u16).max(1);
    let height = ((config.paddle_size * inner.height as f64).round() as u16).max(1);

    let x = match paddle.side {
        Side::Player => inner.x,
        Side::Computer => inner.x + inner.width - width,
    };
    let top = (paddle.top(config) * inner.height as f64).round() as u16;
    let y = (inner.y + top).min(inner.y + inner.height - height);

    let bar = Block::default().style(Style::default().bg(Color::White));
    frame.render_widget(bar, Rect::new(x, y, width, height));
}

fn draw_ball(frame: &mut Frame, inner: Rect, game: &GameManager) {
    let pos = game.ball().pos;
    let col = ((pos.x * (inner.width - 2) as f64).round() as u16).min(inner.width - 2);
    let row = ((pos.y * (inner.height - 1) as f64).round() as u16).min(inner.height - 1);

    let ball = Paragraph::new("██").style(Style::default().fg(Color::Yellow));
    frame.render_widget(ball, Rect::new(inner.x + col, inner.y + row, 2, 1));
}

fn draw_scores(frame: &mut Frame, inner: Rect, game: &GameManager) {
    let player = game.player();
    let left = Paragraph::new(format!("{} {}", player.side.label(), player.score))
        .style(Style::default().fg(Color::Green));
    let left_area = Rect::new(inner.x + 2, inner.y, 16, 1).intersection(inner);
    frame.render_widget(left, left_area);

    let computer = game.computer();
    let right_text = format!("{} {}", computer.score, computer.side.label());
    let right = Paragraph::new(right_text)
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Right);
    let right_area =
        Rect::new(inner.x + inner.width.saturating_sub(18), inner.y, 16, 1).intersection(inner);
    frame.render_widget(right, right_area);
}

fn draw_status_overlay(frame: &mut Frame, inner: Rect, text: &str) {
    let width = (text.len() as u16 + 6).min(inner.width);
    let popup = Rect::new(
        inner.x + (inner.width - width) / 2,
        inner.y + inner.height / 2 - 1,
        width,
        3,
    );

    frame.render_widget(Clear, popup);
    let message = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Thick),
        )
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(message, popup);
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_leaves_a_help_line() {
        let area = Rect::new(0, 0, 80, 24);
        let field = field_rect(area);
        assert_eq!(field.height, 23);
        assert_eq!(field.width, 80);
    }

    #[test]
    fn test_row_fraction_spans_the_inner_field() {
        let area = Rect::new(0, 0, 80, 24);

        // Field rows 1..=21 are inside the border
        assert_eq!(row_fraction(area, 0), None, "border row is not playable");
        assert_eq!(row_fraction(area, 1), Some(0.0));
        assert_eq!(row_fraction(area, 22), None, "bottom border is not playable");

        let mid = row_fraction(area, 11).unwrap();
        assert!((0.0..1.0).contains(&mid));
    }
}
