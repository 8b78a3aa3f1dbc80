/// Mystery number renderer - draws the game card and any open popup
use crate::core::renderer::GameRenderer;
use crate::games::mystery::game::{feedback_message, MysteryGame, Popup};
use crate::games::mystery::state::Feedback;
use rand::Rng;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const CARD_WIDTH: u16 = 56;
const CARD_HEIGHT: u16 = 19;

pub struct MysteryRenderer;

impl<R: Rng> GameRenderer<MysteryGame<R>> for MysteryRenderer {
    fn render(&self, game: &MysteryGame<R>, frame: &mut Frame) {
        let card = centered_rect(CARD_WIDTH, CARD_HEIGHT, frame.area());
        let state = game.state();
        let over = state.is_over();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Mystery Number Game ")
            .title_alignment(Alignment::Center);
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let [instructions, input, status, feedback, restart, reveal, footer] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new("Guess the number between 1 and 100.").alignment(Alignment::Center),
            instructions,
        );

        let input_style = if over {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        let input_text = if state.pending_guess().is_empty() && !over {
            "Enter your guess".to_string()
        } else {
            state.pending_guess().to_string()
        };
        frame.render_widget(
            Paragraph::new(input_text).style(input_style).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(if over { " Guess (locked) " } else { " Guess [Enter] " }),
            ),
            input,
        );

        let [attempts, hint] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(12)]).areas(status);
        frame.render_widget(
            Paragraph::new(format!("Attempts: {}", state.attempts()))
                .style(Style::default().add_modifier(Modifier::BOLD)),
            attempts,
        );
        if !over {
            frame.render_widget(
                Paragraph::new("[Tab] Hint").alignment(Alignment::Right),
                hint,
            );
        }

        if let Some(text) = feedback_message(state.last_feedback()) {
            let color = match state.last_feedback() {
                Feedback::TooLow => Color::Blue,
                Feedback::TooHigh => Color::Red,
                _ => Color::Green,
            };
            frame.render_widget(
                Paragraph::new(text)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true })
                    .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color))),
                feedback,
            );
        }

        frame.render_widget(
            Paragraph::new("[Ctrl-R] Restart Game  [Esc] Quit").alignment(Alignment::Center),
            restart,
        );

        if over {
            frame.render_widget(
                Paragraph::new(format!("The number was: {}", state.target()))
                    .alignment(Alignment::Center)
                    .style(Style::default().add_modifier(Modifier::BOLD)),
                reveal,
            );
        }

        frame.render_widget(
            Paragraph::new("Good luck - try to beat your previous best!")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray)),
            footer,
        );

        if let Some(popup) = game.popup() {
            render_popup(frame, popup, card);
        }
    }
}

fn render_popup(frame: &mut Frame, popup: Popup, over: Rect) {
    let area = centered_rect(44, 6, over);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(format!("{}\n\n[Enter] OK", popup.message()))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", popup.title()))
                    .title_alignment(Alignment::Center),
            ),
        area,
    );
}

/// `width` x `height` rectangle centered in `area`, shrunk to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [_, row, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(area.height)),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, cell, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width.min(area.width)),
        Constraint::Fill(1),
    ])
    .areas(row);
    cell
}
