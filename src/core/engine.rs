use crate::core::game::{Context, Game};
use anyhow::{Context as _, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use ratatui::DefaultTerminal;
use std::ops::ControlFlow;
use tracing::{debug, info};

pub struct Engine<G: Game> {
    game: G,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    /// Drive the game until the player quits or the input stream closes.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<G> {
        let (action_tx, mut action_rx) = tokio::sync::mpsc::unbounded_channel::<G::Action>();
        let ctx = Context::new(action_tx);
        let mut events = EventStream::new();

        info!("engine loop started");
        loop {
            terminal
                .draw(|f| self.game.render(f))
                .context("failed to draw frame")?;

            tokio::select! {
                // Actions first, so a burst of key presses is applied in order
                // before the next input is read.
                biased;

                Some(action) = action_rx.recv() => {
                    self.game.apply(action);
                }

                maybe_event = events.next() => match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if let ControlFlow::Break(()) = self.game.handle_key(key, &ctx) {
                            break;
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e).context("failed to read terminal event"),
                    None => {
                        debug!("input stream closed");
                        break;
                    }
                },
            }
        }

        // Drain anything queued right before quitting.
        while let Ok(action) = action_rx.try_recv() {
            self.game.apply(action);
        }
        info!("engine loop finished");
        Ok(self.game)
    }
}
