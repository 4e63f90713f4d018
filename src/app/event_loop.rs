use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::DefaultTerminal;

use crate::app::effects::completion_message;
use crate::app::{App, Message, Model, update};
use crate::remote::SyncWorker;

/// Longest time the loop sleeps waiting for input.
const IDLE_POLL: Duration = Duration::from_millis(250);
/// Poll interval while a remote call is outstanding.
const BUSY_POLL: Duration = Duration::from_millis(25);

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization, drawing, or reading
    /// terminal events fails.
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal - paramedit requires an interactive terminal")?;

        let mut model = self.initial_model();
        // Owned by this session; dropping it abandons requests still in flight.
        let worker = SyncWorker::new();
        if self.fetch_on_start {
            Self::dispatch(&mut model, &worker, Message::FetchRequested);
        }

        let result = Self::event_loop(&mut terminal, &mut model, &worker);

        ratatui::restore();
        tracing::debug!(
            pending_fetches = model.pending_fetches,
            pending_saves = model.pending_saves,
            "session closed"
        );
        result
    }

    fn dispatch(model: &mut Model, worker: &SyncWorker, msg: Message) {
        tracing::trace!(?msg, "message");
        let side_msg = msg.clone();
        *model = update(std::mem::take(model), msg);
        Self::handle_message_side_effects(model, worker, &side_msg);
    }

    fn poll_timeout(model: &Model, now: Instant) -> Duration {
        let base = if model.pending_fetches + model.pending_saves > 0 {
            BUSY_POLL
        } else {
            IDLE_POLL
        };
        model
            .status_deadline()
            .map_or(base, |deadline| base.min(deadline.saturating_duration_since(now)))
    }

    fn event_loop(
        terminal: &mut DefaultTerminal,
        model: &mut Model,
        worker: &SyncWorker,
    ) -> Result<()> {
        let mut needs_render = true;

        loop {
            if model.expire_status(Instant::now()) {
                needs_render = true;
            }

            while let Some(event) = worker.try_next() {
                Self::dispatch(model, worker, completion_message(event));
                needs_render = true;
            }

            if needs_render {
                terminal.draw(|frame| Self::view(model, frame))?;
                needs_render = false;
            }

            if model.should_quit {
                break;
            }

            if event::poll(Self::poll_timeout(model, Instant::now()))? {
                // Coalesce key repeat bursts into a single render.
                loop {
                    if let Some(msg) = Self::handle_event(&event::read()?, model) {
                        Self::dispatch(model, worker, msg);
                    }
                    needs_render = true;
                    if !event::poll(Duration::ZERO)? {
                        break;
                    }
                }
            }
        }
        Ok(())
    }
}
