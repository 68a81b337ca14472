//! TUI runtime: owns the terminal, runs the event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here. The
//! reducer stays pure and produces effects; this module executes them.
//!
//! Async results flow through an inbox channel: handlers send `UiEvent`s to
//! `inbox_tx`, and the runtime drains `inbox_rx` each frame. The runtime also
//! holds the one subscription to the provider's session-change stream for its
//! whole lifetime; dropping the runtime drops the handle, which cancels
//! delivery.

mod handlers;

use std::future::Future;
use std::io::Stdout;
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use schoolhub_core::identity::{IdentityClient, SessionSignal, SessionSubscription};
use tokio::sync::mpsc;

use crate::common::{TaskCompleted, TaskId, TaskKind, TaskStarted};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Frame cadence while something is animating (spinner, in-flight call).
const FRAME_DURATION: std::time::Duration = std::time::Duration::from_millis(80);

/// Poll duration when idle; longer timeout reduces CPU usage.
const IDLE_POLL_DURATION: std::time::Duration = std::time::Duration::from_millis(250);

type UiEventSender = mpsc::UnboundedSender<UiEvent>;
type UiEventReceiver = mpsc::UnboundedReceiver<UiEvent>;

/// Full-screen TUI runtime.
///
/// Terminal state is guaranteed to be restored on drop, panic, or Ctrl+C.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    client: Arc<dyn IdentityClient>,
    /// The one session-change subscription for this UI's lifetime.
    subscription: SessionSubscription,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    last_tick: std::time::Instant,
}

impl TuiRuntime {
    pub fn new(client: Arc<dyn IdentityClient>) -> Result<Self> {
        // Panic hook goes in BEFORE entering the alternate screen.
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let subscription = client.subscribe();
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state: AppState::new(),
            client,
            subscription,
            inbox_tx,
            inbox_rx,
            last_tick: std::time::Instant::now(),
        })
    }

    /// Runs the main event loop until quit.
    pub fn run(&mut self) -> Result<()> {
        let effects = update::activation_effects(&mut self.state);
        self.execute_effects(effects);

        let mut dirty = true;
        while !self.state.tui.should_quit {
            let events = self.collect_events()?;

            for event in events {
                // Only Tick triggers a render; other events batch up to the
                // next tick.
                if matches!(&event, UiEvent::Tick) {
                    dirty = true;
                }
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    /// Collects events from all sources: session stream, inbox, terminal.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Session transitions are delivered in provider-emission order.
        while let Some(signal) = self.subscription.try_next() {
            events.push(match signal {
                SessionSignal::Changed(user) => UiEvent::SessionChanged(user),
                SessionSignal::Lagged => UiEvent::SessionStreamLagged,
            });
        }

        // Async handler results.
        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        let animating = self.state.tui.tasks.is_any_running() || self.state.tui.nav.loading;
        let tick_interval = if animating {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        // Block until the next tick is due unless events are already waiting.
        let time_until_tick = tick_interval.saturating_sub(self.last_tick.elapsed());
        let poll_duration = if events.is_empty() {
            time_until_tick
        } else {
            std::time::Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(std::time::Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = std::time::Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async provider call with the TaskStarted/TaskCompleted
    /// lifecycle, so the reducer can reject completions that lost the race.
    fn spawn_task<F, Fut>(&self, kind: TaskKind, id: TaskId, f: F)
    where
        F: FnOnce(Arc<dyn IdentityClient>) -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        let client = Arc::clone(&self.client);
        let _ = tx.send(UiEvent::TaskStarted {
            kind,
            started: TaskStarted { id },
        });
        tokio::spawn(async move {
            let inner = f(client).await;
            let _ = tx.send(UiEvent::TaskCompleted {
                kind,
                completed: TaskCompleted {
                    id,
                    result: Box::new(inner),
                },
            });
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.tui.should_quit = true;
            }
            UiEffect::FetchSession { task } => {
                self.spawn_task(TaskKind::SessionFetch, task, handlers::fetch_session);
            }
            UiEffect::RequestCode { task, email } => {
                self.spawn_task(TaskKind::RequestCode, task, move |client| {
                    handlers::request_code(client, email)
                });
            }
            UiEffect::VerifyCode { task, email, code } => {
                self.spawn_task(TaskKind::VerifyCode, task, move |client| {
                    handlers::verify_code(client, email, code)
                });
            }
            UiEffect::SignOut { task } => {
                self.spawn_task(TaskKind::SignOut, task, handlers::sign_out);
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
