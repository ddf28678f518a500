//! Single-writer session actor.
//!
//! [`SessionWorker`] owns the [`Game`] and is the only code that mutates it. Player commands
//! arrive over an mpsc channel and enemy ticks come from an interval timer. Each select
//! branch applies one command or one tick to completion before the loop polls again, so the
//! two trigger sources never interleave.

use std::time::Duration;

use delve_core::{Command, Game, GameView, TickReport, TurnReport};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

const COMMAND_QUEUE_DEPTH: usize = 32;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session worker command channel closed")]
    Closed,

    #[error("session worker reply channel closed")]
    ReplyDropped(#[source] oneshot::error::RecvError),
}

pub type Result<T> = std::result::Result<T, SessionError>;

enum SessionCommand {
    Apply { command: Command, reply: oneshot::Sender<TurnReport> },
    AdvanceEnemies { reply: oneshot::Sender<TickReport> },
    Snapshot { reply: oneshot::Sender<GameView> },
    Shutdown,
}

/// Cloneable façade over the worker's command channel and view feed.
#[derive(Clone)]
pub struct SessionHandle {
    command_tx: mpsc::Sender<SessionCommand>,
    view_rx: watch::Receiver<GameView>,
}

impl SessionHandle {
    /// Applies one player command and waits for its report.
    pub async fn send(&self, command: Command) -> Result<TurnReport> {
        self.request(|reply| SessionCommand::Apply { command, reply }).await
    }

    /// Runs one enemy tick immediately, outside the timer cadence.
    pub async fn advance_enemies(&self) -> Result<TickReport> {
        self.request(|reply| SessionCommand::AdvanceEnemies { reply }).await
    }

    pub async fn snapshot(&self) -> Result<GameView> {
        self.request(|reply| SessionCommand::Snapshot { reply }).await
    }

    /// Receiver that sees a fresh view after every state-mutating operation.
    pub fn subscribe(&self) -> watch::Receiver<GameView> {
        self.view_rx.clone()
    }

    pub async fn shutdown(&self) -> Result<()> {
        self.command_tx.send(SessionCommand::Shutdown).await.map_err(|_| SessionError::Closed)
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> SessionCommand,
    ) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.command_tx.send(build(reply_tx)).await.map_err(|_| SessionError::Closed)?;
        reply_rx.await.map_err(SessionError::ReplyDropped)
    }
}

pub struct SessionWorker {
    game: Game,
    command_rx: mpsc::Receiver<SessionCommand>,
    view_tx: watch::Sender<GameView>,
    tick_every: Duration,
}

impl SessionWorker {
    /// Spawns the worker on the current runtime. The join handle yields the final game.
    pub fn spawn(game: Game, tick_every: Duration) -> (SessionHandle, JoinHandle<Game>) {
        let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE_DEPTH);
        let (view_tx, view_rx) = watch::channel(game.view());
        let worker = Self { game, command_rx, view_tx, tick_every };
        let join = tokio::spawn(worker.run());
        (SessionHandle { command_tx, view_rx }, join)
    }

    pub async fn run(mut self) -> Game {
        info!(
            seed = self.game.seed(),
            tick_ms = self.tick_every.as_millis() as u64,
            enemies = self.game.enemy_count(),
            "session worker started"
        );

        // First enemy step lands one full period after start.
        let mut ticker = time::interval_at(Instant::now() + self.tick_every, self.tick_every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                command = self.command_rx.recv() => match command {
                    Some(SessionCommand::Shutdown) | None => break,
                    Some(command) => self.handle_command(command),
                },
                _ = ticker.tick() => {
                    self.advance_enemies();
                }
            }
        }

        info!(
            tick = self.game.tick(),
            hash = format_args!("0x{:016x}", self.game.snapshot_hash()),
            "session worker stopped"
        );
        self.game
    }

    fn handle_command(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::Apply { command, reply } => {
                let report = self.game.apply(command);
                if report.mutated() {
                    self.publish();
                }
                if reply.send(report).is_err() {
                    debug!("Apply reply channel closed (caller dropped)");
                }
            }
            SessionCommand::AdvanceEnemies { reply } => {
                let report = self.advance_enemies();
                if reply.send(report).is_err() {
                    debug!("AdvanceEnemies reply channel closed (caller dropped)");
                }
            }
            SessionCommand::Snapshot { reply } => {
                if reply.send(self.game.view()).is_err() {
                    debug!("Snapshot reply channel closed (caller dropped)");
                }
            }
            SessionCommand::Shutdown => {}
        }
    }

    fn advance_enemies(&mut self) -> TickReport {
        let report = self.game.advance_enemies();
        self.publish();
        report
    }

    fn publish(&self) {
        self.view_tx.send_replace(self.game.view());
    }
}
