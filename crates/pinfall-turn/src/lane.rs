//! Lane actor: an isolated Tokio task that owns a turn orchestrator.
//!
//! The actor `select!`s between its command channel and the orchestrator's
//! next wait. A launch that arrives mid-throw is therefore seen (and
//! ignored) right away instead of queuing behind the throw.

use pinfall_lane::{Ball, Force, InputGate, Notifier, PinGroup};
use pinfall_scoring::{SessionId, ThrowOrdinal, ThrowOutcome};
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, oneshot};

use crate::{TurnConfig, TurnError, TurnOrchestrator, TurnState};

/// A snapshot of the lane: turn state plus the session's score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneInfo {
    pub state: TurnState,
    pub session_id: SessionId,
    /// 1-based index of the frame being bowled.
    pub frame: u32,
    /// Which throw of the frame is next.
    pub throw: ThrowOrdinal,
    /// Grand total of every throw in the session.
    pub total: u32,
    /// Completed frame scores, oldest first.
    pub frames: Vec<u8>,
    /// The scoreboard line, e.g. `10|7|5 = 22`.
    pub scoreline: String,
    pub input_enabled: bool,
    pub last_outcome: Option<ThrowOutcome>,
}

/// Commands sent to a lane actor through its channel.
pub(crate) enum LaneCommand {
    /// Launch the ball. The reply says whether the launch was accepted.
    Launch {
        force: Force,
        reply: oneshot::Sender<bool>,
    },

    /// Request a status snapshot.
    GetInfo { reply: oneshot::Sender<LaneInfo> },

    /// Abandon the current throw and start a new session.
    NewSession { reply: oneshot::Sender<SessionId> },

    /// Stop the actor.
    Shutdown,
}

/// Handle to a running lane actor.
///
/// Cheap to clone; every clone talks to the same lane.
#[derive(Clone)]
pub struct LaneHandle {
    sender: mpsc::Sender<LaneCommand>,
}

impl LaneHandle {
    /// Forwards a launch gesture to the lane.
    ///
    /// Returns `Ok(false)` when the lane ignored it (throw in progress or
    /// unusable force).
    pub async fn launch(&self, force: Force) -> Result<bool, TurnError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(LaneCommand::Launch {
                force,
                reply: reply_tx,
            })
            .await
            .map_err(|_| TurnError::Unavailable)?;
        reply_rx.await.map_err(|_| TurnError::Unavailable)
    }

    /// Requests the current lane snapshot.
    pub async fn info(&self) -> Result<LaneInfo, TurnError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(LaneCommand::GetInfo { reply: reply_tx })
            .await
            .map_err(|_| TurnError::Unavailable)?;
        reply_rx.await.map_err(|_| TurnError::Unavailable)
    }

    /// Starts a new scoring session and returns its ID.
    pub async fn new_session(&self) -> Result<SessionId, TurnError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(LaneCommand::NewSession { reply: reply_tx })
            .await
            .map_err(|_| TurnError::Unavailable)?;
        reply_rx.await.map_err(|_| TurnError::Unavailable)
    }

    /// Tells the lane to shut down.
    pub async fn shutdown(&self) -> Result<(), TurnError> {
        self.sender
            .send(LaneCommand::Shutdown)
            .await
            .map_err(|_| TurnError::Unavailable)
    }

    /// Returns `true` once the actor has stopped.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

/// The internal lane actor state. Runs inside a Tokio task.
struct LaneActor<B, P, I> {
    orchestrator: TurnOrchestrator<B, P, I>,
    receiver: mpsc::Receiver<LaneCommand>,
}

impl<B: Ball, P: PinGroup, I: InputGate> LaneActor<B, P, I> {
    /// Runs the actor loop until shutdown or until every handle is dropped.
    async fn run(mut self) {
        tracing::info!(
            session = %self.orchestrator.scorer().session().id(),
            "lane actor started"
        );

        loop {
            tokio::select! {
                cmd = self.receiver.recv() => {
                    let Some(cmd) = cmd else { break };
                    match cmd {
                        LaneCommand::Launch { force, reply } => {
                            let accepted = self.orchestrator.request_launch(force);
                            let _ = reply.send(accepted);
                        }
                        LaneCommand::GetInfo { reply } => {
                            let _ = reply.send(self.orchestrator.info());
                        }
                        LaneCommand::NewSession { reply } => {
                            let _ = reply.send(self.orchestrator.new_session());
                        }
                        LaneCommand::Shutdown => {
                            tracing::info!("lane shutting down");
                            break;
                        }
                    }
                }
                state = self.orchestrator.step() => {
                    tracing::trace!(%state, "turn advanced");
                }
            }
        }

        tracing::info!("lane actor stopped");
    }
}

/// Spawns a lane actor task and returns a handle to communicate with it.
///
/// The command channel is bounded at `config.channel_size`.
pub fn spawn_lane<B: Ball, P: PinGroup, I: InputGate>(
    config: TurnConfig,
    ball: B,
    pins: P,
    input: I,
    notifier: Notifier,
) -> LaneHandle {
    let orchestrator = TurnOrchestrator::new(config, ball, pins, input, notifier);
    let (tx, rx) = mpsc::channel(orchestrator.config().channel_size);

    let actor = LaneActor {
        orchestrator,
        receiver: rx,
    };
    tokio::spawn(actor.run());

    LaneHandle { sender: tx }
}
