//! The throw scorer: frame bookkeeping and score notifications.

use pinfall_lane::{LaneEvent, Notifier, PINS_PER_RACK};
use tracing::{debug, info};

use crate::{Frame, ScoreLedger, ScoringError, Session, ThrowOrdinal, ThrowOutcome};

/// Records throws into the current frame and the session ledger.
///
/// Every successful [`record_throw`](Self::record_throw) emits a
/// `ResultMessage` and a `ScoreChanged` event; a throw that ends the frame
/// also emits `FrameComplete`. Changes to the frame index or throw ordinal
/// emit `FrameChanged`.
#[derive(Debug)]
pub struct ThrowScorer {
    session: Session,
    frame: Frame,
    notifier: Notifier,
}

impl ThrowScorer {
    /// Creates a scorer on a brand new session (frame 1, total 0).
    pub fn new(notifier: Notifier) -> Self {
        Self::with_session(Session::new(), notifier)
    }

    /// Creates a scorer that continues an existing session.
    ///
    /// The next frame index follows the session's completed frames.
    pub fn with_session(session: Session, notifier: Notifier) -> Self {
        let next_index = session.ledger().len() as u32 + 1;
        Self {
            session,
            frame: Frame::new(next_index),
            notifier,
        }
    }

    /// Records one throw of `pins_down` pins.
    ///
    /// Rejects pin counts above 10 and throws into a frame that is already
    /// complete. A rejected call changes nothing and emits nothing.
    pub fn record_throw(&mut self, pins_down: u8) -> Result<ThrowOutcome, ScoringError> {
        if pins_down > PINS_PER_RACK {
            return Err(ScoringError::PinCountOutOfRange(pins_down));
        }
        if self.frame.complete {
            return Err(ScoringError::FrameComplete {
                frame: self.frame.index,
            });
        }

        self.session.ledger_mut().add_pins(pins_down);

        let outcome = match self.frame.ordinal {
            ThrowOrdinal::First => {
                self.frame.first = Some(pins_down);
                self.frame.score = pins_down;
                if pins_down == PINS_PER_RACK {
                    self.frame.complete = true;
                    ThrowOutcome::Strike
                } else {
                    self.frame.ordinal = ThrowOrdinal::Second;
                    ThrowOutcome::Partial(pins_down)
                }
            }
            ThrowOrdinal::Second => {
                let first = self.frame.first.unwrap_or(0);
                let score = first + pins_down;
                self.frame.second = Some(pins_down);
                self.frame.score = score;
                self.frame.complete = true;
                if score == PINS_PER_RACK {
                    ThrowOutcome::Spare
                } else {
                    ThrowOutcome::Open(score)
                }
            }
        };

        debug!(
            frame = self.frame.index,
            pins = pins_down,
            ?outcome,
            total = self.total(),
            "throw recorded"
        );

        self.notifier.notify(LaneEvent::ResultMessage {
            message: outcome.message(),
        });
        self.notifier.notify(LaneEvent::ScoreChanged {
            total: self.total(),
        });

        if self.frame.complete {
            let score = self.frame.score;
            self.session.ledger_mut().push_frame(score);
            info!(
                session = %self.session.id(),
                frame = self.frame.index,
                score,
                total = self.total(),
                "frame complete"
            );
            self.notifier.notify(LaneEvent::FrameComplete {
                frame: self.frame.index,
                score,
            });
        } else {
            self.notify_frame_changed();
        }

        Ok(outcome)
    }

    /// Moves on to the next frame.
    ///
    /// Only valid once the current frame is complete. The ledger and the
    /// grand total are left as they are.
    pub fn advance_frame(&mut self) -> Result<(), ScoringError> {
        if !self.frame.complete {
            return Err(ScoringError::FrameIncomplete {
                frame: self.frame.index,
            });
        }
        self.frame = Frame::new(self.frame.index + 1);
        debug!(frame = self.frame.index, "advanced to next frame");
        self.notify_frame_changed();
        Ok(())
    }

    /// Replaces the session with a fresh one and restarts at frame 1.
    pub fn new_session(&mut self) -> &Session {
        self.session = Session::new();
        self.frame = Frame::new(1);
        info!(session = %self.session.id(), "new scoring session");
        self.notifier.notify(LaneEvent::ScoreChanged { total: 0 });
        self.notify_frame_changed();
        &self.session
    }

    pub fn is_frame_complete(&self) -> bool {
        self.frame.complete
    }

    pub fn current_frame_index(&self) -> u32 {
        self.frame.index
    }

    pub fn current_throw_ordinal(&self) -> ThrowOrdinal {
        self.frame.ordinal
    }

    /// Grand total of every throw in the session.
    pub fn total(&self) -> u32 {
        self.session.ledger().total()
    }

    pub fn ledger(&self) -> &ScoreLedger {
        self.session.ledger()
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Renders the ledger as `s1|s2|...|sk = total`.
    ///
    /// An open frame with a nonzero provisional score is shown as a
    /// trailing entry. Nothing to show renders as `Score: 0`.
    pub fn formatted_scoreline(&self) -> String {
        let mut parts: Vec<String> = self
            .ledger()
            .frames()
            .iter()
            .map(|score| score.to_string())
            .collect();
        if !self.frame.complete && self.frame.score > 0 {
            parts.push(self.frame.score.to_string());
        }

        if parts.is_empty() {
            format!("Score: {}", self.total())
        } else {
            format!("{} = {}", parts.join("|"), self.total())
        }
    }

    fn notify_frame_changed(&self) {
        self.notifier.notify(LaneEvent::FrameChanged {
            frame: self.frame.index,
            throw: self.frame.ordinal.as_number(),
        });
    }
}
