//! Delivery of [`LaneEvent`]s to the presentation layer.

use tokio::sync::mpsc;

use crate::LaneEvent;

/// Channel sender for presentation events.
pub type EventSender = mpsc::UnboundedSender<LaneEvent>;

/// Channel receiver for presentation events.
pub type EventReceiver = mpsc::UnboundedReceiver<LaneEvent>;

/// Sends lane events to an optional subscriber.
///
/// A lane without a display is legal: [`Notifier::none`] swallows every
/// event. Events are also dropped silently once the receiver is gone.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    sender: Option<EventSender>,
}

impl Notifier {
    /// A notifier that forwards to `sender`.
    pub fn new(sender: EventSender) -> Self {
        Self {
            sender: Some(sender),
        }
    }

    /// A notifier with no subscriber.
    pub fn none() -> Self {
        Self { sender: None }
    }

    /// Creates a notifier together with the receiving end of its channel.
    pub fn channel() -> (Self, EventReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    pub fn notify(&self, event: LaneEvent) {
        if let Some(sender) = &self.sender {
            if sender.send(event).is_err() {
                tracing::trace!("presentation receiver dropped, event discarded");
            }
        }
    }
}
