//! Rendering boundary between the session and a front end.
//!
//! The session only ever emits instructions through [`Renderer`]; it never
//! reads anything back. [`ChannelRenderer`] turns those instructions into
//! [`RenderEvent`]s on a channel for front ends that prefer to consume
//! messages on their own task.

use tokio::sync::mpsc;

/// Who a transcript entry is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderRole {
    User,
    Bot,
}

/// Passive presentation surface driven by the session.
pub trait Renderer: Send + Sync {
    /// Append a transcript entry. With `as_markup` false the text must be
    /// shown literally.
    fn render_turn(&self, text: &str, role: RenderRole, as_markup: bool);

    /// Show or hide the typing/pending indicator.
    fn set_pending_indicator(&self, visible: bool);

    /// Remove transcript entries, optionally keeping the welcome entry.
    fn reset_transcript(&self, keep_welcome: bool);

    /// Show or hide the suggestion prompts.
    fn set_suggestions_visible(&self, visible: bool);
}

/// One rendering instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    Turn {
        text: String,
        role: RenderRole,
        as_markup: bool,
    },
    Pending(bool),
    ResetTranscript { keep_welcome: bool },
    Suggestions(bool),
}

/// [`Renderer`] that forwards every call as a [`RenderEvent`].
///
/// Sends are fire-and-forget: once the receiver is dropped, events are
/// silently discarded.
#[derive(Debug, Clone)]
pub struct ChannelRenderer {
    tx: mpsc::UnboundedSender<RenderEvent>,
}

impl ChannelRenderer {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<RenderEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn send(&self, event: RenderEvent) {
        let _ = self.tx.send(event);
    }
}

impl Renderer for ChannelRenderer {
    fn render_turn(&self, text: &str, role: RenderRole, as_markup: bool) {
        self.send(RenderEvent::Turn {
            text: text.to_string(),
            role,
            as_markup,
        });
    }

    fn set_pending_indicator(&self, visible: bool) {
        self.send(RenderEvent::Pending(visible));
    }

    fn reset_transcript(&self, keep_welcome: bool) {
        self.send(RenderEvent::ResetTranscript { keep_welcome });
    }

    fn set_suggestions_visible(&self, visible: bool) {
        self.send(RenderEvent::Suggestions(visible));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn forwards_calls_in_order() {
        let (renderer, mut rx) = ChannelRenderer::new();

        renderer.render_turn("hi", RenderRole::User, false);
        renderer.set_pending_indicator(true);
        renderer.reset_transcript(true);
        renderer.set_suggestions_visible(true);

        assert_eq!(
            rx.recv().await.unwrap(),
            RenderEvent::Turn {
                text: "hi".into(),
                role: RenderRole::User,
                as_markup: false,
            }
        );
        assert_eq!(rx.recv().await.unwrap(), RenderEvent::Pending(true));
        assert_eq!(
            rx.recv().await.unwrap(),
            RenderEvent::ResetTranscript { keep_welcome: true }
        );
        assert_eq!(rx.recv().await.unwrap(), RenderEvent::Suggestions(true));
    }

    #[test]
    fn closed_receiver_is_ignored() {
        let (renderer, rx) = ChannelRenderer::new();
        drop(rx);
        renderer.render_turn("lost", RenderRole::Bot, true);
        renderer.set_pending_indicator(false);
    }
}
