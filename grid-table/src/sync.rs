use crate::ScrollPosition;

/// A scroll position reported by the body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BodyScroll {
    pub position: ScrollPosition,
    pub now_ms: u64,
}

/// An instruction for the header region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeaderCommand {
    /// Set the header's horizontal scroll offset.
    ScrollTo(u64),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SyncState {
    #[default]
    Idle,
    Scrolling {
        last_event_ms: u64,
    },
}

/// Keeps the header's horizontal offset in step with the body.
///
/// The body reports scroll events; the coordinator answers with the command the header has to
/// apply. Vertical-only scrolls produce no command and leave the state alone. The coordinator returns to `Idle` once
/// `reset_delay_ms` elapsed without events, or on [`Self::finish`].
#[derive(Clone, Debug)]
pub struct ScrollSync {
    state: SyncState,
    scroll_left: u64,
    reset_delay_ms: u64,
}

impl Default for ScrollSync {
    fn default() -> Self {
        Self::new(150)
    }
}

impl ScrollSync {
    pub fn new(reset_delay_ms: u64) -> Self {
        Self {
            state: SyncState::Idle,
            scroll_left: 0,
            reset_delay_ms,
        }
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    pub fn is_scrolling(&self) -> bool {
        matches!(self.state, SyncState::Scrolling { .. })
    }

    /// The horizontal offset last forwarded to the header.
    pub fn scroll_left(&self) -> u64 {
        self.scroll_left
    }

    pub fn set_reset_delay_ms(&mut self, reset_delay_ms: u64) {
        self.reset_delay_ms = reset_delay_ms;
    }

    /// A user scroll of the body. Only horizontal movement enters (or extends) `Scrolling`.
    pub fn on_body_scroll(&mut self, event: BodyScroll) -> Option<HeaderCommand> {
        let command = self.forward(event.position.left)?;
        self.state = SyncState::Scrolling {
            last_event_ms: event.now_ms,
        };
        Some(command)
    }

    /// Programmatic horizontal scroll; forwards the offset without entering `Scrolling`.
    pub fn scroll_to_left(&mut self, left: u64) -> Option<HeaderCommand> {
        self.forward(left)
    }

    fn forward(&mut self, left: u64) -> Option<HeaderCommand> {
        if left == self.scroll_left {
            return None;
        }
        gtrace!(from = self.scroll_left, to = left, "header scroll sync");
        self.scroll_left = left;
        Some(HeaderCommand::ScrollTo(left))
    }

    pub fn tick(&mut self, now_ms: u64) {
        if let SyncState::Scrolling { last_event_ms } = self.state {
            if now_ms.saturating_sub(last_event_ms) >= self.reset_delay_ms {
                self.state = SyncState::Idle;
            }
        }
    }

    /// Native scroll-end notification.
    pub fn finish(&mut self) {
        self.state = SyncState::Idle;
    }

    /// Forgets the last forwarded offset, e.g. after the header was remounted at 0.
    pub fn reset(&mut self) {
        self.state = SyncState::Idle;
        self.scroll_left = 0;
    }
}
