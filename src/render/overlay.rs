use std::time::{Duration, Instant};

/// How long a fired trigger message stays on screen.
pub const MESSAGE_SECS: f32 = 5.0;

#[derive(Debug)]
struct OverlayMessage {
    text: String,
    expires_at: Instant,
}

/// Presentation-side list of trigger messages with a fixed display
/// duration. The simulation core hands a message over exactly once; the
/// board owns its lifetime from there.
#[derive(Debug, Default)]
pub struct MessageBoard {
    entries: Vec<OverlayMessage>,
}

impl MessageBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: impl Into<String>) {
        self.push_at(text, Instant::now());
    }

    /// Currently visible messages, oldest first. Expired entries are
    /// dropped as a side effect.
    pub fn visible(&mut self) -> Vec<&str> {
        self.visible_at(Instant::now())
    }

    fn push_at(&mut self, text: impl Into<String>, now: Instant) {
        self.entries.push(OverlayMessage {
            text: text.into(),
            expires_at: now + Duration::from_secs_f32(MESSAGE_SECS),
        });
    }

    fn visible_at(&mut self, now: Instant) -> Vec<&str> {
        self.entries.retain(|m| m.expires_at > now);
        self.entries.iter().map(|m| m.text.as_str()).collect()
    }
}
