/// Transient status messages, ordered by creation.
///
/// The queue itself knows nothing about timers; the caller removes entries
/// by id once their lifetime elapses.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Level {
    Info,
    Success,
    Error,
}

impl Level {
    pub fn css_class(self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Success => "success",
            Level::Error => "error",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub level: Level,
}

#[derive(Default, Debug)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    last_id: u64,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notification. The id is the creation timestamp in ms,
    /// bumped when two arrive in the same millisecond so each stays
    /// individually removable.
    pub fn push(&mut self, now_ms: u64, message: impl Into<String>, level: Level) -> u64 {
        let id = now_ms.max(self.last_id + 1);
        self.last_id = id;
        self.items.push(Notification {
            id,
            message: message.into(),
            level,
        });
        id
    }

    pub fn remove(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
