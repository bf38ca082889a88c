use inertia_core::models::{MonthEntry, MonthEvent};

/// First phase of a log entry: the base event is known, the doubt suffix and
/// resulting progress are not yet.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PendingEntry {
    month: u32,
    event: MonthEvent,
}

impl PendingEntry {
    pub(crate) fn new(month: u32, event: MonthEvent) -> Self {
        Self { month, event }
    }

    /// Freeze the entry. Nothing touches it after this.
    pub(crate) fn finalize(self, post_action_doubt: bool, progress: i32) -> MonthEntry {
        MonthEntry {
            month: self.month,
            event: self.event,
            post_action_doubt,
            progress,
        }
    }
}
