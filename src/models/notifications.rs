use serde::{Deserialize, Serialize};

/// Which client notifications an external notifier has already sent.
/// Flags only ever go from false to true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsSent {
    #[serde(default)]
    pub confirmation: bool,
    #[serde(default, rename = "reminder24h")]
    pub reminder_24h: bool,
    #[serde(default, rename = "reminder2h")]
    pub reminder_2h: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    Confirmation,
    Reminder24h,
    Reminder2h,
}

impl NotificationsSent {
    /// Sets the flag for `kind`. Returns true if it was previously unset.
    pub fn mark(&mut self, kind: Notification) -> bool {
        let flag = match kind {
            Notification::Confirmation => &mut self.confirmation,
            Notification::Reminder24h => &mut self.reminder_24h,
            Notification::Reminder2h => &mut self.reminder_2h,
        };
        let was_unset = !*flag;
        *flag = true;
        was_unset
    }

    pub fn is_sent(&self, kind: Notification) -> bool {
        match kind {
            Notification::Confirmation => self.confirmation,
            Notification::Reminder24h => self.reminder_24h,
            Notification::Reminder2h => self.reminder_2h,
        }
    }
}
