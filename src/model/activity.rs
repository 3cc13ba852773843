use serde::{Deserialize, Serialize};

use super::{DirectoryError, Result};

/// A single club or event and its current roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Emails in signup order, each one at most once.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: participants.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    /// Appends `email` to the roster. The capacity is only checked when `enforce_capacity` is set.
    pub(super) fn add_participant(
        &mut self,
        name: &str,
        email: &str,
        enforce_capacity: bool,
    ) -> Result<()> {
        if self.has_participant(email) {
            return Err(DirectoryError::AlreadySignedUp {
                activity: name.to_string(),
                email: email.to_string(),
            });
        }
        if enforce_capacity && self.is_full() {
            return Err(DirectoryError::ActivityFull {
                activity: name.to_string(),
                max_participants: self.max_participants,
            });
        }

        self.participants.push(email.to_string());
        Ok(())
    }

    pub(super) fn remove_participant(&mut self, name: &str, email: &str) -> Result<()> {
        let idx = self
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| DirectoryError::ParticipantNotFound {
                activity: name.to_string(),
                email: email.to_string(),
            })?;

        // `remove` keeps the rest of the roster in signup order.
        self.participants.remove(idx);
        Ok(())
    }
}
