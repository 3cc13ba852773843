//! The in-memory activity directory.
//!
//! `Directory` is the only mutable state of the application. It lives inside `AppState`
//! and every operation takes the lock exactly once, so the check and the mutation of a
//! signup or an unregister happen atomically.

mod activity;
mod seed;

pub use activity::Activity;
pub use seed::seed_activities;

use indexmap::IndexMap;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug)]
pub struct Directory {
    activities: RwLock<IndexMap<String, Activity>>,
    enforce_capacity: bool,
}

impl Directory {
    /// A directory holding the seed activities.
    pub fn seeded(enforce_capacity: bool) -> Self {
        debug!("{:<20} - Seeding the activity directory", "Directory::seeded");
        Self::from_activities(seed_activities(), enforce_capacity)
    }

    pub fn from_activities(activities: IndexMap<String, Activity>, enforce_capacity: bool) -> Self {
        Self {
            activities: RwLock::new(activities),
            enforce_capacity,
        }
    }

    /// A snapshot of every activity in seed order.
    pub async fn list(&self) -> IndexMap<String, Activity> {
        self.activities.read().await.clone()
    }

    pub async fn get(&self, activity: &str) -> Option<Activity> {
        self.activities.read().await.get(activity).cloned()
    }

    pub async fn signup(&self, activity: &str, email: &str) -> Result<()> {
        let mut activities = self.activities.write().await;
        let entry = activities
            .get_mut(activity)
            .ok_or_else(|| DirectoryError::ActivityNotFound(activity.to_string()))?;

        entry.add_participant(activity, email, self.enforce_capacity)
    }

    pub async fn unregister(&self, activity: &str, email: &str) -> Result<()> {
        let mut activities = self.activities.write().await;
        let entry = activities
            .get_mut(activity)
            .ok_or_else(|| DirectoryError::ActivityNotFound(activity.to_string()))?;

        entry.remove_participant(activity, email)
    }
}

// ###################################
// ->   ERROR
// ###################################
pub type Result<T> = core::result::Result<T, DirectoryError>;

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("activity not found: {0}")]
    ActivityNotFound(String),
    #[error("{email} is already signed up for {activity}")]
    AlreadySignedUp { activity: String, email: String },
    #[error("{email} is not a participant of {activity}")]
    ParticipantNotFound { activity: String, email: String },
    #[error("{activity} is full ({max_participants} participants)")]
    ActivityFull {
        activity: String,
        max_participants: u32,
    },
}
