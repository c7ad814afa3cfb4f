use async_trait::async_trait;
use dashmap::DashMap;

use mergington::data::{Activity, ActivityDirectory, MessageResponse};
use mergington::errors::DirectoryError;

/// Aggregate numbers about the directory, reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectoryStats {
    pub activity_count: usize,
    pub participant_count: usize,
}

/// A trait for listing activities and managing their rosters.
///
/// Activities themselves are fixed once the service is built, only their
/// participant lists change. Implementations must leave state untouched when
/// an operation fails.
///
/// # Examples
///
/// ```ignore
/// async fn example_usage<S: ActivityService>(service: &S) -> Result<(), S::Error> {
///     service.signup("Chess Club", "new@mergington.edu").await?;
///     let directory = service.list().await?;
///     assert!(directory.get("Chess Club").unwrap().is_signed_up("new@mergington.edu"));
///     service.withdraw("Chess Club", "new@mergington.edu").await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait ActivityService {
    /// The error type returned by operations on this service.
    type Error;

    /// Returns every activity, in the order the directory was seeded.
    async fn list(&self) -> Result<ActivityDirectory, Self::Error>;

    /// Retrieves a single activity by its exact name.
    ///
    /// # Errors
    ///
    /// Returns an error if no activity has that name.
    async fn get(&self, activity: &str) -> Result<Activity, Self::Error>;

    /// Appends `email` to the activity's roster.
    ///
    /// The email format is not validated and `max_participants` is not enforced.
    ///
    /// # Errors
    ///
    /// Returns an error if the activity doesn't exist or the email is already
    /// on the roster.
    async fn signup(&self, activity: &str, email: &str) -> Result<MessageResponse, Self::Error>;

    /// Removes `email` from the activity's roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the activity doesn't exist or the email is not on
    /// the roster.
    async fn withdraw(&self, activity: &str, email: &str)
    -> Result<MessageResponse, Self::Error>;

    async fn stats(&self) -> Result<DirectoryStats, Self::Error>;
}

/// An in-memory implementation of the `ActivityService` trait.
///
/// Records live in a `DashMap`, so a signup or withdrawal holds the write guard
/// of its own entry for the whole check-and-mutate step. Requests touching
/// different activities proceed in parallel, requests on the same activity are
/// serialized. The seed order is kept separately since the map is unordered.
pub struct ActivityServiceInMemory {
    activities: DashMap<String, Activity>,
    order: Vec<String>,
}

impl ActivityServiceInMemory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self {
            activities: DashMap::new(),
            order: Vec::new(),
        }
    }

    /// Creates a service holding the given activities.
    pub fn with_directory(directory: ActivityDirectory) -> Self {
        let activities = DashMap::with_capacity(directory.len());
        let mut order = Vec::with_capacity(directory.len());
        for (name, activity) in directory {
            order.push(name.clone());
            activities.insert(name, activity);
        }
        Self { activities, order }
    }

    /// Creates a service holding the school's default activities.
    pub fn seeded() -> Self {
        Self::with_directory(super::seed::default_directory())
    }

    fn not_found(activity: &str) -> DirectoryError {
        DirectoryError::NotFound {
            activity: activity.to_string(),
        }
    }
}

impl Default for ActivityServiceInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActivityService for ActivityServiceInMemory {
    type Error = DirectoryError;

    async fn list(&self) -> Result<ActivityDirectory, Self::Error> {
        Ok(self
            .order
            .iter()
            .filter_map(|name| {
                self.activities
                    .get(name)
                    .map(|entry| (name.clone(), entry.value().clone()))
            })
            .collect())
    }

    async fn get(&self, activity: &str) -> Result<Activity, Self::Error> {
        self.activities
            .get(activity)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Self::not_found(activity))
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<MessageResponse, Self::Error> {
        let mut entry = self
            .activities
            .get_mut(activity)
            .ok_or_else(|| Self::not_found(activity))?;

        if !entry.add_participant(email) {
            return Err(DirectoryError::AlreadySignedUp {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }

        Ok(MessageResponse::new(format!(
            "Signed up {email} for {activity}"
        )))
    }

    async fn withdraw(
        &self,
        activity: &str,
        email: &str,
    ) -> Result<MessageResponse, Self::Error> {
        let mut entry = self
            .activities
            .get_mut(activity)
            .ok_or_else(|| Self::not_found(activity))?;

        if !entry.remove_participant(email) {
            return Err(DirectoryError::NotRegistered {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }

        Ok(MessageResponse::new(format!(
            "Unregistered {email} from {activity}"
        )))
    }

    async fn stats(&self) -> Result<DirectoryStats, Self::Error> {
        let participant_count = self
            .activities
            .iter()
            .map(|entry| entry.value().participants.len())
            .sum();
        Ok(DirectoryStats {
            activity_count: self.activities.len(),
            participant_count,
        })
    }
}
