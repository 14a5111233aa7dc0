//! App session
//!
//! Owns the progress tracker together with the learner's identity and
//! preferences, and runs the startup sequence against the sync backend.

use std::sync::Arc;

use crate::notifications::{schedule_reminders, NotificationError, NotificationHost};
use crate::progress::{CompletionOutcome, ProgressTracker};
use crate::remote::{RemoteSync, SyncError, UserId, UserPreferences};

pub struct Session {
    sync: Arc<dyn RemoteSync>,
    tracker: ProgressTracker,
    preferences: Option<UserPreferences>,
    user: Option<UserId>,
    is_loading: bool,
}

impl Session {
    pub fn new(sync: Arc<dyn RemoteSync>) -> Self {
        Self::with_tracker(sync.clone(), ProgressTracker::reference().with_sync(sync))
    }

    pub fn with_tracker(sync: Arc<dyn RemoteSync>, tracker: ProgressTracker) -> Self {
        Self {
            sync,
            tracker,
            preferences: None,
            user: None,
            is_loading: false,
        }
    }

    /// Resolve the identity, then load the profile and, if there is one, the
    /// stored progress. Profile and progress failures are logged and leave
    /// the session usable; an identity failure is returned.
    pub async fn initialize(&mut self) -> Result<(), SyncError> {
        self.is_loading = true;

        let user = match self.sync.resolve_identity().await {
            Ok(user) => user,
            Err(e) => {
                log::error!("Failed to resolve identity: {}", e);
                self.is_loading = false;
                return Err(e);
            }
        };
        log::info!("Session user {}", user);
        self.user = Some(user.clone());
        self.tracker.set_user(Some(user.clone()));

        match self.sync.load_profile(&user).await {
            Ok(Some(prefs)) => {
                self.preferences = Some(prefs);
                match self.sync.load_progress(&user).await {
                    Ok(records) => self.tracker.seed(&records),
                    Err(e) => log::error!("Failed to load progress: {}", e),
                }
            }
            Ok(None) => log::info!("No profile yet, onboarding required"),
            Err(e) => log::error!("Failed to load profile: {}", e),
        }

        self.is_loading = false;
        Ok(())
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// True until preferences with a finished onboarding are present
    pub fn needs_onboarding(&self) -> bool {
        !self
            .preferences
            .as_ref()
            .is_some_and(|prefs| prefs.onboarding_complete)
    }

    /// Store the onboarding answers and schedule the daily reminders.
    ///
    /// A failed profile write is logged; the preferences are kept locally
    /// either way. Returns whether reminders were scheduled.
    pub async fn complete_onboarding<H>(
        &mut self,
        mut prefs: UserPreferences,
        host: &H,
    ) -> Result<bool, NotificationError>
    where
        H: NotificationHost + ?Sized,
    {
        prefs.onboarding_complete = true;

        match &self.user {
            Some(user) => {
                if let Err(e) = self.sync.save_profile(user, &prefs).await {
                    log::error!("Failed to save profile: {}", e);
                }
            }
            None => log::warn!("No user, profile kept locally only"),
        }

        let wake = prefs.wake_time.clone();
        let sleep = prefs.sleep_time.clone();
        self.preferences = Some(prefs);

        schedule_reminders(host, &wake, &sleep).await
    }

    pub fn complete_packet(&mut self, packet_id: &str, concept_id: &str) -> CompletionOutcome {
        self.tracker.complete_packet(packet_id, concept_id)
    }

    pub fn user(&self) -> Option<&UserId> {
        self.user.as_ref()
    }

    pub fn preferences(&self) -> Option<&UserPreferences> {
        self.preferences.as_ref()
    }

    pub fn tracker(&self) -> &ProgressTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut ProgressTracker {
        &mut self.tracker
    }

    /// Wait for outstanding background writes
    pub async fn shutdown(&mut self) {
        self.tracker.flush_pending_syncs().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::reminders::Result as HostResult;
    use crate::notifications::{DailyReminder, PermissionStatus};
    use crate::remote::{MemorySync, ProgressRecord};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingHost {
        granted: bool,
        scheduled: AtomicUsize,
    }

    impl CountingHost {
        fn new(granted: bool) -> Self {
            Self {
                granted,
                scheduled: AtomicUsize::new(0),
            }
        }

        fn status(&self) -> PermissionStatus {
            if self.granted {
                PermissionStatus::Granted
            } else {
                PermissionStatus::Denied
            }
        }
    }

    #[async_trait::async_trait]
    impl NotificationHost for CountingHost {
        async fn permission_status(&self) -> HostResult<PermissionStatus> {
            Ok(self.status())
        }

        async fn request_permission(&self) -> HostResult<PermissionStatus> {
            Ok(self.status())
        }

        async fn cancel_all(&self) -> HostResult<()> {
            self.scheduled.store(0, Ordering::SeqCst);
            Ok(())
        }

        async fn schedule_daily(&self, _reminder: &DailyReminder) -> HostResult<()> {
            self.scheduled.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn prefs() -> UserPreferences {
        UserPreferences::new("7:00 AM", "11:00 PM", "1")
    }

    #[tokio::test]
    async fn test_new_user_needs_onboarding() {
        let mut session = Session::new(Arc::new(MemorySync::new()));
        assert!(session.needs_onboarding());

        session.initialize().await.unwrap();

        assert!(session.user().is_some());
        assert!(session.needs_onboarding());
        assert!(!session.is_loading());
        assert_eq!(session.tracker().current_concept(), "arrays");
    }

    #[tokio::test]
    async fn test_returning_user_is_seeded() {
        let user = UserId::new("returning");
        let mut stored = prefs();
        stored.onboarding_complete = true;
        let sync = MemorySync::new()
            .with_identity(user.clone())
            .with_profile(&user, stored)
            .with_progress(&user, vec![ProgressRecord::completed("arrays")]);

        let mut session = Session::new(Arc::new(sync));
        session.initialize().await.unwrap();

        assert!(!session.needs_onboarding());
        assert_eq!(session.tracker().state().completed_concept_ids, vec!["arrays"]);
        assert_eq!(session.tracker().current_concept(), "strings");
    }

    #[tokio::test]
    async fn test_profile_without_finished_onboarding() {
        let user = UserId::new("halfway");
        let sync = MemorySync::new()
            .with_identity(user.clone())
            .with_profile(&user, prefs());

        let mut session = Session::new(Arc::new(sync));
        session.initialize().await.unwrap();

        assert!(session.preferences().is_some());
        assert!(session.needs_onboarding());
    }

    #[tokio::test]
    async fn test_identity_failure_is_returned() {
        let sync = Arc::new(MemorySync::new());
        sync.set_failing(true);

        let mut session = Session::new(sync);
        assert!(session.initialize().await.is_err());
        assert!(!session.is_loading());
        assert!(session.user().is_none());
    }

    #[tokio::test]
    async fn test_complete_onboarding_saves_and_schedules() {
        let sync = Arc::new(MemorySync::new());
        let host = CountingHost::new(true);

        let mut session = Session::new(sync.clone());
        session.initialize().await.unwrap();

        assert!(session.complete_onboarding(prefs(), &host).await.unwrap());
        assert!(!session.needs_onboarding());
        assert_eq!(host.scheduled.load(Ordering::SeqCst), 5);

        let user = session.user().unwrap().clone();
        let saved = sync.stored_profile(&user).await.unwrap();
        assert!(saved.onboarding_complete);
    }

    #[tokio::test]
    async fn test_onboarding_survives_sync_failure_and_denial() {
        let sync = Arc::new(MemorySync::new());
        let host = CountingHost::new(false);

        let mut session = Session::new(sync.clone());
        session.initialize().await.unwrap();
        sync.set_failing(true);

        assert!(!session.complete_onboarding(prefs(), &host).await.unwrap());
        assert!(!session.needs_onboarding());
        assert_eq!(host.scheduled.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_completing_a_concept_syncs_through_session() {
        let sync = Arc::new(MemorySync::new());
        let mut session = Session::new(sync.clone());
        session.initialize().await.unwrap();

        let packets = session.tracker().catalog().packets_for_concept("arrays");
        let mut last = CompletionOutcome::AlreadyCompleted;
        for packet in packets {
            last = session.complete_packet(packet.id, "arrays");
        }
        session.shutdown().await;

        assert!(matches!(last, CompletionOutcome::ConceptCompleted { .. }));
        let user = session.user().unwrap().clone();
        assert_eq!(
            sync.stored_progress(&user).await,
            vec![ProgressRecord::completed("arrays")]
        );
    }
}
