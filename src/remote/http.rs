//! REST sync backend for a hosted PostgREST database with anonymous auth

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use super::{
    ProgressRecord, ProgressSnapshot, ProgressStatus, RemoteSync, Result, SyncError, UserId,
    UserPreferences,
};
use crate::config::SyncSettings;

const SESSION_FILE: &str = "auth-session.json";

/// Cached result of the anonymous sign-up
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthSession {
    user_id: UserId,
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct SignupResponse {
    access_token: String,
    user: SignupUser,
}

#[derive(Debug, Deserialize)]
struct SignupUser {
    id: String,
}

/// Row in the `profiles` table
#[derive(Debug, Serialize, Deserialize)]
struct ProfileRow {
    id: String,
    wake_time: String,
    sleep_time: String,
    dsa_level: String,
    #[serde(default)]
    onboarding_complete: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    goal: Option<String>,
}

impl ProfileRow {
    fn new(user: &UserId, prefs: &UserPreferences) -> Self {
        Self {
            id: user.to_string(),
            wake_time: prefs.wake_time.clone(),
            sleep_time: prefs.sleep_time.clone(),
            dsa_level: prefs.dsa_level.clone(),
            onboarding_complete: prefs.onboarding_complete,
            name: prefs.name.clone(),
            goal: prefs.goal.clone(),
        }
    }
}

impl From<ProfileRow> for UserPreferences {
    fn from(row: ProfileRow) -> Self {
        Self {
            wake_time: row.wake_time,
            sleep_time: row.sleep_time,
            dsa_level: row.dsa_level,
            onboarding_complete: row.onboarding_complete,
            name: row.name,
            goal: row.goal,
        }
    }
}

/// Row in the `user_progress` table
#[derive(Debug, Serialize, Deserialize)]
struct ProgressRow {
    user_id: String,
    concept_id: String,
    status: ProgressStatus,
}

pub struct HttpSync {
    client: Client,
    base_url: String,
    api_key: String,
    session_path: PathBuf,
    session: Mutex<Option<AuthSession>>,
}

impl HttpSync {
    pub fn new(settings: &SyncSettings, data_dir: &Path) -> Result<Self> {
        let base_url = settings
            .url
            .as_deref()
            .ok_or_else(|| SyncError::InvalidConfig("sync.url is required for the http backend".to_string()))?
            .trim_end_matches('/')
            .to_string();

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(SyncError::InvalidConfig(
                "URL must start with http:// or https://".to_string(),
            ));
        }

        let api_key = settings
            .api_key
            .clone()
            .ok_or_else(|| SyncError::InvalidConfig("sync.api_key is required for the http backend".to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_key,
            session_path: data_dir.join(SESSION_FILE),
            session: Mutex::new(None),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Return the cached session, reading it from disk or signing up anonymously
    async fn session(&self) -> Result<AuthSession> {
        let mut guard = self.session.lock().await;
        if let Some(session) = guard.as_ref() {
            return Ok(session.clone());
        }

        if self.session_path.exists() {
            let content = fs::read_to_string(&self.session_path)?;
            match serde_json::from_str::<AuthSession>(&content) {
                Ok(session) => {
                    *guard = Some(session.clone());
                    return Ok(session);
                }
                Err(e) => log::warn!("Ignoring unreadable auth session: {}", e),
            }
        }

        let session = self.sign_up().await?;
        if let Some(parent) = self.session_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.session_path, serde_json::to_string_pretty(&session)?)?;
        log::info!("Signed in anonymously as {}", session.user_id);

        *guard = Some(session.clone());
        Ok(session)
    }

    async fn sign_up(&self) -> Result<AuthSession> {
        let response = self
            .client
            .post(self.url("auth/v1/signup"))
            .header("apikey", &self.api_key)
            .json(&serde_json::json!({}))
            .send()
            .await?;

        let body: SignupResponse = check_status(response).await?.json().await?;
        Ok(AuthSession {
            user_id: UserId::new(body.user.id),
            access_token: body.access_token,
        })
    }

    async fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder> {
        let session = self.session().await?;
        Ok(builder
            .header("apikey", &self.api_key)
            .bearer_auth(session.access_token))
    }

    async fn upsert<T: Serialize + ?Sized>(&self, table: &str, rows: &T) -> Result<()> {
        let request = self
            .authorized(self.client.post(self.url(&format!("rest/v1/{}", table))))
            .await?
            .header("Prefer", "resolution=merge-duplicates")
            .json(rows);

        check_status(request.send().await?).await?;
        Ok(())
    }
}

async fn check_status(response: Response) -> Result<Response> {
    match response.status() {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(SyncError::AuthFailed),
        status if !status.is_success() => Err(SyncError::Server {
            status: status.as_u16(),
            message: response.text().await.unwrap_or_default(),
        }),
        _ => Ok(response),
    }
}

#[async_trait]
impl RemoteSync for HttpSync {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn resolve_identity(&self) -> Result<UserId> {
        Ok(self.session().await?.user_id)
    }

    async fn load_profile(&self, user: &UserId) -> Result<Option<UserPreferences>> {
        let request = self
            .authorized(self.client.get(self.url("rest/v1/profiles")))
            .await?
            .query(&[("id", format!("eq.{}", user)), ("select", "*".to_string())]);

        let rows: Vec<ProfileRow> = check_status(request.send().await?).await?.json().await?;
        Ok(rows.into_iter().next().map(UserPreferences::from))
    }

    async fn save_profile(&self, user: &UserId, prefs: &UserPreferences) -> Result<()> {
        self.upsert("profiles", &ProfileRow::new(user, prefs)).await
    }

    async fn load_progress(&self, user: &UserId) -> Result<Vec<ProgressRecord>> {
        let request = self
            .authorized(self.client.get(self.url("rest/v1/user_progress")))
            .await?
            .query(&[("user_id", format!("eq.{}", user)), ("select", "*".to_string())]);

        let rows: Vec<ProgressRow> = check_status(request.send().await?).await?.json().await?;
        Ok(rows
            .into_iter()
            .map(|row| ProgressRecord {
                concept_id: row.concept_id,
                status: row.status,
            })
            .collect())
    }

    async fn save_progress(&self, user: &UserId, snapshot: &ProgressSnapshot) -> Result<()> {
        if snapshot.completed_concept_ids.is_empty() {
            return Ok(());
        }

        let rows: Vec<ProgressRow> = snapshot
            .completed_concept_ids
            .iter()
            .map(|concept_id| ProgressRow {
                user_id: user.to_string(),
                concept_id: concept_id.clone(),
                status: ProgressStatus::Completed,
            })
            .collect();

        self.upsert("user_progress", &rows).await
    }
}
