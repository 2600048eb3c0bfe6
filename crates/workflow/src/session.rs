//! In-memory session store keyed by login email.
//!
//! One session per email. Logging in again returns the existing session so a
//! user resuming from another tab picks up their in-progress plan; logging
//! out destroys the session and every piece of context it held.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use planner_core::{PlannerError, PlannerResult};

use crate::context::WorkflowContext;

/// A logged-in planning session and the campaign context it owns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub email: String,
    pub company: String,
    pub started_at: DateTime<Utc>,
    pub context: WorkflowContext,
}

impl Session {
    fn new(email: String, company: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            company,
            started_at: Utc::now(),
            context: WorkflowContext::new(),
        }
    }
}

/// Concurrent session store. There is no persistence layer; sessions live
/// exactly as long as the process.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<String, Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs a user in by email, creating a fresh session at the brief stage
    /// or returning the one already open for that address. The email is
    /// trimmed; an empty address is rejected.
    pub fn login(&self, email: &str, company: &str) -> PlannerResult<Session> {
        let email = email.trim();
        if email.is_empty() {
            return Err(PlannerError::Login("email must not be empty".into()));
        }
        let entry = self
            .sessions
            .entry(email.to_string())
            .or_insert_with(|| {
                tracing::info!(email, "starting new session");
                Session::new(email.to_string(), company.trim().to_string())
            });
        Ok(entry.value().clone())
    }

    /// Destroys the session for `email`, discarding its entire context.
    /// Returns whether a session existed.
    pub fn logout(&self, email: &str) -> bool {
        let removed = self.sessions.remove(email.trim()).is_some();
        if removed {
            tracing::info!(email, "session destroyed");
        }
        removed
    }

    pub fn get(&self, email: &str) -> Option<Session> {
        self.sessions.get(email.trim()).map(|s| s.value().clone())
    }

    /// Applies `f` to the stored session's context and returns the updated
    /// session. Errors if no session is open for the address.
    pub fn update<F>(&self, email: &str, f: F) -> PlannerResult<Session>
    where
        F: FnOnce(&mut WorkflowContext),
    {
        let mut entry = self
            .sessions
            .get_mut(email.trim())
            .ok_or_else(|| PlannerError::Login(format!("no open session for {}", email.trim())))?;
        f(&mut entry.value_mut().context);
        Ok(entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
