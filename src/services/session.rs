//! Inactivity session
//!
//! A signed-in session expires after a period without user activity. The
//! session is a plain value owned by whichever controller handles sign-in;
//! callers pass the current time in, so nothing here reads a clock or
//! schedules a timer.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::config::Settings;

/// Observable state of a [`Session`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Never started, or expired and already reported
    Inactive,
    Active { remaining: Duration },
    /// The deadline passed; reported once, then the session is inactive
    Expired,
}

/// An inactivity timeout for one signed-in user
#[derive(Debug, Clone)]
pub struct Session {
    timeout: Duration,
    deadline: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            deadline: None,
        }
    }

    /// Session using the configured timeout
    pub fn from_settings(settings: &Settings) -> Self {
        let secs = i64::try_from(settings.session_timeout_secs).unwrap_or(i64::MAX);
        Self::new(Duration::try_seconds(secs).unwrap_or(Duration::MAX))
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Arm the session on sign-in, replacing any previous deadline
    pub fn start(&mut self, now: DateTime<Utc>) {
        self.deadline = Some(self.deadline_after(now));
        debug!(deadline = ?self.deadline, "session started");
    }

    /// Push the deadline out after user activity
    ///
    /// Only an armed, unexpired session is extended. Returns whether it was.
    pub fn reset(&mut self, now: DateTime<Utc>) -> bool {
        match self.deadline {
            Some(deadline) if now < deadline => {
                self.deadline = Some(self.deadline_after(now));
                true
            }
            _ => false,
        }
    }

    /// Disarm the session on sign-out
    pub fn expire(&mut self) {
        if self.deadline.take().is_some() {
            debug!("session expired");
        }
    }

    /// Check the session at `now`, disarming it once the deadline has passed
    pub fn poll(&mut self, now: DateTime<Utc>) -> SessionState {
        match self.deadline {
            None => SessionState::Inactive,
            Some(deadline) if now >= deadline => {
                self.expire();
                SessionState::Expired
            }
            Some(deadline) => SessionState::Active {
                remaining: deadline - now,
            },
        }
    }

    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.deadline.is_some_and(|deadline| now < deadline)
    }

    fn deadline_after(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now.checked_add_signed(self.timeout)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(minutes: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 9, 0, 0).unwrap() + Duration::minutes(minutes)
    }

    #[test]
    fn test_new_session_is_inactive() {
        let mut session = Session::new(Duration::minutes(60));
        assert!(!session.is_active(at(0)));
        assert_eq!(session.poll(at(0)), SessionState::Inactive);
        assert!(!session.reset(at(0)));
    }

    #[test]
    fn test_start_and_poll() {
        let mut session = Session::new(Duration::minutes(60));
        session.start(at(0));

        assert!(session.is_active(at(59)));
        assert_eq!(
            session.poll(at(20)),
            SessionState::Active {
                remaining: Duration::minutes(40)
            }
        );
    }

    #[test]
    fn test_activity_extends_deadline() {
        let mut session = Session::new(Duration::minutes(60));
        session.start(at(0));

        assert!(session.reset(at(50)));
        assert!(session.is_active(at(100)));
        assert_eq!(session.poll(at(110)), SessionState::Expired);
    }

    #[test]
    fn test_expiry_is_reported_once() {
        let mut session = Session::new(Duration::minutes(60));
        session.start(at(0));

        assert_eq!(session.poll(at(60)), SessionState::Expired);
        assert_eq!(session.poll(at(61)), SessionState::Inactive);
        assert!(!session.reset(at(61)));
    }

    #[test]
    fn test_activity_after_deadline_does_not_revive() {
        let mut session = Session::new(Duration::minutes(60));
        session.start(at(0));

        assert!(!session.reset(at(75)));
        assert_eq!(session.poll(at(75)), SessionState::Expired);
    }

    #[test]
    fn test_explicit_expire() {
        let mut session = Session::new(Duration::minutes(60));
        session.start(at(0));
        session.expire();

        assert!(!session.is_active(at(1)));
        assert_eq!(session.poll(at(1)), SessionState::Inactive);

        session.start(at(2));
        assert!(session.is_active(at(3)));
    }

    #[test]
    fn test_from_settings() {
        let mut settings = Settings::default();
        assert_eq!(Session::from_settings(&settings).timeout(), Duration::hours(1));

        settings.session_timeout_secs = 90;
        assert_eq!(Session::from_settings(&settings).timeout(), Duration::seconds(90));
    }
}
