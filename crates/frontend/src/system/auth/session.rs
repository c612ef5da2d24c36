//! Process-wide session: login token and time zone preference.
//!
//! `init` reads both keys once; every accessor writes through to the
//! backing store. Last write wins.

use super::storage::{runtime_time_zone, KeyValueStore, TIMEZONE_KEY, TOKEN_KEY};
use crate::shared::date_utils::parse_time_zone;
use chrono_tz::Tz;

#[derive(Debug, Clone)]
pub struct Session<S> {
    store: S,
    token: Option<String>,
    time_zone: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl<S: KeyValueStore> Session<S> {
    pub fn init(store: S) -> Self {
        let token = non_empty(store.get(TOKEN_KEY));
        let time_zone = non_empty(store.get(TIMEZONE_KEY));
        Self {
            store,
            token,
            time_zone,
        }
    }

    pub fn set_login_token(&mut self, token: &str) {
        self.store.set(TOKEN_KEY, token);
        self.token = non_empty(Some(token.to_string()));
    }

    pub fn login_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    /// Teardown on logout. The time zone preference survives.
    pub fn clear_login_token(&mut self) {
        self.store.remove(TOKEN_KEY);
        self.token = None;
    }

    pub fn set_time_zone(&mut self, time_zone: &str) {
        self.store.set(TIMEZONE_KEY, time_zone);
        self.time_zone = non_empty(Some(time_zone.to_string()));
    }

    /// Stored preference, else the runtime's zone.
    pub fn time_zone(&self) -> String {
        self.time_zone.clone().unwrap_or_else(runtime_time_zone)
    }

    pub fn tz(&self) -> Tz {
        parse_time_zone(&self.time_zone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::storage::MemoryStorage;

    #[test]
    fn test_init_reads_existing_values() {
        let store = MemoryStorage::default();
        store.set(TOKEN_KEY, "abc");
        store.set(TIMEZONE_KEY, "Asia/Dhaka");

        let session = Session::init(store);
        assert!(session.is_logged_in());
        assert_eq!(session.login_token(), Some("abc"));
        assert_eq!(session.tz(), chrono_tz::Asia::Dhaka);
    }

    #[test]
    fn test_empty_store() {
        let session = Session::init(MemoryStorage::default());
        assert!(!session.is_logged_in());
        assert_eq!(session.login_token(), None);
        assert_eq!(session.time_zone(), runtime_time_zone());
    }

    #[test]
    fn test_writes_go_through_to_store() {
        let store = MemoryStorage::default();
        let mut session = Session::init(store.clone());
        session.set_login_token("t1");
        session.set_time_zone("Europe/Berlin");
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("t1"));
        assert_eq!(store.get(TIMEZONE_KEY).as_deref(), Some("Europe/Berlin"));

        // a fresh session sees the persisted values
        let reloaded = Session::init(store.clone());
        assert_eq!(reloaded.login_token(), Some("t1"));
        assert_eq!(reloaded.time_zone(), "Europe/Berlin");
    }

    #[test]
    fn test_last_write_wins() {
        let mut session = Session::init(MemoryStorage::default());
        session.set_login_token("first");
        session.set_login_token("second");
        assert_eq!(session.login_token(), Some("second"));
    }

    #[test]
    fn test_clear_keeps_time_zone() {
        let store = MemoryStorage::default();
        let mut session = Session::init(store.clone());
        session.set_login_token("t1");
        session.set_time_zone("Asia/Tokyo");
        session.clear_login_token();

        assert!(!session.is_logged_in());
        assert_eq!(store.get(TOKEN_KEY), None);
        assert_eq!(session.time_zone(), "Asia/Tokyo");
    }

    #[test]
    fn test_empty_token_is_logged_out() {
        let store = MemoryStorage::default();
        store.set(TOKEN_KEY, "");
        assert!(!Session::init(store).is_logged_in());
    }

    #[test]
    fn test_unknown_zone_name() {
        let mut session = Session::init(MemoryStorage::default());
        session.set_time_zone("Nowhere/Special");
        assert_eq!(session.tz(), Tz::UTC);
    }
}
