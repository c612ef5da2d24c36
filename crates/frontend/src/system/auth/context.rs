use super::session::Session;
use super::storage::BrowserStorage;
use chrono_tz::Tz;
use leptos::prelude::*;

pub type BrowserSession = Session<BrowserStorage>;

/// App-wide handle to the session, shared through context.
#[derive(Clone, Copy)]
pub struct SessionContext {
    session: RwSignal<BrowserSession>,
}

/// Read `token` / `time_zone` from storage and provide the session.
pub fn provide_session() -> SessionContext {
    let ctx = SessionContext {
        session: RwSignal::new(Session::init(BrowserStorage)),
    };
    log::debug!(
        "session restored: logged_in={}",
        ctx.session.with_untracked(|s| s.is_logged_in())
    );
    provide_context(ctx);
    ctx
}

/// Hook to access the session
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not provided (call provide_session in App)")
}

impl SessionContext {
    /// Current token without subscribing.
    pub fn token(&self) -> Option<String> {
        self.session
            .with_untracked(|s| s.login_token().map(str::to_string))
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.with(|s| s.is_logged_in())
    }

    /// Display zone; reactive.
    pub fn tz(&self) -> Tz {
        self.session.with(|s| s.tz())
    }

    /// Drop the token and go back to the entry page.
    pub fn logout(&self) {
        self.session.update(|s| s.clear_login_token());
        log::info!("logged out");
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/");
        }
    }
}
