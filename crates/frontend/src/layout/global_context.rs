use leptos::prelude::*;

/// Shell-level UI state shared through context.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Sidebar pinned open (overlay on narrow viewports).
    pub sidebar_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            sidebar_open: RwSignal::new(false),
        }
    }

    pub fn set_sidebar_open(&self, open: bool) {
        // avoid notifying subscribers on every resize/mousedown
        if self.sidebar_open.get_untracked() != open {
            log::debug!("sidebar pinned: {}", open);
            self.sidebar_open.set(open);
        }
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the shell context
pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
