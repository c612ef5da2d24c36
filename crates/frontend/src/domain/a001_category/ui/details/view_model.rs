use super::model;
use crate::shared::request_guard::RequestGuard;
use contracts::domain::a001_category::Category;
use leptos::prelude::*;

/// ViewModel для просмотра категории
#[derive(Clone, Copy)]
pub struct CategoryDetailsVm {
    pub category: RwSignal<Option<Category>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    current_id: RwSignal<Option<String>>,
    guard: StoredValue<RequestGuard>,
}

impl CategoryDetailsVm {
    pub fn new() -> Self {
        Self {
            category: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            current_id: RwSignal::new(None),
            guard: StoredValue::new(RequestGuard::new()),
        }
    }

    /// Загрузить данные с сервера. A newer call supersedes this one.
    pub fn load(&self, id: String, token: Option<String>) {
        let category = self.category;
        let loading = self.loading;
        let error = self.error;
        let guard = self.guard;
        let ticket = guard.with_value(|g| g.begin());

        self.current_id.set(Some(id.clone()));
        category.set(None);
        error.set(None);
        loading.set(true);
        log::info!("category: loading {}", id);

        wasm_bindgen_futures::spawn_local(async move {
            let result = model::fetch_by_id(&id, token.as_deref()).await;

            let current = guard.try_with_value(|g| g.is_current(ticket)).unwrap_or(false);
            if !current {
                log::debug!("category: dropping stale result for {}", id);
                return;
            }

            match result {
                Ok(loaded) => {
                    log::debug!("category: loaded {}", loaded.name);
                    category.set(Some(loaded));
                }
                Err(e) => {
                    log::warn!("category: failed to load {}: {}", id, e);
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    }

    /// Re-issue the last request.
    pub fn refetch(&self, token: Option<String>) {
        if let Some(id) = self.current_id.get_untracked() {
            self.load(id, token);
        }
    }
}

impl Default for CategoryDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}
