//! Draft accessors: every admin session edits its own copy of the site,
//! seeded from the store on first touch.

use taxisite_types::SiteConfig;

use super::AppState;

impl AppState {
    pub fn draft(&self, token: &str) -> SiteConfig {
        self.inner
            .drafts
            .entry(token.to_string())
            .or_insert_with(|| self.store().get())
            .clone()
    }

    /// Run `edit` against the session's draft. The draft is only changed when
    /// `edit` succeeds.
    pub fn edit_draft<T, E>(
        &self,
        token: &str,
        edit: impl FnOnce(&mut SiteConfig) -> Result<T, E>,
    ) -> Result<T, E> {
        let mut entry =
            self.inner.drafts.entry(token.to_string()).or_insert_with(|| self.store().get());
        let mut working = entry.clone();
        let out = edit(&mut working)?;
        *entry = working;
        Ok(out)
    }

    pub fn replace_draft(&self, token: &str, config: SiteConfig) {
        self.inner.drafts.insert(token.to_string(), config);
    }

    /// Throw away unsaved edits and start over from the store.
    pub fn reset_draft(&self, token: &str) -> SiteConfig {
        let fresh = self.store().get();
        self.replace_draft(token, fresh.clone());
        fresh
    }

    pub fn drop_draft(&self, token: &str) {
        self.inner.drafts.remove(token);
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::test_app_state;
    use taxisite_types::ConfigError;

    #[tokio::test]
    async fn test_draft_seeded_from_store() {
        let (state, _tmp) = test_app_state();
        assert_eq!(state.draft("t1"), state.store().get());
    }

    #[tokio::test]
    async fn test_failed_edit_leaves_draft_untouched() {
        let (state, _tmp) = test_app_state();
        let before = state.draft("t1");

        let result: Result<(), ConfigError> = state.edit_draft("t1", |draft| {
            draft.address = "half-applied".to_string();
            draft.remove_vehicle("nope").map(|_| ())
        });

        assert!(result.is_err());
        assert_eq!(state.draft("t1"), before);
    }

    #[tokio::test]
    async fn test_drafts_are_per_session() {
        let (state, _tmp) = test_app_state();
        state
            .edit_draft::<_, ConfigError>("t1", |draft| {
                draft.address = "only t1".to_string();
                Ok(())
            })
            .unwrap();

        assert_eq!(state.draft("t1").address, "only t1");
        assert_ne!(state.draft("t2").address, "only t1");

        state.reset_draft("t1");
        assert_eq!(state.draft("t1"), state.store().get());
    }
}
