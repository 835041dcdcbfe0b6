//! Loading → Ready / Error lifecycle of the localized grid view.
//!
//! Kept free of Dioxus so the transition rules can be exercised directly; the
//! component in `localized_grid.rs` mirrors each transition into a signal.

use crate::locale::{LocaleBundle, LocaleResolver, LocaleSource, LocaleTag, ResolveError};

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Ready(LocaleBundle),
    Error(String),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Owns the view state for one mount. It leaves `Loading` exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewController {
    state: ViewState,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewController {
    pub fn new() -> Self {
        Self {
            state: ViewState::Loading,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Apply the resolution outcome. Returns `false` (and changes nothing)
    /// if the controller already settled.
    pub fn settle(&mut self, outcome: Result<LocaleBundle, ResolveError>) -> bool {
        if !self.state.is_loading() {
            return false;
        }
        self.state = match outcome {
            Ok(bundle) => ViewState::Ready(bundle),
            Err(err) => ViewState::Error(err.to_string()),
        };
        true
    }

    /// Drive one full mount: report `Loading`, resolve `tag`, report the
    /// settled state. `observe` sees every state the view passes through.
    pub async fn mount<S: LocaleSource>(
        resolver: &LocaleResolver<S>,
        tag: &LocaleTag,
        mut observe: impl FnMut(&ViewState),
    ) -> Self {
        let mut controller = Self::new();
        observe(controller.state());

        let outcome = resolver.resolve(tag).await;
        if let Err(err) = &outcome {
            tracing::error!(requested = %tag, error = %err, "grid locale resolution failed");
        }
        controller.settle(outcome);
        observe(controller.state());
        controller
    }
}
