use web_sys::Storage;

use crate::config::selector::THEME_KEY;
use crate::error::FxError;
use crate::theme::PreferenceStore;

/// Theme preference in `window.localStorage`.
///
/// Private browsing modes can refuse storage entirely; reads then behave as
/// "nothing stored" and writes report [`FxError::Storage`].
#[derive(Debug, Default)]
pub struct LocalPreference;

impl LocalPreference {
    fn storage() -> Result<Storage, FxError> {
        let window = web_sys::window().ok_or(FxError::MissingElement("window"))?;
        window
            .local_storage()
            .map_err(|e| FxError::Storage(format!("{e:?}")))?
            .ok_or_else(|| FxError::Storage("localStorage disabled".into()))
    }
}

impl PreferenceStore for LocalPreference {
    fn load(&self) -> Option<String> {
        Self::storage().ok()?.get_item(THEME_KEY).ok().flatten()
    }

    fn save(&mut self, value: &str) -> Result<(), FxError> {
        Self::storage()?
            .set_item(THEME_KEY, value)
            .map_err(|e| FxError::Storage(format!("{e:?}")))
    }
}
