// SPDX-License-Identifier: MPL-2.0
use crate::config::defaults::{ENGLISH_UNDO_LABEL, FALLBACK_LOCALE, UNDO_LABEL_KEY};
use crate::config::Config;
use crate::error::Result;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl I18n {
    pub fn new(requested: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                tracing::warn!(file = filename, "skipping translation with invalid locale name");
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let res = match FluentResource::try_new(source) {
                Ok(res) => res,
                Err((_, errors)) => {
                    tracing::warn!(file = filename, ?errors, "failed to parse translation");
                    continue;
                }
            };
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            if let Err(errors) = bundle.add_resource(res) {
                tracing::warn!(file = filename, ?errors, "failed to add translation");
                continue;
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }

        let default_locale = fallback_locale();
        let current_locale =
            resolve_locale(requested, config, &available_locales).unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    /// Switches to the locale named by a language tag.
    ///
    /// Returns whether a translation for it exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Locale`](crate::error::Error::Locale) if `tag` is not
    /// a valid language identifier.
    pub fn set_language(&mut self, tag: &str) -> Result<bool> {
        let locale: LanguageIdentifier = tag.parse()?;
        let known = self.bundles.contains_key(&locale);
        self.set_locale(locale);
        Ok(known)
    }

    /// Formats `key` in the current locale, if it has a translation.
    pub fn try_tr(&self, key: &str) -> Option<String> {
        let bundle = self.bundles.get(&self.current_locale)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        errors.is_empty().then(|| value.to_string())
    }

    pub fn tr(&self, key: &str) -> String {
        self.try_tr(key)
            .unwrap_or_else(|| format!("MISSING: {}", key))
    }

    /// Localized label of the undo button.
    pub fn undo_label(&self) -> String {
        self.try_tr(UNDO_LABEL_KEY)
            .unwrap_or_else(|| ENGLISH_UNDO_LABEL.to_string())
    }
}

/// Requested locale and configured language.
type LabelKey = (Option<String>, Option<String>);

/// Undo labels already resolved, keyed by the requested locale and the
/// configured language.
#[derive(Debug, Default)]
pub struct LabelCache {
    labels: Mutex<HashMap<LabelKey, String>>,
}

impl LabelCache {
    /// Returns the undo label for `requested` and `config`, loading the
    /// translations only the first time a pair is seen.
    pub fn undo_label(&self, requested: Option<String>, config: &Config) -> String {
        let key = (requested, config.language.clone());
        if let Some(label) = self.lock().get(&key) {
            return label.clone();
        }
        let label = I18n::new(key.0.clone(), config).undo_label();
        tracing::debug!(requested = ?key.0, %label, "resolved undo label");
        self.lock().entry(key).or_insert(label).clone()
    }

    /// Number of resolved labels.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<LabelKey, String>> {
        self.labels.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Undo label for `requested` and `config`, cached for the life of the
/// process.
pub fn undo_label_for(requested: Option<String>, config: &Config) -> String {
    static LABELS: OnceLock<LabelCache> = OnceLock::new();
    LABELS
        .get_or_init(LabelCache::default)
        .undo_label(requested, config)
}

fn fallback_locale() -> LanguageIdentifier {
    FALLBACK_LOCALE
        .parse()
        .unwrap_or_else(|_| LanguageIdentifier::default())
}

fn resolve_locale(
    requested: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Explicit request (usually the host's locale)
    if let Some(lang) = requested.as_deref().and_then(|s| match_available(s, available)) {
        return Some(lang);
    }

    // 2. Config file
    if let Some(lang) = config
        .language
        .as_deref()
        .and_then(|s| match_available(s, available))
    {
        return Some(lang);
    }

    // 3. OS locale
    sys_locale::get_locale().and_then(|s| match_available(&s, available))
}

/// Exact match first, then the first available locale sharing the language.
fn match_available(lang_str: &str, available: &[LanguageIdentifier]) -> Option<LanguageIdentifier> {
    let lang = lang_str.parse::<LanguageIdentifier>().ok()?;
    if available.contains(&lang) {
        return Some(lang);
    }
    available
        .iter()
        .find(|candidate| candidate.language == lang.language)
        .cloned()
}
