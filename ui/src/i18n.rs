//! Dashboard strings, embedded per locale under `i18n/<lang>/pulseboard_ui.ftl`.
//!
//! `en-US` is the fallback and the reference for every other locale. Lookups
//! go through [`t!`](crate::t) against the shared [`LOADER`]; the launcher
//! calls [`init`] once and the navbar switches with [`set_language`].
use std::sync::Once;

use dioxus::logger::tracing::{debug, warn};
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::I18nEmbedError;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::{langid, LanguageIdentifier};

pub use i18n_embed_fl::fl;

/// `fl!` against the shared loader: `t!("chart-line-title", filter = label)`.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Must match the `.ftl` file stem, which `fl!` derives from the package name.
const DOMAIN: &str = "pulseboard_ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> =
    Lazy::new(|| FluentLanguageLoader::new(DOMAIN, langid!("en-US")));

static INIT: Once = Once::new();

/// Loads the bundles for the platform's preferred languages. Runs once.
pub fn init() {
    INIT.call_once(|| match load(&requested_languages()) {
        Ok(selected) => debug!(?selected, "dashboard locale loaded"),
        Err(err) => warn!(%err, "locale selection failed, staying on en-US"),
    });
}

/// Switches the dashboard language. Tags that do not parse are ignored.
pub fn set_language(tag: &str) -> Result<(), I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        debug!(tag, "ignoring unparseable language tag");
        return Ok(());
    };
    load(&[lang]).map(|_| ())
}

/// Locale directories embedded in the binary, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs: Vec<String> = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_owned))
        .collect();
    langs.sort();
    langs.dedup();
    langs
}

/// Selecting replaces the bundles, so isolation has to be turned off again
/// each time. The only placeable is a filter label inlined in a card title.
fn load(requested: &[LanguageIdentifier]) -> Result<Vec<LanguageIdentifier>, I18nEmbedError> {
    load_into(&LOADER, requested)
}

fn load_into(
    loader: &FluentLanguageLoader,
    requested: &[LanguageIdentifier],
) -> Result<Vec<LanguageIdentifier>, I18nEmbedError> {
    let selected = i18n_embed::select(loader, &Localizations, requested)?;
    loader.set_use_isolating(false);
    Ok(selected)
}

/// Subscribes the calling component to the launcher's language signal (if
/// one was provided) so its `t!` lookups re-run after a switch. Returns the
/// current tag, or an empty string without a launcher signal.
pub fn use_language() -> String {
    use dioxus::prelude::*;

    try_use_context::<Signal<String>>()
        .map(|code| code.cloned())
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn fallback_language_is_present() {
        assert!(available_languages().iter().any(|l| l == "en-US"));
    }

    #[test]
    fn spanish_is_embedded() {
        assert!(available_languages().iter().any(|l| l == "es-ES"));
    }

    #[test]
    fn invalid_tags_are_ignored() {
        assert!(set_language("not a tag!").is_ok());
    }

    #[test]
    fn basic_lookup_works() {
        init();
        let s = fl!(&*LOADER, "dashboard-title");
        assert_eq!(s, "Interactive Data Dashboard");
    }

    #[test]
    fn filter_placeable_is_inlined() {
        init();
        let s = fl!(&*LOADER, "chart-line-title", filter = "Product A");
        assert!(s.ends_with("(Product A)"), "{s}");
        assert!(!s.contains(['\u{2068}', '\u{2069}']), "{s:?}");
    }

    #[test]
    fn switching_language_keeps_placeables_inline() {
        let loader = FluentLanguageLoader::new(DOMAIN, langid!("en-US"));
        load_into(&loader, &[langid!("es-ES")]).expect("es-ES is embedded");
        let s = fl!(&loader, "chart-line-title", filter = "Product B");
        assert!(s.starts_with("Ventas"), "{s:?}");
        assert!(s.ends_with("(Product B)"), "{s:?}");
        assert!(!s.contains(['\u{2068}', '\u{2069}']), "{s:?}");
    }

    #[test]
    fn dynamic_language_switch_reverts_on_failure() {
        init();
        let before = fl!(&*LOADER, "stat-revenue");
        let _ = set_language("zz-ZZ");
        let after = fl!(&*LOADER, "stat-revenue");
        assert_eq!(before, after);
    }
}
