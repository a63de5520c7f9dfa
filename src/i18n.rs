//! Internationalization (i18n) module
//!
//! Picks the UI language from the system locale. Supports English and
//! Chinese Simplified for the terminal chrome (hints, button labels, prompts).
//! Note: Log messages and the step messages remain in English.

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    ChineseSimplified,
}

impl Language {
    /// Locale code as used by the locale files
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::ChineseSimplified => "zh-CN",
        }
    }

    /// Map a locale string such as `zh_CN.UTF-8` or `en-US`
    pub fn from_locale(locale: &str) -> Self {
        let locale = locale.to_lowercase();
        if locale.starts_with("zh") || locale.contains("hans") {
            Language::ChineseSimplified
        } else {
            Language::English
        }
    }
}

/// Detect the system language
pub fn detect_language() -> Language {
    sys_locale::get_locale()
        .or_else(|| std::env::var("LANG").ok())
        .map(|locale| Language::from_locale(&locale))
        .unwrap_or(Language::English)
}

/// Set the process-wide UI locale from the system settings
///
/// Returns the selected language so the caller can log it once its
/// subscriber is installed.
pub fn init_locale() -> Language {
    let language = detect_language();
    rust_i18n::set_locale(language.code());
    language
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_locale() {
        assert_eq!(Language::from_locale("zh_CN.UTF-8"), Language::ChineseSimplified);
        assert_eq!(Language::from_locale("zh-Hans-CN"), Language::ChineseSimplified);
        assert_eq!(Language::from_locale("en-US"), Language::English);
        assert_eq!(Language::from_locale("C"), Language::English);
    }

    #[test]
    fn test_language_detection() {
        // Only ensures detection does not panic on this machine
        let _lang = detect_language();
    }

    #[test]
    fn test_every_language_has_locale_file() {
        let available = rust_i18n::available_locales!();
        for language in [Language::English, Language::ChineseSimplified] {
            assert!(available.contains(&language.code()), "{}", language.code());
        }
    }

    #[test]
    fn test_english_strings_exist() {
        assert_eq!(rust_i18n::t!("button_next", locale = "en"), "Next");
        assert_eq!(rust_i18n::t!("button_next", locale = "zh-CN"), "下一步");
    }
}
