use serde::Serialize;

/// A supported language: locale tag for UI selection and speech-engine
/// configuration, bare ISO-639-1 code for transcript bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    /// Locale-qualified tag, e.g. "en-US"
    pub tag: &'static str,
    /// Bare language code, e.g. "en"
    pub code: &'static str,
    /// Human-readable name, e.g. "English"
    pub name: &'static str,
}

/// Fixed table of languages the interpreter supports.
pub const SUPPORTED_LANGUAGES: &[Language] = &[
    Language { tag: "en-US", code: "en", name: "English" },
    Language { tag: "es-ES", code: "es", name: "Spanish" },
    Language { tag: "fr-FR", code: "fr", name: "French" },
    Language { tag: "de-DE", code: "de", name: "German" },
    Language { tag: "it-IT", code: "it", name: "Italian" },
    Language { tag: "pt-BR", code: "pt", name: "Portuguese" },
    Language { tag: "ja-JP", code: "ja", name: "Japanese" },
    Language { tag: "zh-CN", code: "zh", name: "Chinese (Simplified)" },
    Language { tag: "ko-KR", code: "ko", name: "Korean" },
    Language { tag: "ru-RU", code: "ru", name: "Russian" },
    Language { tag: "ar-SA", code: "ar", name: "Arabic" },
    Language { tag: "vi-VN", code: "vi", name: "Vietnamese" },
    Language { tag: "hi-IN", code: "hi", name: "Hindi" },
    Language { tag: "te-IN", code: "te", name: "Telugu" },
    Language { tag: "ta-IN", code: "ta", name: "Tamil" },
];

/// Default output language for translation (matches the UI default).
pub const DEFAULT_OUTPUT_LANGUAGE: &str = "es-ES";

/// Default detected language before any transcription has run.
pub const DEFAULT_DETECTED_LANGUAGE: &str = "en";

/// Resolve a locale tag or bare code to a human-readable name.
///
/// Identifiers absent from the table pass through unchanged, so the
/// translation prompt still names the language something sensible.
pub fn display_name(id: &str) -> &str {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|lang| lang.tag == id || lang.code == id)
        .map(|lang| lang.name)
        .unwrap_or(id)
}

/// Map a locale tag to its bare language code ("en-US" -> "en").
/// Unknown tags pass through unchanged.
pub fn tag_to_code(tag: &str) -> &str {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|lang| lang.tag == tag)
        .map(|lang| lang.code)
        .unwrap_or(tag)
}
