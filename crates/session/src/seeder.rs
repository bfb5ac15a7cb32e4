//! Locale sample seeding.
//!
//! When the user switches language before the conversation has started, the
//! input buffer is pre-filled with a canonical phrase in that language so
//! there is something realistic to send straight away. Seeding never runs
//! once the transcript has entries, so it cannot clobber typed text
//! mid-conversation.

use sl_domain::locale::Locale;

/// Canonical sample phrase for a locale, if the table has one.
///
/// Each phrase is the same "my account is locked" request in the target
/// script. The default locale has no entry; a session starts there and
/// needs no sample.
pub fn sample_phrase(locale: Locale) -> Option<&'static str> {
    match locale {
        Locale::English => None,
        Locale::Hindi => Some("मेरा खाता लॉक हो गया है"),
        Locale::Tamil => Some("எனது கணக்கு பூட்டப்பட்டது"),
        Locale::Telugu => Some("నా ఖాతా లాక్ అయింది"),
        Locale::Marathi => Some("माझे खाते लॉक झाले आहे"),
        Locale::Bengali => Some("আমার অ্যাকাউন্ট লক হয়ে গেছে"),
        Locale::Gujarati => Some("મારું ખાતું લોક થયું છે"),
    }
}

/// The text to seed the input buffer with for `locale`.
///
/// Locales missing from the table fall back to a generic templated phrase
/// naming the locale.
pub fn seeded_input(locale: Locale) -> String {
    sample_phrase(locale)
        .map(str::to_owned)
        .unwrap_or_else(|| format!("Sample in {locale}"))
}
