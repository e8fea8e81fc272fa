/// Endonyms keyed by language subtag (and a few full tags where the host
/// distinguishes regional variants).
const ENDONYMS: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("ar", "العربية"),
    ("bg", "български"),
    ("bs", "bosanski"),
    ("ca", "català"),
    ("cs", "čeština"),
    ("da", "dansk"),
    ("de", "Deutsch"),
    ("el", "Ελληνικά"),
    ("en", "English"),
    ("en-au", "Australian English"),
    ("en-gb", "British English"),
    ("en-us", "American English"),
    ("es", "español"),
    ("et", "eesti"),
    ("fa", "فارسی"),
    ("fi", "suomi"),
    ("fo", "føroyskt"),
    ("fr", "français"),
    ("fr-ca", "français canadien"),
    ("gl", "galego"),
    ("he", "עברית"),
    ("hr", "hrvatski"),
    ("hu", "magyar"),
    ("id", "Indonesia"),
    ("is", "íslenska"),
    ("it", "italiano"),
    ("ja", "日本語"),
    ("ka", "ქართული"),
    ("ko", "한국어"),
    ("lt", "lietuvių"),
    ("lv", "latviešu"),
    ("mr", "मराठी"),
    ("ms", "Melayu"),
    ("nb", "norsk bokmål"),
    ("nl", "Nederlands"),
    ("nn", "nynorsk"),
    ("oc", "occitan"),
    ("pl", "polski"),
    ("pt", "português"),
    ("pt-br", "português do Brasil"),
    ("ro", "română"),
    ("ru", "русский"),
    ("sk", "slovenčina"),
    ("sl", "slovenščina"),
    ("sr", "српски"),
    ("sv", "svenska"),
    ("ta", "தமிழ்"),
    ("tr", "Türkçe"),
    ("tt", "татар"),
    ("uk", "українська"),
    ("vi", "Tiếng Việt"),
    ("yi", "ייִדיש"),
    ("zh-hans", "简体中文"),
    ("zh-hant", "繁體中文"),
];

/// Display name of a locale in its own language.
///
/// Tags are matched case-insensitively with `_` treated as `-`; a full-tag
/// match wins over the language subtag. Unknown tags are returned unchanged.
pub fn endonym(locale: &str) -> String {
    let tag = locale.replace('_', "-").to_ascii_lowercase();
    let language = tag.split('-').next().unwrap_or(&tag);

    lookup(&tag)
        .or_else(|| lookup(language))
        .map(String::from)
        .unwrap_or_else(|| locale.to_string())
}

fn lookup(tag: &str) -> Option<&'static str> {
    ENDONYMS
        .iter()
        .find(|(code, _)| *code == tag)
        .map(|(_, name)| *name)
}
