use std::collections::HashMap;

use common::Error;

const COUNTRY_LANGUAGES: &str = include_str!("../country_languages.data.in");

/// languages the translation service accepts as a destination
static SUPPORTED: &[(&str, &str)] = &[
    ("af", "afrikaans"),
    ("am", "amharic"),
    ("ar", "arabic"),
    ("az", "azerbaijani"),
    ("be", "belarusian"),
    ("bg", "bulgarian"),
    ("bn", "bengali"),
    ("bs", "bosnian"),
    ("ca", "catalan"),
    ("cs", "czech"),
    ("cy", "welsh"),
    ("da", "danish"),
    ("de", "german"),
    ("el", "greek"),
    ("en", "english"),
    ("es", "spanish"),
    ("et", "estonian"),
    ("eu", "basque"),
    ("fa", "persian"),
    ("fi", "finnish"),
    ("fr", "french"),
    ("fy", "frisian"),
    ("ga", "irish"),
    ("gd", "scots gaelic"),
    ("gl", "galician"),
    ("ha", "hausa"),
    ("hi", "hindi"),
    ("hr", "croatian"),
    ("ht", "haitian creole"),
    ("hu", "hungarian"),
    ("hy", "armenian"),
    ("id", "indonesian"),
    ("ig", "igbo"),
    ("is", "icelandic"),
    ("it", "italian"),
    ("iw", "hebrew"),
    ("ja", "japanese"),
    ("ka", "georgian"),
    ("kk", "kazakh"),
    ("km", "khmer"),
    ("ko", "korean"),
    ("ku", "kurdish"),
    ("ky", "kyrgyz"),
    ("la", "latin"),
    ("lb", "luxembourgish"),
    ("lo", "lao"),
    ("lt", "lithuanian"),
    ("lv", "latvian"),
    ("mg", "malagasy"),
    ("mi", "maori"),
    ("mk", "macedonian"),
    ("mn", "mongolian"),
    ("mr", "marathi"),
    ("ms", "malay"),
    ("mt", "maltese"),
    ("my", "myanmar"),
    ("ne", "nepali"),
    ("nl", "dutch"),
    ("no", "norwegian"),
    ("ny", "chichewa"),
    ("pa", "punjabi"),
    ("pl", "polish"),
    ("ps", "pashto"),
    ("pt", "portuguese"),
    ("ro", "romanian"),
    ("ru", "russian"),
    ("si", "sinhala"),
    ("sk", "slovak"),
    ("sl", "slovenian"),
    ("sm", "samoan"),
    ("sn", "shona"),
    ("so", "somali"),
    ("sq", "albanian"),
    ("sr", "serbian"),
    ("st", "sesotho"),
    ("sv", "swedish"),
    ("sw", "swahili"),
    ("ta", "tamil"),
    ("te", "telugu"),
    ("tg", "tajik"),
    ("th", "thai"),
    ("tl", "filipino"),
    ("tr", "turkish"),
    ("uk", "ukrainian"),
    ("ur", "urdu"),
    ("uz", "uzbek"),
    ("vi", "vietnamese"),
    ("xh", "xhosa"),
    ("yo", "yoruba"),
    ("zh-cn", "chinese (simplified)"),
    ("zh-tw", "chinese (traditional)"),
    ("zu", "zulu"),
];

/// english name of a supported destination language
pub fn language_name(code: &str) -> Option<&'static str> {
    SUPPORTED
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

pub fn is_supported(code: &str) -> bool {
    language_name(code).is_some()
}

/// Languages spoken in each country, most spoken first.
pub struct CountryLanguages {
    table: HashMap<String, Vec<String>>,
}

impl CountryLanguages {
    /// the table shipped with the bot
    pub fn bundled() -> Result<Self, Error> {
        Self::parse(COUNTRY_LANGUAGES)
    }

    /// Parses `code<TAB>{lang,lang}` lines. Lines starting with # are comments.
    pub fn parse(data: &str) -> Result<Self, Error> {
        let mut table = HashMap::new();
        for (n, line) in data.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (country, languages) = line
                .split_once('\t')
                .ok_or(format!("Malformed country language line {}: {line}", n + 1))?;
            let languages: Vec<String> = languages
                .replace(['{', '}'], "")
                .split(',')
                .map(|l| l.trim().to_owned())
                .filter(|l| !l.is_empty())
                .collect();
            table.insert(country.trim().to_lowercase(), languages);
        }
        Ok(Self { table })
    }

    /// the main language of the country
    pub fn primary(&self, country: &str) -> Option<&str> {
        self.table
            .get(country)
            .and_then(|langs| langs.first())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_table() {
        let langs = CountryLanguages::parse("# comment\nfr\t{fr}\nbe\t{nl,fr,de}\n\n").unwrap();
        assert_eq!(langs.len(), 2);
        assert_eq!(langs.primary("be"), Some("nl"));
        assert_eq!(langs.primary("fr"), Some("fr"));
        assert_eq!(langs.primary("de"), None);
    }

    #[test]
    fn malformed_lines_error() {
        assert!(CountryLanguages::parse("fr fr").is_err());
    }

    #[test]
    fn bundled_table_loads() {
        let langs = CountryLanguages::bundled().unwrap();
        assert_eq!(langs.primary("jp"), Some("ja"));
        assert_eq!(langs.primary("gb"), Some("en"));
        assert_eq!(langs.primary("cn"), Some("zh-cn"));
    }

    #[test]
    fn supported_languages() {
        assert_eq!(language_name("fr"), Some("french"));
        assert!(is_supported("zh-tw"));
        // dzongkha, bhutan's language
        assert!(!is_supported("dz"));
    }
}
