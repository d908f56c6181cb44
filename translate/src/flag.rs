const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;
const REGIONAL_INDICATOR_Z: u32 = 0x1F1FF;

/// maps a regional indicator symbol to its ascii letter
fn indicator_letter(c: char) -> Option<char> {
    let cp = c as u32;
    if (REGIONAL_INDICATOR_A..=REGIONAL_INDICATOR_Z).contains(&cp) {
        char::from_u32('a' as u32 + (cp - REGIONAL_INDICATOR_A))
    } else {
        None
    }
}

/// Lower-case ISO 3166 country code of a flag emoji, e.g. 🇫🇷 -> "fr".
/// Anything that isn't exactly two regional indicators is not a flag.
pub fn country_code(emoji: &str) -> Option<String> {
    let letters = emoji
        .chars()
        .map(indicator_letter)
        .collect::<Option<String>>()?;
    (letters.len() == 2).then_some(letters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_flags() {
        assert_eq!(country_code("🇫🇷").as_deref(), Some("fr"));
        assert_eq!(country_code("🇯🇵").as_deref(), Some("jp"));
        assert_eq!(country_code("🇺🇸").as_deref(), Some("us"));
    }

    #[test]
    fn rejects_other_emoji() {
        assert_eq!(country_code("🐈"), None);
        assert_eq!(country_code("👍🏽"), None);
        assert_eq!(country_code("🇫"), None);
        assert_eq!(country_code("🇫🇷🇩🇪"), None);
        assert_eq!(country_code(""), None);
    }
}
