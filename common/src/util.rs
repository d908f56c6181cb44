use std::{env, str::FromStr};

pub fn parse_env<T: FromStr>(name: &str) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .expect(&format!("Could not find env variable {}", name))
}

pub fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        None => s,
        Some((idx, _)) => &s[..idx],
    }
}

/// upper-cases the first character, lower-cases the rest
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
    }
}

pub fn remove_backticks(s: &str) -> String {
    s.replace("`", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo", 2), "hé");
        assert_eq!(truncate("abc", 10), "abc");
        assert_eq!(truncate("", 3), "");
    }

    #[test]
    fn capitalize_words() {
        assert_eq!(capitalize("mystical"), "Mystical");
        assert_eq!(capitalize("EMBLEM"), "Emblem");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn backticks_are_stripped() {
        assert_eq!(remove_backticks("```hi```"), "hi");
    }
}
