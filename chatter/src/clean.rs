/// Strips the parts of a discord message that aren't meant for the chat bot:
/// a quoted line, a leading @mention and any stray @ signs. Returns None when
/// nothing is left to talk about.
///
/// `mention_names` are the display names of the users mentioned in the message.
pub fn clean_message(content: &str, mention_names: &[String]) -> Option<String> {
    let mut msg = content.to_owned();

    // a quote reply, the actual message is on the line after the quote
    if msg.starts_with('>') {
        msg = msg.lines().nth(1)?.to_owned();
    }

    if msg.starts_with('@') {
        let mut found_mention = false;
        for name in mention_names {
            let tag = format!("@{name}");
            if msg.starts_with(&tag) {
                msg = msg.replacen(&tag, "", 1);
                found_mention = true;
            }
        }
        if !found_mention {
            let (_, rest) = msg.split_once(' ')?;
            msg = rest.to_owned();
        }
    }

    let msg = msg.replace('@', "");
    let msg = msg.trim();
    (!msg.is_empty()).then(|| msg.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: &[&str]) -> Vec<String> {
        n.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn strips_leading_mention() {
        assert_eq!(
            clean_message("@Stacked how are you", &names(&["Stacked"])).as_deref(),
            Some("how are you")
        );
    }

    #[test]
    fn unknown_mention_drops_first_word() {
        assert_eq!(
            clean_message("@someone hello there", &[]).as_deref(),
            Some("hello there")
        );
        assert_eq!(clean_message("@someone", &[]), None);
    }

    #[test]
    fn quote_replies_use_second_line() {
        assert_eq!(
            clean_message("> old message\nnew message", &[]).as_deref(),
            Some("new message")
        );
        assert_eq!(clean_message("> only a quote", &[]), None);
    }

    #[test]
    fn stray_at_signs_are_removed() {
        assert_eq!(
            clean_message("ask @Bob about it", &names(&["Bob"])).as_deref(),
            Some("ask Bob about it")
        );
    }

    #[test]
    fn plain_messages_pass_through() {
        assert_eq!(clean_message("  hi  ", &[]).as_deref(), Some("hi"));
        assert_eq!(clean_message("   ", &[]), None);
    }
}
