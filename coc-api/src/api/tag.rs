use urlencoding::{decode, encode};

/// Canonical, percent-encoded form of a player, clan or war tag.
///
/// Letter `O` never appears in tags and is always a mistyped zero.
pub fn parse_tag(tag: &str) -> String {
    let raw = decode(tag).map(|t| t.into_owned()).unwrap_or_else(|_| tag.to_string());
    let bare = raw.to_uppercase().replace('O', "0").replace('#', "");

    encode(&format!("#{}", bare)).into_owned()
}
