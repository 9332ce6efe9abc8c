//! Invitation link parsing.

use std::ffi::OsString;

/// Query parameter holding the invitation id.
const ID_KEY: &str = "id";

/// Extracts the invitation id from a link.
///
/// Accepts a full URL (`https://host/intake?id=abc`) or a bare query string
/// (`id=abc&utm=x`). The first `id` parameter wins; its value is
/// percent-decoded with `+` read as a space. Returns `None` when the
/// parameter is missing or its value is empty.
pub fn extract_id(link: &str) -> Option<String> {
    let link = link.split('#').next().unwrap_or_default();
    let query = match link.split_once('?') {
        Some((_, query)) => query,
        None if link.contains('=') => link,
        None => return None,
    };

    query
        .split('&')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key) == ID_KEY).then(|| decode(value))
        })
        .next()
        .filter(|id| !id.is_empty())
}

/// Returns the invitation link passed as the first program argument, or an
/// empty string when there is none. Non-UTF-8 bytes are replaced rather than
/// rejected so a mangled link still reaches [`extract_id`].
pub fn link_from_args(args: impl IntoIterator<Item = OsString>) -> String {
    args.into_iter()
        .nth(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn decode(component: &str) -> String {
    let spaced = component.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}
