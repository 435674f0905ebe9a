//! Percent encoding and parameter normalization.

use log::trace;
use percent_encoding::utf8_percent_encode;

use crate::constants::OAUTH_ENCODE_SET;
use crate::parameters::Parameters;

/// Percent encode `input` the way OAuth 1.0 requires.
///
/// Only `A-Z a-z 0-9 - . _ ~` are left alone. Everything else, including
/// `/ + ! * ' ( )` that common URL encoders keep, is encoded as `%XX`. A space
/// becomes `%20`, never `+`.
///
/// ```
/// use oauth1_signer::oauth_escape;
///
/// assert_eq!(oauth_escape("a b+c!d*\\e(f)g+h"), "a%20b%2Bc%21d%2A%5Ce%28f%29g%2Bh");
/// assert_eq!(oauth_escape(""), "");
/// ```
pub fn oauth_escape(input: &str) -> String {
    utf8_percent_encode(input, &OAUTH_ENCODE_SET).to_string()
}

/// Returns true for names such as `oauth_secret` or `shared_secret` that must never be signed.
///
/// A leading `_secret` does not count.
pub(crate) fn is_secret_name(name: &str) -> bool {
    name.match_indices("_secret").any(|(idx, _)| idx > 0)
}

/// Build the normalized parameter string.
///
/// Names are visited in byte order, secret-bearing names are skipped, the values
/// of a multi-valued parameter are sorted and emitted one pair each, and every
/// name and value is encoded with [`oauth_escape`]. Pairs are joined with `&`.
pub fn normalize(params: &Parameters) -> String {
    let mut pairs = Vec::with_capacity(params.len());

    for (name, value) in params {
        if is_secret_name(name) {
            continue;
        }

        let name = oauth_escape(name);
        let mut values: Vec<&str> = value.iter().collect();
        values.sort_unstable();
        for v in values {
            pairs.push(format!("{name}={}", oauth_escape(v)));
        }
    }

    let normalized = pairs.join("&");
    trace!("normalized parameters: {normalized}");
    normalized
}
