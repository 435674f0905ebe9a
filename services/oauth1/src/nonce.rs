use rand::distributions::Alphanumeric;
use rand::Rng;

/// Generate a random nonce of `len` characters.
///
/// Characters are drawn uniformly from `0-9 A-Z a-z`. Nonces only need to be
/// unique within one timestamp window, so the thread-local generator is enough.
pub fn generate_nonce(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
