use rand::Rng;
use rand::distributions::Alphanumeric;

/// Short join token for a class. Random alphanumeric, unique-ish by size of
/// the space rather than by constraint; collisions are a documented
/// data-quality risk, not an enforced invariant.
pub fn generate_invite_code() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect()
}
