use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};

/// Returns a random alphanumeric string of a certain size.
#[must_use]
pub fn string(size: usize) -> String {
    thread_rng().sample_iter(&Alphanumeric).take(size).map(char::from).collect()
}

/// Returns a random name that is a valid score table name.
///
/// It always starts with a letter so it can be used as an SQL identifier.
#[must_use]
pub fn table_name() -> String {
    format!("t_{}", string(12).to_lowercase())
}
