/******************************************************************************
   Author: Ken Igarashi
   Email: sccs@soracom.jp
   Date: 19/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use std::time::Duration;
use tracing::error;

/// Reads and parses an environment variable, falling back to `default`
///
/// A variable that is present but cannot be parsed is logged and ignored.
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

/// Reads and parses an environment variable, returning `None` if missing or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) if !val.trim().is_empty() => val.trim().parse::<T>().ok(),
        _ => None,
    }
}

/// Reads a number of seconds from the environment as a [`Duration`]
pub fn get_env_secs_or_default(env_var: &str, default_secs: u64) -> Duration {
    Duration::from_secs(get_env_or_default(env_var, default_secs))
}

/// Converts a duration to whole milliseconds, saturating at `u64::MAX`
pub fn duration_to_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Converts seconds to milliseconds, saturating at `u64::MAX`
pub fn secs_to_millis(secs: u64) -> u64 {
    secs.saturating_mul(1000)
}
