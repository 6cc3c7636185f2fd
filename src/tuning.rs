/*!
 * Tunable thresholds of the assignment engine.
 *
 * None of these values change what an assignment computes, only how: whether large transfers
 * bypass the cache and when a column is large enough to be worth handing to a parallel backend.
 * They are read from a process wide [Tuning] that defaults to values suited to a 3 MiB last
 * level cache, and which can be replaced with [Tuning::install], for example from
 * [Tuning::from_env] at startup.
 *
 * With the `serde` feature enabled a Tuning can also be deserialised from a configuration file.
 */

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Environment variable overriding [Tuning::use_streaming].
pub const USE_STREAMING_VARIABLE: &str = "COLUMN_VIEWS_USE_STREAMING";
/// Environment variable overriding [Tuning::cache_size].
pub const CACHE_SIZE_VARIABLE: &str = "COLUMN_VIEWS_CACHE_SIZE";
/// Environment variable overriding [Tuning::smp_assign_threshold].
pub const SMP_ASSIGN_THRESHOLD_VARIABLE: &str = "COLUMN_VIEWS_SMP_ASSIGN_THRESHOLD";

const DEFAULT_USE_STREAMING: bool = true;
const DEFAULT_CACHE_SIZE: usize = 3_145_728;
const DEFAULT_SMP_ASSIGN_THRESHOLD: usize = 38_000;

static USE_STREAMING: AtomicBool = AtomicBool::new(DEFAULT_USE_STREAMING);
static CACHE_SIZE: AtomicUsize = AtomicUsize::new(DEFAULT_CACHE_SIZE);
static SMP_ASSIGN_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_SMP_ASSIGN_THRESHOLD);

/**
 * Hardware derived parameters of the assignment engine.
 */
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Tuning {
    /**
     * Whether large dense assignments may use cache bypassing stores.
     */
    pub use_streaming: bool,
    /**
     * Size in bytes of the cache that streaming stores avoid polluting.
     */
    pub cache_size: usize,
    /**
     * Column length above which an assignment may be delegated to a parallel backend.
     */
    pub smp_assign_threshold: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            use_streaming: DEFAULT_USE_STREAMING,
            cache_size: DEFAULT_CACHE_SIZE,
            smp_assign_threshold: DEFAULT_SMP_ASSIGN_THRESHOLD,
        }
    }
}

impl Tuning {
    /**
     * Returns the process wide tuning currently in effect.
     */
    pub fn current() -> Tuning {
        Tuning {
            use_streaming: USE_STREAMING.load(Ordering::Relaxed),
            cache_size: CACHE_SIZE.load(Ordering::Relaxed),
            smp_assign_threshold: SMP_ASSIGN_THRESHOLD.load(Ordering::Relaxed),
        }
    }

    /**
     * Makes this tuning the process wide tuning used by every subsequent assignment.
     *
     * Assignments already running on other threads may observe a mix of the old and new
     * values, which only affects which transfer path they take.
     */
    pub fn install(self) {
        USE_STREAMING.store(self.use_streaming, Ordering::Relaxed);
        CACHE_SIZE.store(self.cache_size, Ordering::Relaxed);
        SMP_ASSIGN_THRESHOLD.store(self.smp_assign_threshold, Ordering::Relaxed);
        tracing::debug!(tuning = ?self, "installed column view tuning");
    }

    /**
     * Reads a tuning from the `COLUMN_VIEWS_*` environment variables, using the default for any
     * variable that is unset or cannot be parsed.
     */
    pub fn from_env() -> Tuning {
        Tuning::from_lookup(|key| std::env::var(key).ok())
    }

    /**
     * Builds a tuning from a key value lookup using the same keys as
     * [from_env](Tuning::from_env).
     *
     * ```
     * use column_views::tuning::Tuning;
     * let tuning = Tuning::from_lookup(|key| match key {
     *     "COLUMN_VIEWS_CACHE_SIZE" => Some("1048576".to_string()),
     *     _ => None,
     * });
     * assert_eq!(tuning.cache_size, 1048576);
     * assert_eq!(tuning.use_streaming, Tuning::default().use_streaming);
     * ```
     */
    pub fn from_lookup<F>(lookup: F) -> Tuning
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Tuning::default();
        Tuning {
            use_streaming: parse_or(&lookup, USE_STREAMING_VARIABLE, defaults.use_streaming),
            cache_size: parse_or(&lookup, CACHE_SIZE_VARIABLE, defaults.cache_size),
            smp_assign_threshold: parse_or(
                &lookup,
                SMP_ASSIGN_THRESHOLD_VARIABLE,
                defaults.smp_assign_threshold,
            ),
        }
    }

    /**
     * The column length above which a dense assignment of `T` elements uses streaming stores,
     * a third of the cache measured in elements.
     */
    pub fn streaming_threshold<T>(&self) -> usize {
        self.cache_size / (std::mem::size_of::<T>().max(1) * 3)
    }

    /**
     * Whether an assignment of `length` elements of `T` that cannot alias its source should
     * stream.
     */
    pub fn should_stream<T>(&self, length: usize) -> bool {
        self.use_streaming && length > self.streaming_threshold::<T>()
    }
}

fn parse_or<F, V>(lookup: &F, key: &str, default: V) -> V
where
    F: Fn(&str) -> Option<String>,
    V: std::str::FromStr,
{
    match lookup(key) {
        None => default,
        Some(text) => match text.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(key, value = %text, "ignoring unparsable tuning value");
                default
            }
        },
    }
}
