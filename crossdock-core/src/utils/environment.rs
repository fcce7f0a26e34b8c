//! Contains environment specific logic.

use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// A logger type which is called with various information.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Specifies a computational quota for executions. The main purpose is to allow to stop the search
/// in reaction to external events such as user cancellation or a timer.
pub trait Quota: Send + Sync {
    /// Returns true when computation should be stopped.
    fn is_reached(&self) -> bool;
}

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random + Send + Sync>,

    /// A global execution quota checked between search generations.
    pub quota: Option<Arc<dyn Quota + Send + Sync>>,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(
        random: Arc<dyn Random + Send + Sync>,
        quota: Option<Arc<dyn Quota + Send + Sync>>,
        logger: InfoLogger,
    ) -> Self {
        Self { random, quota, logger }
    }

    /// Creates an instance of `Environment` with a seeded random generator and defaults.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { random: Arc::new(DefaultRandom::new_with_seed(seed)), ..Self::default() }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(Arc::new(DefaultRandom::default()), None, Arc::new(|msg| println!("{msg}")))
    }
}
