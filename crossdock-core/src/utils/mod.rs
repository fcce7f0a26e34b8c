//! Helper functionality shared by the engine modules.

mod environment;
pub use self::environment::{Environment, InfoLogger, Quota};

mod error;
pub use self::error::{GenericError, GenericResult};

mod random;
pub use self::random::{DefaultRandom, Random};
