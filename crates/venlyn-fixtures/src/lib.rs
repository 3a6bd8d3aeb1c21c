//! Venlyn Fixtures
//!
//! Deterministic test-fixture generation for the Venlyn engines.
//!
//! The factory is seed-parameterized and never a module-level singleton:
//! tests request fresh, reproducible batches on demand, and the same seed
//! always yields the same records. An in-memory feed implements the domain
//! feed traits so integration tests and the CLI `seed` command can exercise
//! the same boundary the persistence layer would.

#![warn(missing_docs)]

mod factory;
mod feed;

pub use factory::FixtureFactory;
pub use feed::InMemoryFeed;
