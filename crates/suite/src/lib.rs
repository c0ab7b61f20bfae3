//! Breedcheck Suite - Fixtures for the end-to-end tests
//!
//! The tests in `tests/` exercise the dog-breed image service through the
//! request wrappers. By default they run against [`DogApiStub`], an
//! in-process imitation of the service; building with the `live-tests`
//! feature points them at the real service instead.

pub mod fixtures;
pub mod stub;

pub use fixtures::{ApiFixture, FixtureError};
pub use stub::{CATALOG, DogApiStub};
