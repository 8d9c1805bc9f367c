// tests/support/mocks/mod.rs
//! Test doubles for the monument ports.
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod monument_repos;
pub mod time;
pub mod util;

pub use monument_repos::{AlwaysTakenRead, InMemoryMonumentStore, RacingWriter};
pub use time::{FixedClock, fixed_now};
pub use util::StubTransliterator;
