//! fracdrill-core: fraction arithmetic and quiz sessions.
//!
//! This crate holds everything the fracdrill quizzes need apart from a
//! display: the mixed-number arithmetic engine, answer normalization, the
//! built-in question banks, the session state machines, and the game drivers
//! that talk to a `Renderer`.

pub mod bank;
pub mod config;
pub mod error;
pub mod fraction;
pub mod game;
pub mod grade;
pub mod mock;
pub mod model;
pub mod normalize;
pub mod report;
pub mod session;
pub mod source;
pub mod timer;
pub mod traits;

pub use error::{BankError, CueError, FractionError, SessionError};
pub use fraction::{compute, simplify, MixedNumber, Operator};
pub use normalize::clean_input;
