#![cfg_attr(not(feature = "std"), no_std)]

//! Engine for m,n,k games: k marks in a row on a `width` × `height` board.

extern crate alloc;

mod board;
pub mod cases;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
