#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod api;
mod bitboard;
mod board;
mod common;
mod config;
mod game;
mod mark;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod shared;
#[cfg(feature = "std")]
mod view;

pub use api::*;
pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use mark::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use shared::*;
#[cfg(feature = "std")]
pub use view::*;
