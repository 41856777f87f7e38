#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod conflict;
mod diagonal;
#[cfg(feature = "std")]
mod logging;
mod observer;

pub use board::*;
pub use common::*;
pub use conflict::*;
pub use diagonal::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use observer::*;
