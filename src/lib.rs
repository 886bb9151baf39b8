#![cfg_attr(not(test), no_std)]

#![allow(async_fn_in_trait)]  // NoteTimer futures carry no Send bound

// must come first so the logging macros are visible to every module below
#[macro_use]
mod fmt;

pub mod audio;
pub mod drivers;
pub mod time;

#[cfg(feature = "stm32")]
pub mod pins;
#[cfg(feature = "stm32")]
pub mod tasks;
