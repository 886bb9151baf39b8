#![allow(dead_code)]

use embassy_stm32::peripherals::*;
use embassy_sync::blocking_mutex::raw::ThreadModeRawMutex;

use crate::audio::song_queue::{SongQueue, SongQueueReceiver, SongQueueSender};

/////////////////////
//  Channel Types  //
/////////////////////

pub type SongRequestQueue = SongQueue<ThreadModeRawMutex>;
pub type SongRequestSender = SongQueueSender<'static, ThreadModeRawMutex>;
pub type SongRequestReceiver = SongQueueReceiver<'static, ThreadModeRawMutex>;

/////////////
//  Audio  //
/////////////

pub type BuzzerTimer = TIM15;
pub type BuzzerPin = PE6;
