#![allow(dead_code)]

use core::cell::RefCell;

use ateam_piezo::{drivers::audio::PlayTone, time::NoteTimer};
use embassy_time::Duration;
use heapless::Vec;

pub const LOG_DEPTH: usize = 512;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Tone(u16),
    Hold(Duration),
}

pub type EventLog = RefCell<Vec<Event, LOG_DEPTH>>;

pub fn new_log() -> EventLog {
    RefCell::new(Vec::new())
}

/// Buzzer stand-in with the range of the real piezo driver.
pub struct RecordingBuzzer<'a> {
    pub log: &'a EventLog,
}

impl PlayTone for RecordingBuzzer<'_> {
    fn play_tone(&mut self, tone: u16) {
        self.log.borrow_mut().push(Event::Tone(tone)).unwrap();
    }

    fn can_play_tone(&self, tone: u16) -> bool {
        35 < tone && tone < 7000
    }
}

/// Records hold requests and returns immediately.
pub struct RecordingTimer<'a> {
    pub log: &'a EventLog,
}

impl NoteTimer for RecordingTimer<'_> {
    async fn hold(&mut self, duration: Duration) {
        self.log.borrow_mut().push(Event::Hold(duration)).unwrap();
    }
}

/// Pairs every hold with the tone that was sounding during it.
pub fn timeline(log: &EventLog) -> Vec<(u16, Duration), LOG_DEPTH> {
    let mut sounding = 0;
    let mut out = Vec::new();

    for event in log.borrow().iter() {
        match *event {
            Event::Tone(tone) => sounding = tone,
            Event::Hold(duration) => out.push((sounding, duration)).unwrap(),
        }
    }

    out
}
