pub mod note;
pub mod pitches;
pub mod song_queue;
pub mod songs;
pub mod tempo;
pub mod tone_player;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AudioError {
    UnplayablePitch,
    InvalidDuration,
}
