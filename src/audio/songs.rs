use super::note::Song;
use super::pitches::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SongId {
    Happy,
    Sad,
}

impl SongId {
    pub fn song(self) -> &'static Song {
        match self {
            SongId::Happy => &HAPPY_SONG,
            SongId::Sad => &SAD_SONG,
        }
    }
}

pub static HAPPY_SONG: Song = Song::from_parts(
    &[NOTE_C4, NOTE_G3, NOTE_G3, NOTE_A3, NOTE_G3, REST, NOTE_B3, NOTE_C4],
    &[4, 8, 8, 4, 4, 4, 4, 4],
);

// TODO: give the sad song its own melody, it still mirrors HAPPY_SONG
pub static SAD_SONG: Song = Song::from_parts(
    &[NOTE_C4, NOTE_G3, NOTE_G3, NOTE_A3, NOTE_G3, REST, NOTE_B3, NOTE_C4],
    &[4, 8, 8, 4, 4, 4, 4, 4],
);
