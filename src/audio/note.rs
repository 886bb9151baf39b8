use embassy_time::Duration;

use super::pitches::REST;

pub const MAX_SONG_LEN: usize = 100;

/// One entry of a song table.
///
/// `pitch` is a frequency in Hz, or [`REST`] for silence. `duration` is the
/// note length divisor: 1 is a whole note, 4 a quarter, 8 an eighth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Note {
    pub pitch: u16,
    pub duration: u8,
}

impl Note {
    pub const fn new(pitch: u16, duration: u8) -> Self {
        Note { pitch, duration }
    }

    pub const fn rest(duration: u8) -> Self {
        Note { pitch: REST, duration }
    }

    pub const fn is_rest(&self) -> bool {
        self.pitch == REST
    }
}

/// A timed unit of playback, produced from a [`Note`] by a
/// [`Tempo`](super::tempo::Tempo).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Beat {
    Note { tone: u16, duration: Duration },
    Rest(Duration),
}

impl Beat {
    pub const fn duration(&self) -> Duration {
        match self {
            Beat::Note { tone: _, duration } => *duration,
            Beat::Rest(duration) => *duration,
        }
    }
}

/// Fixed capacity song table. Only the first `len()` notes are ever played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Song {
    notes: [Note; MAX_SONG_LEN],
    len: usize,
}

impl Song {
    /// Builds a song from a note list. Used in a `static` initializer, a list
    /// longer than [`MAX_SONG_LEN`] fails to compile.
    pub const fn new(notes: &[Note]) -> Self {
        assert!(notes.len() <= MAX_SONG_LEN, "song is longer than MAX_SONG_LEN");

        let mut table = [Note::rest(0); MAX_SONG_LEN];
        let mut i = 0;
        while i < notes.len() {
            table[i] = notes[i];
            i += 1;
        }

        Song {
            notes: table,
            len: notes.len(),
        }
    }

    /// Builds a song from parallel melody and duration tables.
    pub const fn from_parts(melody: &[u16], durations: &[u8]) -> Self {
        assert!(melody.len() == durations.len(), "melody and durations differ in length");
        assert!(melody.len() <= MAX_SONG_LEN, "song is longer than MAX_SONG_LEN");

        let mut table = [Note::rest(0); MAX_SONG_LEN];
        let mut i = 0;
        while i < melody.len() {
            table[i] = Note::new(melody[i], durations[i]);
            i += 1;
        }

        Song {
            notes: table,
            len: melody.len(),
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes[..self.len]
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Note> {
        self.notes().iter()
    }
}

impl<'a> IntoIterator for &'a Song {
    type Item = &'a Note;
    type IntoIter = core::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::pitches::*;

    #[test]
    fn from_parts_pairs_tables() {
        let song = Song::from_parts(&[NOTE_C4, REST, NOTE_G3], &[4, 8, 2]);

        assert_eq!(song.len(), 3);
        assert_eq!(
            song.notes(),
            &[Note::new(NOTE_C4, 4), Note::rest(8), Note::new(NOTE_G3, 2)]
        );
    }

    #[test]
    fn unused_entries_are_hidden() {
        let song = Song::new(&[Note::new(NOTE_A4, 4)]);

        assert_eq!(song.iter().count(), 1);
        assert_eq!((&song).into_iter().next(), Some(&Note::new(NOTE_A4, 4)));
    }

    #[test]
    fn empty_song() {
        let song = Song::new(&[]);

        assert!(song.is_empty());
        assert!(song.notes().is_empty());
    }

    #[test]
    fn full_song_fits() {
        let song = Song::new(&[Note::new(NOTE_E5, 16); MAX_SONG_LEN]);

        assert_eq!(song.len(), MAX_SONG_LEN);
    }

    #[test]
    #[should_panic]
    fn overlong_song_is_rejected() {
        let notes = [Note::new(NOTE_E5, 16); MAX_SONG_LEN + 1];
        let _ = Song::new(&notes);
    }

    #[test]
    #[should_panic]
    fn mismatched_tables_are_rejected() {
        let _ = Song::from_parts(&[NOTE_C4, NOTE_D4], &[4]);
    }
}
