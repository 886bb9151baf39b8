use crate::drivers::audio::PlayTone;
use crate::time::NoteTimer;

use super::note::{Beat, Song};
use super::tempo::Tempo;
use super::AudioError;

/// Plays every note of `song` on `audio_driver`, holding each beat on `timer`,
/// and leaves the output silent. Song data is not validated.
pub async fn play_song<D: PlayTone, T: NoteTimer>(
    audio_driver: &mut D,
    timer: &mut T,
    tempo: &Tempo,
    song: &Song,
) {
    trace!("playing song of {} notes", song.len());

    for note in song.iter() {
        if note.duration == 0 {
            warn!("skipping zero length note at {} Hz", note.pitch);
            continue;
        }

        for beat in tempo.beats(note) {
            play_beat(audio_driver, timer, beat).await;
        }
    }

    audio_driver.play_tone(0);
}

async fn play_beat<D: PlayTone, T: NoteTimer>(audio_driver: &mut D, timer: &mut T, beat: Beat) {
    match beat {
        Beat::Note { tone, duration } => {
            audio_driver.play_tone(tone);
            timer.hold(duration).await;
        }
        Beat::Rest(duration) => {
            audio_driver.play_tone(0);
            timer.hold(duration).await;
        }
    }
}

pub struct TonePlayer<'a, D: PlayTone, T: NoteTimer> {
    audio_driver: D,
    timer: T,
    tempo: Tempo,
    song: Option<&'a Song>,
}

impl<'a, D: PlayTone, T: NoteTimer> TonePlayer<'a, D, T> {
    pub fn new(audio_driver: D, timer: T) -> Self {
        Self::with_tempo(audio_driver, timer, Tempo::DEFAULT)
    }

    pub fn with_tempo(audio_driver: D, timer: T, tempo: Tempo) -> Self {
        TonePlayer {
            audio_driver,
            timer,
            tempo,
            song: None,
        }
    }

    pub fn tempo(&self) -> Tempo {
        self.tempo
    }

    pub fn set_tempo(&mut self, tempo: Tempo) {
        self.tempo = tempo;
    }

    /// Checks that the driver can reproduce every pitch and that no note is
    /// zero length, then keeps the song for [`TonePlayer::play_song`].
    pub fn load_song(&mut self, song: &'a Song) -> Result<(), AudioError> {
        for note in song.iter() {
            if note.duration == 0 {
                return Err(AudioError::InvalidDuration);
            }

            if !note.is_rest() && !self.audio_driver.can_play_tone(note.pitch) {
                return Err(AudioError::UnplayablePitch);
            }
        }

        self.song = Some(song);

        Ok(())
    }

    pub async fn play_song(&mut self) {
        if let Some(song) = self.song {
            play_song(&mut self.audio_driver, &mut self.timer, &self.tempo, song).await;
        }
    }

    /// Plays `song` without going through [`TonePlayer::load_song`].
    pub async fn play(&mut self, song: &Song) {
        play_song(&mut self.audio_driver, &mut self.timer, &self.tempo, song).await;
    }

    pub fn into_inner(self) -> (D, T) {
        (self.audio_driver, self.timer)
    }
}
