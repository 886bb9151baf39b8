use embassy_time::Duration;
use heapless::Vec;

use super::note::{Beat, Note};

/// Turns note length divisors into wall time.
///
/// A note with divisor `d` owns a slot of `whole_note / d`. The tone sounds
/// for `articulation_num / articulation_den` of the slot and the rest of the
/// slot is silence, so consecutive notes of the same pitch stay distinct.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tempo {
    whole_note: Duration,
    articulation_num: u32,
    articulation_den: u32,
}

impl Tempo {
    /// 1 s whole note (a quarter note is 250 ms), 90% of each slot sounding.
    pub const DEFAULT: Tempo = Tempo::new(Duration::from_millis(1000), 9, 10);

    pub const fn new(whole_note: Duration, articulation_num: u32, articulation_den: u32) -> Self {
        assert!(articulation_den != 0, "articulation denominator is zero");
        assert!(articulation_num <= articulation_den, "articulation exceeds the note slot");

        Tempo {
            whole_note,
            articulation_num,
            articulation_den,
        }
    }

    /// Tempo in quarter notes per minute, default articulation.
    pub const fn from_bpm(bpm: u32) -> Self {
        assert!(bpm != 0, "bpm is zero");

        Tempo::new(
            Duration::from_micros(4 * 60_000_000 / bpm as u64),
            Tempo::DEFAULT.articulation_num,
            Tempo::DEFAULT.articulation_den,
        )
    }

    pub const fn whole_note(&self) -> Duration {
        self.whole_note
    }

    /// Time owned by a note with divisor `duration`. A zero divisor owns no time.
    pub const fn slot(&self, duration: u8) -> Duration {
        if duration == 0 {
            return Duration::from_ticks(0);
        }

        Duration::from_ticks(self.whole_note.as_ticks() / duration as u64)
    }

    /// Portion of a slot during which the tone sounds.
    pub const fn sounding(&self, duration: u8) -> Duration {
        let slot = self.slot(duration).as_ticks();
        Duration::from_ticks(slot * self.articulation_num as u64 / self.articulation_den as u64)
    }

    /// Expands a note into the beats that play it. Rests and zero length
    /// pieces are folded so every returned beat has a non-zero duration.
    pub fn beats(&self, note: &Note) -> Vec<Beat, 2> {
        let mut beats = Vec::new();

        let slot = self.slot(note.duration);
        if slot.as_ticks() == 0 {
            return beats;
        }

        if note.is_rest() {
            let _ = beats.push(Beat::Rest(slot));
            return beats;
        }

        let sounding = self.sounding(note.duration);
        let gap = slot - sounding;

        if sounding.as_ticks() != 0 {
            let _ = beats.push(Beat::Note {
                tone: note.pitch,
                duration: sounding,
            });
        }

        if gap.as_ticks() != 0 {
            let _ = beats.push(Beat::Rest(gap));
        }

        beats
    }
}

impl Default for Tempo {
    fn default() -> Self {
        Tempo::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::pitches::{NOTE_C4, REST};

    #[test]
    fn quarter_note_slot() {
        let tempo = Tempo::DEFAULT;

        assert_eq!(tempo.slot(4), Duration::from_millis(250));
        assert_eq!(tempo.slot(8), Duration::from_millis(125));
        assert_eq!(tempo.slot(1), Duration::from_millis(1000));
    }

    #[test]
    fn note_splits_into_tone_and_gap() {
        let beats = Tempo::DEFAULT.beats(&Note::new(NOTE_C4, 4));

        assert_eq!(
            beats.as_slice(),
            &[
                Beat::Note {
                    tone: NOTE_C4,
                    duration: Duration::from_millis(225)
                },
                Beat::Rest(Duration::from_millis(25)),
            ]
        );
    }

    #[test]
    fn rest_fills_whole_slot() {
        let beats = Tempo::DEFAULT.beats(&Note::new(REST, 2));

        assert_eq!(beats.as_slice(), &[Beat::Rest(Duration::from_millis(500))]);
    }

    #[test]
    fn legato_has_no_gap() {
        let tempo = Tempo::new(Duration::from_millis(800), 1, 1);
        let beats = tempo.beats(&Note::new(NOTE_C4, 8));

        assert_eq!(
            beats.as_slice(),
            &[Beat::Note {
                tone: NOTE_C4,
                duration: Duration::from_millis(100)
            }]
        );
    }

    #[test]
    fn zero_duration_is_empty() {
        assert!(Tempo::DEFAULT.beats(&Note::new(NOTE_C4, 0)).is_empty());
        assert_eq!(Tempo::DEFAULT.slot(0), Duration::from_ticks(0));
    }

    #[test]
    fn bpm_sets_quarter_note() {
        let tempo = Tempo::from_bpm(120);

        assert_eq!(tempo.slot(4), Duration::from_millis(500));
        assert_eq!(tempo.whole_note(), Duration::from_secs(2));
    }
}
