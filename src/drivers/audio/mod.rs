#[cfg(feature = "stm32")]
pub mod buzzer;

pub trait PlayTone {
    /// Starts emitting `tone` Hz on the output. A tone of `0` silences it.
    fn play_tone(&mut self, tone: u16);
    fn can_play_tone(&self, tone: u16) -> bool;
}

impl<P: PlayTone + ?Sized> PlayTone for &mut P {
    fn play_tone(&mut self, tone: u16) {
        (**self).play_tone(tone)
    }

    fn can_play_tone(&self, tone: u16) -> bool {
        (**self).can_play_tone(tone)
    }
}
