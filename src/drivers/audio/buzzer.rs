use embassy_stm32::{
    time::hz,
    timer::{simple_pwm::SimplePwm, Channel, GeneralInstance4Channel},
};
use num_traits::clamp;

use super::PlayTone;

pub const BUZZER_MIN_FREQ: u16 = 35;
pub const BUZZER_MAX_FREQ: u16 = 7000;

/// Piezo buzzer driven by one channel of a PWM timer at 50% duty.
pub struct Buzzer<'d, T: GeneralInstance4Channel> {
    pwm: SimplePwm<'d, T>,
    channel: Channel,

    min_freq: u16,
    max_freq: u16,
}

impl<'d, T: GeneralInstance4Channel> Buzzer<'d, T> {
    pub fn new(pwm: SimplePwm<'d, T>, channel: Channel) -> Self {
        Self::new_with_freq_range(pwm, channel, BUZZER_MIN_FREQ, BUZZER_MAX_FREQ)
    }

    pub fn new_with_freq_range(pwm: SimplePwm<'d, T>, channel: Channel, min_freq: u16, max_freq: u16) -> Self {
        let mut buzzer = Buzzer {
            pwm,
            channel,
            min_freq,
            max_freq,
        };

        // start silent, the first play_tone call enables the channel
        buzzer.pwm.channel(buzzer.channel).disable();

        buzzer
    }
}

impl<'d, T: GeneralInstance4Channel> PlayTone for Buzzer<'d, T> {
    fn play_tone(&mut self, tone: u16) {
        if tone == 0 {
            self.pwm.channel(self.channel).disable();
            return;
        }

        let freq = clamp(tone, self.min_freq, self.max_freq);
        if freq != tone {
            warn!("buzzer clamped {} Hz to {} Hz", tone, freq);
        }

        self.pwm.set_frequency(hz(freq.into()));

        let mut ch = self.pwm.channel(self.channel);
        ch.set_duty_cycle_fraction(1, 2);
        ch.enable();
    }

    fn can_play_tone(&self, tone: u16) -> bool {
        self.min_freq < tone && tone < self.max_freq
    }
}
