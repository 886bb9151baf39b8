use embassy_executor::Spawner;
use embassy_stm32::{
    gpio::OutputType,
    time::khz,
    timer::{
        simple_pwm::{PwmPin, SimplePwm},
        Channel,
    },
};

use crate::{
    audio::{song_queue::play_next, songs::SongId, tone_player::TonePlayer},
    drivers::audio::buzzer::Buzzer,
    pins::{BuzzerPin, BuzzerTimer, SongRequestReceiver},
    time::EmbassyTimer,
};

pub type BuzzerTonePlayer = TonePlayer<'static, Buzzer<'static, BuzzerTimer>, EmbassyTimer>;

#[macro_export]
macro_rules! create_audio_task {
    ($main_spawner:ident, $song_requests:ident, $p:ident) => {
        ateam_piezo::tasks::audio_task::start_audio_task(
            &$main_spawner, $song_requests.receiver(), $p.TIM15, $p.PE6
        );
    };
}

#[embassy_executor::task]
async fn audio_task_entry(
    song_requests: SongRequestReceiver,
    mut tone_player: BuzzerTonePlayer,
) {
    loop {
        play_next(&song_requests, &mut tone_player).await;
    }
}

pub fn create_tone_player(buzzer_timer: BuzzerTimer, buzzer_pin: BuzzerPin) -> BuzzerTonePlayer {
    let ch2 = PwmPin::new_ch2(buzzer_pin, OutputType::PushPull);
    let pwm = SimplePwm::new(buzzer_timer, None, Some(ch2), None, None, khz(2), Default::default());

    let audio_driver = Buzzer::new(pwm, Channel::Ch2);
    TonePlayer::new(audio_driver, EmbassyTimer)
}

pub fn start_audio_task(
    task_spawner: &Spawner,
    song_requests: SongRequestReceiver,
    buzzer_timer: BuzzerTimer,
    buzzer_pin: BuzzerPin,
) {
    let mut tone_player = create_tone_player(buzzer_timer, buzzer_pin);

    for song_id in [SongId::Happy, SongId::Sad] {
        if let Err(err) = tone_player.load_song(song_id.song()) {
            defmt::warn!("{:?} is outside the buzzer operating range: {:?}", song_id, err);
        }
    }

    task_spawner.spawn(audio_task_entry(song_requests, tone_player)).unwrap();
}
