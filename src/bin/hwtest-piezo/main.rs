#![no_std]
#![no_main]

use ateam_piezo::{
    audio::{song_queue::request_song, songs::SongId},
    create_audio_task,
    pins::SongRequestQueue,
};
use embassy_time::Timer;

use defmt_rtt as _;
// provide embedded panic probe
use panic_probe as _;

static SONG_REQUESTS: SongRequestQueue = SongRequestQueue::new();

#[embassy_executor::main]
async fn main(main_spawner: embassy_executor::Spawner) {
    let p = embassy_stm32::init(Default::default());

    defmt::info!("embassy HAL configured.");

    create_audio_task!(main_spawner, SONG_REQUESTS, p);

    let song_requests = SONG_REQUESTS.sender();
    loop {
        defmt::info!("requesting happy song");
        request_song(&song_requests, SongId::Happy);
        Timer::after_secs(4).await;

        defmt::info!("requesting sad song");
        request_song(&song_requests, SongId::Sad);
        Timer::after_secs(4).await;
    }
}
