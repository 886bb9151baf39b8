mod common;

use ateam_piezo::audio::{
    song_queue::{play_next, request_song, SongQueue, SONG_QUEUE_DEPTH},
    songs::{SongId, SAD_SONG},
    tempo::Tempo,
    tone_player::TonePlayer,
};
use common::{new_log, timeline, RecordingBuzzer, RecordingTimer};
use embassy_futures::block_on;
use embassy_sync::blocking_mutex::raw::NoopRawMutex;

#[test]
fn plays_requested_song() {
    let queue: SongQueue<NoopRawMutex> = SongQueue::new();
    let log = new_log();
    let mut player = TonePlayer::new(RecordingBuzzer { log: &log }, RecordingTimer { log: &log });

    assert!(request_song(&queue.sender(), SongId::Sad));
    let played = block_on(play_next(&queue.receiver(), &mut player));

    assert_eq!(played, SongId::Sad);

    let holds: u64 = timeline(&log).iter().map(|(_, d)| d.as_ticks()).sum();
    let expected: u64 = SAD_SONG
        .iter()
        .map(|note| Tempo::DEFAULT.slot(note.duration).as_ticks())
        .sum();
    assert_eq!(holds, expected);
}

#[test]
fn requests_are_played_in_order() {
    let queue: SongQueue<NoopRawMutex> = SongQueue::new();
    let log = new_log();
    let mut player = TonePlayer::new(RecordingBuzzer { log: &log }, RecordingTimer { log: &log });

    request_song(&queue.sender(), SongId::Happy);
    request_song(&queue.sender(), SongId::Sad);

    assert_eq!(block_on(play_next(&queue.receiver(), &mut player)), SongId::Happy);
    assert_eq!(block_on(play_next(&queue.receiver(), &mut player)), SongId::Sad);
}

#[test]
fn full_queue_drops_request() {
    let queue: SongQueue<NoopRawMutex> = SongQueue::new();

    for _ in 0..SONG_QUEUE_DEPTH {
        assert!(request_song(&queue.sender(), SongId::Happy));
    }

    assert!(!request_song(&queue.sender(), SongId::Sad));
}
