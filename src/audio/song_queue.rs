use embassy_sync::{blocking_mutex::raw::RawMutex, channel::{Channel, Receiver, Sender}};

use crate::drivers::audio::PlayTone;
use crate::time::NoteTimer;

use super::songs::SongId;
use super::tone_player::TonePlayer;

pub const SONG_QUEUE_DEPTH: usize = 4;

pub type SongQueue<M> = Channel<M, SongId, SONG_QUEUE_DEPTH>;
pub type SongQueueSender<'ch, M> = Sender<'ch, M, SongId, SONG_QUEUE_DEPTH>;
pub type SongQueueReceiver<'ch, M> = Receiver<'ch, M, SongId, SONG_QUEUE_DEPTH>;

/// Waits for the next request and plays it to completion. Requests sent
/// while a song is playing wait in the queue.
pub async fn play_next<M: RawMutex, D: PlayTone, T: NoteTimer>(
    requests: &SongQueueReceiver<'_, M>,
    tone_player: &mut TonePlayer<'_, D, T>,
) -> SongId {
    let song_id = requests.receive().await;
    debug!("playing {:?}", song_id);

    tone_player.play(song_id.song()).await;

    song_id
}

/// Queues a song without waiting. Returns false if the queue is full.
pub fn request_song<M: RawMutex>(requests: &SongQueueSender<'_, M>, song_id: SongId) -> bool {
    match requests.try_send(song_id) {
        Ok(()) => true,
        Err(_) => {
            warn!("song queue full, dropped {:?}", song_id);
            false
        }
    }
}
