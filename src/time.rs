use embassy_time::Duration;

/// Holds the current beat for its duration before the player moves on.
pub trait NoteTimer {
    async fn hold(&mut self, duration: Duration);
}

impl<T: NoteTimer> NoteTimer for &mut T {
    async fn hold(&mut self, duration: Duration) {
        (**self).hold(duration).await
    }
}

/// Waits on the embassy time driver.
#[cfg(feature = "stm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbassyTimer;

#[cfg(feature = "stm32")]
impl NoteTimer for EmbassyTimer {
    async fn hold(&mut self, duration: Duration) {
        embassy_time::Timer::after(duration).await;
    }
}
