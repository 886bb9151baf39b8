pub mod audio_task;
