//! Playback control methods

use crate::error::AppError;
use crate::model::{ApiClient, TrackRecord};

use super::AppController;

impl<A: ApiClient> AppController<A> {
    /// Fails with `NoActiveDevice` unless a device is currently playing.
    ///
    /// The device can still stop between this check and the command that follows.
    async fn require_active_device(&self) -> Result<(), AppError> {
        match self.api.current_playback().await? {
            Some(playback) if playback.is_playing => {
                tracing::debug!(device = %playback.device_name, "Active device found");
                Ok(())
            }
            Some(playback) => {
                tracing::info!(device = %playback.device_name, "Device connected but not playing");
                Err(AppError::NoActiveDevice)
            }
            None => {
                tracing::info!("No device connected");
                Err(AppError::NoActiveDevice)
            }
        }
    }

    pub async fn play_track(&mut self, track: &TrackRecord) -> Result<(), AppError> {
        self.require_active_device().await?;

        self.api
            .start_playback(std::slice::from_ref(&track.uri))
            .await?;

        tracing::info!(track = %track.name, uri = %track.uri, "Playback started");
        self.ui.status = Some(format!("Playing: {} - {}", track.name, track.artist));
        Ok(())
    }

    pub async fn queue_track(&mut self, track: &TrackRecord) -> Result<(), AppError> {
        self.require_active_device().await?;

        self.api.add_to_queue(&track.uri).await?;

        tracing::info!(track = %track.name, uri = %track.uri, "Added track to queue");
        self.ui.status = Some(format!("Queued: {} - {}", track.name, track.artist));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::track;
    use crate::model::mock::{Call, MockApi};
    use crate::screen::Command;

    #[tokio::test]
    async fn play_without_device_sends_nothing() {
        let mut controller = AppController::new(MockApi::default(), 10).unwrap();

        let err = controller.play_track(&track(1)).await.unwrap_err();

        assert!(matches!(err, AppError::NoActiveDevice));
        assert_eq!(controller.api.playback_commands(), 0);
        assert_eq!(controller.api.calls(), vec![Call::CurrentPlayback]);
    }

    #[tokio::test]
    async fn paused_device_counts_as_inactive() {
        let mut controller = AppController::new(MockApi::default().playing(false), 10).unwrap();

        let err = controller.queue_track(&track(1)).await.unwrap_err();

        assert!(matches!(err, AppError::NoActiveDevice));
        assert_eq!(controller.api.playback_commands(), 0);
    }

    #[tokio::test]
    async fn play_and_queue_with_active_device() {
        let mut controller = AppController::new(MockApi::default().playing(true), 10).unwrap();

        controller.play_track(&track(1)).await.unwrap();
        controller.queue_track(&track(2)).await.unwrap();

        assert_eq!(
            controller.api.calls(),
            vec![
                Call::CurrentPlayback,
                Call::StartPlayback(vec!["spotify:track:1".to_string()]),
                Call::CurrentPlayback,
                Call::AddToQueue("spotify:track:2".to_string()),
            ]
        );
        assert_eq!(
            controller.ui_state().status.as_deref(),
            Some("Queued: Track 2 - John Lennon")
        );
    }

    #[tokio::test]
    async fn no_active_device_is_shown_to_the_user() {
        let mut controller = AppController::new(MockApi::default(), 10).unwrap();

        controller.execute(Command::Play(track(1))).await.unwrap();

        let notification = controller.ui_state().notification.clone().unwrap();
        assert_eq!(notification.title, "No Active Device");
        assert_eq!(controller.api.playback_commands(), 0);
    }
}
