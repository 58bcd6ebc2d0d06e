use thiserror::Error;
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, HtmlVideoElement};

pub const MODAL_ID: &str = "videoModal";
pub const CLOSE_CLASS: &str = "close-modal";

#[derive(Error, Debug)]
pub enum MediaError {
    #[error("Playback could not be requested: {0}")]
    Unavailable(String),
    #[error("Playback was rejected: {0}")]
    Rejected(String),
}

/// Asks the browser to start playing. Autoplay policies may refuse, so
/// callers are expected to log the error and carry on.
pub async fn start_playback(video: &HtmlVideoElement) -> Result<(), MediaError> {
    let promise = video
        .play()
        .map_err(|e| MediaError::Unavailable(format!("{:?}", e)))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| MediaError::Rejected(format!("{:?}", e)))?;
    Ok(())
}

pub fn stop_playback(video: &HtmlVideoElement) {
    if video.pause().is_err() {
        log::warn!("Failed to pause promo video");
    }
    video.set_current_time(0.0);
}

pub fn set_body_scroll_locked(locked: bool) {
    let overflow = if locked { "hidden" } else { "auto" };
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.style().set_property("overflow", overflow);
    }
}

/// Clicks on the backdrop itself or on a close control dismiss the modal.
/// Clicks inside the player do not.
pub fn is_dismiss_target(id: &str, class_name: &str) -> bool {
    id == MODAL_ID || class_name.split_whitespace().any(|c| c == CLOSE_CLASS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_and_close_button_dismiss() {
        assert!(is_dismiss_target("videoModal", "video-modal active"));
        assert!(is_dismiss_target("", "close-modal"));
        assert!(is_dismiss_target("", "icon close-modal large"));
    }

    #[test]
    fn clicks_inside_player_do_not_dismiss() {
        assert!(!is_dismiss_target("videoPlayer", "modal-video"));
        assert!(!is_dismiss_target("", "close-modal-hint"));
    }
}
