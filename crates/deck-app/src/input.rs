//! Input adapters: keyboard and wheel events to navigation requests
//!
//! All adapters produce plain [`NavRequest`]s and route them through the
//! engine's single entry point, so a request arriving during a cooldown
//! is dropped the same way regardless of which device produced it.

use egui::{InputState, Key};

use deck_core::NavRequest;

/// Wheel deltas below this magnitude (in points) are trackpad noise and
/// must not trigger navigation
pub const SCROLL_THRESHOLD: f32 = 30.0;

/// Keyboard mapping: down/right/space step forward, up/left step back
pub fn key_request(key: Key) -> Option<NavRequest> {
    match key {
        Key::ArrowDown | Key::ArrowRight | Key::Space => Some(NavRequest::Next),
        Key::ArrowUp | Key::ArrowLeft => Some(NavRequest::Previous),
        _ => None,
    }
}

/// Wheel mapping. In egui's convention scrolling down yields a negative
/// y delta, so negative means advance.
pub fn wheel_request(delta_y: f32) -> Option<NavRequest> {
    if delta_y.abs() < SCROLL_THRESHOLD {
        return None;
    }
    if delta_y < 0.0 {
        Some(NavRequest::Next)
    } else {
        Some(NavRequest::Previous)
    }
}

/// Collect this frame's navigation requests from the raw input state
pub fn frame_requests(input: &InputState) -> Vec<NavRequest> {
    let mut requests = Vec::new();

    for key in [
        Key::ArrowDown,
        Key::ArrowRight,
        Key::Space,
        Key::ArrowUp,
        Key::ArrowLeft,
    ] {
        if input.key_pressed(key) {
            if let Some(request) = key_request(key) {
                requests.push(request);
            }
        }
    }

    if let Some(request) = wheel_request(input.scroll_delta.y) {
        requests.push(request);
    }

    requests
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_keys() {
        assert_eq!(key_request(Key::ArrowDown), Some(NavRequest::Next));
        assert_eq!(key_request(Key::ArrowRight), Some(NavRequest::Next));
        assert_eq!(key_request(Key::Space), Some(NavRequest::Next));
    }

    #[test]
    fn test_backward_keys() {
        assert_eq!(key_request(Key::ArrowUp), Some(NavRequest::Previous));
        assert_eq!(key_request(Key::ArrowLeft), Some(NavRequest::Previous));
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        assert_eq!(key_request(Key::Enter), None);
        assert_eq!(key_request(Key::A), None);
        assert_eq!(key_request(Key::Escape), None);
    }

    #[test]
    fn test_wheel_noise_threshold() {
        assert_eq!(wheel_request(0.0), None);
        assert_eq!(wheel_request(29.9), None);
        assert_eq!(wheel_request(-29.9), None);
    }

    #[test]
    fn test_wheel_direction() {
        // Scrolling down (negative in egui) advances the deck
        assert_eq!(wheel_request(-30.0), Some(NavRequest::Next));
        assert_eq!(wheel_request(-400.0), Some(NavRequest::Next));
        assert_eq!(wheel_request(30.0), Some(NavRequest::Previous));
        assert_eq!(wheel_request(120.0), Some(NavRequest::Previous));
    }
}
