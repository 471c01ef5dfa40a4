use std::time::Duration;

mod engine;
mod subscriber;

pub use engine::NavigationEngine;
pub use subscriber::NavigationSubscriber;

/// How long an accepted section change locks out further navigation.
/// This must match the stage/copy transition animations, which derive
/// their durations from this constant.
pub const TRANSITION_COOLDOWN: Duration = Duration::from_millis(1600);

/// A navigation request from any input source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRequest {
    /// Step forward one section, clamped at the end
    Next,
    /// Step back one section, clamped at the start
    Previous,
    /// Jump directly to a section index (clamped into range)
    GoTo(usize),
}

/// Snapshot passed to presentation surfaces on every navigation change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationContext {
    pub current_index: usize,
    pub section_count: usize,
    /// True for the whole cooldown window after an accepted change
    pub transitioning: bool,
}
