//! Navigation subscriber trait

use super::NavigationContext;

/// Trait for presentation surfaces that need to respond to navigation
/// changes
pub trait NavigationSubscriber: Send + Sync {
    /// Called when the active section or the transitioning flag changes
    fn on_navigation_change(&self, context: &NavigationContext);
}
