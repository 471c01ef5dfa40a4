//! Navigation engine implementation

use super::{NavRequest, NavigationContext, NavigationSubscriber, TRANSITION_COOLDOWN};
use parking_lot::RwLock;
use std::sync::{Arc, Weak};
use std::time::Instant;
use tracing::{debug, trace};

/// Navigation state stored internally
#[derive(Debug, Clone)]
struct NavigationState {
    current_index: usize,
    transitioning: bool,
    /// Start of the most recent accepted change, None before the first
    last_transition_start: Option<Instant>,
}

/// The navigation state machine
///
/// Owns the current section index and the transitioning flag, and is the
/// single mutator of both. All input sources route through [`navigate`];
/// requests arriving inside the cooldown window are dropped, not queued.
/// There is deliberately no error surface: every request is either
/// accepted or silently ignored, and clamping keeps the index in range
/// for any input.
///
/// [`navigate`]: NavigationEngine::navigate
pub struct NavigationEngine {
    section_count: usize,
    state: Arc<RwLock<NavigationState>>,
    subscribers: Arc<RwLock<Vec<Weak<dyn NavigationSubscriber>>>>,
}

impl NavigationEngine {
    /// Create a new engine positioned at the first section
    pub fn new(section_count: usize) -> Self {
        let state = NavigationState {
            current_index: 0,
            transitioning: false,
            last_transition_start: None,
        };

        Self {
            section_count: section_count.max(1),
            state: Arc::new(RwLock::new(state)),
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Handle a navigation request, timestamped now
    ///
    /// Returns true if the request changed the current section.
    pub fn navigate(&self, request: NavRequest) -> bool {
        self.navigate_at(request, Instant::now())
    }

    /// Handle a navigation request with an explicit timestamp
    pub fn navigate_at(&self, request: NavRequest, now: Instant) -> bool {
        let mut state = self.state.write();

        if let Some(start) = state.last_transition_start {
            if now.duration_since(start) < TRANSITION_COOLDOWN {
                trace!(?request, "Dropped navigation request during cooldown");
                return false;
            }
        }

        let next_index = match request {
            NavRequest::Next => (state.current_index + 1).min(self.section_count - 1),
            NavRequest::Previous => state.current_index.saturating_sub(1),
            // Out-of-range jumps are never produced by the bounded dot
            // rail, but clamp so the index invariant holds for any caller.
            NavRequest::GoTo(index) => index.min(self.section_count - 1),
        };

        // Boundary taps are no-ops and must not start a lockout
        if next_index == state.current_index {
            trace!(?request, "Navigation request had no effect");
            return false;
        }

        state.current_index = next_index;
        state.transitioning = true;
        state.last_transition_start = Some(now);
        let context = self.context_from(&state);
        drop(state);

        debug!(index = next_index, "Section change accepted");
        self.notify_subscribers(&context);
        true
    }

    /// Clear the transitioning flag once the cooldown window has elapsed
    ///
    /// Called once per frame by the host loop. The clear is unconditional:
    /// requests arriving inside the window were dropped, so nothing ever
    /// cancels or extends a running transition.
    pub fn tick(&self) {
        self.tick_at(Instant::now())
    }

    /// Frame tick with an explicit timestamp
    pub fn tick_at(&self, now: Instant) {
        let mut state = self.state.write();
        if !state.transitioning {
            return;
        }

        let elapsed = match state.last_transition_start {
            Some(start) => now.duration_since(start),
            None => return,
        };

        if elapsed >= TRANSITION_COOLDOWN {
            state.transitioning = false;
            let context = self.context_from(&state);
            drop(state);

            trace!("Transition window elapsed");
            self.notify_subscribers(&context);
        }
    }

    /// Progress of the current transition in [0, 1]; 1.0 when idle
    pub fn transition_progress(&self) -> f32 {
        self.transition_progress_at(Instant::now())
    }

    /// Transition progress with an explicit timestamp
    pub fn transition_progress_at(&self, now: Instant) -> f32 {
        let state = self.state.read();
        if !state.transitioning {
            return 1.0;
        }
        match state.last_transition_start {
            Some(start) => {
                let elapsed = now.duration_since(start).as_secs_f32();
                (elapsed / TRANSITION_COOLDOWN.as_secs_f32()).min(1.0)
            }
            None => 1.0,
        }
    }

    /// Get the current navigation snapshot
    pub fn context(&self) -> NavigationContext {
        let state = self.state.read();
        self.context_from(&state)
    }

    /// Add a subscriber
    pub fn add_subscriber(&self, subscriber: Arc<dyn NavigationSubscriber>) {
        let mut subscribers = self.subscribers.write();
        subscribers.push(Arc::downgrade(&subscriber));
    }

    fn context_from(&self, state: &NavigationState) -> NavigationContext {
        NavigationContext {
            current_index: state.current_index,
            section_count: self.section_count,
            transitioning: state.transitioning,
        }
    }

    /// Notify all subscribers of a navigation change
    fn notify_subscribers(&self, context: &NavigationContext) {
        let mut subscribers = self.subscribers.write();

        // Remove any dead weak references
        subscribers.retain(|weak| weak.strong_count() > 0);

        // Notify live subscribers
        for weak in subscribers.iter() {
            if let Some(subscriber) = weak.upgrade() {
                subscriber.on_navigation_change(context);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Step just past the cooldown window
    const SPACED: Duration = Duration::from_millis(1700);

    fn current(engine: &NavigationEngine) -> usize {
        engine.context().current_index
    }

    #[test]
    fn test_starts_at_first_section() {
        let engine = NavigationEngine::new(14);
        let ctx = engine.context();
        assert_eq!(ctx.current_index, 0);
        assert_eq!(ctx.section_count, 14);
        assert!(!ctx.transitioning);
    }

    #[test]
    fn test_spaced_requests_step_by_one() {
        let engine = NavigationEngine::new(5);
        let t0 = Instant::now();

        assert!(engine.navigate_at(NavRequest::Next, t0));
        assert_eq!(current(&engine), 1);
        assert!(engine.navigate_at(NavRequest::Next, t0 + SPACED));
        assert_eq!(current(&engine), 2);
        assert!(engine.navigate_at(NavRequest::Previous, t0 + SPACED * 2));
        assert_eq!(current(&engine), 1);
    }

    #[test]
    fn test_second_request_inside_window_is_dropped() {
        let engine = NavigationEngine::new(5);
        let t0 = Instant::now();

        assert!(engine.navigate_at(NavRequest::Next, t0));
        assert!(!engine.navigate_at(NavRequest::Next, t0 + Duration::from_millis(100)));
        assert_eq!(current(&engine), 1);

        // The drop applies regardless of the request's source or kind
        assert!(!engine.navigate_at(NavRequest::GoTo(4), t0 + Duration::from_millis(1599)));
        assert_eq!(current(&engine), 1);

        // And the window is measured from the accepted change, not the drops
        assert!(engine.navigate_at(NavRequest::Next, t0 + Duration::from_millis(1600)));
        assert_eq!(current(&engine), 2);
    }

    #[test]
    fn test_previous_at_start_is_a_noop_without_lockout() {
        let engine = NavigationEngine::new(5);
        let t0 = Instant::now();

        assert!(!engine.navigate_at(NavRequest::Previous, t0));
        let ctx = engine.context();
        assert_eq!(ctx.current_index, 0);
        assert!(!ctx.transitioning);

        // A boundary tap must not cost the user a cooldown window
        assert!(engine.navigate_at(NavRequest::Next, t0 + Duration::from_millis(1)));
        assert_eq!(current(&engine), 1);
    }

    #[test]
    fn test_next_at_end_is_a_noop_without_lockout() {
        let engine = NavigationEngine::new(3);
        let t0 = Instant::now();
        engine.navigate_at(NavRequest::GoTo(2), t0);
        engine.tick_at(t0 + SPACED);

        assert!(!engine.navigate_at(NavRequest::Next, t0 + SPACED));
        let ctx = engine.context();
        assert_eq!(ctx.current_index, 2);
        assert!(!ctx.transitioning, "clamped no-op must not restart the window");

        assert!(engine.navigate_at(NavRequest::Previous, t0 + SPACED + Duration::from_millis(1)));
        assert_eq!(current(&engine), 1);
    }

    #[test]
    fn test_goto_jumps_in_one_step_and_clamps() {
        let engine = NavigationEngine::new(14);
        let t0 = Instant::now();

        assert!(engine.navigate_at(NavRequest::GoTo(9), t0));
        assert_eq!(current(&engine), 9);

        // Out of range clamps to the last section
        assert!(engine.navigate_at(NavRequest::GoTo(99), t0 + SPACED));
        assert_eq!(current(&engine), 13);
        engine.tick_at(t0 + SPACED * 2);

        // GoTo to the current index is a no-op without lockout
        assert!(!engine.navigate_at(NavRequest::GoTo(13), t0 + SPACED * 2));
        assert!(!engine.context().transitioning);
    }

    #[test]
    fn test_transitioning_window() {
        let engine = NavigationEngine::new(5);
        let t0 = Instant::now();

        engine.navigate_at(NavRequest::Next, t0);
        assert!(engine.context().transitioning);

        // Still inside the window, even after dropped input
        engine.tick_at(t0 + Duration::from_millis(800));
        engine.navigate_at(NavRequest::Next, t0 + Duration::from_millis(900));
        assert!(engine.context().transitioning);
        engine.tick_at(t0 + Duration::from_millis(1599));
        assert!(engine.context().transitioning);

        engine.tick_at(t0 + Duration::from_millis(1600));
        assert!(!engine.context().transitioning);
    }

    #[test]
    fn test_transition_progress() {
        let engine = NavigationEngine::new(5);
        let t0 = Instant::now();
        assert_eq!(engine.transition_progress_at(t0), 1.0);

        engine.navigate_at(NavRequest::Next, t0);
        assert_eq!(engine.transition_progress_at(t0), 0.0);
        let halfway = engine.transition_progress_at(t0 + Duration::from_millis(800));
        assert!((halfway - 0.5).abs() < 0.01);
        assert_eq!(engine.transition_progress_at(t0 + SPACED), 1.0);
    }

    #[test]
    fn test_twenty_spaced_next_requests_clamp_at_the_last_section() {
        let engine = NavigationEngine::new(14);
        let t0 = Instant::now();

        for step in 0..20 {
            let accepted = engine.navigate_at(NavRequest::Next, t0 + SPACED * step);
            if step < 13 {
                assert!(accepted);
            } else {
                assert!(!accepted);
                assert_eq!(current(&engine), 13);
            }
        }
        assert_eq!(current(&engine), 13);
    }

    #[test]
    fn test_rapid_double_next_advances_once() {
        let engine = NavigationEngine::new(14);
        let t0 = Instant::now();

        engine.navigate_at(NavRequest::Next, t0);
        engine.navigate_at(NavRequest::Next, t0 + Duration::from_millis(100));
        assert_eq!(current(&engine), 1);
    }

    struct CountingSubscriber {
        changes: AtomicUsize,
        last_index: AtomicUsize,
    }

    impl NavigationSubscriber for CountingSubscriber {
        fn on_navigation_change(&self, context: &NavigationContext) {
            self.changes.fetch_add(1, Ordering::SeqCst);
            self.last_index.store(context.current_index, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_subscribers_see_each_accepted_change_once() {
        let engine = NavigationEngine::new(5);
        let subscriber = Arc::new(CountingSubscriber {
            changes: AtomicUsize::new(0),
            last_index: AtomicUsize::new(0),
        });
        engine.add_subscriber(subscriber.clone());

        let t0 = Instant::now();
        engine.navigate_at(NavRequest::Next, t0);
        engine.navigate_at(NavRequest::Next, t0 + Duration::from_millis(50));
        engine.navigate_at(NavRequest::Next, t0 + SPACED);

        // Two accepted changes; the dropped request publishes nothing
        assert_eq!(subscriber.changes.load(Ordering::SeqCst), 2);
        assert_eq!(subscriber.last_index.load(Ordering::SeqCst), 2);

        // The cooldown clear publishes the idle snapshot
        engine.tick_at(t0 + SPACED * 2);
        assert_eq!(subscriber.changes.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_dropped_subscribers_are_pruned() {
        let engine = NavigationEngine::new(5);
        let subscriber = Arc::new(CountingSubscriber {
            changes: AtomicUsize::new(0),
            last_index: AtomicUsize::new(0),
        });
        engine.add_subscriber(subscriber.clone());
        drop(subscriber);

        let t0 = Instant::now();
        assert!(engine.navigate_at(NavRequest::Next, t0));
        assert_eq!(current(&engine), 1);
    }
}
