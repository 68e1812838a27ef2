//! Navigation port.

use super::model::Route;
use tokio::sync::watch;

/// Screen stack the route guard acts on.
///
/// Implementations publish every location change on the receiver returned by
/// [`Navigator::watch_location`], so a coordinator can re-evaluate redirects
/// reactively.
pub trait Navigator: Send + Sync {
    /// The route at the top of the stack.
    fn current(&self) -> Route;

    /// Replaces the top of the stack with `route`.
    fn replace(&self, route: Route);

    /// Pushes `route` on top of the stack.
    fn push(&self, route: Route);

    /// Pops the top of the stack. The root route is never popped.
    fn back(&self);

    /// Subscribes to location changes.
    fn watch_location(&self) -> watch::Receiver<Route>;
}
