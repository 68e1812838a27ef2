//! Navigation state and the session-driven redirect loop.

mod coordinator;
mod stack;

pub use coordinator::RouteCoordinator;
pub use stack::StackNavigator;
