pub mod routing;
pub mod screen;
pub mod session;

pub use routing::{RouteCoordinator, StackNavigator};
pub use session::SessionStore;
