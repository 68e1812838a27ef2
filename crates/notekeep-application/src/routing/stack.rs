use notekeep_core::route::{Navigator, Route};
use std::sync::Mutex;
use tokio::sync::watch;

/// In-memory screen stack.
pub struct StackNavigator {
    stack: Mutex<Vec<Route>>,
    location: watch::Sender<Route>,
}

impl StackNavigator {
    pub fn new(root: Route) -> Self {
        let (location, _) = watch::channel(root.clone());
        Self {
            stack: Mutex::new(vec![root]),
            location,
        }
    }

    /// Routes from the root to the top of the stack.
    pub fn history(&self) -> Vec<Route> {
        self.stack.lock().unwrap().clone()
    }

    fn publish(&self, top: Route) {
        self.location.send_if_modified(|current| {
            if *current == top {
                false
            } else {
                *current = top;
                true
            }
        });
    }
}

impl Default for StackNavigator {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

impl Navigator for StackNavigator {
    fn current(&self) -> Route {
        self.location.borrow().clone()
    }

    fn replace(&self, route: Route) {
        {
            let mut stack = self.stack.lock().unwrap();
            match stack.last_mut() {
                Some(top) => *top = route.clone(),
                None => stack.push(route.clone()),
            }
        }
        tracing::debug!(route = %route, "navigator replace");
        self.publish(route);
    }

    fn push(&self, route: Route) {
        self.stack.lock().unwrap().push(route.clone());
        tracing::debug!(route = %route, "navigator push");
        self.publish(route);
    }

    fn back(&self) {
        let top = {
            let mut stack = self.stack.lock().unwrap();
            if stack.len() > 1 {
                stack.pop();
            }
            stack.last().cloned()
        };
        if let Some(top) = top {
            tracing::debug!(route = %top, "navigator back");
            self.publish(top);
        }
    }

    fn watch_location(&self) -> watch::Receiver<Route> {
        self.location.subscribe()
    }
}
