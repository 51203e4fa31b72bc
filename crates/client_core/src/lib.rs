//! Client-side core of the todo list: remote retrieval, the list reducer and
//! the controller that ties them together.

pub mod controller;
pub mod error;
pub mod fetch;
pub mod reducer;
pub mod transport;
pub mod view;

pub use controller::{confirmation_message, AddObserver, ListController, SilentAddObserver};
pub use fetch::{FetchCompletion, FetchResource, FetchState};
pub use transport::{HttpTransport, TodoTransport, TransportResponse};
pub use view::ListView;

/// Endpoint the desktop client reads its initial list from.
pub const DEFAULT_RESOURCE_URL: &str = "https://jsonplaceholder.typicode.com/todos";

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;
