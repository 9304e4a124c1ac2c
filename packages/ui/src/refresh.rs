//! Listing invalidation signal.

use dioxus::prelude::*;

/// Generation counter shared by the page container and the user table.
///
/// The table's loader reads [`generation`](ListingRefresh::generation), so
/// every [`invalidate`](ListingRefresh::invalidate) re-runs the fetch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ListingRefresh {
    generation: Signal<u64>,
}

impl ListingRefresh {
    /// Must be called from within a component scope.
    pub fn new() -> Self {
        Self {
            generation: Signal::new(0),
        }
    }

    pub fn generation(&self) -> u64 {
        (self.generation)()
    }

    /// Signal that the collection changed and the listing must be refetched.
    pub fn invalidate(&mut self) {
        *self.generation.write() += 1;
    }
}

/// Get the listing refresh signal provided by [`crate::RegistryPage`].
pub fn use_listing_refresh() -> ListingRefresh {
    use_context::<ListingRefresh>()
}
