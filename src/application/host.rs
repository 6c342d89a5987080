// src/application/host.rs
//
// Host boundary
//
// The page (or terminal) that owns the upload form. Validation never
// touches it directly; handlers in `commands` translate verdicts into
// these two effects.

#[cfg(test)]
use mockall::automock;

/// Effects a form host can perform on behalf of the handlers
#[cfg_attr(test, automock)]
pub trait FormHost {
    /// Show a blocking message to the user
    fn alert(&mut self, message: &str);

    /// Reset the file input so the rejected pick is gone
    fn clear_selection(&mut self);
}
