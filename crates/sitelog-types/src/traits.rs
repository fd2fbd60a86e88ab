//! Core trait definitions for sitelog abstractions.

use crate::{CallSite, Frame, Method};

/// The output primitive a console writes through.
///
/// This is the unmodified behaviour the augmentation wraps: with the
/// augmentation disabled, a console hands the bare message straight to its
/// sink. Implementations are assumed never to fail.
pub trait Sink: Send + Sync {
    /// Write one finished line for the given method.
    fn write(&self, method: Method, line: &str);
}

/// Turns a raw [`Frame`] into a [`CallSite`].
///
/// Implementers decide how paths are relativized and how function paths
/// are shortened. Tests can inject their own to get fixed call sites.
pub trait CallSiteResolver: Send + Sync {
    /// Resolve a frame.
    fn resolve(&self, frame: &Frame<'_>) -> CallSite;
}

impl<S: Sink + ?Sized> Sink for std::sync::Arc<S> {
    fn write(&self, method: Method, line: &str) {
        (**self).write(method, line)
    }
}
