//! Deferred image loading decisions.

#[cfg(test)]
#[path = "lazy_images_test.rs"]
mod lazy_images_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStrategy {
    /// Load each image when it nears the viewport.
    Observe,
    /// No visibility signal available; load everything now.
    Eager,
}

impl LoadStrategy {
    pub fn for_support(observer_supported: bool) -> Self {
        if observer_supported { LoadStrategy::Observe } else { LoadStrategy::Eager }
    }
}

/// The real source for an image carrying a deferred-source attribute.
pub fn deferred_source(data_src: Option<String>) -> Option<String> {
    let src = data_src?;
    let trimmed = src.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}
