//! The two views of the app.

use derive_more::Display;

/// Top-level view routes.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// The timed greeting sequence.
    #[default]
    #[display("greeting")]
    Greeting,
    /// The surprise message card shown after the celebration.
    #[display("surprise")]
    Surprise,
}

impl Route {
    /// Path-style identifier, used for logging navigation.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Greeting => "/",
            Route::Surprise => "/surprise",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Route::Greeting.path(), "/");
        assert_eq!(Route::Surprise.path(), "/surprise");
    }

    #[test]
    fn test_display() {
        assert_eq!(Route::Surprise.to_string(), "surprise");
    }
}
