//! Root application component.

use dioxus::prelude::*;
use greeting_core::{Route, Timings};

use crate::theme::ThemedRoot;

use super::{GreetingView, SurpriseView};

/// Launch configuration handed down from the command line.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Name shown in the greeting and celebration lines.
    pub recipient: String,
    /// Skip the celebration chime.
    pub muted: bool,
    /// Delays for the greeting flow.
    pub timings: Timings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            recipient: "Khadijah".to_string(),
            muted: false,
            timings: Timings::default(),
        }
    }
}

/// Root application component. The route signal is the navigation
/// boundary: views switch by writing it, and the greeting view writes it
/// exactly once per session.
#[component]
pub fn App(config: AppConfig) -> Element {
    let route = use_signal(Route::default);

    use_drop(|| {
        tracing::info!("Shutting down greeting app");
    });

    let view = match *route.read() {
        Route::Greeting => rsx! {
            GreetingView { config, route }
        },
        Route::Surprise => rsx! {
            SurpriseView {}
        },
    };

    rsx! {
        ThemedRoot { {view} }
    }
}
