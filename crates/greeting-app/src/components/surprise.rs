//! The surprise message card.
//!
//! A static panel: paragraphs reveal with staggered delays from mount,
//! driven entirely by CSS `animation-delay`, so unmounting mid-reveal
//! leaves nothing to cancel.

use dioxus::prelude::*;

/// The surprise message card shown after the celebration.
#[component]
pub fn SurpriseView() -> Element {
    rsx! {
        div {
            class: "surprise-screen",

            div {
                class: "surprise-card reveal reveal-1",

                h1 {
                    class: "surprise-title",
                    "Dear Mam,"
                }

                p {
                    class: "surprise-paragraph reveal reveal-2",
                    "The epitome of beauty and grace, unmatched in the entire world."
                }

                p {
                    class: "surprise-paragraph reveal reveal-3",
                    "On your birthday, I just want to say I'm so lucky to have met you. "
                    "I hope your day is full of love and happiness."
                }

                p {
                    class: "surprise-closing",
                    "On your special day, I wish you the happiest birthday!"
                }

                // Intentionally inert: the control has no attached behavior.
                button {
                    class: "surprise-btn reveal reveal-4",
                    "Click to Reveal More"
                }
            }
        }
    }
}
