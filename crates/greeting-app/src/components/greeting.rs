//! The timed greeting sequence view.
//!
//! Renders a `greeting-core` sequencer and owns its timers: every
//! `Effect::Schedule` becomes a task scoped to this component, so Dioxus
//! cancels all pending transitions the moment the view unmounts. No timer
//! can mutate state on a defunct view.

use std::rc::Rc;

use dioxus::prelude::*;
use greeting_core::{Choice, Effect, Input, MessageList, Route, Sequencer};

use crate::audio::CelebrationAudio;

use super::{AppConfig, ConfettiOverlay, FloatingHearts};

/// The greeting sequencer view.
#[component]
pub fn GreetingView(config: AppConfig, route: Signal<Route>) -> Element {
    let recipient = config.recipient.clone();

    let sequencer = use_signal({
        let recipient = recipient.clone();
        let timings = config.timings;
        move || Sequencer::new(MessageList::greeting(&recipient), timings)
    });

    // The audio thread lives exactly as long as this view.
    let audio = use_hook(|| Rc::new(CelebrationAudio::new(config.muted)));

    // Kick off the advance loop once on mount.
    let audio_for_start = audio.clone();
    use_future(move || {
        let audio = audio_for_start.clone();
        async move {
            let start = sequencer.read().start();
            execute_effects(sequencer, route, audio, vec![start]);
        }
    });

    let state = sequencer.read().clone();
    let message = state.current_message().unwrap_or_default().to_string();
    let index = state.current_index();

    let audio_yes = audio.clone();
    let audio_no = audio.clone();

    rsx! {
        div {
            class: "greeting-screen",

            // Decorative, continuously looping; independent of the sequencer.
            FloatingHearts {}

            if state.celebration_active() {
                ConfettiOverlay {}
            }

            div {
                class: "card-wrap",

                if !state.celebration_active() {
                    div {
                        class: "greeting-card",

                        span { class: "sparkle", "✦" }

                        p {
                            class: "greeting-message",
                            key: "{index}",
                            "{message}"
                        }

                        if state.controls_visible() {
                            div {
                                class: "choice-row",

                                button {
                                    class: "choice-btn choice-yes",
                                    onclick: move |_| {
                                        dispatch(sequencer, route, audio_yes.clone(), Input::Chose(Choice::Yes));
                                    },
                                    "Yes! Show me!"
                                }
                                button {
                                    class: "choice-btn choice-no",
                                    onclick: move |_| {
                                        dispatch(sequencer, route, audio_no.clone(), Input::Chose(Choice::No));
                                    },
                                    "No, thank you!"
                                }
                            }
                        }
                    }
                } else {
                    div {
                        class: "greeting-card celebration-card",

                        p {
                            class: "greeting-message",
                            "Have a look at it, {recipient}! 🎉✨"
                        }

                        if state.ack_visible() {
                            div {
                                class: "ack-notice",
                                "Nah, you will have to see it!"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Applies an input to the sequencer and executes the resulting effects.
fn dispatch(
    mut sequencer: Signal<Sequencer>,
    route: Signal<Route>,
    audio: Rc<CelebrationAudio>,
    input: Input,
) {
    let effects = sequencer.write().apply(input);
    execute_effects(sequencer, route, audio, effects);
}

/// Carries out sequencer effects. Scheduled timers become tasks scoped to
/// the current component, so teardown cancels them.
fn execute_effects(
    sequencer: Signal<Sequencer>,
    mut route: Signal<Route>,
    audio: Rc<CelebrationAudio>,
    effects: Vec<Effect>,
) {
    for effect in effects {
        match effect {
            Effect::Schedule(timer, delay) => {
                let audio = audio.clone();
                spawn(async move {
                    tokio::time::sleep(delay).await;
                    dispatch(sequencer, route, audio, timer.input());
                });
            }
            Effect::PlaySound => {
                let rx = audio.play_chime();
                let audio = audio.clone();
                spawn(async move {
                    // Resolves on playback end, or immediately when muted.
                    let _ = rx.await;
                    dispatch(sequencer, route, audio, Input::SoundFinished);
                });
            }
            Effect::Navigate(target) => {
                tracing::info!("Navigating to {}", target.path());
                route.set(target);
            }
        }
    }
}
