//! Decorative overlays: floating hearts and the celebration confetti.

use dioxus::prelude::*;
use rand::Rng;

/// Confetti colors, purple-themed.
pub const CONFETTI_PALETTE: [&str; 4] = ["#9b4dca", "#7a3f9f", "#c084fc", "#d4d1e3"];

/// Number of confetti pieces in a burst.
const CONFETTI_COUNT: usize = 120;

/// Number of hearts drifting in the background.
const HEART_COUNT: usize = 20;

/// Placement of a single background heart.
#[derive(Debug, Clone, PartialEq)]
pub struct HeartSpec {
    /// Horizontal position in vw.
    pub x: f64,
    /// Loop duration in seconds (10 to 20).
    pub duration: f64,
    /// Loop offset in seconds, so hearts don't rise in lockstep.
    pub delay: f64,
}

/// Randomized placements for the background hearts.
pub fn heart_specs(count: usize) -> Vec<HeartSpec> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| HeartSpec {
            x: rng.random_range(0.0..100.0),
            duration: rng.random_range(10.0..20.0),
            delay: rng.random_range(0.0..10.0),
        })
        .collect()
}

/// Placement and styling of a single confetti piece.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    /// Horizontal position in percent.
    pub x: f64,
    /// Fall duration in seconds.
    pub duration: f64,
    /// Start offset in seconds.
    pub delay: f64,
    /// Side length in pixels.
    pub size: f64,
    /// Fill color, drawn from [`CONFETTI_PALETTE`].
    pub color: &'static str,
}

/// Randomized confetti burst.
pub fn confetti_pieces(count: usize) -> Vec<ConfettiPiece> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| ConfettiPiece {
            x: rng.random_range(0.0..100.0),
            duration: rng.random_range(2.5..4.5),
            delay: rng.random_range(0.0..0.8),
            size: rng.random_range(6.0..12.0),
            color: CONFETTI_PALETTE[rng.random_range(0..CONFETTI_PALETTE.len())],
        })
        .collect()
}

/// Continuously looping hearts rising up the screen. Pure decoration,
/// independent of the sequencer.
#[component]
pub fn FloatingHearts() -> Element {
    let hearts = use_hook(|| heart_specs(HEART_COUNT));

    rsx! {
        div {
            class: "hearts-overlay",
            for heart in hearts {
                span {
                    class: "heart",
                    style: "left: {heart.x}vw; animation-duration: {heart.duration}s; animation-delay: -{heart.delay}s;",
                    "💜"
                }
            }
        }
    }
}

/// Confetti burst shown while the celebration is active. The parent gates
/// mounting on `celebration_active`, so the burst starts with it.
#[component]
pub fn ConfettiOverlay() -> Element {
    let pieces = use_hook(|| confetti_pieces(CONFETTI_COUNT));

    rsx! {
        div {
            class: "confetti-overlay",
            for piece in pieces {
                span {
                    class: "confetti-piece",
                    style: "left: {piece.x}%; width: {piece.size}px; height: {piece.size}px; background: {piece.color}; animation-duration: {piece.duration}s; animation-delay: {piece.delay}s;",
                }
            }
        }
    }
}
