//! Animated birthday greeting desktop app.
//!
//! A Dioxus desktop application that plays a timed greeting sequence,
//! celebrates with confetti and a chime, then moves to a surprise card.
//! All sequencing logic lives in `greeting-core`; this crate renders it.

pub mod audio;
pub mod components;
pub mod theme;
