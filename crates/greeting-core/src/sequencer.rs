//! The greeting sequencer state machine.
//!
//! A deterministic finite state machine: `Displaying(i)` for each message,
//! then `AwaitingChoice`, then `Celebrating`, then `Done` once navigation
//! has fired. Transitions are driven by [`Input`]s; timers are owned by the
//! embedding layer, which executes the returned [`Effect`]s.

use std::time::Duration;

use crate::{MessageList, Route, Timings};

/// Where the sequencer currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Showing message `i`; the advance timer is running.
    Displaying(usize),
    /// Final message shown, waiting for the Yes/No choice.
    AwaitingChoice,
    /// Celebration underway; the navigation timer is running.
    Celebrating,
    /// Navigation has fired. Terminal.
    Done,
}

/// The two choice controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Yes,
    No,
}

/// Timers the embedding layer runs on the sequencer's behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// Advance to the next message (or reveal the controls).
    Advance,
    /// Delay before the "No" acknowledgement notice.
    Ack,
    /// Delay between celebration start and navigation.
    Navigate,
}

impl Timer {
    /// The input to feed back when this timer elapses.
    pub fn input(&self) -> Input {
        match self {
            Timer::Advance => Input::AdvanceElapsed,
            Timer::Ack => Input::AckElapsed,
            Timer::Navigate => Input::NavigateElapsed,
        }
    }
}

/// Events the sequencer reacts to. Inputs that are invalid for the current
/// phase are ignored, never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// The advance timer elapsed.
    AdvanceElapsed,
    /// The user activated one of the choice controls.
    Chose(Choice),
    /// The acknowledgement delay after "No" elapsed.
    AckElapsed,
    /// The navigation delay elapsed.
    NavigateElapsed,
    /// The celebration chime finished playing.
    SoundFinished,
}

/// Side effects the embedding layer must carry out after applying an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Run `timer` after `delay`, then apply `timer.input()`.
    Schedule(Timer, Duration),
    /// Play the one-shot celebration chime; completion feeds back
    /// [`Input::SoundFinished`].
    PlaySound,
    /// Navigate to the given route. Emitted exactly once per session.
    Navigate(Route),
}

/// The greeting sequencer.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequencer {
    messages: MessageList,
    timings: Timings,
    phase: Phase,
    controls_visible: bool,
    celebration_active: bool,
    effect_playing: bool,
    ack_visible: bool,
}

impl Sequencer {
    /// Creates a sequencer showing the first message.
    pub fn new(messages: MessageList, timings: Timings) -> Self {
        Self {
            messages,
            timings,
            phase: Phase::Displaying(0),
            controls_visible: false,
            celebration_active: false,
            effect_playing: false,
            ack_visible: false,
        }
    }

    /// The effect to execute on mount: schedules the first advance.
    pub fn start(&self) -> Effect {
        Effect::Schedule(Timer::Advance, self.timings.advance)
    }

    /// Applies an input, returning the effects to execute.
    pub fn apply(&mut self, input: Input) -> Vec<Effect> {
        match input {
            Input::AdvanceElapsed => self.on_advance(),
            Input::Chose(choice) => self.on_choice(choice),
            Input::AckElapsed => self.on_ack(),
            Input::NavigateElapsed => self.on_navigate(),
            Input::SoundFinished => {
                self.effect_playing = false;
                Vec::new()
            }
        }
    }

    fn on_advance(&mut self) -> Vec<Effect> {
        let Phase::Displaying(index) = self.phase else {
            return Vec::new();
        };

        if index < self.messages.last_index() {
            self.phase = Phase::Displaying(index + 1);
            tracing::debug!("Advancing to message {}", index + 1);
            vec![Effect::Schedule(Timer::Advance, self.timings.advance)]
        } else {
            // Final message has had its full display time; reveal the
            // controls and stop the advance loop for good.
            self.phase = Phase::AwaitingChoice;
            self.controls_visible = true;
            tracing::debug!("Final message done, awaiting choice");
            Vec::new()
        }
    }

    fn on_choice(&mut self, choice: Choice) -> Vec<Effect> {
        // Choices are only valid while the controls are actually shown.
        // Once a choice lands (or celebration starts) further activations
        // are no-ops, so a double-click cannot double-celebrate.
        if self.phase != Phase::AwaitingChoice || !self.controls_visible {
            return Vec::new();
        }

        self.controls_visible = false;
        match choice {
            Choice::Yes => {
                tracing::info!("Choice: yes");
                self.begin_celebration()
            }
            Choice::No => {
                tracing::info!("Choice: no");
                vec![Effect::Schedule(Timer::Ack, self.timings.ack)]
            }
        }
    }

    fn on_ack(&mut self) -> Vec<Effect> {
        // Only reachable from the hidden-controls window after "No".
        if self.phase != Phase::AwaitingChoice || self.controls_visible {
            return Vec::new();
        }

        self.ack_visible = true;
        self.begin_celebration()
    }

    fn on_navigate(&mut self) -> Vec<Effect> {
        if self.phase != Phase::Celebrating {
            return Vec::new();
        }

        self.phase = Phase::Done;
        tracing::info!("Navigating to {}", Route::Surprise.path());
        vec![Effect::Navigate(Route::Surprise)]
    }

    /// The single celebration transition both choices converge on.
    fn begin_celebration(&mut self) -> Vec<Effect> {
        if self.celebration_active {
            return Vec::new();
        }

        self.celebration_active = true;
        self.effect_playing = true;
        self.phase = Phase::Celebrating;
        tracing::info!("Celebration started");
        vec![
            Effect::PlaySound,
            Effect::Schedule(Timer::Navigate, self.timings.navigate),
        ]
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Text of the message currently on screen, if still displaying one.
    pub fn current_message(&self) -> Option<&str> {
        match self.phase {
            Phase::Displaying(i) => self.messages.get(i),
            // The final message stays on screen behind the controls.
            Phase::AwaitingChoice => self.messages.get(self.messages.last_index()),
            Phase::Celebrating | Phase::Done => None,
        }
    }

    /// Index of the message currently on screen.
    pub fn current_index(&self) -> usize {
        match self.phase {
            Phase::Displaying(i) => i,
            _ => self.messages.last_index(),
        }
    }

    /// Whether the Yes/No controls are shown.
    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    /// Whether the celebration has started. Never reverts within a session.
    pub fn celebration_active(&self) -> bool {
        self.celebration_active
    }

    /// Whether the celebration chime is currently playing.
    pub fn effect_playing(&self) -> bool {
        self.effect_playing
    }

    /// Whether the "No" acknowledgement notice is shown.
    pub fn ack_visible(&self) -> bool {
        self.ack_visible
    }

    /// The message list being sequenced.
    pub fn messages(&self) -> &MessageList {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Virtual-clock harness: executes `Schedule` effects as a timestamp
    /// ordered queue, so whole timelines run deterministically.
    struct Harness {
        seq: Sequencer,
        now_ms: u64,
        pending: Vec<(u64, Timer)>,
        navigations: Vec<Route>,
        sounds_played: u32,
    }

    impl Harness {
        fn new(messages: MessageList) -> Self {
            let seq = Sequencer::new(messages, Timings::default());
            let start = seq.start();
            let mut harness = Self {
                seq,
                now_ms: 0,
                pending: Vec::new(),
                navigations: Vec::new(),
                sounds_played: 0,
            };
            harness.run_effects(vec![start]);
            harness
        }

        fn greeting() -> Self {
            Self::new(MessageList::greeting("Khadijah"))
        }

        fn run_effects(&mut self, effects: Vec<Effect>) {
            for effect in effects {
                match effect {
                    Effect::Schedule(timer, delay) => {
                        self.pending.push((self.now_ms + delay.as_millis() as u64, timer));
                    }
                    Effect::PlaySound => self.sounds_played += 1,
                    Effect::Navigate(route) => self.navigations.push(route),
                }
            }
        }

        fn dispatch(&mut self, input: Input) {
            let effects = self.seq.apply(input);
            self.run_effects(effects);
        }

        /// Fires the earliest pending timer, advancing the clock to it.
        /// Returns the time it fired at.
        fn fire_next(&mut self) -> u64 {
            let (pos, _) = self
                .pending
                .iter()
                .enumerate()
                .min_by_key(|(_, (at, _))| *at)
                .expect("a timer should be pending");
            let (at, timer) = self.pending.remove(pos);
            assert!(at >= self.now_ms, "timers fire in schedule order");
            self.now_ms = at;
            self.dispatch(timer.input());
            at
        }

        /// Fires timers until none are pending.
        fn run_to_idle(&mut self) {
            while !self.pending.is_empty() {
                self.fire_next();
            }
        }
    }

    #[test]
    fn test_messages_display_in_order() {
        let mut h = Harness::greeting();
        let mut seen = vec![h.seq.current_index()];

        while matches!(h.seq.phase(), Phase::Displaying(_)) {
            h.fire_next();
            if matches!(h.seq.phase(), Phase::Displaying(_)) {
                seen.push(h.seq.current_index());
            }
        }

        assert_eq!(seen, vec![0, 1, 2, 3]);
        assert_eq!(h.seq.phase(), Phase::AwaitingChoice);
    }

    #[test]
    fn test_index_never_out_of_range() {
        let mut h = Harness::greeting();
        let last = h.seq.messages().last_index();
        for _ in 0..10 {
            assert!(h.seq.current_index() <= last);
            assert!(h.seq.current_message().is_some() || h.seq.celebration_active());
            if h.pending.is_empty() {
                break;
            }
            h.fire_next();
        }
    }

    #[test]
    fn test_controls_reveal_only_after_final_delay() {
        let mut h = Harness::greeting();

        // Three advances walk messages 0 -> 3, controls still hidden.
        for _ in 0..3 {
            assert!(!h.seq.controls_visible());
            h.fire_next();
        }
        assert_eq!(h.seq.phase(), Phase::Displaying(3));
        assert!(!h.seq.controls_visible());

        // The fourth advance reveals the controls instead of incrementing.
        let at = h.fire_next();
        assert_eq!(at, 20_000);
        assert!(h.seq.controls_visible());
        assert_eq!(h.seq.phase(), Phase::AwaitingChoice);

        // The advance loop stopped for good.
        assert!(h.pending.is_empty());
        // The final message stays on screen behind the controls.
        assert_eq!(
            h.seq.current_message(),
            Some("Do you want to see what I've created just for you?")
        );
    }

    #[test]
    fn test_yes_timeline() {
        let mut h = Harness::greeting();
        while h.seq.phase() != Phase::AwaitingChoice {
            h.fire_next();
        }
        let choice_at = h.now_ms;

        h.dispatch(Input::Chose(Choice::Yes));

        // Celebration starts immediately.
        assert!(h.seq.celebration_active());
        assert!(h.seq.effect_playing());
        assert!(!h.seq.controls_visible());
        assert_eq!(h.sounds_played, 1);

        // Navigation fires exactly 3000 ms later.
        let nav_at = h.fire_next();
        assert_eq!(nav_at, choice_at + 3000);
        assert_eq!(h.navigations, vec![Route::Surprise]);
        assert_eq!(h.seq.phase(), Phase::Done);
    }

    #[test]
    fn test_no_timeline_converges_to_celebration() {
        let mut h = Harness::greeting();
        while h.seq.phase() != Phase::AwaitingChoice {
            h.fire_next();
        }
        let choice_at = h.now_ms;

        h.dispatch(Input::Chose(Choice::No));
        assert!(!h.seq.controls_visible());
        assert!(!h.seq.celebration_active());

        // Acknowledgement 500 ms later, celebration starts with it.
        let ack_at = h.fire_next();
        assert_eq!(ack_at, choice_at + 500);
        assert!(h.seq.ack_visible());
        assert!(h.seq.celebration_active());
        assert_eq!(h.sounds_played, 1);

        // Navigation 3000 ms after celebration start.
        let nav_at = h.fire_next();
        assert_eq!(nav_at, choice_at + 3500);
        assert_eq!(h.navigations, vec![Route::Surprise]);
    }

    #[test]
    fn test_exactly_one_celebration_per_session() {
        let mut h = Harness::greeting();
        while h.seq.phase() != Phase::AwaitingChoice {
            h.fire_next();
        }

        // Double activation, then the other control, then a stray ack.
        h.dispatch(Input::Chose(Choice::Yes));
        h.dispatch(Input::Chose(Choice::Yes));
        h.dispatch(Input::Chose(Choice::No));
        h.dispatch(Input::AckElapsed);
        h.run_to_idle();

        assert_eq!(h.sounds_played, 1);
        assert_eq!(h.navigations, vec![Route::Surprise]);
    }

    #[test]
    fn test_navigation_never_before_controls() {
        let mut h = Harness::greeting();

        // Stray inputs during the message sequence do nothing.
        h.dispatch(Input::Chose(Choice::Yes));
        h.dispatch(Input::NavigateElapsed);
        h.dispatch(Input::AckElapsed);
        assert!(h.navigations.is_empty());
        assert!(!h.seq.celebration_active());
        assert_eq!(h.seq.phase(), Phase::Displaying(0));
    }

    #[test]
    fn test_stale_inputs_after_done_are_noops() {
        let mut h = Harness::greeting();
        while h.seq.phase() != Phase::AwaitingChoice {
            h.fire_next();
        }
        h.dispatch(Input::Chose(Choice::Yes));
        h.run_to_idle();
        assert_eq!(h.seq.phase(), Phase::Done);

        h.dispatch(Input::AdvanceElapsed);
        h.dispatch(Input::NavigateElapsed);
        h.dispatch(Input::Chose(Choice::No));

        assert_eq!(h.seq.phase(), Phase::Done);
        assert_eq!(h.navigations.len(), 1);
        assert_eq!(h.sounds_played, 1);
    }

    #[test]
    fn test_sound_fires_once_and_resets() {
        let mut h = Harness::greeting();
        while h.seq.phase() != Phase::AwaitingChoice {
            h.fire_next();
        }
        h.dispatch(Input::Chose(Choice::Yes));
        assert!(h.seq.effect_playing());

        h.dispatch(Input::SoundFinished);
        assert!(!h.seq.effect_playing());
        // Celebration survives the chime ending.
        assert!(h.seq.celebration_active());
        assert_eq!(h.sounds_played, 1);
    }

    #[test]
    fn test_two_message_sequence() {
        let mut h = Harness::new(MessageList::from_lines(["hi", "bye"]));
        assert_eq!(h.seq.current_message(), Some("hi"));

        let at = h.fire_next();
        assert_eq!(at, 5000);
        assert_eq!(h.seq.current_message(), Some("bye"));

        let at = h.fire_next();
        assert_eq!(at, 10_000);
        assert!(h.seq.controls_visible());
    }
}
