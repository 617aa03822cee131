//! Landing animation: the intro camera approach and the scroll-driven launch.

/// Phase state machine and transform rules, free of ECS plumbing.
pub mod sequencer;

/// Systems that feed frames and scroll input into the sequencer.
pub mod systems;
