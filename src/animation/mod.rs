pub mod flip_transition;

pub use flip_transition::{
    FlipAnimator, PhaseState, TransitionPhase, TransitionTiming, BOOTSTRAP_EPSILON,
};
