mod engine;

pub use engine::{
    format_mm_ss, session_length, CompletedSession, SessionTimer, Tick, TimerState,
    SESSION_MINUTES,
};
