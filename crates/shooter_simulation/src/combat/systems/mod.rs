//! Combat systems (fire, reload, timers)

pub mod fire;
pub mod reload;
pub mod timers;

#[cfg(test)]
mod reload_tests;
#[cfg(test)]
mod timers_tests;

// Re-export all systems
pub use fire::*;
pub use reload::*;
pub use timers::*;
