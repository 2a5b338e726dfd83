//! Terminal host for the controller.
//!
//! Owns the terminal, turns key presses and timer deadlines into
//! controller events, and carries out the effects that come back.

mod app;
mod screens;
mod ticks;

pub use app::run;
