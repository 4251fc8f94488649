// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod notify;
pub mod security;
pub mod time;

pub use notify::{CapturingMailer, CapturingSocial, FailingMailer, FailingSocial};
pub use security::{StaticTokenManager, StrictPasswordHasher, token_for};
pub use time::{SteppingClock, fixed_now};
