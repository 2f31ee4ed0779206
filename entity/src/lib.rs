pub mod bot;
pub mod tag;
pub mod webhook;
