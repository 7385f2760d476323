//! Common, shared types.

pub mod layers;
pub mod manifest;
pub mod messages;
pub mod state;
pub mod tunables;

#[cfg(test)]
pub mod test_utils;
