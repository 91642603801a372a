//! Domain layer: usage records, the Repo → Package → File hierarchy and the
//! pure services that classify and fold usages into it.
pub mod domain;
pub mod services;
