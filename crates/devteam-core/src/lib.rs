//! Core library for devteam.
//!
//! Simulates a team of AI developers: a static model catalog with a mutable
//! team configuration, a description-driven task distributor, timer-driven
//! workers, and a bounded activity feed. Consumers talk to the
//! [`api::TeamCoordinator`] facade.

pub mod api;
pub mod config;
pub mod feed;
pub mod models;
pub mod profile;
pub mod random;
pub mod tasks;
pub mod workers;
