//! Transit route server.
//!
//! Answers "what is the quickest way from this station to that one?" over
//! an undirected network of stations joined by timed connections.

pub mod config;
pub mod domain;
pub mod logging;
pub mod network;
pub mod planner;
pub mod web;
