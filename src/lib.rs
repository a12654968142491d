//! NewsFeed command-line front end: configuration, tracing and wiring for
//! both the server and the client commands.

pub mod bootstrap;
pub mod commands;
pub mod notifier;
