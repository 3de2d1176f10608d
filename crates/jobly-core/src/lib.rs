pub mod ports;
pub mod wire;
pub mod client;
pub mod mock;
pub mod conversation;
pub mod detail;
pub mod suggestions;
pub mod event_bus;

#[cfg(test)]
mod tests;
