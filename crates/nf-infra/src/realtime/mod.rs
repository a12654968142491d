mod backoff;
mod ws_channel;

pub use backoff::Backoff;
pub use ws_channel::WsRealtimeChannel;
