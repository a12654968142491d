mod expo;

pub use expo::ExpoPushSender;
