mod database;
mod kafka;
mod myconfig;

pub use self::database::{ConnectionManager, ConnectionPool};
pub use self::kafka::Kafka;
pub use self::myconfig::Config;
