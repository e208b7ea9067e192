mod generic;
mod sell;
mod table;

pub use self::generic::PgRepository;
pub use self::table::Table;
