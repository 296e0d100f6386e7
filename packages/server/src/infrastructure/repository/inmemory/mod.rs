//! インメモリ実装
//!
//! 全リポジトリが 1 つの InMemoryDatabase を共有します。

pub mod database;
pub mod enrollment;
#[cfg(test)]
pub(crate) mod fixture;
pub mod hotel;
pub mod ticket;

pub use database::InMemoryDatabase;
pub use enrollment::InMemoryEnrollmentRepository;
pub use hotel::InMemoryHotelRepository;
pub use ticket::InMemoryTicketRepository;
