//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod error;
pub mod get_hotel_detail;
pub mod hotel_access;
pub mod list_hotels;

pub use error::{HotelError, MissingResource};
pub use get_hotel_detail::GetHotelDetailUseCase;
pub use hotel_access::HotelAccessGuard;
pub use list_hotels::ListHotelsUseCase;
