//! UseCase 層のエラー定義

use std::fmt;

use thiserror::Error;

use crate::domain::{IneligibleReason, RepositoryError};

/// ホテル関連ユースケースのエラー
///
/// 失敗の種類は 3 つに閉じている。UI 層はこの enum をステータスコードに変換する。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HotelError {
    /// 必要なリソース（申込、チケット、ホテル）が存在しない
    #[error("{0} not found")]
    NotFound(MissingResource),

    /// チケットがホテルの閲覧条件を満たさない
    #[error("cannot find a valid ticket to get hotel: {0}")]
    CannotFindAValidTicketToGetHotel(IneligibleReason),

    /// ストアの失敗
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// 見つからなかったリソース
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingResource {
    Enrollment,
    Ticket,
    Hotel,
}

impl fmt::Display for MissingResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Enrollment => "enrollment",
            Self::Ticket => "ticket",
            Self::Hotel => "hotel",
        };
        f.write_str(name)
    }
}
