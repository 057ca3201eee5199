//! Domain-level error type used across services and store adapters.
//!
//! This error type is transport- and storage-agnostic. Engine calls return
//! their own closed error enums; the service layer converts them into
//! `DomainError` via the `From` implementations at the bottom of this file.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::errors::{CreateGameError, FlipCardError, PlaceBidError, PlayCardError};
use crate::errors::error_code::ErrorCode;
use crate::store::StoreError;

/// Validation kinds: rule violations reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    InvalidPlayerCount,
    DuplicatePlayer,
    OutOfTurn,
    InvalidCard,
    CardPlayAfterBid,
    BidTooEarly,
    BidTooHigh,
    BidTooLow,
    BiddingFinished,
    MustRevealOwnFirst,
    NoCardsToFlip,
    Other(String),
}

/// Domain-level not found entities (minimal set; extend as needed)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Game,
    Other(String),
}

/// Domain-level conflict kinds (extend as needed)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    OptimisticLock,
    Other(String),
}

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Storage,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or business rule violation
    Validation(ValidationKind, String),
    /// Semantic conflict
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    /// Stable code for logs and for the excluded transport layer.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::InvalidPlayerCount => ErrorCode::InvalidPlayerCount,
                ValidationKind::DuplicatePlayer => ErrorCode::DuplicatePlayer,
                ValidationKind::OutOfTurn => ErrorCode::OutOfTurn,
                ValidationKind::InvalidCard => ErrorCode::InvalidCard,
                ValidationKind::CardPlayAfterBid => ErrorCode::CardPlayAfterBid,
                ValidationKind::BidTooEarly => ErrorCode::BidTooEarly,
                ValidationKind::BidTooHigh => ErrorCode::BidTooHigh,
                ValidationKind::BidTooLow => ErrorCode::BidTooLow,
                ValidationKind::BiddingFinished => ErrorCode::BiddingFinished,
                ValidationKind::MustRevealOwnFirst => ErrorCode::MustRevealOwnFirst,
                ValidationKind::NoCardsToFlip => ErrorCode::NoCardsToFlip,
                ValidationKind::Other(_) => ErrorCode::ValidationError,
            },
            DomainError::Conflict(ConflictKind::OptimisticLock, _) => ErrorCode::OptimisticLock,
            DomainError::Conflict(_, _) => ErrorCode::Conflict,
            DomainError::NotFound(NotFoundKind::Game, _) => ErrorCode::GameNotFound,
            DomainError::NotFound(_, _) => ErrorCode::NotFound,
            DomainError::Infra(InfraErrorKind::Storage, _) => ErrorCode::StorageError,
            DomainError::Infra(_, _) => ErrorCode::Internal,
        }
    }
}

impl From<CreateGameError> for DomainError {
    fn from(err: CreateGameError) -> Self {
        let kind = match err {
            CreateGameError::InvalidPlayerCount => ValidationKind::InvalidPlayerCount,
            CreateGameError::DuplicatePlayer => ValidationKind::DuplicatePlayer,
        };
        DomainError::Validation(kind, err.to_string())
    }
}

impl From<PlayCardError> for DomainError {
    fn from(err: PlayCardError) -> Self {
        let kind = match err {
            PlayCardError::InvalidPlayerId => ValidationKind::OutOfTurn,
            PlayCardError::CannotPlayCardAfterBid => ValidationKind::CardPlayAfterBid,
            PlayCardError::InvalidCardId => ValidationKind::InvalidCard,
        };
        DomainError::Validation(kind, err.to_string())
    }
}

impl From<PlaceBidError> for DomainError {
    fn from(err: PlaceBidError) -> Self {
        let kind = match err {
            PlaceBidError::InvalidPlayerId => ValidationKind::OutOfTurn,
            PlaceBidError::CannotBidYet => ValidationKind::BidTooEarly,
            PlaceBidError::MaxBidExceeded => ValidationKind::BidTooHigh,
            PlaceBidError::MinBidNotMet => ValidationKind::BidTooLow,
            PlaceBidError::BiddingHasFinished => ValidationKind::BiddingFinished,
        };
        DomainError::Validation(kind, err.to_string())
    }
}

impl From<FlipCardError> for DomainError {
    fn from(err: FlipCardError) -> Self {
        let kind = match err {
            FlipCardError::InvalidPlayerId => ValidationKind::OutOfTurn,
            FlipCardError::MustRevealAllOwnCardsFirst => ValidationKind::MustRevealOwnFirst,
            FlipCardError::NoCardsLeftToFlip => ValidationKind::NoCardsToFlip,
        };
        DomainError::Validation(kind, err.to_string())
    }
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => {
                DomainError::not_found(NotFoundKind::Game, format!("Game {id} not found"))
            }
            StoreError::VersionMismatch { expected, actual } => DomainError::conflict(
                ConflictKind::OptimisticLock,
                format!(
                    "Game was modified concurrently (expected version {expected}, \
                     actual version {actual}). Please refresh and retry."
                ),
            ),
            StoreError::Backend(detail) => DomainError::infra(InfraErrorKind::Storage, detail),
        }
    }
}
