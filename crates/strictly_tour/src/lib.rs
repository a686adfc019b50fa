//! Strictly Tour - knight's tour rules and move advice.
//!
//! A knight moves across an N×M board visiting distinct squares with legal
//! knight moves. The tour is won when every square has been visited and
//! lost when the knight has no unvisited square left to jump to.
//!
//! # Architecture
//!
//! - **Types**: [`Position`], [`BoardDimensions`], [`VisitedPath`],
//!   [`Phase`] and the [`TourState`] snapshot
//! - **Typestate**: [`TourSetup`] → [`TourInProgress`] → [`TourFinished`]
//! - **Engine**: [`TourEngine`] owns one tour and turns clicks into
//!   [`Selection`]s
//! - **Advisor**: [`MoveAdvisor`] suggests the next square by Warnsdorff's
//!   rule, reading snapshots only
//! - **Contracts**: [`StepContract`] and the [`TourInvariants`] set
//!
//! # Example
//!
//! ```
//! use strictly_tour::{BoardDimensions, MoveAdvisor, Phase, Position, TourEngine};
//!
//! let mut engine = TourEngine::new(BoardDimensions::chessboard());
//! let report = engine.select_square(Position::new(0, 0));
//! assert_eq!(report.state.phase(), Phase::InProgress);
//!
//! let hint = MoveAdvisor::suggest(&engine.snapshot());
//! assert!(hint.is_some());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod advisor;
mod contracts;
mod engine;
pub mod invariants;
mod knight;
pub mod rules;
mod typestate;
mod types;

// Crate-level exports - Domain types
pub use types::{BoardDimensions, Phase, Position, TourState, VisitedPath};

// Crate-level exports - Selections and errors
pub use action::{FinalScore, MoveError, Outcome, Selection, TourError};

// Crate-level exports - Knight geometry
pub use knight::{KNIGHT_OFFSETS, is_knight_step, knight_targets, legal_moves_from};

// Crate-level exports - Typestate lifecycle
pub use typestate::{Refused, TourFinished, TourInProgress, TourResult, TourSetup};

// Crate-level exports - Contracts and invariants
pub use contracts::{Contract, KnightStep, LegalStep, OnBoard, StepContract, Unvisited};
pub use invariants::{Invariant, InvariantSet, InvariantViolation, TourInvariants};

// Crate-level exports - Engine and advisor
pub use advisor::{MoveAdvisor, RankedMove};
pub use engine::{AnyTour, SelectionReport, TourEngine};
