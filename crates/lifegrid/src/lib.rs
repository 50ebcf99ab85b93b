//! Lifegrid: a cellular automaton kernel on an unbounded integer lattice.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! lifegrid sub-crates. For most users, adding `lifegrid` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use lifegrid::prelude::*;
//!
//! let mut session = Session::new(SessionConfig::default()).unwrap();
//!
//! // Stamp a glider mask at (10, 10).
//! let mask = lifegrid::format::parse_mask("010\n001\n111").unwrap();
//! session.apply(Intent::Stamp(mask.stamp(Cell::new(10, 10))));
//!
//! // Four generations later it has moved one cell diagonally.
//! for _ in 0..4 {
//!     session.apply(Intent::Step);
//! }
//! assert!(session.grid().contains(Cell::new(13, 13)));
//! assert_eq!(session.grid().generation(), Generation(4));
//!
//! // Undo the last step.
//! let outcome = session.apply(Intent::StepBack);
//! assert!(matches!(outcome, Outcome::Replaced(_)));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `lifegrid-core` | Cells, rules, brush masks, intents and outcomes |
//! | [`engine`] | `lifegrid-engine` | Grid kernel, undo history, session, schedulers |
//! | [`format`] | `lifegrid-format` | Text save/load and mask parsing |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`lifegrid-core`).
///
/// Cell coordinates, rule parameters, snapshots, brush masks, and the
/// [`types::Intent`] / [`types::Outcome`] vocabulary.
pub use lifegrid_core as types;

/// Simulation engine (`lifegrid-engine`).
///
/// [`engine::LockstepDriver`] for cooperative polling from a host loop,
/// [`engine::RealtimeWorld`] for autonomous background ticking.
pub use lifegrid_engine as engine;

/// Text persistence (`lifegrid-format`).
///
/// Save with [`format::save_to_path`], load and recenter with
/// [`format::load_from_path`].
pub use lifegrid_format as format;

/// Common imports for typical lifegrid usage.
///
/// ```rust
/// use lifegrid::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use lifegrid_core::{
        BrushMask, Cell, Generation, Intent, NoOpReason, Outcome, RuleParameters, Snapshot,
        TickResult,
    };

    // Errors
    pub use lifegrid_core::{BrushError, IntentError, RuleError, RuleInputError};
    pub use lifegrid_engine::{ConfigError, SubmitError};
    pub use lifegrid_format::FormatError;

    // Engine
    pub use lifegrid_engine::{
        IntentSender, LifeGrid, LockstepDriver, RealtimeWorld, Session, SessionConfig,
        TickMetrics,
    };
}
