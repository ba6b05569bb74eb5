//! Command interpreter for FinSee voice transcripts.
//!
//! Maps a finalized transcript to zero-or-one [`Intent`] via ordered,
//! case-insensitive pattern matching. Matching is pure: no state is read or
//! written beyond the transcript, the active screen, and the compiled grammar.

pub mod banks;
pub mod navigation;
pub mod patterns;
pub mod types;

pub use banks::match_bank;
pub use navigation::{Destination, NavigationRegistry};
pub use patterns::CommandGrammar;
pub use types::{Field, Intent};
