//! Shared application state for the TerraPet HTTP service.

use std::path::PathBuf;

use terrapet_core::PetStateEngine;
use terrapet_db::ProgressLedger;

/// State shared by every request handler.
///
/// Holds no per-user data of its own: XP lives in the ledger and the engine
/// receives it as an argument.
#[derive(Debug)]
pub struct AppState {
    /// Computes pet snapshots from XP and live climate data.
    pub engine: PetStateEngine,
    /// Durable per-user progress.
    pub ledger: ProgressLedger,
    /// Directory holding `index.html` and other front-end assets.
    pub static_dir: PathBuf,
}

impl AppState {
    /// Assemble the state from its parts.
    pub const fn new(engine: PetStateEngine, ledger: ProgressLedger, static_dir: PathBuf) -> Self {
        Self {
            engine,
            ledger,
            static_dir,
        }
    }
}
