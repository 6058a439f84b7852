//! Chess engine resource
//!
//! The single source of truth for the position. Systems never see which
//! implementation sits behind it, only the [`RulesEngine`] trait.
//!
//! # Usage
//!
//! ```rust,ignore
//! fn side_to_move(engine: Res<ChessEngine>) {
//!     let color = engine.rules().current_turn();
//!     info!("{} to move", color.name());
//! }
//! ```

use bevy::prelude::*;

use crate::game::rules::{RulesEngine, ShakmatyEngine};

pub type DynRulesEngine = dyn RulesEngine + Send + Sync;

#[derive(Resource)]
pub struct ChessEngine {
    engine: Box<DynRulesEngine>,
}

impl Default for ChessEngine {
    fn default() -> Self {
        Self::new(ShakmatyEngine::new())
    }
}

impl ChessEngine {
    pub fn new(engine: impl RulesEngine + Send + Sync + 'static) -> Self {
        Self {
            engine: Box::new(engine),
        }
    }

    pub fn rules(&self) -> &DynRulesEngine {
        self.engine.as_ref()
    }

    pub fn rules_mut(&mut self) -> &mut DynRulesEngine {
        self.engine.as_mut()
    }
}
