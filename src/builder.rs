use crate::error::Result;
use crate::table::ObstTables;
use crate::traits::Weight;
use crate::ObstEngine;

/// Configures which cost model an [`ObstEngine`] runs.
///
/// Without gap weights the engine uses the "at least one key" model: empty
/// intervals cost nothing. With gap weights every empty slot contributes its
/// own weight, as in the classic formulation with unsuccessful searches.
pub struct ObstBuilder<'a, W: Weight> {
    weights: &'a [W],
    gaps: Option<&'a [W]>,
}

impl<'a, W: Weight> ObstBuilder<'a, W> {
    pub fn new(weights: &'a [W]) -> Self {
        Self {
            weights,
            gaps: None,
        }
    }

    pub fn with_gap_weights(mut self, gaps: &'a [W]) -> Self {
        self.gaps = Some(gaps);
        self
    }

    pub fn build(self) -> Result<ObstEngine<'a, W>> {
        ObstEngine::new(self.weights, self.gaps, self.weights.len())
    }

    /// Shorthand for `build()?.run()`.
    pub fn compute(self) -> Result<ObstTables<W>> {
        self.build()?.run()
    }
}
