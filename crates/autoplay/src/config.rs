use crate::ObjectiveWeights;

#[derive(Debug, Clone)]
pub struct AutoplayConfig {
    pub seed: u64,
    pub max_steps: u32,
    /// Plays scoring below this are traded for a discard while discards remain.
    pub discard_threshold: f64,
    pub stop_on_defeat: bool,
    pub weights: ObjectiveWeights,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            seed: 0xC0FFEE,
            max_steps: 200,
            discard_threshold: 12.0,
            stop_on_defeat: true,
            weights: ObjectiveWeights::default(),
        }
    }
}
