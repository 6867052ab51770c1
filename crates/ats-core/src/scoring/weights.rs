/// Fixed weights for the four sub-scores. Not configurable at runtime; tests
/// assert the exact formula against these values.
pub const DEFAULT_WEIGHTS: ScoringWeights = ScoringWeights {
    skill: 0.4,
    experience: 0.3,
    education: 0.2,
    format: 0.1,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub skill: f64,
    pub experience: f64,
    pub education: f64,
    pub format: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.skill + self.experience + self.education + self.format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        assert!((DEFAULT_WEIGHTS.sum() - 1.0).abs() < 1e-6);
    }
}
