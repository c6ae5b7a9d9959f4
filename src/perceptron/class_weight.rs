use serde::{Serialize, Deserialize};
use std::collections::HashMap;

use crate::error::{Result, PerceptronError};


/// Weighting strategy over the two classes.
/// Each training update is multiplied by the weight of
/// the true class of the example.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ClassWeight {
    /// Weight `1.0` for both classes.
    #[default]
    Uniform,
    /// Weight `n_sample / (2 * count_of_the_class)` for each class.
    /// Both classes must appear in the target.
    Balanced,
    /// Explicit mapping from a label to its weight.
    /// The mapping must contain exactly the labels `0` and `1`,
    /// each with a positive finite weight.
    Explicit(HashMap<i64, f64>),
}


/// Resolved weights for the labels `0` and `1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassWeights {
    /// Weight for the label `0`.
    pub negative: f64,
    /// Weight for the label `1`.
    pub positive: f64,
}


impl ClassWeights {
    /// Weight `1.0` for both classes.
    pub const UNIFORM: Self = Self { negative: 1.0, positive: 1.0 };


    /// Returns the weight for `label`.
    #[inline(always)]
    pub fn get(&self, label: i64) -> f64 {
        if label == 1 { self.positive } else { self.negative }
    }
}


impl Default for ClassWeights {
    fn default() -> Self {
        Self::UNIFORM
    }
}


impl ClassWeight {
    /// Construct an explicit mapping from `(label, weight)` pairs.
    pub fn explicit<I>(pairs: I) -> Self
        where I: IntoIterator<Item = (i64, f64)>
    {
        Self::Explicit(pairs.into_iter().collect())
    }


    /// Resolve the strategy into concrete weights for `target`.
    /// `target` must consist of `0`s and `1`s.
    pub fn resolve(&self, target: &[i64]) -> Result<ClassWeights> {
        match self {
            Self::Uniform => Ok(ClassWeights::UNIFORM),
            Self::Balanced => balanced(target),
            Self::Explicit(map) => explicit(map),
        }
    }
}


fn balanced(target: &[i64]) -> Result<ClassWeights> {
    let n_sample = target.len() as f64;
    let n_positive = target.iter()
        .filter(|&&y| y == 1)
        .count();
    let n_negative = target.len() - n_positive;

    if n_negative == 0 {
        return Err(PerceptronError::MissingClass { label: 0 });
    }
    if n_positive == 0 {
        return Err(PerceptronError::MissingClass { label: 1 });
    }

    let weights = ClassWeights {
        negative: n_sample / (2.0 * n_negative as f64),
        positive: n_sample / (2.0 * n_positive as f64),
    };
    Ok(weights)
}


fn explicit(map: &HashMap<i64, f64>) -> Result<ClassWeights> {
    let mut labels = map.keys().copied().collect::<Vec<_>>();
    labels.sort_unstable();
    if let Some(&label) = labels.iter().find(|&&label| label != 0 && label != 1) {
        return Err(PerceptronError::InvalidClassWeight {
            label,
            reason: "only the labels 0 and 1 are allowed",
        });
    }

    let weight_of = |label: i64| -> Result<f64> {
        let weight = *map.get(&label)
            .ok_or(PerceptronError::InvalidClassWeight {
                label,
                reason: "no weight is given",
            })?;
        if !(weight.is_finite() && weight > 0.0) {
            return Err(PerceptronError::InvalidClassWeight {
                label,
                reason: "the weight must be a positive finite number",
            });
        }
        Ok(weight)
    };

    let weights = ClassWeights {
        negative: weight_of(0)?,
        positive: weight_of(1)?,
    };
    Ok(weights)
}
