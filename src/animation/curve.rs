/// A scalar keyframe curve: parallel time/value arrays.
///
/// The propagation engine only ever *produces* single-keyframe constant
/// curves at t = 0, but template curves are copied verbatim, so arbitrary
/// keyframe data must survive a round trip through a clip.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub times: Vec<f32>,
    pub values: Vec<f32>,
}

impl Curve {
    #[must_use]
    pub fn new(times: Vec<f32>, values: Vec<f32>) -> Self {
        debug_assert_eq!(times.len(), values.len(), "keyframe arrays must match");
        Self { times, values }
    }

    /// Builds the single-keyframe constant curve at t = 0.
    #[must_use]
    pub fn constant(value: f32) -> Self {
        Self {
            times: vec![0.0],
            values: vec![value],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Value of the first keyframe, if any.
    #[must_use]
    pub fn first_value(&self) -> Option<f32> {
        self.values.first().copied()
    }
}
