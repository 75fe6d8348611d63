use rand::{Rng, rng};

const DEFAULT_TIPS: &[&str] = &[
    "Draw every day, even for 15 minutes. Regularity matters more than length.",
    "Warm up with loose circles and straight lines before a serious piece.",
    "Squint at your subject to see the big shapes of light and shadow.",
    "Draw from the shoulder for long strokes and from the wrist for detail.",
    "Keep old sketchbooks. Comparing pages is the best measure of progress.",
    "Check proportions by measuring against your pencil at arm's length.",
    "Start with the lightest values and build darks gradually.",
];

/// Rotating tip of the day.
#[derive(Clone, Debug)]
pub struct TipsService {
    tips: Vec<String>,
}

impl Default for TipsService {
    fn default() -> Self {
        Self::new(DEFAULT_TIPS.iter().map(|tip| (*tip).to_string()).collect())
    }
}

impl TipsService {
    #[must_use]
    pub fn new(tips: Vec<String>) -> Self {
        Self { tips }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tips.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }

    #[must_use]
    pub fn tip(&self, index: usize) -> Option<&str> {
        self.tips.get(index).map(String::as_str)
    }

    /// Index of the tip shown first.
    #[must_use]
    pub fn first(&self) -> usize {
        0
    }

    /// Random tip index other than `current` whenever more than one tip exists.
    #[must_use]
    pub fn another(&self, current: usize) -> usize {
        self.another_with(current, &mut rng())
    }

    fn another_with<R: Rng + ?Sized>(&self, current: usize, rng: &mut R) -> usize {
        match self.tips.len() {
            0 | 1 => 0,
            len => {
                // Draw from the other len - 1 slots and skip over `current`.
                let pick = rng.random_range(0..len - 1);
                if pick >= current.min(len - 1) { pick + 1 } else { pick }
            }
        }
    }
}
