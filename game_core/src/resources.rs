/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub dt: f32,  // Delta time of the last advance
    pub now: f32, // Total simulated time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

/// Points earned since the last miss
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub points: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        self.points = self.points.saturating_add(1);
    }

    pub fn reset(&mut self) {
        self.points = 0;
    }

    /// Text shown above the box
    pub fn label(&self) -> String {
        self.points.to_string()
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }

    /// Seeded when a seed is given, otherwise from OS entropy
    pub fn from_seed_opt(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during the last advance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub ball_returned: bool,
    pub ball_missed: bool,
    pub ball_hit_wall: bool,
    pub score_changed: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment_and_reset() {
        let mut score = Score::new();
        assert_eq!(score.points, 0);
        score.increment();
        score.increment();
        assert_eq!(score.points, 2);
        assert_eq!(score.label(), "2");
        score.reset();
        assert_eq!(score.points, 0);
        assert_eq!(score.label(), "0");
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events {
            ball_returned: true,
            ball_missed: true,
            ball_hit_wall: true,
            score_changed: true,
        };

        events.clear();

        assert_eq!(events, Events::new());
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        use rand::Rng;
        let mut a = GameRng::new(99);
        let mut b = GameRng::from_seed_opt(Some(99));
        for _ in 0..16 {
            assert_eq!(a.0.gen::<u64>(), b.0.gen::<u64>());
        }
    }
}
