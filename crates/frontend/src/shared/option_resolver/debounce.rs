/// Generation counter behind debounced input.
///
/// Every keystroke schedules a new generation; when the delay elapses only
/// the generation that is still current may fire.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay_ms: u32,
    generation: u64,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            generation: 0,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn schedule(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Drop whatever is pending
    pub fn cancel(&mut self) {
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_last_schedule_fires() {
        let mut d = Debouncer::new(400);
        let first = d.schedule();
        let second = d.schedule();
        assert!(!d.is_current(first));
        assert!(d.is_current(second));
        d.cancel();
        assert!(!d.is_current(second));
        assert_eq!(d.delay_ms(), 400);
    }
}
