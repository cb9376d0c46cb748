// src/math_utils.rs

/// Wall-clock stopwatch for benchmarking lattice builds
pub struct Timer {
    start_time: std::time::Instant,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: std::time::Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.start_time = std::time::Instant::now();
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of nodes in a `steps`-deep triangular lattice
pub fn lattice_node_count(steps: usize) -> usize {
    (steps + 1) * (steps + 2) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lattice_node_count() {
        assert_eq!(lattice_node_count(0), 1);
        assert_eq!(lattice_node_count(2), 6);
        assert_eq!(lattice_node_count(100), 5151);
    }

    #[test]
    fn test_timer_is_monotonic() {
        let timer = Timer::new();
        let first = timer.elapsed_ms();
        let second = timer.elapsed_ms();
        assert!(second >= first);
    }
}
