use std::time::Instant;

/// Reports how long each generation stage took, at `debug` level.
pub struct PerformanceProfiler {
    start_time: Instant,
    last_time: Instant,
}

impl PerformanceProfiler {
    pub fn new(start_time: Instant) -> Self {
        Self {
            start_time,
            last_time: start_time,
        }
    }

    fn get_elapsed_time_in_ms(&mut self, from: Instant) -> u128 {
        let current_time = Instant::now();
        let time_in_ms = current_time.duration_since(from).as_millis();
        self.last_time = current_time;
        time_in_ms
    }

    pub fn log_elapsed_time_in_ms(&mut self, text: &str) {
        let elapsed = self.get_elapsed_time_in_ms(self.last_time);
        log::debug!("Profiler: {text} {elapsed} ms");
    }

    pub fn log_total_elapsed_time_in_ms(&mut self, text: &str) {
        let elapsed = self.get_elapsed_time_in_ms(self.start_time);
        log::debug!("Profiler: {text} {elapsed} ms");
    }
}
