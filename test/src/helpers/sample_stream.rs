/// One update as the session layer would hand it to an extrapolator
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample<const N: usize> {
    pub packet_time: f64,
    pub local_time: f64,
    pub position: [f64; N],
    pub velocity: [f64; N],
}

/// Synthesizes updates for an entity moving at constant velocity.
///
/// Packets are sent every `interval` seconds starting at `start`, and each is
/// processed `latency` seconds later plus the next entry of a repeating
/// jitter pattern.
pub struct SampleStream<const N: usize> {
    origin: [f64; N],
    velocity: [f64; N],
    start: f64,
    interval: f64,
    latency: f64,
    jitter: Vec<f64>,
    index: usize,
}

impl<const N: usize> SampleStream<N> {
    pub fn new(origin: [f64; N], velocity: [f64; N], interval: f64, latency: f64) -> Self {
        Self {
            origin,
            velocity,
            start: 0.0,
            interval,
            latency,
            jitter: Vec::new(),
            index: 0,
        }
    }

    pub fn starting_at(mut self, start: f64) -> Self {
        self.start = start;
        self
    }

    pub fn with_jitter(mut self, jitter: Vec<f64>) -> Self {
        self.jitter = jitter;
        self
    }

    /// Where the entity truly is at `time`
    pub fn true_position(&self, time: f64) -> [f64; N] {
        let elapsed = time - self.start;
        std::array::from_fn(|i| self.origin[i] + self.velocity[i] * elapsed)
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    pub fn latency(&self) -> f64 {
        self.latency
    }
}

impl<const N: usize> Iterator for SampleStream<N> {
    type Item = Sample<N>;

    fn next(&mut self) -> Option<Self::Item> {
        let packet_time = self.start + self.interval * self.index as f64;
        let jitter = if self.jitter.is_empty() {
            0.0
        } else {
            self.jitter[self.index % self.jitter.len()]
        };
        self.index += 1;

        Some(Sample {
            packet_time,
            local_time: packet_time + self.latency + jitter,
            position: self.true_position(packet_time),
            velocity: self.velocity,
        })
    }
}
