//! Fixed-size ring buffer for the phaser's delay line.

/// A ring buffer addressed by integer delay.
#[derive(Debug, Clone)]
pub struct DelayLine {
    buffer: Vec<f64>,
    write_pos: usize,
}

impl DelayLine {
    /// Creates a zeroed delay line holding `max_samples` samples.
    pub fn new(max_samples: usize) -> Self {
        Self {
            buffer: vec![0.0; max_samples.max(1)],
            write_pos: 0,
        }
    }

    /// Number of slots in the ring.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Always false; a delay line holds at least one slot.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Writes a sample at the cursor without advancing it.
    pub fn write(&mut self, sample: f64) {
        self.buffer[self.write_pos] = sample;
    }

    /// Reads the sample written `delay_samples` writes before the cursor.
    ///
    /// A delay of 0 reads the slot under the cursor.
    pub fn read(&self, delay_samples: usize) -> f64 {
        let len = self.buffer.len();
        let read_pos = (self.write_pos + len - delay_samples % len) % len;
        self.buffer[read_pos]
    }

    /// Moves the cursor one slot forward, wrapping at the end.
    pub fn advance(&mut self) {
        self.write_pos = (self.write_pos + 1) % self.buffer.len();
    }
}
