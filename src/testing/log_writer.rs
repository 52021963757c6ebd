use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const LEVELS: [&str; 4] = ["DEBUG", "INFO", "WARNING", "ERROR"];
const OBJECTS: [&str; 4] = ["Mainframe", "Server", "CPU", "Battery"];
const MEASUREMENTS: [&str; 3] = ["voltage", "current", "capacitance"];

/// Deterministic synthetic log generator for tests.
///
/// Emits `hh:mm.ss|LEVEL|Object_measurement: value` lines with a clock
/// that ticks one second per line. The same seed always produces the
/// same lines.
#[derive(Debug)]
pub struct LogWriter {
    rng: StdRng,
    hours: u32,
    minutes: u32,
    seconds: u32,
}

impl LogWriter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            hours: 4,
            minutes: 20,
            seconds: 0,
        }
    }

    /// Produces the next line and advances the clock.
    pub fn line(&mut self) -> String {
        let time = format!("{:02}:{:02}.{:02}", self.hours, self.minutes, self.seconds);
        self.tick();
        let level = LEVELS[self.rng.random_range(0..LEVELS.len())];
        let object = OBJECTS[self.rng.random_range(0..OBJECTS.len())];
        let measurement = MEASUREMENTS[self.rng.random_range(0..MEASUREMENTS.len())];
        let value = (self.rng.random_range(0.0f64..10.0) * 1000.0).round() / 1000.0;
        format!("{time}|{level}|{object}_{measurement}: {value}")
    }

    /// Writes `count` lines to `path`.
    pub fn write_to<P: AsRef<Path>>(&mut self, path: P, count: usize) -> io::Result<()> {
        let mut w = BufWriter::new(File::create(path)?);
        for _ in 0..count {
            writeln!(w, "{}", self.line())?;
        }
        w.flush()
    }

    fn tick(&mut self) {
        self.seconds += 1;
        if self.seconds == 60 {
            self.seconds = 0;
            self.minutes += 1;
            if self.minutes == 60 {
                self.minutes = 0;
                self.hours = (self.hours + 1) % 24;
            }
        }
    }
}
