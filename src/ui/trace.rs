use serde::Serialize;
use std::io::{self, Write};
use stigmergy_core::engine::RunSummary;
use stigmergy_core::observer::FrameObserver;
use stigmergy_core::pheromone::{FieldStats, LatticeField};
use stigmergy_core::population::AgentPopulation;
use stigmergy_core::PopulationSnapshot;

/// One line of a JSON-lines trace.
#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum TraceRecord<'a> {
    Initialized {
        snapshot: PopulationSnapshot,
    },
    Tick {
        snapshot: PopulationSnapshot,
        field: FieldStats,
    },
    Terminated {
        summary: &'a RunSummary,
    },
}

/// Writes agent snapshots as JSON lines, every `interval` ticks.
///
/// The first write error is kept and later frames are dropped; it is
/// returned from [`finish`](Self::finish).
pub struct TraceRecorder<W: Write> {
    out: W,
    interval: u64,
    frames: u64,
    error: Option<io::Error>,
}

impl<W: Write> TraceRecorder<W> {
    /// `interval` of 0 records only the initial and final records.
    pub fn new(out: W, interval: u64) -> Self {
        Self {
            out,
            interval,
            frames: 0,
            error: None,
        }
    }

    /// Number of records written so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn write(&mut self, record: &TraceRecord<'_>) {
        if self.error.is_some() {
            return;
        }
        let result = serde_json::to_writer(&mut self.out, record)
            .map_err(io::Error::from)
            .and_then(|()| self.out.write_all(b"\n"));
        match result {
            Ok(()) => self.frames += 1,
            Err(err) => {
                tracing::error!(error = %err, "Trace write failed, recording stopped");
                self.error = Some(err);
            }
        }
    }

    /// Flushes the writer and hands it back.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> FrameObserver for TraceRecorder<W> {
    fn on_initialized(&mut self, population: &AgentPopulation) {
        self.write(&TraceRecord::Initialized {
            snapshot: population.snapshot(0),
        });
    }

    fn on_tick(&mut self, tick: u64, population: &AgentPopulation, field: &LatticeField) {
        if self.interval == 0 || tick % self.interval != 0 {
            return;
        }
        self.write(&TraceRecord::Tick {
            snapshot: population.snapshot(tick),
            field: field.stats(),
        });
    }

    fn on_terminated(&mut self, summary: &RunSummary) {
        self.write(&TraceRecord::Terminated { summary });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stigmergy_core::config::AppConfig;
    use stigmergy_core::engine::DynamicsEngine;

    #[test]
    fn test_records_every_interval() {
        let mut config = AppConfig::default();
        config.world.width = 10;
        config.world.height = 10;
        config.world.agent_count = 5;
        config.world.steps = 6;
        config.world.seed = Some(3);
        let mut engine = DynamicsEngine::new(config).unwrap();

        let mut recorder = TraceRecorder::new(Vec::new(), 2);
        engine.run(&mut recorder).unwrap();
        assert_eq!(recorder.frames(), 5);

        let bytes = recorder.finish().unwrap();
        let lines: Vec<serde_json::Value> = String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines[0]["event"], "initialized");
        assert_eq!(lines[1]["event"], "tick");
        assert_eq!(lines[1]["snapshot"]["tick"], 2);
        assert_eq!(lines[1]["snapshot"]["agents"].as_array().unwrap().len(), 5);
        assert_eq!(lines[4]["event"], "terminated");
        assert_eq!(lines[4]["summary"]["ticks"], 6);
    }
}
