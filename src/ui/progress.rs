use stigmergy_core::config::AppConfig;
use stigmergy_core::engine::RunSummary;
use stigmergy_core::observer::FrameObserver;
use stigmergy_core::pheromone::LatticeField;
use stigmergy_core::population::AgentPopulation;
use stigmergy_core::Heading;

/// Logs how strongly the swarm has organised into trails.
pub struct ProgressLog {
    interval: u64,
}

impl ProgressLog {
    /// `interval` of 0 logs only the start and the end of the run.
    pub fn new(interval: u64) -> Self {
        Self { interval }
    }

    /// Takes over `output.log_interval`, silencing the engine's own periodic
    /// metrics line so each interval logs once.
    pub fn take_interval(config: &mut AppConfig) -> Self {
        Self::new(std::mem::take(&mut config.output.log_interval))
    }
}

/// Share of agents per heading.
pub fn heading_histogram(population: &AgentPopulation) -> [f64; 8] {
    let mut counts = [0usize; Heading::COUNT];
    for agent in population.agents() {
        counts[agent.heading.index()] += 1;
    }
    let total = population.len().max(1) as f64;
    counts.map(|c| c as f64 / total)
}

/// Fraction of agents standing on a cell above `threshold` concentration.
pub fn trail_fraction(population: &AgentPopulation, field: &LatticeField, threshold: f64) -> f64 {
    if population.is_empty() {
        return 0.0;
    }
    let on_trail = population
        .agents()
        .iter()
        .filter(|a| field.get(a.x, a.y).is_ok_and(|c| c > threshold))
        .count();
    on_trail as f64 / population.len() as f64
}

impl FrameObserver for ProgressLog {
    fn on_initialized(&mut self, population: &AgentPopulation) {
        tracing::info!(agents = population.len(), "Initial population placed");
    }

    fn on_tick(&mut self, tick: u64, population: &AgentPopulation, field: &LatticeField) {
        if self.interval == 0 || tick % self.interval != 0 {
            return;
        }
        let histogram = heading_histogram(population);
        let dominant = histogram
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap_or(0);
        let stats = field.stats();
        tracing::info!(
            tick,
            mass = stats.total_mass,
            peak = stats.max_concentration,
            occupied = stats.occupied_cells,
            on_trail = trail_fraction(population, field, 1.0),
            dominant_heading = dominant,
            dominant_share = histogram[dominant],
            "Trail formation"
        );
    }

    fn on_terminated(&mut self, summary: &RunSummary) {
        tracing::info!(
            ticks = summary.ticks,
            occupied = summary.occupied_cells,
            peak = summary.peak_concentration,
            "Run complete"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stigmergy_core::lattice::Torus;
    use stigmergy_core::Agent;

    #[test]
    fn test_histogram_and_trail_fraction() {
        let torus = Torus::new(4, 4).unwrap();
        let agents = vec![
            Agent::new(0, 0, Heading::from_index(2)),
            Agent::new(1, 0, Heading::from_index(2)),
            Agent::new(2, 0, Heading::from_index(5)),
            Agent::new(3, 0, Heading::from_index(2)),
        ];
        let population = AgentPopulation::from_agents(agents, torus).unwrap();
        let histogram = heading_histogram(&population);
        assert_eq!(histogram[2], 0.75);
        assert_eq!(histogram[5], 0.25);

        let mut field = LatticeField::new(torus);
        field.deposit(0, 0, 2.0).unwrap();
        field.deposit(1, 0, 0.5).unwrap();
        assert_eq!(trail_fraction(&population, &field, 1.0), 0.25);
    }

    #[test]
    fn test_take_interval_silences_engine_metrics() {
        let mut config = AppConfig::default();
        config.output.log_interval = 250;
        let progress = ProgressLog::take_interval(&mut config);
        assert_eq!(progress.interval, 250);
        assert_eq!(config.output.log_interval, 0);
    }
}
