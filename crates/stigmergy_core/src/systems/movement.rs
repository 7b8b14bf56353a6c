use crate::bias::DirectionalBias;
use crate::error::Result;
use crate::lattice::Torus;
use crate::pheromone::LatticeField;
use crate::response::FieldResponse;
use crate::sampler;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use stigmergy_data::{Agent, EdgeTable, Heading};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Everything an agent reads while choosing its next step.
pub struct MovementContext<'a> {
    pub torus: &'a Torus,
    pub edges: &'a EdgeTable,
    pub bias: &'a DirectionalBias,
    pub response: &'a FieldResponse,
    pub field: &'a LatticeField,
    pub seed: u64,
    pub tick: u64,
}

/// Words of keystream reserved for each agent within a tick's stream.
const AGENT_STRIDE: u128 = 1 << 32;

/// Independent random stream for one agent in one tick.
///
/// The seed keys the cipher, the tick selects the ChaCha stream and the agent
/// index picks a disjoint window of it. Draws therefore depend only on
/// `(seed, tick, index)`, not on which thread moves the agent or in what order.
pub fn agent_stream(seed: u64, tick: u64, index: usize) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(tick);
    rng.set_word_pos(index as u128 * AGENT_STRIDE);
    rng
}

/// Directional bias times field response for each of the eight neighbours.
pub fn combined_weights(agent: &Agent, ctx: &MovementContext<'_>) -> Result<[f64; 8]> {
    let orientation = ctx.bias.weights(agent.heading);
    let sensed = ctx
        .response
        .weights(&ctx.field.neighborhood(agent.x, agent.y, ctx.edges)?);
    Ok(std::array::from_fn(|k| orientation[k] * sensed[k]))
}

/// Picks a new heading for `agent` and moves it one cell along it.
pub fn move_agent<R: Rng + ?Sized>(
    agent: &mut Agent,
    ctx: &MovementContext<'_>,
    rng: &mut R,
) -> Result<()> {
    let weights = combined_weights(agent, ctx)?;
    let heading = Heading::from_index(sampler::sample(&weights, rng)?);
    let (x, y) = ctx.torus.step(agent.x, agent.y, ctx.edges.get(heading));
    *agent = Agent::new(x, y, heading);
    Ok(())
}

pub fn movement_phase(agents: &mut [Agent], ctx: &MovementContext<'_>) -> Result<()> {
    agents.iter_mut().enumerate().try_for_each(|(i, agent)| {
        let mut rng = agent_stream(ctx.seed, ctx.tick, i);
        move_agent(agent, ctx, &mut rng)
    })
}

#[cfg(feature = "parallel")]
pub fn movement_phase_parallel(agents: &mut [Agent], ctx: &MovementContext<'_>) -> Result<()> {
    agents.par_iter_mut().enumerate().try_for_each(|(i, agent)| {
        let mut rng = agent_stream(ctx.seed, ctx.tick, i);
        move_agent(agent, ctx, &mut rng)
    })
}
