use crate::error::Result;
use crate::pheromone::LatticeField;
use stigmergy_data::Agent;

#[cfg(feature = "parallel")]
use crate::error::SwarmError;
#[cfg(feature = "parallel")]
use crate::pheromone::DepositBuffer;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Every agent drops `eta` on its current cell, then the field decays once.
pub fn field_update_phase(
    field: &mut LatticeField,
    agents: &[Agent],
    eta: f64,
    decay_factor: f64,
) -> Result<()> {
    for agent in agents {
        field.deposit(agent.x, agent.y, eta)?;
    }
    field.decay(decay_factor)
}

/// Same as [`field_update_phase`], with deposits accumulated concurrently.
#[cfg(feature = "parallel")]
pub fn field_update_phase_parallel(
    field: &mut LatticeField,
    buffer: &mut DepositBuffer,
    agents: &[Agent],
    eta: f64,
    decay_factor: f64,
) -> Result<()> {
    if !(eta >= 0.0 && eta.is_finite()) {
        return Err(SwarmError::invalid_config(format!(
            "deposit amount must be finite and non-negative, got {eta}"
        )));
    }
    let pending: &DepositBuffer = buffer;
    agents
        .par_iter()
        .try_for_each(|agent| pending.deposit(agent.x, agent.y, eta))?;
    buffer.drain_into(field);
    field.decay(decay_factor)
}
