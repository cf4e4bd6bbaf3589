use crate::error::GeneratorResult;
use crate::generator::generate;
use crate::params::ParameterSet;
use crate::point_cloud::PointCloud;
use crate::random::UniformSource;
use bevy::log::{debug, info};

/// One requested generation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationTicket {
    pub id: u64,
    pub params: ParameterSet,
}

/// Decides when the cloud must be rebuilt and which result is current.
///
/// Any change to the parameters asks for a full regeneration. Only the newest
/// ticket may commit a result; anything older is dropped, so at most one cloud
/// is ever current.
#[derive(Debug, Default)]
pub struct Regenerator {
    proposed: Option<ParameterSet>,
    committed: Option<ParameterSet>,
    latest: u64,
}

impl Regenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket if `params` differs from the last proposed set.
    ///
    /// The first proposal always gets one. A new ticket makes every older one
    /// stale.
    pub fn propose(&mut self, params: &ParameterSet) -> Option<GenerationTicket> {
        if self.proposed.as_ref() == Some(params) {
            return None;
        }
        self.proposed = Some(*params);
        self.latest += 1;
        debug!("Issued generation ticket {}", self.latest);
        Some(GenerationTicket {
            id: self.latest,
            params: *params,
        })
    }

    pub fn is_current(&self, ticket_id: u64) -> bool {
        ticket_id == self.latest
    }

    /// Hands in the outcome of the pass started for `ticket`.
    ///
    /// Stale results yield `Ok(None)`. A current success is committed and
    /// returned; a current failure is returned and leaves the committed set as
    /// it was.
    pub fn complete(
        &mut self,
        ticket: &GenerationTicket,
        result: GeneratorResult<PointCloud>,
    ) -> GeneratorResult<Option<PointCloud>> {
        if !self.is_current(ticket.id) {
            debug!(
                "Discarding result of stale ticket {} (latest is {})",
                ticket.id, self.latest
            );
            return Ok(None);
        }
        let cloud = result?;
        info!(
            "Committed generation {} with {} particles",
            ticket.id,
            cloud.len()
        );
        self.committed = Some(ticket.params);
        Ok(Some(cloud))
    }

    /// Regenerates synchronously if `params` changed.
    ///
    /// `Ok(None)` means the parameters were unchanged and the current cloud
    /// still applies.
    pub fn on_parameter_change<R: UniformSource>(
        &mut self,
        params: &ParameterSet,
        rng: &mut R,
    ) -> GeneratorResult<Option<PointCloud>> {
        let Some(ticket) = self.propose(params) else {
            return Ok(None);
        };
        let result = generate(&ticket.params, rng);
        self.complete(&ticket, result)
    }

    /// Parameters of the cloud that is currently displayed, if any.
    pub fn committed(&self) -> Option<&ParameterSet> {
        self.committed.as_ref()
    }

    /// Id of the newest ticket, `0` before the first proposal.
    pub fn generation(&self) -> u64 {
        self.latest
    }
}
