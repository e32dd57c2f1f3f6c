//! Slashing enforcement.
//!
//! After the reveal deadline elapses, any party may forfeit the
//! deposit of a participant who committed but never revealed. This
//! raises the cost of the last-revealer withholding strategy but does
//! not make it strictly irrational: deterrence only holds when the
//! penalty is at least the attacker's expected gain.

use super::error::{RoundError, RoundResult};
use super::registry::Registry;
use shared_types::{Address, Amount};

/// Validate slashing preconditions and mark the target as resolved.
///
/// Returns the forfeited deposit on success. Preconditions, checked
/// in order:
/// - current time is strictly past `deadline`
/// - `target` committed
/// - `target` never revealed
/// - `target` was not already slashed
///
/// On success the target is marked slashed, so the deposit can be
/// claimed exactly once and a late reveal is no longer possible.
pub fn enforce(
    registry: &mut Registry,
    target: Address,
    now: u64,
    deadline: u64,
) -> RoundResult<Amount> {
    if now <= deadline {
        return Err(RoundError::RevealWindowOpen {
            remaining_secs: deadline - now,
        });
    }

    let participant = registry
        .get(&target)
        .ok_or(RoundError::UnknownParticipant(target))?;

    if participant.revealed {
        return Err(RoundError::TargetRevealed(target));
    }
    if participant.slashed {
        return Err(RoundError::AlreadySlashed(target));
    }

    let forfeited = participant.deposit;
    if let Some(p) = registry.get_mut(&target) {
        p.slashed = true;
    }
    Ok(forfeited)
}
