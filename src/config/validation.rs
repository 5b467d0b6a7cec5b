//! Configuration checks using Validation.

use super::{ConfigViolation, ContainerConfig};
use crate::core::SlotKind;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

impl ContainerConfig {
    /// Check the configuration, accumulating ALL violations.
    ///
    /// Returns `Validation::Success(())` if every check passes, otherwise a
    /// failure carrying every violation found.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        let has_any_slot = SlotKind::ALL
            .iter()
            .any(|kind| !self.resource(*kind).is_none());
        checks.push(if has_any_slot {
            Validation::success(())
        } else {
            Validation::fail(ConfigViolation::NoSlots)
        });

        if let Some(slot) = self.initial {
            checks.push(if self.resource(slot).is_none() {
                Validation::fail(ConfigViolation::InitialSlotMissing { slot })
            } else {
                Validation::success(())
            });
        }

        for slot in [SlotKind::Empty, SlotKind::Error] {
            let zero = self.action_element(slot).is_some_and(|id| id.0 == 0);
            checks.push(if zero {
                Validation::fail(ConfigViolation::ZeroActionElement { slot })
            } else {
                Validation::success(())
            });
        }

        Validation::all_vec(checks).map(|_| ())
    }
}
