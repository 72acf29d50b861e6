//! Craft physics integration
//!
//! One pure step per tick: lift impulse while the signal is active, gravity
//! always, velocity clamp, then position update and the ceiling clamp.

use crate::sim::state::Craft;
use crate::tuning::Tuning;

/// Advance the craft by one tick
pub fn step_craft(craft: &mut Craft, lift_active: bool, tuning: &Tuning) {
    if lift_active {
        craft.vel += tuning.lift;
    }
    craft.vel += tuning.gravity;
    craft.vel = craft.vel.clamp(-tuning.max_velocity, tuning.max_velocity);
    craft.pos.y += craft.vel;

    // The ceiling is a hard stop, not a crash
    if craft.pos.y < tuning.ceiling_y {
        craft.pos.y = tuning.ceiling_y;
        craft.vel = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn craft(tuning: &Tuning) -> Craft {
        Craft::new(tuning)
    }

    #[test]
    fn test_free_fall_accelerates_downward() {
        let tuning = Tuning::default();
        let mut c = craft(&tuning);
        let y0 = c.pos.y;

        step_craft(&mut c, false, &tuning);
        assert_eq!(c.vel, tuning.gravity);
        assert_eq!(c.pos.y, y0 + tuning.gravity);

        step_craft(&mut c, false, &tuning);
        assert_eq!(c.vel, 2.0 * tuning.gravity);
    }

    #[test]
    fn test_lift_overcomes_gravity() {
        let tuning = Tuning::default();
        let mut c = craft(&tuning);

        step_craft(&mut c, true, &tuning);
        // Net impulse is lift + gravity, upward
        assert_eq!(c.vel, tuning.lift + tuning.gravity);
        assert!(c.vel < 0.0);
    }

    #[test]
    fn test_velocity_clamps_both_directions() {
        let tuning = Tuning::default();
        let mut c = craft(&tuning);

        c.vel = tuning.max_velocity;
        step_craft(&mut c, false, &tuning);
        assert_eq!(c.vel, tuning.max_velocity);

        let mut c = craft(&tuning);
        c.vel = -tuning.max_velocity;
        step_craft(&mut c, true, &tuning);
        assert_eq!(c.vel, -tuning.max_velocity);
    }

    #[test]
    fn test_ceiling_clamp_zeroes_velocity() {
        let tuning = Tuning::default();
        let mut c = craft(&tuning);
        c.pos.y = tuning.ceiling_y + 1.0;
        c.vel = -tuning.max_velocity;

        step_craft(&mut c, true, &tuning);
        assert_eq!(c.pos.y, tuning.ceiling_y);
        assert_eq!(c.vel, 0.0);
    }

    proptest! {
        /// Post-step the craft never sits above the ceiling and the velocity
        /// never exceeds the clamp, whatever the input history.
        #[test]
        fn prop_step_invariants(
            start_y in 20.0f32..460.0,
            start_vel in -6.0f32..6.0,
            lifts in proptest::collection::vec(any::<bool>(), 1..200),
        ) {
            let tuning = Tuning::default();
            let mut c = Craft::new(&tuning);
            c.pos.y = start_y;
            c.vel = start_vel;

            for lift in lifts {
                step_craft(&mut c, lift, &tuning);
                prop_assert!(c.pos.y >= tuning.ceiling_y);
                prop_assert!(c.vel.abs() <= tuning.max_velocity);
            }
        }
    }
}
