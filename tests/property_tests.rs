//! Property-based tests for fugue-pso
//!
//! Uses proptest to verify invariants of initialization and velocity updates.

use fugue_pso::prelude::*;
use proptest::prelude::*;
use rand::SeedableRng;

fn slot_strategy() -> impl Strategy<Value = Slot> {
    prop_oneof![
        Just(Slot::CandidateSolution),
        Just(Slot::BestPosition),
        Just(Slot::Velocity),
    ]
}

fn kind_strategy() -> impl Strategy<Value = ParameterKind> {
    prop_oneof![
        Just(ParameterKind::Inertia),
        Just(ParameterKind::SocialAcceleration),
        Just(ParameterKind::CognitiveAcceleration),
        Just(ParameterKind::Vmax),
    ]
}

/// Two linked particles with personal and neighbourhood best values per kind
fn linked_pair(
    local: f64,
    global: f64,
    dimension: usize,
) -> (ParameterizedParticle, Swarm) {
    let mut particle = ParameterizedParticle::new(dimension);
    particle.set_best_position(vec![local; dimension]);
    for kind in ParameterKind::ALL {
        particle.parameter_mut(kind).set_best_value(local);
    }

    let mut best = ParameterizedParticle::new(dimension);
    best.set_best_position(vec![global; dimension]);
    for kind in ParameterKind::ALL {
        best.parameter_mut(kind).set_best_value(global);
    }

    let mut swarm = Swarm::new();
    particle.set_neighbourhood_best(swarm.push(best));
    (particle, swarm)
}

proptest! {
    // ==================== Initialization Properties ====================

    #[test]
    fn sampled_parameters_within_bounds(
        lower in -10.0f64..10.0,
        width in 0.0f64..10.0,
        slot in slot_strategy(),
        seed in any::<u64>(),
    ) {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let upper = lower + width;
        let mut strategy = ParameterInclusiveInitializer::from_config(
            ParameterInclusiveConfig::new().with_all_bounds((lower, upper)),
        );
        let mut particle = ParameterizedParticle::new(3);

        strategy.initialize(slot, &mut particle, &mut rng).unwrap();

        for kind in ParameterKind::ALL {
            let parameter = particle.parameter(kind);
            let written = match slot {
                Slot::CandidateSolution => parameter.value(),
                Slot::BestPosition => parameter.best_value(),
                Slot::Velocity => parameter.velocity(),
            };
            prop_assert!(written >= lower && written <= upper);
        }
    }

    #[test]
    fn positions_within_position_bounds(
        lower in -100.0f64..0.0,
        upper in 0.0f64..100.0,
        dimension in 1usize..20,
    ) {
        let mut rng = rand::thread_rng();
        let mut strategy = ParameterInclusiveInitializer::from_config(
            ParameterInclusiveConfig::new().with_position_bounds(lower, upper),
        );
        let mut particle = ParameterizedParticle::new(dimension);

        strategy
            .initialize(Slot::CandidateSolution, &mut particle, &mut rng)
            .unwrap();

        prop_assert_eq!(particle.dimension(), dimension);
        for x in particle.position() {
            prop_assert!(*x >= lower && *x <= upper);
        }
    }

    #[test]
    fn pinned_parameter_never_resampled(
        pinned in -5.0f64..5.0,
        kind in kind_strategy(),
        slots in prop::collection::vec(slot_strategy(), 1..12),
    ) {
        let mut rng = rand::thread_rng();
        let mut strategy = ParameterInclusiveInitializer::new();
        strategy.set_parameter(kind, ControlParameter::constant(pinned));
        let mut particle = ParameterizedParticle::new(2);

        for slot in slots {
            strategy.initialize(slot, &mut particle, &mut rng).unwrap();
            prop_assert_eq!(strategy.parameter(kind).value(), pinned);
            prop_assert!(strategy.parameter(kind).was_set_by_user());
        }
    }

    #[test]
    fn rejected_bounds_leave_particle_untouched(
        lower in 1.0f64..10.0,
        gap in 0.001f64..5.0,
        kind in kind_strategy(),
        slot in slot_strategy(),
    ) {
        let mut rng = rand::thread_rng();
        let mut strategy = ParameterInclusiveInitializer::new();
        strategy.set_parameter_bounds(kind, ParameterBounds::from((lower, lower - gap)));
        let mut particle = ParameterizedParticle::from_position(vec![0.5, 0.5]);
        let before = particle.clone();

        let result = strategy.initialize(slot, &mut particle, &mut rng);
        let is_invalid_bounds = matches!(result, Err(SwarmError::InvalidBounds { .. }));
        prop_assert!(is_invalid_bounds);
        prop_assert_eq!(particle, before);
    }

    #[test]
    fn clones_are_independent(
        lower in -5.0f64..0.0,
        upper in 0.0f64..5.0,
        kind in kind_strategy(),
    ) {
        let original = ParameterInclusiveInitializer::new();
        let mut copy = original.clone();
        copy.set_parameter_bounds(kind, ParameterBounds::from((lower, upper)));
        copy.set_parameter(kind, ControlParameter::constant(upper));
        copy.set_lower_bound(ControlParameter::constant(lower));

        prop_assert_eq!(original.parameter_bounds(kind), &ParameterBounds::default());
        prop_assert_eq!(original.parameter(kind), &ControlParameter::default());
        prop_assert_eq!(original.lower_bound().value(), ParameterBounds::DEFAULT_LOWER);
    }

    #[test]
    fn originals_do_not_reach_clones(
        lower in -5.0f64..0.0,
        upper in 0.0f64..5.0,
        kind in kind_strategy(),
        slot in slot_strategy(),
    ) {
        let mut original = ParameterInclusiveInitializer::new();
        let copy = original.clone();
        original.set_parameter_bounds(kind, ParameterBounds::from((lower, upper)));
        original.set_parameter(kind, ControlParameter::constant(upper));
        original.set_upper_bound(ControlParameter::constant(upper + 1.0));

        let mut rng = rand::thread_rng();
        let mut particle = ParameterizedParticle::new(2);
        original.initialize(slot, &mut particle, &mut rng).unwrap();

        prop_assert_eq!(copy.config(), &ParameterInclusiveConfig::default());
        prop_assert_eq!(copy.delegate().bounds(), &ParameterBounds::default());
    }

    // ==================== Velocity Properties ====================

    #[test]
    fn velocity_interpolates_between_guides(
        local in -10.0f64..10.0,
        global in -10.0f64..10.0,
        dimension in 1usize..8,
        seed in any::<u64>(),
    ) {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let (particle, swarm) = linked_pair(local, global, dimension);
        let provider = BareBonesVelocity::new();

        let update = provider.compute_velocity(&particle, &swarm, &mut rng).unwrap();

        let (lo, hi) = if local <= global { (local, global) } else { (global, local) };
        for v in &update.position {
            prop_assert!(*v >= lo - 1e-9 && *v <= hi + 1e-9);
        }
        for (_, v) in update.parameters.iter() {
            prop_assert!(v >= lo - 1e-9 && v <= hi + 1e-9);
        }
    }

    #[test]
    fn velocity_strictly_inside_with_positive_coefficients(
        local in -10.0f64..0.0,
        global in 0.1f64..10.0,
        seed in any::<u64>(),
    ) {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let (particle, swarm) = linked_pair(local, global, 1);
        let provider = BareBonesVelocity::new().with_coefficient_bounds((0.5, 0.8));

        let velocities = provider.parameter_velocities(&particle, &swarm, &mut rng).unwrap();
        for (_, v) in velocities.iter() {
            prop_assert!(v > local && v < global);
        }
    }

    #[test]
    fn swarm_velocities_reproducible_from_seed(
        size in 1usize..10,
        seed in any::<u64>(),
    ) {
        let mut swarm = Swarm::new();
        for i in 0..size {
            let mut p = ParameterizedParticle::new(2);
            p.set_best_position(vec![i as f64, -(i as f64)]);
            swarm.push(p);
        }
        for id in swarm.ids().collect::<Vec<_>>() {
            swarm.set_neighbourhood_best(id, ParticleId(0)).unwrap();
        }
        let provider = BareBonesVelocity::new();

        let first = swarm.compute_velocities(&provider, seed).unwrap();
        let second = swarm.compute_velocities(&provider, seed).unwrap();
        prop_assert_eq!(first, second);
    }
}
