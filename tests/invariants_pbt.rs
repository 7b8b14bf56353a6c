mod common;

use common::EngineBuilder;
use proptest::prelude::*;
use stigmergy_core::bias::DirectionalBias;
use stigmergy_core::lattice::Torus;
use stigmergy_core::response::FieldResponse;
use stigmergy_core::sampler;
use stigmergy_core::Heading;

prop_compose! {
    fn arb_lattice()(
        width in 1u16..64,
        height in 1u16..64
    ) -> (u16, u16) {
        (width, height)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn test_wrap_fixes_single_step_overruns((width, height) in arb_lattice()) {
        let torus = Torus::new(width, height).unwrap();
        prop_assert_eq!(torus.wrap(-1, -1), (width - 1, height - 1));
        prop_assert_eq!(torus.wrap(width as i64, height as i64), (0, 0));
        for x in 0..width {
            prop_assert_eq!(torus.wrap(x as i64, 0).0, x);
        }
        for y in 0..height {
            prop_assert_eq!(torus.wrap(0, y as i64).1, y);
        }
    }

    #[test]
    fn test_bias_is_rotation_with_forward_at_heading(h in 0usize..8) {
        let bias = DirectionalBias::default();
        let heading = Heading::from_index(h);
        let weights = bias.weights(heading);
        prop_assert_eq!(weights[h], 1.0);
        let north = bias.weights(Heading::from_index(1));
        let shift = (h + 7) % 8;
        for k in 0..8 {
            prop_assert_eq!(weights[(k + shift) % 8], north[k]);
        }
    }

    #[test]
    fn test_response_increasing(
        beta in 0.1f64..6.0,
        delta in 0.01f64..5.0,
        c in 0.0f64..50.0,
        dc in 0.001f64..10.0
    ) {
        let response = FieldResponse::new(beta, delta);
        prop_assert!(response.weight(c + dc) > response.weight(c));
        prop_assert!(response.weight(c) >= 1.0);
    }

    #[test]
    fn test_sampler_index_in_range(
        weights in prop::collection::vec(0.0f64..10.0, 1..16),
        u in 0.0f64..1.0
    ) {
        let total: f64 = weights.iter().sum();
        match sampler::choose(&weights, u) {
            Ok(i) => {
                prop_assert!(i < weights.len());
                prop_assert!(weights[i] > 0.0);
            }
            Err(_) => prop_assert_eq!(total, 0.0),
        }
    }

    #[test]
    fn test_agents_stay_on_lattice(
        (width, height) in arb_lattice(),
        agents in 0usize..60,
        seed in any::<u64>(),
        ticks in 1u64..15
    ) {
        let mut engine = EngineBuilder::new()
            .with_lattice(width, height)
            .with_random_agents(agents)
            .with_seed(seed)
            .with_steps(ticks)
            .build();
        for _ in 0..ticks {
            engine.step().unwrap();
            assert_on_lattice!(engine);
            assert_population!(engine, agents);
            prop_assert!(engine.field().cells().iter().all(|c| *c >= 0.0));
        }
    }
}
