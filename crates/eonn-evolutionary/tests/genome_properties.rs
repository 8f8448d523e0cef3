// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Properties that hold for every genome: genetic operators never change
//! topology, and the text format round-trips.

use eonn_evolutionary::random::seeded_rng;
use eonn_evolutionary::{EvoError, Gene, Genome};
use eonn_neural::{ActivationFunction, NeuronPosition};
use proptest::prelude::*;

/// Genomes with 1-6 neurons of any kind and up to 10 synapses between them
fn arb_genome() -> impl Strategy<Value = Genome> {
    (1u32..=6)
        .prop_flat_map(|n| {
            let neurons = prop::collection::vec((0u8..3, 0u8..2, -10.0f64..10.0), n as usize);
            let synapses =
                prop::collection::btree_map((1..=n, 1..=n), -10.0f64..10.0, 0..10);
            (neurons, synapses)
        })
        .prop_map(|(neurons, synapses)| {
            let mut genes = Vec::new();
            for (index, (position, function, bias)) in neurons.into_iter().enumerate() {
                genes.push(Gene::neuron(
                    index as u32 + 1,
                    NeuronPosition::from_code(position).unwrap(),
                    ActivationFunction::from_code(function).unwrap(),
                    bias,
                ));
            }
            for ((src, dst), weight) in synapses {
                genes.push(Gene::synapse(src, dst, weight));
            }
            Genome::new(genes).unwrap()
        })
}

proptest! {
    #[test]
    fn self_crossover_has_zero_distance(genome in arb_genome(), seed in any::<u64>()) {
        let mut rng = seeded_rng(Some(seed));
        let child = genome.crossover(&genome, &mut rng).unwrap();
        prop_assert_eq!(&child, &genome);
        prop_assert_eq!(genome.distance(&genome).unwrap(), 0.0);
    }

    #[test]
    fn mutation_preserves_topology(
        genome in arb_genome(),
        seed in any::<u64>(),
        frac in 0.0f64..=1.0,
        std in 0.0f64..5.0,
        replace in 0.0f64..=1.0,
    ) {
        let mut rng = seeded_rng(Some(seed));
        let mut mutated = genome.clone();
        mutated.mutate(&mut rng, frac, std, replace).unwrap();

        prop_assert_eq!(mutated.keys(), genome.keys());
        prop_assert_eq!(mutated.signature(), genome.signature());
        for (before, after) in genome.iter().zip(mutated.iter()) {
            if before.is_input_neuron() {
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn crossover_values_stay_between_parents(genome in arb_genome(), seed in any::<u64>()) {
        let mut rng = seeded_rng(Some(seed));
        let mut other = genome.clone();
        other.mutate(&mut rng, 1.0, 2.0, 0.5).unwrap();

        let child = genome.crossover(&other, &mut rng).unwrap();
        prop_assert!(child.same_topology(&genome));
        for ((c, a), b) in child.iter().zip(genome.iter()).zip(other.iter()) {
            let (lo, hi) = if a.value() <= b.value() { (a.value(), b.value()) } else { (b.value(), a.value()) };
            prop_assert!(c.value() >= lo && c.value() <= hi);
        }
    }

    #[test]
    fn text_round_trip(genome in arb_genome()) {
        let reparsed = Genome::parse(&genome.to_text()).unwrap();
        prop_assert_eq!(reparsed.keys(), genome.keys());
        for (a, b) in genome.iter().zip(reparsed.iter()) {
            prop_assert!((a.value() - b.value()).abs() <= 5e-5 + 1e-12);
        }
    }
}

#[test]
fn save_and_open_round_trip() {
    let mut rng = seeded_rng(Some(21));
    let mut genome = eonn_evolutionary::templates::load_xor_genome().unwrap();
    genome.mutate(&mut rng, 1.0, 3.0, 0.5).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("champion.net");
    genome.save(&path).unwrap();
    let loaded = Genome::open(&path).unwrap();

    assert_eq!(loaded.keys(), genome.keys());
    for (a, b) in genome.iter().zip(loaded.iter()) {
        assert!((a.value() - b.value()).abs() <= 5e-5 + 1e-12);
    }
    // Saving what was loaded is a fixed point of the format
    assert_eq!(loaded.to_text(), genome.to_text());
}

#[test]
fn differing_topologies_are_rejected() {
    let mut rng = seeded_rng(Some(22));
    let xor = eonn_evolutionary::templates::load_xor_genome().unwrap();
    let car = eonn_evolutionary::templates::load_mountain_car_genome().unwrap();

    assert!(matches!(xor.crossover(&car, &mut rng), Err(EvoError::TopologyMismatch(_))));
    assert!(matches!(xor.distance(&car), Err(EvoError::TopologyMismatch(_))));
    assert_ne!(xor.signature(), car.signature());
}
