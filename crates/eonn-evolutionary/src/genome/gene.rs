// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Genes: the unit of heredity.

A gene is either a neuron or a synapse. Every field except the trailing
float is structural and never changes after creation; the trailing float
(bias or weight) is the only thing mutation touches.

Copyright 2025 Neuraville Inc.
Licensed under the Apache License, Version 2.0
*/

use std::fmt;

use eonn_neural::{ActivationFunction, NeuronId, NeuronPosition};
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::random::{chance, gaussian};
use crate::types::{EvoError, EvoResult};

/// Text tag of neuron genes
pub const NEURON_TAG: char = 'n';

/// Text tag of synapse genes
pub const SYNAPSE_TAG: char = 's';

/// Neuron gene payload
#[derive(Debug, Clone, PartialEq)]
pub struct NeuronGene {
    pub id: NeuronId,
    pub position: NeuronPosition,
    pub function: ActivationFunction,
    pub bias: f64,
}

/// Synapse gene payload
#[derive(Debug, Clone, PartialEq)]
pub struct SynapseGene {
    pub src: NeuronId,
    pub dst: NeuronId,
    pub weight: f64,
}

/// A single gene
///
/// Equality compares the whole payload, value included. Sorting goes through
/// [`Gene::key`]; genes themselves are deliberately not `Ord`.
#[derive(Debug, Clone, PartialEq)]
pub enum Gene {
    Neuron(NeuronGene),
    Synapse(SynapseGene),
}

/// Structural identity of a gene (everything but the trailing value)
///
/// Neuron keys sort before synapse keys, then field by field in payload
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GeneKey {
    Neuron { id: u32, position: u8, function: u8 },
    Synapse { src: u32, dst: u32 },
}

impl fmt::Display for GeneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneKey::Neuron { id, position, function } => {
                write!(f, "{} {} {} {}", NEURON_TAG, id, position, function)
            }
            GeneKey::Synapse { src, dst } => write!(f, "{} {} {}", SYNAPSE_TAG, src, dst),
        }
    }
}

impl Gene {
    /// Neuron gene
    pub fn neuron(
        id: impl Into<NeuronId>,
        position: NeuronPosition,
        function: ActivationFunction,
        bias: f64,
    ) -> Self {
        Gene::Neuron(NeuronGene {
            id: id.into(),
            position,
            function,
            bias,
        })
    }

    /// Synapse gene
    pub fn synapse(src: impl Into<NeuronId>, dst: impl Into<NeuronId>, weight: f64) -> Self {
        Gene::Synapse(SynapseGene {
            src: src.into(),
            dst: dst.into(),
            weight,
        })
    }

    /// Build a gene from its tag and numeric payload
    ///
    /// Neurons take `[id, position, function, bias]`, synapses `[src, dst, weight]`.
    ///
    /// # Errors
    /// `InvalidArgument` for an unknown tag, a payload of the wrong length,
    /// a non-integral or out-of-range integer field, or an unknown
    /// position/function code.
    pub fn from_dna(tag: char, dna: &[f64]) -> EvoResult<Self> {
        match tag {
            NEURON_TAG => {
                let [id, position, function, bias] = fixed_payload::<4>(tag, dna)?;
                let position_code = integral(position, "neuron position")?;
                let function_code = integral(function, "neuron function")?;
                let position = u8::try_from(position_code)
                    .ok()
                    .and_then(NeuronPosition::from_code)
                    .ok_or_else(|| {
                        EvoError::InvalidArgument(format!(
                            "unknown neuron position code {}",
                            position_code
                        ))
                    })?;
                let function = u8::try_from(function_code)
                    .ok()
                    .and_then(ActivationFunction::from_code)
                    .ok_or_else(|| {
                        EvoError::InvalidArgument(format!(
                            "unknown activation function code {}",
                            function_code
                        ))
                    })?;
                Ok(Gene::neuron(integral(id, "neuron id")?, position, function, bias))
            }
            SYNAPSE_TAG => {
                let [src, dst, weight] = fixed_payload::<3>(tag, dna)?;
                Ok(Gene::synapse(
                    integral(src, "synapse source")?,
                    integral(dst, "synapse destination")?,
                    weight,
                ))
            }
            other => Err(EvoError::InvalidArgument(format!(
                "unknown gene tag '{}' (expected '{}' or '{}')",
                other, NEURON_TAG, SYNAPSE_TAG
            ))),
        }
    }

    /// `'n'` or `'s'`
    pub fn tag(&self) -> char {
        match self {
            Gene::Neuron(_) => NEURON_TAG,
            Gene::Synapse(_) => SYNAPSE_TAG,
        }
    }

    pub fn key(&self) -> GeneKey {
        match self {
            Gene::Neuron(n) => GeneKey::Neuron {
                id: n.id.0,
                position: n.position.code(),
                function: n.function.code(),
            },
            Gene::Synapse(s) => GeneKey::Synapse {
                src: s.src.0,
                dst: s.dst.0,
            },
        }
    }

    /// Ordered numeric payload, trailing value last
    pub fn dna(&self) -> Vec<f64> {
        match self {
            Gene::Neuron(n) => vec![
                f64::from(n.id.0),
                f64::from(n.position.code()),
                f64::from(n.function.code()),
                n.bias,
            ],
            Gene::Synapse(s) => vec![f64::from(s.src.0), f64::from(s.dst.0), s.weight],
        }
    }

    /// Bias of a neuron, weight of a synapse
    pub fn value(&self) -> f64 {
        match self {
            Gene::Neuron(n) => n.bias,
            Gene::Synapse(s) => s.weight,
        }
    }

    pub fn value_mut(&mut self) -> &mut f64 {
        match self {
            Gene::Neuron(n) => &mut n.bias,
            Gene::Synapse(s) => &mut s.weight,
        }
    }

    pub fn is_input_neuron(&self) -> bool {
        matches!(self, Gene::Neuron(n) if n.position == NeuronPosition::Input)
    }

    /// Perturb the trailing value with gaussian noise
    ///
    /// Draws `delta ~ Normal(0, std)`; with probability `replace_prob` the
    /// value becomes `delta`, otherwise `delta` is added to it.
    ///
    /// # Errors
    /// `InvalidArgument` if `std` is negative or not finite.
    pub fn mutate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        std: f64,
        replace_prob: f64,
    ) -> EvoResult<()> {
        let noise = gaussian(std)?;
        self.perturb(rng, &noise, replace_prob);
        Ok(())
    }

    pub(crate) fn perturb<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        noise: &Normal<f64>,
        replace_prob: f64,
    ) {
        let delta = noise.sample(rng);
        let value = self.value_mut();
        if chance(rng, replace_prob) {
            *value = delta;
        } else {
            *value += delta;
        }
    }

    /// Field-wise average with a structurally equal gene
    pub(crate) fn averaged(&self, other: &Gene) -> Gene {
        debug_assert_eq!(self.key(), other.key());
        let mut child = self.clone();
        *child.value_mut() = (self.value() + other.value()) / 2.0;
        child
    }
}

/// One text-format line: tag, integer fields, signed value with 4 decimals
impl fmt::Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:+.4}", self.key(), self.value())
    }
}

fn fixed_payload<const N: usize>(tag: char, dna: &[f64]) -> EvoResult<[f64; N]> {
    <[f64; N]>::try_from(dna).map_err(|_| {
        EvoError::InvalidArgument(format!(
            "gene '{}' takes {} values, got {}",
            tag,
            N,
            dna.len()
        ))
    })
}

fn integral(value: f64, field: &str) -> EvoResult<u32> {
    if value.fract() != 0.0 || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(EvoError::InvalidArgument(format!(
            "{} must be a non-negative integer, got {}",
            field, value
        )));
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::seeded_rng;

    #[test]
    fn test_from_dna_neuron() {
        let gene = Gene::from_dna('n', &[3.0, 1.0, 1.0, -0.25]).unwrap();
        assert_eq!(
            gene,
            Gene::neuron(3, NeuronPosition::Output, ActivationFunction::Sigmoid, -0.25)
        );
        assert_eq!(gene.tag(), 'n');
        assert_eq!(gene.dna(), vec![3.0, 1.0, 1.0, -0.25]);
    }

    #[test]
    fn test_from_dna_synapse() {
        let gene = Gene::from_dna('s', &[1.0, 4.0, 0.5]).unwrap();
        assert_eq!(gene, Gene::synapse(1, 4, 0.5));
        assert_eq!(gene.value(), 0.5);
    }

    #[test]
    fn test_from_dna_rejects_unknown_tag() {
        let err = Gene::from_dna('x', &[1.0]).unwrap_err();
        assert!(matches!(err, EvoError::InvalidArgument(_)));
    }

    #[test]
    fn test_from_dna_rejects_malformed_payload() {
        assert!(Gene::from_dna('s', &[1.0, 2.0]).is_err());
        assert!(Gene::from_dna('n', &[1.5, 0.0, 0.0, 0.0]).is_err());
        assert!(Gene::from_dna('n', &[-1.0, 0.0, 0.0, 0.0]).is_err());
        assert!(Gene::from_dna('n', &[1.0, 7.0, 0.0, 0.0]).is_err());
        assert!(Gene::from_dna('n', &[1.0, 0.0, 2.0, 0.0]).is_err());
        assert!(Gene::from_dna('s', &[f64::NAN, 2.0, 0.0]).is_err());
    }

    #[test]
    fn test_key_ignores_value() {
        let a = Gene::synapse(1, 2, 0.5);
        let b = Gene::synapse(1, 2, -3.0);
        assert_eq!(a.key(), b.key());
        assert_ne!(a, b);
    }

    #[test]
    fn test_key_ordering() {
        let neuron = Gene::neuron(9, NeuronPosition::Hidden, ActivationFunction::Sum, 0.0);
        let synapse = Gene::synapse(1, 1, 0.0);
        assert!(neuron.key() < synapse.key());
        assert!(Gene::synapse(1, 5, 0.0).key() < Gene::synapse(2, 1, 0.0).key());
        assert!(
            Gene::neuron(1, NeuronPosition::Output, ActivationFunction::Sum, 0.0).key()
                < Gene::neuron(2, NeuronPosition::Input, ActivationFunction::Sum, 0.0).key()
        );
    }

    #[test]
    fn test_display() {
        let neuron = Gene::neuron(3, NeuronPosition::Hidden, ActivationFunction::Sigmoid, 0.5);
        assert_eq!(neuron.to_string(), "n 3 2 1 +0.5000");
        assert_eq!(Gene::synapse(1, 4, -0.123456).to_string(), "s 1 4 -0.1235");
    }

    #[test]
    fn test_mutate_replace_always() {
        let mut rng = seeded_rng(Some(11));
        let mut gene = Gene::synapse(1, 2, 100.0);
        gene.mutate(&mut rng, 1.0, 1.0).unwrap();
        // Replaced by a standard normal draw, far from the old value
        assert!(gene.value().abs() < 10.0);
    }

    #[test]
    fn test_mutate_zero_std_is_noop_when_adding() {
        let mut rng = seeded_rng(Some(5));
        let mut gene = Gene::synapse(1, 2, 0.75);
        gene.mutate(&mut rng, 0.0, 0.0).unwrap();
        assert_eq!(gene.value(), 0.75);
    }

    #[test]
    fn test_mutate_rejects_negative_std() {
        let mut rng = seeded_rng(Some(5));
        let mut gene = Gene::synapse(1, 2, 0.75);
        assert!(gene.mutate(&mut rng, -1.0, 0.5).is_err());
        assert_eq!(gene.value(), 0.75);
    }

    #[test]
    fn test_averaged() {
        let a = Gene::synapse(1, 2, 1.0);
        let b = Gene::synapse(1, 2, 0.0);
        assert_eq!(a.averaged(&b), Gene::synapse(1, 2, 0.5));
    }
}
