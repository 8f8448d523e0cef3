// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Genome text saver.

Writes one gene per line in key order. Values are printed with an explicit
sign and four decimals, so a save/load round trip preserves topology exactly
and values to within 5e-5.

Copyright 2025 Neuraville Inc.
Licensed under the Apache License, Version 2.0
*/

use std::fmt;
use std::fs;
use std::path::Path;

use tracing::debug;

use super::genotype::Genome;
use crate::types::{EvoError, EvoResult};

impl Genome {
    /// Text form, one line per gene, newline-terminated
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Write the text form to `path`, replacing any existing file
    pub fn save(&self, path: impl AsRef<Path>) -> EvoResult<()> {
        let path = path.as_ref();
        fs::write(path, self.to_text()).map_err(|e| {
            EvoError::IoError(format!("failed to write genome {}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), genes = self.len(), "genome saved");
        Ok(())
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for gene in self {
            writeln!(f, "{}", gene)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::Gene;
    use eonn_neural::{ActivationFunction, NeuronPosition};

    #[test]
    fn test_to_text_format() {
        let genome = Genome::new(vec![
            Gene::synapse(1, 3, -0.25),
            Gene::neuron(3, NeuronPosition::Output, ActivationFunction::Sigmoid, 0.5),
            Gene::neuron(1, NeuronPosition::Input, ActivationFunction::Sum, 0.0),
        ])
        .unwrap();
        assert_eq!(
            genome.to_text(),
            "n 1 0 0 +0.0000\nn 3 1 1 +0.5000\ns 1 3 -0.2500\n"
        );
    }

    #[test]
    fn test_empty_genome_text() {
        assert_eq!(Genome::default().to_text(), "");
    }

    #[test]
    fn test_text_reparses() {
        let genome = Genome::new(vec![
            Gene::neuron(1, NeuronPosition::Input, ActivationFunction::Sum, 0.0),
            Gene::neuron(2, NeuronPosition::Output, ActivationFunction::Sum, 1.23456),
            Gene::synapse(1, 2, -7.0),
        ])
        .unwrap();
        let reparsed = Genome::parse(&genome.to_text()).unwrap();
        assert_eq!(reparsed.keys(), genome.keys());
        assert!((reparsed.genes()[1].value() - 1.2346).abs() < 1e-12);
    }
}
