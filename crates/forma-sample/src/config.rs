// Forma - JSON Schema Composition Toolkit
//
// Copyright (c) 2026 Forma contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Sampling configuration.

/// Configuration for the randomized, schema-driven sampler.
///
/// # Examples
///
/// ```
/// use forma_sample::SampleConfig;
///
/// let config = SampleConfig::default();
/// assert_eq!(config.optional_probability, 0.75);
///
/// let always = SampleConfig::builder().optional_probability(1.0).build();
/// assert_eq!(always.optional_probability, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SampleConfig {
    /// Probability that an optional object property is included in a sample,
    /// drawn independently per property per invocation. Required properties
    /// are always included. Clamped to `[0, 1]`.
    pub optional_probability: f64,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            optional_probability: 0.75,
        }
    }
}

impl SampleConfig {
    /// Create a new builder for SampleConfig.
    pub fn builder() -> SampleConfigBuilder {
        SampleConfigBuilder::default()
    }
}

/// Builder for [`SampleConfig`].
#[derive(Debug, Default)]
pub struct SampleConfigBuilder {
    optional_probability: Option<f64>,
}

impl SampleConfigBuilder {
    /// Set the optional-property inclusion probability. Values outside
    /// `[0, 1]` are clamped; NaN falls back to the default.
    pub fn optional_probability(mut self, probability: f64) -> Self {
        self.optional_probability = Some(probability);
        self
    }

    /// Build the SampleConfig.
    pub fn build(self) -> SampleConfig {
        let defaults = SampleConfig::default();
        let probability = match self.optional_probability {
            Some(p) if p.is_nan() => defaults.optional_probability,
            Some(p) => p.clamp(0.0, 1.0),
            None => defaults.optional_probability,
        };
        SampleConfig {
            optional_probability: probability,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probability_is_clamped() {
        assert_eq!(
            SampleConfig::builder().optional_probability(1.5).build().optional_probability,
            1.0
        );
        assert_eq!(
            SampleConfig::builder().optional_probability(-0.2).build().optional_probability,
            0.0
        );
    }

    #[test]
    fn test_nan_falls_back_to_default() {
        let config = SampleConfig::builder().optional_probability(f64::NAN).build();
        assert_eq!(config.optional_probability, 0.75);
    }
}
