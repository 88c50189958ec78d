use crate::{
    core::env::Env,
    errors::{EnvError, Result},
};

/// Builder for the test environment
#[derive(Debug, Clone, Default)]
pub struct EnvironmentBuilder {
    timestamp: Option<i64>,
    assets: Vec<(String, u8)>,
}

impl EnvironmentBuilder {
    /// Start an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the clock at `timestamp` instead of the wall clock.
    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Register an asset, later looked up with [`Env::asset`].
    pub fn with_asset(mut self, label: impl Into<String>, decimals: u8) -> Self {
        self.assets.push((label.into(), decimals));
        self
    }

    pub fn build(self) -> Result<Env> {
        let timestamp = self
            .timestamp
            .unwrap_or_else(|| chrono::Utc::now().timestamp());
        if timestamp < 0 {
            return Err(EnvError::InvalidConfig(format!(
                "negative timestamp {}",
                timestamp
            )));
        }

        let mut env = Env::new(timestamp);
        for (label, decimals) in &self.assets {
            if env.asset(label).is_ok() {
                return Err(EnvError::InvalidConfig(format!(
                    "asset {} registered twice",
                    label
                )));
            }
            env.create_asset(label, *decimals);
        }

        tracing::debug!(
            "Built environment at {} with {} assets",
            timestamp,
            self.assets.len()
        );
        Ok(env)
    }
}
