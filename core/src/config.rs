use std::{path::Path, time::Duration};

use anyhow::bail;
use aws_config::{BehaviorVersion, Region, SdkConfig, meta::region::RegionProviderChain};
use serde::{Deserialize, Serialize};

use crate::util::RON;

/// Timeouts applied to every SDK client, in seconds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TimeoutConfig {
    pub connect_secs:           u64,
    pub operation_secs:         u64,
    pub operation_attempt_secs: u64,
    pub read_secs:              u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs:           30,
            operation_secs:         30,
            operation_attempt_secs: 30,
            read_secs:              30,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AwsConfig {
    pub account_id:     Option<String>,
    pub endpoint_url:   Option<String>,
    pub timeout_config: Option<TimeoutConfig>,
    pub region:         String,
    pub sts_region:     String,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            account_id:     Default::default(),
            endpoint_url:   Default::default(),
            timeout_config: Default::default(),
            // Route53 is a global service; its control plane lives in us-east-1.
            region:         String::from("us-east-1"),
            sts_region:     String::from("us-east-1"),
        }
    }
}

impl AwsConfig {
    pub fn try_load(prefix: &Path) -> anyhow::Result<AwsConfig> {
        let config_path = prefix.join("aws/config.ron");
        if config_path.is_file() {
            tracing::info!("Loading AWS config file at {:?}", config_path);
            let config: AwsConfig = RON.from_str(&std::fs::read_to_string(config_path)?)?;
            Ok(config)
        } else {
            tracing::info!("AWS config file at {:?} not present, using defaults.", config_path);
            Ok(AwsConfig::default())
        }
    }

    pub async fn sdk_config(&self) -> SdkConfig {
        let timeouts = self.timeout_config.clone().unwrap_or_default();

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(RegionProviderChain::first_try(Region::new(self.region.clone())))
            .timeout_config(
                aws_config::timeout::TimeoutConfig::builder()
                    .connect_timeout(Duration::from_secs(timeouts.connect_secs))
                    .operation_timeout(Duration::from_secs(timeouts.operation_secs))
                    .operation_attempt_timeout(Duration::from_secs(timeouts.operation_attempt_secs))
                    .read_timeout(Duration::from_secs(timeouts.read_secs))
                    .build(),
            );

        if let Some(ref endpoint_url) = self.endpoint_url {
            tracing::debug!("Using endpoint override {}", endpoint_url);
            loader = loader.endpoint_url(endpoint_url);
        }

        loader.load().await
    }

    /// Fails unless the resolved credentials belong to the configured account.
    /// Returns the caller's account id.
    pub async fn verify_sts(&self) -> anyhow::Result<String> {
        verify_sts_account_id(self.sts_region.clone(), self.account_id.clone()).await
    }
}

pub async fn verify_sts_account_id(sts_region: String, account_id: Option<String>) -> anyhow::Result<String> {
    let sts_config = aws_config::defaults(BehaviorVersion::latest())
        .region(RegionProviderChain::first_try(Region::new(sts_region)))
        .load()
        .await;

    let sts_client = aws_sdk_sts::Client::new(&sts_config);
    let caller_identity = sts_client.get_caller_identity().send().await;

    match caller_identity {
        Ok(caller_identity) => {
            let Some(caller_account_id) = caller_identity.account else {
                bail!("Failed to get current account ID!");
            };

            check_account_id(&caller_account_id, account_id.as_deref())?;
            Ok(caller_account_id)
        }
        Err(e) => {
            tracing::error!("Failed to call sts:GetCallerIdentity: {}", e);
            Err(e.into())
        }
    }
}

fn check_account_id(caller_account_id: &str, account_id: Option<&str>) -> anyhow::Result<()> {
    if let Some(account_id) = account_id
        && caller_account_id != account_id {
            bail!(
                "AWS: Account ID mismatch. Configured to use account ID {account_id}, \nbut credentials provided are for account ID {caller_account_id}."
            )
        }
    Ok(())
}

/// A per-service config layered over the shared `aws/config.ron`.
pub trait AwsServiceConfig: Sized {
    fn try_load(prefix: &Path) -> anyhow::Result<Self>;
    fn aws(&self) -> &AwsConfig;

    async fn verify_sts(&self) -> anyhow::Result<String> {
        self.aws().verify_sts().await
    }
}
