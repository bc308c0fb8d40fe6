use std::path::Path;

use serde::{Deserialize, Serialize};

use zonectl_aws_core::{
    config::{AwsConfig, AwsServiceConfig},
    util::RON,
};

use crate::resource::DEFAULT_NS_TTL;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Route53Config {
    pub aws:            AwsConfig,
    /// TTL for NS record sets written by `update-nameservers`.
    pub ns_ttl:         i64,
    pub change_comment: String,
    pub zone_comment:   String,
}

impl Default for Route53Config {
    fn default() -> Self {
        Self {
            aws:            AwsConfig::default(),
            ns_ttl:         DEFAULT_NS_TTL,
            change_comment: String::from("update NS records"),
            zone_comment:   String::from("Hosted zone created by zonectl"),
        }
    }
}

impl AwsServiceConfig for Route53Config {
    fn try_load(prefix: &Path) -> anyhow::Result<Self> {
        let config_path = prefix.join("aws/route53/config.ron");
        if config_path.is_file() {
            tracing::info!("Loading Route53 config file at {:?}", config_path);
            let config: Route53Config = RON.from_str(&std::fs::read_to_string(config_path)?)?;
            Ok(config)
        } else {
            Ok(Route53Config {
                aws: AwsConfig::try_load(prefix)?,
                ..Default::default()
            })
        }
    }

    fn aws(&self) -> &AwsConfig {
        &self.aws
    }
}
