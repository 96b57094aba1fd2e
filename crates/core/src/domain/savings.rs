use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Aws,
    Azure,
    Gcp,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::Aws, Provider::Azure, Provider::Gcp];

    pub fn as_str(self) -> &'static str {
        match self {
            Provider::Aws => "aws",
            Provider::Azure => "azure",
            Provider::Gcp => "gcp",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aws" => Ok(Provider::Aws),
            "azure" => Ok(Provider::Azure),
            "gcp" => Ok(Provider::Gcp),
            other => anyhow::bail!("unknown provider: {other} (expected aws, azure or gcp)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    #[default]
    Compute,
    Storage,
    Database,
}

impl ResourceType {
    pub const ALL: [ResourceType; 3] = [
        ResourceType::Compute,
        ResourceType::Storage,
        ResourceType::Database,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceType::Compute => "compute",
            ResourceType::Storage => "storage",
            ResourceType::Database => "database",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compute" => Ok(ResourceType::Compute),
            "storage" => Ok(ResourceType::Storage),
            "database" => Ok(ResourceType::Database),
            other => anyhow::bail!(
                "unknown resource type: {other} (expected compute, storage or database)"
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsInput {
    pub current_spend: f64,
    pub provider: Provider,
    pub resource_type: ResourceType,
    /// Percentage in 0..=100.
    pub utilization_rate: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsResult {
    pub monthly_savings: f64,
    pub annual_savings: f64,
    pub savings_percentage: f64,
    pub projection: Vec<MonthPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthPoint {
    pub month_label: String,
    pub baseline: f64,
    pub optimized: f64,
    pub savings_to_date: f64,
}
