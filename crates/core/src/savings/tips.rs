use crate::domain::savings::{Provider, ResourceType};
use serde::Serialize;

/// Provider-specific savings levers shown next to the calculator inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceTips {
    pub provider: Provider,
    pub resource_type: ResourceType,
    pub title: &'static str,
    pub description: &'static str,
    pub levers: &'static [&'static str],
}

pub fn optimization_tips(provider: Provider, resource_type: ResourceType) -> ResourceTips {
    let (title, description) = match resource_type {
        ResourceType::Compute => (
            "Compute Resources",
            "Includes virtual machines, containers, and serverless functions",
        ),
        ResourceType::Storage => (
            "Storage Resources",
            "Includes object storage, block storage, and file systems",
        ),
        ResourceType::Database => (
            "Database Resources",
            "Includes managed database services and data warehouses",
        ),
    };

    ResourceTips {
        provider,
        resource_type,
        title,
        description,
        levers: levers(provider, resource_type),
    }
}

fn levers(provider: Provider, resource_type: ResourceType) -> &'static [&'static str] {
    match (resource_type, provider) {
        (ResourceType::Compute, Provider::Aws) => &[
            "Reserved Instances: Up to 72% with 3-year commitments",
            "Savings Plans: Up to 66% for compute workloads",
            "Spot Instances: Up to 90% for flexible workloads",
            "Right-sizing opportunities: 20-40% typical savings",
        ],
        (ResourceType::Compute, Provider::Azure) => &[
            "Reserved VM Instances: Up to 72% savings",
            "Azure Hybrid Benefit: Up to 40% additional savings",
            "Spot VMs: Up to 90% savings",
            "Azure Dev/Test pricing for development environments",
        ],
        (ResourceType::Compute, Provider::Gcp) => &[
            "Committed Use Discounts: Up to 70% savings",
            "Sustained Use Discounts: Automatic savings up to 30%",
            "Preemptible VMs: Up to 80% savings",
            "Custom machine types for exact sizing",
        ],
        (ResourceType::Storage, Provider::Aws) => &[
            "S3 Intelligent Tiering: Automatic cost optimization",
            "Lifecycle policies: Up to 70% with Glacier storage",
            "EBS volume optimization: 20-40% typical savings",
            "Reserved capacity: Up to 50% savings",
        ],
        (ResourceType::Storage, Provider::Azure) => &[
            "Access tiers: Hot, Cool, Archive options",
            "Reserved capacity: Up to 50% savings",
            "Lifecycle management: Automatic tiering",
            "ZRS vs LRS/GRS options: Cost vs durability",
        ],
        (ResourceType::Storage, Provider::Gcp) => &[
            "Storage classes: Standard, Nearline, Coldline, Archive",
            "Object Lifecycle Management",
            "Committed use discounts for persistent disks",
            "Regional vs Multi-regional options",
        ],
        (ResourceType::Database, Provider::Aws) => &[
            "Reserved Instances: Up to 72% savings",
            "Multi-AZ deployment optimization",
            "Aurora Serverless: Pay per second",
            "Read replica optimization",
        ],
        (ResourceType::Database, Provider::Azure) => &[
            "Reserved capacity: Up to 60% savings",
            "Hybrid benefit: Up to 40% additional savings",
            "Serverless compute tier",
            "Performance tier optimization",
        ],
        (ResourceType::Database, Provider::Gcp) => &[
            "Committed use discounts: Up to 60% savings",
            "Cloud SQL automatic storage increases",
            "Serverless scaling options",
            "Regional vs multi-regional optimization",
        ],
    }
}
