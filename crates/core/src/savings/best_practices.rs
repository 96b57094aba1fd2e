use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Impact or effort rating of a practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
        })
    }
}

impl FromStr for Level {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Level::Low),
            "medium" => Ok(Level::Medium),
            "high" => Ok(Level::High),
            other => anyhow::bail!("unknown level: {other} (expected low, medium or high)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Practice {
    pub title: &'static str,
    pub description: &'static str,
    pub impact: Level,
    pub effort: Level,
    pub tips: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PracticeCategory {
    pub category: &'static str,
    pub description: &'static str,
    pub practices: &'static [Practice],
}

static CATEGORIES: [PracticeCategory; 4] = [
    PracticeCategory {
        category: "Quick Wins",
        description: "Immediate actions that can reduce costs within days",
        practices: &[
            Practice {
                title: "Clean Up Unused Resources",
                description: "Identify and remove: Unattached volumes, obsolete snapshots, unused IP addresses, and idle load balancers.",
                impact: Level::High,
                effort: Level::Low,
                tips: &[
                    "Use cloud provider tools to identify unused resources",
                    "Implement automated cleanup scripts",
                    "Set up regular resource audits",
                ],
            },
            Practice {
                title: "Right-Size Underutilized Instances",
                description: "Analyze CPU, memory, and network usage to identify oversized resources.",
                impact: Level::High,
                effort: Level::Medium,
                tips: &[
                    "Review instance metrics over 2-week periods",
                    "Start with development environments",
                    "Consider downsizing instances with < 20% utilization",
                ],
            },
        ],
    },
    PracticeCategory {
        category: "Technical Optimization",
        description: "Engineering-focused improvements for better efficiency",
        practices: &[
            Practice {
                title: "Implement Auto-Scaling",
                description: "Set up dynamic resource scaling based on demand patterns.",
                impact: Level::High,
                effort: Level::Medium,
                tips: &[
                    "Start with non-critical workloads",
                    "Use scaling policies based on metrics",
                    "Set appropriate minimum and maximum thresholds",
                ],
            },
            Practice {
                title: "Storage Lifecycle Management",
                description: "Automate data movement between storage tiers based on access patterns.",
                impact: Level::Medium,
                effort: Level::Low,
                tips: &[
                    "Use lifecycle policies for object storage",
                    "Move infrequently accessed data to cheaper tiers",
                    "Implement data retention policies",
                ],
            },
        ],
    },
    PracticeCategory {
        category: "Financial Controls",
        description: "Budgeting and financial management practices",
        practices: &[
            Practice {
                title: "Reserved Instance Strategy",
                description: "Plan and purchase reserved instances for predictable workloads.",
                impact: Level::High,
                effort: Level::Medium,
                tips: &[
                    "Analyze resource usage patterns over 3+ months",
                    "Start with high-confidence workloads",
                    "Consider flexible reservation types",
                ],
            },
            Practice {
                title: "Budget Alerts",
                description: "Set up proactive cost monitoring and alerting.",
                impact: Level::Medium,
                effort: Level::Low,
                tips: &[
                    "Create alerts at 80% and 100% of budget",
                    "Set up alerts per team/project",
                    "Include trend-based alerts",
                ],
            },
        ],
    },
    PracticeCategory {
        category: "Organizational Best Practices",
        description: "Process and policy improvements",
        practices: &[
            Practice {
                title: "Tagging Strategy",
                description: "Implement comprehensive resource tagging for better cost allocation.",
                impact: Level::High,
                effort: Level::Medium,
                tips: &[
                    "Define mandatory tags (owner, project, environment)",
                    "Use automated tag enforcement",
                    "Regular tag compliance audits",
                ],
            },
            Practice {
                title: "Cost Center Mapping",
                description: "Map cloud resources to business units and projects.",
                impact: Level::Medium,
                effort: Level::Medium,
                tips: &[
                    "Align tags with organizational structure",
                    "Create monthly cost allocation reports",
                    "Review and adjust mapping quarterly",
                ],
            },
        ],
    },
];

/// The best practices guide, grouped by category in presentation order.
pub fn best_practices() -> &'static [PracticeCategory] {
    &CATEGORIES
}

/// Practices rated at least `min_impact` and at most `max_effort`, in guide order.
pub fn filter_practices(min_impact: Level, max_effort: Level) -> Vec<&'static Practice> {
    CATEGORIES
        .iter()
        .flat_map(|c| c.practices.iter())
        .filter(|p| p.impact >= min_impact && p.effort <= max_effort)
        .collect()
}
