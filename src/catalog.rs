use crate::models::Plan;

/// Fixed plan and option data offered by the platform.
///
/// The catalog is built once at startup and never mutated; every
/// `SelectionState` refers back into it by plan name.
#[derive(Debug, Clone)]
pub struct Catalog {
    plans: Vec<Plan>,
    gpu_options: Vec<String>,
    memory_options: Vec<String>,
}

impl Catalog {
    /// The standard public offering: three fixed tiers plus the GPU and
    /// memory choices shown in the configuration panel.
    pub fn standard() -> Self {
        let plans = vec![
            Plan {
                name: "Starter".into(),
                price: "$49".into(),
                description: "Perfect for small projects and experimentation".into(),
                features: vec![
                    "1 GPU".into(),
                    "10GB Storage".into(),
                    "5 Deployments/month".into(),
                    "Community support".into(),
                ],
            },
            Plan {
                name: "Pro".into(),
                price: "$99".into(),
                description: "Ideal for growing teams and projects".into(),
                features: vec![
                    "2 GPUs".into(),
                    "50GB Storage".into(),
                    "20 Deployments/month".into(),
                    "Priority support".into(),
                    "Custom ML libraries".into(),
                ],
            },
            Plan {
                name: "Enterprise".into(),
                price: "Custom".into(),
                description: "For large-scale AI/ML operations".into(),
                features: vec![
                    "Unlimited GPUs".into(),
                    "Unlimited Storage".into(),
                    "Unlimited Deployments".into(),
                    "24/7 Dedicated support".into(),
                    "Custom ML libraries".into(),
                    "On-premises option".into(),
                ],
            },
        ];
        let gpu_options = vec!["A100".into(), "A10G".into(), "T4".into()];
        let memory_options = vec!["16".into(), "32".into(), "64".into(), "128".into()];
        Catalog {
            plans,
            gpu_options,
            memory_options,
        }
    }

    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    /// GPU identifiers, in display order.
    pub fn gpu_options(&self) -> &[String] {
        &self.gpu_options
    }

    /// Memory sizes in GiB, in display order.
    pub fn memory_options(&self) -> &[String] {
        &self.memory_options
    }

    pub fn find_plan(&self, name: &str) -> Option<&Plan> {
        self.plans.iter().find(|p| p.name == name)
    }

    /// Total lookup: an unknown name silently falls back to the first
    /// plan in the catalog.
    pub fn lookup_or_default(&self, name: &str) -> &Plan {
        self.find_plan(name).unwrap_or(&self.plans[0])
    }
}
