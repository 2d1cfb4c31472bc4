//! Proposal pipeline state: the financing proposals this dealer can see
//! and which one is currently open in the detail view.

#[cfg(test)]
#[path = "proposals_test.rs"]
mod proposals_test;

use serde::{Deserialize, Serialize};

/// A financing proposal as returned by the portal backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: i64,
    pub dealer_id: Option<i64>,
    pub seller_id: Option<i64>,
    /// Pipeline status slug (e.g. `"em_analise"`).
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub customer_name: String,
    pub customer_cpf: Option<String>,
    pub customer_birth_date: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub has_cnh: bool,
    pub cnh_category: Option<String>,
    #[serde(default)]
    pub vehicle_brand: String,
    #[serde(default)]
    pub vehicle_model: String,
    pub vehicle_year: Option<i32>,
    pub vehicle_plate: Option<String>,
    pub fipe_code: Option<String>,
    pub fipe_value: Option<f64>,
    pub down_payment_value: Option<f64>,
    pub financed_value: Option<f64>,
    pub notes: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Pipeline list state plus the current detail selection.
#[derive(Clone, Debug, Default)]
pub struct ProposalsState {
    pub items: Vec<Proposal>,
    pub loading: bool,
    pub error: Option<String>,
    /// Proposal currently open in the detail view, if any.
    pub selected_id: Option<i64>,
}

impl ProposalsState {
    /// The currently selected proposal, if it is still in the list.
    pub fn selected(&self) -> Option<&Proposal> {
        let id = self.selected_id?;
        self.items.iter().find(|proposal| proposal.id == id)
    }
}

/// Badge label and class for a pipeline status slug.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProposalStatusStyle {
    pub label: &'static str,
    pub badge_class: &'static str,
}

/// Map a pipeline status slug to its badge style, with a neutral fallback
/// for vocabulary the backend may add later.
pub fn status_style(status: &str) -> ProposalStatusStyle {
    match status {
        "em_analise" => ProposalStatusStyle {
            label: "Em análise",
            badge_class: "badge--analysis",
        },
        "aprovada" => ProposalStatusStyle {
            label: "Aprovada",
            badge_class: "badge--approved",
        },
        "reprovada" => ProposalStatusStyle {
            label: "Reprovada",
            badge_class: "badge--rejected",
        },
        "pendente" => ProposalStatusStyle {
            label: "Pendente",
            badge_class: "badge--pending",
        },
        "contrato_emitido" => ProposalStatusStyle {
            label: "Contrato emitido",
            badge_class: "badge--issued",
        },
        _ => ProposalStatusStyle {
            label: "Em andamento",
            badge_class: "badge--neutral",
        },
    }
}
