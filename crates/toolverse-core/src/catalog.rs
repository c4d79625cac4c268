//! Tool catalog types.
//!
//! The catalog is the read-only list of tools the user can attach to
//! workflow steps. Each tool optionally carries priced actions
//! ("pricing models"): a named action with a unit and a price per unit.
//! The canvas never mutates the catalog; it only resolves references
//! into it when computing costs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A priced action a tool offers, e.g. "3D Print" at 0.12 per gram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingModel {
    pub id: String,
    /// Display name of the action, e.g. "Video Rendering".
    pub action_name: String,
    /// Billing unit, e.g. "Minute", "Gramm", "Image".
    pub unit: String,
    pub price_per_unit: f64,
}

/// A catalog entry. Descriptive fields beyond `pricing_models` are
/// carried for the rest of the application; the canvas only reads
/// `id`, `name` and `pricing_models`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub pricing_models: Vec<PricingModel>,
}

impl Tool {
    /// Looks up a pricing model on this tool by id.
    pub fn pricing_model(&self, model_id: &str) -> Option<&PricingModel> {
        self.pricing_models.iter().find(|m| m.id == model_id)
    }

    /// The default pricing model chosen when the tool is attached to a
    /// step: the first entry, if the tool has any.
    pub fn first_pricing_model(&self) -> Option<&PricingModel> {
        self.pricing_models.first()
    }

    /// Cheapest per-unit price across all pricing models, used for the
    /// "ab X / unit" hint in the toolbox listing.
    pub fn min_price_per_unit(&self) -> Option<f64> {
        self.pricing_models
            .iter()
            .map(|m| m.price_per_unit)
            .fold(None, |acc, p| Some(acc.map_or(p, |a: f64| a.min(p))))
    }
}

/// Read-only tool collection with O(1) lookup by id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tools: Vec<Tool>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(tools: Vec<Tool>) -> Self {
        let mut index = HashMap::with_capacity(tools.len());
        for (i, tool) in tools.iter().enumerate() {
            if index.insert(tool.id.clone(), i).is_some() {
                tracing::warn!(tool_id = %tool.id, "duplicate tool id in catalog, keeping last");
            }
        }
        Self { tools, index }
    }

    pub fn tool(&self, tool_id: &str) -> Option<&Tool> {
        self.index.get(tool_id).map(|&i| &self.tools[i])
    }

    /// Resolves a (tool, pricing model) reference pair. Either id
    /// failing to resolve yields `None`; callers treat that as
    /// zero-cost rather than an error.
    pub fn pricing_model(&self, tool_id: &str, model_id: &str) -> Option<&PricingModel> {
        self.tool(tool_id)?.pricing_model(model_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tool> {
        self.tools.iter()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
