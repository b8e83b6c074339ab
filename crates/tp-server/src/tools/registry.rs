//! Unified tool registry spanning catalog and insight log tools.
//!
//! The dispatch route uses this to look up tools by name.

use std::collections::HashMap;

use tp_insight_log::{InsightStore, InsightTool};
use tp_protocol::{EngagementLevel, ToolDescriptor, ToolResult};

use super::CatalogTool;
use crate::error::{ApiError, ApiResult};

/// Which family a tool belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Catalog,
    Insight,
}

/// Holds catalog and insight tools, indexed by name for O(1) dispatch.
pub struct ToolRegistry {
    catalog_tools: Vec<Box<dyn CatalogTool>>,
    insight_tools: Vec<Box<dyn InsightTool>>,
    /// Map from tool name → (kind, index into the appropriate Vec).
    index: HashMap<String, (ToolKind, usize)>,
}

impl ToolRegistry {
    pub fn new(
        catalog_tools: Vec<Box<dyn CatalogTool>>,
        insight_tools: Vec<Box<dyn InsightTool>>,
    ) -> Self {
        let mut index = HashMap::new();

        for (i, tool) in catalog_tools.iter().enumerate() {
            index.insert(tool.name().to_string(), (ToolKind::Catalog, i));
        }
        for (i, tool) in insight_tools.iter().enumerate() {
            index.insert(tool.name().to_string(), (ToolKind::Insight, i));
        }

        Self {
            catalog_tools,
            insight_tools,
            index,
        }
    }

    /// Build with the default set of all tools.
    pub fn with_defaults() -> Self {
        Self::new(super::all_tools(), tp_insight_log::tools::all_tools())
    }

    pub fn lookup(&self, name: &str) -> Option<(ToolKind, usize)> {
        self.index.get(name).copied()
    }

    /// Run a tool by name.
    pub async fn execute(
        &self,
        name: &str,
        args: serde_json::Value,
        store: &dyn InsightStore,
    ) -> ApiResult<ToolResult> {
        let (kind, index) = self
            .lookup(name)
            .ok_or_else(|| ApiError::NotFound(format!("tool '{name}' not found")))?;
        match kind {
            ToolKind::Catalog => self.catalog_tools[index].execute(&args),
            ToolKind::Insight => Ok(self.insight_tools[index].execute(args, store).await?),
        }
    }

    /// Every registered tool, catalog first.
    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        let mut tools = Vec::with_capacity(self.len());
        for tool in &self.catalog_tools {
            tools.push(ToolDescriptor {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                input_schema: tool.parameters_schema(),
            });
        }
        for tool in &self.insight_tools {
            tools.push(ToolDescriptor {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                input_schema: tool.parameters_schema(),
            });
        }
        tools
    }

    /// Tools advertised at the given engagement level.
    pub fn advertised(&self, level: EngagementLevel) -> Vec<ToolDescriptor> {
        self.list_tools()
            .into_iter()
            .filter(|t| level.advertises(&t.name))
            .collect()
    }

    /// Total number of registered tools.
    pub fn len(&self) -> usize {
        self.catalog_tools.len() + self.insight_tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog_tools.is_empty() && self.insight_tools.is_empty()
    }
}
