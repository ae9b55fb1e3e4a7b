//! Segment identifiers and rendered output.

use serde::{Deserialize, Serialize};

/// Segments provided by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentType {
    AttachedClients,
    MemCpuLoad,
}

impl SegmentType {
    /// Get the canonical name, also used as the highlight group.
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentType::AttachedClients => "attached_clients",
            SegmentType::MemCpuLoad => "mem_cpu_load",
        }
    }

    /// Parse a segment type from its name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "attached_clients" => Some(SegmentType::AttachedClients),
            "mem_cpu_load" => Some(SegmentType::MemCpuLoad),
            _ => None,
        }
    }

    /// Get all segment types, in display order.
    pub fn all() -> &'static [SegmentType] {
        &[SegmentType::AttachedClients, SegmentType::MemCpuLoad]
    }
}

impl std::fmt::Display for SegmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One styled piece of status-line text handed to the host renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    /// Text to display
    pub contents: String,
    /// Style groups, most specific first
    pub highlight_groups: Vec<String>,
    /// Style group for the divider after this fragment; `None` keeps the host default
    pub divider_highlight_group: Option<String>,
}

impl Fragment {
    /// Fragment styled with a single group and the default divider.
    pub fn new(contents: impl Into<String>, highlight_group: &str) -> Self {
        Self {
            contents: contents.into(),
            highlight_groups: vec![highlight_group.to_string()],
            divider_highlight_group: None,
        }
    }
}
