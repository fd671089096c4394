//! Method listing and selection.
//!
//! Services are numbered from 1 in schema order, and methods from 1 within
//! their service, so `2/1` names the first method of the second service.

use example_core::SchemaTree;
use std::fmt::Write;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SelectionError {
    #[error("Invalid input format: {0:?} (expected Service/Method or N/M)")]
    InvalidFormat(String),
}

/// One selectable method.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodEntry {
    pub service_index: usize,
    pub method_index: usize,
    pub service: String,
    pub method: String,
}

/// A resolved service/method pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub service: String,
    pub method: String,
}

/// Numbered index of every method in a schema.
#[derive(Debug, Clone, Default)]
pub struct MethodIndex {
    services: Vec<String>,
    entries: Vec<MethodEntry>,
}

impl MethodIndex {
    pub fn new(tree: &SchemaTree) -> Self {
        let mut entries = Vec::new();
        for (s_idx, service) in tree.services.iter().enumerate() {
            for (m_idx, method) in service.methods.iter().enumerate() {
                entries.push(MethodEntry {
                    service_index: s_idx + 1,
                    method_index: m_idx + 1,
                    service: service.name.clone(),
                    method: method.name.clone(),
                });
            }
        }
        Self {
            services: tree.services.iter().map(|s| s.name.clone()).collect(),
            entries,
        }
    }

    pub fn entries(&self) -> &[MethodEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the numbered listing shown before selection.
    pub fn listing(&self) -> String {
        let mut out = String::new();
        for (s_idx, service) in self.services.iter().enumerate() {
            let _ = writeln!(out, "{}. Service: {service}", s_idx + 1);
            for entry in self.entries.iter().filter(|e| e.service_index == s_idx + 1) {
                let _ = writeln!(
                    out,
                    "      {}/{}. {}/{}",
                    entry.service_index, entry.method_index, entry.service, entry.method
                );
            }
        }
        out
    }

    /// Resolve `Service/Method` or `N/M` input.
    ///
    /// A numeric pair with no matching entry is kept as literal names, so the
    /// later schema lookup reports it as not found.
    pub fn resolve(&self, input: &str) -> Result<Selection, SelectionError> {
        let input = input.trim();
        let invalid = || SelectionError::InvalidFormat(input.to_string());

        let (service, method) = input.split_once('/').ok_or_else(invalid)?;
        if service.is_empty() || method.is_empty() || method.contains('/') {
            return Err(invalid());
        }

        if let (Ok(s_idx), Ok(m_idx)) = (service.parse::<usize>(), method.parse::<usize>()) {
            if let Some(entry) = self
                .entries
                .iter()
                .find(|e| e.service_index == s_idx && e.method_index == m_idx)
            {
                return Ok(Selection {
                    service: entry.service.clone(),
                    method: entry.method.clone(),
                });
            }
        }

        Ok(Selection {
            service: service.to_string(),
            method: method.to_string(),
        })
    }
}
