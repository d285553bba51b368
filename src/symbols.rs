use rustc_hash::FxHashMap;

use crate::error::SemanticError;

/// Flat name -> value store for every variable a program declares.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    vars: FxHashMap<String, i32>,
    limit: usize,
}

impl SymbolTable {
    pub fn with_capacity_limit(limit: usize) -> Self {
        Self {
            vars: FxHashMap::default(),
            limit,
        }
    }

    /// Overwrites `name` if present, otherwise inserts it. Only new names allocate.
    pub fn set(&mut self, name: &str, value: i32) -> Result<(), SemanticError> {
        if let Some(slot) = self.vars.get_mut(name) {
            *slot = value;
            return Ok(());
        }
        if self.vars.len() >= self.limit {
            return Err(SemanticError::TooManyVariables { limit: self.limit });
        }
        self.vars.insert(name.to_string(), value);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<i32, SemanticError> {
        self.vars
            .get(name)
            .copied()
            .ok_or_else(|| SemanticError::UndefinedVariable {
                name: name.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> + '_ {
        self.vars.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::with_capacity_limit(crate::config::DEFAULT_MAX_VARIABLES)
    }
}
