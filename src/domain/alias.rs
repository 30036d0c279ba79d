use crate::domain::RegistryError;

/// Alternate player names, unique, kept in the order they were entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasSet {
    aliases: Vec<String>,
}

impl AliasSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, raw_alias: &str) -> Result<&str, RegistryError> {
        let alias = raw_alias.trim();
        if alias.is_empty() {
            return Err(RegistryError::EmptyAlias);
        }
        if self.contains(alias) {
            return Err(RegistryError::DuplicateAlias);
        }
        self.aliases.push(alias.to_owned());
        Ok(&self.aliases[self.aliases.len() - 1])
    }

    pub fn remove(&mut self, alias: &str) -> bool {
        let before = self.aliases.len();
        self.aliases.retain(|a| a != alias);
        self.aliases.len() != before
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.aliases.iter().any(|a| a == alias)
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.aliases.iter()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.aliases.clone()
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
