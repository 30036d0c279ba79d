use serde::Serialize;
use thiserror::Error;

use crate::config::SESSIONS;

/// Validation failures for registry input. The `Display` text is what the form shows next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Please enter a game URL")]
    EmptyUrl,
    #[error("URL must be from {0}")]
    ForeignUrl(&'static str),
    #[error("This game URL is already in your list")]
    DuplicateUrl,
    #[error("Please enter an alias")]
    EmptyAlias,
    #[error("This alias is already in your list")]
    DuplicateAlias,
}

/// One tracked game. Identity is the URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub url: String,
    /// Backend reports this game's profit in cents.
    pub uses_subunits: bool,
}

/// Ordered list of tracked games, unique by URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionRegistry {
    sessions: Vec<Session>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and appends a game URL. New games start in whole units.
    pub fn add(&mut self, raw_url: &str) -> Result<&Session, RegistryError> {
        let url = raw_url.trim();
        if url.is_empty() {
            return Err(RegistryError::EmptyUrl);
        }
        if !url.contains(SESSIONS.url_marker) {
            return Err(RegistryError::ForeignUrl(SESSIONS.url_marker));
        }
        if self.contains(url) {
            return Err(RegistryError::DuplicateUrl);
        }
        self.sessions.push(Session {
            url: url.to_owned(),
            uses_subunits: false,
        });
        Ok(&self.sessions[self.sessions.len() - 1])
    }

    pub fn remove(&mut self, url: &str) -> Option<Session> {
        let idx = self.sessions.iter().position(|s| s.url == url)?;
        Some(self.sessions.remove(idx))
    }

    /// Returns the new flag, or `None` when the URL is not tracked.
    pub fn toggle_subunits(&mut self, url: &str) -> Option<bool> {
        let session = self.sessions.iter_mut().find(|s| s.url == url)?;
        session.uses_subunits = !session.uses_subunits;
        Some(session.uses_subunits)
    }

    /// Returns true when the flag actually changed.
    pub fn set_uses_subunits(&mut self, url: &str, uses_subunits: bool) -> bool {
        match self.sessions.iter_mut().find(|s| s.url == url) {
            Some(session) if session.uses_subunits != uses_subunits => {
                session.uses_subunits = uses_subunits;
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, url: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.url == url)
    }

    pub fn contains(&self, url: &str) -> bool {
        self.get(url).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Session> {
        self.sessions.iter()
    }

    pub fn urls(&self) -> Vec<String> {
        self.sessions.iter().map(|s| s.url.clone()).collect()
    }

    pub fn subunit_flags(&self) -> Vec<bool> {
        self.sessions.iter().map(|s| s.uses_subunits).collect()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
