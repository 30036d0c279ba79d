// Domain types and value objects
mod alias;
mod history;
mod observed;
mod profit;
mod session;

// Re-export commonly used types to the world
pub use alias::AliasSet;
pub use history::{HistoryPoint, HistoryUpdate, ProfitHistory};
pub use observed::{LastObservedSettings, ObservedSetting};
pub use profit::{ProfitValue, ResultsMap};
pub use session::{RegistryError, Session, SessionRegistry};
