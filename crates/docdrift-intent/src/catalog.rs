use std::collections::HashSet;
use std::sync::Arc;

use once_cell::sync::Lazy;

use docdrift_core::config::Config;
use docdrift_core::error::{Error, Result};
use docdrift_core::types::OperationalTrigger;
use docdrift_text::fold_word;

use crate::detector::light_normalize;

static BUILTIN: Lazy<Arc<TriggerCatalog>> = Lazy::new(|| {
    Arc::new(TriggerCatalog { triggers: builtin_triggers() })
});

/// Read-only, ordered table of operational triggers.
///
/// Built once (built-in or from configuration) and shared through `Arc`;
/// nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerCatalog {
    triggers: Vec<OperationalTrigger>,
}

impl TriggerCatalog {
    /// Validate and canonicalize entries: patterns get the same light
    /// normalization as the scanned code, concepts are lower-cased and folded
    /// like documentation words (duplicates after folding collapse).
    pub fn new(triggers: Vec<OperationalTrigger>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut canonical = Vec::with_capacity(triggers.len());
        for trigger in triggers {
            let category = trigger.category.trim().to_string();
            if category.is_empty() {
                return Err(Error::InvalidConfig("trigger category must not be empty".into()));
            }
            if !seen.insert(category.clone()) {
                return Err(Error::InvalidConfig(format!("duplicate trigger category '{category}'")));
            }
            let code_patterns: Vec<String> = trigger
                .code_patterns
                .iter()
                .map(|p| light_normalize(p))
                .filter(|p| !p.is_empty())
                .collect();
            let mut expected_concepts: Vec<String> = Vec::new();
            for concept in &trigger.expected_concepts {
                let concept = concept.trim().to_lowercase();
                if concept.is_empty() {
                    continue;
                }
                let folded = fold_word(&concept);
                if !expected_concepts.contains(&folded) {
                    expected_concepts.push(folded);
                }
            }
            if code_patterns.is_empty() || expected_concepts.is_empty() {
                return Err(Error::InvalidConfig(format!(
                    "trigger '{category}' needs at least one code pattern and one expected concept"
                )));
            }
            canonical.push(OperationalTrigger { category, code_patterns, expected_concepts });
        }
        Ok(Self { triggers: canonical })
    }

    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    /// `[[triggers]]` from configuration when present, the built-in table otherwise.
    pub fn from_config(config: &Config) -> anyhow::Result<Arc<Self>> {
        match config.get_opt::<Vec<OperationalTrigger>>("triggers")? {
            Some(triggers) => Ok(Arc::new(Self::new(triggers)?)),
            None => Ok(Self::builtin()),
        }
    }

    pub fn triggers(&self) -> &[OperationalTrigger] {
        &self.triggers
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }
}

fn builtin_triggers() -> Vec<OperationalTrigger> {
    vec![
        OperationalTrigger::new(
            "math",
            ["sqrt(", "**2", "** 2", "math.", "pow(", "numpy", "np."],
            ["math", "mathematical", "root", "square", "sqrt", "power", "exponent", "numeric"],
        ),
        OperationalTrigger::new(
            "io",
            [
                "open(", "json.dump", "json.load", ".write(", ".read(", "pickle.", "csv.", "shutil.", "os.remove",
                "fs::", "readfile", "writefile",
            ],
            ["file", "save", "write", "read", "load", "json", "disk", "persist", "storage", "store"],
        ),
        OperationalTrigger::new(
            "networking",
            [
                "requests.", "urllib", "http://", "https://", "httpx", "aiohttp", "socket.", "fetch(", "axios",
                "reqwest", ".get(", ".post(",
            ],
            ["fetch", "api", "request", "http", "network", "url", "endpoint", "server", "download", "remote"],
        ),
        OperationalTrigger::new(
            "security",
            [
                "hashlib", "bcrypt", "hmac", "jwt", "encrypt(", "decrypt(", "secrets.", "cryptography", "password",
                "ssl.",
            ],
            [
                "security", "secure", "hash", "encrypt", "encryption", "token", "authentication", "password",
                "credential", "crypto",
            ],
        ),
    ]
}
