//! Thread-safe currency registry.
//!
//! The registry is an explicitly owned value: create one, share it by
//! reference (or `Arc`) with whatever needs currency lookups. Every operation
//! takes a single lock for the duration of the map access and nothing else.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use super::catalog::CATALOG;
use super::error::CurrencyError;
use super::types::{Currency, ISO_4217};

#[derive(Debug, Default)]
struct RegistryState {
    /// Known namespaces in registration order.
    namespaces: Vec<String>,
    /// `(namespace, CODE)` → descriptor.
    entries: HashMap<(String, String), Currency>,
}

impl RegistryState {
    fn register_namespace(&mut self, namespace: &str) {
        if !self.namespaces.iter().any(|ns| ns == namespace) {
            self.namespaces.push(namespace.to_string());
        }
    }

    fn first_match(&self, code: &str) -> Option<&Currency> {
        // TODO: Add a namespace priority so ISO wins over custom namespaces
        // regardless of registration order.
        self.namespaces
            .iter()
            .find_map(|ns| self.entries.get(&(ns.clone(), code.to_string())))
    }
}

/// Store of currency descriptors keyed by namespace and code.
#[derive(Debug, Default)]
pub struct CurrencyRegistry {
    state: Mutex<RegistryState>,
}

fn normalize(code: &str) -> String {
    code.trim().to_uppercase()
}

impl CurrencyRegistry {
    /// Creates a registry seeded with the built-in catalog under `ISO-4217`.
    #[must_use]
    pub fn new() -> Self {
        let mut state = RegistryState::default();
        state.register_namespace(ISO_4217);
        for entry in CATALOG {
            state.entries.insert(
                (ISO_4217.to_string(), entry.code.to_string()),
                Currency::from_entry(entry),
            );
        }
        debug!(
            namespace = ISO_4217,
            count = state.entries.len(),
            "Seeded currency registry from catalog"
        );

        Self {
            state: Mutex::new(state),
        }
    }

    /// Creates a registry with no currencies and no namespaces.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, RegistryState> {
        // Every mutation is a single map call, so a poisoned lock still
        // guards a consistent map.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Looks up `code` in every namespace, in registration order.
    #[must_use]
    pub fn try_get(&self, code: &str) -> Option<Currency> {
        let code = normalize(code);
        self.lock().first_match(&code).cloned()
    }

    /// Looks up `code` in one namespace.
    #[must_use]
    pub fn try_get_in(&self, code: &str, namespace: &str) -> Option<Currency> {
        let key = (namespace.to_string(), normalize(code));
        self.lock().entries.get(&key).cloned()
    }

    /// Inserts `currency` under `(namespace, code)` unless that key is taken.
    ///
    /// The namespace becomes known even when the insert is refused. Returns
    /// whether the insert happened; an existing entry is never overwritten.
    pub fn try_add(&self, code: &str, namespace: &str, currency: Currency) -> bool {
        let key = (namespace.to_string(), normalize(code));
        let mut state = self.lock();
        state.register_namespace(namespace);
        if state.entries.contains_key(&key) {
            return false;
        }
        debug!(code = %key.1, namespace, "Registered currency");
        state.entries.insert(key, currency);
        true
    }

    /// Registers `currency` under its own code and namespace.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::DuplicateCurrency` if the key is taken.
    pub fn add(&self, currency: Currency) -> Result<(), CurrencyError> {
        let code = currency.code().to_string();
        let namespace = currency.namespace().to_string();
        if self.try_add(&code, &namespace, currency) {
            Ok(())
        } else {
            Err(CurrencyError::DuplicateCurrency { code, namespace })
        }
    }

    /// Inserts or overwrites `currency` under its own code and namespace.
    ///
    /// Returns the descriptor it displaced, if any.
    pub fn replace(&self, currency: Currency) -> Option<Currency> {
        let key = (currency.namespace().to_string(), normalize(currency.code()));
        let mut state = self.lock();
        state.register_namespace(&key.0);
        debug!(code = %key.1, namespace = %key.0, "Replaced currency");
        state.entries.insert(key, currency)
    }

    /// Removes `(namespace, code)` and returns the descriptor it held.
    pub fn try_remove(&self, code: &str, namespace: &str) -> Option<Currency> {
        let key = (namespace.to_string(), normalize(code));
        let removed = self.lock().entries.remove(&key);
        if removed.is_some() {
            debug!(code = %key.1, namespace, "Removed currency");
        }
        removed
    }

    /// Snapshot of every registered descriptor, grouped by namespace in
    /// registration order and sorted by code within a namespace.
    #[must_use]
    pub fn get_all(&self) -> Vec<Currency> {
        let state = self.lock();
        let mut all: Vec<(usize, Currency)> = state
            .entries
            .iter()
            .map(|((ns, _), currency)| {
                let rank = state
                    .namespaces
                    .iter()
                    .position(|known| known == ns)
                    .unwrap_or(usize::MAX);
                (rank, currency.clone())
            })
            .collect();
        drop(state);

        all.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.code().cmp(b.1.code())));
        all.into_iter().map(|(_, currency)| currency).collect()
    }

    /// Known namespaces in registration order.
    #[must_use]
    pub fn namespaces(&self) -> Vec<String> {
        self.lock().namespaces.clone()
    }

    /// Number of registered descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// True if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// Fail-fast lookup across every namespace.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::UnknownCurrency` if no namespace holds `code`.
    pub fn from_code(&self, code: &str) -> Result<Currency, CurrencyError> {
        self.try_get(code)
            .ok_or_else(|| CurrencyError::unknown(&normalize(code)))
    }

    /// Fail-fast lookup within one namespace.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::UnknownCurrency` if the namespace lacks `code`.
    pub fn from_code_in(&self, code: &str, namespace: &str) -> Result<Currency, CurrencyError> {
        self.try_get_in(code, namespace)
            .ok_or_else(|| CurrencyError::unknown_in(&normalize(code), namespace))
    }

    /// Every descriptor whose symbol equals `token` or whose code equals it
    /// case-insensitively.
    ///
    /// Ordered like [`Self::get_all`].
    #[must_use]
    pub fn find_by_symbol_or_code(&self, token: &str) -> Vec<Currency> {
        self.get_all()
            .into_iter()
            .filter(|c| c.symbol() == token || c.has_code(token))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::builder::CurrencyBuilder;
    use crate::currency::types::MinorUnit;
    use std::sync::Arc;
    use std::thread;

    fn bitcoin() -> Currency {
        CurrencyBuilder::new("BTC", "CRYPTO")
            .english_name("Bitcoin")
            .symbol("₿")
            .minor_unit(MinorUnit::Digits(4))
            .build()
            .unwrap()
    }

    #[test]
    fn test_seeded_from_catalog() {
        let registry = CurrencyRegistry::new();
        assert_eq!(registry.len(), CATALOG.len());
        assert_eq!(registry.namespaces(), vec![ISO_4217.to_string()]);
        assert_eq!(registry.try_get("EUR").unwrap().code(), "EUR");
    }

    #[test]
    fn test_empty_registry() {
        let registry = CurrencyRegistry::empty();
        assert!(registry.is_empty());
        assert!(registry.namespaces().is_empty());
        assert!(registry.try_get("EUR").is_none());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = CurrencyRegistry::new();
        assert_eq!(registry.try_get("usd").unwrap().code(), "USD");
        assert_eq!(registry.try_get_in("jpy", ISO_4217).unwrap().code(), "JPY");
        assert!(registry.try_get_in("JPY", "CRYPTO").is_none());
    }

    #[test]
    fn test_add_get_remove_round_trip() {
        let registry = CurrencyRegistry::new();
        let btc = bitcoin();

        assert!(registry.try_add("BTC", "CRYPTO", btc.clone()));
        assert_eq!(registry.try_get_in("BTC", "CRYPTO"), Some(btc.clone()));
        assert!(!registry.try_add("BTC", "CRYPTO", btc.clone()));

        assert_eq!(registry.try_remove("BTC", "CRYPTO"), Some(btc));
        assert_eq!(registry.try_remove("BTC", "CRYPTO"), None);
        assert!(registry.try_get_in("BTC", "CRYPTO").is_none());
        assert!(registry.namespaces().contains(&"CRYPTO".to_string()));
    }

    #[test]
    fn test_add_fail_fast() {
        let registry = CurrencyRegistry::new();
        registry.add(bitcoin()).unwrap();

        let err = registry.add(bitcoin()).unwrap_err();
        assert_eq!(
            err,
            CurrencyError::DuplicateCurrency {
                code: "BTC".into(),
                namespace: "CRYPTO".into(),
            }
        );
    }

    #[test]
    fn test_replace_overwrites() {
        let registry = CurrencyRegistry::new();
        let original = registry.try_get("EUR").unwrap();
        let custom = CurrencyBuilder::from_currency(&original)
            .symbol("EUR€")
            .build()
            .unwrap();

        assert_eq!(registry.replace(custom.clone()), Some(original));
        assert_eq!(registry.try_get("EUR"), Some(custom));
    }

    #[test]
    fn test_first_namespace_wins() {
        let registry = CurrencyRegistry::new();
        let shadow = CurrencyBuilder::new("EUR", "SHADOW")
            .english_name("Shadow euro")
            .build()
            .unwrap();
        assert!(registry.try_add("EUR", "SHADOW", shadow.clone()));

        assert_eq!(registry.try_get("EUR").unwrap().namespace(), ISO_4217);
        assert_eq!(registry.try_get_in("EUR", "SHADOW"), Some(shadow.clone()));

        registry.try_remove("EUR", ISO_4217);
        assert_eq!(registry.try_get("EUR"), Some(shadow));
    }

    #[test]
    fn test_from_code_errors() {
        let registry = CurrencyRegistry::new();
        assert_eq!(
            registry.from_code("xyz").unwrap_err(),
            CurrencyError::UnknownCurrency {
                code: "XYZ".into(),
                namespace: None,
            }
        );
        assert!(matches!(
            registry.from_code_in("EUR", "CRYPTO"),
            Err(CurrencyError::UnknownCurrency { namespace: Some(_), .. })
        ));
    }

    #[test]
    fn test_get_all_is_ordered_snapshot() {
        let registry = CurrencyRegistry::new();
        registry.add(bitcoin()).unwrap();

        let all = registry.get_all();
        assert_eq!(all.len(), CATALOG.len() + 1);
        assert_eq!(all.last().unwrap().code(), "BTC");
        let iso_codes: Vec<&str> = all[..CATALOG.len()].iter().map(Currency::code).collect();
        let mut sorted = iso_codes.clone();
        sorted.sort_unstable();
        assert_eq!(iso_codes, sorted);
    }

    #[test]
    fn test_find_by_symbol_or_code() {
        let registry = CurrencyRegistry::new();

        let euro: Vec<String> = registry
            .find_by_symbol_or_code("€")
            .iter()
            .map(|c| c.code().to_string())
            .collect();
        assert_eq!(euro, vec!["EUR"]);

        assert!(registry.find_by_symbol_or_code("$").len() > 10);
        assert_eq!(registry.find_by_symbol_or_code("chf").len(), 1);
        assert!(registry.find_by_symbol_or_code("§").is_empty());
    }

    #[test]
    fn test_concurrent_try_add_inserts_once() {
        let registry = Arc::new(CurrencyRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || registry.try_add("BTC", "CRYPTO", bitcoin()))
            })
            .collect();

        let inserted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|added| *added)
            .count();
        assert_eq!(inserted, 1);
        assert_eq!(registry.len(), CATALOG.len() + 1);
    }
}
