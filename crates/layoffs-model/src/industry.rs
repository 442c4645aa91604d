//! Canonical industry catalog.
//!
//! Each [`IndustryTerm`] names one canonical spelling and the variants that
//! collapse onto it:
//!
//! ```text
//! canonical=Crypto    variants: Crypto Currency, CryptoCurrency
//! canonical=Retail    variants: (none)
//! ```
//!
//! Lookups are case-insensitive on the trimmed value. A canonical name with no
//! variants still matters: it marks the value as known, so profiling and the
//! cleaning report can flag everything else as unrecognized.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// One canonical industry and its known variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryTerm {
    pub canonical: String,
    pub variants: Vec<String>,
}

/// How a raw industry value relates to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndustryClass {
    Canonical,
    Variant,
    Unrecognized,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndustryCatalog {
    /// Key: uppercase canonical name.
    terms: BTreeMap<String, IndustryTerm>,
    /// Uppercase variant -> uppercase canonical name.
    variants: BTreeMap<String, String>,
}

fn lookup_key(value: &str) -> String {
    value.trim().to_uppercase()
}

impl IndustryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a term, rejecting variants that already belong to another canonical name.
    pub fn add_term(&mut self, term: IndustryTerm) -> Result<()> {
        let key = lookup_key(&term.canonical);
        if key.is_empty() {
            return Err(ModelError::Catalog("canonical name is empty".to_string()));
        }
        if let Some(owner) = self.variants.get(&key) {
            return Err(ModelError::Catalog(format!(
                "'{}' is declared canonical but is a variant of '{}'",
                term.canonical.trim(),
                self.terms[owner].canonical
            )));
        }
        for variant in &term.variants {
            let variant_key = lookup_key(variant);
            if variant_key.is_empty() || variant_key == key {
                continue;
            }
            if let Some(existing) = self.terms.get(&variant_key) {
                return Err(ModelError::Catalog(format!(
                    "variant '{}' of '{}' is itself a canonical name",
                    variant.trim(),
                    existing.canonical
                )));
            }
            if let Some(owner) = self.variants.get(&variant_key)
                && *owner != key
            {
                return Err(ModelError::Catalog(format!(
                    "variant '{}' maps to both '{}' and '{}'",
                    variant.trim(),
                    self.terms[owner].canonical,
                    term.canonical.trim()
                )));
            }
        }

        let entry = self
            .terms
            .entry(key.clone())
            .or_insert_with(|| IndustryTerm {
                canonical: term.canonical.trim().to_string(),
                variants: Vec::new(),
            });
        for variant in term.variants {
            let variant_key = lookup_key(&variant);
            if variant_key.is_empty() || variant_key == key {
                continue;
            }
            if self.variants.insert(variant_key, key.clone()).is_none() {
                entry.variants.push(variant.trim().to_string());
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> impl Iterator<Item = &IndustryTerm> {
        self.terms.values()
    }

    pub fn classify(&self, value: &str) -> IndustryClass {
        let key = lookup_key(value);
        if self.terms.contains_key(&key) {
            IndustryClass::Canonical
        } else if self.variants.contains_key(&key) {
            IndustryClass::Variant
        } else {
            IndustryClass::Unrecognized
        }
    }

    /// Canonical spelling for a value, if the catalog knows it.
    pub fn canonical_for(&self, value: &str) -> Option<&str> {
        let key = lookup_key(value);
        let canonical_key = self.variants.get(&key).unwrap_or(&key);
        self.terms
            .get(canonical_key)
            .map(|term| term.canonical.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(canonical: &str, variants: &[&str]) -> IndustryTerm {
        IndustryTerm {
            canonical: canonical.to_string(),
            variants: variants.iter().map(|v| (*v).to_string()).collect(),
        }
    }

    #[test]
    fn collapses_variants() {
        let mut catalog = IndustryCatalog::new();
        catalog
            .add_term(term("Crypto", &["Crypto Currency", "CryptoCurrency"]))
            .unwrap();
        assert_eq!(catalog.canonical_for("CryptoCurrency"), Some("Crypto"));
        assert_eq!(catalog.canonical_for("crypto currency"), Some("Crypto"));
        assert_eq!(catalog.canonical_for("CRYPTO"), Some("Crypto"));
        assert_eq!(catalog.canonical_for("Retail"), None);
        assert_eq!(catalog.classify("Crypto"), IndustryClass::Canonical);
        assert_eq!(catalog.classify("CryptoCurrency"), IndustryClass::Variant);
        assert_eq!(catalog.classify("Retail"), IndustryClass::Unrecognized);
    }

    #[test]
    fn rejects_conflicting_variants() {
        let mut catalog = IndustryCatalog::new();
        catalog.add_term(term("Crypto", &["Web3"])).unwrap();
        let err = catalog.add_term(term("Finance", &["web3"])).unwrap_err();
        assert!(err.to_string().contains("maps to both"));
    }

    #[test]
    fn rejects_canonical_listed_as_variant() {
        let mut catalog = IndustryCatalog::new();
        catalog.add_term(term("Finance", &[])).unwrap();
        assert!(catalog.add_term(term("Crypto", &["Finance"])).is_err());

        let mut catalog = IndustryCatalog::new();
        catalog.add_term(term("Crypto", &["Fintech"])).unwrap();
        assert!(catalog.add_term(term("Fintech", &[])).is_err());
    }

    #[test]
    fn merges_repeated_canonical_rows() {
        let mut catalog = IndustryCatalog::new();
        catalog.add_term(term("Crypto", &["CryptoCurrency"])).unwrap();
        catalog.add_term(term("crypto", &["Crypto Currency"])).unwrap();
        assert_eq!(catalog.len(), 1);
        let crypto = catalog.terms().next().unwrap();
        assert_eq!(crypto.canonical, "Crypto");
        assert_eq!(crypto.variants, vec!["CryptoCurrency", "Crypto Currency"]);
    }
}
