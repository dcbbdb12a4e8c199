// Shared test helpers for integration tests
#![allow(dead_code)]

use langcodex::LookupError;
use langcodex::core::metadata::{Description, LanguageMetadata};
use std::cell::RefCell;

/// A metadata source with canned answers that records every call it receives.
pub struct FakeMetadata {
    pub valid: bool,
    pub unparseable: bool,
    pub calls: RefCell<Vec<String>>,
}

impl FakeMetadata {
    pub fn new() -> Self {
        Self {
            valid: true,
            unparseable: false,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn invalid() -> Self {
        Self {
            valid: false,
            unparseable: true,
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) -> Result<(), LookupError> {
        self.calls.borrow_mut().push(call);
        if self.unparseable {
            Err(LookupError::Unparseable {
                tag: "fake".to_string(),
                reason: "canned failure".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

impl LanguageMetadata for FakeMetadata {
    fn standardize(&self, tag: &str) -> Result<String, LookupError> {
        self.record(format!("standardize({})", tag))?;
        Ok(format!("std:{}", tag))
    }

    fn is_valid(&self, tag: &str) -> bool {
        self.calls.borrow_mut().push(format!("is_valid({})", tag));
        self.valid
    }

    fn describe(&self, tag: &str, in_language: Option<&str>) -> Result<Description, LookupError> {
        self.record(format!("describe({}, {:?})", tag, in_language))?;
        Ok(Description {
            language: Some(format!("name of {}", tag)),
            ..Description::default()
        })
    }

    fn autonym(&self, tag: &str) -> Result<String, LookupError> {
        self.record(format!("autonym({})", tag))?;
        Ok("Ñame".to_string())
    }

    fn speaking_population(&self, tag: &str) -> Result<Option<u64>, LookupError> {
        self.record(format!("speaking_population({})", tag))?;
        Ok(Some(42))
    }

    fn writing_population(&self, tag: &str) -> Result<Option<u64>, LookupError> {
        self.record(format!("writing_population({})", tag))?;
        Ok(None)
    }
}
