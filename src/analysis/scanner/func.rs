//! Closure-backed scanner.

use std::fmt;
use std::sync::Arc;

use super::Scanner;
use crate::analysis::token::Token;
use crate::error::Result;

type ScanFn = dyn Fn(&str) -> Result<Vec<Token>> + Send + Sync;

/// A scanner that delegates to a closure.
///
/// Copies of an `FnScanner` share the closure itself, which is immutable;
/// each dictionary still owns its own scanner value.
#[derive(Clone)]
pub struct FnScanner {
    scan_fn: Arc<ScanFn>,
}

impl FnScanner {
    /// Create a scanner from a closure returning tokens with offsets.
    pub fn new<F>(scan_fn: F) -> Self
    where
        F: Fn(&str) -> Result<Vec<Token>> + Send + Sync + 'static,
    {
        FnScanner {
            scan_fn: Arc::new(scan_fn),
        }
    }
}

impl fmt::Debug for FnScanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnScanner").finish_non_exhaustive()
    }
}

impl Scanner for FnScanner {
    fn scan(&self, text: &str) -> Result<Vec<Token>> {
        (self.scan_fn)(text)
    }

    fn name(&self) -> &'static str {
        "function"
    }

    fn clone_box(&self) -> Box<dyn Scanner> {
        Box::new(self.clone())
    }
}
