//! Injected identifier generators.
//!
//! Identifiers are `PREFIX-<n>` with an optional zero-padded width:
//! vendors `VND-1001`, notifications `AP-0001`, assignments `ASN-0001`.

/// First vendor number handed out on a fresh roster.
pub const FIRST_VENDOR_NUMBER: u64 = 1001;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    prefix: String,
    next: u64,
    width: usize,
}

impl Sequence {
    pub fn new(prefix: impl Into<String>, next: u64, width: usize) -> Self {
        Self {
            prefix: prefix.into(),
            next,
            width,
        }
    }

    /// Vendor ids, continuing from a roster's persisted `next_id`.
    pub fn vendors(next: u64) -> Self {
        Self::new("VND", next, 0)
    }

    /// AP notification ids, continuing after `existing` logged notifications.
    pub fn notifications(existing: usize) -> Self {
        Self::new("AP", existing as u64 + 1, 4)
    }

    /// Assignment ids, continuing after `existing` logged assignments.
    pub fn assignments(existing: usize) -> Self {
        Self::new("ASN", existing as u64 + 1, 4)
    }

    /// The number the next call to [`next_id`](Self::next_id) will use.
    pub fn peek(&self) -> u64 {
        self.next
    }

    pub fn next_id(&mut self) -> String {
        let id = format!("{}-{:0width$}", self.prefix, self.next, width = self.width);
        self.next += 1;
        id
    }
}
