/// Identifies an issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    #[must_use]
    pub const fn number(self) -> u64 {
        self.0
    }
}

/// Monotonic request counter.
///
/// Responses may arrive in any order,
/// only the one belonging to the latest ticket is current.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    #[must_use]
    pub const fn new() -> Self {
        Self { latest: 0 }
    }

    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    #[must_use]
    pub const fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }

    /// Makes every ticket issued so far stale.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}
