/// Identifies one started lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Hands out request tokens; only the most recent one is current.
#[derive(Debug, Default)]
pub struct RequestSequence {
    last: u64,
    current: Option<RequestToken>,
}

impl RequestSequence {
    /// Starts a new request and supersedes all previous ones.
    pub fn next_token(&mut self) -> RequestToken {
        self.last += 1;
        let token = RequestToken(self.last);
        self.current = Some(token);
        token
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.current == Some(token)
    }

    /// Marks the request as done so that a duplicate response is ignored.
    ///
    /// Returns `false` if the token has been superseded in the meantime.
    pub fn complete(&mut self, token: RequestToken) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.current = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_token_is_current() {
        let mut seq = RequestSequence::default();
        let a = seq.next_token();
        let b = seq.next_token();
        assert_ne!(a, b);
        assert!(!seq.is_current(a));
        assert!(seq.is_current(b));
    }

    #[test]
    fn complete_current_request_once() {
        let mut seq = RequestSequence::default();
        let a = seq.next_token();
        assert!(seq.complete(a));
        assert!(!seq.is_current(a));
        assert!(!seq.complete(a));
    }

    #[test]
    fn superseded_request_cannot_complete() {
        let mut seq = RequestSequence::default();
        let a = seq.next_token();
        let b = seq.next_token();
        assert!(!seq.complete(a));
        assert!(seq.complete(b));
    }

    #[test]
    fn tokens_are_not_reused_after_completion() {
        let mut seq = RequestSequence::default();
        let a = seq.next_token();
        assert!(seq.complete(a));
        let b = seq.next_token();
        assert_ne!(a, b);
        assert!(!seq.complete(a));
    }
}
