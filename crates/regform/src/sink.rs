// File: src/sink.rs
// Purpose: Where validated registrations go

use crate::record::RegistrationRecord;

/// Receives each record produced by a successful submit.
///
/// The form calls `submit` exactly once per successful attempt and never for a
/// rejected one. Any `FnMut(RegistrationRecord)` closure is a sink.
pub trait SubmissionSink {
    fn submit(&mut self, record: RegistrationRecord);
}

impl<F> SubmissionSink for F
where
    F: FnMut(RegistrationRecord),
{
    fn submit(&mut self, record: RegistrationRecord) {
        self(record)
    }
}

/// Emits records on the `tracing` info channel
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl SubmissionSink for TracingSink {
    fn submit(&mut self, record: RegistrationRecord) {
        tracing::info!(
            first_name = %record.first_name,
            last_name = %record.last_name,
            email = %record.email,
            contact = %record.contact,
            "registration submitted"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_sink() {
        let mut received = Vec::new();
        {
            let mut sink = |record: RegistrationRecord| received.push(record.email);
            sink.submit(RegistrationRecord {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                contact: "12345".to_string(),
                password: "secret1".to_string(),
                confirm_password: "secret1".to_string(),
            });
        }
        assert_eq!(received, vec!["ada@example.com".to_string()]);
    }
}
