//! Delete confirmation: stage a record, confirm or cancel, report the outcome.

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DeleteStage<T> {
    #[default]
    Idle,
    /// Waiting for the user to confirm.
    Staged(T),
    /// The delete request is in flight.
    Deleting(T),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The list must be refetched.
    Deleted,
    /// The text goes to an error notification.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteFlow<T> {
    stage: DeleteStage<T>,
}

impl<T> Default for DeleteFlow<T> {
    fn default() -> Self {
        Self {
            stage: DeleteStage::Idle,
        }
    }
}

impl<T: Clone> DeleteFlow<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> &DeleteStage<T> {
        &self.stage
    }

    /// Record shown in the confirmation dialog.
    pub fn pending(&self) -> Option<&T> {
        match &self.stage {
            DeleteStage::Idle => None,
            DeleteStage::Staged(record) | DeleteStage::Deleting(record) => Some(record),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.stage, DeleteStage::Idle)
    }

    pub fn is_deleting(&self) -> bool {
        matches!(self.stage, DeleteStage::Deleting(_))
    }

    /// Replaces whatever was staged. Returns false while a delete is in flight.
    pub fn request(&mut self, record: T) -> bool {
        if self.is_deleting() {
            return false;
        }
        self.stage = DeleteStage::Staged(record);
        true
    }

    /// Dismisses the dialog without deleting. No effect once confirmed.
    pub fn cancel(&mut self) {
        if let DeleteStage::Staged(_) = self.stage {
            self.stage = DeleteStage::Idle;
        }
    }

    /// Moves the staged record to `Deleting` and returns it for the request.
    pub fn confirm(&mut self) -> Option<T> {
        match std::mem::take(&mut self.stage) {
            DeleteStage::Staged(record) => {
                self.stage = DeleteStage::Deleting(record.clone());
                Some(record)
            }
            other => {
                self.stage = other;
                None
            }
        }
    }

    pub fn finish<E: std::fmt::Display>(&mut self, result: Result<(), E>) -> DeleteOutcome {
        self.stage = DeleteStage::Idle;
        match result {
            Ok(()) => DeleteOutcome::Deleted,
            Err(err) => DeleteOutcome::Failed(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restage_replaces_previous_record() {
        let mut flow = DeleteFlow::new();
        assert!(flow.request("X"));
        assert!(flow.request("Y"));
        assert_eq!(flow.pending(), Some(&"Y"));

        assert_eq!(flow.confirm(), Some("Y"));
        assert!(flow.is_deleting());
        assert_eq!(flow.finish::<String>(Ok(())), DeleteOutcome::Deleted);
        assert_eq!(flow.stage(), &DeleteStage::Idle);
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let mut flow = DeleteFlow::new();
        flow.request(7);
        flow.cancel();
        assert!(!flow.is_open());
        assert_eq!(flow.confirm(), None);
    }

    #[test]
    fn test_failure_reports_message() {
        let mut flow = DeleteFlow::new();
        flow.request(1);
        flow.confirm();
        let outcome = flow.finish(Err("Record is referenced by 3 enrollments"));
        assert_eq!(
            outcome,
            DeleteOutcome::Failed("Record is referenced by 3 enrollments".to_string())
        );
        assert!(!flow.is_open());
    }

    #[test]
    fn test_in_flight_delete_is_not_replaced() {
        let mut flow = DeleteFlow::new();
        flow.request(1);
        flow.confirm();
        assert!(!flow.request(2));
        flow.cancel();
        assert_eq!(flow.stage(), &DeleteStage::Deleting(1));
        assert_eq!(flow.confirm(), None);
    }
}
