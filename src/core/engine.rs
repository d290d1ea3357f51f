//! Operation processing engine
//!
//! This module provides the OperationEngine that applies parsed script
//! records to an `AccountManager`. The engine only dispatches; every rule
//! (amount guards, lookup, loan cap) is enforced by the manager and the
//! account it delegates to.

use crate::core::account_manager::AccountManager;
use crate::types::{BankError, OperationRecord, OperationType};
use tracing::trace;

pub struct OperationEngine {
    account_manager: AccountManager,
}

impl OperationEngine {
    pub fn new() -> Self {
        OperationEngine {
            account_manager: AccountManager::new(),
        }
    }

    /// Apply one record
    ///
    /// Returns the manager's outcome: `Ok(true)` when the operation took
    /// effect, `Ok(false)` when it was declined (unknown holder, insufficient
    /// funds, loan cap, repayment above the loan). Opening an account
    /// returns `Ok(true)` on success.
    pub fn process(&mut self, record: OperationRecord) -> Result<bool, BankError> {
        trace!(?record, "processing operation");

        let holder = record.holder.as_str();
        match record.op {
            OperationType::Open => self
                .account_manager
                .add_account(holder, record.amount)
                .map(|()| true),
            OperationType::Deposit => self.account_manager.deposit(holder, record.amount),
            OperationType::Withdraw => self.account_manager.withdraw(holder, record.amount),
            OperationType::ApproveLoan => self.account_manager.approve_loan(holder, record.amount),
            OperationType::RepayLoan => self.account_manager.repay_loan(holder, record.amount),
        }
    }

    pub fn manager(&self) -> &AccountManager {
        &self.account_manager
    }
}

impl Default for OperationEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn record(op: OperationType, holder: &str, amount: i64) -> OperationRecord {
        OperationRecord {
            op,
            holder: holder.to_string(),
            amount: Decimal::from(amount),
        }
    }

    #[test]
    fn test_open_creates_account() {
        let mut engine = OperationEngine::new();

        let result = engine.process(record(OperationType::Open, "Alice", 1000));

        assert_eq!(result, Ok(true));
        assert_eq!(engine.manager().balance("Alice"), Some(Decimal::from(1000)));
    }

    #[test]
    fn test_open_with_absent_holder_fails() {
        let mut engine = OperationEngine::new();

        let result = engine.process(record(OperationType::Open, "", 1000));

        assert_eq!(result, Err(BankError::NullReference));
        assert!(engine.manager().accounts().is_empty());
    }

    #[test]
    fn test_full_operation_sequence() {
        let mut engine = OperationEngine::new();

        engine.process(record(OperationType::Open, "Alice", 1000)).unwrap();
        engine.process(record(OperationType::Open, "Bob", 500)).unwrap();

        assert_eq!(engine.process(record(OperationType::Deposit, "Alice", 200)), Ok(true));
        assert_eq!(engine.process(record(OperationType::Withdraw, "Bob", 300)), Ok(true));
        assert_eq!(engine.process(record(OperationType::ApproveLoan, "Alice", 400)), Ok(true));
        assert_eq!(engine.process(record(OperationType::RepayLoan, "Alice", 200)), Ok(true));

        let manager = engine.manager();
        assert_eq!(manager.balance("Alice"), Some(Decimal::from(1200)));
        assert_eq!(manager.balance("Bob"), Some(Decimal::from(200)));
        assert_eq!(manager.loan("Alice"), Some(Decimal::from(200)));
        assert_eq!(manager.total_deposits(), Decimal::from(1200));
        assert_eq!(manager.total_balances(), Ok(Decimal::from(1400)));
    }

    #[test]
    fn test_declined_operations_return_false() {
        let mut engine = OperationEngine::new();
        engine.process(record(OperationType::Open, "Alice", 1000)).unwrap();

        assert_eq!(engine.process(record(OperationType::Deposit, "Bob", 10)), Ok(false));
        assert_eq!(engine.process(record(OperationType::Withdraw, "Alice", 5000)), Ok(false));
        assert_eq!(engine.process(record(OperationType::ApproveLoan, "Alice", 1001)), Ok(false));
        assert_eq!(engine.process(record(OperationType::RepayLoan, "Alice", 1)), Ok(false));

        assert_eq!(engine.manager().total_deposits(), Decimal::from(1000));
    }

    #[test]
    fn test_invalid_amount_propagates_error() {
        let mut engine = OperationEngine::new();
        engine.process(record(OperationType::Open, "Alice", 1000)).unwrap();

        let result = engine.process(record(OperationType::Deposit, "Alice", -5));

        assert!(matches!(result, Err(BankError::InvalidArgument { .. })));
    }
}
