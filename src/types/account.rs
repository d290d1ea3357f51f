//! Account-related types for the banking simulator
//!
//! This module defines the Account structure together with the
//! single-account operations. Each operation is a guarded adjustment of one
//! field; cross-account bookkeeping lives in the `AccountManager`.

use super::error::BankError;
use rust_decimal::Decimal;

/// A single holder's account
///
/// Fields are private so that the holder name stays immutable and the
/// balances can only move through the guarded operations below.
///
/// Invariant: `balance >= 0` and `loan_balance >= 0` after every operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    holder_name: String,
    balance: Decimal,
    loan_balance: Decimal,
}

impl Account {
    /// Create a new account with an initial deposit and no loan
    ///
    /// An empty holder name is treated as an absent holder.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `initial_deposit` is negative (checked first)
    /// - `NullReference` if the holder name is absent
    pub fn new(holder_name: &str, initial_deposit: Decimal) -> Result<Self, BankError> {
        if initial_deposit < Decimal::ZERO {
            return Err(BankError::must_not_be_negative(
                "initial deposit",
                initial_deposit,
            ));
        }
        if holder_name.is_empty() {
            return Err(BankError::NullReference);
        }

        Ok(Account {
            holder_name: holder_name.to_string(),
            balance: initial_deposit,
            loan_balance: Decimal::ZERO,
        })
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Outstanding amount owed to the bank
    pub fn loan_balance(&self) -> Decimal {
        self.loan_balance
    }

    /// Credit the balance
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `amount <= 0`
    /// - `ArithmeticOverflow` if the balance cannot hold the result
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::must_be_positive("deposit", amount));
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("deposit", &self.holder_name))?;

        Ok(())
    }

    /// Debit the balance
    ///
    /// Returns `Ok(false)` without touching the balance when the amount
    /// exceeds the current balance.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `amount <= 0`
    pub fn withdraw(&mut self, amount: Decimal) -> Result<bool, BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::must_be_positive("withdraw", amount));
        }
        if amount > self.balance {
            return Ok(false);
        }

        self.balance -= amount;
        Ok(true)
    }

    /// Increase the loan balance
    ///
    /// No upper bound is enforced here; the manager caps loans by the
    /// bank's deposit pool.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `amount <= 0`
    /// - `ArithmeticOverflow` if the loan balance cannot hold the result
    pub fn approve_loan(&mut self, amount: Decimal) -> Result<(), BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::must_be_positive("loan", amount));
        }

        self.loan_balance = self
            .loan_balance
            .checked_add(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("loan", &self.holder_name))?;

        Ok(())
    }

    /// Decrease the loan balance
    ///
    /// Returns `Ok(false)` without touching the loan when the amount exceeds
    /// what is owed.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `amount <= 0`
    pub fn repay_loan(&mut self, amount: Decimal) -> Result<bool, BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::must_be_positive("repayment", amount));
        }
        if amount > self.loan_balance {
            return Ok(false);
        }

        self.loan_balance -= amount;
        Ok(true)
    }
}
