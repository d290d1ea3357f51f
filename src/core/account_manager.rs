//! Account management module
//!
//! This module provides the `AccountManager` struct which owns every account
//! and keeps the bank-wide total of deposits.
//!
//! The AccountManager is responsible for:
//! - Opening accounts (with a stricter initial deposit rule than `Account`)
//! - Locating accounts by holder name
//! - Delegating balance and loan changes to the located account
//! - Updating the total deposits only after the account-level change succeeds
//!
//! # Lookup
//!
//! Accounts are kept in insertion order and located by a linear scan with
//! exact name equality. Duplicate holder names are accepted; only the first
//! account with a given name is ever reachable.
//!
//! # Known Inconsistency
//!
//! Approving a loan draws the amount from the total deposits but does not
//! credit the borrower's balance. After a loan, `total_deposits()` is lower
//! than `total_balances()` by the outstanding loans. Repayments move money
//! back into the pool from outside any account balance.

use crate::types::{Account, BankError};
use rust_decimal::Decimal;
use tracing::debug;

/// Owns all accounts and the bank's deposit pool
pub struct AccountManager {
    /// Accounts in insertion order
    accounts: Vec<Account>,
    /// Money available to the bank (not strictly the sum of balances)
    total_deposits: Decimal,
}

impl AccountManager {
    /// Create a new AccountManager with no accounts and an empty deposit pool
    pub fn new() -> Self {
        AccountManager {
            accounts: Vec::new(),
            total_deposits: Decimal::ZERO,
        }
    }

    /// Index of the first account held by `holder_name`
    fn position(&self, holder_name: &str) -> Option<usize> {
        self.accounts
            .iter()
            .position(|account| account.holder_name() == holder_name)
    }

    fn find_account(&self, holder_name: &str) -> Option<&Account> {
        self.position(holder_name).map(|index| &self.accounts[index])
    }

    /// Open a new account
    ///
    /// Unlike `Account::new`, a zero initial deposit is rejected here.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `initial_deposit <= 0`
    /// - `NullReference` if the holder name is absent
    /// - `ArithmeticOverflow` if the deposit pool cannot hold the result
    pub fn add_account(
        &mut self,
        holder_name: &str,
        initial_deposit: Decimal,
    ) -> Result<(), BankError> {
        if initial_deposit <= Decimal::ZERO {
            return Err(BankError::must_be_positive(
                "initial deposit",
                initial_deposit,
            ));
        }

        let account = Account::new(holder_name, initial_deposit)?;
        let new_total = self
            .total_deposits
            .checked_add(initial_deposit)
            .ok_or_else(|| BankError::arithmetic_overflow("open", holder_name))?;

        self.accounts.push(account);
        self.total_deposits = new_total;

        debug!(holder = holder_name, %initial_deposit, "account opened");
        Ok(())
    }

    /// Deposit into an existing account
    ///
    /// Returns `Ok(false)` if no account matches `holder_name`.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `amount < 0`, or if `amount == 0` and the
    ///   account exists (rejected by `Account::deposit`)
    /// - `ArithmeticOverflow` if the balance or the pool would overflow
    pub fn deposit(&mut self, holder_name: &str, amount: Decimal) -> Result<bool, BankError> {
        if amount < Decimal::ZERO {
            return Err(BankError::must_not_be_negative("deposit", amount));
        }
        let Some(index) = self.position(holder_name) else {
            debug!(holder = holder_name, "deposit declined: no such account");
            return Ok(false);
        };

        let new_total = self
            .total_deposits
            .checked_add(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("deposit", holder_name))?;

        self.accounts[index].deposit(amount)?;
        self.total_deposits = new_total;

        debug!(holder = holder_name, %amount, "deposit applied");
        Ok(true)
    }

    /// Withdraw from an existing account
    ///
    /// Returns `Ok(false)` if no account matches or the balance is
    /// insufficient; the deposit pool is untouched in both cases.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `amount < 0`, or if `amount == 0` and the
    ///   account exists
    /// - `ArithmeticOverflow` if the pool would overflow, which only happens
    ///   once loans have driven it far below zero
    pub fn withdraw(&mut self, holder_name: &str, amount: Decimal) -> Result<bool, BankError> {
        if amount < Decimal::ZERO {
            return Err(BankError::must_not_be_negative("withdraw", amount));
        }
        let Some(index) = self.position(holder_name) else {
            debug!(holder = holder_name, "withdraw declined: no such account");
            return Ok(false);
        };

        let new_total = self
            .total_deposits
            .checked_sub(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("withdraw", holder_name))?;

        if !self.accounts[index].withdraw(amount)? {
            debug!(holder = holder_name, %amount, "withdraw declined: insufficient funds");
            return Ok(false);
        }
        self.total_deposits = new_total;

        debug!(holder = holder_name, %amount, "withdraw applied");
        Ok(true)
    }

    /// Approve a loan for an existing account
    ///
    /// Loans are capped by the bank's total deposits, not by the borrower's
    /// balance. On success the loan is recorded and the pool shrinks by
    /// `amount`, but the borrower's balance is left as it was.
    ///
    /// Returns `Ok(false)` if no account matches or `amount` exceeds the
    /// total deposits.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `amount < 0`, or if `amount == 0` and the
    ///   account exists
    /// - `ArithmeticOverflow` if the pool would overflow
    pub fn approve_loan(&mut self, holder_name: &str, amount: Decimal) -> Result<bool, BankError> {
        if amount < Decimal::ZERO {
            return Err(BankError::must_not_be_negative("loan", amount));
        }
        let Some(index) = self.position(holder_name) else {
            debug!(holder = holder_name, "loan declined: no such account");
            return Ok(false);
        };
        if amount > self.total_deposits {
            debug!(
                holder = holder_name,
                %amount,
                total_deposits = %self.total_deposits,
                "loan declined: exceeds total deposits"
            );
            return Ok(false);
        }

        let new_total = self
            .total_deposits
            .checked_sub(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("loan", holder_name))?;

        self.accounts[index].approve_loan(amount)?;
        self.total_deposits = new_total;

        debug!(holder = holder_name, %amount, "loan approved");
        Ok(true)
    }

    /// Repay part of an existing loan
    ///
    /// Returns `Ok(false)` if no account matches or the repayment exceeds the
    /// outstanding loan.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `amount < 0`, or if `amount == 0` and the
    ///   account exists
    /// - `ArithmeticOverflow` if the pool would overflow
    pub fn repay_loan(&mut self, holder_name: &str, amount: Decimal) -> Result<bool, BankError> {
        if amount < Decimal::ZERO {
            return Err(BankError::must_not_be_negative("repayment", amount));
        }
        let Some(index) = self.position(holder_name) else {
            debug!(holder = holder_name, "repayment declined: no such account");
            return Ok(false);
        };

        let new_total = self
            .total_deposits
            .checked_add(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("repayment", holder_name))?;

        if !self.accounts[index].repay_loan(amount)? {
            debug!(holder = holder_name, %amount, "repayment declined: exceeds loan");
            return Ok(false);
        }
        self.total_deposits = new_total;

        debug!(holder = holder_name, %amount, "repayment applied");
        Ok(true)
    }

    /// Money currently available to the bank
    pub fn total_deposits(&self) -> Decimal {
        self.total_deposits
    }

    /// Balance of the first account held by `holder_name`, or `None`
    pub fn balance(&self, holder_name: &str) -> Option<Decimal> {
        self.find_account(holder_name).map(Account::balance)
    }

    /// Outstanding loan of the first account held by `holder_name`, or `None`
    pub fn loan(&self, holder_name: &str) -> Option<Decimal> {
        self.find_account(holder_name).map(Account::loan_balance)
    }

    /// All accounts in insertion order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Sum of every account balance
    ///
    /// Differs from `total_deposits()` once loans have been approved.
    ///
    /// # Errors
    ///
    /// `ArithmeticOverflow` if the sum does not fit in a `Decimal`. Loans do
    /// not draw on balances, so balances can add up to more than the pool
    /// ever held.
    pub fn total_balances(&self) -> Result<Decimal, BankError> {
        self.accounts.iter().try_fold(Decimal::ZERO, |total, account| {
            total.checked_add(account.balance()).ok_or_else(|| {
                BankError::arithmetic_overflow("total balances", account.holder_name())
            })
        })
    }
}

impl Default for AccountManager {
    fn default() -> Self {
        Self::new()
    }
}
