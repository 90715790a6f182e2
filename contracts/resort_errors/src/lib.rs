#![no_std]

use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups errors by the kind of precondition they report.
/// @dev    Off-chain consumers should switch on this value first, then on the
///         specific `ContractError` code for fine-grained handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup and initialization errors (codes 1-99).
    Initialization,
    /// Caller lacks the required role (codes 100-199).
    Authorization,
    /// Operation inconsistent with the current ledger state (codes 200-299).
    State,
    /// Allowance, balance or unlockable stake too small (codes 300-399).
    Resource,
    /// System-wide gate closed (codes 400-499).
    Availability,
    /// Malformed input (codes 500-599).
    Validation,
    /// Safe-math errors (codes 700-799).
    Arithmetic,
}

/// @title  ContractError
/// @notice Canonical error enum for every facet of the diamond.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///         Contracts abort with `description()` as the panic reason so callers
///         can assert on the violated precondition.
///
/// Error Code Layout:
///   1  -  99  : Initialization
///   100 - 199 : Authorization
///   200 - 299 : State
///   300 - 399 : Resource
///   400 - 499 : Availability
///   500 - 599 : Validation
///   700 - 799 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum ContractError {
    // --- Initialization (1-99) ---
    /// Contract has not been initialized yet.
    NotInitialized = 1,

    /// Contract has already been initialized and cannot be re-initialized.
    AlreadyInitialized = 2,

    /// Sale has no quote token, treasury or curve configured.
    SaleNotConfigured = 3,

    // --- Authorization (100-199) ---
    /// Caller does not hold the role the operation requires.
    Unauthorized = 100,

    // --- State (200-299) ---
    /// A year with this ordinal is already registered.
    YearAlreadyExists = 200,

    /// No year with this ordinal is registered.
    YearNotFound = 201,

    /// Year is referenced by bookings and cannot be removed or re-ranged.
    YearInUse = 202,

    /// Target year is disabled or not registered.
    YearDisabled = 203,

    /// Date is at or before the current day.
    PastDate = 204,

    /// Day is already booked by this owner (or repeated in the batch).
    BookingAlreadyExists = 205,

    /// Day is not booked by this owner.
    BookingNotFound = 206,

    /// Sale curve cannot change once tokens have been sold.
    CurveLocked = 207,

    /// Purchase would sell past the configured supply cap.
    SaleCapExceeded = 208,

    /// Reentrant call into a guarded operation.
    ReentrancyDetected = 209,

    // --- Resource (300-399) ---
    /// Allowance granted to the diamond is below the amount to pull.
    InsufficientAllowance = 300,

    /// Token balance is below the amount to transfer.
    InsufficientBalance = 301,

    /// Requested amount exceeds the stake whose lock window has elapsed.
    InsufficientUnlockableBalance = 302,

    // --- Availability (400-499) ---
    /// The pause gate is engaged.
    Paused = 400,

    /// Unpause requested while the gate is open.
    NotPaused = 401,

    // --- Validation (500-599) ---
    /// Amount must be strictly positive.
    InvalidAmount = 500,

    /// Day range does not match the leap flag (365 / 366 days).
    InvalidYear = 501,

    /// Day of year outside 1..=365 (366 for leap years).
    InvalidDayOfYear = 502,

    /// Booking batch carries no dates.
    EmptyBatch = 503,

    /// Curve parameters out of range.
    InvalidCurve = 504,

    // --- Arithmetic (700-799) ---
    /// Integer overflow detected during a checked arithmetic operation.
    Overflow = 700,

    /// Integer underflow detected during a checked arithmetic operation.
    Underflow = 701,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every ContractError variant.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return The reason string contracts abort with.
    fn description(&self) -> &'static str;
}

impl ErrorExt for ContractError {
    fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized
            | ContractError::AlreadyInitialized
            | ContractError::SaleNotConfigured => ErrorCategory::Initialization,

            ContractError::Unauthorized => ErrorCategory::Authorization,

            ContractError::YearAlreadyExists
            | ContractError::YearNotFound
            | ContractError::YearInUse
            | ContractError::YearDisabled
            | ContractError::PastDate
            | ContractError::BookingAlreadyExists
            | ContractError::BookingNotFound
            | ContractError::CurveLocked
            | ContractError::SaleCapExceeded
            | ContractError::ReentrancyDetected => ErrorCategory::State,

            ContractError::InsufficientAllowance
            | ContractError::InsufficientBalance
            | ContractError::InsufficientUnlockableBalance => ErrorCategory::Resource,

            ContractError::Paused | ContractError::NotPaused => ErrorCategory::Availability,

            ContractError::InvalidAmount
            | ContractError::InvalidYear
            | ContractError::InvalidDayOfYear
            | ContractError::EmptyBatch
            | ContractError::InvalidCurve => ErrorCategory::Validation,

            ContractError::Overflow | ContractError::Underflow => ErrorCategory::Arithmetic,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "not initialized",
            ContractError::AlreadyInitialized => "already initialized",
            ContractError::SaleNotConfigured => "sale not configured",
            ContractError::Unauthorized => "AccessControl: missing role",
            ContractError::YearAlreadyExists => "year already exists",
            ContractError::YearNotFound => "year does not exist",
            ContractError::YearInUse => "year is referenced by bookings",
            ContractError::YearDisabled => "year is disabled or not registered",
            ContractError::PastDate => "date is in the past",
            ContractError::BookingAlreadyExists => "booking already exists",
            ContractError::BookingNotFound => "booking does not exist",
            ContractError::CurveLocked => "sale curve is locked once tokens are sold",
            ContractError::SaleCapExceeded => "sale supply cap exceeded",
            ContractError::ReentrancyDetected => "reentrancy detected",
            ContractError::InsufficientAllowance => "insufficient token allowance",
            ContractError::InsufficientBalance => "insufficient token balance",
            ContractError::InsufficientUnlockableBalance => "not enough unlockable balance",
            ContractError::Paused => "Pausable: paused",
            ContractError::NotPaused => "Pausable: not paused",
            ContractError::InvalidAmount => "amount must be positive",
            ContractError::InvalidYear => "year range does not match leap flag",
            ContractError::InvalidDayOfYear => "day of year out of range",
            ContractError::EmptyBatch => "empty booking batch",
            ContractError::InvalidCurve => "invalid sale curve",
            ContractError::Overflow => "arithmetic overflow",
            ContractError::Underflow => "arithmetic underflow",
        }
    }
}

/// Abort the current invocation with the error's reason string.
///
/// The host rolls back every write made by the failed call.
#[inline]
pub fn fail(err: ContractError) -> ! {
    panic!("{}", err.description())
}
