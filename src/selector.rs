//! Maps the `user` form field to a target sheet

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::AppError;
use crate::sheets::RowWriter;

/// Known users, each owning one worksheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetUser {
    /// First worksheet
    January,
    /// Second worksheet
    Matt,
}

impl SheetUser {
    pub const ALL: [SheetUser; 2] = [SheetUser::January, SheetUser::Matt];

    pub fn as_str(self) -> &'static str {
        match self {
            SheetUser::January => "january",
            SheetUser::Matt => "matt",
        }
    }

    /// 0-based worksheet position in the spreadsheet
    pub fn worksheet_index(self) -> usize {
        match self {
            SheetUser::January => 0,
            SheetUser::Matt => 1,
        }
    }
}

impl FromStr for SheetUser {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("january") {
            Ok(SheetUser::January)
        } else if s.eq_ignore_ascii_case("matt") {
            Ok(SheetUser::Matt)
        } else {
            Err(AppError::InvalidSheet)
        }
    }
}

impl fmt::Display for SheetUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Holds one writer per user
#[derive(Clone)]
pub struct SheetRouter {
    january: Arc<RowWriter>,
    matt: Arc<RowWriter>,
}

impl SheetRouter {
    pub fn new(january: Arc<RowWriter>, matt: Arc<RowWriter>) -> Self {
        Self { january, matt }
    }

    pub fn sheet_for(&self, user: SheetUser) -> &Arc<RowWriter> {
        match user {
            SheetUser::January => &self.january,
            SheetUser::Matt => &self.matt,
        }
    }

    /// Parse a raw username and return its sheet
    pub fn select(&self, raw_user: &str) -> Result<(SheetUser, &Arc<RowWriter>), AppError> {
        let user: SheetUser = raw_user.parse()?;
        Ok((user, self.sheet_for(user)))
    }
}
