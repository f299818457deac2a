//! Leveled debug assertions. The level is fixed at compile time: release
//! builds keep only the simple checks, test builds (and the `debug-checks`
//! feature) enable everything up to extreme, which includes re-validating the
//! set-triple invariants after every store mutation.

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const PERSIMMON_ASSERT_LEVEL_DEFINITION: u8 = PERSIMMON_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const PERSIMMON_ASSERT_LEVEL_DEFINITION: u8 = PERSIMMON_ASSERT_EXTREME;

pub const PERSIMMON_ASSERT_SIMPLE: u8 = 1;
pub const PERSIMMON_ASSERT_MODERATE: u8 = 2;
pub const PERSIMMON_ASSERT_ADVANCED: u8 = 3;
pub const PERSIMMON_ASSERT_EXTREME: u8 = 4;

#[macro_export]
#[doc(hidden)]
macro_rules! persimmon_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::PERSIMMON_ASSERT_LEVEL_DEFINITION >= $crate::asserts::PERSIMMON_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! persimmon_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::PERSIMMON_ASSERT_LEVEL_DEFINITION >= $crate::asserts::PERSIMMON_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! persimmon_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::PERSIMMON_ASSERT_LEVEL_DEFINITION >= $crate::asserts::PERSIMMON_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! persimmon_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::PERSIMMON_ASSERT_LEVEL_DEFINITION >= $crate::asserts::PERSIMMON_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! persimmon_assert_extreme {
    ($($arg:tt)*) => {
        if $crate::asserts::PERSIMMON_ASSERT_LEVEL_DEFINITION >= $crate::asserts::PERSIMMON_ASSERT_EXTREME {
            assert!($($arg)*);
        }
    };
}
