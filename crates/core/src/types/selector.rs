//! Target selectors passed through to the console runner

use crate::impl_selector;

/// Target platform architecture used for test execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Arm,
    X86,
    X64,
}

impl_selector!(
    Platform, "platform",
    Arm => "ARM",
    X86 => "x86",
    X64 => "x64"
);

/// Target .NET Framework version used for test execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framework {
    Framework35,
    Framework40,
    Framework45,
}

impl_selector!(
    Framework, "framework",
    Framework35 => "framework35",
    Framework40 => "framework40",
    Framework45 => "framework45"
);
