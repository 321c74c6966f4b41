// ABOUTME: Wizard step names and progressive group names
// ABOUTME: Steps are declared in wizard order by the step catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// "How do you feel today" step
pub const FOCUS: &str = "focus";
/// Session length, workout types, and equipment step
pub const SESSION: &str = "session";
/// Goals, limitations, and notes step
pub const PREFERENCES: &str = "preferences";

/// Energy, sleep, and stress check-in group
pub const GROUP_WELLNESS: &str = "wellness";
/// Goals and limitations group
pub const GROUP_PERSONAL: &str = "personal";
