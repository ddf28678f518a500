//! Regression tests for the turn engine.

mod enemy_tick;

mod support {
    pub(super) use super::super::test_support::*;
    pub(super) use super::super::*;
}
