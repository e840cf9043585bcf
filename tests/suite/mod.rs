//! Integration test suite modules

mod limits;
mod outcomes;
mod reset;
