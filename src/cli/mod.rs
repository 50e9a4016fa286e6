//! CLI infrastructure for the eightpuzzle toolkit
//!
//! This module provides the command-line interface for solving boards,
//! generating scrambles, and comparing search strategies.

pub mod commands;
pub mod output;
