// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Modes of operation layered over raw block engines.

mod ctr;

pub use ctr::*;

#[cfg(test)]
mod tests;
