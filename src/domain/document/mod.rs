// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/mod.rs
//
// Document operations independent of any decoder.

pub mod operations;
