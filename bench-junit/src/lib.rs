// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

pub mod command;
pub mod commands;
pub mod parser;
pub mod report;
pub mod utils;

pub use crate::parser::errors::{Diagnostic, Error};
pub use crate::parser::{parse, ParseOptions, Translation};
pub use crate::report::{OutputFormatType, TestSuites};
