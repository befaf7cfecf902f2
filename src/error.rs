// Copyright (c) 2023-2024  The heatcost developers

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

/*!
Errors
======

Error type for parameter handling. The calculation core itself is infallible: only reading,
converting and validating parameters at the boundary may fail.
*/

use std::fmt;

/// Error in the interpretation or validation of input parameters
#[derive(Debug)]
pub enum HeatCostError {
    /// Text that could not be interpreted (parameter line, number or label)
    ParseError(String),
    /// Parameter with a wrong kind of value or outside of its domain
    WrongInput(String),
    /// Parameter document in JSON format that could not be decoded
    Json(String),
}

impl fmt::Display for HeatCostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use HeatCostError::*;
        match self {
            ParseError(v) => write!(f, "Could not parse \"{}\"", v),
            WrongInput(desc) => write!(f, "Wrong input: {}", desc),
            Json(desc) => write!(f, "Wrong JSON parameter document: {}", desc),
        }
    }
}

impl std::error::Error for HeatCostError {}

impl From<serde_json::Error> for HeatCostError {
    fn from(err: serde_json::Error) -> Self {
        HeatCostError::Json(err.to_string())
    }
}

/// Result type with the crate error
pub type Result<T> = std::result::Result<T, HeatCostError>;
