// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Errors raised while resolving vertex layouts.

use super::{VertexElement, VertexFormat};
use std::fmt;

/// An error related to a vertex layout that cannot serve a requested pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The layout does not contain an attribute the pass needs.
    MissingElement {
        /// The name of the layout that was searched.
        layout: &'static str,
        /// The attribute that was not found.
        element: VertexElement,
    },
    /// The layout stores an attribute in a format the pass cannot read or write.
    FormatMismatch {
        /// The name of the layout that was searched.
        layout: &'static str,
        /// The attribute with the unexpected format.
        element: VertexElement,
        /// The format the pass needs.
        expected: VertexFormat,
        /// The format found in the layout.
        actual: VertexFormat,
    },
    /// The destination layout does not begin with the source layout's attributes,
    /// so the base fields cannot be copied verbatim.
    IncompatiblePrefix {
        /// The name of the source layout.
        source: &'static str,
        /// The name of the destination layout.
        destination: &'static str,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::MissingElement { layout, element } => {
                write!(f, "Vertex layout '{layout}' has no {element:?} attribute")
            }
            LayoutError::FormatMismatch {
                layout,
                element,
                expected,
                actual,
            } => write!(
                f,
                "Vertex layout '{layout}' stores {element:?} as {actual:?}, expected {expected:?}"
            ),
            LayoutError::IncompatiblePrefix {
                source,
                destination,
            } => {
                write!(
                    f,
                    "Vertex layout '{destination}' does not start with the attributes of '{source}'"
                )
            }
        }
    }
}

impl std::error::Error for LayoutError {}
