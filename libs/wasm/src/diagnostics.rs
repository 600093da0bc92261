//! WASM-compatible diagnostic types.
//!
//! Turns generator and input errors into messages a JavaScript host can show.

use std::fmt;

use spring_mesh::MeshError;
use wasm_bindgen::prelude::*;

/// Diagnostic severity for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The shape was not produced.
    Error,
}

/// A diagnostic message for JavaScript.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // try { render_shape(json); } catch (message) { console.error(message); }
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    severity: Severity,
    message: String,
    hint: Option<String>,
}

#[wasm_bindgen]
impl Diagnostic {
    /// Returns the severity of the diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the diagnostic message.
    pub fn message(&self) -> String {
        self.message.clone()
    }

    /// Returns the hint, if any.
    pub fn hint(&self) -> Option<String> {
        self.hint.clone()
    }

    /// Converts this diagnostic to a plain JavaScript object.
    ///
    /// wasm-bindgen wrappers cannot cross a worker boundary; plain objects can.
    pub fn to_js_object(&self) -> Result<JsValue, JsValue> {
        use js_sys::{Object, Reflect};

        let obj = Object::new();
        Reflect::set(&obj, &"severity".into(), &JsValue::from(self.severity as i32))?;
        Reflect::set(&obj, &"message".into(), &JsValue::from_str(&self.message))?;
        if let Some(hint) = &self.hint {
            Reflect::set(&obj, &"hint".into(), &JsValue::from_str(hint))?;
        }
        Ok(JsValue::from(obj))
    }
}

impl Diagnostic {
    /// Creates an error diagnostic.
    pub fn error(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            hint,
        }
    }

    /// Replaces the hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Borrowed message, for host-side callers.
    pub fn message_str(&self) -> &str {
        &self.message
    }

    /// Borrowed hint, for host-side callers.
    pub fn hint_str(&self) -> Option<&str> {
        self.hint.as_deref()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " (hint: {hint})")?;
        }
        Ok(())
    }
}

impl From<MeshError> for Diagnostic {
    fn from(err: MeshError) -> Self {
        let hint = match &err {
            MeshError::DegenerateVector { .. } => {
                Some("directions and sweep tangents must have non-zero length".to_string())
            }
            MeshError::InvalidParameter { .. } => Some(
                "counts must be at least 1 (splits at least 3) and radii non-negative"
                    .to_string(),
            ),
            MeshError::InvalidTopology { .. } => None,
            MeshError::TooManyVertices { .. } | MeshError::TooManyTriangles { .. } => {
                Some("lower the ring counts or the split count".to_string())
            }
        };
        Self::error(err.to_string(), hint)
    }
}

impl From<serde_json::Error> for Diagnostic {
    fn from(err: serde_json::Error) -> Self {
        Self::error(
            format!("Invalid shape JSON: {err}"),
            Some(r#"expected an object like {"shape": "donut"} or an array of them"#.to_string()),
        )
    }
}
